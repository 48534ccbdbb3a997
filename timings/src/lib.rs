//! This is the library that reads timing measurements from plain text files
//! into a [`dataset::Dataset`].
//!
//! # Quick Start
//!
//! A file like the following, one `size time` pair per line,
//!
//! ```text
//! 1000   12
//! 2000   25
//! 4000   61
//! ```
//!
//! can be loaded with [`reader::read_times`]:
//!
//! ```no_run
//! use timings::reader::read_times;
//!
//! let dataset = read_times("times.txt").unwrap();
//! let (sizes, times) = dataset.columns(); // index-aligned, in file order
//! println!("{:?} {:?}", sizes, times);
//! ```
//!
//! # File format
//!
//! | Rule            | Behaviour                                          |
//! |-----------------|----------------------------------------------------|
//! | Separator       | any run of whitespace                              |
//! | Tokens per line | exactly two, otherwise [`ReadError::Arity`]        |
//! | Token           | base-10 integer, optional sign, else [`ReadError::Parse`] |
//! | Blank lines     | skipped                                            |
//! | Empty file      | empty dataset                                      |
//!
//! Reading is all or nothing: on the first malformed line the whole read
//! aborts and no partial dataset is returned.
//!
//! The writer side ([`reader::write_times`], [`reader::save_times`]) produces
//! files in the same format, so a saved dataset reads back unchanged.

pub mod dataset;
mod error;
pub mod reader;

pub use dataset::{Dataset, Measurement};
pub use error::ReadError;
