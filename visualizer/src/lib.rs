//! Draws a [`timings::Dataset`] as a line through all measurements with a
//! marker on every point, using [plotters](https://docs.rs/plotters).
//!
//! There is no global figure: a [`visualizer::TimesChart`] is built for one
//! dataset and one [`style::PlotStyle`], drawn onto a drawing area owned by
//! the caller, and dropped afterwards.
//!
//! ```no_run
//! use timings::reader::read_times;
//! use visualizer::style::PlotStyle;
//!
//! let dataset = read_times("times.txt").unwrap();
//! let style = PlotStyle::default();
//! visualizer::save(&dataset, &style, "plot.png").unwrap();
//! #[cfg(feature = "window")]
//! visualizer::show(&dataset, &style).unwrap(); // blocks until the window is closed
//! ```

mod error;
pub mod style;
pub mod visualizer;
#[cfg(feature = "window")]
mod window;

pub use error::PlotError;
pub use visualizer::{save, TimesChart};
#[cfg(feature = "window")]
pub use window::show;
