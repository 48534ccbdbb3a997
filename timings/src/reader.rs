use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::{debug, info};

use crate::dataset::{Dataset, Measurement};
use crate::error::ReadError;

/// # Timings reader
/// Opens the file at `path` and parses every line into a [`Measurement`].
/// The file is closed again before this function returns.
///
/// * `path` - Location of the timings file, e.g. `times.txt`
pub fn read_times<P: AsRef<Path>>(path: P) -> Result<Dataset, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_times(BufReader::new(file)).map_err(|e| match e {
        ReadError::Io { source, .. } => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!("read {} measurements from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parses timings from any buffered source. Blank lines are skipped, every
/// other line must be a `size time` pair.
pub fn parse_times<R: BufRead>(reader: R) -> Result<Dataset, ReadError> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) => parse_line(&line, idx + 1).transpose(),
            Err(source) if source.kind() == ErrorKind::InvalidData => {
                Some(Err(ReadError::Encoding { line: idx + 1 }))
            }
            Err(source) => Some(Err(ReadError::Io {
                path: Default::default(),
                source,
            })),
        })
        .collect()
}

/// Parses a single line. Returns `Ok(None)` for lines holding only whitespace.
///
/// * `line_number` - 1-based, only used for error reporting
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Measurement>, ReadError> {
    let tokens = line.split_whitespace().collect::<Vec<&str>>();
    if tokens.is_empty() {
        debug!("skipping blank line {line_number}");
        return Ok(None);
    }
    if tokens.len() != 2 {
        return Err(ReadError::Arity {
            line: line_number,
            found: tokens.len(),
        });
    }

    let parse = |token: &str| {
        token.parse::<i64>().map_err(|source| ReadError::Parse {
            line: line_number,
            token: token.to_string(),
            source,
        })
    };
    Ok(Some(Measurement::new(parse(tokens[0])?, parse(tokens[1])?)))
}

/// Writes one `size time` line per measurement.
pub fn write_times<W: Write>(dataset: &Dataset, mut writer: W) -> std::io::Result<()> {
    for m in dataset {
        writeln!(writer, "{} {}", m.size, m.time)?;
    }
    writer.flush()
}

/// # Timings saver
/// Creates (or truncates) the file at `path` and writes the dataset into it
/// in the format [`read_times`] understands.
pub fn save_times<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<(), ReadError> {
    let path = path.as_ref();
    let io_err = |source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    write_times(dataset, BufWriter::new(file)).map_err(io_err)?;
    debug!("saved {} measurements to {}", dataset.len(), path.display());
    Ok(())
}
