use serde::{Deserialize, Serialize};
use std::slice::Iter;

/// A single `(size, time)` pair as read from one line of a timings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Measurement {
    /// Input size of the measured run.
    pub size: i64,
    /// Elapsed time of the measured run.
    pub time: i64,
}

impl Measurement {
    pub fn new(size: i64, time: i64) -> Self {
        Self { size, time }
    }
}

impl From<(i64, i64)> for Measurement {
    fn from((size, time): (i64, i64)) -> Self {
        Self { size, time }
    }
}

/// Ordered collection of measurements, in the order they appeared in the file.
///
/// A dataset is built once by the reader and never changes afterwards, so it
/// only hands out shared access to its measurements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    measurements: Vec<Measurement>,
}

impl Dataset {
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Measurement> {
        self.measurements.iter()
    }

    /// First components, in dataset order.
    pub fn sizes(&self) -> Vec<i64> {
        self.measurements.iter().map(|m| m.size).collect()
    }

    /// Second components, in dataset order.
    pub fn times(&self) -> Vec<i64> {
        self.measurements.iter().map(|m| m.time).collect()
    }

    /// Projects the dataset into two parallel sequences, `(sizes, times)`.
    /// Index `i` of both vectors belongs to the `i`-th measurement.
    pub fn columns(&self) -> (Vec<i64>, Vec<i64>) {
        self.measurements.iter().map(|m| (m.size, m.time)).unzip()
    }

    /// Returns the dataset as a JSON array of `{"size": _, "time": _}` objects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Vec<(i64, i64)>> for Dataset {
    fn from(pairs: Vec<(i64, i64)>) -> Self {
        Self::new(pairs.into_iter().map(Measurement::from).collect())
    }
}

impl FromIterator<Measurement> for Dataset {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Measurement;
    type IntoIter = Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
