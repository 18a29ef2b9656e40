use serde::{Deserialize, Serialize};

use crate::core::primitives::parse_timestamp;
use crate::error::{ChartError, ChartResult};

/// Index-aligned timestamp labels and values for one dataset.
///
/// Construction validates that both sequences have the same length, that
/// every label is a parseable timestamp and that timestamps never go
/// backwards. Deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries")]
pub struct TimeSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawTimeSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = ChartError;

    fn try_from(raw: RawTimeSeries) -> ChartResult<Self> {
        Self::new(raw.labels, raw.values)
    }
}

impl TimeSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> ChartResult<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }

        let mut previous = None;
        for (index, label) in labels.iter().enumerate() {
            let Some(timestamp) = parse_timestamp(label) else {
                return Err(ChartError::InvalidTimestamp {
                    index,
                    label: label.clone(),
                });
            };
            if previous.is_some_and(|prev| timestamp < prev) {
                return Err(ChartError::UnorderedTimestamps {
                    index,
                    label: label.clone(),
                });
            }
            previous = Some(timestamp);
        }

        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series value at index {index} must be finite"
            )));
        }

        Ok(Self { labels, values })
    }

    /// Convenience constructor for literal fixture tables.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> ChartResult<Self> {
        let (labels, values): (Vec<String>, Vec<f64>) = pairs
            .into_iter()
            .map(|(label, value)| (label.to_owned(), value))
            .unzip();
        Self::new(labels, values)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::empty()
    }
}
