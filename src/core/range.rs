use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::TimeSeries;
use crate::error::{ChartError, ChartResult};

/// One selectable time range and the series it displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeOption {
    pub label: String,
    pub series: TimeSeries,
    /// Message announced to the user when this range is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl RangeOption {
    #[must_use]
    pub fn new(label: impl Into<String>, series: TimeSeries) -> Self {
        Self {
            label: label.into(),
            series,
            notice: None,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// Result of resolving selection text against a [`RangeTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub option: &'a RangeOption,
    /// `true` when the text did not name any entry and the default was used.
    pub fallback: bool,
}

/// Immutable label to range lookup with an explicit default entry.
///
/// Matching is exact and case-sensitive. Any text that does not name an
/// entry resolves to the default range; this is part of the contract and
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRangeTable", into = "RawRangeTable")]
pub struct RangeTable {
    options: IndexMap<String, RangeOption>,
    default_label: String,
}

#[derive(Serialize, Deserialize)]
struct RawRangeTable {
    ranges: Vec<RangeOption>,
    default: String,
}

impl TryFrom<RawRangeTable> for RangeTable {
    type Error = ChartError;

    fn try_from(raw: RawRangeTable) -> ChartResult<Self> {
        Self::new(raw.ranges, raw.default)
    }
}

impl From<RangeTable> for RawRangeTable {
    fn from(table: RangeTable) -> Self {
        Self {
            ranges: table.options.into_values().collect(),
            default: table.default_label,
        }
    }
}

impl RangeTable {
    pub fn new(
        ranges: impl IntoIterator<Item = RangeOption>,
        default_label: impl Into<String>,
    ) -> ChartResult<Self> {
        let default_label = default_label.into();
        let mut options = IndexMap::new();
        for option in ranges {
            if option.label.is_empty() {
                return Err(ChartError::InvalidData(
                    "range label must not be empty".to_owned(),
                ));
            }
            if options.contains_key(&option.label) {
                return Err(ChartError::DuplicateRange(option.label));
            }
            options.insert(option.label.clone(), option);
        }

        if !options.contains_key(&default_label) {
            return Err(ChartError::UnknownDefaultRange(default_label));
        }

        Ok(Self {
            options,
            default_label,
        })
    }

    /// Resolves selection text, falling back to the default range.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Resolution<'_> {
        match self.options.get(text) {
            Some(option) => Resolution {
                option,
                fallback: false,
            },
            None => Resolution {
                option: self.default_option(),
                fallback: true,
            },
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&RangeOption> {
        self.options.get(label)
    }

    #[must_use]
    pub fn default_option(&self) -> &RangeOption {
        // Presence of the default label is checked in `new` and the map is
        // never mutated afterwards.
        &self.options[self.default_label.as_str()]
    }

    #[must_use]
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.options.keys().map(String::as_str)
    }

    pub fn options(&self) -> impl Iterator<Item = &RangeOption> + '_ {
        self.options.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize range table: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse range table: {e}")))
    }
}
