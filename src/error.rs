use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series length mismatch: labels={labels}, values={values}")]
    LengthMismatch { labels: usize, values: usize },

    #[error("invalid timestamp at index {index}: `{label}`")]
    InvalidTimestamp { index: usize, label: String },

    #[error("timestamp at index {index} (`{label}`) is earlier than the previous one")]
    UnorderedTimestamps { index: usize, label: String },

    #[error("duplicate range label: `{0}`")]
    DuplicateRange(String),

    #[error("default range `{0}` is not present in the range table")]
    UnknownDefaultRange(String),

    #[error("invalid display format `{pattern}`: {reason}")]
    InvalidDisplayFormat { pattern: String, reason: String },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("dropdown control `{0}` not found")]
    MissingControl(String),

    #[error("no widget is bound to control `{0}`")]
    UnknownControl(String),

    #[error("dropdown control `{0}` has no selected option text")]
    EmptySelection(String),

    #[error("render failed for surface `{surface_id}`: {reason}")]
    Render { surface_id: String, reason: String },
}
