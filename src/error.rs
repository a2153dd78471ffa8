use thiserror::Error;

#[derive(Debug, Error)]
pub enum TotalsError {
    #[error("Malformed meal plan at `{path}`: {reason}")]
    MalformedShape { path: String, reason: String },

    #[error("Non-numeric nutrient value at `{path}`: {value}")]
    NonNumericValue { path: String, value: String },

    #[error("Nutrient total out of range at `{path}`: {nutrient}")]
    SumOverflow { path: String, nutrient: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TotalsError {
    pub(crate) fn shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TotalsError::MalformedShape {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TotalsError>;
