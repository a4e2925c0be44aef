use thiserror::Error;

/// Errors returned while loading a holiday list.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing or invalid top-level '{field}' array")]
    MissingSection { field: &'static str },
    #[error("holiday #{index}: field '{field}' {reason}")]
    MalformedDefinition {
        index: usize,
        field: &'static str,
        reason: String,
    },
    #[error("pattern #{index}: {reason}")]
    MalformedPattern { index: usize, reason: String },
}

impl ConfigError {
    /// Index of the offending holiday definition, if the error names one.
    pub fn definition_index(&self) -> Option<usize> {
        match self {
            ConfigError::MalformedDefinition { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color '{text}' (expected #RRGGBB)")]
    InvalidHex { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_index_names_malformed_definitions_only() {
        let malformed = ConfigError::MalformedDefinition {
            index: 4,
            field: "month",
            reason: "is missing".to_string(),
        };
        assert_eq!(malformed.definition_index(), Some(4));
        assert_eq!(
            ConfigError::MissingSection { field: "holiday" }.definition_index(),
            None
        );
        assert_eq!(
            ConfigError::MalformedPattern {
                index: 1,
                reason: "is empty".to_string(),
            }
            .definition_index(),
            None
        );
    }
}
