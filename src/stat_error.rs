/// Error type for the stat system
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    /// The initialization source was missing or held no rows
    Configuration { details: String },

    /// Stat not found
    StatNotFound { name: String },
}

impl StatError {
    pub(crate) fn not_found(name: &str) -> Self {
        StatError::StatNotFound { name: name.to_string() }
    }
}

impl std::fmt::Display for StatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatError::Configuration { details } => {
                write!(f, "Invalid stat configuration: {}", details)
            }
            StatError::StatNotFound { name } => {
                write!(f, "Stat '{}' not found", name)
            }
        }
    }
}

impl std::error::Error for StatError {}

// Type alias for Result with StatError
pub type StatResult<T> = Result<T, StatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StatError::not_found("Mana");
        assert_eq!(err.to_string(), "Stat 'Mana' not found");

        let err = StatError::Configuration { details: "empty stat table".to_string() };
        assert_eq!(err.to_string(), "Invalid stat configuration: empty stat table");
    }
}
