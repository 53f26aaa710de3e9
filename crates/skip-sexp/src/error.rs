//! Error types for S-expression reading

/// Errors produced while reading S-expression text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input held no list at all
    #[error("empty document")]
    EmptyDocument,

    /// Malformed input, with a rendered trace of where parsing stopped
    #[error("syntax error: {message}")]
    Syntax {
        /// Rendered error trace
        message: String,
    },

    /// Lists nest deeper than the reader accepts
    #[error("nesting deeper than {limit} levels")]
    TooDeep {
        /// Deepest nesting allowed
        limit: usize,
    },

    /// Input ended inside a list or string
    #[error("unexpected end of input")]
    Incomplete,
}

impl ParseError {
    /// Create syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        assert_eq!(ParseError::EmptyDocument.to_string(), "empty document");
        assert_eq!(
            ParseError::syntax("missing ')'").to_string(),
            "syntax error: missing ')'"
        );
        assert_eq!(
            ParseError::TooDeep { limit: 128 }.to_string(),
            "nesting deeper than 128 levels"
        );
    }
}
