use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoonrankError {
    /// The document could not be decoded at all.
    #[error("Parse error in {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// A recognised field is present in a shape that cannot be repaired.
    #[error("Normalization error in {document}, field `{field}`: {reason}")]
    Normalization {
        document: String,
        field: &'static str,
        reason: String,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MoonrankError {
    /// Attach the document label to a JSON decode failure.
    pub fn parse(document: impl Into<String>, source: serde_json::Error) -> Self {
        MoonrankError::Parse { document: document.into(), source }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MoonrankError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, MoonrankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_error_names_document_and_field() {
        let err = MoonrankError::Normalization {
            document: "42.json".to_string(),
            field: "properties.creators",
            reason: "element 1 is not an object".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("42.json"));
        assert!(msg.contains("properties.creators"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MoonrankError::parse("broken.json", source);
        assert!(matches!(err, MoonrankError::Parse { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
