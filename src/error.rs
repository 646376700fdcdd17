use std::fmt;

#[derive(Debug)]
pub enum ReportError {
    /// Document text is not valid JSON
    Json(serde_json::Error),

    /// Document text is not valid YAML (or does not map onto a JSON value)
    Yaml(serde_yaml::Error),

    /// Reading or writing a report file failed
    Io { path: String, source: std::io::Error },

    /// The document root must be a mapping with exactly one key (the report name)
    NotSingleRoot { found: usize },

    /// A required section or field is absent
    MissingField { path: String },

    /// A field is present but has the wrong shape
    WrongType { path: String, expected: &'static str },

    /// A user-supplied option could not be interpreted
    InvalidOption(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Json(source) => write!(f, "Invalid JSON report: {}", source),
            ReportError::Yaml(source) => write!(f, "Invalid YAML report: {}", source),
            ReportError::Io { path, source } => write!(f, "I/O error on '{}': {}", path, source),
            ReportError::NotSingleRoot { found } => write!(
                f,
                "Report document must have exactly one top-level key (the report name), found {}",
                found
            ),
            ReportError::MissingField { path } => write!(f, "Missing field '{}'", path),
            ReportError::WrongType { path, expected } => {
                write!(f, "Field '{}' must be {}", path, expected)
            }
            ReportError::InvalidOption(msg) => write!(f, "Invalid option: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Json(source) => Some(source),
            ReportError::Yaml(source) => Some(source),
            ReportError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(source: serde_json::Error) -> Self {
        ReportError::Json(source)
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(source: serde_yaml::Error) -> Self {
        ReportError::Yaml(source)
    }
}
