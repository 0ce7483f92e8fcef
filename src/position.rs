use std::fmt;

/// Position of a parsing error within the input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorPosition {
    name: String,
    line: u64,
}

impl ErrorPosition {
    pub fn new<S: Into<String>>(name: S, line: u64) -> Self {
        ErrorPosition {
            name: name.into(),
            line,
        }
    }

    /// Name of the input (usually the file path)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line number (1-based)
    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }
}

impl fmt::Display for ErrorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' at line {}", self.name, self.line)
    }
}
