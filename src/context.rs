use crate::text::{DEFAULT_DASH, DEFAULT_DELIMITER, DEFAULT_PAD};

/// Evaluation defaults used when a helper's optional argument is omitted.
#[derive(Debug, Clone)]
pub struct Context {
    pub delimiter: String,
    pub pad: String,
    pub dash: String,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            pad: DEFAULT_PAD.to_string(),
            dash: DEFAULT_DASH.to_string(),
        }
    }
}

impl Context {
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_pad(mut self, pad: impl Into<String>) -> Self {
        self.pad = pad.into();
        self
    }

    pub fn with_dash(mut self, dash: impl Into<String>) -> Self {
        self.dash = dash.into();
        self
    }
}
