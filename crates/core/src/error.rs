use std::fmt;

/// Rejected boundary input (an unknown universe spelling or model block id).
///
/// The pipeline stages themselves never fail; this only comes out of parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub stage: &'static str,
    pub detail: String,
}

impl InputError {
    pub fn new(stage: &'static str, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input (stage={}): {}", self.stage, self.detail)
    }
}

impl std::error::Error for InputError {}
