use std::fmt;

/// Error returned by canvas drawing operations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CompositeError {
    /// A gradient band does not satisfy `y_start < y_end <= height`.
    BandOutOfRange { y_start: u32, y_end: u32, height: u32 },
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeError::BandOutOfRange { y_start, y_end, height } => write!(
                f,
                "gradient band {y_start}..{y_end} is outside canvas height {height}"
            ),
        }
    }
}

impl std::error::Error for CompositeError {}
