use crate::model::Ms;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// An event with `start >= end`, reported with its position in the input.
    InvalidInterval { index: usize, start: Ms, end: Ms },
}

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocError::InvalidInterval { index, start, end } => {
                write!(f, "invalid interval at index {index}: [{start}, {end})")
            }
        }
    }
}

impl std::error::Error for AllocError {}
