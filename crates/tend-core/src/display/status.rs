//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Outcome message for operations that produce no resource to show,
/// such as confirmations, data wipes, and recalculation ticks.
pub enum OperationStatus {
    Success(String),
    Failure(String),
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => writeln!(f, "Success: {message}"),
            Self::Failure(message) => writeln!(f, "Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("All data cleared");
        assert_eq!(format!("{success}"), "Success: All data cleared\n");

        let failure = OperationStatus::failure("Plant not found");
        assert_eq!(format!("{failure}"), "Error: Plant not found\n");
    }
}
