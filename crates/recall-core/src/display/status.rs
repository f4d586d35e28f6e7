//! Plain-message outcomes for operations that have nothing to render.

use std::fmt;

/// Outcome message for operations that finish without a model to show,
/// such as a lookup miss or a deletion that was declined.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Wraps a message describing an operation that went through.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Wraps a message describing an operation that did not.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success" } else { "Error" };
        writeln!(f, "{prefix}: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let done = OperationStatus::success("Review queue cleared".to_string());
        assert_eq!(format!("{done}"), "Success: Review queue cleared\n");

        let missed = OperationStatus::failure("Topic with ID 7 not found".to_string());
        assert_eq!(format!("{missed}"), "Error: Topic with ID 7 not found\n");
    }
}
