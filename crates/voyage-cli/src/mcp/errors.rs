//! Error handling utilities for MCP server

use rmcp::ErrorData;
use voyage_core::TripError;

/// Helper to convert session errors to MCP errors
///
/// Caller mistakes (bad input, an operation the current stage does not
/// accept) become invalid-params errors; collaborator and setup failures
/// become internal errors.
pub fn to_mcp_error(message: &str, error: &TripError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        TripError::InvalidInput { .. } | TripError::WrongStage { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;
    use voyage_core::StageKind;

    use super::*;

    #[test]
    fn test_caller_mistakes_are_invalid_params() {
        let error = to_mcp_error("Failed", &TripError::wrong_stage("view the itinerary", StageKind::Hero));
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("hero"));
    }

    #[test]
    fn test_collaborator_failures_are_internal() {
        let error = to_mcp_error("Failed", &TripError::unavailable("offline"));
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
