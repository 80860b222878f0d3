//! Turning command results into MCP tool results.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::EspnError;

/// Pretty JSON text on success; an error tool result carrying
/// `{"error": <kind>, "message": <text>}` on failure.
///
/// Only a serialization failure becomes a protocol error.
pub fn respond<T: Serialize>(result: crate::Result<T>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let json_str = to_pretty(&value)?;
            Ok(CallToolResult::success(vec![Content::text(json_str)]))
        }
        Err(err) => failure(&err),
    }
}

pub fn failure(err: &EspnError) -> Result<CallToolResult, McpError> {
    warn!(kind = err.kind(), error = %err, "tool call failed");
    let body = json!({
        "error": err.kind(),
        "message": err.to_string(),
    });
    Ok(CallToolResult::error(vec![Content::text(to_pretty(&body)?)]))
}

fn to_pretty<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(result: &CallToolResult) -> serde_json::Value {
        let raw = &result.content[0].as_text().unwrap().text;
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_respond_success_is_pretty_json() {
        let result = respond(Ok(json!({ "name": "Sunday Funday" }))).unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(text(&result)["name"], "Sunday Funday");
        assert!(result.content[0].as_text().unwrap().text.contains('\n'));
    }

    #[test]
    fn test_respond_failure_carries_kind() {
        let err = EspnError::TeamNotFound {
            query: "nobody".into(),
        };
        let result = respond::<()>(Err(err)).unwrap();

        assert_eq!(result.is_error, Some(true));
        let body = text(&result);
        assert_eq!(body["error"], "TeamNotFound");
        assert!(body["message"].as_str().unwrap().contains("nobody"));
    }
}
