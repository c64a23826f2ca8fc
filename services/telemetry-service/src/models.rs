use serde::Serialize;

/// Body returned for every log request. `status` tells success from error.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LogResponse {
    Success {
        message: &'static str,
        timestamp: String,
    },
    Error {
        message: String,
    },
}

impl LogResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, LogResponse::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::LogResponse;
    use serde_json::json;

    #[test]
    fn success_shape() {
        let body = serde_json::to_value(LogResponse::Success {
            message: "Data logged successfully",
            timestamp: "14/03/2026 09:05:09".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "status": "success",
                "message": "Data logged successfully",
                "timestamp": "14/03/2026 09:05:09",
            })
        );
    }

    #[test]
    fn error_shape_has_no_timestamp() {
        let body = serde_json::to_value(LogResponse::Error {
            message: "sheet write failed: denied".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "status": "error", "message": "sheet write failed: denied" })
        );
    }
}
