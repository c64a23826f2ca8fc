use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    Json,
};

use crate::error::AppendFailure;
use crate::models::LogResponse;
use crate::service;
use crate::state::AppState;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// Always answers with a JSON body and 200; the outcome lives in `status`.
pub async fn log_event(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<LogResponse> {
    let outcome = match decode_query(query.as_deref().unwrap_or_default()) {
        Ok(params) => {
            // File appends block; keep them off the async workers.
            tokio::task::spawn_blocking(move || service::log_event(&state, &params))
                .await
                .map_err(AppendFailure::from)
                .and_then(|outcome| outcome)
        }
        Err(err) => Err(err),
    };
    Json(service::build_response(outcome))
}

/// Pairs in query order, repeats included. Bad percent-escapes decode to U+FFFD.
fn decode_query(query: &str) -> Result<Vec<(String, String)>, AppendFailure> {
    serde_urlencoded::from_str(query)
        .map_err(|err| AppendFailure::new(format!("invalid query string: {err}")))
}

#[cfg(test)]
mod tests {
    use super::decode_query;

    #[test]
    fn keeps_repeated_names_in_order() {
        let pairs = decode_query("event=A&user=ADMIN&event=B").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("event".to_string(), "A".to_string()),
                ("user".to_string(), "ADMIN".to_string()),
                ("event".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(decode_query("").unwrap().is_empty());
    }

    #[test]
    fn invalid_escape_is_replaced_not_rejected() {
        let pairs = decode_query("user=%FF").unwrap();
        assert_eq!(pairs, vec![("user".to_string(), "\u{FFFD}".to_string())]);
    }
}
