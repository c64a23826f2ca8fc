use crate::clock::local_timestamp;
use crate::error::AppendFailure;
use crate::models::LogResponse;
use crate::record::{EventFields, TelemetryRecord};
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Data logged successfully";

/// Extract, stamp and append one event. Stops at the first failing stage.
pub fn log_event(
    state: &AppState,
    params: &[(String, String)],
) -> Result<TelemetryRecord, AppendFailure> {
    let fields = EventFields::extract(params);
    let timestamp = local_timestamp(state.clock.now());
    let record = TelemetryRecord::new(timestamp, fields);

    state.sheet.append(&record)?;

    let fields = record.fields();
    tracing::info!(
        event = fields.event.as_str(),
        method = fields.method.as_str(),
        user = fields.user.as_str(),
        status = fields.status.as_str(),
        timestamp = record.timestamp(),
        "event logged"
    );
    Ok(record)
}

pub fn build_response(outcome: Result<TelemetryRecord, AppendFailure>) -> LogResponse {
    match outcome {
        Ok(record) => LogResponse::Success {
            message: SUCCESS_MESSAGE,
            timestamp: record.timestamp().to_string(),
        },
        Err(err) => {
            tracing::debug!(error = %err, "event not logged");
            LogResponse::Error {
                message: err.to_string(),
            }
        }
    }
}
