//! Appends one canned TEST event to the configured sheet and prints the reply.

use std::{process::ExitCode, sync::Arc};

use sheetlog_common::init_tracing;
use telemetry_service::{config::ServiceConfig, service, sheet::CsvSheet, state::AppState};

fn main() -> ExitCode {
    let _guards = init_tracing("testlog");

    let config = ServiceConfig::from_env();
    let state = AppState::new(Arc::new(CsvSheet::new(config.sheet_path)));

    let params: Vec<(String, String)> = [
        ("event", "TEST"),
        ("method", "SCRIPT"),
        ("user", "TEST_USER"),
        ("status", "SUCCESS"),
        ("temp", "28.5"),
        ("humidity", "65"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    let response = service::build_response(service::log_event(&state, &params));
    let succeeded = response.is_success();

    match serde_json::to_string(&response) {
        Ok(body) => println!("{body}"),
        Err(err) => {
            tracing::error!(error = %err, "encode response failed");
            return ExitCode::FAILURE;
        }
    }

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
