use std::{process::ExitCode, sync::Arc};

use sheetlog_common::{bind_listener, init_tracing, shutdown_signal};
use telemetry_service::{app, config::ServiceConfig, sheet::CsvSheet, state::AppState};

#[tokio::main]
async fn main() -> ExitCode {
    let _guards = init_tracing("telemetry-service");

    let config = ServiceConfig::from_env();
    let sheet = CsvSheet::new(config.sheet_path);
    tracing::info!(sheet = %sheet.path().display(), "appending to sheet");

    let state = AppState::new(Arc::new(sheet));
    let app = app::build_router(state);

    let listener = match bind_listener(config.port).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(port = config.port, error = %err, "bind listener failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
