use std::path::PathBuf;

use sheetlog_common::env_or;

pub const DEFAULT_SHEET_PATH: &str = "./telemetry.csv";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub sheet_path: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 8080u16),
            sheet_path: env_or("SHEET_PATH", PathBuf::from(DEFAULT_SHEET_PATH)),
        }
    }
}
