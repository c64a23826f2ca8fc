//! Device event logging endpoint: each request becomes one row in an
//! append-only sheet, and the caller always gets a JSON acknowledgment.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod record;
pub mod service;
pub mod sheet;
pub mod state;
