use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::sheet::RowSink;

#[derive(Clone)]
pub struct AppState {
    pub sheet: Arc<dyn RowSink>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(sheet: Arc<dyn RowSink>) -> Self {
        Self::with_clock(sheet, Arc::new(SystemClock))
    }

    pub fn with_clock(sheet: Arc<dyn RowSink>, clock: Arc<dyn Clock>) -> Self {
        Self { sheet, clock }
    }
}
