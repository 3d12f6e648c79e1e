use std::sync::Arc;

/// State shared between the render pass and paint closures.
#[derive(Debug, Default)]
pub struct SharedPlotState {
    pub debug_mode: bool,

    /// Time taken by paint for each series (ID -> nanoseconds)
    pub paint_times: Arc<parking_lot::RwLock<std::collections::HashMap<String, u64>>>,
}

impl SharedPlotState {
    pub fn total_paint_nanos(&self) -> u64 {
        self.paint_times.read().values().sum()
    }
}

impl Clone for SharedPlotState {
    fn clone(&self) -> Self {
        Self {
            debug_mode: self.debug_mode,
            paint_times: self.paint_times.clone(),
        }
    }
}
