use std::sync::Arc;

use precis::ScoringPipeline;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct HandlerState {
    pub pipeline: Arc<ScoringPipeline>,
}

impl HandlerState {
    pub fn new(pipeline: ScoringPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
