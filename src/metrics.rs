use std::time::Instant;
use tracing::info;

/// Logs how long an operation took when dropped.
///
/// ```ignore
/// let _timer = OperationTimer::new("reorder_task");
/// ```
#[derive(Debug)]
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
}

impl OperationTimer {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        info!(
            operation = %self.name,
            duration_ms = %self.elapsed_ms(),
            "Operation completed"
        );
    }
}

/// Short id for correlating the log lines of one request.
#[must_use]
pub fn generate_request_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
