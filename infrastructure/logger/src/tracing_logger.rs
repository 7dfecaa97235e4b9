use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Predictor -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Predictor -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Predictor -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Predictor -- ", "{}", message);
    }
}
