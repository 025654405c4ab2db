use crate::classification::domain::classification_executor::ClassificationExecutor;

use super::sequential_executor::SequentialExecutor;
use super::threaded_executor::ThreadedExecutor;

/// Picks the region scheduler and logs the choice.
pub fn create_executor(parallel: bool) -> Box<dyn ClassificationExecutor> {
    let executor: Box<dyn ClassificationExecutor> = if parallel {
        Box::new(ThreadedExecutor)
    } else {
        Box::new(SequentialExecutor)
    };
    log::debug!("Using {} region classification", executor.name());
    executor
}
