use crate::classification::domain::classification_executor::{
    ClassificationExecutor, ClassificationJob,
};

/// Runs jobs one after another on the calling thread.
pub struct SequentialExecutor;

impl ClassificationExecutor for SequentialExecutor {
    fn execute(&self, jobs: &mut [ClassificationJob]) {
        for job in jobs.iter_mut() {
            job.run();
        }
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
