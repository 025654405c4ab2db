use crate::classification::domain::binarizer::classify;
use crate::classification::domain::region_kind::{RegionKind, SpecialMask};
use crate::shared::frame::Frame;

/// One cropped region waiting to be binarized.
///
/// Jobs own their pixels, so any number of them can run at once without
/// coordination.
#[derive(Clone, Debug)]
pub struct ClassificationJob {
    /// `None` leaves the pixels untouched.
    pub kind: Option<RegionKind>,
    pub frame: Frame,
    pub mask: Option<SpecialMask>,
}

impl ClassificationJob {
    pub fn run(&mut self) {
        if let Some(kind) = self.kind {
            classify(&mut self.frame, kind.rule(), self.mask.as_ref());
        }
    }
}

/// Abstracts how a batch of region jobs is scheduled.
///
/// Every job must have run when `execute` returns.
pub trait ClassificationExecutor: Send + Sync {
    fn execute(&self, jobs: &mut [ClassificationJob]);

    fn name(&self) -> &'static str;
}
