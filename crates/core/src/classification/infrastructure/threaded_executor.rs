use crate::classification::domain::classification_executor::{
    ClassificationExecutor, ClassificationJob,
};

/// Runs each job on its own scoped thread and joins them all before
/// returning.
///
/// Jobs hold disjoint buffers and the color tables are constants, so the
/// threads share nothing mutable.
pub struct ThreadedExecutor;

impl ClassificationExecutor for ThreadedExecutor {
    fn execute(&self, jobs: &mut [ClassificationJob]) {
        if jobs.len() <= 1 {
            jobs.iter_mut().for_each(ClassificationJob::run);
            return;
        }
        std::thread::scope(|scope| {
            for job in jobs.iter_mut() {
                scope.spawn(move || job.run());
            }
        });
    }

    fn name(&self) -> &'static str {
        "threaded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::domain::region_kind::{RegionKind, SpecialMask};
    use crate::classification::infrastructure::sequential_executor::SequentialExecutor;
    use crate::shared::frame::Frame;

    fn jobs() -> Vec<ClassificationJob> {
        RegionKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let mut frame = Frame::black(50, 40);
                for y in 0..40 {
                    for x in 0..50 {
                        let v = ((x * 13 + y * 7 + i as u32 * 29) % 256) as u8;
                        frame.set_pixel(x, y, [255 - v / 8, 200 - v / 4, v]);
                    }
                }
                let mask = (kind == RegionKind::JudgeDetail).then_some(SpecialMask::LowerLeft {
                    x_limit: 20,
                    y_threshold: 10.0,
                });
                ClassificationJob { kind: Some(kind), frame, mask }
            })
            .collect()
    }

    #[test]
    fn test_matches_sequential_output() {
        let mut threaded = jobs();
        let mut sequential = jobs();
        ThreadedExecutor.execute(&mut threaded);
        SequentialExecutor.execute(&mut sequential);
        for (a, b) in threaded.iter().zip(sequential.iter()) {
            assert_eq!(a.frame, b.frame);
        }
    }

    #[test]
    fn test_single_job_runs_inline() {
        let mut jobs = vec![ClassificationJob {
            kind: Some(RegionKind::Score),
            frame: Frame::filled(1, 1, [255, 255, 255]),
            mask: None,
        }];
        ThreadedExecutor.execute(&mut jobs);
        assert_eq!(jobs[0].frame.pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_no_jobs_is_noop() {
        ThreadedExecutor.execute(&mut []);
    }
}
