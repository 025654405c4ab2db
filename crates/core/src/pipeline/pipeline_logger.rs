use std::collections::BTreeMap;
use std::time::Instant;

/// Observer for pipeline events.
///
/// Use cases report to this instead of calling `log` directly, so tests can
/// stay silent and the CLI can print a stage summary after a batch.
pub trait PipelineLogger: Send {
    /// Image-level progress through a batch.
    fn progress(&mut self, current: usize, total: usize);

    /// How long a named stage took for one image.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// A point-in-time measurement, e.g. a region's foreground share.
    fn metric(&mut self, name: &str, value: f64);

    fn info(&mut self, message: &str);

    /// End-of-run report. Default: no-op.
    fn summary(&self) {}
}

/// Discards everything.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards to the `log` facade and keeps per-stage timings and metrics
/// for a summary at the end of the run.
///
/// Progress lines are emitted every `throttle_images` images.
pub struct LogPipelineLogger {
    throttle_images: usize,
    timings: BTreeMap<String, Vec<f64>>,
    metrics: BTreeMap<String, Vec<f64>>,
    start_time: Instant,
    total_images: usize,
}

impl LogPipelineLogger {
    pub fn new(throttle_images: usize) -> Self {
        Self {
            throttle_images: throttle_images.max(1),
            timings: BTreeMap::new(),
            metrics: BTreeMap::new(),
            start_time: Instant::now(),
            total_images: 0,
        }
    }

    /// The formatted report, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Purifier summary ({} images, {:.1}s total):",
            self.total_images,
            elapsed_ms / 1000.0
        )];

        for (stage, durations) in &self.timings {
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = mean(durations);
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:6.1}ms  total {total_ms:7.0}ms"
            ));
        }
        for (name, values) in &self.metrics {
            lines.push(format!("  {name}: avg {:.1}", mean(values)));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn metrics_for(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(|v| v.as_slice())
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_images = total;
        if total > 0 && (current % self.throttle_images == 0 || current == total) {
            log::info!("Purified {current}/{total} images");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        log::debug!("{stage} took {duration_ms:.1}ms");
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 10);
        logger.timing("classify", 5.0);
        logger.metric("score_foreground_pct", 3.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = LogPipelineLogger::new(10);
        logger.timing("classify", 20.0);
        logger.timing("classify", 30.0);
        logger.timing("encode", 5.0);

        assert_eq!(logger.timings_for("classify").unwrap(), &[20.0, 30.0]);
        assert_eq!(logger.timings_for("encode").unwrap().len(), 1);
        assert!(logger.timings_for("load").is_none());
    }

    #[test]
    fn test_metric_average_in_summary() {
        let mut logger = LogPipelineLogger::new(10);
        logger.metric("score_foreground_pct", 3.0);
        logger.metric("score_foreground_pct", 4.0);

        assert_relative_eq!(mean(logger.metrics_for("score_foreground_pct").unwrap()), 3.5);
        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("score_foreground_pct"));
        assert!(summary.contains("avg 3.5"));
    }

    #[test]
    fn test_summary_lists_stages() {
        let mut logger = LogPipelineLogger::new(10);
        logger.progress(2, 2);
        logger.timing("classify", 20.0);
        logger.timing("compose", 1.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Purifier summary (2 images"));
        assert!(summary.contains("classify"));
        assert!(summary.contains("compose"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        assert!(LogPipelineLogger::default().summary_string().is_none());
    }

    #[test]
    fn test_throttle_never_zero() {
        let logger = LogPipelineLogger::new(0);
        assert_eq!(logger.throttle_images, 1);
    }
}
