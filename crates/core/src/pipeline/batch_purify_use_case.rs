use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PurifyError;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::purify_image_use_case::PurifyImageUseCase;
use crate::shared::constants::IMAGE_EXTENSIONS;

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Purifies every image in a directory, in file-name order.
///
/// A bad file is logged and recorded in the summary; the rest of the batch
/// still runs.
pub struct BatchPurifyUseCase {
    single: PurifyImageUseCase,
}

impl BatchPurifyUseCase {
    pub fn new(single: PurifyImageUseCase) -> Self {
        Self { single }
    }

    pub fn execute(
        &self,
        input_dir: &Path,
        logger: &mut dyn PipelineLogger,
    ) -> Result<BatchSummary, PurifyError> {
        let inputs = list_images(input_dir)?;
        let total = inputs.len();
        logger.info(&format!(
            "Found {total} images in {}",
            input_dir.display()
        ));

        let mut summary = BatchSummary::default();
        for (i, path) in inputs.into_iter().enumerate() {
            match self.single.execute(&path, logger) {
                Ok(_) => summary.processed.push(path),
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    summary.failed.push((path, e.to_string()));
                }
            }
            logger.progress(i + 1, total);
        }
        logger.summary();
        Ok(summary)
    }
}

/// Files directly under `dir` with a known image extension, sorted.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, PurifyError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
