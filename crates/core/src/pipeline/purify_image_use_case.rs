use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::classification::domain::classification_executor::{
    ClassificationExecutor, ClassificationJob,
};
use crate::classification::infrastructure::executor_factory::create_executor;
use crate::compositing::domain::compositor::{compose, PlacedRegion};
use crate::error::PurifyError;
use crate::imaging::domain::frame_encoder::FrameEncoder;
use crate::imaging::domain::frame_reader::FrameReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::imaging::infrastructure::image_file_reader::ImageFileReader;
use crate::imaging::infrastructure::image_file_writer::ImageFileWriter;
use crate::imaging::infrastructure::jpeg_encoder::{to_base64, JpegFrameEncoder};
use crate::layout::domain::aspect::ensure_ratio;
use crate::layout::domain::region_plan::RegionPlan;
use crate::pipeline::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use crate::shared::config::PurifierConfig;
use crate::shared::constants::WHITE;
use crate::shared::frame::Frame;

/// Result of purifying one screenshot.
#[derive(Debug, Clone)]
pub struct PurifyOutput {
    pub image: Frame,
    pub jpeg: Vec<u8>,
    pub base64: String,
    /// Where the composed image was persisted, if anywhere.
    pub saved_to: Option<PathBuf>,
}

/// Single-screenshot pipeline: read → validate → grid → classify → compose
/// → persist → encode.
///
/// No partial results: any failure before composition aborts the request.
pub struct PurifyImageUseCase {
    reader: Box<dyn FrameReader>,
    writer: Box<dyn ImageWriter>,
    encoder: Box<dyn FrameEncoder>,
    executor: Box<dyn ClassificationExecutor>,
    config: PurifierConfig,
}

impl PurifyImageUseCase {
    pub fn new(
        reader: Box<dyn FrameReader>,
        writer: Box<dyn ImageWriter>,
        encoder: Box<dyn FrameEncoder>,
        executor: Box<dyn ClassificationExecutor>,
        config: PurifierConfig,
    ) -> Self {
        Self {
            reader,
            writer,
            encoder,
            executor,
            config,
        }
    }

    /// Wires the `image`-crate adapters according to `config`.
    pub fn from_config(config: PurifierConfig) -> Self {
        Self::new(
            Box::new(ImageFileReader::new()),
            Box::new(ImageFileWriter::new()),
            Box::new(JpegFrameEncoder::new(config.jpeg_quality)),
            create_executor(config.parallel),
            config,
        )
    }

    pub fn execute(
        &self,
        input_path: &Path,
        logger: &mut dyn PipelineLogger,
    ) -> Result<PurifyOutput, PurifyError> {
        let start = Instant::now();
        let source = self.reader.read(input_path)?;
        logger.timing("load", elapsed_ms(start));

        let name = input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input_path.display().to_string());
        self.finish(&name, &source, logger)
    }

    /// Same as [`execute`](Self::execute) for an in-memory upload.
    pub fn execute_bytes(
        &self,
        name: &str,
        bytes: &[u8],
        logger: &mut dyn PipelineLogger,
    ) -> Result<PurifyOutput, PurifyError> {
        let start = Instant::now();
        let source = self.reader.decode(name, bytes)?;
        logger.timing("load", elapsed_ms(start));
        self.finish(name, &source, logger)
    }

    /// The classification core: validates, partitions, binarizes and
    /// reassembles `source` without touching storage.
    pub fn purify_frame(
        &self,
        source: &Frame,
        logger: &mut dyn PipelineLogger,
    ) -> Result<Frame, PurifyError> {
        let (width, height) = (source.width(), source.height());
        ensure_ratio(width, height, self.config.expected_ratio)?;
        let grid = self.config.grid.compute(width, height)?;
        log::debug!("Grid for {width}x{height}: x={:?} y={:?}", grid.x, grid.y);

        let plan = RegionPlan::new(&grid, self.config.layout, self.config.packing);
        let mut jobs: Vec<ClassificationJob> = plan
            .placements
            .iter()
            .map(|p| {
                let frame = source.crop(&p.source);
                let mask = p
                    .kind
                    .and_then(|k| k.mask(&grid, frame.height(), self.config.judge_mask_divisor));
                ClassificationJob {
                    kind: p.kind,
                    frame,
                    mask,
                }
            })
            .collect();

        let start = Instant::now();
        self.executor.execute(&mut jobs);
        logger.timing("classify", elapsed_ms(start));

        for job in &jobs {
            if let Some(kind) = job.kind {
                logger.metric(&format!("{kind}_foreground_pct"), foreground_pct(&job.frame));
            }
        }

        let start = Instant::now();
        let regions: Vec<PlacedRegion> = plan
            .placements
            .iter()
            .zip(jobs)
            .map(|(p, job)| PlacedRegion {
                frame: job.frame,
                x: p.target_x,
                y: p.target_y,
            })
            .collect();
        let canvas = compose(&regions, plan.canvas_width, plan.canvas_height)?;
        logger.timing("compose", elapsed_ms(start));
        Ok(canvas)
    }

    fn finish(
        &self,
        name: &str,
        source: &Frame,
        logger: &mut dyn PipelineLogger,
    ) -> Result<PurifyOutput, PurifyError> {
        let image = self.purify_frame(source, logger)?;

        let saved_to = match self.config.output_path(name) {
            Some(path) => {
                let start = Instant::now();
                self.writer.write(&path, &image)?;
                logger.timing("persist", elapsed_ms(start));
                logger.info(&format!("{name} > {}", path.display()));
                Some(path)
            }
            None => None,
        };

        let start = Instant::now();
        let jpeg = self.encoder.encode(&image)?;
        let base64 = to_base64(&jpeg);
        logger.timing("encode", elapsed_ms(start));

        Ok(PurifyOutput {
            image,
            jpeg,
            base64,
            saved_to,
        })
    }
}

/// Loads `path`, purifies it with `config` and returns the base64 JPEG.
pub fn purify_to_base64(path: &Path, config: PurifierConfig) -> Result<String, PurifyError> {
    let use_case = PurifyImageUseCase::from_config(config);
    let output = use_case.execute(path, &mut NullPipelineLogger)?;
    Ok(output.base64)
}

/// Share of pure-white pixels, in percent.
fn foreground_pct(frame: &Frame) -> f64 {
    let total = frame.data().len() / 3;
    if total == 0 {
        return 0.0;
    }
    let white = frame
        .data()
        .chunks_exact(3)
        .filter(|px| *px == WHITE)
        .count();
    white as f64 / total as f64 * 100.0
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
