use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PurifyError;
use crate::layout::domain::grid::GridSpec;
use crate::layout::domain::region_plan::{Layout, Packing};
use crate::shared::constants::{
    DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_DIR, EXPECTED_RATIO, JUDGE_MASK_DIVISOR, OUTPUT_PREFIX,
    THUMBNAIL_SIZE,
};

/// Tunables for one purifier run. Every field has a default, so a config
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurifierConfig {
    pub expected_ratio: f64,
    pub grid: GridSpec,
    pub judge_mask_divisor: f64,
    pub layout: Layout,
    pub packing: Packing,
    /// Where composed images are persisted; `None` skips persistence.
    pub output_dir: Option<PathBuf>,
    pub output_prefix: String,
    pub jpeg_quality: u8,
    pub thumbnail_size: u32,
    pub parallel: bool,
}

impl Default for PurifierConfig {
    fn default() -> Self {
        Self {
            expected_ratio: EXPECTED_RATIO,
            grid: GridSpec::default(),
            judge_mask_divisor: JUDGE_MASK_DIVISOR,
            layout: Layout::default(),
            packing: Packing::default(),
            output_dir: Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
            output_prefix: OUTPUT_PREFIX.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            thumbnail_size: THUMBNAIL_SIZE,
            parallel: true,
        }
    }
}

impl PurifierConfig {
    pub fn load(path: &Path) -> Result<Self, PurifyError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, PurifyError> {
        let config: Self = serde_json::from_str(text)?;
        log::debug!("Loaded purifier config: {config:?}");
        Ok(config)
    }

    /// `<output_dir>/<prefix><name>`, or `None` when persistence is off.
    pub fn output_path(&self, name: &str) -> Option<PathBuf> {
        self.output_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}{}", self.output_prefix, name)))
    }
}
