use crate::classification::domain::color_rule::{ColorRule, Rgb};
use crate::layout::domain::grid::Grid;

/// The screen areas of a result screenshot that get their own color rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Button,
    Title,
    JudgeDetail,
    Score,
}

pub const BUTTON_COLORS: &[Rgb] = &[[254, 254, 254]];

pub const TITLE_COLORS: &[Rgb] = &[[255, 255, 255], [122, 136, 139]];

pub const SCORE_COLORS: &[Rgb] = &[[255, 255, 255]];

/// Grey label text followed by the gold-to-red judgement ramp.
pub const JUDGE_DETAIL_COLORS: &[Rgb] = &[
    [191, 191, 191],
    [247, 190, 5],
    [219, 169, 29],
    [246, 174, 24],
    [251, 160, 40],
    [227, 134, 65],
    [231, 117, 85],
    [243, 101, 108],
    [215, 83, 120],
    [220, 69, 137],
    [222, 60, 149],
    [221, 60, 149],
    [180, 7, 7],
];

pub const BUTTON_RULE: ColorRule = ColorRule::new(BUTTON_COLORS);
pub const TITLE_RULE: ColorRule = ColorRule::new(TITLE_COLORS);
pub const SCORE_RULE: ColorRule = ColorRule::new(SCORE_COLORS);
pub const JUDGE_DETAIL_RULE: ColorRule = ColorRule::new(JUDGE_DETAIL_COLORS);

/// Forces pixels to black regardless of color.
///
/// Coordinates are local to the region being classified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpecialMask {
    /// Blanks the lower-left corner: `x < x_limit` and `y > y_threshold`.
    LowerLeft { x_limit: u32, y_threshold: f64 },
}

impl SpecialMask {
    pub fn forces_black(&self, x: u32, y: u32) -> bool {
        match *self {
            SpecialMask::LowerLeft {
                x_limit,
                y_threshold,
            } => x < x_limit && (y as f64) > y_threshold,
        }
    }
}

impl RegionKind {
    pub const ALL: &'static [RegionKind] = &[
        RegionKind::Button,
        RegionKind::Title,
        RegionKind::JudgeDetail,
        RegionKind::Score,
    ];

    pub fn rule(&self) -> &'static ColorRule {
        match self {
            RegionKind::Button => &BUTTON_RULE,
            RegionKind::Title => &TITLE_RULE,
            RegionKind::JudgeDetail => &JUDGE_DETAIL_RULE,
            RegionKind::Score => &SCORE_RULE,
        }
    }

    /// The mask for this kind, if any.
    ///
    /// Only the judge-detail panel has one: a UI artifact sits in its
    /// lower-left corner, left of half the first vertical grid line and
    /// below `region_height / mask_divisor`.
    pub fn mask(&self, grid: &Grid, region_height: u32, mask_divisor: f64) -> Option<SpecialMask> {
        match self {
            RegionKind::JudgeDetail => Some(SpecialMask::LowerLeft {
                x_limit: grid.x[0] / 2,
                y_threshold: region_height as f64 / mask_divisor,
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RegionKind::Button => "button",
            RegionKind::Title => "title",
            RegionKind::JudgeDetail => "judge_detail",
            RegionKind::Score => "score",
        }
    }
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
