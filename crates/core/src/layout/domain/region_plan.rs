use serde::{Deserialize, Serialize};

use crate::classification::domain::region_kind::RegionKind;
use crate::layout::domain::grid::Grid;
use crate::shared::rect::Rect;

/// Which screen areas are cut out and classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Button, title, judge-detail and score, each with its own rule.
    #[default]
    FourRegion,
    /// The whole top band is copied through unclassified.
    ThreeRegion,
}

/// Where cropped regions land on the output canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Packing {
    /// Top band at the origin; judge-detail and score side by side directly
    /// beneath it. The canvas is `xCoords[1] x yCoords[1]`, and a score crop
    /// taller than judge-detail is cut off at the canvas bottom.
    #[default]
    Packed,
    /// Every region keeps its source position on an
    /// `xCoords[1] x height` canvas.
    SourceOffsets,
}

/// One region to crop, classify, and paste.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// `None` copies the pixels through unchanged.
    pub kind: Option<RegionKind>,
    pub source: Rect,
    pub target_x: u32,
    pub target_y: u32,
}

impl Placement {
    /// The rectangle this placement covers on the canvas.
    pub fn target(&self) -> Rect {
        Rect::at(
            self.target_x,
            self.target_y,
            self.source.width(),
            self.source.height(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionPlan {
    pub placements: Vec<Placement>,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl RegionPlan {
    pub fn new(grid: &Grid, layout: Layout, packing: Packing) -> Self {
        let [x0, x1] = grid.x;
        let [y0, y1] = grid.y;
        let split = x1 / 2;

        let top: Vec<(Option<RegionKind>, Rect)> = match layout {
            Layout::FourRegion => vec![
                (Some(RegionKind::Button), Rect::new(0, 0, split, y0)),
                (Some(RegionKind::Title), Rect::new(split, 0, x1, y0)),
            ],
            Layout::ThreeRegion => vec![(None, Rect::new(0, 0, x1, y0))],
        };
        let judge = Rect::new(0, y0, x0, y1);
        let score_bottom = match packing {
            Packing::Packed => grid.height.min(y1 + judge.height()),
            Packing::SourceOffsets => grid.height,
        };
        let score = Rect::new(x0, y1, x1, score_bottom);

        let mut placements: Vec<Placement> = top
            .into_iter()
            .map(|(kind, source)| Placement {
                kind,
                source,
                target_x: source.x0,
                target_y: source.y0,
            })
            .collect();

        let (score_target_y, canvas_height) = match packing {
            Packing::Packed => (y0, y1),
            Packing::SourceOffsets => (score.y0, grid.height),
        };
        placements.push(Placement {
            kind: Some(RegionKind::JudgeDetail),
            source: judge,
            target_x: 0,
            target_y: y0,
        });
        placements.push(Placement {
            kind: Some(RegionKind::Score),
            source: score,
            target_x: x0,
            target_y: score_target_y,
        });

        Self {
            placements,
            canvas_width: x1,
            canvas_height,
        }
    }
}
