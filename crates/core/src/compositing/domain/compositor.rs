use crate::error::GeometryError;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// A classified region ready to be pasted at `(x, y)` on the canvas.
#[derive(Clone, Debug)]
pub struct PlacedRegion {
    pub frame: Frame,
    pub x: u32,
    pub y: u32,
}

impl PlacedRegion {
    pub fn target(&self) -> Rect {
        Rect::at(self.x, self.y, self.frame.width(), self.frame.height())
    }
}

/// Pastes every region onto a fresh black canvas of the given size.
///
/// Placement geometry is checked before any pixels move: each region must
/// lie inside the canvas and no two regions may share a pixel. A violation
/// means the region plan is wrong, so nothing is clipped silently.
pub fn compose(
    regions: &[PlacedRegion],
    canvas_width: u32,
    canvas_height: u32,
) -> Result<Frame, GeometryError> {
    check_placements(regions, canvas_width, canvas_height)?;

    let mut canvas = Frame::black(canvas_width, canvas_height);
    for region in regions {
        canvas.paste(&region.frame, region.x, region.y);
    }
    Ok(canvas)
}

fn check_placements(
    regions: &[PlacedRegion],
    canvas_width: u32,
    canvas_height: u32,
) -> Result<(), GeometryError> {
    for (i, region) in regions.iter().enumerate() {
        let target = region.target();
        if !target.fits_within(canvas_width, canvas_height) {
            return Err(GeometryError::OutOfCanvas {
                index: i,
                x: region.x,
                y: region.y,
                width: target.width(),
                height: target.height(),
                canvas_width,
                canvas_height,
            });
        }
        for (j, other) in regions.iter().enumerate().skip(i + 1) {
            if target.overlaps(&other.target()) {
                return Err(GeometryError::Overlap(i, j));
            }
        }
    }
    Ok(())
}
