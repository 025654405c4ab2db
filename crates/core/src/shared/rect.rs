/// Half-open pixel rectangle `[x0, x1) x [y0, y1)` in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1, "rect corners must be ordered");
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle of the given size with its top-left corner at `(x, y)`.
    pub fn at(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// True when the two rectangles share at least one pixel.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x0.max(other.x0) < self.x1.min(other.x1)
            && self.y0.max(other.y0) < self.y1.min(other.y1)
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x1 <= width && self.y1 <= height
    }

    pub fn clamp_to(&self, width: u32, height: u32) -> Rect {
        let x1 = self.x1.min(width);
        let y1 = self.y1.min(height);
        Rect::new(self.x0.min(x1), self.y0.min(y1), x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_dimensions() {
        let r = Rect::new(10, 20, 40, 30);
        assert_eq!(r.width(), 30);
        assert_eq!(r.height(), 10);
    }

    #[test]
    fn test_at_builds_from_size() {
        assert_eq!(Rect::at(5, 6, 10, 2), Rect::new(5, 6, 15, 8));
    }

    #[rstest]
    #[case::exact(Rect::new(0, 0, 4, 4), true)]
    #[case::past_right(Rect::new(1, 0, 5, 4), false)]
    #[case::past_bottom(Rect::new(0, 1, 4, 5), false)]
    fn test_fits_within(#[case] r: Rect, #[case] expected: bool) {
        assert_eq!(r.fits_within(4, 4), expected);
    }

    #[rstest]
    #[case::disjoint(Rect::new(0, 0, 5, 5), Rect::new(6, 6, 9, 9), false)]
    #[case::shared_edge(Rect::new(0, 0, 5, 5), Rect::new(5, 0, 9, 5), false)]
    #[case::partial(Rect::new(0, 0, 5, 5), Rect::new(4, 4, 9, 9), true)]
    #[case::nested(Rect::new(0, 0, 10, 10), Rect::new(2, 2, 3, 3), true)]
    #[case::empty(Rect::new(2, 2, 2, 8), Rect::new(0, 0, 10, 10), false)]
    fn test_overlaps(#[case] a: Rect, #[case] b: Rect, #[case] expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[test]
    fn test_clamp_to_bounds() {
        let r = Rect::new(8, 8, 20, 20).clamp_to(10, 12);
        assert_eq!(r, Rect::new(8, 8, 10, 12));
        let outside = Rect::new(15, 15, 20, 20).clamp_to(10, 10);
        assert_eq!((outside.width(), outside.height()), (0, 0));
    }
}
