use ndarray::ArrayViewMut3;

use crate::shared::rect::Rect;

/// Bytes per pixel. Frames are always packed RGB; alpha is dropped at decode.
pub const CHANNELS: usize = 3;

/// An RGB pixel buffer in row-major order.
///
/// Format conversion happens at I/O boundaries only; every stage in between
/// works on this type. Cropping produces an independent copy so regions can
/// be classified without touching each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// All-black frame, used as the compositing canvas.
    pub fn black(width: u32, height: u32) -> Self {
        Self::new(
            vec![0; (width as usize) * (height as usize) * CHANNELS],
            width,
            height,
        )
    }

    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * CHANNELS);
        for _ in 0..(width as usize) * (height as usize) {
            data.extend_from_slice(&rgb);
        }
        Self::new(data, width, height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    /// Copies the pixels under `rect` into a new frame.
    ///
    /// The rectangle is clamped to the frame, so a rect reaching past the
    /// edge yields a smaller (possibly empty) copy.
    pub fn crop(&self, rect: &Rect) -> Frame {
        let clamped = rect.clamp_to(self.width, self.height);
        let (w, h) = (clamped.width() as usize, clamped.height() as usize);
        let fw = self.width as usize;

        let mut data = Vec::with_capacity(w * h * CHANNELS);
        for row in 0..h {
            let start = ((clamped.y0 as usize + row) * fw + clamped.x0 as usize) * CHANNELS;
            data.extend_from_slice(&self.data[start..start + w * CHANNELS]);
        }
        Frame::new(data, w as u32, h as u32)
    }

    /// Pastes `src` with its top-left corner at `(x, y)`, clipping anything
    /// that falls outside this frame.
    pub fn paste(&mut self, src: &Frame, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let w = src.width.min(self.width - x) as usize;
        let h = src.height.min(self.height - y) as usize;
        let fw = self.width as usize;
        let sw = src.width as usize;

        for row in 0..h {
            let dst = ((y as usize + row) * fw + x as usize) * CHANNELS;
            let s = row * sw * CHANNELS;
            self.data[dst..dst + w * CHANNELS].copy_from_slice(&src.data[s..s + w * CHANNELS]);
        }
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> Frame {
        let mut frame = Frame::black(w, h);
        for y in 0..h {
            for x in 0..w {
                frame.set_pixel(x, y, [x as u8, y as u8, 7]);
            }
        }
        frame
    }

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2);
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let frame = Frame::filled(3, 2, [1, 2, 3]);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(frame.pixel(x, y), [1, 2, 3]);
            }
        }
    }

    #[test]
    fn test_crop_copies_subrange() {
        let frame = gradient(10, 8);
        let crop = frame.crop(&Rect::new(2, 3, 6, 5));
        assert_eq!((crop.width(), crop.height()), (4, 2));
        assert_eq!(crop.pixel(0, 0), [2, 3, 7]);
        assert_eq!(crop.pixel(3, 1), [5, 4, 7]);
    }

    #[test]
    fn test_crop_is_independent() {
        let frame = gradient(4, 4);
        let mut crop = frame.crop(&Rect::new(0, 0, 2, 2));
        crop.set_pixel(0, 0, [255, 255, 255]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 7]);
    }

    #[test]
    fn test_crop_past_edge_is_clamped() {
        let frame = gradient(4, 4);
        let crop = frame.crop(&Rect::new(2, 2, 10, 10));
        assert_eq!((crop.width(), crop.height()), (2, 2));
    }

    #[test]
    fn test_paste_places_at_offset() {
        let mut canvas = Frame::black(6, 6);
        let patch = Frame::filled(2, 3, [9, 9, 9]);
        canvas.paste(&patch, 3, 1);
        assert_eq!(canvas.pixel(3, 1), [9, 9, 9]);
        assert_eq!(canvas.pixel(4, 3), [9, 9, 9]);
        assert_eq!(canvas.pixel(2, 1), [0, 0, 0]);
        assert_eq!(canvas.pixel(3, 4), [0, 0, 0]);
    }

    #[test]
    fn test_paste_clips_overflow() {
        let mut canvas = Frame::black(4, 4);
        canvas.paste(&Frame::filled(3, 3, [1, 1, 1]), 2, 2);
        assert_eq!(canvas.pixel(3, 3), [1, 1, 1]);
        canvas.paste(&Frame::filled(3, 3, [2, 2, 2]), 4, 0);
        assert_eq!(canvas.pixel(3, 0), [0, 0, 0]);
    }

    #[test]
    fn test_crop_then_paste_restores_source() {
        let frame = gradient(8, 6);
        let rect = Rect::new(1, 2, 5, 6);
        let mut canvas = frame.clone();
        canvas.paste(&Frame::black(4, 4), 1, 2);
        canvas.paste(&frame.crop(&rect), 1, 2);
        assert_eq!(canvas, frame);
    }

    #[test]
    fn test_as_ndarray_mut_shape_and_access() {
        let mut frame = gradient(4, 2);
        let arr = frame.as_ndarray_mut();
        assert_eq!(arr.shape(), &[2, 4, 3]); // (height, width, channels)
        assert_eq!(arr[[1, 3, 0]], 3);
        assert_eq!(arr[[1, 3, 1]], 1);
    }

    #[test]
    fn test_as_ndarray_mut_modification() {
        let mut frame = Frame::black(2, 2);
        {
            let mut arr = frame.as_ndarray_mut();
            arr[[0, 1, 2]] = 128;
        }
        assert_eq!(frame.pixel(1, 0), [0, 0, 128]);
    }
}
