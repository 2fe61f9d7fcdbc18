use crate::foundation::core::{Canvas, Color, Point};
use crate::foundation::error::{VmError, VmResult};

/// Fixed-size RGB pixel grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    canvas: Canvas,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Allocate a `canvas`-sized buffer filled with `background`.
    pub fn new(canvas: Canvas, background: Color) -> VmResult<Self> {
        let n = canvas.pixel_count();
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(n).map_err(|e| {
            VmError::allocation(format!(
                "image buffer {}x{}: {e}",
                canvas.width, canvas.height
            ))
        })?;
        pixels.resize(n, background);
        Ok(Self { canvas, pixels })
    }

    /// Buffer dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.canvas.width && y < self.canvas.height)
            .then(|| y as usize * self.canvas.width as usize + x as usize)
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Pixel at a signed point, or `None` outside the buffer.
    pub fn at(&self, p: Point) -> Option<Color> {
        if !self.canvas.contains(p) {
            return None;
        }
        self.get(p.x as u32, p.y as u32)
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.pixels.chunks(self.canvas.width as usize)
    }

    /// Tightly packed RGB8 bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Count pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}
