//! Quantized render output.

/// An 8-bit grayscale image, row-major, addressed by `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Number of pixel columns.
    pub width: u32,
    /// Number of pixel rows.
    pub height: u32,
    /// Intensities, `width * height` entries, row after row.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// An all-black frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    fn index(&self, column: u32, row: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    /// Intensity at `(column, row)`, or `None` outside the frame.
    pub fn get(&self, column: u32, row: u32) -> Option<u8> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.pixels[self.index(column, row)])
    }

    /// Set the intensity at `(column, row)`. Out-of-range writes are ignored.
    pub fn set(&mut self, column: u32, row: u32, intensity: u8) {
        if column < self.width && row < self.height {
            let idx = self.index(column, row);
            self.pixels[idx] = intensity;
        }
    }
}

/// Counts gathered over one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pixels whose ray hit a shape in front of the viewpoint.
    pub hit_pixels: u64,
    /// Pixels whose ray hit nothing.
    pub background_pixels: u64,
}

/// Map a brightness to an output intensity using the scene's total light
/// budget: `round(brightness / total * 255)`.
///
/// Non-positive or non-finite inputs, including a zero total, give `0`.
pub fn quantize(brightness: f64, total: f64) -> u8 {
    if !(brightness > 0.0 && total > 0.0) || !brightness.is_finite() || !total.is_finite() {
        return 0;
    }
    (brightness / total * 255.0).round().clamp(0.0, 255.0) as u8
}
