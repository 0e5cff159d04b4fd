use super::RenderError;

/// Byte layout of a pixel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelFormat {
    /// 4 bytes per pixel, alpha last. tiny-skia's premultiplied layout.
    Rgba8,
    /// 4 bytes per pixel, alpha last. Common platform bitmap layout.
    Bgra8,
    /// Single alpha byte per pixel.
    Alpha8,
}

impl PixelFormat {
    /// Bytes per pixel.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Rgba8 | PixelFormat::Bgra8 => 4,
            PixelFormat::Alpha8 => 1,
        }
    }

    /// Offset of the alpha byte within a pixel.
    #[inline]
    pub const fn alpha_offset(self) -> usize {
        match self {
            PixelFormat::Rgba8 | PixelFormat::Bgra8 => 3,
            PixelFormat::Alpha8 => 0,
        }
    }
}

/// Owned, bounds-checked pixel storage.
///
/// Rows are `stride` bytes apart; `stride` may exceed `width * channels`
/// when the producer pads rows for alignment. All reads go through
/// [`alpha_at`](Self::alpha_at).
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
}

impl PixelBuffer {
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidBuffer(format!("zero size ({width}x{height})")));
        }

        let row_bytes = (width as usize)
            .checked_mul(format.channels())
            .ok_or_else(|| RenderError::InvalidBuffer(format!("row of {width} pixels overflows")))?;
        if stride < row_bytes {
            return Err(RenderError::InvalidBuffer(format!(
                "stride {stride} is shorter than a {width}-pixel row ({row_bytes} bytes)"
            )));
        }

        // The last row need not carry padding.
        let required = stride
            .checked_mul(height as usize - 1)
            .and_then(|bytes| bytes.checked_add(row_bytes))
            .ok_or_else(|| {
                RenderError::InvalidBuffer(format!(
                    "stride {stride} over {height} rows overflows the address space"
                ))
            })?;
        if data.len() < required {
            return Err(RenderError::InvalidBuffer(format!(
                "{} bytes supplied, {required} required for {width}x{height} with stride {stride}",
                data.len()
            )));
        }

        Ok(Self { data, width, height, stride, format })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Alpha of buffer-local pixel `(x, y)` in `[0, 1]`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside `[0, width) × [0, height)`.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        let offset =
            y as usize * self.stride + x as usize * self.format.channels() + self.format.alpha_offset();
        f32::from(self.data[offset]) / 255.0
    }
}
