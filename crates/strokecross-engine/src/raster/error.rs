use std::fmt;

/// Why a path could not be turned into an [`AlphaRaster`](super::AlphaRaster).
///
/// Every variant is recoverable: the query facade treats a failed raster as
/// "no geometry" and reports no intersection.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The path has no drawable geometry.
    EmptyPath,
    /// The path's bounds contain NaN or infinite coordinates.
    NonFiniteBounds,
    /// The path's bounds lie outside the addressable pixel range.
    OutOfRange,
    /// Stroke width must be a positive, finite number.
    InvalidStrokeWidth(f32),
    /// The raster would exceed the allocation ceiling.
    TooLarge { width: u32, height: u32 },
    /// The rasterizer could not allocate a drawing surface.
    SurfaceAllocation { width: u32, height: u32 },
    /// The rasterizer returned a buffer whose size disagrees with the requested frame.
    FrameMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    /// Pixel buffer geometry does not describe the supplied bytes.
    InvalidBuffer(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyPath => write!(f, "path has no drawable geometry"),
            RenderError::NonFiniteBounds => write!(f, "path bounds are not finite"),
            RenderError::OutOfRange => write!(f, "path bounds exceed the pixel coordinate range"),
            RenderError::InvalidStrokeWidth(w) => write!(f, "invalid stroke width {w}"),
            RenderError::TooLarge { width, height } => {
                write!(f, "raster {width}x{height} exceeds the allocation limit")
            }
            RenderError::SurfaceAllocation { width, height } => {
                write!(f, "failed to allocate a {width}x{height} drawing surface")
            }
            RenderError::FrameMismatch { expected, actual } => write!(
                f,
                "rasterizer returned {}x{} buffer for a {}x{} frame",
                actual.0, actual.1, expected.0, expected.1
            ),
            RenderError::InvalidBuffer(msg) => write!(f, "invalid pixel buffer: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
