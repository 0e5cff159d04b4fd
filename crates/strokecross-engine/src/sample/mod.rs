//! Overlap sampling and candidate collection.
//!
//! [`overlap`] walks the shared pixel frame of two rasters and yields both
//! alphas per pixel; [`collect_candidates`] keeps the pixels inked in both.

mod collect;
mod overlap;

pub use collect::{collect_candidates, DEFAULT_ALPHA_THRESHOLD};
pub use overlap::{overlap, Overlap, Sample};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::coords::{PixelRect, Rect};
    use crate::raster::{AlphaRaster, PixelBuffer, PixelFormat};

    /// A8 raster whose top-left pixel sits at path-space `(x, y)`.
    pub(crate) fn raster(x: i32, y: i32, rows: &[&[u8]]) -> AlphaRaster {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let data: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let buffer = PixelBuffer::new(data, width, height, width as usize, PixelFormat::Alpha8).unwrap();
        AlphaRaster::new(
            Rect::new(x as f32, y as f32, width as f32, height as f32),
            PixelRect::new(x, y, width, height),
            buffer,
        )
        .unwrap()
    }

    /// Same as [`raster`] but stored as BGRA with `pad` bytes of padding per row.
    pub(crate) fn padded_bgra_raster(x: i32, y: i32, pad: usize, rows: &[&[u8]]) -> AlphaRaster {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let stride = width as usize * 4 + pad;
        let mut data = vec![0u8; stride * height as usize];
        for (row_index, row) in rows.iter().enumerate() {
            for (col, a) in row.iter().enumerate() {
                let px = row_index * stride + col * 4;
                data[px..px + 4].copy_from_slice(&[0, 0, 0, *a]);
            }
        }
        let buffer = PixelBuffer::new(data, width, height, stride, PixelFormat::Bgra8).unwrap();
        AlphaRaster::new(
            Rect::new(x as f32, y as f32, width as f32, height as f32),
            PixelRect::new(x, y, width, height),
            buffer,
        )
        .unwrap()
    }
}
