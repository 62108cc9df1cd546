use crate::render::blend::blend_pixels;
use rayon::prelude::*;

/// Checkerboard tile edge in output pixels, independent of the grid size.
pub const CHECKER_TILE: u32 = 16;
pub const CHECKER_LIGHT: [u8; 4] = [255, 255, 255, 255];
pub const CHECKER_DARK: [u8; 4] = [204, 204, 204, 255];
pub const GRID_LINE_COLOR: [u8; 4] = [0, 0, 0, 255];
pub const GRID_LINE_OPACITY: u8 = 38;

/// Read-only access to a low-resolution RGBA raster.
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixels(&self) -> &[u8];
}

impl Raster for crate::core::store::BitmapStore {
    fn width(&self) -> u32 { self.width() }
    fn height(&self) -> u32 { self.height() }
    fn pixels(&self) -> &[u8] { self.pixels() }
}

impl Raster for crate::core::snapshot::Snapshot {
    fn width(&self) -> u32 { self.width() }
    fn height(&self) -> u32 { self.height() }
    fn pixels(&self) -> &[u8] { self.pixels() }
}

pub struct Compositor;

impl Compositor {
    pub fn frame_len(size: u32) -> usize {
        size as usize * size as usize * 4
    }

    /// Output coordinate to source cell along one axis, nearest-neighbor.
    #[inline(always)]
    fn cell_of(v: u32, out_size: u32, cells: u32) -> u32 {
        ((v as u64 * cells as u64) / out_size as u64) as u32
    }

    /// True for the first output pixel after an internal cell boundary, i.e.
    /// the pixel a 1-wide line stroked at `boundary + 0.5` covers.
    #[inline(always)]
    fn is_grid_line(v: u32, out_size: u32, cells: u32) -> bool {
        v > 0 && Self::cell_of(v, out_size, cells) != Self::cell_of(v - 1, out_size, cells)
    }

    fn is_complete(src: &[u8], w: u32, h: u32) -> bool {
        w > 0 && h > 0 && src.len() >= (w as usize) * (h as usize) * 4
    }

    #[inline(always)]
    fn checker(x: u32, y: u32) -> [u8; 4] {
        if ((x / CHECKER_TILE) + (y / CHECKER_TILE)) % 2 == 0 { CHECKER_LIGHT } else { CHECKER_DARK }
    }

    /// Renders the editing viewport: checkerboard, the bitmap magnified with
    /// nearest-neighbor sampling, then the semi-transparent cell grid.
    /// `frame` must hold `viewport_size * viewport_size` RGBA pixels.
    pub fn render<R: Raster + ?Sized>(bitmap: &R, frame: &mut [u8], viewport_size: u32, grid_size: u32) {
        if viewport_size == 0 || grid_size == 0 || frame.len() < Self::frame_len(viewport_size) {
            return;
        }
        let src = bitmap.pixels();
        let (src_w, src_h) = (bitmap.width(), bitmap.height());
        if !Self::is_complete(src, src_w, src_h) {
            return;
        }
        let stride = (viewport_size * 4) as usize;

        frame[..Self::frame_len(viewport_size)]
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y_idx, row)| {
                let y = y_idx as u32;
                let sy = Self::cell_of(y, viewport_size, src_h);
                let on_h_line = Self::is_grid_line(y, viewport_size, grid_size);

                for x in 0..viewport_size {
                    let sx = Self::cell_of(x, viewport_size, src_w);
                    let src_idx = ((sy * src_w + sx) * 4) as usize;
                    let cell = [src[src_idx], src[src_idx + 1], src[src_idx + 2], src[src_idx + 3]];

                    let mut fc = blend_pixels(Self::checker(x, y), cell, 255);
                    if on_h_line || Self::is_grid_line(x, viewport_size, grid_size) {
                        fc = blend_pixels(fc, GRID_LINE_COLOR, GRID_LINE_OPACITY);
                    }

                    let idx = (x * 4) as usize;
                    row[idx..idx + 4].copy_from_slice(&fc);
                }
            });
    }

    /// Renders the bitmap alone (no checkerboard, no grid) at
    /// `output_size x output_size`. Fully transparent cells come out as `[0; 4]`.
    pub fn render_flat<R: Raster + ?Sized>(bitmap: &R, frame: &mut [u8], output_size: u32) {
        if output_size == 0 || frame.len() < Self::frame_len(output_size) {
            return;
        }
        let src = bitmap.pixels();
        let (src_w, src_h) = (bitmap.width(), bitmap.height());
        if !Self::is_complete(src, src_w, src_h) {
            return;
        }
        let stride = (output_size * 4) as usize;

        frame[..Self::frame_len(output_size)]
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y_idx, row)| {
                let sy = Self::cell_of(y_idx as u32, output_size, src_h);
                for x in 0..output_size {
                    let sx = Self::cell_of(x, output_size, src_w);
                    let src_idx = ((sy * src_w + sx) * 4) as usize;
                    let idx = (x * 4) as usize;
                    if src[src_idx + 3] == 0 {
                        row[idx..idx + 4].fill(0);
                    } else {
                        row[idx..idx + 4].copy_from_slice(&src[src_idx..src_idx + 4]);
                    }
                }
            });
    }
}
