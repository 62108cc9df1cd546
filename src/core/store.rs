use super::color::Color;
use super::snapshot::Snapshot;

pub const GRID_SIZE: u32 = 32;

/// The single authoritative low-resolution raster.
pub struct BitmapStore {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl BitmapStore {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(((y as u32 * self.width + x as u32) * 4) as usize)
    }

    pub fn read(&self) -> Snapshot {
        Snapshot::new(self.width, self.height, &self.pixels)
    }

    /// Replaces the contents wholesale. Snapshots of another size are ignored.
    pub fn write(&mut self, snapshot: &Snapshot) {
        if snapshot.width() != self.width || snapshot.height() != self.height {
            log::warn!(
                "ignoring {}x{} snapshot for {}x{} bitmap",
                snapshot.width(), snapshot.height(), self.width, self.height
            );
            return;
        }
        self.pixels.copy_from_slice(snapshot.pixels());
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let idx = self.index_of(x, y)?;
        Some(Color::from_slice(&self.pixels[idx..idx + 4]))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Zeroes alpha only; the stored RGB channels survive.
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx + 3] = 0;
        }
    }

    pub fn fill_all(&mut self, color: Color) {
        let rgba = color.to_array();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn clear_all(&mut self) {
        self.pixels.fill(0);
    }
}

impl Default for BitmapStore {
    fn default() -> Self {
        Self::new(GRID_SIZE, GRID_SIZE)
    }
}

#[cfg(test)]
mod tests;
