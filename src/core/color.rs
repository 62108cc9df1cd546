use crate::core::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// Parses `#rrggbb` (the `#` is optional). The result is always opaque.
    pub fn from_hex(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let hex_str = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex_str.len() != 6 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidHexColor(text.to_string()));
        }

        match (
            u8::from_str_radix(&hex_str[0..2], 16),
            u8::from_str_radix(&hex_str[2..4], 16),
            u8::from_str_radix(&hex_str[4..6], 16),
        ) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::opaque(r, g, b)),
            _ => Err(CoreError::InvalidHexColor(text.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

#[cfg(test)]
mod tests;
