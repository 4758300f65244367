// RRGGBBAA colors, the swarm palette and CSS formatting for fillStyle

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Colors a swarm particle can be drawn with.
pub const PALETTE: [Color; 5] = [
    Color::from_u32(0x7cf0ffff), // cyan
    Color::from_u32(0xffd166ff), // amber
    Color::from_u32(0xff6b6bff), // coral
    Color::from_u32(0xc792eaff), // lilac
    Color::from_u32(0x4ade80ff), // green
];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// CSS hex notation, as accepted by `fillStyle`.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        let c = Color::from_u32(0x11223344);
        assert_eq!(c, Color { r: 0x11, g: 0x22, b: 0x33, a: 0x44 });
    }

    #[test]
    fn opaque_colors_use_short_hex() {
        assert_eq!(PALETTE[0].to_css(), "#7cf0ff");
        assert_eq!(PALETTE[4].to_css(), "#4ade80");
    }

    #[test]
    fn translucent_colors_keep_alpha() {
        assert_eq!(Color::from_u32(0xff000080).to_css(), "#ff000080");
    }

    #[test]
    fn palette_entries_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
