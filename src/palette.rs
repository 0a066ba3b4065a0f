//! The preset swatches shown by the grid picker.

use crate::color::Color;

/// Number of columns the palette is laid out in.
pub const COLUMNS: usize = 12;

/// Number of rows the palette is laid out in.
pub const ROWS: usize = 10;

/// A single preset color. Swatches compare by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swatch(u32);

impl Swatch {
    /// Create a swatch from a packed `0xRRGGBB` value.
    pub const fn from_code(code: u32) -> Self {
        Self(code & 0x00ff_ffff)
    }

    /// The packed `0xRRGGBB` value.
    pub fn code(&self) -> u32 {
        self.0
    }

    /// The swatch as a color.
    pub fn color(&self) -> Color {
        Color::from_code(self.0)
    }

    /// The canonical uppercase hex form, without `#`.
    pub fn hex(&self) -> String {
        format!("{:06X}", self.0)
    }
}

/// The palette in display order, row-major: a grayscale ramp followed by nine
/// rows of hue-rotated shades, darkest first.
#[rustfmt::skip]
pub const SWATCHES: [Swatch; COLUMNS * ROWS] = [
    Swatch::from_code(0xffffff), Swatch::from_code(0xebebeb), Swatch::from_code(0xd6d6d6), Swatch::from_code(0xc2c2c2), Swatch::from_code(0xadadad), Swatch::from_code(0x999999),
    Swatch::from_code(0x858585), Swatch::from_code(0x707070), Swatch::from_code(0x5c5c5c), Swatch::from_code(0x474747), Swatch::from_code(0x333333), Swatch::from_code(0x000000),
    Swatch::from_code(0x14364b), Swatch::from_code(0x081c54), Swatch::from_code(0x0f0538), Swatch::from_code(0x2a093b), Swatch::from_code(0x370c1b), Swatch::from_code(0x541107),
    Swatch::from_code(0x532009), Swatch::from_code(0x53350d), Swatch::from_code(0x523e0f), Swatch::from_code(0x65611b), Swatch::from_code(0x505518), Swatch::from_code(0x2b3d16),
    Swatch::from_code(0x1e4c63), Swatch::from_code(0x102e76), Swatch::from_code(0x180b4f), Swatch::from_code(0x3f1256), Swatch::from_code(0x4e1629), Swatch::from_code(0x781e0e),
    Swatch::from_code(0x722f10), Swatch::from_code(0x734c16), Swatch::from_code(0x73591a), Swatch::from_code(0x8c8629), Swatch::from_code(0x707625), Swatch::from_code(0x3f5623),
    Swatch::from_code(0x2f6c8c), Swatch::from_code(0x1941a3), Swatch::from_code(0x280b72), Swatch::from_code(0x591e78), Swatch::from_code(0x6f223d), Swatch::from_code(0xa62c17),
    Swatch::from_code(0xa0461a), Swatch::from_code(0xa06b23), Swatch::from_code(0x9f7d28), Swatch::from_code(0xc3bc3c), Swatch::from_code(0x9da536), Swatch::from_code(0x587934),
    Swatch::from_code(0x3d8ab0), Swatch::from_code(0x2355ce), Swatch::from_code(0x331b8e), Swatch::from_code(0x720898), Swatch::from_code(0x8d234f), Swatch::from_code(0xd03a20),
    Swatch::from_code(0xca5a24), Swatch::from_code(0xc8872e), Swatch::from_code(0xc99f35), Swatch::from_code(0xf3ec4e), Swatch::from_code(0xc6d147), Swatch::from_code(0x729c44),
    Swatch::from_code(0x479fd3), Swatch::from_code(0x285ff5), Swatch::from_code(0x4724ab), Swatch::from_code(0x8c33b6), Swatch::from_code(0xaa395d), Swatch::from_code(0xeb512e),
    Swatch::from_code(0xed732e), Swatch::from_code(0xf3af3d), Swatch::from_code(0xf5c944), Swatch::from_code(0xfdfb67), Swatch::from_code(0xddeb5c), Swatch::from_code(0x86b953),
    Swatch::from_code(0x5ac4f7), Swatch::from_code(0x4f85f6), Swatch::from_code(0x5832e2), Swatch::from_code(0xaf42eb), Swatch::from_code(0xd44a7a), Swatch::from_code(0xed6c59),
    Swatch::from_code(0xef8c56), Swatch::from_code(0xf3b757), Swatch::from_code(0xf6cd5b), Swatch::from_code(0xfef781), Swatch::from_code(0xe6ef7a), Swatch::from_code(0xa3d16e),
    Swatch::from_code(0x78d3f8), Swatch::from_code(0x7fa6f8), Swatch::from_code(0x7e52f5), Swatch::from_code(0xc45ff6), Swatch::from_code(0xde789d), Swatch::from_code(0xf09286),
    Swatch::from_code(0xf2a984), Swatch::from_code(0xf6c983), Swatch::from_code(0xf9da85), Swatch::from_code(0xfef9a1), Swatch::from_code(0xebf29b), Swatch::from_code(0xbadc94),
    Swatch::from_code(0xa5e1fa), Swatch::from_code(0xadc5fa), Swatch::from_code(0xab8df7), Swatch::from_code(0xd796f8), Swatch::from_code(0xe8a7bf), Swatch::from_code(0xf4b8b1),
    Swatch::from_code(0xf6c7af), Swatch::from_code(0xf9daae), Swatch::from_code(0xfae5af), Swatch::from_code(0xfefbc0), Swatch::from_code(0xf3f7be), Swatch::from_code(0xd2e7ba),
    Swatch::from_code(0xd2effd), Swatch::from_code(0xd6e2fc), Swatch::from_code(0xd6cafa), Swatch::from_code(0xe9cbfb), Swatch::from_code(0xf3d4e0), Swatch::from_code(0xf9dcd9),
    Swatch::from_code(0xfae3d8), Swatch::from_code(0xfcedd7), Swatch::from_code(0xfdf2d8), Swatch::from_code(0xfefce0), Swatch::from_code(0xf8fade), Swatch::from_code(0xe2eed6),
];

/// All swatches in display order.
pub fn swatches() -> &'static [Swatch] {
    &SWATCHES
}

/// The swatch at `index`, if any.
pub fn get(index: usize) -> Option<Swatch> {
    SWATCHES.get(index).copied()
}

/// Index of the first swatch whose hex form matches `hex` ignoring case. A
/// leading `#` is ignored.
pub fn position_of_hex(hex: &str) -> Option<usize> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    SWATCHES
        .iter()
        .position(|swatch| swatch.hex().eq_ignore_ascii_case(hex))
}

/// Index of the swatch matching the canonical hex form of `color`.
pub fn position_of(color: &Color) -> Option<usize> {
    position_of_hex(&color.to_hex())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn swatches_are_unique() {
        let unique = swatches().iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), COLUMNS * ROWS);
    }

    #[test]
    fn first_row_is_a_grayscale_ramp() {
        let row = &swatches()[..COLUMNS];
        assert_eq!(row[0].hex(), "FFFFFF");
        assert_eq!(row[COLUMNS - 1].hex(), "000000");
        for swatch in row {
            let [r, g, b] = swatch.color().to_rgb8();
            assert!(r == g && g == b, "{} is not gray", swatch.hex());
        }
    }

    #[test]
    fn lookup_ignores_case_and_prefix() {
        assert_eq!(position_of_hex("14364B"), Some(12));
        assert_eq!(position_of_hex("#14364b"), Some(12));
        assert_eq!(position_of_hex("123456"), None);
        assert_eq!(position_of(&Color::from_code(0xe2eed6)), Some(119));
        assert_eq!(position_of(&Color::RED), None);
    }

    #[test]
    fn swatch_accessors() {
        let swatch = get(13).unwrap();
        assert_eq!(swatch.code(), 0x081c54);
        assert_eq!(swatch.hex(), "081C54");
        assert_eq!(swatch.color().to_rgb8(), [0x08, 0x1c, 0x54]);
        assert_eq!(Swatch::from_code(0xff081c54), swatch);
        assert_eq!(get(COLUMNS * ROWS), None);
    }
}
