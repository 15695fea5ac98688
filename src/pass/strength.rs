//! Cosmetic strength hint derived from password length.

use std::fmt;

use super::generate::MAX_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthColor {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthColor {
    pub fn token(self) -> &'static str {
        match self {
            StrengthColor::Weak => "weak",
            StrengthColor::Fair => "fair",
            StrengthColor::Good => "good",
            StrengthColor::Strong => "strong",
        }
    }

    /// Bar colour as (r, g, b).
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            StrengthColor::Weak => (0xd7, 0x06, 0x06),
            StrengthColor::Fair => (0xd7, 0x9c, 0x06),
            StrengthColor::Good => (0x0e, 0xe0, 0x3c),
            StrengthColor::Strong => (0x05, 0x97, 0x25),
        }
    }
}

impl fmt::Display for StrengthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarWidth {
    Quarter,
    Third,
    Half,
    Full,
}

impl BarWidth {
    pub fn percent(self) -> f32 {
        match self {
            BarWidth::Quarter => 25.0,
            BarWidth::Third => 33.33,
            BarWidth::Half => 50.0,
            BarWidth::Full => 100.0,
        }
    }

    /// Number of cells out of `total` the bar should fill.
    pub fn cells(self, total: usize) -> usize {
        ((self.percent() / 100.0) * total as f32).round() as usize
    }
}

impl fmt::Display for BarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarWidth::Third => f.write_str("33.33%"),
            other => write!(f, "{}%", other.percent() as u32),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthHint {
    pub color: Option<StrengthColor>,
    pub width: BarWidth,
}

/// Map a length to its colour and bar width.
///
/// Lengths outside 6..=100 get no colour and a full-width bar.
pub fn length_to_strength_hint(length: usize) -> StrengthHint {
    let (color, width) = match length {
        6..=9 => (Some(StrengthColor::Weak), BarWidth::Quarter),
        10..=21 => (Some(StrengthColor::Fair), BarWidth::Third),
        22..=39 => (Some(StrengthColor::Good), BarWidth::Half),
        40..=MAX_LENGTH => (Some(StrengthColor::Strong), BarWidth::Full),
        _ => (None, BarWidth::Full),
    };
    StrengthHint { color, width }
}

/// Entropy in bits of a uniformly sampled password.
pub fn entropy_bits(length: usize, alphabet_len: usize) -> f64 {
    if alphabet_len == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_len as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::MIN_LENGTH;

    fn hint(length: usize) -> (Option<&'static str>, BarWidth) {
        let h = length_to_strength_hint(length);
        (h.color.map(StrengthColor::token), h.width)
    }

    #[test]
    fn range_starts() {
        assert_eq!(hint(6), (Some("weak"), BarWidth::Quarter));
        assert_eq!(hint(10), (Some("fair"), BarWidth::Third));
        assert_eq!(hint(22), (Some("good"), BarWidth::Half));
        assert_eq!(hint(40), (Some("strong"), BarWidth::Full));
    }

    #[test]
    fn range_ends() {
        assert_eq!(hint(9), (Some("weak"), BarWidth::Quarter));
        assert_eq!(hint(21), (Some("fair"), BarWidth::Third));
        assert_eq!(hint(39), (Some("good"), BarWidth::Half));
        assert_eq!(hint(100), (Some("strong"), BarWidth::Full));
    }

    #[test]
    fn out_of_range_has_no_color() {
        for length in [0, 5, 101, 1000] {
            assert_eq!(hint(length), (None, BarWidth::Full));
        }
    }

    #[test]
    fn every_length_in_range_has_a_color() {
        for length in MIN_LENGTH..=MAX_LENGTH {
            assert!(length_to_strength_hint(length).color.is_some(), "{length}");
        }
    }

    #[test]
    fn width_display() {
        assert_eq!(BarWidth::Quarter.to_string(), "25%");
        assert_eq!(BarWidth::Third.to_string(), "33.33%");
        assert_eq!(BarWidth::Half.to_string(), "50%");
        assert_eq!(BarWidth::Full.to_string(), "100%");
    }

    #[test]
    fn cells_scale_with_width() {
        assert_eq!(BarWidth::Quarter.cells(72), 18);
        assert_eq!(BarWidth::Half.cells(72), 36);
        assert_eq!(BarWidth::Full.cells(72), 72);
    }

    #[test]
    fn entropy() {
        assert_eq!(entropy_bits(16, 0), 0.0);
        assert!((entropy_bits(8, 16) - 32.0).abs() < 1e-9);
    }
}
