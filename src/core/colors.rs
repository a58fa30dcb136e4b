use crate::constants::{COLOR_SPACE, HEX_DIGITS};
use rand::Rng;

/// One color as `#RRGGBB`, upper-case, always six digits.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let u: f64 = rng.gen();
    // u < 1.0, but guard the edge so the value never spills into a 7th digit
    let value = ((u * COLOR_SPACE) as u32).min(COLOR_SPACE as u32 - 1);
    format!("#{:0width$X}", value, width = HEX_DIGITS)
}

/// `count` independent colors. Duplicates are allowed.
pub fn generate_colors<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count).map(|_| random_hex_color(rng)).collect()
}

#[inline]
pub fn is_hex_color(s: &str) -> bool {
    s.len() == HEX_DIGITS + 1
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
