//! Board-feet derivation for dimensioned lumber.
//!
//! `BF = (length_in * width_in * thickness_in * pieces) / 144`

/// Cubic inches in one board foot.
pub const CUBIC_INCHES_PER_BF: f64 = 144.0;

/// Parse one numeric form input. Empty, non-numeric or non-finite text is
/// treated as absent.
pub fn parse_input(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Board feet for positive dimensions, `None` when any input is zero or
/// negative or the product overflows.
pub fn board_feet(length: f64, width: f64, thickness: f64, pieces: f64) -> Option<f64> {
    if [length, width, thickness, pieces].iter().all(|v| *v > 0.0) {
        Some(length * width * thickness * pieces / CUBIC_INCHES_PER_BF).filter(|bf| bf.is_finite())
    } else {
        None
    }
}

/// Two-decimal rendering with the `BF` suffix. Exact ties round away from
/// zero, so 18 cubic inches (0.125 BF) reads "0.13 BF".
pub fn format_board_feet(value: f64) -> String {
    let cents = (value * 100.0).round();
    format!("{:.2} BF", cents / 100.0)
}

/// Derived unit string for the four raw text inputs, or `None` when they
/// are not all present and strictly positive.
pub fn derive_unit(length: &str, width: &str, thickness: &str, pieces: &str) -> Option<String> {
    let l = parse_input(length)?;
    let w = parse_input(width)?;
    let t = parse_input(thickness)?;
    let q = parse_input(pieces)?;
    board_feet(l, w, t, q).map(format_board_feet)
}

/// Reads the numeric part back out of a derived unit such as "120.00 BF".
pub fn parse_board_feet_unit(unit: &str) -> Option<f64> {
    let re = regex::Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)\s*BF\s*$").ok()?;
    let caps = re.captures(unit)?;
    caps.get(1)?.as_str().parse().ok()
}
