//! Lineage colors

use crate::types::LineageId;

/// Ordered lineage palette; lineage `n` uses entry `n % len`
pub const LINEAGE_PALETTE: [&str; 8] = [
    "#a855f7", // purple
    "#06b6d4", // cyan
    "#22c55e", // green
    "#f97316", // orange
    "#ec4899", // pink
    "#3b82f6", // blue
    "#eab308", // yellow
    "#ef4444", // red
];

/// Color for a lineage. Ids a palette length apart share a color.
pub const fn lineage_color(lineage: LineageId) -> &'static str {
    LINEAGE_PALETTE[lineage.0 % LINEAGE_PALETTE.len()]
}

/// Parse `#rrggbb` into components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
