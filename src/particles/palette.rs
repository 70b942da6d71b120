use crate::math::Vec3;

/// Castle sparkle colors: gold, violet, pink, stardust
pub const CASTLE_PALETTE: [Vec3; 4] = [
    Vec3::new(1.0, 0.75, 0.15),
    Vec3::new(0.65, 0.55, 0.98),
    Vec3::new(0.96, 0.45, 0.71),
    Vec3::new(1.0, 0.95, 0.78),
];

/// Cursor trail colors as CSS strings
pub const SPARKLE_COLORS: [&str; 6] = [
    "#fbbf24", // gold
    "#a78bfa", // violet
    "#f472b6", // pink
    "#38bdf8", // blue
    "#fef3c7", // stardust
    "#ffffff",
];

/// Parse `#rrggbb` or `#rgb` into linear 0..1 components
pub fn parse_hex_color(hex: &str) -> Result<Vec3, String> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() {
        return Err(format!("Invalid color '{}'", hex));
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(format!("Invalid color '{}'", hex)),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| format!("Invalid color '{}'", hex))
    };

    Ok(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}
