use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xd4, 0x6a, 0x8c);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ROW_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const PRICE_TEXT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STAR_FILLED: Color = Color::Rgb(0xfa, 0xcc, 0x15);

const SWATCHES: [Color; 6] = [
    Color::Rgb(0xd4, 0x6a, 0x8c),
    Color::Rgb(0x8c, 0x6a, 0xd4),
    Color::Rgb(0x6a, 0xa8, 0xd4),
    Color::Rgb(0x6a, 0xd4, 0x9e),
    Color::Rgb(0xd4, 0xb0, 0x6a),
    Color::Rgb(0xd4, 0x6a, 0x6a),
];

/// Placeholder art color for an image asset key.
///
/// Images are never fetched; the key just picks a stable swatch.
pub fn swatch_color(key: &str) -> Color {
    let hash = key
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    SWATCHES[hash % SWATCHES.len()]
}
