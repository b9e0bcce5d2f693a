use ratatui::style::Color;

use crate::confetti::PALETTE_SIZE;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const INPUT_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_WARNING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const CONFETTI_COLORS: [Color; PALETTE_SIZE] = [
    Color::Rgb(0x26, 0xcc, 0xff),
    Color::Rgb(0xa2, 0x5a, 0xfd),
    Color::Rgb(0xff, 0x5e, 0x7e),
    Color::Rgb(0x88, 0xff, 0x5a),
    Color::Rgb(0xfc, 0xff, 0x42),
    Color::Rgb(0xff, 0xa6, 0x2d),
    Color::Rgb(0xff, 0x36, 0xff),
];
