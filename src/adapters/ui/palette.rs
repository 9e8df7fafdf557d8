//! Terminal colors shared by the banner, form and dashboard.

use crossterm::style::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const RED_600: (u8, u8, u8) = (0xdc, 0x26, 0x26);
pub const ORANGE_600: (u8, u8, u8) = (0xea, 0x58, 0x0c);

pub const RED: Color = rgb(0xef, 0x44, 0x44);
pub const ORANGE: Color = rgb(0xf9, 0x73, 0x16);
pub const RED_LIGHT: Color = rgb(0xf8, 0x71, 0x71);
pub const RED_PALE: Color = rgb(0xfe, 0xca, 0xca);
pub const EMERALD: Color = rgb(0x10, 0xb9, 0x81);
pub const EMERALD_LIGHT: Color = rgb(0x34, 0xd3, 0x99);
pub const YELLOW: Color = rgb(0xea, 0xb3, 0x08);
pub const YELLOW_LIGHT: Color = rgb(0xfa, 0xcc, 0x15);
pub const BLUE: Color = rgb(0x3b, 0x82, 0xf6);
pub const TEXT: Color = rgb(0xf1, 0xf5, 0xf9);
pub const TEXT_SOFT: Color = rgb(0xcb, 0xd5, 0xe1);
pub const MUTED: Color = rgb(0x94, 0xa3, 0xb8);
pub const DIM: Color = rgb(0x64, 0x74, 0x8b);
