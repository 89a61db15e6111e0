use std::io::{self, Write};

use crate::display::{Document, Rgb, SpanStyle};

/// SGR reset
const RESET: &[u8] = b"\x1b[0m";

/// Colour channel levels of the xterm 6x6x6 cube
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// xterm defaults for the 16 basic colours
const ANSI_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// How many colours the terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    TrueColor,
    Palette256,
    Palette16,
    Palette8,
}

fn distance(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

fn nearest_cube_level(value: u8) -> usize {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, &level)| (level as i32 - value as i32).abs())
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Closest xterm 256-colour index, from the colour cube or the grey ramp
pub fn to_palette256(color: Rgb) -> u8 {
    let (ri, gi, bi) = (
        nearest_cube_level(color.r),
        nearest_cube_level(color.g),
        nearest_cube_level(color.b),
    );
    let cube = Rgb::new(CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    let average = (color.r as u32 + color.g as u32 + color.b as u32) / 3;
    let grey_step = (average.saturating_sub(3) / 10).min(23);
    let grey_value = (8 + grey_step * 10) as u8;
    let grey = Rgb::new(grey_value, grey_value, grey_value);
    let grey_index = 232 + grey_step as usize;

    if distance(color, grey) < distance(color, cube) {
        grey_index as u8
    } else {
        cube_index as u8
    }
}

/// Closest entry among the first `size` basic colours
pub fn to_basic(color: Rgb, size: usize) -> usize {
    ANSI_PALETTE[..size]
        .iter()
        .enumerate()
        .min_by_key(|(_, &candidate)| distance(color, candidate))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// SGR parameter list for a foreground colour
fn foreground_code(color: Rgb, depth: ColorDepth) -> String {
    match depth {
        ColorDepth::TrueColor => format!("38;2;{};{};{}", color.r, color.g, color.b),
        ColorDepth::Palette256 => format!("38;5;{}", to_palette256(color)),
        ColorDepth::Palette16 => match to_basic(color, 16) {
            i if i < 8 => format!("{}", 30 + i),
            i => format!("{}", 90 + i - 8),
        },
        ColorDepth::Palette8 => format!("{}", 30 + to_basic(color, 8)),
    }
}

/// Full SGR sequence selecting `style`, starting from a reset
pub fn sgr(style: &SpanStyle, depth: ColorDepth) -> String {
    let mut params = vec!["0".to_string()];
    if style.bold {
        params.push("1".to_string());
    }
    if style.italic {
        params.push("3".to_string());
    }
    if style.underline {
        params.push("4".to_string());
    }
    if let Some(fg) = style.fg {
        params.push(foreground_code(fg, depth));
    }
    format!("\x1b[{}m", params.join(";"))
}

/// Write the document with ANSI escapes, one sequence per style change
pub fn write_ansi(document: &Document, depth: ColorDepth, out: &mut dyn Write) -> io::Result<()> {
    let mut current: Option<SpanStyle> = None;

    for span in document.spans() {
        if span.text.is_empty() {
            continue;
        }
        if current != Some(span.style) {
            out.write_all(sgr(&span.style, depth).as_bytes())?;
            current = Some(span.style);
        }
        out.write_all(span.text.as_bytes())?;
    }

    if current.is_some() {
        out.write_all(RESET)?;
    }
    Ok(())
}
