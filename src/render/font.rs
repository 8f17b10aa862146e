//! Metrics of the standard Helvetica font, used to lay out text without
//! embedding a font program in the PDF.

/// PostScript name of the font referenced from the page resources.
pub const BASE_FONT: &str = "Helvetica";

/// Height of capitals above the baseline, as a fraction of the font size.
pub const CAP_HEIGHT: f64 = 0.718;
/// Depth of descenders below the baseline, as a fraction of the font size.
pub const DESCENT: f64 = 0.207;

/// Advance widths (1/1000 em) for the printable ASCII range `' '..='~'`.
#[rustfmt::skip]
const WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

const DEFAULT_WIDTH: u16 = 556;

fn advance(c: char) -> u16 {
    match c {
        ' '..='~' => WIDTHS[c as usize - ' ' as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` set at `size`, in the same unit as `size`.
pub fn text_width(text: &str, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(advance(c))).sum();
    f64::from(units) * size / 1000.0
}

/// Encode `text` for the WinAnsi font encoding. Latin-1
/// characters keep their code; anything else becomes `?`. WinAnsi puts
/// other glyphs at 0x80..=0x9F, so the C1 controls are replaced too.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(0x80..=0x9F) | Err(_) => b'?',
            Ok(byte) => byte,
        })
        .collect()
}
