//! Metrics and encoding for the base-14 fonts the generators use.
//!
//! Widths are the standard Adobe AFM advance widths in 1/1000 em units.
//! Text is shown with WinAnsiEncoding, which covers the Portuguese and
//! English glyph repertoire of the form fields.

/// The subset of the base-14 set registered on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
}

impl CoreFont {
    pub const ALL: [CoreFont; 5] = [
        CoreFont::Helvetica,
        CoreFont::HelveticaBold,
        CoreFont::HelveticaOblique,
        CoreFont::HelveticaBoldOblique,
        CoreFont::Courier,
    ];

    pub fn resource_name(&self) -> &'static str {
        match self {
            CoreFont::Helvetica => "F1",
            CoreFont::HelveticaBold => "F2",
            CoreFont::HelveticaOblique => "F3",
            CoreFont::HelveticaBoldOblique => "F4",
            CoreFont::Courier => "F5",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            CoreFont::Helvetica => "Helvetica",
            CoreFont::HelveticaBold => "Helvetica-Bold",
            CoreFont::HelveticaOblique => "Helvetica-Oblique",
            CoreFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            CoreFont::Courier => "Courier",
        }
    }

    /// Pick the Helvetica variant for a span. Emphasis adds to whatever the
    /// base font already carries; Courier has no variants here.
    pub fn with_emphasis(&self, bold: bool, italic: bool) -> CoreFont {
        if matches!(self, CoreFont::Courier) {
            return CoreFont::Courier;
        }
        let bold = bold || self.is_bold();
        let italic = italic
            || matches!(
                self,
                CoreFont::HelveticaOblique | CoreFont::HelveticaBoldOblique
            );
        match (bold, italic) {
            (false, false) => CoreFont::Helvetica,
            (true, false) => CoreFont::HelveticaBold,
            (false, true) => CoreFont::HelveticaOblique,
            (true, true) => CoreFont::HelveticaBoldOblique,
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, CoreFont::HelveticaBold | CoreFont::HelveticaBoldOblique)
    }
}

// Advance widths for ASCII 32..=126. Oblique faces share the upright widths.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;

/// Fold a Latin-1 letter onto the base glyph whose advance it shares.
fn fold_accent(ch: char) -> char {
    match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => ch,
    }
}

/// Advance width of one character in 1/1000 em.
pub fn char_width(font: CoreFont, ch: char) -> u16 {
    if font == CoreFont::Courier {
        return COURIER_WIDTH;
    }
    let table: &[u16; 95] = if font.is_bold() {
        &HELVETICA_BOLD_WIDTHS
    } else {
        &HELVETICA_WIDTHS
    };
    let ch = fold_accent(ch);
    match ch {
        ' ' | '\u{a0}' => table[0],
        '\u{20}'..='\u{7e}' => table[ch as usize - 32],
        '–' => 556,
        '—' => 1000,
        '‘' | '’' => 222,
        '“' | '”' => 333,
        '…' => 1000,
        '€' => 556,
        '°' => 400,
        'ß' => 611,
        // Anything rarer gets the average lowercase advance; the layout
        // tolerates a fraction of a millimetre of slack per glyph.
        _ => 556,
    }
}

/// Measured width of a run of text at the given size, in points.
pub fn text_width(font: CoreFont, size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(font, c) as u32).sum();
    units as f32 * size / 1000.0
}

/// Encode UTF-8 text as WinAnsi bytes; unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\u{20}'..='\u{7e}' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => b'?',
    }
}
