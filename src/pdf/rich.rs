//! Rich-text paragraphs: a small inline-markup vocabulary (`<b>`, `<i>`,
//! `<u>`, `<br/>`, `<font color>`, `<a href>`, `&nbsp;`) parsed with
//! `kuchiki`, wrapped against the font metric tables and drawn onto a
//! [`Canvas`].

use kuchiki::traits::TendrilSink;
use kuchiki::{NodeData, NodeRef};

use super::canvas::{Canvas, A4_HEIGHT};
use super::fonts::{self, CoreFont};
use super::PdfError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy)]
pub struct ParagraphStyle {
    pub font: CoreFont,
    pub size: f32,
    pub leading: f32,
    pub align: Align,
}

impl ParagraphStyle {
    pub fn new(font: CoreFont, size: f32, leading: f32, align: Align) -> Self {
        Self {
            font,
            size,
            leading,
            align,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SpanState {
    bold: bool,
    italic: bool,
    underline: bool,
    color: Option<[f32; 3]>,
}

#[derive(Debug, Clone)]
struct Span {
    text: String,
    state: SpanState,
}

#[derive(Debug, Clone)]
enum Piece {
    Span(Span),
    Break,
}

/// A parsed paragraph, independent of any column width.
pub struct Paragraph {
    pieces: Vec<Piece>,
    style: ParagraphStyle,
}

impl Paragraph {
    /// Parse inline markup. Elements outside the supported vocabulary are a
    /// hard error; the sanitizer upstream is responsible for never letting
    /// one through on user input.
    pub fn parse(markup: &str, style: ParagraphStyle) -> Result<Self, PdfError> {
        let document = kuchiki::parse_html().one(format!("<body>{markup}</body>"));
        let body = document
            .select_first("body")
            .map_err(|_| PdfError::Markup("body".to_string()))?;
        let mut pieces = Vec::new();
        collect_pieces(body.as_node(), &SpanState::default(), &mut pieces)?;
        Ok(Self { pieces, style })
    }

    pub fn wrap(&self, width: f32) -> WrappedParagraph {
        let words = self.split_words();
        let space = fonts::char_width(self.style.font, ' ') as f32 * self.style.size / 1000.0;

        let mut lines: Vec<Vec<Word>> = Vec::new();
        let mut current: Vec<Word> = Vec::new();
        let mut current_width = 0.0f32;
        for token in words {
            match token {
                Token::Break => {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }
                Token::Word(word) => {
                    let added = if current.is_empty() {
                        word.width
                    } else {
                        space + word.width
                    };
                    if !current.is_empty() && current_width + added > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = word.width;
                    } else {
                        current_width += added;
                    }
                    current.push(word);
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        let total = lines.len();
        let built: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(idx, words)| self.build_line(words, width, space, idx + 1 == total))
            .collect();
        WrappedParagraph {
            lines: built,
            size: self.style.size,
            leading: self.style.leading,
        }
    }

    fn build_line(&self, words: Vec<Word>, width: f32, space: f32, last: bool) -> Line {
        // Merge adjacent words that share a style into single fragments.
        let mut frags: Vec<Frag> = Vec::new();
        for word in words {
            if let Some(prev) = frags.last_mut() {
                if prev.same_style(&word) {
                    prev.text.push(' ');
                    prev.text.push_str(&word.text);
                    prev.width += space + word.width;
                    continue;
                }
            }
            frags.push(Frag {
                font: word.font,
                underline: word.underline,
                color: word.color,
                width: word.width,
                text: word.text,
            });
        }
        let line_width: f32 = frags.iter().map(|f| f.width).sum();
        let spaces: usize = frags
            .iter()
            .map(|f| f.text.chars().filter(|c| *c == ' ').count())
            .sum();
        let (x_offset, word_spacing) = match self.style.align {
            Align::Left => (0.0, 0.0),
            Align::Center => ((width - line_width).max(0.0) / 2.0, 0.0),
            Align::Justify => {
                if last || spaces == 0 || line_width >= width {
                    (0.0, 0.0)
                } else {
                    (0.0, (width - line_width) / spaces as f32)
                }
            }
        };
        Line {
            frags,
            x_offset,
            word_spacing,
        }
    }

    fn split_words(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for piece in &self.pieces {
            match piece {
                Piece::Break => tokens.push(Token::Break),
                Piece::Span(span) => {
                    let font = self
                        .style
                        .font
                        .with_emphasis(span.state.bold, span.state.italic);
                    for raw in span.text.split(' ') {
                        if raw.is_empty() {
                            continue;
                        }
                        tokens.push(Token::Word(Word {
                            width: fonts::text_width(font, self.style.size, raw),
                            text: raw.to_string(),
                            font,
                            underline: span.state.underline,
                            color: span.state.color,
                        }));
                    }
                }
            }
        }
        tokens
    }
}

enum Token {
    Word(Word),
    Break,
}

struct Word {
    text: String,
    font: CoreFont,
    underline: bool,
    color: Option<[f32; 3]>,
    width: f32,
}

struct Frag {
    text: String,
    font: CoreFont,
    underline: bool,
    color: Option<[f32; 3]>,
    width: f32,
}

impl Frag {
    fn same_style(&self, word: &Word) -> bool {
        self.font == word.font && self.underline == word.underline && self.color == word.color
    }
}

struct Line {
    frags: Vec<Frag>,
    x_offset: f32,
    word_spacing: f32,
}

/// A paragraph measured against a column width, ready to draw.
pub struct WrappedParagraph {
    lines: Vec<Line>,
    size: f32,
    leading: f32,
}

impl WrappedParagraph {
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.leading
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn leading(&self) -> f32 {
        self.leading
    }

    /// Draw with `y` at the bottom edge of the block, mirroring the
    /// `wrap`-then-`draw` cursor arithmetic the renderers use.
    pub fn draw(&self, canvas: &mut Canvas, x: f32, y: f32) {
        let top = y + self.height();
        for index in 0..self.lines.len() {
            let baseline = top - self.size - index as f32 * self.leading;
            self.draw_line(canvas, index, x, baseline);
        }
    }

    pub(crate) fn draw_line(&self, canvas: &mut Canvas, index: usize, x: f32, baseline: f32) {
        let line = &self.lines[index];
        let mut cx = x + line.x_offset;
        for frag in &line.frags {
            canvas.text_run(
                frag.font,
                self.size,
                cx,
                baseline,
                &frag.text,
                line.word_spacing,
                frag.color,
            );
            let spaces = frag.text.chars().filter(|c| *c == ' ').count() as f32;
            let advance = frag.width + line.word_spacing * spaces;
            if frag.underline {
                let ops_color = frag.color;
                if let Some([r, g, b]) = ops_color {
                    canvas.set_fill_rgb(r, g, b);
                }
                canvas.rect_filled(cx, baseline - 1.5, advance, 0.5);
                if ops_color.is_some() {
                    canvas.set_fill_rgb(0.0, 0.0, 0.0);
                }
            }
            cx += advance;
        }
    }
}

/// Top-down flowed layout with automatic page breaks, for the abstract
/// pages whose body length is unbounded.
pub struct DocFlow<'a> {
    canvas: &'a mut Canvas,
    margin_left: f32,
    margin_bottom: f32,
    width: f32,
    y: f32,
    top: f32,
}

impl<'a> DocFlow<'a> {
    pub fn new(canvas: &'a mut Canvas, margin_left: f32, margin_right: f32, margin_top: f32, margin_bottom: f32) -> Self {
        let width = super::canvas::A4_WIDTH - margin_left - margin_right;
        let top = A4_HEIGHT - margin_top;
        Self {
            canvas,
            margin_left,
            margin_bottom,
            width,
            y: top,
            top,
        }
    }

    pub fn add(&mut self, paragraph: &Paragraph, space_after: f32) {
        let wrapped = paragraph.wrap(self.width);
        for index in 0..wrapped.line_count() {
            if self.y - wrapped.leading() < self.margin_bottom {
                self.canvas.new_page();
                self.y = self.top;
            }
            self.y -= wrapped.leading();
            wrapped.draw_line(self.canvas, index, self.margin_left, self.y);
        }
        self.y -= space_after;
    }
}

fn collect_pieces(
    node: &NodeRef,
    state: &SpanState,
    out: &mut Vec<Piece>,
) -> Result<(), PdfError> {
    for child in node.children() {
        match child.data() {
            NodeData::Text(text) => {
                let content = text.borrow().replace(['\n', '\r'], " ");
                if !content.is_empty() {
                    out.push(Piece::Span(Span {
                        text: content,
                        state: state.clone(),
                    }));
                }
            }
            NodeData::Element(el) => {
                let name = el.name.local.to_ascii_lowercase();
                match &*name {
                    "b" => {
                        let next = SpanState {
                            bold: true,
                            ..state.clone()
                        };
                        collect_pieces(&child, &next, out)?;
                    }
                    "i" => {
                        let next = SpanState {
                            italic: true,
                            ..state.clone()
                        };
                        collect_pieces(&child, &next, out)?;
                    }
                    "u" => {
                        let next = SpanState {
                            underline: true,
                            ..state.clone()
                        };
                        collect_pieces(&child, &next, out)?;
                    }
                    "br" => out.push(Piece::Break),
                    "font" | "a" => {
                        let mut next = state.clone();
                        let attrs = el.attributes.borrow();
                        if let Some(value) = attrs.get("color") {
                            if let Some(rgb) = parse_color(value) {
                                next.color = Some(rgb);
                            }
                        }
                        drop(attrs);
                        collect_pieces(&child, &next, out)?;
                    }
                    other => return Err(PdfError::Markup(other.to_string())),
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn parse_color(value: &str) -> Option<[f32; 3]> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "black" => return Some([0.0, 0.0, 0.0]),
        "blue" => return Some([0.0, 0.0, 1.0]),
        "red" => return Some([1.0, 0.0, 0.0]),
        "green" => return Some([0.0, 0.5, 0.0]),
        "white" => return Some([1.0, 1.0, 1.0]),
        _ => {}
    }
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(align: Align) -> ParagraphStyle {
        ParagraphStyle::new(CoreFont::Helvetica, 12.0, 14.0, align)
    }

    #[test]
    fn empty_markup_has_no_lines() {
        let paragraph = Paragraph::parse("", style(Align::Left)).expect("parse");
        let wrapped = paragraph.wrap(200.0);
        assert_eq!(wrapped.line_count(), 0);
        assert_eq!(wrapped.height(), 0.0);
    }

    #[test]
    fn wraps_to_column_width() {
        let paragraph = Paragraph::parse(
            "uma frase razoavelmente longa que certamente precisa quebrar",
            style(Align::Justify),
        )
        .expect("parse");
        let narrow = paragraph.wrap(100.0);
        let wide = paragraph.wrap(500.0);
        assert!(narrow.line_count() > wide.line_count());
        assert_eq!(narrow.height(), narrow.line_count() as f32 * 14.0);
    }

    #[test]
    fn explicit_break_forces_a_line() {
        let paragraph =
            Paragraph::parse("primeira<br/>segunda", style(Align::Left)).expect("parse");
        assert_eq!(paragraph.wrap(500.0).line_count(), 2);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result = Paragraph::parse("<table>x</table>", style(Align::Left));
        assert!(matches!(result, Err(PdfError::Markup(tag)) if tag == "table"));
    }

    #[test]
    fn bold_markup_switches_font() {
        let paragraph = Paragraph::parse("<b>Negrito</b>", style(Align::Left)).expect("parse");
        let plain = Paragraph::parse("Negrito", style(Align::Left)).expect("parse");
        // Helvetica-Bold is wider than Helvetica for the same word.
        let bold_line = &paragraph.wrap(500.0).lines[0];
        let plain_line = &plain.wrap(500.0).lines[0];
        let bold_width: f32 = bold_line.frags.iter().map(|f| f.width).sum();
        let plain_width: f32 = plain_line.frags.iter().map(|f| f.width).sum();
        assert!(bold_width > plain_width);
    }

    #[test]
    fn nbsp_does_not_split_words() {
        let paragraph =
            Paragraph::parse("junto&nbsp;sempre", style(Align::Left)).expect("parse");
        let wrapped = paragraph.wrap(10.0);
        // A regular space would have produced two lines at this width.
        assert_eq!(wrapped.line_count(), 1);
    }

    #[test]
    fn justify_spreads_all_but_last_line() {
        let paragraph = Paragraph::parse(
            "palavras repetidas palavras repetidas palavras repetidas palavras",
            style(Align::Justify),
        )
        .expect("parse");
        let wrapped = paragraph.wrap(150.0);
        assert!(wrapped.line_count() >= 2);
        assert!(wrapped.lines[0].word_spacing > 0.0);
        assert_eq!(wrapped.lines[wrapped.line_count() - 1].word_spacing, 0.0);
    }
}
