//! Style resolution: token class + active feature marks → visual style.
//!
//! This is the only piece that knows about colors. The tokenizer emits
//! classified spans; [`Theme::resolve`] maps each one to an immutable
//! [`Style`] value the renderer consumes. Resolution is a pure function of
//! (class, marks), so identical spans always style identically.

use facet_edit_buffer::{Color, Style};

use crate::language::FEATURE_COUNT;
use crate::state::FeatureMark;
use crate::tokenizer::TokenClass;

/// How much each channel of a feature color is darkened when used as a
/// delimiter foreground or an overlay, keeping it distinguishable from the
/// flat palette color.
const FEATURE_DARKEN: u8 = 41;

/// Maps token classes and feature marks to concrete styles.
///
/// Base styles are per token class; when any feature mark is active over a
/// span, an overlay mixes the active slots' palette colors into the span
/// background (negative marks additionally set italic).
#[derive(Debug, Clone)]
pub struct Theme {
    normal: Style,
    symbol: Style,
    number: Style,
    keyword: Style,
    string: Style,
    line_comment: Style,
    block_comment: Style,
    doc_comment: Style,
    /// Palette color per feature slot.
    feature_colors: [Color; FEATURE_COUNT],
}

impl Theme {
    /// The classic light theme: black text, blue keywords, green comments,
    /// and a pastel palette for the six feature slots.
    pub fn classic() -> Self {
        Self {
            normal: Style::default(),
            symbol: Style {
                bold: true,
                ..Style::default()
            },
            number: Style {
                fg: Color::rgb(0xA80A0A),
                bold: true,
                ..Style::default()
            },
            keyword: Style {
                fg: Color::rgb(0x1E1EA8),
                bold: true,
                ..Style::default()
            },
            string: Style {
                fg: Color::rgb(0xA80AA8),
                ..Style::default()
            },
            line_comment: Style {
                fg: Color::rgb(0x0A940A),
                ..Style::default()
            },
            block_comment: Style {
                fg: Color::rgb(0x0A940A),
                ..Style::default()
            },
            doc_comment: Style {
                fg: Color::rgb(0x0A940A),
                bold: true,
                ..Style::default()
            },
            feature_colors: [
                Color::Rgb { r: 255, g: 225, b: 205 },
                Color::Rgb { r: 255, g: 205, b: 225 },
                Color::Rgb { r: 205, g: 255, b: 225 },
                Color::Rgb { r: 225, g: 255, b: 205 },
                Color::Rgb { r: 205, g: 225, b: 255 },
                Color::Rgb { r: 225, g: 205, b: 255 },
            ],
        }
    }

    /// Resolves a token class plus the active feature marks to a final style.
    pub fn resolve(&self, class: TokenClass, marks: &[FeatureMark; FEATURE_COUNT]) -> Style {
        let mut style = match class {
            TokenClass::Normal => self.normal,
            TokenClass::Symbol => self.symbol,
            TokenClass::Number => self.number,
            TokenClass::Keyword => self.keyword,
            TokenClass::Str => self.string,
            TokenClass::LineComment => self.line_comment,
            TokenClass::BlockComment => self.block_comment,
            TokenClass::DocComment => self.doc_comment,
            TokenClass::Feature { slot, .. } => Style {
                fg: self.feature_colors[slot].darkened(FEATURE_DARKEN),
                bold: true,
                ..Style::default()
            },
        };

        let active: Vec<Color> = marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m != FeatureMark::Off)
            .map(|(slot, _)| self.feature_colors[slot].darkened(FEATURE_DARKEN))
            .collect();
        if !active.is_empty() {
            style.bg = mix(&active);
            if marks.iter().any(|m| *m == FeatureMark::Negative) {
                style.italic = true;
            }
        }

        style
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Channel-wise average of a non-empty set of RGB colors.
fn mix(colors: &[Color]) -> Color {
    let mut r = 0u32;
    let mut g = 0u32;
    let mut b = 0u32;
    let mut count = 0u32;
    for color in colors {
        if let Color::Rgb { r: cr, g: cg, b: cb } = color {
            r += *cr as u32;
            g += *cg as u32;
            b += *cb as u32;
            count += 1;
        }
    }
    if count == 0 {
        return Color::Default;
    }
    Color::Rgb {
        r: (r / count) as u8,
        g: (g / count) as u8,
        b: (b / count) as u8,
    }
}
