//! Style value types handed to the rendering collaborator.
//!
//! The highlighting core never talks to a drawing API. It produces immutable
//! value-type descriptors, a [`Style`] attached to text runs ([`Span`],
//! [`StyledLine`]), and the renderer maps them to its own representation at
//! the boundary.

/// A renderer-agnostic color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Default text color (the renderer/theme decides).
    #[default]
    Default,
    /// 24-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Convenience constructor from 0xRRGGBB.
    pub const fn rgb(hex: u32) -> Self {
        Color::Rgb {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Returns this color darkened by subtracting `amount` from each channel,
    /// saturating at zero. `Default` stays `Default`.
    pub fn darkened(self, amount: u8) -> Self {
        match self {
            Color::Default => Color::Default,
            Color::Rgb { r, g, b } => Color::Rgb {
                r: r.saturating_sub(amount),
                g: g.saturating_sub(amount),
                b: b.saturating_sub(amount),
            },
        }
    }
}

/// Immutable text styling attributes for one run of characters.
///
/// The default style is unstyled text: default colors, regular weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

/// A contiguous run of text with uniform styling.
///
/// Spans are the atoms of styled text; a line is a sequence of spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// The text content of this span.
    pub text: String,
    /// The style applied to this text.
    pub style: Style,
}

impl Span {
    /// Creates a new span with the given text and style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an unstyled span (default style).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }
}

/// A line as the renderer sees it: a sequence of styled spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    /// The spans comprising this line.
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// Creates a styled line from spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Creates a line with a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    /// Creates an empty line (no spans).
    pub fn empty() -> Self {
        Self { spans: Vec::new() }
    }

    /// Returns true if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of characters across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(
            Color::rgb(0xA80A0A),
            Color::Rgb {
                r: 0xa8,
                g: 0x0a,
                b: 0x0a
            }
        );
    }

    #[test]
    fn test_darkened_saturates() {
        let c = Color::Rgb { r: 255, g: 30, b: 0 };
        assert_eq!(c.darkened(41), Color::Rgb { r: 214, g: 0, b: 0 });
        assert_eq!(Color::Default.darkened(41), Color::Default);
    }

    #[test]
    fn test_styled_line_text_and_count() {
        let line = StyledLine::new(vec![
            Span::plain("sig "),
            Span::new(
                "File",
                Style {
                    bold: true,
                    ..Style::default()
                },
            ),
        ]);
        assert_eq!(line.text(), "sig File");
        assert_eq!(line.char_count(), 8);
        assert!(!line.is_empty());
        assert!(StyledLine::empty().is_empty());
    }
}
