//! Skeleton text.
//!
//! ## Usage
//!
//! Show labels, titles and descriptions. Glyphs are not shaped: every word is
//! drawn as a rounded bar whose length follows its grapheme count, which is
//! enough to judge layout and contrast.

use derive_setters::Setters;
use neumorphic_ui::{
    Color, Component, ComputedData, Constraint, Density, Dp, DrawScope, LayoutDirection, Length,
    MeasureInput, Px, PxSize,
    outline::{CornerRadii, Outline, Rect, RoundRect},
    paint::Paint,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::theme::NeumorphicColors;

/// Defaults for [`TextArgs`].
pub struct TextDefaults;

impl TextDefaults {
    /// Font size.
    pub const SIZE: Dp = Dp(16.0);
    /// Text color.
    pub const COLOR: Color = NeumorphicColors::DEFAULT.content;
    /// Horizontal advance of one grapheme, as a fraction of the font size.
    pub const ADVANCE_EM: f32 = 0.5;
    /// Line height, as a fraction of the font size.
    pub const LINE_HEIGHT_EM: f32 = 1.25;
    /// Bar thickness of regular text, as a fraction of the font size.
    pub const BAR_EM: f32 = 0.5;
    /// Bar thickness of bold text, as a fraction of the font size.
    pub const BOLD_BAR_EM: f32 = 0.62;
}

/// Pixel metrics of one text style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Advance of one grapheme.
    pub advance: f32,
    /// Height of one line.
    pub line_height: f32,
    /// Thickness of a word bar.
    pub bar_height: f32,
}

impl TextMetrics {
    /// Metrics for a font size and weight at `density`.
    pub fn new(size: Dp, bold: bool, density: Density) -> Self {
        let size = size.max(Dp::ZERO).to_px_f32(density);
        let bar = if bold {
            TextDefaults::BOLD_BAR_EM
        } else {
            TextDefaults::BAR_EM
        };
        Self {
            advance: size * TextDefaults::ADVANCE_EM,
            line_height: size * TextDefaults::LINE_HEIGHT_EM,
            bar_height: size * bar,
        }
    }

    /// Width of `columns` graphemes, rounded up to whole pixels.
    pub fn width_of(&self, columns: usize) -> Px {
        Px::saturating_from_f32((columns as f32 * self.advance).ceil())
    }
}

/// Arguments for [`Text`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct TextArgs {
    /// The text.
    #[setters(into)]
    pub text: String,
    /// Font size.
    pub size: Dp,
    /// Text color.
    pub color: Color,
    /// Draws heavier bars.
    pub bold: bool,
    /// Preferred width. Wrapped text breaks lines at this width.
    #[setters(into)]
    pub width: Length,
}

impl Default for TextArgs {
    fn default() -> Self {
        Self {
            text: String::new(),
            size: TextDefaults::SIZE,
            color: TextDefaults::COLOR,
            bold: false,
            width: Length::Wrap,
        }
    }
}

impl From<&str> for TextArgs {
    fn from(text: &str) -> Self {
        TextArgs::default().text(text)
    }
}

/// A word placed on a line, in grapheme columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Word {
    column: usize,
    len: usize,
}

/// Breaks `text` into lines of at most `max_columns` graphemes, breaking at
/// whitespace. Words longer than a line get a line of their own. Explicit line
/// breaks are kept; an empty text still has one (empty) line.
fn layout_lines(text: &str, max_columns: Option<usize>) -> Vec<Vec<Word>> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line: Vec<Word> = Vec::new();
        let mut column = 0;
        for word in paragraph.split_whitespace() {
            let len = word.graphemes(true).count();
            let start = if line.is_empty() { 0 } else { column + 1 };
            if let Some(max) = max_columns
                && !line.is_empty()
                && start + len > max
            {
                lines.push(std::mem::take(&mut line));
                line.push(Word { column: 0, len });
                column = len;
                continue;
            }
            line.push(Word { column: start, len });
            column = start + len;
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(Vec::new());
    }
    lines
}

/// Skeleton text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    args: TextArgs,
}

impl Text {
    /// Creates a text component.
    pub fn new(args: impl Into<TextArgs>) -> Self {
        Self { args: args.into() }
    }

    fn lines(&self, metrics: &TextMetrics, max_width: Option<Px>) -> Vec<Vec<Word>> {
        let max_columns = max_width
            .filter(|_| metrics.advance > 0.0)
            .map(|max| (max.to_f32() / metrics.advance).floor().max(1.0) as usize);
        layout_lines(&self.args.text, max_columns)
    }
}

impl Component for Text {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let constraint = Constraint::from_lengths(self.args.width, Length::Wrap, input.density)
            .merge(&input.constraint);
        let metrics = TextMetrics::new(self.args.size, self.args.bold, input.density);
        let lines = self.lines(&metrics, constraint.width.get_max());
        let columns = lines
            .iter()
            .filter_map(|line| line.last().map(|word| word.column + word.len))
            .max()
            .unwrap_or(0);
        let height = Px::saturating_from_f32((lines.len() as f32 * metrics.line_height).ceil());
        ComputedData::new(PxSize::new(
            constraint.width.resolve(metrics.width_of(columns)),
            constraint.height.resolve(height),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        let metrics = TextMetrics::new(self.args.size, self.args.bold, scope.density());
        let width = scope.size().width;
        let paint = Paint::fill(self.args.color);
        let radius = metrics.bar_height / 2.0;
        for (index, line) in self.lines(&metrics, Some(width)).iter().enumerate() {
            let y = index as f32 * metrics.line_height
                + (metrics.line_height - metrics.bar_height) / 2.0;
            for word in line {
                let bar_width = word.len as f32 * metrics.advance;
                let start = word.column as f32 * metrics.advance;
                let x = match scope.layout_direction() {
                    LayoutDirection::Ltr => start,
                    LayoutDirection::Rtl => width.to_f32() - start - bar_width,
                };
                let bar = RoundRect::new(
                    Rect::new(x, y, bar_width, metrics.bar_height),
                    CornerRadii::uniform(radius),
                );
                scope.draw_outline(&Outline::Rounded(bar), &paint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use neumorphic_ui::{Frame, renderer::SoftwareCanvas};

    use super::*;

    #[test]
    fn greedy_wrapping_at_whitespace() {
        let lines = layout_lines("aa bbb c", Some(6));
        assert_eq!(
            lines,
            vec![
                vec![Word { column: 0, len: 2 }, Word { column: 3, len: 3 }],
                vec![Word { column: 0, len: 1 }],
            ]
        );
    }

    #[test]
    fn long_words_get_their_own_line() {
        let lines = layout_lines("a abcdefgh b", Some(4));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], vec![Word { column: 0, len: 8 }]);
    }

    #[test]
    fn empty_text_keeps_one_line() {
        assert_eq!(layout_lines("", None), vec![Vec::new()]);
        assert_eq!(layout_lines("a\n\nb", None).len(), 3);
    }

    #[test]
    fn graphemes_count_as_single_columns() {
        let lines = layout_lines("e\u{301}te\u{301}", None);
        assert_eq!(lines, vec![vec![Word { column: 0, len: 3 }]]);
    }

    #[test]
    fn measures_columns_and_lines() {
        let frame = Frame::new(PxSize::new(Px(400), Px(400)), Density::ONE);
        // 16px font: 8px advance, 20px line height.
        let text = Text::new("Card Title");
        assert_eq!(
            frame.measure(&text),
            ComputedData::new(PxSize::new(Px(80), Px(20)))
        );

        let narrow = Frame::new(PxSize::new(Px(40), Px(400)), Density::ONE);
        assert_eq!(frame.measure(&Text::new("")).height, Px(20));
        assert_eq!(narrow.measure(&text).height, Px(40));
    }

    #[test]
    fn bars_follow_the_words() {
        let frame = Frame::new(PxSize::new(Px(80), Px(20)), Density::ONE);
        let mut canvas = SoftwareCanvas::new(80, 20);
        frame.render(&Text::new(TextArgs::from("ab cd").color(Color::BLACK)), &mut canvas);
        let pixmap = canvas.pixmap();
        // Bars are 8px thick, centered in the 20px line.
        assert_eq!(pixmap.alpha_at(8, 10), 1.0);
        assert_eq!(pixmap.alpha_at(20, 10), 0.0);
        assert_eq!(pixmap.alpha_at(30, 10), 1.0);
        assert_eq!(pixmap.alpha_at(8, 2), 0.0);
    }
}
