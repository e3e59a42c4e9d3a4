//! Grapheme-aware editing of a single-line text buffer.
//!
//! ## Usage
//!
//! Apply committed [`TextEdit`]s to a string while keeping the caret on
//! grapheme boundaries.

use neumorphic_ui::TextEdit;
use unicode_segmentation::UnicodeSegmentation;

/// Focus and caret of one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextEditorState {
    focused: bool,
    /// Caret as a grapheme index; `None` keeps it at the end of the text.
    caret: Option<usize>,
}

impl TextEditorState {
    /// Creates an unfocused editor state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the field accepts text edits.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Focuses the field and moves the caret to the end of the text.
    pub fn focus(&mut self) {
        self.focused = true;
        self.caret = None;
    }

    /// Drops focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Caret position in graphemes for `text`, clamped to its length.
    pub fn caret(&self, text: &str) -> usize {
        let len = grapheme_count(text);
        self.caret.map_or(len, |caret| caret.min(len))
    }

    /// Places the caret at a grapheme index.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = Some(caret);
    }
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset of the grapheme boundary at `index`, or the end of `text`.
fn byte_offset(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Applies `edit` to `text` with the caret at grapheme index `caret`.
///
/// Returns the new text and caret. Edits that cannot apply (backspace at the
/// start, delete at the end) leave both unchanged.
///
/// ```
/// use neumorphic_components::text_edit_core::apply_edit;
/// use neumorphic_ui::TextEdit;
///
/// let (text, caret) = apply_edit("helo", 3, &TextEdit::Insert("l".into()));
/// assert_eq!((text.as_str(), caret), ("hello", 4));
///
/// let (text, caret) = apply_edit("e\u{301}a", 1, &TextEdit::Backspace);
/// assert_eq!((text.as_str(), caret), ("a", 0));
/// ```
pub fn apply_edit(text: &str, caret: usize, edit: &TextEdit) -> (String, usize) {
    let len = grapheme_count(text);
    let caret = caret.min(len);
    match edit {
        TextEdit::Insert(insert) => {
            // Inserted text is single-line.
            let insert: String = insert.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
            let offset = byte_offset(text, caret);
            let mut result = String::with_capacity(text.len() + insert.len());
            result.push_str(&text[..offset]);
            result.push_str(&insert);
            result.push_str(&text[offset..]);
            // Combining marks may merge with the preceding grapheme.
            let caret = grapheme_count(&result).saturating_sub(len - caret);
            (result, caret)
        }
        TextEdit::Backspace if caret > 0 => {
            let start = byte_offset(text, caret - 1);
            let end = byte_offset(text, caret);
            let mut result = text.to_owned();
            result.replace_range(start..end, "");
            (result, caret - 1)
        }
        TextEdit::Delete if caret < len => {
            let start = byte_offset(text, caret);
            let end = byte_offset(text, caret + 1);
            let mut result = text.to_owned();
            result.replace_range(start..end, "");
            (result, caret)
        }
        TextEdit::MoveLeft => (text.to_owned(), caret.saturating_sub(1)),
        TextEdit::MoveRight => (text.to_owned(), (caret + 1).min(len)),
        TextEdit::Backspace | TextEdit::Delete => (text.to_owned(), caret),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_in_the_middle() {
        assert_eq!(
            apply_edit("ac", 1, &TextEdit::Insert("b".into())),
            ("abc".to_owned(), 2)
        );
    }

    #[test]
    fn insert_drops_line_breaks() {
        assert_eq!(
            apply_edit("", 0, &TextEdit::Insert("a\nb".into())),
            ("ab".to_owned(), 2)
        );
    }

    #[test]
    fn backspace_and_delete_at_the_edges_do_nothing() {
        assert_eq!(apply_edit("ab", 0, &TextEdit::Backspace), ("ab".to_owned(), 0));
        assert_eq!(apply_edit("ab", 2, &TextEdit::Delete), ("ab".to_owned(), 2));
    }

    #[test]
    fn delete_removes_a_whole_grapheme() {
        let flag = "\u{1F1EF}\u{1F1F5}";
        let text = format!("a{flag}b");
        assert_eq!(apply_edit(&text, 1, &TextEdit::Delete), ("ab".to_owned(), 1));
    }

    #[test]
    fn caret_moves_are_clamped() {
        assert_eq!(apply_edit("ab", 0, &TextEdit::MoveLeft).1, 0);
        assert_eq!(apply_edit("ab", 2, &TextEdit::MoveRight).1, 2);
        assert_eq!(apply_edit("ab", 9, &TextEdit::MoveLeft).1, 1);
    }

    #[test]
    fn caret_defaults_to_the_end() {
        let mut state = TextEditorState::new();
        assert_eq!(state.caret("abc"), 3);
        state.set_caret(1);
        assert_eq!(state.caret("abc"), 1);
        assert_eq!(state.caret(""), 0);
        state.focus();
        assert!(state.is_focused());
        assert_eq!(state.caret("abcd"), 4);
    }
}
