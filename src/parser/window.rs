//! Context window extraction.
//!
//! A context window is the bounded slice of document text surrounding a
//! located date; it is the unit of classification for the analyzer. Pure
//! slicing with bounds clamping — offsets are additionally snapped to UTF-8
//! char boundaries so a window edge can never land inside a codepoint.

/// Largest char boundary at or below `index`.
pub fn snap_to_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Slice a symmetric window of `radius` bytes around `center`, clamped to
/// the document bounds.
pub fn context_window(text: &str, center: usize, radius: usize) -> &str {
    let start = snap_to_char_boundary(text, center.saturating_sub(radius));
    let end = snap_to_char_boundary(text, center.saturating_add(radius));
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_symmetric_in_the_middle() {
        let text = "a".repeat(2000);
        let window = context_window(&text, 1000, 500);
        assert_eq!(window.len(), 1000);
    }

    #[test]
    fn window_clamps_at_document_start() {
        let text = "short prefix then a date somewhere";
        let window = context_window(text, 5, 500);
        assert_eq!(window, text);
    }

    #[test]
    fn window_clamps_at_document_end() {
        let text = "tail text";
        let window = context_window(text, text.len(), 500);
        assert_eq!(window, text);
    }

    #[test]
    fn window_never_splits_a_codepoint() {
        // 'é' is two bytes; put the window edges inside them
        let text = "ééééééééééé";
        for center in 0..=text.len() {
            for radius in 1..6 {
                let window = context_window(text, center, radius);
                assert!(window.chars().count() <= text.chars().count());
            }
        }
    }

    #[test]
    fn snap_moves_down_to_boundary() {
        let text = "aé"; // 'é' occupies bytes 1..3
        assert_eq!(snap_to_char_boundary(text, 2), 1);
        assert_eq!(snap_to_char_boundary(text, 3), 3);
        assert_eq!(snap_to_char_boundary(text, 99), text.len());
    }

    #[test]
    fn empty_text_yields_empty_window() {
        assert_eq!(context_window("", 0, 500), "");
    }
}
