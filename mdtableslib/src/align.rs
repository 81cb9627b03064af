//! Column alignment states and style-hint resolution.
//!
//! Alignment is a closed enum so every consumer matches exhaustively;
//! adding a state is a compile error everywhere it matters, not a
//! silent fallthrough.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// No alignment declared; renders a plain dashed delimiter cell
    #[default]
    Unspecified,
    /// Left-aligned (`:--`)
    Left,
    /// Right-aligned (`--:`)
    Right,
    /// Centered (`:-:`)
    Center,
}

impl Alignment {
    /// Resolve an inline style hint such as `text-align:right`.
    ///
    /// Checks right, then left, then center; an absent or unrecognized
    /// hint resolves to `Unspecified`. Never fails.
    pub fn from_style_hint(hint: Option<&str>) -> Self {
        let Some(style) = hint else {
            return Alignment::Unspecified;
        };

        if style.contains("text-align:right") {
            Alignment::Right
        } else if style.contains("text-align:left") {
            Alignment::Left
        } else if style.contains("text-align:center") {
            Alignment::Center
        } else {
            Alignment::Unspecified
        }
    }

    /// Whether the delimiter cell for this alignment opens with a colon.
    pub fn colon_left(self) -> bool {
        matches!(self, Alignment::Left | Alignment::Center)
    }

    /// Whether the delimiter cell for this alignment closes with a colon.
    pub fn colon_right(self) -> bool {
        matches!(self, Alignment::Right | Alignment::Center)
    }
}

impl From<pulldown_cmark::Alignment> for Alignment {
    fn from(alignment: pulldown_cmark::Alignment) -> Self {
        match alignment {
            pulldown_cmark::Alignment::None => Alignment::Unspecified,
            pulldown_cmark::Alignment::Left => Alignment::Left,
            pulldown_cmark::Alignment::Right => Alignment::Right,
            pulldown_cmark::Alignment::Center => Alignment::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_hint_right() {
        let align = Alignment::from_style_hint(Some("text-align:right"));
        assert_eq!(align, Alignment::Right);
    }

    #[test]
    fn test_style_hint_left() {
        let align = Alignment::from_style_hint(Some("text-align:left"));
        assert_eq!(align, Alignment::Left);
    }

    #[test]
    fn test_style_hint_center() {
        let align = Alignment::from_style_hint(Some("text-align:center"));
        assert_eq!(align, Alignment::Center);
    }

    #[test]
    fn test_style_hint_absent() {
        assert_eq!(Alignment::from_style_hint(None), Alignment::Unspecified);
    }

    #[test]
    fn test_style_hint_unrecognized() {
        let align = Alignment::from_style_hint(Some("color:red"));
        assert_eq!(align, Alignment::Unspecified);
    }

    #[test]
    fn test_style_hint_embedded_in_longer_style() {
        let align = Alignment::from_style_hint(Some("color:red;text-align:center"));
        assert_eq!(align, Alignment::Center);
    }

    #[test]
    fn test_style_hint_right_wins_over_center() {
        // Match order is right, left, center; first hit wins.
        let align = Alignment::from_style_hint(Some("text-align:center;text-align:right"));
        assert_eq!(align, Alignment::Right);
    }

    #[test]
    fn test_colon_sides() {
        assert!(!Alignment::Unspecified.colon_left());
        assert!(!Alignment::Unspecified.colon_right());
        assert!(Alignment::Left.colon_left());
        assert!(!Alignment::Left.colon_right());
        assert!(!Alignment::Right.colon_left());
        assert!(Alignment::Right.colon_right());
        assert!(Alignment::Center.colon_left());
        assert!(Alignment::Center.colon_right());
    }

    #[test]
    fn test_from_pulldown_alignment() {
        assert_eq!(
            Alignment::from(pulldown_cmark::Alignment::None),
            Alignment::Unspecified
        );
        assert_eq!(
            Alignment::from(pulldown_cmark::Alignment::Left),
            Alignment::Left
        );
        assert_eq!(
            Alignment::from(pulldown_cmark::Alignment::Right),
            Alignment::Right
        );
        assert_eq!(
            Alignment::from(pulldown_cmark::Alignment::Center),
            Alignment::Center
        );
    }
}
