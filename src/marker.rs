//! Marker extraction (spec §4.3): at most one character of lookahead
//! immediately after `<%`, consumed only if it belongs to the configured
//! [`MarkerSet`](crate::token::MarkerSet).

use crate::cursor::Cursor;
use crate::token::{Marker, MarkerSet};

pub fn extract(cursor: &mut Cursor<'_>, markers: &MarkerSet) -> Marker {
    match cursor.first() {
        Some(c) if markers.contains(c) => {
            cursor.bump();
            Marker::new(c)
        }
        _ => Marker::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_configured_marker() {
        let mut cursor = Cursor::new("= rest", 1);
        let marker = extract(&mut cursor, &MarkerSet::default());
        assert_eq!(marker.as_char(), Some('='));
        assert_eq!(cursor.first(), Some(' '));
    }

    #[test]
    fn leaves_body_untouched_when_no_marker_matches() {
        let mut cursor = Cursor::new("if x do", 1);
        let marker = extract(&mut cursor, &MarkerSet::default());
        assert!(marker.is_none());
        assert_eq!(cursor.first(), Some('i'));
    }

    #[test]
    fn only_the_configured_markers_are_recognised() {
        let mut cursor = Cursor::new("| rest", 1);
        let marker = extract(&mut cursor, &MarkerSet::default());
        assert!(marker.is_none());
        assert_eq!(cursor.first(), Some('|'));
    }
}
