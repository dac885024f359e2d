use super::Cursor;

#[test]
fn tracks_line_across_newlines() {
    let mut cursor = Cursor::new("a\nb\nc", 1);
    assert_eq!(cursor.line(), 1);
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.line(), 2);
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.line(), 3);
}

#[test]
fn starting_line_offsets_reported_line() {
    let mut cursor = Cursor::new("a\nb", 10);
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.line(), 11);
}

#[test]
fn starts_with_checks_multi_char_prefixes() {
    let cursor = Cursor::new("<%# comment %>", 1);
    assert!(cursor.starts_with("<%#"));
    assert!(cursor.starts_with("<%"));
    assert!(!cursor.starts_with("%>"));
}

#[test]
fn advance_past_consumes_exact_prefix() {
    let mut cursor = Cursor::new("<%= rest", 1);
    cursor.advance_past("<%");
    assert_eq!(cursor.first(), Some('='));
}

#[test]
fn is_empty_at_end_of_input() {
    let mut cursor = Cursor::new("x", 1);
    assert!(!cursor.is_empty());
    cursor.bump();
    assert!(cursor.is_empty());
    assert_eq!(cursor.bump(), None);
}
