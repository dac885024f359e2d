//! Fragment reader (spec §4.2): consumes characters up to the next `%>`,
//! tracking line number as it goes. The body is opaque — nothing inside
//! it is interpreted, which also means a fragment can never contain the
//! literal text `%>`.

use crate::cursor::Cursor;
use crate::error::Error;

pub fn read(cursor: &mut Cursor<'_>) -> Result<String, Error> {
    let mut body = String::new();

    loop {
        if cursor.starts_with("%>") {
            cursor.advance_past("%>");
            return Ok(body);
        }

        match cursor.bump() {
            Some(c) => body.push(c),
            // The line reported here is the last line the cursor reached,
            // not the line the opening `<%` was on — see `Error::line`.
            None => return Err(Error::UnterminatedFragment { line: cursor.line() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_body_up_to_close() {
        let mut cursor = Cursor::new(" name %>rest", 1);
        let body = read(&mut cursor).unwrap();
        assert_eq!(body, " name ");
        assert_eq!(cursor.first(), Some('r'));
    }

    #[test]
    fn tracks_line_across_embedded_newlines() {
        let mut cursor = Cursor::new(" a\nb\nc %>", 5);
        let body = read(&mut cursor).unwrap();
        assert_eq!(body, " a\nb\nc ");
        assert_eq!(cursor.line(), 7);
    }

    #[test]
    fn reports_last_scanned_line_on_unterminated_fragment() {
        let mut cursor = Cursor::new(" foo\nbar", 1);
        let err = read(&mut cursor).unwrap_err();
        assert_eq!(err, Error::UnterminatedFragment { line: 2 });
    }

    #[test]
    fn a_fragment_cannot_contain_the_literal_close_sequence() {
        let mut cursor = Cursor::new(" \"%>\" %>", 1);
        let body = read(&mut cursor).unwrap();
        assert_eq!(body, " \"");
        assert_eq!(cursor.first(), Some('"'));
    }
}
