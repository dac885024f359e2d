//! Trim mode (spec §4.5): elides the blank-line whitespace around a
//! fragment that occupies its own line, so it doesn't leave a blank line
//! behind in the rendered output.

use crate::cursor::Cursor;

/// Left trim: called on the accumulated text buffer just before a
/// non-text token is appended. Strips a trailing run of spaces/tabs from
/// `text`, but only if what remains either ends in `\n` or is empty —
/// i.e. the fragment is preceded on its line by nothing but that
/// whitespace. Otherwise `text` is left untouched.
///
/// An empty remainder counts alongside a trailing `\n`: that's the case
/// where the fragment is the first thing in the whole input (or the
/// first thing since the last token), so there's no preceding line to
/// leave a blank gap in.
pub fn left_trim(text: &mut String) {
    let trimmed_len = text.trim_end_matches([' ', '\t']).len();
    let on_its_own_line = trimmed_len == 0 || text.as_bytes()[trimmed_len - 1] == b'\n';
    if on_its_own_line {
        text.truncate(trimmed_len);
    }
}

/// Right trim: called after a fragment (or comment) is fully consumed.
/// Skips spaces/tabs in the remaining input, then swallows a following
/// `\n` or `\r\n`, advancing the line counter for the `\n`. Leaves the
/// cursor untouched if no newline follows.
pub fn right_trim(cursor: &mut Cursor<'_>) {
    let mut lookahead = *cursor;

    while matches!(lookahead.first(), Some(' ') | Some('\t')) {
        lookahead.bump();
    }

    match lookahead.first() {
        Some('\r') => {
            let mut after_cr = lookahead;
            after_cr.bump();
            if after_cr.first() == Some('\n') {
                after_cr.bump();
                *cursor = after_cr;
            }
        }
        Some('\n') => {
            lookahead.bump();
            *cursor = lookahead;
        }
        _ => {}
    }
}
