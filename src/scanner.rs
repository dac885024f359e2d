//! Scanner (spec §4.1): the single forward pass that drives fragment
//! reading, marker extraction, classification, and (optionally) trimming,
//! assembling the flat token stream.

use crate::classifier::{self, Kind};
use crate::cursor::Cursor;
use crate::error::Error;
use crate::fragment;
use crate::marker;
use crate::token::{Fragment, Marker, Options, Token};

pub fn tokenize(input: &str, starting_line: usize, options: &Options) -> Result<Vec<Token>, Error> {
    let mut cursor = Cursor::new(input, starting_line);
    let mut text = String::new();
    let mut tokens = Vec::new();

    loop {
        if cursor.is_empty() {
            flush_text(&mut tokens, &mut text);
            return Ok(tokens);
        }

        if cursor.starts_with("<%%") {
            cursor.advance_past("<%%");
            text.push('<');
            text.push('%');
            continue;
        }

        if cursor.starts_with("<%#") {
            cursor.advance_past("<%#");
            fragment::read(&mut cursor)?;
            if options.trim {
                crate::trimmer::left_trim(&mut text);
                crate::trimmer::right_trim(&mut cursor);
            }
            continue;
        }

        if cursor.starts_with("<%") {
            let line = cursor.line();
            cursor.advance_past("<%");

            let fragment_marker = marker::extract(&mut cursor, &options.markers);
            let contents = fragment::read(&mut cursor)?;

            if options.trim {
                crate::trimmer::left_trim(&mut text);
            }
            flush_text(&mut tokens, &mut text);

            tokens.push(build_token(classifier::classify(&contents), line, fragment_marker, contents));

            if options.trim {
                crate::trimmer::right_trim(&mut cursor);
            }
            continue;
        }

        text.push(cursor.bump().expect("loop guarded by is_empty check above"));
    }
}

fn flush_text(tokens: &mut Vec<Token>, text: &mut String) {
    if !text.is_empty() {
        tokens.push(Token::Text(std::mem::take(text)));
    }
}

fn build_token(kind: Kind, line: usize, marker: Marker, contents: String) -> Token {
    let fragment = Fragment { line, marker, contents };
    match kind {
        Kind::Expr => Token::Expr(fragment),
        Kind::Start => Token::StartExpr(fragment),
        Kind::Middle => Token::MiddleExpr(fragment),
        Kind::End => Token::EndExpr(fragment),
    }
}

#[cfg(test)]
mod tests;
