//! A minimal embedded stand-in for the "host-language lexical tokenizer"
//! spec §6 consumes as an opaque collaborator. A real compiler frontend
//! would plug its own lexer in here; since no concrete host language is
//! in scope for this crate, this module implements just enough of one to
//! answer the classifier's one question: does an anonymous function
//! opened by `fn` (or the paren-form `fn(`) close again with `end`
//! before the fragment runs out?
//!
//! It tokenizes identifiers (to spot `fn`/`end`), string and character
//! literals (so that `fn`/`end` spelled inside a string aren't mistaken
//! for keywords), and line comments starting with `#`. Everything else
//! is noise the classifier doesn't care about.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostTokenKind {
    Fn,
    FnParen,
    End,
    Other,
}

/// The identifiers this lexer treats as keywords. `fn` maps here too;
/// the `fn`-vs-`fn(` split happens separately, since it depends on the
/// character that follows rather than the spelling itself.
static KEYWORDS: phf::Map<&'static str, HostTokenKind> = phf::phf_map! {
    "fn" => HostTokenKind::Fn,
    "end" => HostTokenKind::End,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostToken {
    pub kind: HostTokenKind,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostLexError {
    #[error("unterminated string or character literal")]
    UnterminatedLiteral,
    #[error("unbalanced delimiters")]
    UnbalancedDelimiters,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Tokenizes `input` for the classifier's `->` disambiguation.
///
/// `relaxed` is the "terminator-checking disabled" flag spec §6 requires
/// the host tokenizer interface to accept: when `true` (the mode the
/// classifier always calls with), unbalanced brackets are tolerated
/// rather than rejected, since the classifier only needs relative
/// ordering of `fn`/`end`, never a balanced parse. An unterminated
/// string or character literal is always an error — relaxed mode has no
/// bearing on whether a quote eventually closes.
pub fn lex(input: &str, relaxed: bool) -> Result<Vec<HostToken>, HostLexError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut open_delims: Vec<char> = Vec::new();

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '"' | '\'' => {
                let quote = c;
                let mut terminated = false;
                while let Some(c) = chars.next() {
                    if c == '\\' {
                        chars.next();
                        continue;
                    }
                    if c == quote {
                        terminated = true;
                        break;
                    }
                }
                if !terminated {
                    return Err(HostLexError::UnterminatedLiteral);
                }
            }
            '(' | '[' | '{' if !relaxed => open_delims.push(c),
            ')' | ']' | '}' if !relaxed => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match open_delims.pop() {
                    Some(open) if open == expected => {}
                    _ => return Err(HostLexError::UnbalancedDelimiters),
                }
            }
            c if is_ident_start(c) => {
                let mut ident = String::new();
                ident.push(c);
                while let Some(&next) = chars.peek() {
                    if is_ident_continue(next) {
                        ident.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }

                let kind = match KEYWORDS.get(ident.as_str()) {
                    Some(HostTokenKind::Fn) if chars.peek() == Some(&'(') => HostTokenKind::FnParen,
                    Some(kind) => *kind,
                    None => HostTokenKind::Other,
                };
                tokens.push(HostToken { kind });
            }
            _ => {}
        }
    }

    if !relaxed && !open_delims.is_empty() {
        return Err(HostLexError::UnbalancedDelimiters);
    }

    Ok(tokens)
}
