//! Classifier (spec §4.4): decides whether a fragment body is a plain
//! expression or opens, continues, or closes a block.
//!
//! Keyword matching is expressed here as forward-string suffix checks
//! rather than the reversed-literal matching the source used for its
//! reversed accumulation buffer (spec §9, "Classifier keyword matching")
//! — the semantics are the same either way.

use crate::host_lexer::{self, HostTokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Expr,
    Start,
    Middle,
    End,
}

static BLOCK_KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "else", "after", "catch", "rescue",
};

pub fn classify(body: &str) -> Kind {
    // Trailing spaces/tabs never change classification; only trailing
    // newlines would (and a fragment body normally doesn't end in one).
    let trimmed = body.trim_end_matches([' ', '\t']);

    // A fragment can close a block and return to an enclosing call's
    // argument list in the same breath (`end)`, `do)`), so the keyword
    // check tolerates one trailing `)` beyond the whitespace already
    // stripped above. When there's no trailing `)` this is just `trimmed`
    // again, so it never changes behavior for the common case.
    let keyword_suffix = trimmed.strip_suffix(')').unwrap_or(trimmed);

    if ends_with_keyword(keyword_suffix, "do") {
        return Kind::Start;
    }

    if trimmed.ends_with("->") {
        return classify_arrow(body);
    }

    if BLOCK_KEYWORDS.iter().any(|kw| ends_with_keyword(keyword_suffix, kw)) {
        return Kind::Middle;
    }

    if ends_with_keyword(keyword_suffix, "end") {
        return Kind::End;
    }

    Kind::Expr
}

/// True if `s` ends with `keyword` at a word boundary: either `keyword`
/// is the entire string, or the character right before it is not part of
/// an identifier. This is what rejects `pretend` as a match for `end`
/// (preceded by `r`) while accepting `if x do`, `x)do`, `, else` and
/// similar (preceded by whitespace or punctuation) — spec §4.4's edge
/// case list gives `do` a slightly different-looking rule ("followed by
/// space, tab, or `)`"), but space/tab/`)` are exactly the non-identifier
/// characters that show up before `do` in practice, so one boundary
/// check covers every keyword here.
fn ends_with_keyword(s: &str, keyword: &str) -> bool {
    match s.strip_suffix(keyword) {
        Some(rest) => match rest.chars().next_back() {
            None => true,
            Some(c) => !(c.is_alphanumeric() || c == '_'),
        },
        None => false,
    }
}

fn classify_arrow(body: &str) -> Kind {
    match host_lexer::lex(body, true) {
        Ok(tokens) => {
            let fn_index = tokens
                .iter()
                .position(|t| matches!(t.kind, HostTokenKind::Fn | HostTokenKind::FnParen));
            let end_index = tokens.iter().position(|t| t.kind == HostTokenKind::End);

            let opens = match (fn_index, end_index) {
                (Some(fi), Some(ei)) => ei > fi,
                (Some(_), None) => true,
                (None, _) => false,
            };

            let kind = if opens { Kind::Start } else { Kind::Middle };
            log::trace!("classified '->' fragment as {kind:?} (fn at {fn_index:?}, end at {end_index:?})");
            kind
        }
        Err(error) => {
            log::debug!("host lexer failed on '->' fragment ({error}), defaulting to middle_expr");
            Kind::Middle
        }
    }
}
