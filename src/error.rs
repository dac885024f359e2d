//! The single fatal condition a tokenization pass can hit: an opening `<%`
//! whose `%>` never arrives. Everything else (classification ambiguity,
//! the host lexer giving up) is recovered locally, per spec — see
//! `classifier`.

/// `line` is the last line the scanner had reached when input ran out,
/// not the line where the unterminated `<%` was opened — see the "Open
/// questions" note this module's docs for `Error::line`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("missing token '%>'")]
    UnterminatedFragment { line: usize },
}

impl Error {
    /// The line number to report alongside this error.
    ///
    /// For `UnterminatedFragment` this is the last line the scanner
    /// reached, which is not necessarily the line the unclosed `<%`
    /// opened on — multi-line fragments shift it forward. Record the
    /// opening line separately at the call site if stricter diagnostics
    /// are needed.
    pub fn line(&self) -> usize {
        match self {
            Error::UnterminatedFragment { line } => *line,
        }
    }
}
