//! Tokenizer for an embedded templating language: splits a template
//! source into literal text interleaved with `<% ... %>` expression
//! fragments, classifying each fragment as a plain expression or as the
//! start, middle, or end of a block.
//!
//! This crate only tokenizes. It does not balance blocks (a `start_expr`
//! with no matching `end_expr` is not an error here), interpret
//! expression semantics, or offer a streaming API — all of that belongs
//! to a downstream compiler. The pipeline stages live one module per
//! stage: [`scanner`] drives the pass, [`fragment`] reads a `<% ... %>`
//! body, [`marker`] strips the optional leading marker, [`classifier`]
//! decides a fragment's kind (delegating to [`host_lexer`] for the
//! ambiguous `->` case), and [`trimmer`] implements the optional
//! whitespace elision.

pub mod classifier;
pub mod cursor;
pub mod error;
pub mod fragment;
pub mod host_lexer;
pub mod marker;
mod scanner;
pub mod token;
mod trimmer;

pub use error::Error;
pub use token::{Fragment, Marker, MarkerSet, Options, Token};

/// Tokenizes `input`, reporting line numbers starting at `starting_line`
/// (1-based; pass `1` for a standalone file).
///
/// Returns the flat token stream on success, or the one fatal condition
/// this tokenizer can hit: an opening `<%` with no matching `%>`.
pub fn tokenize(input: &str, starting_line: usize, options: &Options) -> Result<Vec<Token>, Error> {
    scanner::tokenize(input, starting_line, options)
}