use super::tokenize;
use crate::error::Error;
use crate::token::{Fragment, Marker, Options, Token};

fn expr(line: usize, marker: Option<char>, contents: &str) -> Token {
    Token::Expr(Fragment {
        line,
        marker: marker.map(Marker::new).unwrap_or(Marker::NONE),
        contents: contents.to_string(),
    })
}

fn start(line: usize, contents: &str) -> Token {
    Token::StartExpr(Fragment { line, marker: Marker::NONE, contents: contents.to_string() })
}

fn middle(line: usize, contents: &str) -> Token {
    Token::MiddleExpr(Fragment { line, marker: Marker::NONE, contents: contents.to_string() })
}

fn end(line: usize, contents: &str) -> Token {
    Token::EndExpr(Fragment { line, marker: Marker::NONE, contents: contents.to_string() })
}

#[test]
fn scenario_1_standalone_marked_expression() {
    let tokens = tokenize("hello <%= name %>!", 1, &Options::default()).unwrap();
    assert_eq!(
        tokens,
        vec![Token::Text("hello ".into()), expr(1, Some('='), " name "), Token::Text("!".into())]
    );
}

#[test]
fn scenario_2_if_do_end() {
    let tokens = tokenize("<% if x do %>A<% end %>", 1, &Options::default()).unwrap();
    assert_eq!(
        tokens,
        vec![start(1, " if x do "), Token::Text("A".into()), end(1, " end ")]
    );
}

#[test]
fn scenario_3_comment_emits_no_token() {
    let tokens = tokenize("<%# a comment %>after", 1, &Options::default()).unwrap();
    assert_eq!(tokens, vec![Token::Text("after".into())]);
}

#[test]
fn scenario_4_escape_sequence() {
    let tokens = tokenize("literal <%% kept", 1, &Options::default()).unwrap();
    assert_eq!(tokens, vec![Token::Text("literal <% kept".into())]);
}

#[test]
fn scenario_5_unterminated_fragment_is_an_error() {
    let err = tokenize("unterminated <% foo", 1, &Options::default()).unwrap_err();
    assert_eq!(err, Error::UnterminatedFragment { line: 1 });
}

#[test]
fn scenario_6_trim_elides_surrounding_blank_line() {
    let options = Options { trim: true, ..Options::default() };
    let tokens = tokenize("  <% x %>\nrest", 1, &options).unwrap();
    assert_eq!(tokens, vec![expr(1, None, " x "), Token::Text("rest".into())]);
}

#[test]
fn scenario_7_arrow_with_open_fn_starts_a_block() {
    let tokens = tokenize("<% Enum.map(xs, fn x -> %>E<% end) %>", 1, &Options::default()).unwrap();
    assert_eq!(
        tokens,
        vec![
            start(1, " Enum.map(xs, fn x -> "),
            Token::Text("E".into()),
            end(1, " end) "),
        ]
    );
}

#[test]
fn scenario_8_arrow_without_fn_is_a_middle_clause() {
    let tokens = tokenize("<% case v do %><% :a -> %>A<% end %>", 1, &Options::default()).unwrap();
    assert_eq!(
        tokens,
        vec![
            start(1, " case v do "),
            middle(1, " :a -> "),
            Token::Text("A".into()),
            end(1, " end "),
        ]
    );
}

#[test]
fn consecutive_text_runs_are_merged_and_never_empty() {
    // No fragment ever sits between these literal runs in the raw
    // source, so there's only ever one Text token to begin with — this
    // exercises that the scanner doesn't split on line boundaries.
    let tokens = tokenize("a\nb\nc", 1, &Options::default()).unwrap();
    assert_eq!(tokens, vec![Token::Text("a\nb\nc".into())]);
}

#[test]
fn empty_input_yields_no_tokens() {
    let tokens = tokenize("", 1, &Options::default()).unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn starting_line_offsets_every_reported_line() {
    let tokens = tokenize("a\n<% x %>", 10, &Options::default()).unwrap();
    assert_eq!(tokens[1], expr(11, None, " x "));
}

#[test]
fn line_numbers_are_non_decreasing() {
    let source = "a\n<% x %>\nb\n<% if y do %>\nc\n<% end %>";
    let tokens = tokenize(source, 1, &Options::default()).unwrap();
    let lines: Vec<usize> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Text(_) => None,
            Token::Expr(f) | Token::StartExpr(f) | Token::MiddleExpr(f) | Token::EndExpr(f) => Some(f.line),
        })
        .collect();
    assert!(lines.windows(2).all(|w| w[0] <= w[1]));
}
