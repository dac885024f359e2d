//! The token shapes produced by [`crate::tokenize`], and the options that
//! govern a tokenization pass.

/// A single character recognised immediately after `<%`, carried on a
/// token for the downstream compiler's use.
///
/// Modeled as `Option<char>` rather than a closed two-variant enum: the
/// marker alphabet is an open, configurable set (see [`MarkerSet`]),
/// currently just `=`, so a `None`/`Some(char)` shape extends without a
/// breaking change the day a second marker ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Marker(Option<char>);

impl Marker {
    pub const NONE: Marker = Marker(None);

    pub fn new(c: char) -> Marker {
        Marker(Some(c))
    }

    pub fn as_char(self) -> Option<char> {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0.is_none()
    }
}

/// The set of characters the marker extractor will recognise right after
/// `<%`. Backed by a small inline array rather than a `HashSet`: the
/// realistic size is one to a handful of ASCII characters, checked once
/// per fragment, so hashing would cost more than it saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    chars: [char; 4],
    len: usize,
}

impl MarkerSet {
    /// An empty set — no character after `<%` is ever treated as a marker.
    pub fn empty() -> Self {
        Self {
            chars: ['\0'; 4],
            len: 0,
        }
    }

    /// Adds a marker character. Panics if more than four are configured;
    /// that's far beyond any realistic use and signals a caller mistake.
    pub fn with(mut self, c: char) -> Self {
        assert!(self.len < self.chars.len(), "MarkerSet supports at most 4 markers");
        self.chars[self.len] = c;
        self.len += 1;
        self
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars[..self.len].contains(&c)
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        MarkerSet::empty().with('=')
    }
}

/// Options accepted by [`crate::tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Enables whitespace elision around fragments that occupy their own
    /// line. Default: off.
    pub trim: bool,
    /// The markers recognised immediately after `<%`. Default: just `=`.
    pub markers: MarkerSet,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            trim: false,
            markers: MarkerSet::default(),
        }
    }
}

/// A span of fragment data shared by every non-text token variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// The 1-based source line where the introducing `<%` appeared.
    pub line: usize,
    pub marker: Marker,
    /// The fragment body, excluding the leading `<%`, the marker, and the
    /// trailing `%>`.
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A contiguous run of literal text. Never empty; never adjacent to
    /// another `Text` token in a token stream produced by this crate.
    Text(String),
    /// A standalone expression fragment.
    Expr(Fragment),
    /// Opens a block (e.g. the `if x do` in `if x do ... end`).
    StartExpr(Fragment),
    /// Continues a block (e.g. `else`, `:a ->` inside a `case`).
    MiddleExpr(Fragment),
    /// Closes a block.
    EndExpr(Fragment),
}

impl Token {
    /// Renders the token back to the source text it was parsed from,
    /// modulo any whitespace trim mode removed — used by the round-trip
    /// property tests.
    pub fn render(&self) -> String {
        match self {
            Token::Text(contents) => contents.clone(),
            Token::Expr(f) | Token::StartExpr(f) | Token::MiddleExpr(f) | Token::EndExpr(f) => {
                let marker = f.marker.as_char().map(String::from).unwrap_or_default();
                format!("<%{marker}{}%>", f.contents)
            }
        }
    }
}
