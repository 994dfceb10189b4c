//! Typed building blocks for the remote transformation grammar.
//!
//! The grammar is an ordered, comma-separated sequence of `prefix_value`
//! tokens; independent processing stages are chained with `/`. Compilers
//! push typed tokens in their family's canonical order and render at the
//! end, so ordering is carried by construction rather than by string
//! surgery.

use std::fmt;

/// One unit of the transformation grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// `prefix_value`, e.g. `w_800`, `br_1000k`.
    Param {
        prefix: &'static str,
        value: String,
    },
    /// Named effect, `e_name` or `e_name:param`, e.g. `e_fade:2000`.
    Effect {
        name: &'static str,
        param: Option<String>,
    },
    /// Bare flag, `fl_name`, e.g. `fl_loop`. Emitted only when true;
    /// false is expressed by absence.
    Flag(&'static str),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Param { prefix, value } => write!(f, "{prefix}_{value}"),
            Token::Effect { name, param: None } => write!(f, "e_{name}"),
            Token::Effect {
                name,
                param: Some(p),
            } => write!(f, "e_{name}:{p}"),
            Token::Flag(name) => write!(f, "fl_{name}"),
        }
    }
}

/// One comma-joined processing stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    tokens: Vec<Token>,
}

impl Segment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn param(&mut self, prefix: &'static str, value: impl fmt::Display) -> &mut Self {
        self.tokens.push(Token::Param {
            prefix,
            value: value.to_string(),
        });
        self
    }

    pub fn effect(&mut self, name: &'static str) -> &mut Self {
        self.tokens.push(Token::Effect { name, param: None });
        self
    }

    pub fn effect_with(&mut self, name: &'static str, param: impl fmt::Display) -> &mut Self {
        self.tokens.push(Token::Effect {
            name,
            param: Some(param.to_string()),
        });
        self
    }

    pub fn flag(&mut self, name: &'static str) -> &mut Self {
        self.tokens.push(Token::Flag(name));
        self
    }

    pub fn render(&self) -> String {
        let parts: Vec<String> = self.tokens.iter().map(Token::to_string).collect();
        parts.join(",")
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// An ordered chain of stages, rendered as `stage/stage/...` with empty
/// stages dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transformation {
    segments: Vec<Segment>,
}

impl Transformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self
    }

    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .filter(|s| !s.is_empty())
            .map(Segment::render)
            .collect();
        parts.join("/")
    }
}

/// Kilobits-per-second value with the grammar's `k` suffix.
pub fn kbps(value: u32) -> String {
    format!("{value}k")
}

/// Seconds to the whole-millisecond encoding used by timed effects.
pub fn millis(secs: f64) -> i64 {
    (secs * 1000.0).round() as i64
}
