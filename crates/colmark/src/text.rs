//! The user-facing markup string wrapper.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::resolver::apply_effects;
use crate::tokenizer::tokenize;

/// Render markup into a string with inline SGR escape sequences.
///
/// One-shot form of the pipeline: tokenize, resolve, concatenate. Total;
/// bad markup appears verbatim in the output instead of erroring.
///
/// # Example
/// ```
/// use colmark::render;
///
/// assert_eq!(render("a #r(red) word"), "a \x1b[31mred\x1b[39m word");
/// ```
#[must_use]
pub fn render(input: &str) -> String {
    let tokens = apply_effects(tokenize(input));
    let mut out = String::with_capacity(input.len());
    for token in &tokens {
        out.push_str(&token.value);
    }
    out
}

/// A markup string paired with its rendered form.
///
/// Rendering happens once at construction; [`Display`](fmt::Display) writes
/// the rendered string, so a `ColorText` prints styled without any caller
/// bookkeeping. Concatenation (`+`, `+=`, with either a string or another
/// `ColorText`) joins the raw markup and re-renders, so effects may span
/// the joined parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorText {
    source: String,
    rendered: String,
}

impl ColorText {
    /// Build from raw markup and render it.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let rendered = render(&source);
        Self { source, rendered }
    }

    /// The raw markup this was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The escape-annotated output.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for ColorText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl From<&str> for ColorText {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for ColorText {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl AddAssign<&str> for ColorText {
    fn add_assign(&mut self, rhs: &str) {
        self.source.push_str(rhs);
        self.rendered = render(&self.source);
    }
}

impl AddAssign<&ColorText> for ColorText {
    fn add_assign(&mut self, rhs: &ColorText) {
        self.source.push_str(&rhs.source);
        self.rendered = render(&self.source);
    }
}

impl Add<&str> for ColorText {
    type Output = ColorText;

    fn add(mut self, rhs: &str) -> ColorText {
        self += rhs;
        self
    }
}

impl Add<&ColorText> for ColorText {
    type Output = ColorText;

    fn add(mut self, rhs: &ColorText) -> ColorText {
        self += rhs;
        self
    }
}

/// Extension trait rendering markup directly from string slices.
///
/// # Example
/// ```
/// use colmark::Colorize;
///
/// assert_eq!("#<b>(bold)".colorized(), "\x1b[1mbold\x1b[22m");
/// ```
pub trait Colorize {
    /// Render `self` as markup into an escape-annotated string.
    #[must_use]
    fn colorized(&self) -> String;
}

impl Colorize for str {
    fn colorized(&self) -> String {
        render(self)
    }
}
