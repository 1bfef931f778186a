#![forbid(unsafe_code)]

//! Inline markup to ANSI/SGR styled terminal strings.
//!
//! Write `"Some #r(red) text"` and get back a string with the escape codes
//! to turn the color on and — more importantly — back off again, with
//! nesting handled, so callers never track reset codes by hand.
//!
//! # Syntax
//!
//! | Construct | Syntax | Effect |
//! |-----------|--------|--------|
//! | Scoped tag | `#name(...)` | styles the text inside the parentheses |
//! | Single-word tag | `#name word` | styles only the next word |
//! | HTML-style acronym | `<b>`, `<i>`, `<u>`, `<f>` | bold / italic / underline / faint |
//! | Foreground acronym | lowercase: `r`, `g`, `b`, `bk`, `br`, … | sets the foreground color |
//! | Background acronym | uppercase-leading: `R`, `G`, `B`, `bR`, … | sets the background color |
//! | RGB extension | `rgb[r;g;b]` / `RGB[r;g;b]` | 24-bit foreground / background |
//! | Escape | `\#`, `\<`, `\(`, `\)` | the literal character |
//!
//! Closing a nested color restores the enclosing scope's color, not the
//! terminal default. Unknown tag names stay in the output as literal text;
//! scopes left open at end of input are closed automatically. Nothing here
//! ever errors.
//!
//! # Example
//! ```
//! use colmark::{ColorText, Colorize, render};
//!
//! assert_eq!(render("a #r(red) word"), "a \x1b[31mred\x1b[39m word");
//! assert_eq!("#<b>(bold)".colorized(), "\x1b[1mbold\x1b[22m");
//!
//! // Nested scopes restore the ancestor color.
//! assert_eq!(render("#r(a#g(b)c)"), "\x1b[31ma\x1b[32mb\x1b[31mc\x1b[39m");
//!
//! // A reusable value that prints styled.
//! let banner = ColorText::new("#Y(#k( warning ))");
//! println!("{banner}");
//! ```
//!
//! # Pipeline
//!
//! Two stages behind [`render`]: [`tokenize`] scans raw text into
//! [`Token`]s, then [`apply_effects`] walks the sequence once with
//! per-category scope stacks and rewrites each effect token into a concrete
//! escape sequence. Both stages are pure functions of their input; inputs
//! may be processed on independent threads without coordination.
//!
//! # Feature flags
//!
//! - `tracing` — emit `tracing` spans around the tokenizer and resolver.

pub mod ansi;
pub mod effect;
pub mod resolver;
pub mod text;
pub mod token;
pub mod tokenizer;

pub use effect::{Effect, EffectCategory};
pub use resolver::apply_effects;
pub use text::{ColorText, Colorize, render};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
