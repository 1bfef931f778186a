//! The effect resolver: token values to concrete escape sequences.
//!
//! A single pass over the token sequence. Open tags push onto the scope
//! stacks and become SGR open sequences; close tokens pop and become either
//! a color-restore sequence (from the per-category history) or a style
//! turn-off sequence. Unknown tag names degrade to literal text and swallow
//! their matching close.

use smallvec::{SmallVec, smallvec};

use crate::ansi;
use crate::effect::{Effect, EffectCategory};
use crate::token::{Token, TokenKind};

/// Scope state threaded through one resolution pass.
///
/// Invariant: after a full pass over tokenizer output, `open_effects` is
/// empty and both histories are back at their seed entry.
struct Resolver {
    /// Effects currently open, innermost last.
    open_effects: SmallVec<[Effect; 8]>,
    /// Foreground codes in scope, outermost first, seeded with the default.
    fg_history: SmallVec<[String; 4]>,
    /// Background codes in scope, outermost first, seeded with the default.
    bg_history: SmallVec<[String; 4]>,
    /// Set when an unknown tag was degraded to text; the next close token
    /// belongs to it and must not emit an escape or touch the stacks.
    suppress_close: bool,
}

/// Resolve a token sequence in input order.
///
/// Total: every malformed construct has a defined degraded form, nothing is
/// reported to the caller. The returned sequence is ready for
/// concatenation: text tokens are literal output, effect tokens are escape
/// sequences.
#[must_use]
pub fn apply_effects(tokens: Vec<Token>) -> Vec<Token> {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("apply_effects", tokens = tokens.len());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut resolver = Resolver::new();
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.kind {
            TokenKind::Text => out.push(token),
            TokenKind::EffectOpen => resolver.open(token, &mut out),
            TokenKind::EffectClose => resolver.close(token, &mut out),
        }
    }

    debug_assert!(resolver.open_effects.is_empty(), "unclosed effect scope");
    debug_assert_eq!(resolver.fg_history.len(), 1, "foreground history not rewound");
    debug_assert_eq!(resolver.bg_history.len(), 1, "background history not rewound");
    out
}

impl Resolver {
    fn new() -> Self {
        Self {
            open_effects: SmallVec::new(),
            fg_history: smallvec![Effect::DefaultFg.code().to_string()],
            bg_history: smallvec![Effect::DefaultBg.code().to_string()],
            suppress_close: false,
        }
    }

    fn open(&mut self, mut token: Token, out: &mut Vec<Token>) {
        // The raw value is the tag as scanned: optional leading `#`, the
        // name, and the consumed delimiter (`(` or space) if there was one.
        let raw = token.value.as_str();
        let name = raw.strip_suffix(['(', ' ']).unwrap_or(raw);
        let name = name.strip_prefix('#').unwrap_or(name);

        let (candidate, payload) = match split_rgb(name) {
            Some((base, payload)) => (base, Some(payload)),
            None => (name, None),
        };

        let Some(effect) = Effect::from_name(candidate) else {
            // Unknown tag: the raw markup stays in the output as literal
            // text and the close that belongs to it is swallowed.
            #[cfg(feature = "tracing")]
            tracing::trace!(tag = %token.value, "unknown tag degraded to text");
            token.kind = TokenKind::Text;
            out.push(token);
            self.suppress_close = true;
            return;
        };

        let code = match payload {
            Some(payload) => format!("{};2;{payload}", effect.code()),
            None => effect.code().to_string(),
        };
        self.open_effects.push(effect);
        match effect.category() {
            EffectCategory::Foreground => self.fg_history.push(code.clone()),
            EffectCategory::Background => self.bg_history.push(code.clone()),
            EffectCategory::Style => {}
        }

        token.value = ansi::sgr(&code);
        out.push(token);
    }

    fn close(&mut self, mut token: Token, out: &mut Vec<Token>) {
        if self.suppress_close {
            self.suppress_close = false;
            // A close scanned from a literal `)` stays in the output as
            // text; synthetic closes have no source text and vanish.
            if !token.value.is_empty() {
                token.kind = TokenKind::Text;
                out.push(token);
            }
            return;
        }

        // Consecutive unknown opens share one suppression flag, so a later
        // close can arrive with nothing left on the stack. The provenance
        // rule above applies here too: a close scanned from a literal `)`
        // keeps its input byte as text, a synthetic one vanishes.
        let Some(effect) = self.open_effects.pop() else {
            if !token.value.is_empty() {
                token.kind = TokenKind::Text;
                out.push(token);
            }
            return;
        };

        let code = match effect.category() {
            EffectCategory::Foreground => restore(&mut self.fg_history),
            EffectCategory::Background => restore(&mut self.bg_history),
            EffectCategory::Style => {
                let off = effect.turn_off();
                debug_assert!(
                    off != Effect::Reset,
                    "style effect without a dedicated off code"
                );
                off.code().to_string()
            }
        };
        token.value = ansi::sgr(&code);
        out.push(token);
    }
}

/// Pop the closing scope's color and return the code now in scope: the
/// enclosing scope's color, or the seeded default.
fn restore(history: &mut SmallVec<[String; 4]>) -> String {
    if history.len() > 1 {
        history.pop();
    }
    match history.last() {
        Some(code) => code.clone(),
        None => Effect::Reset.code().to_string(),
    }
}

/// Split an `rgb[..]` / `RGB[..]` name into its base name and numeric
/// payload.
///
/// The payload must be non-empty, contain at least one digit, and consist
/// only of ASCII digits and `;`. Anything else makes the whole name the
/// lookup candidate, which then degrades as an unknown tag.
fn split_rgb(name: &str) -> Option<(&str, &str)> {
    let (base, rest) = if let Some(rest) = name.strip_prefix("rgb[") {
        ("rgb", rest)
    } else if let Some(rest) = name.strip_prefix("RGB[") {
        ("RGB", rest)
    } else {
        return None;
    };
    let payload = rest.strip_suffix(']')?;
    let valid = !payload.is_empty()
        && payload.bytes().all(|b| b.is_ascii_digit() || b == b';')
        && payload.bytes().any(|b| b.is_ascii_digit());
    valid.then_some((base, payload))
}
