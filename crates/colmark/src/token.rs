//! The token model shared by the tokenizer and the resolver.

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal output text.
    Text,
    /// A tag that opens an effect scope.
    EffectOpen,
    /// The end of an effect scope.
    EffectClose,
}

/// One unit of scanned markup.
///
/// `value` starts out as raw input text and is rewritten by the resolver: in
/// resolved output every effect token's value is a complete escape sequence
/// and every text token's value is literal output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What this token represents.
    pub kind: TokenKind,
    /// Raw markup text, later the resolved output text.
    pub value: String,
}

impl Token {
    /// A literal text token. The tokenizer never emits one with an empty
    /// value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Text,
            value: value.into(),
        }
    }

    /// An effect-open token carrying the raw tag text, including its leading
    /// `#` (if any) and trailing delimiter (if one was consumed).
    #[must_use]
    pub fn effect_open(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::EffectOpen,
            value: value.into(),
        }
    }

    /// An effect-close token consumed from a `)` in the input.
    #[must_use]
    pub fn effect_close() -> Self {
        Self {
            kind: TokenKind::EffectClose,
            value: ")".to_string(),
        }
    }

    /// An effect-close token synthesized for a next-word scope or for a
    /// scope still open at end of input. It carries no source text, so
    /// suppressing it removes nothing from the output.
    #[must_use]
    pub fn synthetic_close() -> Self {
        Self {
            kind: TokenKind::EffectClose,
            value: String::new(),
        }
    }
}
