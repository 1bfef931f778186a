//! The tokenizer: raw markup text to a flat token sequence.
//!
//! Scanning is purely syntactic. The tokenizer resolves escaping and scope
//! nesting but never asks whether a tag name is valid; that is the
//! resolver's job. It is total: malformed markup degrades, it never errors.

use crate::token::Token;

/// The two scope forms a tag can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// `#name(...)`: closed by the matching unescaped `)`.
    Explicit,
    /// `#name word`: closed at the next space, or at end of input.
    NextWord,
}

/// Scan raw text into an ordered token sequence.
///
/// Grammar summary:
/// - a tag starts at `#` or `<`; its name runs to the first `(`, first
///   space, or end of input;
/// - `name(` opens an explicit scope, `name ` a next-word scope;
/// - `\#`, `\<`, `\(`, `\)` emit the escaped character literally; a
///   backslash before anything else stays a literal backslash;
/// - `(` and `)` outside any open scope are plain text;
/// - scopes still open at end of input are closed with synthetic tokens.
///
/// Token order is input order; the resolver's stack discipline depends on
/// it. Empty text tokens are never emitted.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    // Fast path: nothing that can start a tag or an escape. A bare `)` is
    // plain text when no scope is open, so the whole input is one token.
    if memchr::memchr3(b'#', b'<', b'\\', input.as_bytes()).is_none() {
        if input.is_empty() {
            return Vec::new();
        }
        return vec![Token::text(input)];
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("tokenize", len = input.len());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut tokens = Vec::new();
    let mut scopes: Vec<Scope> = Vec::new();
    let mut buffer = String::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.peek() {
                Some(&next) if matches!(next, '#' | '<' | '(' | ')') => {
                    chars.next();
                    buffer.push(next);
                }
                _ => buffer.push('\\'),
            },
            '#' | '<' => {
                flush_text(&mut tokens, &mut buffer);

                let mut tag = String::new();
                tag.push(ch);
                let mut delimiter = None;
                while let Some(&next) = chars.peek() {
                    if next == '(' || next == ' ' {
                        delimiter = Some(next);
                        chars.next();
                        break;
                    }
                    tag.push(next);
                    chars.next();
                }

                match delimiter {
                    Some('(') => {
                        tag.push('(');
                        scopes.push(Scope::Explicit);
                    }
                    Some(_) => {
                        tag.push(' ');
                        scopes.push(Scope::NextWord);
                    }
                    // Tag runs to end of input; the scope is synthetic-closed
                    // below and the raw value keeps no delimiter.
                    None => scopes.push(Scope::NextWord),
                }
                tokens.push(Token::effect_open(tag));
            }
            ')' if !scopes.is_empty() => {
                scopes.pop();
                flush_text(&mut tokens, &mut buffer);
                tokens.push(Token::effect_close());
            }
            ' ' if scopes.last() == Some(&Scope::NextWord) => {
                scopes.pop();
                flush_text(&mut tokens, &mut buffer);
                tokens.push(Token::synthetic_close());
                // The delimiting space belongs to the text after the scope.
                buffer.push(' ');
            }
            _ => buffer.push(ch),
        }
    }

    flush_text(&mut tokens, &mut buffer);
    for _ in scopes {
        tokens.push(Token::synthetic_close());
    }

    tokens
}

/// Flush pending plain text, never emitting an empty token.
fn flush_text(tokens: &mut Vec<Token>, buffer: &mut String) {
    if !buffer.is_empty() {
        tokens.push(Token::text(std::mem::take(buffer)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn values(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }

    // ==========================================================================
    // Plain text
    // ==========================================================================

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty(), "empty input should yield nothing");
    }

    #[test]
    fn plain_text_is_one_token() {
        let tokens = tokenize("Hello, world!");
        assert_eq!(values(&tokens), ["Hello, world!"]);
        assert_eq!(kinds(&tokens), [TokenKind::Text]);
    }

    #[test]
    fn parentheses_outside_scopes_are_text() {
        let tokens = tokenize("Hello, world (and you)!");
        assert_eq!(values(&tokens), ["Hello, world (and you)!"]);
        assert_eq!(kinds(&tokens), [TokenKind::Text]);
    }

    // ==========================================================================
    // Explicit scopes
    // ==========================================================================

    #[test]
    fn explicit_scope() {
        let tokens = tokenize("#r(red) text");
        assert_eq!(values(&tokens), ["#r(", "red", ")", " text"]);
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::EffectOpen,
                TokenKind::Text,
                TokenKind::EffectClose,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn empty_explicit_scope_emits_no_text() {
        let tokens = tokenize("#r()");
        assert_eq!(values(&tokens), ["#r(", ")"]);
        assert_eq!(kinds(&tokens), [TokenKind::EffectOpen, TokenKind::EffectClose]);
    }

    #[test]
    fn nested_scopes_close_by_depth() {
        let tokens = tokenize("#r(a#g(b)c)");
        assert_eq!(values(&tokens), ["#r(", "a", "#g(", "b", ")", "c", ")"]);
    }

    #[test]
    fn unmatched_open_is_auto_closed() {
        let tokens = tokenize("#r(never closed");
        assert_eq!(values(&tokens), ["#r(", "never closed", ""]);
        assert_eq!(tokens[2].kind, TokenKind::EffectClose);
    }

    #[test]
    fn html_tag_without_hash() {
        let tokens = tokenize("<b>(x)");
        assert_eq!(values(&tokens), ["<b>(", "x", ")"]);
    }

    // ==========================================================================
    // Next-word scopes
    // ==========================================================================

    #[test]
    fn next_word_scope_covers_one_word() {
        let tokens = tokenize("Next #y word will be colored");
        assert_eq!(values(&tokens), ["Next ", "#y ", "word", "", " will be colored"]);
        assert_eq!(tokens[3].kind, TokenKind::EffectClose);
    }

    #[test]
    fn next_word_scope_at_end_of_input() {
        let tokens = tokenize("#y word");
        assert_eq!(values(&tokens), ["#y ", "word", ""]);
        assert_eq!(tokens[2].kind, TokenKind::EffectClose);
    }

    #[test]
    fn tag_at_end_of_input_keeps_raw_name() {
        let tokens = tokenize("#r");
        assert_eq!(values(&tokens), ["#r", ""]);
        assert_eq!(kinds(&tokens), [TokenKind::EffectOpen, TokenKind::EffectClose]);
    }

    #[test]
    fn space_inside_explicit_scope_does_not_close_next_word() {
        // The space after `b` belongs to the explicit #g scope, so it must
        // not terminate the pending next-word #r scope.
        let tokens = tokenize("#r #g(b c) d");
        assert_eq!(
            values(&tokens),
            ["#r ", "#g(", "b c", ")", "", " d"],
            "inner explicit scope should close before the next-word scope"
        );
    }

    #[test]
    fn paren_closes_pending_next_word_scope() {
        let tokens = tokenize("#y word)x");
        assert_eq!(values(&tokens), ["#y ", "word", ")", "x"]);
        assert_eq!(tokens[2].kind, TokenKind::EffectClose);
    }

    // ==========================================================================
    // Escaping
    // ==========================================================================

    #[test]
    fn escaped_specials_are_literal() {
        let tokens = tokenize(r"\# \< \( \)");
        assert_eq!(values(&tokens), ["# < ( )"]);
        assert_eq!(kinds(&tokens), [TokenKind::Text]);
    }

    #[test]
    fn escaped_paren_does_not_close_scope() {
        let tokens = tokenize(r"#r(Text \(With parenthese escaped\))");
        assert_eq!(values(&tokens), ["#r(", "Text (With parenthese escaped)", ")"]);
    }

    #[test]
    fn backslash_before_ordinary_char_is_kept() {
        let tokens = tokenize(r"a\b");
        assert_eq!(values(&tokens), [r"a\b"]);
    }

    #[test]
    fn trailing_backslash_is_kept() {
        let tokens = tokenize("a\\");
        assert_eq!(values(&tokens), ["a\\"]);
    }

    // ==========================================================================
    // Buffering discipline
    // ==========================================================================

    #[test]
    fn text_is_flushed_before_effect_tokens() {
        let tokens = tokenize("ab#r(cd)ef");
        assert_eq!(values(&tokens), ["ab", "#r(", "cd", ")", "ef"]);
    }

    #[test]
    fn no_empty_text_tokens() {
        for input in ["#r()", "#r( )", "#y  x", "#r(#g(x))", "", ")"] {
            for token in tokenize(input) {
                if token.kind == TokenKind::Text {
                    assert!(!token.value.is_empty(), "empty text token for {input:?}");
                }
            }
        }
    }

    #[test]
    fn unicode_text_passes_through() {
        let tokens = tokenize("héllo #r(wörld) …");
        assert_eq!(values(&tokens), ["héllo ", "#r(", "wörld", ")", " …"]);
    }
}
