//! SGR escape sequence helpers.
//!
//! Pure string generation, no state tracking.
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ params m` | SGR (Select Graphic Rendition) |

/// SGR reset: `CSI 0 m`.
pub const RESET: &str = "\x1b[0m";

/// Build `CSI <params> m` for an SGR parameter string such as `"31"` or
/// `"38;2;10;20;30"`.
#[must_use]
pub fn sgr(params: &str) -> String {
    let mut seq = String::with_capacity(params.len() + 3);
    seq.push_str("\x1b[");
    seq.push_str(params);
    seq.push('m');
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_wraps_params() {
        assert_eq!(sgr("31"), "\x1b[31m");
        assert_eq!(sgr("38;2;10;20;30"), "\x1b[38;2;10;20;30m");
    }

    #[test]
    fn reset_is_sgr_zero() {
        assert_eq!(RESET, sgr("0"), "RESET should be the SGR 0 sequence");
    }
}
