//! The effect catalog: SGR codes, tag names, categories, and turn-off pairs.
//!
//! Everything here is static data. The resolver asks three questions of the
//! catalog: which effect does a tag name map to, which category does an
//! effect belong to, and which dedicated code deactivates a style effect.

/// One SGR (Select Graphic Rendition) effect.
///
/// The discriminant is the SGR parameter code sent to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Effect {
    /// Reset all effects (code 0). Not reachable from any tag name.
    Reset = 0,
    /// Bold weight.
    Bold = 1,
    /// Faint weight.
    Faint = 2,
    /// Italic.
    Italic = 3,
    /// Underline.
    Underline = 4,
    /// Blink.
    Blink = 5,
    /// Swap foreground and background.
    Reverse = 7,
    /// Crossed out.
    Crossed = 9,
    /// Double underline.
    DoubleUnderline = 21,

    /// Bold and faint off.
    NormalIntensity = 22,
    /// Italic off.
    ItalicOff = 23,
    /// Underline and double underline off.
    UnderlineOff = 24,
    /// Blink off.
    BlinkOff = 25,
    /// Reverse off.
    ReverseOff = 27,
    /// Crossed out off.
    CrossedOff = 29,

    /// Black foreground.
    BlackFg = 30,
    /// Red foreground.
    RedFg = 31,
    /// Green foreground.
    GreenFg = 32,
    /// Yellow foreground.
    YellowFg = 33,
    /// Blue foreground.
    BlueFg = 34,
    /// Magenta foreground.
    MagentaFg = 35,
    /// Cyan foreground.
    CyanFg = 36,
    /// White foreground.
    WhiteFg = 37,
    /// 24-bit foreground; carries a `;2;r;g;b` payload on the wire.
    RgbFg = 38,
    /// Default foreground. Seeds the foreground history stack.
    DefaultFg = 39,

    /// Black background.
    BlackBg = 40,
    /// Red background.
    RedBg = 41,
    /// Green background.
    GreenBg = 42,
    /// Yellow background.
    YellowBg = 43,
    /// Blue background.
    BlueBg = 44,
    /// Magenta background.
    MagentaBg = 45,
    /// Cyan background.
    CyanBg = 46,
    /// White background.
    WhiteBg = 47,
    /// 24-bit background; carries a `;2;r;g;b` payload on the wire.
    RgbBg = 48,
    /// Default background. Seeds the background history stack.
    DefaultBg = 49,

    /// Framed.
    Framed = 51,
    /// Encircled.
    Encircled = 52,
    /// Overlined.
    Overlined = 53,
    /// Framed and encircled off.
    FramedOff = 54,
    /// Overlined off.
    OverlinedOff = 55,

    /// Bright black foreground.
    BrightBlackFg = 90,
    /// Bright red foreground.
    BrightRedFg = 91,
    /// Bright green foreground.
    BrightGreenFg = 92,
    /// Bright yellow foreground.
    BrightYellowFg = 93,
    /// Bright blue foreground.
    BrightBlueFg = 94,
    /// Bright magenta foreground.
    BrightMagentaFg = 95,
    /// Bright cyan foreground.
    BrightCyanFg = 96,
    /// Bright white foreground.
    BrightWhiteFg = 97,

    /// Bright black background.
    BrightBlackBg = 100,
    /// Bright red background.
    BrightRedBg = 101,
    /// Bright green background.
    BrightGreenBg = 102,
    /// Bright yellow background.
    BrightYellowBg = 103,
    /// Bright blue background.
    BrightBlueBg = 104,
    /// Bright magenta background.
    BrightMagentaBg = 105,
    /// Bright cyan background.
    BrightCyanBg = 106,
    /// Bright white background.
    BrightWhiteBg = 107,
}

/// Disjoint category an effect belongs to.
///
/// The resolver branches on this when a scope closes: colors are restored
/// from the matching history stack, styles emit their dedicated off code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    /// Styles, frame effects, their off codes, and reset.
    Style,
    /// Foreground colors, including bright, RGB, and the default sentinel.
    Foreground,
    /// Background colors, including bright, RGB, and the default sentinel.
    Background,
}

impl Effect {
    /// Return the raw SGR parameter code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Return the category this effect belongs to.
    #[must_use]
    pub const fn category(self) -> EffectCategory {
        match self {
            Self::BlackFg
            | Self::RedFg
            | Self::GreenFg
            | Self::YellowFg
            | Self::BlueFg
            | Self::MagentaFg
            | Self::CyanFg
            | Self::WhiteFg
            | Self::RgbFg
            | Self::DefaultFg
            | Self::BrightBlackFg
            | Self::BrightRedFg
            | Self::BrightGreenFg
            | Self::BrightYellowFg
            | Self::BrightBlueFg
            | Self::BrightMagentaFg
            | Self::BrightCyanFg
            | Self::BrightWhiteFg => EffectCategory::Foreground,
            Self::BlackBg
            | Self::RedBg
            | Self::GreenBg
            | Self::YellowBg
            | Self::BlueBg
            | Self::MagentaBg
            | Self::CyanBg
            | Self::WhiteBg
            | Self::RgbBg
            | Self::DefaultBg
            | Self::BrightBlackBg
            | Self::BrightRedBg
            | Self::BrightGreenBg
            | Self::BrightYellowBg
            | Self::BrightBlueBg
            | Self::BrightMagentaBg
            | Self::BrightCyanBg
            | Self::BrightWhiteBg => EffectCategory::Background,
            _ => EffectCategory::Style,
        }
    }

    /// Return the dedicated deactivation code for a style effect.
    ///
    /// Total over every style effect that a tag name can open. Colors never
    /// reach this path (the resolver restores them from history); for them
    /// and for the off codes themselves this returns [`Effect::Reset`]. The
    /// match is exhaustive so adding a variant forces a classification here.
    #[must_use]
    pub const fn turn_off(self) -> Self {
        match self {
            Self::Bold | Self::Faint => Self::NormalIntensity,
            Self::Italic => Self::ItalicOff,
            Self::Underline | Self::DoubleUnderline => Self::UnderlineOff,
            Self::Blink => Self::BlinkOff,
            Self::Reverse => Self::ReverseOff,
            Self::Crossed => Self::CrossedOff,
            Self::Framed | Self::Encircled => Self::FramedOff,
            Self::Overlined => Self::OverlinedOff,

            // No tag name opens these, so no close ever asks.
            Self::Reset
            | Self::NormalIntensity
            | Self::ItalicOff
            | Self::UnderlineOff
            | Self::BlinkOff
            | Self::ReverseOff
            | Self::CrossedOff
            | Self::FramedOff
            | Self::OverlinedOff => Self::Reset,

            // Colors are restored from the history stacks, never turned off.
            Self::BlackFg
            | Self::RedFg
            | Self::GreenFg
            | Self::YellowFg
            | Self::BlueFg
            | Self::MagentaFg
            | Self::CyanFg
            | Self::WhiteFg
            | Self::RgbFg
            | Self::DefaultFg
            | Self::BrightBlackFg
            | Self::BrightRedFg
            | Self::BrightGreenFg
            | Self::BrightYellowFg
            | Self::BrightBlueFg
            | Self::BrightMagentaFg
            | Self::BrightCyanFg
            | Self::BrightWhiteFg
            | Self::BlackBg
            | Self::RedBg
            | Self::GreenBg
            | Self::YellowBg
            | Self::BlueBg
            | Self::MagentaBg
            | Self::CyanBg
            | Self::WhiteBg
            | Self::RgbBg
            | Self::DefaultBg
            | Self::BrightBlackBg
            | Self::BrightRedBg
            | Self::BrightGreenBg
            | Self::BrightYellowBg
            | Self::BrightBlueBg
            | Self::BrightMagentaBg
            | Self::BrightCyanBg
            | Self::BrightWhiteBg => Self::Reset,
        }
    }

    /// Look up a tag name or acronym.
    ///
    /// Lowercase color acronyms select the foreground, uppercase-leading ones
    /// the background. HTML-style acronyms (`<b>`, `<i>`, `<u>`, `<f>`) map
    /// to the common styles. Returns `None` for anything else; the resolver
    /// degrades such tags to literal text.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let effect = match name {
            "bold" | "<b>" => Self::Bold,
            "faint" | "<f>" => Self::Faint,
            "italic" | "<i>" => Self::Italic,
            "underline" | "<u>" => Self::Underline,
            "double_underline" => Self::DoubleUnderline,
            "crossed" => Self::Crossed,
            "blink" => Self::Blink,
            "reverse" => Self::Reverse,
            "framed" => Self::Framed,
            "encircled" => Self::Encircled,
            "overlined" => Self::Overlined,

            "black" | "k" => Self::BlackFg,
            "red" | "r" => Self::RedFg,
            "green" | "g" => Self::GreenFg,
            "yellow" | "y" => Self::YellowFg,
            "blue" | "b" => Self::BlueFg,
            "magenta" | "m" => Self::MagentaFg,
            "cyan" | "c" => Self::CyanFg,
            "white" | "w" => Self::WhiteFg,
            "rgb" => Self::RgbFg,

            "Black" | "K" => Self::BlackBg,
            "Red" | "R" => Self::RedBg,
            "Green" | "G" => Self::GreenBg,
            "Yellow" | "Y" => Self::YellowBg,
            "Blue" | "B" => Self::BlueBg,
            "Magenta" | "M" => Self::MagentaBg,
            "Cyan" | "C" => Self::CyanBg,
            "White" | "W" => Self::WhiteBg,
            "RGB" => Self::RgbBg,

            "bright_black" | "bk" => Self::BrightBlackFg,
            "bright_red" | "br" => Self::BrightRedFg,
            "bright_green" | "bg" => Self::BrightGreenFg,
            "bright_yellow" | "by" => Self::BrightYellowFg,
            "bright_blue" | "bb" => Self::BrightBlueFg,
            "bright_magenta" | "bm" => Self::BrightMagentaFg,
            "bright_cyan" | "bc" => Self::BrightCyanFg,
            "bright_white" | "bw" => Self::BrightWhiteFg,

            "bright_Black" | "bK" => Self::BrightBlackBg,
            "bright_Red" | "bR" => Self::BrightRedBg,
            "bright_Green" | "bG" => Self::BrightGreenBg,
            "bright_Yellow" | "bY" => Self::BrightYellowBg,
            "bright_Blue" | "bB" => Self::BrightBlueBg,
            "bright_Magenta" | "bM" => Self::BrightMagentaBg,
            "bright_Cyan" | "bC" => Self::BrightCyanBg,
            "bright_White" | "bW" => Self::BrightWhiteBg,

            _ => return None,
        };
        Some(effect)
    }
}
