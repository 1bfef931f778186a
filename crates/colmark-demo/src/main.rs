//! Gallery of colmark markup features, for eyeballing against a real
//! terminal.
//!
//! Run with `cargo run -p colmark-demo`. With `--stdin` it instead reads
//! lines from standard input and prints each one rendered.

use std::io::{self, BufRead, Write};

use colmark::{ColorText, Colorize};

fn main() -> io::Result<()> {
    if std::env::args().any(|arg| arg == "--stdin") {
        return render_stdin();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    section(&mut out, "Plain text passes through")?;
    show(&mut out, "Hello, world (and you)!")?;
    show(&mut out, "Add tab here.\tAnd punctuation!")?;

    section(&mut out, "Explicit scopes")?;
    show(&mut out, "I love write black on #k(black!)")?;
    show(&mut out, "#C(You #r(can) use much more than just 1 effect!)")?;

    section(&mut out, "Next-word scopes")?;
    show(&mut out, "Next #y word will be colored")?;

    section(&mut out, "Escaping")?;
    show(&mut out, r"#r(Text \(With parenthese escaped\)) is ok!")?;
    show(&mut out, r"\#r(this) is not a tag")?;

    section(&mut out, "HTML-style acronyms")?;
    show(&mut out, "<i> italic <b> bold <f> faint <u> underline")?;

    section(&mut out, "Backgrounds")?;
    show(&mut out, "In order to color bg, put the color with a #M(big letter)!")?;

    section(&mut out, "Nesting restores the enclosing color")?;
    show(&mut out, "#r(red #g(green) red again)")?;

    section(&mut out, "24-bit color")?;
    show(&mut out, "#rgb[255;128;0](pumpkin) and #RGB[0;64;128](on steel blue)")?;

    section(&mut out, "Unknown tags degrade to text")?;
    show(&mut out, "#zzz(still readable), nothing resets afterwards")?;

    section(&mut out, "Concatenation spans markup")?;
    let mut banner = ColorText::new("#Y(#k( built ");
    banner += "piecewise ))";
    writeln!(out, "    {banner}")?;

    section(&mut out, "Foreground palette")?;
    for (name, acronym) in FG_COLORS {
        let line = format!("    #{acronym}({name})");
        writeln!(out, "{}", line.colorized())?;
    }

    section(&mut out, "Background palette")?;
    for (name, acronym) in BG_COLORS {
        let line = format!("    #{acronym}( {name} )");
        writeln!(out, "{}", line.colorized())?;
    }

    Ok(())
}

fn render_stdin() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        writeln!(out, "{}", line?.colorized())?;
    }
    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("#<b>({title})").colorized())
}

fn show(out: &mut impl Write, markup: &str) -> io::Result<()> {
    writeln!(out, "    {markup}")?;
    writeln!(out, "    {}", markup.colorized())
}

const FG_COLORS: [(&str, &str); 16] = [
    ("black", "k"),
    ("red", "r"),
    ("green", "g"),
    ("yellow", "y"),
    ("blue", "b"),
    ("magenta", "m"),
    ("cyan", "c"),
    ("white", "w"),
    ("bright_black", "bk"),
    ("bright_red", "br"),
    ("bright_green", "bg"),
    ("bright_yellow", "by"),
    ("bright_blue", "bb"),
    ("bright_magenta", "bm"),
    ("bright_cyan", "bc"),
    ("bright_white", "bw"),
];

const BG_COLORS: [(&str, &str); 16] = [
    ("Black", "K"),
    ("Red", "R"),
    ("Green", "G"),
    ("Yellow", "Y"),
    ("Blue", "B"),
    ("Magenta", "M"),
    ("Cyan", "C"),
    ("White", "W"),
    ("bright_Black", "bK"),
    ("bright_Red", "bR"),
    ("bright_Green", "bG"),
    ("bright_Yellow", "bY"),
    ("bright_Blue", "bB"),
    ("bright_Magenta", "bM"),
    ("bright_Cyan", "bC"),
    ("bright_White", "bW"),
];
