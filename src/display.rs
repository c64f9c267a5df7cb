use colored::{Color, ColoredString, Colorize};

/// Colours cycled through by [`rainbow`]
const RAINBOW_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

const BANNER: &str = r#"
   ____ _ _   _   _       _       _____                 _ _   _____      _                  _
  / ___(_) |_| | | |_   _| |__   | ____|_ __ ___   __ _(_) | | ____|_  _| |_ _ __ __ _  ___| |_ ___  _ __
 | |  _| | __| |_| | | | | '_ \  |  _| | '_ ` _ \ / _` | | | |  _| \ \/ / __| '__/ _` |/ __| __/ _ \| '__|
 | |_| | | |_|  _  | |_| | |_) | | |___| | | | | | (_| | | | | |___ >  <| |_| | | (_| | (__| || (_) | |
  \____|_|\__|_| |_|\__,_|_.__/  |_____|_| |_| |_|\__,_|_|_| |_____/_/\_\__ |_|  \__,_|\___|\__\___/|_|
"#;

/// Styles `text` with a foreground colour
pub fn paint(color: Color, text: &str) -> ColoredString {
    text.color(color)
}

/// Welcome banner shown at the start of every search
pub fn banner() -> ColoredString {
    paint(Color::Yellow, BANNER)
}

/// Colours each character of `text`, cycling through [`RAINBOW_COLORS`]
pub fn rainbow(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            paint(RAINBOW_COLORS[i % RAINBOW_COLORS.len()], &ch.to_string()).to_string()
        })
        .collect()
}

/// Renders `lines` inside a box of `*` borders
///
/// Each line is padded to the widest one. Widths are measured on the plain
/// text, before `line_color` is applied.
///
/// # Arguments
/// * `lines` - Rows to show, one per line
/// * `border_color` - Colour of the border rows and padding
/// * `line_color` - Colour of the row text
pub fn bordered_box<S: AsRef<str>>(lines: &[S], border_color: Color, line_color: Color) -> String {
    let width: usize = lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let border = paint(border_color, &"*".repeat(width + 2)).to_string();

    let mut rendered: Vec<String> = Vec::with_capacity(lines.len() + 2);
    rendered.push(border.clone());
    for line in lines {
        let padded = format!("{:<width$}", line.as_ref());
        rendered.push(format!(
            "{}{}{}",
            paint(border_color, " "),
            paint(line_color, &padded),
            paint(border_color, " ")
        ));
    }
    rendered.push(border);
    rendered.join("\n")
}
