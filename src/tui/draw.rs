use ratatui::style::{Color, Modifier, Style};

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const SHARE_WIDTH: usize = 3;

/// Three-cell bar for `commits` relative to the busiest person; the glyph
/// height follows the same ratio, empty cells are `░`.
pub fn share_bar(commits: usize, max: usize) -> String {
    if max == 0 {
        return LEVELS[0].to_string().repeat(SHARE_WIDTH);
    }
    let ratio = (commits as f64 / max as f64).min(1.0);
    let filled = (ratio * SHARE_WIDTH as f64).round() as usize;
    let glyph = LEVELS[(ratio * (LEVELS.len() - 1) as f64).round() as usize];
    (0..SHARE_WIDTH)
        .map(|i| if i < filled { glyph } else { '░' })
        .collect()
}

/// The person's own colour, bold for the top half of contributors and dim
/// for people with no commits.
pub fn share_style(commits: usize, max: usize, color: Color) -> Style {
    let base = Style::default().fg(color);
    match (commits, max) {
        (0, _) | (_, 0) => base.add_modifier(Modifier::DIM),
        (c, m) if c * 2 >= m => base.add_modifier(Modifier::BOLD),
        _ => base,
    }
}

/// `#rrggbb` to a terminal color; anything else falls back to gray.
pub fn person_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Gray;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(person_color("#8b5cf6"), Color::Rgb(0x8b, 0x5c, 0xf6));
        assert_eq!(person_color("nope"), Color::Gray);
        assert_eq!(person_color("#zzzzzz"), Color::Gray);
    }

    #[test]
    fn share_bar_fills_by_ratio() {
        assert_eq!(share_bar(0, 0), "▁▁▁");
        assert_eq!(share_bar(10, 10), "███");
        assert_eq!(share_bar(0, 10), "░░░");
        assert_eq!(share_bar(5, 10).chars().filter(|&c| c == '░').count(), 1);
    }

    #[test]
    fn share_style_marks_top_half() {
        let c = Color::Rgb(1, 2, 3);
        assert!(share_style(6, 10, c).add_modifier.contains(Modifier::BOLD));
        assert!(share_style(0, 10, c).add_modifier.contains(Modifier::DIM));
        assert_eq!(share_style(2, 10, c), Style::default().fg(c));
    }
}
