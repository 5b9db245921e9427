use crate::kernel::settings::ThemeSettings;
use crate::ui::core::style::Color;
use crate::ui::core::theme::Theme;

/// Builds the render theme from user settings. Missing or unparsable
/// entries keep the default color.
pub fn theme_from_settings(settings: &ThemeSettings) -> Theme {
    let mut theme = Theme::default();
    apply(&mut theme.word_fg, settings.word_fg.as_deref(), "word_fg");
    apply(&mut theme.idle_fg, settings.idle_fg.as_deref(), "idle_fg");
    apply(&mut theme.match_fg, settings.match_fg.as_deref(), "match_fg");
    apply(&mut theme.hover_fg, settings.hover_fg.as_deref(), "hover_fg");
    apply(&mut theme.border, settings.border.as_deref(), "border");
    theme
}

fn apply(slot: &mut Color, value: Option<&str>, key: &'static str) {
    let Some(value) = value else {
        return;
    };
    match parse_color(value) {
        Some(color) => *slot = color,
        None => tracing::warn!(key, value, "unrecognized theme color"),
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        other => return other.parse::<u8>().ok().map(Color::Indexed),
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
