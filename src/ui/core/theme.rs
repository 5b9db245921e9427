use super::style::{Color, Mod, Style};

/// Colors of the grid and search box, independent of any backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub word_fg: Color,
    pub idle_fg: Color,
    pub match_fg: Color,
    pub hover_fg: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            word_fg: Color::Indexed(15),
            idle_fg: Color::Indexed(8),
            match_fg: Color::Indexed(3),
            hover_fg: Color::Indexed(6),
            border: Color::Indexed(8),
        }
    }
}

impl Theme {
    pub fn word(&self) -> Style {
        Style::default().fg(self.word_fg)
    }

    pub fn idle(&self) -> Style {
        Style::default().fg(self.idle_fg).add_mod(Mod::DIM)
    }

    pub fn matched(&self) -> Style {
        Style::default().fg(self.match_fg).add_mod(Mod::BOLD)
    }

    pub fn hovered(&self) -> Style {
        Style::default().fg(self.hover_fg).add_mod(Mod::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.idle_fg)
    }
}
