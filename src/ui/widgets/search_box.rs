use crate::ui::core::geom::{Insets, Pos, Rect};
use crate::ui::core::style::Style;
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "Search for one ;)";
pub const CLEAR_GLYPH: &str = "✕";
pub const HEIGHT: u16 = 3;

#[derive(Clone, Copy, Debug)]
pub struct SearchBoxStyles {
    pub text: Style,
    pub placeholder: Style,
    pub border: Style,
    pub button: Style,
}

impl SearchBoxStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            text: theme.word(),
            placeholder: theme.muted(),
            border: theme.border(),
            button: theme.hovered(),
        }
    }
}

/// Bordered single-line input. The clear button is only drawn while
/// `show_clear` is set.
pub struct SearchBox<'a> {
    pub query: &'a str,
    pub show_clear: bool,
    pub styles: SearchBoxStyles,
    /// Set by `ui()`: where the terminal cursor belongs.
    pub cursor: Option<Pos>,
}

impl<'a> SearchBox<'a> {
    pub fn new(query: &'a str, show_clear: bool, styles: SearchBoxStyles) -> Self {
        Self {
            query,
            show_clear,
            styles,
            cursor: None,
        }
    }
}

impl Widget for SearchBox<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        self.cursor = None;
        let outer = ui.rect;
        if outer.w < 4 || outer.h < HEIGHT {
            return;
        }
        let outer = Rect::new(outer.x, outer.y, outer.w, HEIGHT);
        ui.painter.border(outer, self.styles.border);
        ui.tree
            .push(Node::new(outer, Sense::CLICK, NodeKind::SearchInput));

        let mut inner = outer.inset(Insets::xy(2, 1));
        if self.show_clear && inner.w > 2 {
            let button = Rect::new(inner.right() - 1, inner.y, 1, 1);
            ui.painter
                .text(Pos::new(button.x, button.y), CLEAR_GLYPH, self.styles.button);
            ui.tree.push(Node::new(
                button,
                Sense::HOVER | Sense::CLICK,
                NodeKind::ClearButton,
            ));
            inner.w -= 2;
        }
        if inner.is_empty() {
            return;
        }

        if self.query.is_empty() {
            ui.painter.text_clipped(
                Pos::new(inner.x, inner.y),
                PLACEHOLDER,
                self.styles.placeholder,
                inner,
            );
            self.cursor = Some(Pos::new(inner.x, inner.y));
            return;
        }

        // Keep the end of the query (and the cursor) in view.
        let visible = tail_fitting(self.query, inner.w.saturating_sub(1) as usize);
        ui.painter
            .text_clipped(Pos::new(inner.x, inner.y), visible, self.styles.text, inner);
        let x = inner.x.saturating_add(visible.width() as u16);
        self.cursor = Some(Pos::new(x.min(inner.right() - 1), inner.y));
    }
}

/// Longest suffix of `text` at most `max_width` columns wide.
fn tail_fitting(text: &str, max_width: usize) -> &str {
    let mut width = 0usize;
    let mut start = text.len();
    for (idx, g) in text.grapheme_indices(true).rev() {
        let w = g.width();
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/search_box.rs"]
mod tests;
