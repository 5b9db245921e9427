use super::App;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::search_box::{self, SearchBox, SearchBoxStyles};
use crate::ui::widgets::word_grid::{WordGrid, WordGridStyles};

/// Share of the terminal width given to the search box and grid.
const CONTENT_PERCENT: u32 = 80;
const SEARCH_GAP: u16 = 1;
/// Terminal lines per grid row track.
const ROW_HEIGHT: u16 = 2;

pub(super) struct Areas {
    pub search: Option<Rect>,
    pub grid: Rect,
}

pub(super) fn areas(area: Rect, search: bool, row_tracks: usize) -> Areas {
    let width = (area.w as u32 * CONTENT_PERCENT / 100) as u16;
    let content = area.center_x(width.max(1));

    let (search, rest) = if search {
        let (top, rest) = content.split_top(search_box::HEIGHT);
        let (_, rest) = rest.split_top(SEARCH_GAP);
        (Some(top), rest)
    } else {
        (None, content)
    };

    let tracks = u16::try_from(row_tracks).unwrap_or(u16::MAX);
    let height = rest.h.min(tracks.saturating_mul(ROW_HEIGHT));
    Areas {
        search,
        grid: Rect::new(rest.x, rest.y, rest.w, height),
    }
}

pub(super) fn render(app: &mut App, backend: &mut dyn Backend, area: Rect) {
    app.ui_tree.clear();
    let row_tracks = app.rows.max(app.cells.row_count());
    let areas = areas(area, app.controller.search_enabled(), row_tracks);

    let mut cursor = None;
    if let Some(search_area) = areas.search {
        let mut painter = Painter::new();
        let mut ui = Ui::new(search_area, &mut painter, &mut app.ui_tree);
        let mut search = SearchBox::new(
            app.controller.query(),
            app.controller.has_matches(),
            SearchBoxStyles::from_theme(&app.theme),
        );
        search.ui(&mut ui);
        cursor = search.cursor;
        backend.draw(search_area, painter.cmds());
    }

    if !areas.grid.is_empty() {
        let mut painter = Painter::new();
        let mut ui = Ui::new(areas.grid, &mut painter, &mut app.ui_tree);
        WordGrid {
            cells: &app.cells,
            controller: &app.controller,
            reveal: &app.reveal,
            rows: app.rows,
            uppercase: app.uppercase,
            styles: WordGridStyles::from_theme(&app.theme),
        }
        .ui(&mut ui);
        backend.draw(areas.grid, painter.cmds());
    }

    backend.set_cursor(cursor);
}
