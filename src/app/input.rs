use super::{App, EventResult};
use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crate::ui::core::geom::Pos;
use crate::ui::core::tree::{NodeKind, Sense};
use unicode_segmentation::UnicodeSegmentation;

pub(super) fn handle_input(app: &mut App, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key) => handle_key(app, key),
        InputEvent::Mouse(mouse) => handle_mouse(app, mouse),
        InputEvent::Paste(text) => {
            if !app.controller.search_enabled() {
                return EventResult::Ignored;
            }
            let line: String = text.chars().filter(|c| !c.is_control()).collect();
            edit_query(app, |query| query.push_str(&line))
        }
        InputEvent::Resize(_, _) => {
            app.dirty = true;
            EventResult::Consumed
        }
        InputEvent::FocusLost => {
            app.dirty |= app.controller.on_leave();
            EventResult::Consumed
        }
        InputEvent::FocusGained => EventResult::Ignored,
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }
    if key.is_ctrl('c') {
        return EventResult::Quit;
    }

    let search = app.controller.search_enabled();
    match key.code {
        KeyCode::Esc => {
            if app.controller.query().is_empty() {
                return EventResult::Quit;
            }
            app.dirty |= app.controller.clear();
            EventResult::Consumed
        }
        KeyCode::Char('q') if !search => EventResult::Quit,
        _ if !search => EventResult::Ignored,
        KeyCode::Backspace => edit_query(app, |query| {
            if let Some((idx, _)) = query.grapheme_indices(true).next_back() {
                query.truncate(idx);
            }
        }),
        KeyCode::Char(ch) if is_plain(key.modifiers) => edit_query(app, |query| query.push(ch)),
        _ => EventResult::Ignored,
    }
}

fn is_plain(modifiers: KeyModifiers) -> bool {
    !modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn edit_query(app: &mut App, edit: impl FnOnce(&mut String)) -> EventResult {
    let mut text = app.controller.query().to_string();
    edit(&mut text);
    app.dirty |= app.controller.on_query(&app.cells, &text);
    EventResult::Consumed
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent) -> EventResult {
    let pos = Pos::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let hovered = app
                .ui_tree
                .hit_test(pos, Sense::HOVER)
                .and_then(|node| match node.kind {
                    NodeKind::GridCell { index } => app.cells.get(index),
                    _ => None,
                });
            let changed = match hovered {
                Some(cell) => app.controller.on_enter(cell),
                None => app.controller.on_leave(),
            };
            app.dirty |= changed;
            if changed {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let target = app.ui_tree.hit_test(pos, Sense::CLICK).map(|node| node.kind);
            match target {
                Some(NodeKind::ClearButton) => {
                    app.dirty |= app.controller.clear();
                    EventResult::Consumed
                }
                Some(NodeKind::SearchInput) => EventResult::Consumed,
                _ => EventResult::Ignored,
            }
        }
        _ => EventResult::Ignored,
    }
}
