use super::*;

#[test]
fn patch_overrides_colors_and_merges_mods() {
    let base = Style::default().fg(Color::Indexed(15)).add_mod(Mod::DIM);
    let out = base.patch(Style::default().fg(Color::Indexed(3)).add_mod(Mod::BOLD));
    assert_eq!(out.fg, Some(Color::Indexed(3)));
    assert!(out.mods.contains(Mod::DIM));
    assert!(out.mods.contains(Mod::BOLD));
    assert_eq!(out.bg, None);
}

#[test]
fn mods_start_empty() {
    assert!(Mod::NONE.is_empty());
    assert!(!(Mod::BOLD | Mod::REVERSE).contains(Mod::UNDERLINE));
}
