use super::*;

fn surface(text: &str) -> BlockSurface {
    BlockSurface::new(BlockId::next(), text)
}

#[test]
fn new_surface_puts_cursor_at_end() {
    let s = surface("hello");
    assert_eq!(s.cursor(), 5);
    assert!(!s.is_content_selected());
}

#[test]
fn backspace_removes_whole_grapheme() {
    let mut s = surface("ae\u{301}");
    assert!(s.delete_backward());
    assert_eq!(s.text(), "a");
    assert!(s.delete_backward());
    assert!(s.is_empty());
    assert!(!s.delete_backward());
}

#[test]
fn typing_over_selected_content_replaces_it() {
    let mut s = surface("old text");
    s.set_content_selected(true);
    assert!(s.insert_char('n'));
    assert_eq!(s.text(), "n");
    assert_eq!(s.cursor(), 1);
    assert!(!s.is_content_selected());
}

#[test]
fn backspace_clears_selected_content() {
    let mut s = surface("old text");
    s.set_content_selected(true);
    assert!(s.delete_backward());
    assert!(s.is_empty());
    assert!(!s.is_content_selected());
}

#[test]
fn line_start_and_end() {
    let mut s = surface("one\ntwo");
    assert!(s.move_line_start());
    assert_eq!(s.cursor(), 4);
    assert!(!s.move_line_start());
    assert!(s.move_line_end());
    assert_eq!(s.cursor(), 7);

    s.place_cursor(FocusPosition::Start);
    assert!(s.move_line_end());
    assert_eq!(s.cursor(), 3);
}

#[test]
fn left_right_stop_at_edges() {
    let mut s = surface("ab");
    assert!(!s.move_right());
    assert!(s.move_left());
    assert!(s.move_left());
    assert!(!s.move_left());
    assert_eq!(s.cursor(), 0);
}

#[test]
fn cursor_line_col_uses_display_width() {
    let mut s = surface("x\n中文");
    assert_eq!(s.cursor_line_col(), (1, 4));
    s.place_cursor(FocusPosition::Start);
    assert_eq!(s.cursor_line_col(), (0, 0));
}

#[test]
fn arena_mount_takes_focus() {
    let mut arena = SurfaceArena::new();
    let a = BlockId::next();
    let b = BlockId::next();

    arena.mount(a, "");
    let kb = arena.mount(b, "b");
    assert_eq!(arena.focused(), Some(kb));
    assert_eq!(arena.focused_block(), Some(b));

    arena.unmount(kb);
    assert_eq!(arena.focused(), None);
    assert_eq!(arena.len(), 1);
}

#[test]
fn arena_focus_places_cursor() {
    let mut arena = SurfaceArena::new();
    let ka = arena.mount(BlockId::next(), "abc");
    let kb = arena.mount(BlockId::next(), "");

    arena.focus(ka, FocusPosition::Start);
    assert_eq!(arena.focused(), Some(ka));
    assert_eq!(arena.get(ka).map(BlockSurface::cursor), Some(0));

    arena.select_all_content(kb);
    assert!(arena.get(kb).is_some_and(BlockSurface::is_content_selected));
    arena.clear_content_selection(kb);
    assert!(!arena.get(kb).is_some_and(BlockSurface::is_content_selected));
}

#[test]
fn stale_key_is_ignored() {
    let mut arena = SurfaceArena::new();
    let key = arena.mount(BlockId::next(), "x");
    arena.unmount(key);

    arena.focus(key, FocusPosition::End);
    arena.select_all_content(key);
    assert_eq!(arena.focused(), None);
    assert!(arena.get(key).is_none());
}
