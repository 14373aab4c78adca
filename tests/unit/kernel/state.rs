use super::*;

fn state_with(n: usize) -> (ThreadState, Vec<BlockId>) {
    let author = AuthorTemplate::default();
    let blocks: Vec<Block> = (0..n).map(|_| Block::new(&author)).collect();
    let state = ThreadState::from_blocks(blocks, &author);
    let ids = state.ids();
    (state, ids)
}

#[test]
fn new_state_has_one_block() {
    let state = ThreadState::new(&AuthorTemplate::default());
    assert_eq!(state.len(), 1);
    assert!(state.selection().is_empty());
}

#[test]
fn from_empty_blocks_falls_back_to_fresh_block() {
    let (state, ids) = state_with(0);
    assert_eq!(state.len(), 1);
    assert!(state.blocks()[0].is_empty());
    assert_eq!(ids.len(), 1);
}

#[test]
fn from_blocks_drops_duplicate_ids() {
    let author = AuthorTemplate::default();
    let block = Block::new(&author);
    let state = ThreadState::from_blocks(vec![block.clone(), block], &author);
    assert_eq!(state.len(), 1);
}

#[test]
fn remove_refuses_last_block() {
    let (mut state, ids) = state_with(1);
    assert_eq!(state.remove(ids[0]), None);
    assert_eq!(state.ids(), ids);
}

#[test]
fn remove_returns_previous_and_prunes_selection() {
    let (mut state, ids) = state_with(3);
    state.select_only(ids[1]);

    assert_eq!(state.remove(ids[1]), Some(Some(ids[0])));
    assert_eq!(state.ids(), vec![ids[0], ids[2]]);
    assert!(state.selection().is_empty());
}

#[test]
fn remove_first_has_no_previous() {
    let (mut state, ids) = state_with(2);
    assert_eq!(state.remove(ids[0]), Some(None));
    assert_eq!(state.ids(), vec![ids[1]]);
}

#[test]
fn remove_unknown_is_noop() {
    let (mut state, ids) = state_with(2);
    assert_eq!(state.remove(BlockId::next()), None);
    assert_eq!(state.ids(), ids);
}

#[test]
fn insert_after_places_block_next() {
    let (mut state, ids) = state_with(2);
    let block = Block::new(&AuthorTemplate::default());
    let new_id = block.id();

    assert_eq!(state.insert_after(ids[0], block), Ok(new_id));
    assert_eq!(state.ids(), vec![ids[0], new_id, ids[1]]);
}

#[test]
fn insert_after_unknown_hands_block_back() {
    let (mut state, ids) = state_with(1);
    let block = Block::new(&AuthorTemplate::default());
    let new_id = block.id();

    let rejected = state.insert_after(BlockId::next(), block).unwrap_err();
    assert_eq!(rejected.id(), new_id);
    assert_eq!(state.ids(), ids);
}

#[test]
fn selection_anchor_is_block_before_first_selected() {
    let (mut state, ids) = state_with(4);
    state.select_only(ids[2]);
    state.selection.insert(ids[3]);

    assert_eq!(state.selection_anchor(), Some(ids[1]));
}

#[test]
fn selection_anchor_falls_back_to_first_unselected() {
    let (mut state, ids) = state_with(4);
    state.select_only(ids[0]);
    state.selection.insert(ids[1]);
    state.selection.insert(ids[3]);

    assert_eq!(state.selection_anchor(), Some(ids[2]));
}

#[test]
fn remove_selected_keeps_unselected_in_order() {
    let (mut state, ids) = state_with(4);
    state.select_only(ids[1]);
    state.selection.insert(ids[3]);

    assert_eq!(state.remove_selected(), 2);
    assert_eq!(state.ids(), vec![ids[0], ids[2]]);
    assert!(state.selection().is_empty());
}

#[test]
fn remove_selected_refuses_full_selection() {
    let (mut state, ids) = state_with(2);
    state.select_all();

    assert!(state.covers_all());
    assert_eq!(state.remove_selected(), 0);
    assert_eq!(state.ids(), ids);
}

#[test]
fn select_only_ignores_unknown_ids() {
    let (mut state, ids) = state_with(2);
    assert!(!state.select_only(BlockId::next()));
    assert!(state.select_only(ids[1]));
    assert!(!state.select_only(ids[1]));
    assert_eq!(state.selected_ids(), vec![ids[1]]);
}

#[test]
fn select_all_is_idempotent() {
    let (mut state, ids) = state_with(3);
    assert!(state.select_all());
    assert!(!state.select_all());
    assert_eq!(state.selected_ids(), ids);
    assert!(state.covers_all());
}

#[test]
fn reset_to_replaces_everything() {
    let (mut state, _) = state_with(3);
    state.select_all();
    let block = Block::new(&AuthorTemplate::default());
    let id = state.reset_to(block);

    assert_eq!(state.ids(), vec![id]);
    assert!(state.selection().is_empty());
}

#[test]
fn set_content_on_missing_block_is_noop() {
    let (mut state, ids) = state_with(1);
    assert!(!state.set_content(BlockId::next(), "x".to_string()));
    assert!(state.set_content(ids[0], "x".to_string()));
    assert_eq!(state.block(ids[0]).map(Block::content), Some("x"));
}
