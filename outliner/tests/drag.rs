use std::cell::RefCell;
use std::rc::Rc;

use outliner::tree::flags;
use outliner::{
    DropArea, ItemId, Modifiers, Parent, Placement, Rect, ReparentEntry, Tree, TreeConfig,
    TreeEvent, TreeEventKind, TreeItem,
};

fn add(tree: &mut Tree, parent: impl Into<Parent>, text: &str) -> ItemId {
    tree.add_item(parent.into(), TreeItem::new(text)).unwrap()
}

fn add_open(tree: &mut Tree, parent: impl Into<Parent>, text: &str) -> ItemId {
    tree.add_item(parent.into(), TreeItem::new(text).open(true))
        .unwrap()
}

/// Record every reparent report published by the tree.
fn capture_reparents(tree: &mut Tree) -> Rc<RefCell<Vec<Vec<ReparentEntry>>>> {
    let reports = Rc::new(RefCell::new(Vec::new()));
    let sink = reports.clone();
    tree.on(TreeEventKind::Reparent, move |event| {
        if let TreeEvent::Reparent(entries) = event {
            sink.borrow_mut().push(entries.clone());
        }
    });
    reports
}

fn capture_kinds(tree: &mut Tree) -> Rc<RefCell<Vec<TreeEventKind>>> {
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = kinds.clone();
    tree.on_any(move |event| {
        use scenedom::Event;
        sink.borrow_mut().push(event.kind());
    });
    kinds
}

fn select(tree: &mut Tree, items: &[ItemId]) {
    for &item in items {
        tree.click_item(item, Modifiers::ctrl());
    }
}

/// Scene: [Folder1: [ItemA, ItemB], Folder2]
struct Folders {
    tree: Tree,
    folder1: ItemId,
    folder2: ItemId,
    item_a: ItemId,
    item_b: ItemId,
}

fn folders() -> Folders {
    let mut tree = Tree::new();
    let folder1 = add(&mut tree, Parent::Root, "Folder1");
    let folder2 = add(&mut tree, Parent::Root, "Folder2");
    let item_a = add(&mut tree, folder1, "ItemA");
    let item_b = add(&mut tree, folder1, "ItemB");
    Folders {
        tree,
        folder1,
        folder2,
        item_a,
        item_b,
    }
}

/// Scene (open): [P (open): [A, B, T], Q (open): [U, V]]
struct Siblings {
    tree: Tree,
    scene: ItemId,
    p: ItemId,
    q: ItemId,
    a: ItemId,
    b: ItemId,
    t: ItemId,
    u: ItemId,
    v: ItemId,
}

fn siblings() -> Siblings {
    let mut tree = Tree::new();
    let scene = add_open(&mut tree, Parent::Root, "Scene");
    let p = add_open(&mut tree, scene, "P");
    let q = add_open(&mut tree, scene, "Q");
    let a = add(&mut tree, p, "A");
    let b = add(&mut tree, p, "B");
    let t = add(&mut tree, p, "T");
    let u = add(&mut tree, q, "U");
    let v = add(&mut tree, q, "V");
    Siblings {
        tree,
        scene,
        p,
        q,
        a,
        b,
        t,
        u,
        v,
    }
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn test_drag_item_into_other_folder() {
    let Folders {
        mut tree,
        folder1,
        folder2,
        item_a,
        item_b,
    } = folders();
    let reports = capture_reparents(&mut tree);

    assert!(tree.drag_start(item_a));
    assert_eq!(tree.drag_hover(folder2, 0.5), Some(DropArea::Inside));
    let entries = tree.drag_end();

    assert_eq!(tree.children(folder1.into()), &[item_b]);
    assert_eq!(tree.children(folder2.into()), &[item_a]);
    assert_eq!(
        entries,
        vec![ReparentEntry {
            item: item_a,
            old_parent: Parent::Element(folder1),
            new_parent: Parent::Element(folder2),
            placement: Placement::Inside(folder2),
        }]
    );
    assert_eq!(reports.borrow().as_slice(), &[entries]);
    assert!(tree.is_open(folder2));
    assert!(!tree.is_dragging());
}

#[test]
fn test_event_order_of_a_drag() {
    let Folders {
        mut tree,
        folder2,
        item_a,
        ..
    } = folders();
    let kinds = capture_kinds(&mut tree);

    tree.drag_start(item_a);
    tree.drag_hover(folder2, 0.5);
    tree.drag_end();

    assert_eq!(
        kinds.borrow().as_slice(),
        &[
            TreeEventKind::DragStart,
            TreeEventKind::DragOver,
            TreeEventKind::DragMove,
            TreeEventKind::Open,
            TreeEventKind::Reparent,
            TreeEventKind::DragEnd,
        ]
    );
}

#[test]
fn test_drag_end_resets_session() {
    let Folders {
        mut tree,
        folder2,
        item_a,
        ..
    } = folders();
    tree.drag_start(item_a);
    tree.drag_hover(folder2, 0.5);
    tree.drag_end();

    assert!(!tree.is_dragging());
    assert!(tree.drag_items().is_empty());
    assert_eq!(tree.drag_over(), None);
    assert_eq!(tree.drop_indicator(), None);
    assert!(!tree.has_state(item_a, flags::DRAGGED));
    assert!(!tree.has_state(folder2, flags::DRAG_OVER));
    assert!(!tree.has_state(folder2, flags::DROP_INSIDE));

    // A new drag starts clean.
    assert!(tree.drag_start(item_a));
    assert_eq!(tree.drag_over(), None);
}

#[test]
fn test_drag_end_without_drag_is_noop() {
    let Folders { mut tree, .. } = folders();
    let kinds = capture_kinds(&mut tree);
    assert!(tree.drag_end().is_empty());
    assert!(kinds.borrow().is_empty());
}

#[test]
fn test_drop_without_target_changes_nothing() {
    let Folders {
        mut tree,
        folder1,
        item_a,
        item_b,
        ..
    } = folders();
    let reports = capture_reparents(&mut tree);

    tree.drag_start(item_a);
    assert!(tree.drag_end().is_empty());
    assert_eq!(tree.children(folder1.into()), &[item_a, item_b]);
    assert_eq!(reports.borrow().as_slice(), &[Vec::new()]);
}

// =============================================================================
// Drag start
// =============================================================================

#[test]
fn test_drag_start_marks_items() {
    let Folders { mut tree, item_a, .. } = folders();
    assert!(tree.drag_start(item_a));
    assert_eq!(tree.drag_items(), &[item_a]);
    assert!(tree.has_state(item_a, flags::DRAGGED));
}

#[test]
fn test_drag_start_refused_when_not_draggable() {
    let Folders { mut tree, item_a, .. } = folders();
    tree.set_draggable(false);
    assert!(!tree.drag_start(item_a));
    assert!(!tree.is_dragging());
}

#[test]
fn test_drag_start_refused_while_dragging() {
    let Folders {
        mut tree,
        item_a,
        item_b,
        ..
    } = folders();
    assert!(tree.drag_start(item_a));
    assert!(!tree.drag_start(item_b));
    assert_eq!(tree.drag_items(), &[item_a]);
}

#[test]
fn test_unselected_item_drags_alone() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.a, s.b]);
    assert!(tree.drag_start(s.t));
    assert_eq!(tree.drag_items(), &[s.t]);
}

#[test]
fn test_group_drag_sorted_by_document_order() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.u, s.t, s.a]);
    assert!(tree.drag_start(s.t));
    assert_eq!(tree.drag_items(), &[s.a, s.t, s.u]);
}

#[test]
fn test_group_drag_across_depths_rejected() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.p, s.u]);
    assert!(!tree.drag_start(s.u));
    assert!(!tree.is_dragging());
    assert!(tree.drag_items().is_empty());
    assert!(!tree.has_state(s.u, flags::DRAGGED));
}

#[test]
fn test_group_drag_with_top_level_item_rejected() {
    let mut tree = Tree::new();
    let x = add(&mut tree, Parent::Root, "X");
    let y = add(&mut tree, Parent::Root, "Y");
    select(&mut tree, &[x, y]);
    assert!(!tree.drag_start(x));
    assert!(!tree.is_dragging());
}

#[test]
fn test_covered_descendant_excluded() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.a, s.p]);
    assert!(tree.drag_start(s.a));
    assert_eq!(tree.drag_items(), &[s.p]);
    assert!(!tree.has_state(s.a, flags::DRAGGED));
}

#[test]
fn test_covered_descendant_does_not_count_for_depth() {
    let s = siblings();
    let mut tree = s.tree;
    // U is covered by Q, so P and Q share one level.
    select(&mut tree, &[s.p, s.q, s.u]);
    assert!(tree.drag_start(s.q));
    assert_eq!(tree.drag_items(), &[s.p, s.q]);
}

// =============================================================================
// Hover validation
// =============================================================================

#[test]
fn test_hover_descendant_of_dragged_item_rejected() {
    let s = siblings();
    let mut tree = s.tree;
    let kinds = capture_kinds(&mut tree);

    tree.drag_start(s.p);
    assert_eq!(tree.drag_hover(s.a, 0.5), None);
    assert_eq!(tree.drag_over(), None);
    assert_eq!(tree.drop_indicator(), None);
    assert!(!kinds.borrow().contains(&TreeEventKind::DragOver));

    assert!(tree.drag_end().is_empty());
    assert_eq!(tree.parent(s.p), Some(Parent::Element(s.scene)));
    assert_eq!(tree.children(s.p.into()), &[s.a, s.b, s.t]);
}

#[test]
fn test_hover_dragged_item_rejected() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.a, 0.5), None);
    assert_eq!(tree.drag_over(), None);
}

#[test]
fn test_invalid_target_clears_previous_target() {
    let s = siblings();
    let mut tree = s.tree;
    let kinds = capture_kinds(&mut tree);
    tree.drag_start(s.p);
    tree.drag_hover(s.u, 0.5);
    assert_eq!(tree.drag_over(), Some(s.u));

    tree.drag_hover(s.b, 0.5);
    assert_eq!(tree.drag_over(), None);
    assert!(!tree.has_state(s.u, flags::DRAG_OVER));
    assert_eq!(kinds.borrow().last(), Some(&TreeEventKind::DragOut));
}

#[test]
fn test_disallowed_target_rejected() {
    let s = siblings();
    let mut tree = s.tree;
    tree.set_allow_drop(s.u, false).unwrap();
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.u, 0.5), None);
}

#[test]
fn test_disallowed_target_accepted_when_it_holds_dragged_item() {
    let s = siblings();
    let mut tree = s.tree;
    tree.set_allow_drop(s.p, false).unwrap();
    tree.drag_start(s.a);
    assert!(tree.drag_hover(s.p, 0.5).is_some());
}

#[test]
fn test_drag_enter_same_target_is_noop() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.u, 0.0), Some(DropArea::Before));

    let kinds = capture_kinds(&mut tree);
    assert!(tree.drag_enter(s.u));
    assert_eq!(tree.drag_area(), Some(DropArea::Before));
    assert!(kinds.borrow().is_empty());
}

#[test]
fn test_drag_out_keeps_session() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    tree.drag_hover(s.u, 0.5);

    let kinds = capture_kinds(&mut tree);
    tree.drag_out();
    assert!(tree.is_dragging());
    assert_eq!(tree.drag_over(), None);
    assert_eq!(tree.drag_area(), None);
    assert_eq!(kinds.borrow().as_slice(), &[TreeEventKind::DragOut]);

    // Re-entering picks the target up again.
    assert!(tree.drag_enter(s.u));
    assert_eq!(tree.drag_over(), Some(s.u));
}

// =============================================================================
// Drop zones
// =============================================================================

#[test]
fn test_zone_bands() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.v, 0.1), Some(DropArea::Before));
    assert_eq!(tree.drag_move(0.3), Some(DropArea::Before));
    assert_eq!(tree.drag_move(0.5), Some(DropArea::Inside));
    assert_eq!(tree.drag_move(0.7), Some(DropArea::Inside));
    assert_eq!(tree.drag_move(0.9), Some(DropArea::After));
    assert!(tree.has_state(s.v, flags::DROP_AFTER));
    assert!(!tree.has_state(s.v, flags::DROP_BEFORE));
}

#[test]
fn test_zone_change_reemits_dragmove() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    tree.drag_hover(s.v, 0.1);

    let kinds = capture_kinds(&mut tree);
    tree.drag_move(0.2);
    assert!(kinds.borrow().is_empty());
    tree.drag_move(0.9);
    assert_eq!(kinds.borrow().as_slice(), &[TreeEventKind::DragMove]);
}

#[test]
fn test_top_level_target_always_inside() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.scene, 0.0), Some(DropArea::Inside));
    assert_eq!(tree.drag_move(1.0), Some(DropArea::Inside));
}

#[test]
fn test_reordering_off_only_inside() {
    let s = siblings();
    let mut tree = s.tree;
    tree.set_reordering(false);
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.v, 0.0), Some(DropArea::Inside));
    assert_eq!(tree.drag_move(1.0), Some(DropArea::Inside));
}

#[test]
fn test_before_skipped_when_previous_sibling_dragged() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.b, 0.0), Some(DropArea::Inside));
}

#[test]
fn test_after_skipped_when_next_sibling_dragged() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.b);
    assert_eq!(tree.drag_hover(s.a, 1.0), Some(DropArea::Inside));
}

#[test]
fn test_after_skipped_for_open_parent() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.q, 1.0), Some(DropArea::Inside));

    tree.set_open(s.q, false).unwrap();
    assert_eq!(tree.drag_move(1.0), Some(DropArea::After));
}

#[test]
fn test_open_parent_of_dragged_item_targets_first_child() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.t);
    assert_eq!(tree.drag_hover(s.p, 0.5), Some(DropArea::Before));
    assert_eq!(tree.drag_over(), Some(s.a));

    tree.drag_end();
    assert_eq!(tree.children(s.p.into()), &[s.t, s.a, s.b]);
}

// =============================================================================
// Commit
// =============================================================================

#[test]
fn test_after_keeps_batch_order() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.b, s.a]);
    assert!(tree.drag_start(s.a));
    assert_eq!(tree.drag_hover(s.t, 0.9), Some(DropArea::After));
    let entries = tree.drag_end();

    assert_eq!(tree.children(s.p.into()), &[s.t, s.a, s.b]);
    assert_eq!(entries[0].placement, Placement::After(s.t));
    assert_eq!(entries[1].placement, Placement::After(s.a));
}

#[test]
fn test_after_into_other_parent_keeps_batch_order() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.a, s.b]);
    tree.drag_start(s.b);
    tree.drag_hover(s.u, 1.0);
    tree.drag_end();

    assert_eq!(tree.children(s.q.into()), &[s.u, s.a, s.b, s.v]);
    assert_eq!(tree.children(s.p.into()), &[s.t]);
}

#[test]
fn test_before_keeps_batch_order() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.a, s.b]);
    tree.drag_start(s.a);
    assert_eq!(tree.drag_hover(s.v, 0.0), Some(DropArea::Before));
    let entries = tree.drag_end();

    assert_eq!(tree.children(s.q.into()), &[s.u, s.a, s.b, s.v]);
    assert!(entries.iter().all(|e| e.new_parent == Parent::Element(s.q)));
}

#[test]
fn test_drop_inside_current_parent_is_reported_noop() {
    let Folders {
        mut tree,
        folder1,
        item_a,
        item_b,
        ..
    } = folders();
    tree.drag_start(item_b);
    assert_eq!(tree.drag_hover(folder1, 0.5), Some(DropArea::Inside));
    let entries = tree.drag_end();

    assert_eq!(tree.children(folder1.into()), &[item_a, item_b]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].old_parent, entries[0].new_parent);
    assert_eq!(entries[0].new_parent, Parent::Element(folder1));
    assert!(entries[0].is_noop());
}

#[test]
fn test_group_drop_mixes_noop_and_move() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.t, s.u]);
    tree.drag_start(s.t);
    tree.set_open(s.q, false).unwrap();
    assert_eq!(tree.drag_hover(s.q, 0.5), Some(DropArea::Inside));
    let entries = tree.drag_end();

    assert_eq!(tree.children(s.q.into()), &[s.u, s.v, s.t]);
    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_noop() != entries[1].is_noop());
}

#[test]
fn test_drag_instant_off_only_reports() {
    let Folders {
        mut tree,
        folder1,
        folder2,
        item_a,
        item_b,
    } = folders();
    tree.set_drag_instant(false);
    let reports = capture_reparents(&mut tree);

    tree.drag_start(item_a);
    tree.drag_hover(folder2, 0.5);
    let entries = tree.drag_end();

    assert_eq!(tree.children(folder1.into()), &[item_a, item_b]);
    assert!(tree.children(folder2.into()).is_empty());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item, item_a);
    assert_eq!(entries[0].old_parent, Parent::Element(folder1));
    assert_eq!(entries[0].new_parent, Parent::Element(folder2));
    assert_eq!(reports.borrow().as_slice(), &[entries]);
}

#[test]
fn test_apply_reparents_matches_instant_mode() {
    let build = |instant: bool| {
        let s = siblings();
        let mut tree = s.tree;
        tree.set_drag_instant(instant);
        select(&mut tree, &[s.a, s.b]);
        tree.drag_start(s.a);
        tree.drag_hover(s.u, 0.9);
        let entries = tree.drag_end();
        (tree, entries, s.p, s.q)
    };

    let (instant, _, p, q) = build(true);
    let (mut deferred, entries, _, _) = build(false);
    deferred.apply_reparents(&entries).unwrap();

    let texts = |tree: &Tree, parent: ItemId| -> Vec<String> {
        tree.children(parent.into())
            .iter()
            .map(|&id| tree.text(id).unwrap().to_string())
            .collect()
    };
    assert_eq!(texts(&instant, p), texts(&deferred, p));
    assert_eq!(texts(&instant, q), texts(&deferred, q));
    assert_eq!(texts(&deferred, q), ["U", "A", "B", "V"]);
}

#[test]
fn test_destroying_target_during_drag() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    tree.drag_hover(s.u, 0.5);
    tree.destroy_item(s.u).unwrap();

    assert!(tree.is_dragging());
    assert_eq!(tree.drag_over(), None);
    assert!(tree.drag_end().is_empty());
    assert_eq!(tree.children(s.p.into()), &[s.a, s.b, s.t]);
}

#[test]
fn test_destroying_dragged_item_during_drag() {
    let s = siblings();
    let mut tree = s.tree;
    select(&mut tree, &[s.a, s.b]);
    tree.drag_start(s.a);
    tree.destroy_item(s.a).unwrap();
    assert_eq!(tree.drag_items(), &[s.b]);

    tree.drag_hover(s.v, 0.5);
    let entries = tree.drag_end();
    assert_eq!(entries.len(), 1);
    assert_eq!(tree.children(s.v.into()), &[s.b]);
}

#[test]
fn test_destroying_unrelated_item_keeps_session() {
    let s = siblings();
    let mut tree = s.tree;
    tree.drag_start(s.a);
    tree.drag_hover(s.v, 0.5);
    tree.destroy_item(s.t).unwrap();

    assert_eq!(tree.drag_items(), &[s.a]);
    assert_eq!(tree.drag_over(), Some(s.v));
    assert_eq!(tree.drag_area(), Some(DropArea::Inside));
}

// =============================================================================
// Drop indicator
// =============================================================================

fn with_viewport(mut tree: Tree) -> Tree {
    tree.set_config(TreeConfig::default().with_row_height(20).with_indent(16));
    tree.set_viewport(Rect::new(0, 0, 100, 200));
    tree
}

#[test]
fn test_indicator_follows_zone() {
    let s = siblings();
    let mut tree = with_viewport(s.tree);
    tree.drag_start(s.a);

    // Rows: Scene, P, A, B, T, Q, U, V. T is row 4 at depth 2.
    tree.drag_hover(s.t, 0.0);
    let indicator = tree.drop_indicator().unwrap();
    assert_eq!(indicator.target, s.t);
    assert_eq!(indicator.area, DropArea::Before);
    assert_eq!(indicator.rect, Rect::new(32, 80, 68, 0));

    tree.drag_move(0.5);
    assert_eq!(tree.drop_indicator().unwrap().rect, Rect::new(32, 80, 68, 20));

    tree.drag_move(1.0);
    assert_eq!(tree.drop_indicator().unwrap().rect, Rect::new(32, 100, 68, 0));

    tree.drag_out();
    assert_eq!(tree.drop_indicator(), None);
}

#[test]
fn test_drag_pointer_hit_tests_rows() {
    let s = siblings();
    let mut tree = with_viewport(s.tree);
    tree.drag_start(s.a);

    // Row 6 (U), 2 units below its top: band 0.
    let event = outliner::PointerEvent::new(50, 122);
    assert_eq!(tree.drag_pointer(event), Some(DropArea::Before));
    assert_eq!(tree.drag_over(), Some(s.u));

    // Below the last row.
    assert_eq!(tree.drag_pointer(outliner::PointerEvent::new(50, 190)), None);
    assert_eq!(tree.drag_over(), None);

    // Outside the viewport.
    tree.drag_pointer(outliner::PointerEvent::new(50, 122));
    assert_eq!(tree.drag_pointer(outliner::PointerEvent::new(150, 122)), None);
    assert_eq!(tree.drag_over(), None);
}

#[test]
fn test_short_rows_sample_cell_centers() {
    let s = siblings();
    let mut tree = s.tree;
    tree.set_config(TreeConfig::default().with_row_height(3).with_indent(1));
    tree.set_viewport(Rect::new(0, 0, 40, 30));
    tree.drag_start(s.a);

    // U is row 6, covering units 18..21.
    let at = |y| outliner::PointerEvent::new(5, y);
    assert_eq!(tree.drag_pointer(at(18)), Some(DropArea::Before));
    assert_eq!(tree.drag_pointer(at(19)), Some(DropArea::Inside));
    assert_eq!(tree.drag_pointer(at(20)), Some(DropArea::After));
    assert_eq!(tree.drag_over(), Some(s.u));
}

#[test]
fn test_one_unit_rows_drop_inside() {
    let s = siblings();
    let mut tree = s.tree;
    tree.set_config(TreeConfig::default().with_row_height(1).with_indent(1));
    tree.set_viewport(Rect::new(0, 0, 40, 10));
    tree.drag_start(s.a);

    assert_eq!(
        tree.drag_pointer(outliner::PointerEvent::new(5, 6)),
        Some(DropArea::Inside)
    );
    assert_eq!(tree.drag_over(), Some(s.u));
    tree.drag_end();
    assert_eq!(tree.children(s.u.into()), &[s.a]);
}

#[test]
fn test_dragmove_carries_pointer() {
    let s = siblings();
    let mut tree = with_viewport(s.tree);
    let moves = Rc::new(RefCell::new(Vec::new()));
    let sink = moves.clone();
    tree.on(TreeEventKind::DragMove, move |event| {
        if let TreeEvent::DragMove { pointer, .. } = event {
            sink.borrow_mut().push(*pointer);
        }
    });

    tree.drag_start(s.a);
    let event = outliner::PointerEvent::new(50, 130);
    tree.drag_pointer(event);
    tree.drag_hover(s.v, 0.5);
    assert_eq!(moves.borrow().as_slice(), &[Some(event), None]);
}
