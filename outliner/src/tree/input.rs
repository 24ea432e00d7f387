//! Selection rules, keyboard navigation and pointer routing.

use scenedom::{Key, Modifiers, MouseButton, PointerEvent};

use crate::widget::{EventResult, WidgetEvents};

use super::item::ItemId;
use super::state::{Press, Tree};

impl Tree {
    /// Apply a click on `item` with the modifiers held at that moment.
    ///
    /// - no modifier: select only `item` (a sole selected item toggles off),
    /// - ctrl: toggle `item`, leave the rest,
    /// - shift: select every row from the last selected item to `item`.
    pub fn click_item(&mut self, item: ItemId, modifiers: Modifiers) {
        if !self.contains(item) {
            return;
        }
        self.focus = Some(item);
        if !self.is_selectable(item) {
            return;
        }

        if modifiers.ctrl {
            let selected = self.is_selected(item);
            self.select_known(item, !selected);
        } else if modifiers.shift
            && let Some(last) = self.selection.last()
        {
            for id in self.visual_path(last, item) {
                if self.is_selectable(id) {
                    self.select_known(id, true);
                }
            }
        } else if self.selection.iter().any(|id| id != item) {
            self.select_only(item);
        } else {
            let selected = self.is_selected(item);
            self.select_known(item, !selected);
        }
    }

    /// Deselect everything else and select `item`.
    pub fn select_only(&mut self, item: ItemId) {
        let others: Vec<ItemId> = self.selection.iter().filter(|&id| id != item).collect();
        for id in others {
            self.select_known(id, false);
        }
        if self.is_selectable(item) {
            self.select_known(item, true);
        }
    }

    /// Rows between `from` (excluded) and `to` (included).
    ///
    /// Scans up and down from `from` at the same time and stops at the
    /// first direction that reaches `to`. Empty if `to` is not visible.
    /// A hidden `from` is replaced by the collapsed row hiding it, and that
    /// row is part of the path.
    pub fn visual_path(&self, from: ItemId, to: ItemId) -> Vec<ItemId> {
        let Some(start) = self.visible_row(from) else {
            return Vec::new();
        };
        let lead: Vec<ItemId> = if start == from { Vec::new() } else { vec![start] };
        if start == to {
            return lead;
        }
        let (mut up, mut down) = (Some(start), Some(start));
        let (mut up_path, mut down_path) = (lead.clone(), lead);
        while up.is_some() || down.is_some() {
            down = down.and_then(|id| self.next_visible(id));
            if let Some(id) = down {
                down_path.push(id);
                if id == to {
                    return down_path;
                }
            }
            up = up.and_then(|id| self.prev_visible(id));
            if let Some(id) = up {
                up_path.push(id);
                if id == to {
                    return up_path;
                }
            }
        }
        Vec::new()
    }

    /// Handle a key press. Returns true if the key did something.
    pub fn key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let focus = self
            .focus
            .or_else(|| self.selection.last())
            .and_then(|id| self.visible_row(id));
        match key {
            Key::Up => {
                let target = match focus {
                    Some(id) => self.prev_visible(id),
                    None => self.last_visible(),
                };
                self.move_focus(target, modifiers)
            }
            Key::Down => {
                let target = match focus {
                    Some(id) => self.next_visible(id),
                    None => self.first_visible(),
                };
                self.move_focus(target, modifiers)
            }
            Key::Home => self.move_focus(self.first_visible(), modifiers),
            Key::End => self.move_focus(self.last_visible(), modifiers),
            Key::Left => {
                let Some(id) = focus else {
                    return false;
                };
                if self.is_expanded(id) {
                    self.set_open(id, false).unwrap_or(false)
                } else {
                    let parent = self.parent(id).and_then(|p| p.element());
                    self.move_focus(parent, modifiers)
                }
            }
            Key::Right => {
                let Some(id) = focus else {
                    return false;
                };
                let first_child = self.children(id.into()).first().copied();
                if first_child.is_some() && !self.is_open(id) {
                    self.set_open(id, true).unwrap_or(false)
                } else {
                    self.move_focus(first_child, modifiers)
                }
            }
            Key::Enter => focus.is_some_and(|id| self.toggle_open(id).unwrap_or(false)),
            Key::Escape => !self.clear_selection().is_empty(),
            Key::Char('a') if modifiers.ctrl => self.select_all_visible(),
            _ => false,
        }
    }

    /// Move keyboard focus. Without ctrl or shift the selection follows.
    fn move_focus(&mut self, target: Option<ItemId>, modifiers: Modifiers) -> bool {
        let Some(target) = target else {
            return false;
        };
        self.focus = Some(target);
        if !modifiers.ctrl && !modifiers.shift {
            self.select_only(target);
        }
        true
    }

    fn select_all_visible(&mut self) -> bool {
        let rows = self.flatten();
        let mut changed = false;
        for row in rows {
            if self.is_selectable(row.item) {
                changed |= self.set_selected(row.item, true).unwrap_or(false);
            }
        }
        changed
    }
}

impl WidgetEvents for Tree {
    fn on_click(&mut self, event: PointerEvent) -> EventResult {
        if event.button != MouseButton::Left || !self.viewport.contains(event.x, event.y) {
            return EventResult::Ignored;
        }
        let Some((item, _)) = self.row_at(event.y) else {
            return EventResult::Ignored;
        };

        let modifiers = event.modifiers;
        let deferred = self.config.draggable && modifiers.none() && self.is_selected(item);
        if !deferred {
            self.click_item(item, modifiers);
        }
        self.press = Some(Press {
            item,
            modifiers,
            deferred,
            moved: false,
        });

        if self.config.draggable {
            EventResult::StartDrag
        } else {
            EventResult::Consumed
        }
    }

    fn on_drag(&mut self, event: PointerEvent) -> EventResult {
        let Some(press) = self.press.as_mut() else {
            return EventResult::Ignored;
        };
        if !press.moved {
            press.moved = true;
            let item = press.item;
            self.drag_start(item);
        }
        if self.is_dragging() {
            self.drag_pointer(event);
        }
        EventResult::Consumed
    }

    fn on_release(&mut self, _event: PointerEvent) -> EventResult {
        let press = self.press.take();
        if self.is_dragging() {
            self.drag_end();
            return EventResult::Consumed;
        }
        match press {
            Some(press) => {
                // A drag that was rejected leaves the selection as it was.
                if press.deferred && !press.moved {
                    self.click_item(press.item, press.modifiers);
                }
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.key(key, modifiers) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}
