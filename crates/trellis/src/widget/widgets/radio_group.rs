//! Mutually exclusive selection groups.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trellis_core::Signal;

use crate::widget::arena::WidgetId;

struct RadioGroupInner {
    members: RefCell<Vec<WidgetId>>,
    selected: Cell<Option<WidgetId>>,
    selection_changed: Signal<Option<WidgetId>>,
}

/// Shared selection state for a set of radio buttons.
///
/// A `RadioGroup` is a cheap clonable handle; every clone refers to the same
/// group. Exclusivity holds by construction because the group stores a
/// single selected id rather than per-button flags. Buttons register
/// themselves when inserted into the arena, so a group can be handed to
/// several [`RadioButton`](super::RadioButton)s before any of them is
/// stored.
#[derive(Clone)]
pub struct RadioGroup {
    inner: Rc<RadioGroupInner>,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RadioGroupInner {
                members: RefCell::new(Vec::new()),
                selected: Cell::new(None),
                selection_changed: Signal::new(),
            }),
        }
    }

    /// Register a member. Called by radio buttons on arena insertion.
    pub fn register(&self, id: WidgetId) {
        let mut members = self.inner.members.borrow_mut();
        if !members.contains(&id) {
            members.push(id);
        }
    }

    /// Ids of all registered members, in registration order.
    pub fn members(&self) -> Vec<WidgetId> {
        self.inner.members.borrow().clone()
    }

    /// The currently selected member, if any.
    pub fn selected(&self) -> Option<WidgetId> {
        self.inner.selected.get()
    }

    /// Select `id`, deselecting any other member.
    ///
    /// A no-op when `id` is already selected; the change notification fires
    /// only on an actual transition.
    pub fn select(&self, id: WidgetId) {
        if self.inner.selected.get() == Some(id) {
            return;
        }
        self.inner.selected.set(Some(id));
        tracing::trace!(target: "trellis::widgets", ?id, "radio selection changed");
        self.inner.selection_changed.emit(Some(id));
    }

    /// Clear the selection.
    pub fn clear_selection(&self) {
        if self.inner.selected.get().is_none() {
            return;
        }
        self.inner.selected.set(None);
        self.inner.selection_changed.emit(None);
    }

    /// Emitted with the newly selected member (or `None` on clear).
    pub fn selection_changed(&self) -> &Signal<Option<WidgetId>> {
        &self.inner.selection_changed
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::arena::WidgetArena;
    use crate::widget::testing::MockWidget;
    use std::cell::RefCell;
    use trellis_core::Rect;

    fn two_ids() -> (WidgetId, WidgetId) {
        let mut arena = WidgetArena::new();
        (
            arena.insert(MockWidget::new(Rect::ZERO)),
            arena.insert(MockWidget::new(Rect::ZERO)),
        )
    }

    #[test]
    fn test_select_is_exclusive() {
        let (a, b) = two_ids();
        let group = RadioGroup::new();
        group.register(a);
        group.register(b);

        group.select(a);
        assert_eq!(group.selected(), Some(a));
        group.select(b);
        assert_eq!(group.selected(), Some(b));
    }

    #[test]
    fn test_reselect_does_not_emit() {
        let (a, _) = two_ids();
        let group = RadioGroup::new();
        group.register(a);

        let emissions = Rc::new(RefCell::new(0));
        let e = emissions.clone();
        group.selection_changed().connect(move |_| *e.borrow_mut() += 1);

        group.select(a);
        group.select(a);
        assert_eq!(*emissions.borrow(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let (a, _) = two_ids();
        let group = RadioGroup::new();
        let alias = group.clone();

        alias.select(a);
        assert_eq!(group.selected(), Some(a));
    }

    #[test]
    fn test_register_deduplicates() {
        let (a, _) = two_ids();
        let group = RadioGroup::new();
        group.register(a);
        group.register(a);
        assert_eq!(group.members().len(), 1);
    }
}
