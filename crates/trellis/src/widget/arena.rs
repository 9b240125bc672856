//! Widget storage.
//!
//! All widgets live in a [`WidgetArena`], a slotmap of boxed trait objects.
//! Layouts and the event router refer to widgets by [`WidgetId`] and borrow
//! them from the arena only for the duration of a call, which keeps the
//! widget tree free of ownership cycles.

use slotmap::{new_key_type, SlotMap};

use super::traits::Widget;

new_key_type! {
    /// Stable identity of a widget within a [`WidgetArena`].
    ///
    /// Ids are generational: after a widget is removed, lookups with its old
    /// id return `None` instead of aliasing a newer widget in the same slot.
    pub struct WidgetId;
}

/// Owning storage for all widgets of an application.
pub struct WidgetArena {
    widgets: SlotMap<WidgetId, Box<dyn Widget>>,
}

impl WidgetArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
        }
    }

    /// Insert a widget, stamp its id into its base, and notify it.
    pub fn insert<W: Widget>(&mut self, widget: W) -> WidgetId {
        let id = self.widgets.insert(Box::new(widget));
        let widget = &mut self.widgets[id];
        widget.widget_base_mut().set_id(id);
        widget.attached(id);
        tracing::debug!(target: "trellis::arena", ?id, "widget inserted");
        id
    }

    /// Remove a widget, returning it if the id was live.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let removed = self.widgets.remove(id);
        if removed.is_some() {
            tracing::debug!(target: "trellis::arena", ?id, "widget removed");
        }
        removed
    }

    /// Borrow a widget as a trait object.
    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|w| w.as_ref())
    }

    /// Mutably borrow a widget as a trait object.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.widgets.get_mut(id).map(|w| w.as_mut())
    }

    /// Borrow a widget downcast to its concrete type.
    pub fn get_as<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.get(id)?.as_any().downcast_ref()
    }

    /// Mutably borrow a widget downcast to its concrete type.
    pub fn get_as_mut<W: Widget>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.get_mut(id)?.as_any_mut().downcast_mut()
    }

    /// Whether `id` refers to a live widget.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Iterate over all live widget ids.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets.keys()
    }
}

impl Default for WidgetArena {
    fn default() -> Self {
        Self::new()
    }
}
