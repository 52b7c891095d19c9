//! Window registry with open-or-focus semantics and stacking order

use tracing::debug;

use crate::math::Vec2;
use crate::placement::PlacementEngine;
use crate::viewport::Viewport;
use super::{OpenRequest, WindowEntry, WindowId};

/// Stacking value the counter starts from (windows sit above desktop icons)
pub const STACK_ORDER_BASE: u32 = 100;

/// What [`WindowRegistry::open`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new window was created
    Opened,
    /// The id was already open and has been brought to the front
    Focused,
}

/// Registry of open windows, kept in opening order
pub struct WindowRegistry<P> {
    /// Open windows (opening order, oldest first)
    entries: Vec<WindowEntry<P>>,
    /// Last stacking value handed out
    stack_counter: u32,
    /// Placement policy for new windows
    placement: PlacementEngine,
}

impl<P> Default for WindowRegistry<P> {
    fn default() -> Self {
        Self::new(PlacementEngine::default())
    }
}

impl<P> WindowRegistry<P> {
    /// Create an empty registry
    pub fn new(placement: PlacementEngine) -> Self {
        Self {
            entries: Vec::new(),
            stack_counter: STACK_ORDER_BASE,
            placement,
        }
    }

    #[inline]
    pub fn placement(&self) -> &PlacementEngine {
        &self.placement
    }

    fn next_stack_order(&mut self) -> u32 {
        self.stack_counter += 1;
        self.stack_counter
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    /// Open a window, or focus it if its id is already open.
    ///
    /// Focusing leaves the existing payload untouched.
    pub fn open(&mut self, request: OpenRequest<P>, viewport: &Viewport) -> OpenOutcome {
        if self.contains(&request.id) {
            self.focus(&request.id);
            return OpenOutcome::Focused;
        }

        let placement = self.placement.place(self.entries.len(), viewport);
        if let Some(existing) = placement.existing_position() {
            if let Some(first) = self.entries.first_mut() {
                first.position = Some(existing);
            }
        }

        let stack_order = self.next_stack_order();
        debug!(id = %request.id, kind = request.kind.as_str(), stack_order, "opened window");

        self.entries.push(WindowEntry {
            id: request.id,
            app_id: request.app_id,
            kind: request.kind,
            payload: request.payload,
            stack_order,
            position: placement.new_position(),
        });

        OpenOutcome::Opened
    }

    /// Bring a window to the front. Returns false if the id is not open.
    pub fn focus(&mut self, id: &WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let stack_order = self.next_stack_order();
        self.entries[index].stack_order = stack_order;
        debug!(%id, stack_order, "focused window");
        true
    }

    /// Close a window.
    ///
    /// When exactly one window remains it loses its explicit position so the
    /// presentation recenters it.
    pub fn close(&mut self, id: &WindowId) -> Option<WindowEntry<P>> {
        let index = self.index_of(id)?;
        let removed = self.entries.remove(index);

        if let [last] = self.entries.as_mut_slice() {
            last.position = None;
        }

        debug!(%id, remaining = self.entries.len(), "closed window");
        Some(removed)
    }

    /// Close every window, returning how many were open
    pub fn close_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        if count > 0 {
            debug!(count, "closed all windows");
        }
        count
    }

    /// Record an explicit position (e.g. after a drag)
    pub fn move_window(&mut self, id: &WindowId, position: Vec2) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.entries[index].position = Some(position);
                true
            }
            None => false,
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: &WindowId) -> Option<&WindowEntry<P>> {
        self.entries.iter().find(|e| &e.id == id)
    }

    #[inline]
    pub fn contains(&self, id: &WindowId) -> bool {
        self.index_of(id).is_some()
    }

    /// Windows in opening order
    #[inline]
    pub fn entries(&self) -> &[WindowEntry<P>] {
        &self.entries
    }

    /// Windows sorted back to front
    pub fn by_stack_order(&self) -> Vec<&WindowEntry<P>> {
        let mut windows: Vec<&WindowEntry<P>> = self.entries.iter().collect();
        windows.sort_by_key(|w| w.stack_order);
        windows
    }

    /// The frontmost window
    pub fn focused(&self) -> Option<&WindowId> {
        self.entries
            .iter()
            .max_by_key(|e| e.stack_order)
            .map(|e| &e.id)
    }

    /// Distinct app ids of open windows, in opening order
    pub fn open_app_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !ids.contains(&entry.app_id.as_str()) {
                ids.push(entry.app_id.as_str());
            }
        }
        ids
    }

    /// Last stacking value handed out
    #[inline]
    pub fn stack_counter(&self) -> u32 {
        self.stack_counter
    }

    /// Get the number of windows
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
