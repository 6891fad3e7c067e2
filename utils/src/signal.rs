//! Minimal single-threaded observer list used for model change notifications.

/// A list of callbacks that are all invoked, in connection order, on each [Signal::emit].
///
/// `T` is the payload type passed by reference to each callback.
pub struct Signal<T: ?Sized> {
    slots: Vec<Box<dyn FnMut(&T)>>,
}

impl<T: ?Sized> Signal<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Registers a callback for all future emissions.
    pub fn connect<F>(&mut self, slot: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.slots.push(Box::new(slot));
    }

    /// Removes all connected callbacks.
    pub fn disconnect_all(&mut self) {
        self.slots.clear();
    }

    /// Invokes every connected callback with `payload`.
    pub fn emit(&mut self, payload: &T) {
        for slot in self.slots.iter_mut() {
            slot(payload);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: ?Sized> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.len())
            .finish()
    }
}
