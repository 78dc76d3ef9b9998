use std::fmt;

/// Callback invoked with `(stat name, new current value)`.
pub type StatListener = Box<dyn FnMut(&str, f32) + Send + Sync>;

/// Handle returned by `StatRegistry::subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The observer list owned by a single registry.
///
/// Listeners run synchronously, in subscription order, on the caller's thread.
#[derive(Default)]
pub(crate) struct ChangeListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, StatListener)>,
}

impl ChangeListeners {
    pub(crate) fn add(&mut self, listener: StatListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify(&mut self, name: &str, value: f32) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(name, value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
