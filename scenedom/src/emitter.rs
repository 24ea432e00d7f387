//! Typed publish/subscribe.
//!
//! Widgets own an [`Emitter`] and publish their events through it; hosts
//! subscribe with [`Emitter::on`], [`Emitter::once`] or [`Emitter::on_any`]
//! and drop subscriptions with [`Emitter::unbind`].

use std::fmt;

/// An event that can be routed by kind.
pub trait Event {
    /// Discriminant used to filter subscriptions (the DOM event name).
    type Kind: Copy + Eq + fmt::Debug;

    fn kind(&self) -> Self::Kind;
}

/// Handle returned by a subscription, used to unbind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

struct Listener<E: Event> {
    id: ListenerId,
    /// `None` listens to every kind.
    filter: Option<E::Kind>,
    once: bool,
    handler: Handler<E>,
}

/// Listener registry for one event type.
pub struct Emitter<E: Event> {
    listeners: Vec<Listener<E>>,
    next_id: u64,
}

impl<E: Event> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E: Event> Emitter<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Subscribe to one kind of event.
    pub fn on(&mut self, kind: E::Kind, handler: impl FnMut(&E) + 'static) -> ListenerId {
        self.push(Some(kind), false, Box::new(handler))
    }

    /// Subscribe to the next event of one kind only.
    pub fn once(&mut self, kind: E::Kind, handler: impl FnMut(&E) + 'static) -> ListenerId {
        self.push(Some(kind), true, Box::new(handler))
    }

    /// Subscribe to every event.
    pub fn on_any(&mut self, handler: impl FnMut(&E) + 'static) -> ListenerId {
        self.push(None, false, Box::new(handler))
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unbind(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Remove every subscription.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event to matching listeners in subscription order.
    /// Returns how many handlers ran.
    pub fn emit(&mut self, event: &E) -> usize {
        let kind = event.kind();
        let mut called = 0;
        self.listeners.retain_mut(|listener| {
            if listener.filter.is_some_and(|k| k != kind) {
                return true;
            }
            (listener.handler)(event);
            called += 1;
            !listener.once
        });
        called
    }

    fn push(&mut self, filter: Option<E::Kind>, once: bool, handler: Handler<E>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            filter,
            once,
            handler,
        });
        id
    }
}
