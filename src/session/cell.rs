use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::state::SessionState;

type Listener = Rc<dyn Fn(Rc<SessionState>)>;

#[derive(Default)]
struct Inner {
    current: RefCell<Rc<SessionState>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// Shared session state with subscribe/notify.
///
/// The provider publishes, views only read. Cloning shares the same cell.
#[derive(Clone, Default)]
pub struct SessionCell {
    inner: Rc<Inner>,
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    inner: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl SessionCell {
    pub fn current(&self) -> Rc<SessionState> {
        Rc::clone(&self.inner.current.borrow())
    }

    pub fn subscribe(&self, listener: impl Fn(Rc<SessionState>) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Replaces the state and notifies every listener.
    pub fn publish(&self, state: SessionState) {
        let state = Rc::new(state);
        *self.inner.current.borrow_mut() = Rc::clone(&state);

        // listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(Rc::clone(&state));
        }
    }

    /// Publishes a copy of the current state with `f` applied.
    pub fn update(&self, f: impl FnOnce(&mut SessionState)) {
        let mut next = (*self.current()).clone();
        f(&mut next);
        self.publish(next);
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl PartialEq for SessionCell {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_subscribers() {
        let cell = SessionCell::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |s| sink.borrow_mut().push(s.is_authenticating));

        cell.update(|s| s.is_authenticating = true);
        cell.update(|s| s.is_authenticating = false);

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!cell.current().is_authenticating);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let cell = SessionCell::default();
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let sub = cell.subscribe(move |_| sink.set(sink.get() + 1));

        cell.publish(SessionState::default());
        drop(sub);
        cell.publish(SessionState::default());

        assert_eq!(hits.get(), 1);
        assert_eq!(cell.listener_count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let a = SessionCell::default();
        let b = a.clone();
        a.update(|s| s.error = Some("boom".into()));
        assert_eq!(b.current().error(), Some("boom"));
        assert!(a == b);
        assert!(a != SessionCell::default());
    }
}
