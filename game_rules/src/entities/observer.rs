//! Change notification: subscription lists owned by observable entities.

use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Stable identity of a subscriber, used to reject duplicates and to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub Uuid);

impl ObserverId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that wants to hear about changes to a subject of type `S`.
pub trait Observer<S: ?Sized> {
    fn id(&self) -> ObserverId;

    /// Called synchronously after the subject changed.
    fn on_change(&self, subject: &S);
}

/// The observable capability.
pub trait Observable {
    /// Subscribe. Returns `false` if the observer was already attached.
    fn attach(&mut self, observer: Rc<dyn Observer<Self>>) -> bool;

    /// Unsubscribe. Returns `false` if the observer was not attached.
    fn detach(&mut self, id: ObserverId) -> bool;

    /// Invoke every subscriber in subscription order.
    fn notify(&self);
}

/// Ordered set of subscribers for a subject of type `S`.
pub struct Subscribers<S: ?Sized> {
    observers: Vec<Rc<dyn Observer<S>>>,
}

impl<S: ?Sized> Subscribers<S> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer<S>>) -> bool {
        let id = observer.id();
        if self.contains(id) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != id);
        self.observers.len() != before
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|observer| observer.id() == id)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&self, subject: &S) {
        for observer in &self.observers {
            observer.on_change(subject);
        }
    }
}

impl<S: ?Sized> Default for Subscribers<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> fmt::Debug for Subscribers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|observer| observer.id()))
            .finish()
    }
}
