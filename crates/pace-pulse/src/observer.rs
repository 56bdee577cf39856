//! Ordered observer registry with opaque unsubscribe handles.
//!
//! Observers are stored in subscription order and dispatched in that order.
//! Every `subscribe` hands back a [`Subscription`]; it is the only way to
//! remove the observer again.  Handles come from one counter per owning
//! clock, so a handle from the pulse list never matches a teardown entry.

use std::fmt;

/// Opaque handle identifying one registered observer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Subscription(u64);

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Hands out unique [`Subscription`]s.
#[derive(Default, Debug)]
pub(crate) struct SubscriptionSource {
    next: u64,
}

impl SubscriptionSource {
    pub(crate) fn next(&mut self) -> Subscription {
        let sub = Subscription(self.next);
        self.next += 1;
        sub
    }
}

/// Observers of type `T`, kept in subscription order.
pub(crate) struct Registry<T> {
    entries: Vec<(Subscription, T)>,
}

impl<T> Registry<T> {
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub(crate) fn insert(&mut self, sub: Subscription, observer: T) {
        self.entries.push((sub, observer));
    }

    /// Remove `sub`, preserving the relative order of the rest.
    pub(crate) fn remove(&mut self, sub: Subscription) -> bool {
        match self.entries.iter().position(|(s, _)| *s == sub) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, o)| o)
    }

    /// Take every observer out in subscription order, leaving the registry
    /// empty.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.entries.drain(..).map(|(_, o)| o)
    }
}
