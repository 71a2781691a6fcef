//! Host color-scheme preference.
//!
//! The host (a webview in the desktop app) reports whether the user prefers a
//! dark color scheme. A [`PreferenceSource`] exposes the current reading and
//! lets callers subscribe to changes. Subscriptions are scoped: the returned
//! [`Subscription`] unregisters its listener when dropped.
//!
//! Everything here is single-threaded. Listeners run on the UI event loop and
//! complete before the next event is handled, so shared state uses `Rc` and
//! `RefCell` rather than locks.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked with each new "prefers dark" reading.
pub type PreferenceListener = Box<dyn FnMut(bool)>;

/// An observable light/dark preference supplied by the host environment.
pub trait PreferenceSource {
    /// Current reading. `None` when the host cannot report a preference.
    fn prefers_dark(&self) -> Option<bool>;

    /// Register `listener` for future changes.
    ///
    /// The listener stays registered until the returned guard is dropped or
    /// released.
    fn subscribe(&self, listener: PreferenceListener) -> Subscription;
}

/// Scoped registration with a [`PreferenceSource`].
///
/// Dropping the guard unregisters the listener on every exit path.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Guard that runs `release` exactly once, on drop or [`Subscription::release`].
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard for a source that never emits changes.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Unregister now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

type SharedListener = Rc<RefCell<PreferenceListener>>;

#[derive(Default)]
struct ChannelState {
    prefers_dark: Option<bool>,
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
}

/// In-memory preference broadcaster.
///
/// The desktop bridge publishes the webview's media-query readings here;
/// tests publish directly. Clones share the same state.
#[derive(Clone, Default)]
pub struct PreferenceChannel {
    state: Rc<RefCell<ChannelState>>,
}

impl PreferenceChannel {
    /// A channel with no reading yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel seeded with an initial reading.
    pub fn with_preference(prefers_dark: Option<bool>) -> Self {
        let channel = Self::new();
        channel.state.borrow_mut().prefers_dark = prefers_dark;
        channel
    }

    /// Record a new reading and notify listeners.
    ///
    /// `None` marks the preference unavailable; it is recorded but nobody is
    /// notified, so subscribers keep their current mode.
    pub fn publish(&self, prefers_dark: Option<bool>) {
        let listeners: Vec<SharedListener> = {
            let mut state = self.state.borrow_mut();
            state.prefers_dark = prefers_dark;
            if prefers_dark.is_some() {
                state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
            } else {
                Vec::new()
            }
        };

        let Some(prefers_dark) = prefers_dark else {
            tracing::debug!("Host color-scheme preference unavailable");
            return;
        };

        tracing::debug!(
            prefers_dark,
            listeners = listeners.len(),
            "Publishing host color-scheme preference"
        );
        for listener in listeners {
            let mut callback = listener.borrow_mut();
            (&mut **callback)(prefers_dark);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl PreferenceSource for PreferenceChannel {
    fn prefers_dark(&self) -> Option<bool> {
        self.state.borrow().prefers_dark
    }

    fn subscribe(&self, listener: PreferenceListener) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::new(RefCell::new(listener))));
            id
        };

        let state: Weak<RefCell<ChannelState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

impl fmt::Debug for PreferenceChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PreferenceChannel")
            .field("prefers_dark", &state.prefers_dark)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

/// A preference that never changes.
///
/// `FixedPreference(None)` models a host without color-scheme support.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FixedPreference(pub Option<bool>);

impl PreferenceSource for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }

    fn subscribe(&self, _listener: PreferenceListener) -> Subscription {
        Subscription::inert()
    }
}
