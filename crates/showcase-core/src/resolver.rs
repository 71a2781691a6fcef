//! Theme resolver - sole owner and writer of the current [`ThemeMode`].
//!
//! The resolver starts from the host's preference, follows host changes while
//! subscribed, and flips on [`ThemeResolver::toggle`]. Both kinds of
//! transition notify a single dependent callback, which the UI uses to
//! re-render with the new colors.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::preference::{PreferenceSource, Subscription};
use crate::theme::{self, ColorSet, ThemeMode};

type ChangeCallback = Rc<RefCell<Option<Box<dyn FnMut(ThemeMode)>>>>;

pub struct ThemeResolver {
    mode: Rc<Cell<ThemeMode>>,
    on_change: ChangeCallback,
    subscription: Option<Subscription>,
}

impl ThemeResolver {
    /// Start from the host's current preference.
    ///
    /// Falls back to [`ThemeMode::Light`] when the host cannot report one.
    pub fn initialize(source: &dyn PreferenceSource) -> Self {
        let prefers_dark = source.prefers_dark();
        if prefers_dark.is_none() {
            tracing::debug!("No host color-scheme preference, defaulting to light");
        }
        Self::with_mode(ThemeMode::from_prefers_dark(prefers_dark))
    }

    /// Start from an explicit mode, ignoring the host.
    pub fn with_mode(mode: ThemeMode) -> Self {
        tracing::debug!(%mode, "Theme resolver initialized");
        Self {
            mode: Rc::new(Cell::new(mode)),
            on_change: Rc::new(RefCell::new(None)),
            subscription: None,
        }
    }

    /// Follow host preference changes and report transitions to `on_change`.
    ///
    /// Replaces any earlier subscription. The registration is released when
    /// the resolver is dropped or [`ThemeResolver::release`] is called.
    pub fn subscribe(
        &mut self,
        source: &dyn PreferenceSource,
        on_change: impl FnMut(ThemeMode) + 'static,
    ) {
        self.on_change(on_change);

        let mode = Rc::clone(&self.mode);
        let notify = Rc::clone(&self.on_change);
        let subscription = source.subscribe(Box::new(move |prefers_dark: bool| {
            let next = ThemeMode::from_prefers_dark(Some(prefers_dark));
            if mode.get() != next {
                tracing::debug!(from = %mode.get(), to = %next, "Host preference changed theme");
                transition(&mode, &notify, next);
            }
        }));
        self.subscription = Some(subscription);
    }

    /// Report transitions to `on_change` without following the host.
    pub fn on_change(&mut self, on_change: impl FnMut(ThemeMode) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(on_change));
    }

    /// Stop following the host. Toggling keeps working.
    pub fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!("Released host preference subscription");
            subscription.release();
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Flip to the opposite mode regardless of the host preference.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.get().toggled();
        tracing::debug!(to = %next, "Theme toggled");
        transition(&self.mode, &self.on_change, next);
        next
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Colors for the current mode.
    pub fn colors(&self) -> ColorSet {
        Self::colors_for(self.mode.get())
    }

    /// Colors for any mode. Pure and total.
    pub fn colors_for(mode: ThemeMode) -> ColorSet {
        theme::colors_for(mode)
    }
}

fn transition(mode: &Cell<ThemeMode>, on_change: &ChangeCallback, next: ThemeMode) {
    mode.set(next);
    if let Some(callback) = on_change.borrow_mut().as_mut() {
        callback(next);
    }
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("mode", &self.mode.get())
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}
