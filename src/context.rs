//! Theme context provider for Showcase.
//!
//! The App component owns the [`ThemeResolver`]; every other component reads
//! the mode through [`use_theme`] and can only change it via
//! [`ThemeHandle::toggle`].
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let theme = use_theme_provider(config.theme);
//!
//! // In child components
//! let theme = use_theme();
//! let colors = theme.colors();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use showcase_core::{ColorSet, PreferenceChannel, SiteContent, ThemeMode, ThemeResolver};

use crate::host::use_host_color_scheme;

/// How the initial theme is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Start from and follow the host color scheme
    #[default]
    System,
    /// Start in this mode and ignore the host
    Fixed(ThemeMode),
}

impl ThemePreference {
    pub fn follows_host(&self) -> bool {
        matches!(self, ThemePreference::System)
    }
}

/// Everything the App needs from the command line.
#[derive(Clone, Debug, Default)]
pub struct LaunchConfig {
    pub theme: ThemePreference,
    pub content: SiteContent,
}

/// Get the launch configuration.
pub fn get_launch_config() -> LaunchConfig {
    crate::get_launch_config()
}

/// Read access to the theme plus the toggle.
///
/// The mode is a read-only signal mirrored from the resolver, so reading it
/// subscribes the calling component to theme changes.
#[derive(Clone)]
pub struct ThemeHandle {
    mode: ReadOnlySignal<ThemeMode>,
    resolver: Rc<RefCell<ThemeResolver>>,
}

impl ThemeHandle {
    pub fn mode(&self) -> ThemeMode {
        (self.mode)()
    }

    pub fn colors(&self) -> ColorSet {
        self.mode().colors()
    }

    /// Flip light/dark. The resolver reports the change back into the signal.
    pub fn toggle(&self) {
        self.resolver.borrow_mut().toggle();
    }
}

/// Create the resolver, connect it to the host, and provide [`ThemeHandle`]
/// to all child components.
///
/// The host subscription lives as long as the calling component.
pub fn use_theme_provider(preference: ThemePreference) -> ThemeHandle {
    let host = use_hook(PreferenceChannel::new);

    let resolver = use_hook(|| {
        let resolver = match preference {
            ThemePreference::System => ThemeResolver::initialize(&host),
            ThemePreference::Fixed(mode) => ThemeResolver::with_mode(mode),
        };
        Rc::new(RefCell::new(resolver))
    });

    let initial = resolver.borrow().mode();
    let mut mode = use_signal(|| initial);

    // The resolver is the only writer of `mode`
    use_hook(|| {
        let mut resolver = resolver.borrow_mut();
        let on_change = move |next: ThemeMode| mode.set(next);
        if preference.follows_host() {
            resolver.subscribe(&host, on_change);
        } else {
            resolver.on_change(on_change);
        }
    });

    use_host_color_scheme(host, preference.follows_host());

    use_context_provider(|| ThemeHandle {
        mode: ReadOnlySignal::new(mode),
        resolver,
    })
}

/// Hook to access the theme from context.
///
/// # Example
///
/// ```ignore
/// let theme = use_theme();
///
/// rsx! {
///     button { onclick: move |_| theme.toggle(), "{theme.mode()}" }
/// }
/// ```
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}
