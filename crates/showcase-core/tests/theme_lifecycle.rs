//! Theme resolver lifecycle tests
//!
//! Drives a resolver through a host preference channel the way the desktop
//! app does: initialize, subscribe, receive host changes, toggle, tear down.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{
    colors_for, FixedPreference, PreferenceChannel, SemanticRole, ThemeMode, ThemeResolver,
};

/// Resolver subscribed to `host`, recording every reported transition.
fn subscribed(host: &PreferenceChannel) -> (ThemeResolver, Rc<RefCell<Vec<ThemeMode>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);
    let mut resolver = ThemeResolver::initialize(host);
    resolver.subscribe(host, move |mode| recorder.borrow_mut().push(mode));
    (resolver, seen)
}

#[test]
fn every_mode_yields_every_role() {
    for mode in ThemeMode::ALL {
        let colors = ThemeResolver::colors_for(mode);
        for role in SemanticRole::ALL {
            assert!(!colors.get(role).is_empty(), "{mode}: {} empty", role.name());
        }
    }
}

#[test]
fn light_and_dark_differ_in_every_role() {
    let light = colors_for(ThemeMode::Light);
    let dark = colors_for(ThemeMode::Dark);
    for ((role, l), (_, d)) in light.iter().zip(dark.iter()) {
        assert_ne!(l, d, "{} identical in both modes", role.name());
    }
}

#[test]
fn dark_preference_initializes_dark() {
    let host = PreferenceChannel::with_preference(Some(true));
    let resolver = ThemeResolver::initialize(&host);
    assert_eq!(resolver.mode(), ThemeMode::Dark);
    assert_eq!(ThemeResolver::colors_for(ThemeMode::Dark).primary, "#ADBFFF");
}

#[test]
fn light_preference_initializes_light() {
    let host = PreferenceChannel::with_preference(Some(false));
    let resolver = ThemeResolver::initialize(&host);
    assert_eq!(resolver.mode(), ThemeMode::Light);
    assert_eq!(ThemeResolver::colors_for(ThemeMode::Light).background, "#FFFFFF");
}

#[test]
fn missing_preference_initializes_light() {
    let resolver = ThemeResolver::initialize(&FixedPreference(None));
    assert_eq!(resolver.mode(), ThemeMode::Light);
    assert_eq!(resolver.colors(), colors_for(ThemeMode::Light));
}

#[test]
fn toggle_twice_restores_mode_and_colors() {
    for start in ThemeMode::ALL {
        let mut resolver = ThemeResolver::with_mode(start);
        let before = resolver.colors();

        resolver.toggle();
        assert_ne!(resolver.colors(), before);
        resolver.toggle();

        assert_eq!(resolver.mode(), start);
        assert_eq!(resolver.colors(), before);
    }
}

#[test]
fn host_change_after_initialize_updates_mode() {
    let host = PreferenceChannel::with_preference(Some(false));
    let (resolver, seen) = subscribed(&host);
    assert_eq!(resolver.mode(), ThemeMode::Light);

    host.publish(Some(true));

    assert_eq!(resolver.mode(), ThemeMode::Dark);
    assert_eq!(*seen.borrow(), vec![ThemeMode::Dark]);
}

#[test]
fn late_first_reading_updates_mode() {
    // The desktop bridge reports the initial reading after the resolver exists.
    let host = PreferenceChannel::new();
    let (resolver, _) = subscribed(&host);
    assert_eq!(resolver.mode(), ThemeMode::Light);

    host.publish(Some(true));
    assert_eq!(resolver.mode(), ThemeMode::Dark);
}

#[test]
fn unavailable_reading_keeps_mode() {
    let host = PreferenceChannel::with_preference(Some(true));
    let (resolver, seen) = subscribed(&host);

    host.publish(None);

    assert_eq!(resolver.mode(), ThemeMode::Dark);
    assert!(seen.borrow().is_empty());
}

#[test]
fn toggle_then_host_change_both_apply() {
    let host = PreferenceChannel::with_preference(Some(false));
    let (mut resolver, seen) = subscribed(&host);

    resolver.toggle();
    assert_eq!(resolver.mode(), ThemeMode::Dark);

    // Host switches dark -> light on its side; the resolver follows.
    host.publish(Some(true));
    host.publish(Some(false));
    assert_eq!(resolver.mode(), ThemeMode::Light);

    assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
}

#[test]
fn teardown_releases_listener() {
    let host = PreferenceChannel::with_preference(Some(false));
    let (resolver, seen) = subscribed(&host);
    assert_eq!(host.listener_count(), 1);

    drop(resolver);
    assert_eq!(host.listener_count(), 0);

    host.publish(Some(true));
    host.publish(Some(false));
    assert!(seen.borrow().is_empty());
}

#[test]
fn explicit_release_stops_following_host() {
    let host = PreferenceChannel::with_preference(Some(false));
    let (mut resolver, seen) = subscribed(&host);

    resolver.release();
    host.publish(Some(true));

    assert_eq!(resolver.mode(), ThemeMode::Light);
    assert!(seen.borrow().is_empty());
}
