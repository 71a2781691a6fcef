//! Bridge from the webview's `prefers-color-scheme` media query to a
//! [`PreferenceChannel`].
//!
//! A script installed in the webview reports the current reading once and
//! then every change. The script's DOM listener is removed again when the
//! owning component is dropped.

use dioxus::prelude::*;
use showcase_core::PreferenceChannel;

/// Sends `null` when the host has no `matchMedia`, otherwise the current
/// reading followed by each change.
const WATCH_COLOR_SCHEME: &str = r#"
const query = window.matchMedia ? window.matchMedia("(prefers-color-scheme: dark)") : null;
if (window.__showcaseColorScheme) {
    window.__showcaseColorScheme.release();
}
if (query) {
    const onChange = (event) => dioxus.send(event.matches);
    query.addEventListener("change", onChange);
    window.__showcaseColorScheme = {
        release: () => {
            query.removeEventListener("change", onChange);
            delete window.__showcaseColorScheme;
        },
    };
    dioxus.send(query.matches);
} else {
    dioxus.send(null);
}
"#;

const RELEASE_COLOR_SCHEME: &str = r#"
if (window.__showcaseColorScheme) {
    window.__showcaseColorScheme.release();
}
return true;
"#;

/// Feed host color-scheme readings into `channel` while the calling
/// component is mounted. Does nothing when `enabled` is false.
pub fn use_host_color_scheme(channel: PreferenceChannel, enabled: bool) {
    use_effect(move || {
        if !enabled {
            return;
        }
        let channel = channel.clone();
        spawn(async move {
            let mut watcher = document::eval(WATCH_COLOR_SCHEME);
            loop {
                match watcher.recv::<Option<bool>>().await {
                    Ok(prefers_dark) => channel.publish(prefers_dark),
                    Err(e) => {
                        tracing::warn!("Color-scheme watcher stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(move || {
        if enabled {
            tracing::debug!("Removing color-scheme watcher");
            let release = document::eval(RELEASE_COLOR_SCHEME);
            spawn_forever(async move {
                if let Err(e) = release.join::<bool>().await {
                    tracing::warn!("Failed to remove color-scheme watcher: {:?}", e);
                }
            });
        }
    });
}
