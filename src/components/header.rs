//! App Header
//!
//! Logo, brand name and the theme toggle, pinned to the top of the page.

use dioxus::prelude::*;
use showcase_ui::ThemeToggle;

use crate::context::use_theme;

#[component]
pub fn AppHeader(brand: String) -> Element {
    let theme = use_theme();
    let mode = theme.mode();

    rsx! {
        header { class: "app-header",
            div { class: "app-header__inner",
                a { class: "app-header__brand", href: "#",
                    span { class: "logo", "aria-hidden": "true", "\u{1F3A8}" }
                    h1 { class: "app-header__name", "{brand}" }
                }
                ThemeToggle {
                    mode,
                    on_toggle: move |_| theme.toggle(),
                }
            }
        }
    }
}
