//! Site Footer
//!
//! Brand, blurb and links, with the copyright line for the current year.

use chrono::Datelike;
use dioxus::prelude::*;
use showcase_core::SiteContent;

#[component]
pub fn SiteFooter(content: SiteContent) -> Element {
    let copyright = content.copyright(chrono::Local::now().year());

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__top",
                div { class: "site-footer__about",
                    div { class: "site-footer__brand",
                        span { class: "logo", "aria-hidden": "true", "\u{1F3A8}" }
                        span { "{content.brand}" }
                    }
                    p { class: "site-footer__text", "{content.footer_text}" }
                }
                if !content.footer_links.is_empty() {
                    nav { class: "site-footer__links",
                        for (index, link) in content.footer_links.iter().enumerate() {
                            a {
                                key: "{index}",
                                class: "site-footer__link",
                                href: "{link.href}",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
            p { class: "site-footer__bottom", "{copyright}" }
        }
    }
}
