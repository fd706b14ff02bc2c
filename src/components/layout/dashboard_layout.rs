use dioxus::prelude::*;

use crate::components::layout::LeftMenu;
use crate::components::navigation::{LeftNav, ResizeButton};
use crate::config::PanelConfig;
use crate::cookie::PlatformCookieJar;
use crate::hooks::use_folding_panel;

#[component]
pub fn DashboardLayout(children: Element) -> Element {
    let jar = use_context::<PlatformCookieJar>();
    let panel = use_folding_panel(PanelConfig::default(), jar);

    rsx! {
        div { class: "dashboard",
            // Left Menu
            LeftMenu { panel: panel,
                div { class: "left-menu-header",
                    span { class: "left-menu-brand", "Corpus" }
                    ResizeButton { panel: panel }
                }
                LeftNav {}
            }

            // Content
            main { class: "content-area",
                {children}
            }
        }
    }
}
