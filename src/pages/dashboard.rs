use dioxus::prelude::*;

use crate::components::layout::DashboardLayout;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        DashboardLayout {
            div { class: "content-header",
                h1 { "Dashboard" }
                p { class: "content-subtitle",
                    "Use the arrows at the top of the menu to fold it. The choice is kept for your next visit."
                }
            }
        }
    }
}
