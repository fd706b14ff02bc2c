use dioxus::prelude::*;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("fa-home", "Dashboard"),
    ("fa-book", "Corpora"),
    ("fa-list", "Control lists"),
    ("fa-cog", "Settings"),
];

#[component]
pub fn LeftNav() -> Element {
    rsx! {
        ul { class: "left-nav",
            for (icon, label) in NAV_ITEMS.iter().copied() {
                li { key: "{label}", class: "left-nav-item",
                    i { class: "fa {icon}" }
                    // Hidden by the stylesheet while folded
                    span { class: "left-nav-label", "{label}" }
                }
            }
        }
    }
}
