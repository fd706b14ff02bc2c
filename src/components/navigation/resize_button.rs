use dioxus::prelude::*;

use crate::hooks::FoldingPanel;

/// Link that folds and unfolds the panel. The icon inside shows which way
/// the next click goes.
#[component]
pub fn ResizeButton(panel: FoldingPanel) -> Element {
    let icon_classes = panel.icon_classes;

    rsx! {
        a {
            id: panel.toggle_id(),
            class: "resize-menu",
            href: "#",
            title: "Fold or unfold the menu",
            onclick: move |evt: MouseEvent| {
                panel.toggle(&evt);
            },

            i { class: icon_classes.read().to_string() }
        }
    }
}
