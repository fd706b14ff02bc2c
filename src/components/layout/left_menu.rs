use dioxus::prelude::*;

use crate::hooks::FoldingPanel;

/// Panel container. Its classes come from the panel's controller.
#[component]
pub fn LeftMenu(panel: FoldingPanel, children: Element) -> Element {
    let panel_classes = panel.panel_classes;

    rsx! {
        nav {
            id: panel.panel_id(),
            class: format!("left-menu {}", panel_classes.read()),
            onanimationend: move |_| panel.settle(),

            {children}
        }
    }
}
