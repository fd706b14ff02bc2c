use folding_panel::prelude::*;

type Controller = PanelToggleController<ClassSet, ClassSet, MemoryCookieJar>;

/// Page as served: panel expanded, icon showing the compress glyph.
fn fresh_page(cookies: &str) -> (Controller, MemoryCookieJar) {
    let jar = MemoryCookieJar::with_cookies(cookies);
    let controller = PanelToggleController::new(
        PanelConfig::default(),
        "sidebar col-lg-2".parse().unwrap(),
        "fa fa-compress".parse().unwrap(),
        jar.clone(),
    );
    (controller, jar)
}

fn glyph(controller: &Controller) -> &'static str {
    let icon = controller.icon();
    match (icon.contains("fa-expand"), icon.contains("fa-compress")) {
        (true, false) => "expand",
        (false, true) => "compress",
        other => panic!("icon shows {other:?}: {icon}"),
    }
}

fn assert_consistent(controller: &Controller) {
    let expected = match controller.state() {
        ToggleState::Folded => "expand",
        ToggleState::Expanded => "compress",
    };
    assert_eq!(glyph(controller), expected, "panel: {}", controller.panel());
}

#[test]
fn initialize_icon_for_each_cookie_value() {
    let cases = [
        ("resized-menu=true", "expand"),
        ("resized-menu=false", "compress"),
        ("", "compress"),
        ("resized-menu=xyz", "compress"),
        ("other=true", "compress"),
    ];
    for (cookies, expected) in cases {
        let (mut controller, _) = fresh_page(cookies);
        controller.initialize();
        assert_eq!(glyph(&controller), expected, "cookies: {cookies:?}");
    }
}

#[test]
fn initialize_with_unavailable_cookies_is_expanded() {
    let mut controller = PanelToggleController::new(
        PanelConfig::default(),
        "col-lg-2".parse::<ClassSet>().unwrap(),
        "fa fa-expand".parse::<ClassSet>().unwrap(),
        MemoryCookieJar::unavailable(),
    );
    assert_eq!(controller.initialize(), ToggleState::Expanded);
    assert_eq!(controller.icon().to_string(), "fa fa-compress");
}

#[test]
fn toggle_round_trip_from_absent_cookie() {
    let (mut controller, jar) = fresh_page("");
    controller.initialize();
    assert_eq!(glyph(&controller), "compress");

    controller.on_toggle_requested(&NoDefaultAction);
    assert!(controller.panel().contains("folded-left-col"));
    assert!(!controller.panel().contains("col-lg-2"));
    assert_eq!(glyph(&controller), "expand");
    assert_eq!(jar.get("resized-menu").as_deref(), Some("true"));

    controller.on_toggle_requested(&NoDefaultAction);
    assert!(!controller.panel().contains("folded-left-col"));
    assert!(controller.panel().contains("col-lg-2"));
    assert_eq!(glyph(&controller), "compress");
    assert_eq!(jar.get("resized-menu").as_deref(), Some("false"));
}

#[test]
fn malformed_cookie_behaves_like_absent() {
    let (mut absent, absent_jar) = fresh_page("");
    let (mut malformed, malformed_jar) = fresh_page("resized-menu=xyz");

    assert_eq!(absent.initialize(), malformed.initialize());
    assert_eq!(absent.icon(), malformed.icon());

    absent.on_toggle_requested(&NoDefaultAction);
    malformed.on_toggle_requested(&NoDefaultAction);
    assert_eq!(absent.panel(), malformed.panel());
    assert_eq!(absent.icon(), malformed.icon());
    assert_eq!(absent_jar.get("resized-menu"), malformed_jar.get("resized-menu"));
}

#[test]
fn toggle_writes_opposite_of_previous_cookie() {
    // Panel markup matches the stored preference, as the server renders it.
    let config = PanelConfig::default();
    for stored in [Preference::EXPANDED, Preference::FOLDED] {
        let jar = MemoryCookieJar::with_cookies(&format!("resized-menu={stored}"));
        let mut controller = PanelToggleController::new(
            config.clone(),
            config.panel_classes_for(stored.state()),
            config.icon_classes_for(ToggleState::Expanded),
            jar.clone(),
        );
        controller.initialize();
        controller.on_toggle_requested(&NoDefaultAction);

        let written: Preference = jar.get("resized-menu").unwrap().parse().unwrap();
        assert_eq!(written.is_reduced(), !stored.is_reduced());
    }
}

#[test]
fn icon_and_panel_never_diverge() {
    let (mut controller, jar) = fresh_page("resized-menu=false");
    controller.initialize();
    assert_consistent(&controller);

    for step in 0..9 {
        if step % 3 == 2 {
            controller.on_transition_settled();
        }
        let state = controller.on_toggle_requested(&NoDefaultAction);
        assert_eq!(state, controller.state());
        assert_consistent(&controller);
        assert_eq!(jar.get("resized-menu").unwrap(), Preference::from(state).to_string());
    }
}

#[test]
fn transition_settled_is_idempotent() {
    let (mut controller, _) = fresh_page("");
    controller.on_transition_settled();
    controller.on_transition_settled();
    assert_eq!(controller.panel().occurrences("animated"), 1);
    assert_eq!(controller.panel().to_string(), "sidebar col-lg-2 animated");
}

#[test]
fn custom_config_names() {
    let config = PanelConfig::from_json(
        r#"{
            "cookie_name": "nav-folded",
            "normal_class": "wide",
            "folded_class": "narrow",
            "expand_glyph": "icon-open",
            "compress_glyph": "icon-close",
            "icon_base_classes": []
        }"#,
    )
    .unwrap();
    let jar = MemoryCookieJar::with_cookies("nav-folded=true");
    let mut controller = PanelToggleController::new(
        config.clone(),
        config.panel_classes_for(ToggleState::Folded),
        config.icon_classes_for(ToggleState::Expanded),
        jar.clone(),
    );

    assert_eq!(controller.initialize(), ToggleState::Folded);
    assert_eq!(controller.icon().to_string(), "icon-open");

    assert_eq!(controller.on_toggle_requested(&NoDefaultAction), ToggleState::Expanded);
    assert_eq!(controller.panel().to_string(), "wide");
    assert_eq!(controller.icon().to_string(), "icon-close");
    assert_eq!(jar.get("nav-folded").as_deref(), Some("false"));
}
