use ui::core::config::PageConfig;
use ui::{FadeOptions, NavOptions, RevealOptions};

/// The embedded page block may override any subset of options; everything it
/// leaves out must keep the documented default. This pins the whole default
/// table so a drive-by rename of a field or class shows up as a test
/// failure, not as a silently dead page hook.
#[test]
fn default_table_is_stable() {
    let config = PageConfig::from_json("{}").unwrap();

    assert_eq!(config.fade.selector, ".fade-in");
    assert_eq!(config.fade.duration_ms, 600.0);
    assert!(config.fade.auto_init);

    assert_eq!(config.nav.header_selector, ".navbar");
    assert_eq!(config.nav.toggle_selector, ".navbar__burger");
    assert_eq!(config.nav.menu_selector, ".navbar__menu");
    assert_eq!(config.nav.item_selector, ".navbar__item");
    assert_eq!(config.nav.lang_toggle_selector, ".navbar__lang-toggle");
    assert_eq!(config.nav.lang_menu_selector, ".navbar__lang-menu");
    assert_eq!(config.nav.lang_item_selector, ".navbar__lang-item");
    assert_eq!(config.nav.open_class, "navbar--open");
    assert_eq!(config.nav.item_active_class, "navbar__item--active");
    assert_eq!(config.nav.lang_open_class, "navbar__lang--open");
    assert!(config.nav.auto_init);

    assert_eq!(config.reveal.selector, ".reveal");
    assert_eq!(config.reveal.active_class, "reveal--visible");
    assert_eq!(config.reveal.root_selector, None);
    assert_eq!(config.reveal.root_margin, "0px");
    assert_eq!(config.reveal.threshold, 0.15);
    assert!(config.reveal.once);
    assert!(config.reveal.auto_init);
}

#[test]
fn each_section_can_be_overridden_independently() {
    let config = PageConfig::from_json(
        r##"{
            "fade": {"selector": "#hero", "duration_ms": 0},
            "nav": {"open_class": "is-open"},
            "reveal": {"root_selector": "#scroller", "root_margin": "64px 0px"}
        }"##,
    )
    .unwrap();

    assert_eq!(config.fade.selector, "#hero");
    assert_eq!(config.fade.duration_ms, 0.0);
    assert_eq!(config.nav.open_class, "is-open");
    assert_eq!(config.nav.item_selector, NavOptions::default().item_selector);
    assert_eq!(config.reveal.root_selector.as_deref(), Some("#scroller"));
    assert_eq!(config.reveal.root_margin, "64px 0px");
    assert_eq!(config.reveal.threshold, RevealOptions::default().threshold);
}

#[test]
fn auto_init_can_be_opted_out_per_controller() {
    let config = PageConfig::from_json(
        r#"{"fade": {"auto_init": false}, "reveal": {"auto_init": false}}"#,
    )
    .unwrap();
    assert!(!config.fade.auto_init);
    assert!(config.nav.auto_init);
    assert!(!config.reveal.auto_init);
    assert_eq!(config.fade.duration_ms, FadeOptions::default().duration_ms);
}
