use kbdmini::geometry::{StageGeometry, KEY_GAP, KEY_HEIGHT, ROW_MARGIN};
use kbdmini::layouts::{
    build_layout, canonical_role, detect_platform, OsTarget, Platform, WidthClass, ROW_COUNT,
};
use rstest::rstest;

const MAC_SAFARI: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15";
const WIN_CHROME: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
const LINUX_FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15";

#[rstest]
#[case(Platform::Mac)]
#[case(Platform::Win)]
fn test_row_count(#[case] platform: Platform) {
    let layout = build_layout(platform);
    assert_eq!(layout.rows.len(), ROW_COUNT);
    assert_eq!(layout.platform, platform);
}

#[rstest]
#[case(Platform::Mac)]
#[case(Platform::Win)]
fn test_letter_rows_are_shared(#[case] platform: Platform) {
    let layout = build_layout(platform);
    let letters: String = layout.rows[..3]
        .iter()
        .flat_map(|r| r.keys.iter())
        .filter(|k| k.width.is_none())
        .map(|k| k.label.clone())
        .collect();
    assert_eq!(letters, "QWERTYUIOPASDFGHJKLZXCVBNM");
    for c in 'a'..='z' {
        assert!(layout.has_role(&c.to_string()), "missing letter {}", c);
    }
}

#[test]
fn test_tab_and_caps_are_decorative() {
    let layout = build_layout(Platform::Mac);
    assert_eq!(layout.rows[0].keys[0].label, "Tab");
    assert!(layout.rows[0].keys[0].role.is_none());
    assert_eq!(layout.rows[1].keys[0].label, "Caps");
    assert!(layout.rows[1].keys[0].role.is_none());
}

#[test]
fn test_mac_modifier_row() {
    let layout = build_layout(Platform::Mac);
    let roles: Vec<_> = layout.rows[3]
        .keys
        .iter()
        .map(|k| k.role.as_deref().unwrap_or("-"))
        .collect();
    assert_eq!(roles, ["fn", "control", "option", "command", "space"]);
    assert_eq!(layout.key("command").unwrap().width, Some(WidthClass::W175x));
    assert_eq!(layout.key("space").unwrap().width, Some(WidthClass::W6));
    assert!(!layout.has_role("win"));
    assert!(!layout.has_role("alt"));
}

#[test]
fn test_win_modifier_row() {
    let layout = build_layout(Platform::Win);
    let labels: Vec<_> = layout.rows[3].keys.iter().map(|k| k.label.as_str()).collect();
    assert_eq!(labels, ["Ctrl", "Win", "Alt", ""]);
    assert!(layout.has_role("win"));
    assert!(!layout.has_role("command"));
    assert!(!layout.has_role("option"));
    assert!(!layout.has_role("fn"));
}

#[rstest]
#[case(Platform::Mac, 32)]
#[case(Platform::Win, 31)]
fn test_role_set_size(#[case] platform: Platform, #[case] expected: usize) {
    assert_eq!(build_layout(platform).role_set().len(), expected);
}

#[test]
fn test_ctrl_alias_finds_control_key() {
    assert_eq!(canonical_role("ctrl"), "control");
    for platform in [Platform::Mac, Platform::Win] {
        let layout = build_layout(platform);
        assert!(layout.has_role("ctrl"));
        assert_eq!(layout.position_of("ctrl"), layout.position_of("control"));
    }
}

#[rstest]
#[case(MAC_SAFARI, Platform::Mac)]
#[case(IPAD, Platform::Mac)]
#[case(WIN_CHROME, Platform::Win)]
#[case(LINUX_FIREFOX, Platform::Win)]
#[case("", Platform::Mac)]
#[case("SomeBot/1.0", Platform::Mac)]
fn test_detect_platform(#[case] ua: &str, #[case] expected: Platform) {
    assert_eq!(detect_platform(ua), expected);
}

#[test]
fn test_explicit_os_ignores_user_agent() {
    assert_eq!(OsTarget::Win.platform_for(MAC_SAFARI), Platform::Win);
    assert_eq!(OsTarget::Mac.platform_for(WIN_CHROME), Platform::Mac);
    assert_eq!(OsTarget::Auto.platform_for(WIN_CHROME), Platform::Win);
}

#[rstest]
#[case("auto", OsTarget::Auto)]
#[case("MAC", OsTarget::Mac)]
#[case("Win", OsTarget::Win)]
fn test_os_target_parsing(#[case] raw: &str, #[case] expected: OsTarget) {
    assert_eq!(raw.parse::<OsTarget>().unwrap(), expected);
}

#[rstest]
#[case(Platform::Mac, "command", "⌘ command")]
#[case(Platform::Mac, "option", "⌥ option")]
#[case(Platform::Mac, "control", "⌃ control")]
#[case(Platform::Mac, "shift", "⇧ shift")]
#[case(Platform::Win, "control", "Ctrl")]
#[case(Platform::Win, "win", "⊞ Win")]
#[case(Platform::Win, "alt", "Alt")]
#[case(Platform::Win, "s", "S")]
#[case(Platform::Mac, "space", "space")]
fn test_pretty_labels(#[case] platform: Platform, #[case] role: &str, #[case] expected: &str) {
    assert_eq!(platform.pretty_label(role), expected);
}

#[test]
fn test_stage_rows_are_evenly_spaced() {
    let geom = StageGeometry::from_layout(&build_layout(Platform::Mac));
    let q = geom.rect("q").unwrap();
    let a = geom.rect("a").unwrap();
    let z = geom.rect("z").unwrap();
    assert_eq!(a.y - q.y, KEY_HEIGHT + ROW_MARGIN);
    assert_eq!(z.y - a.y, KEY_HEIGHT + ROW_MARGIN);

    let w = geom.rect("w").unwrap();
    assert_eq!(w.x - q.right(), KEY_GAP);
}

#[test]
fn test_unknown_role_has_no_rect() {
    let geom = StageGeometry::from_layout(&build_layout(Platform::Win));
    assert!(geom.rect("command").is_none());
    assert!(geom.rect("win").is_some());
}
