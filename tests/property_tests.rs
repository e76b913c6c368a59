use kbdmini::embed::options::{DEFAULT_DIMENSION, HEIGHT_RANGE, MIN_INTERVAL_MS, WIDTH_RANGE};
use kbdmini::embed::{animation_interval, clamp_dimension, synthesize, EmbedAttributes, LayoutOptions};
use kbdmini::geometry::{Point, Size};
use kbdmini::layouts::{build_layout, OsTarget, Platform};
use kbdmini::runtime::drag::{clamp_position, EDGE_MIN, EDGE_PAD};
use kbdmini::runtime::{HostEnv, MemoryStore, MountOptions, StorageKeys, Widget};
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_role() -> impl Strategy<Value = String> {
    let roles: Vec<String> = build_layout(Platform::Mac)
        .roles()
        .into_iter()
        .map(str::to_string)
        .collect();
    prop::sample::select(roles)
}

prop_compose! {
    fn arb_window()(w in 400.0..3000.0f64, h in 300.0..2000.0f64) -> Size {
        Size::new(w, h)
    }
}

proptest! {
    #[test]
    fn prop_dimension_always_in_range(v in -10_000.0..10_000.0f64) {
        let w = clamp_dimension(Some(&v.to_string()), WIDTH_RANGE);
        prop_assert!((WIDTH_RANGE.0..=WIDTH_RANGE.1).contains(&w));
        let h = clamp_dimension(Some(&v.to_string()), HEIGHT_RANGE);
        prop_assert!((HEIGHT_RANGE.0..=HEIGHT_RANGE.1).contains(&h));
    }

    #[test]
    fn prop_garbage_dimension_is_default(s in "[a-z ]{1,12}") {
        prop_assert_eq!(clamp_dimension(Some(&s), WIDTH_RANGE), DEFAULT_DIMENSION);
    }

    #[test]
    fn prop_interval_floor(speed in -10.0..50.0f64) {
        prop_assert!(animation_interval(speed) >= MIN_INTERVAL_MS);
    }

    #[test]
    fn prop_clamped_position_inside_window(
        x in -5000.0..5000.0f64,
        y in -5000.0..5000.0f64,
        window in arb_window(),
        ww in 180.0..360.0f64,
        wh in 160.0..260.0f64,
    ) {
        let widget = Size::new(ww, wh);
        let p = clamp_position(Point::new(x, y), widget, window);
        prop_assert!(p.x >= EDGE_MIN && p.y >= EDGE_MIN);
        prop_assert!(p.x + ww <= window.width - EDGE_PAD + 1e-9);
        prop_assert!(p.y + wh <= window.height - EDGE_PAD + 1e-9);
    }

    #[test]
    fn prop_storage_keys_are_deterministic(
        seq in prop::collection::vec(arb_role(), 1..6),
        label in "[A-Za-z ]{0,10}",
    ) {
        let a = StorageKeys::new(&seq, &label);
        let b = StorageKeys::new(&seq, &label);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.coords.starts_with(&a.state));
    }

    #[test]
    fn prop_caption_resets_every_loop(seq in prop::collection::vec(arb_role(), 1..6)) {
        let mut w = Widget::mount(
            MountOptions::new(OsTarget::Mac, &seq),
            HostEnv::new("Macintosh", Size::new(1280.0, 800.0)),
            MemoryStore::new(),
        );
        let first = w.caption().to_string();
        for _ in 0..seq.len() {
            w.tick();
        }
        prop_assert_eq!(w.caption(), first);
        prop_assert_eq!(w.highlighted(), Some(seq[0].as_str()));
    }

    #[test]
    fn prop_snippet_parses_back(
        seq in prop::collection::vec(arb_role(), 1..6),
        label in "[ -~]{0,16}",
        width in 0u32..1000,
        speed in 0.1..5.0f64,
    ) {
        let opts = LayoutOptions::from_raw("top-left", Some(&width.to_string()), None, true, &label);
        let html = synthesize(&seq, OsTarget::Mac, speed, &opts).unwrap().to_html();
        let attrs = EmbedAttributes::parse(&html).unwrap();
        prop_assert_eq!(attrs.seq, seq);
        prop_assert_eq!(attrs.label, label.trim());
        prop_assert_eq!(attrs.width, opts.width);
        prop_assert_eq!(attrs.interval, animation_interval(speed));
    }
}
