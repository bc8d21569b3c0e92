// Host-side tests for page widget state: accordion, navigation, counters
// and scroll effects.

use plexus_core::widgets::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn accordion_keeps_at_most_one_item_open() {
    let mut acc = Accordion::new(3);
    assert_eq!(acc.open_item(), None);
    acc.toggle(0);
    assert!(acc.is_open(0));
    acc.toggle(2);
    assert!(acc.is_open(2));
    assert!(!acc.is_open(0));
    acc.toggle(2);
    assert_eq!(acc.open_item(), None);
}

#[test]
fn accordion_ignores_unknown_items() {
    let mut acc = Accordion::new(2);
    acc.toggle(1);
    acc.toggle(5);
    assert_eq!(acc.open_item(), Some(1));
    acc.close_all();
    assert_eq!(acc.open_item(), None);
}

#[test]
fn nav_menu_toggles_and_closes() {
    let mut menu = NavMenu::default();
    assert!(menu.toggle());
    assert!(menu.is_open());
    menu.close();
    menu.close();
    assert!(!menu.is_open());
    assert!(menu.toggle());
}

#[test]
fn dropdowns_toggle_independently() {
    let mut d = Dropdowns::default();
    assert!(d.toggle(1));
    assert!(d.toggle(4));
    assert_eq!(d.open_count(), 2);
    assert!(!d.toggle(1));
    assert!(!d.is_open(1));
    assert!(d.is_open(4));

    let mut closed = d.close_all();
    closed.sort_unstable();
    assert_eq!(closed, vec![4]);
    assert!(d.close_all().is_empty());
}

#[test]
fn submenus_only_toggle_on_narrow_viewports() {
    assert!(submenu_toggles_at(375.0));
    assert!(submenu_toggles_at(768.0));
    assert!(!submenu_toggles_at(769.0));
}

#[test]
fn counter_finishes_exactly_on_target() {
    let mut c = Counter::new(1500.0);
    let mut last = String::new();
    let mut ticks = 0;
    while !c.is_done() {
        last = c.tick();
        ticks += 1;
        assert!(ticks <= 200, "counter never finished");
    }
    assert_eq!(last, "1,500");
    assert_eq!(c.current(), 1500.0);
    assert_eq!(ticks, 125);
    // further ticks are stable
    assert_eq!(c.tick(), "1,500");
}

#[test]
fn counter_values_rise_monotonically() {
    let mut c = Counter::with_duration(99.0, 160.0);
    let mut prev = 0.0;
    for _ in 0..10 {
        c.tick();
        assert!(c.current() >= prev);
        prev = c.current();
    }
    assert!(c.is_done());
}

#[test]
fn decimal_targets_keep_one_place() {
    let mut c = Counter::with_duration(4.5, 16.0);
    assert_eq!(c.tick(), "4.5");
}

#[test]
fn zero_target_finishes_after_one_tick() {
    let mut c = Counter::new(0.0);
    assert!(!c.is_done());
    assert_eq!(c.tick(), "0");
    assert!(c.is_done());
}

#[test]
fn stat_targets_read_the_leading_integer() {
    assert_eq!(parse_target("150+"), Some(150.0));
    assert_eq!(parse_target("4.9"), Some(4.0));
    assert_eq!(parse_target(" 2,500"), Some(2.0));
    assert_eq!(parse_target("-12px"), Some(-12.0));
    assert_eq!(parse_target("+7"), Some(7.0));
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("-"), None);
}

#[test]
fn suffixed_target_still_counts_to_its_number() {
    let target = parse_target("150+").unwrap();
    let mut c = Counter::new(target);
    let mut last = String::new();
    while !c.is_done() {
        last = c.tick();
    }
    assert_eq!(last, "150");
}

#[test]
fn grouped_formatting() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(1000), "1,000");
    assert_eq!(format_grouped(1234567), "1,234,567");
    assert_eq!(format_grouped(-45000), "-45,000");
}

#[test]
fn navbar_turns_solid_past_one_hundred_pixels() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(100.0));
    assert!(navbar_scrolled(100.5));
}

#[test]
fn hero_drifts_and_fades_with_scroll() {
    let top = hero_parallax(0.0);
    assert_eq!(top.translate_y, 0.0);
    assert_eq!(top.opacity, 1.0);

    let mid = hero_parallax(350.0);
    assert_eq!(mid.translate_y, 175.0);
    assert!((mid.opacity - 0.5).abs() < 1e-9);

    assert_eq!(hero_parallax(2000.0).opacity, 0.0);
}

#[test]
fn ripple_is_relative_to_button() {
    assert_eq!(ripple_origin(150.0, 420.0, 100.0, 400.0), [50.0, 20.0]);
}

#[test]
fn glitch_fires_rarely() {
    let mut rng = StdRng::seed_from_u64(3);
    let fired = (0..10_000).filter(|_| glitch_fires(&mut rng)).count();
    assert!(fired > 100 && fired < 350, "fired {fired} times");
}
