// Host-side tests for carousel navigation state.

use plexus_core::widgets::*;

#[test]
fn arrow_keys_map_to_slide_steps() {
    assert_eq!(carousel_step_for_key("ArrowLeft"), Some(SlideStep::Prev));
    assert_eq!(carousel_step_for_key("ArrowRight"), Some(SlideStep::Next));
    assert_eq!(carousel_step_for_key("ArrowUp"), None);
    assert_eq!(carousel_step_for_key("a"), None);
}

#[test]
fn manual_navigation_stops_at_both_ends() {
    let mut c = Carousel::new(3);
    assert!(!c.prev());
    assert_eq!(c.index(), 0);
    assert!(c.next());
    assert!(c.next());
    assert!(!c.next());
    assert_eq!(c.index(), 2);
    assert!(c.step(SlideStep::Prev));
    assert_eq!(c.index(), 1);
}

#[test]
fn go_to_ignores_out_of_range() {
    let mut c = Carousel::new(4);
    assert!(c.go_to(3));
    assert_eq!(c.index(), 3);
    assert!(!c.go_to(4));
    assert_eq!(c.index(), 3);
}

#[test]
fn auto_advance_wraps_and_respects_pause() {
    let mut c = Carousel::new(3);
    let seen: Vec<usize> = (0..4)
        .map(|_| {
            c.auto_advance();
            c.index()
        })
        .collect();
    assert_eq!(seen, vec![1, 2, 0, 1]);

    c.set_paused(true);
    assert!(!c.auto_advance());
    assert_eq!(c.index(), 1);
    c.set_paused(false);
    assert!(c.auto_advance());
    assert_eq!(c.index(), 2);
}

#[test]
fn empty_carousel_never_moves() {
    let mut c = Carousel::new(0);
    assert!(!c.auto_advance());
    assert!(!c.next());
    assert!(!c.go_to(0));
    assert_eq!(c.index(), 0);
}

#[test]
fn swipe_needs_more_than_fifty_pixels() {
    let mut c = Carousel::new(3);
    assert!(!c.swipe(200.0, 150.0));
    assert_eq!(c.index(), 0);
    assert!(c.swipe(200.0, 149.0));
    assert_eq!(c.index(), 1);
    // rightward swipe goes back
    assert!(c.swipe(100.0, 180.0));
    assert_eq!(c.index(), 0);
}

#[test]
fn buttons_dim_at_the_ends() {
    let mut c = Carousel::new(2);
    assert_eq!(c.prev_button_opacity(), 0.5);
    assert_eq!(c.next_button_opacity(), 1.0);
    c.next();
    assert_eq!(c.prev_button_opacity(), 1.0);
    assert_eq!(c.next_button_opacity(), 0.5);
}

#[test]
fn track_offset_and_indicators_follow_index() {
    let mut c = Carousel::new(5);
    c.go_to(2);
    assert_eq!(c.track_offset(320.0), 640.0);
    assert!(c.indicator_active(2));
    assert!(!c.indicator_active(0));
}
