use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use carousel::{
    Breakpoint, BreakpointTable, Carousel, CarouselEvent, CarouselOptions, ChangeReason,
    CommitThreshold, DragOutcome, Keyed, Layout,
};
use std::sync::Mutex;

type Card = Keyed<u64, ()>;

fn cards(keys: impl IntoIterator<Item = u64>) -> Vec<Card> {
    keys.into_iter().map(|k| Keyed::new(k, ())).collect()
}

fn options() -> CarouselOptions<Card> {
    CarouselOptions::new(CommitThreshold::Pixels(50.0)).with_autoplay(false)
}

#[test]
fn anchor_keeps_slide_in_view_across_prepend() {
    let mut c = Carousel::new(cards(100..110), options());
    c.go_to(3, 0);
    let anchor = capture_anchor(&c).unwrap();
    assert_eq!(anchor.key, 103);

    // Prepend 2 fresh items: old items shift by +2 indexes.
    c.set_slides(cards([200, 201].into_iter().chain(100..110)), 0);
    assert_eq!(c.index(), 3);

    assert!(apply_anchor(&mut c, &anchor, 0));
    assert_eq!(c.index(), 5);
    assert_eq!(c.visible_slides()[0].key, 103);
}

#[test]
fn anchor_uses_pages_in_windowed_mode() {
    let table = BreakpointTable::new(Layout::new(3, 1));
    let mut c = Carousel::new(cards(0..9), options().with_breakpoints(table));
    c.go_to(1, 0);
    let anchor = capture_anchor(&c).unwrap();
    assert_eq!(anchor.key, 3);

    c.set_slides(cards([90, 91, 92, 93].into_iter().chain(0..9)), 0);
    assert!(apply_anchor(&mut c, &anchor, 0));
    assert_eq!(c.index(), 2);
}

#[test]
fn empty_carousel_has_no_anchor() {
    let c = Carousel::new(cards([]), options());
    assert!(capture_anchor(&c).is_none());
}

#[test]
fn replace_slides_delivers_events_after_anchoring() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let opts = options().with_on_change(Some(move |c: &Carousel<Card>, e: CarouselEvent| {
        sink.lock().unwrap().push((e, c.index()));
    }));
    let mut ctl = Controller::new(cards(100..110), opts);
    ctl.go_to(3, 0);
    log.lock().unwrap().clear();

    assert!(ctl.replace_slides(cards([200, 201].into_iter().chain(100..110)), 0));
    assert_eq!(ctl.carousel().index(), 5);

    let log = log.lock().unwrap();
    // Every event observes the final state, since delivery waits for the batch to close.
    assert!(log.iter().all(|(_, index)| *index == 5));
    assert_eq!(
        log.last().map(|(e, _)| *e),
        Some(CarouselEvent::IndexChanged {
            from: 3,
            to: 5,
            reason: ChangeReason::GoTo,
        })
    );
}

#[test]
fn replace_slides_clamps_when_anchor_is_gone() {
    let mut ctl = Controller::new(cards(0..10), options());
    ctl.go_to(8, 0);
    assert!(!ctl.replace_slides(cards(50..54), 0));
    assert_eq!(ctl.carousel().index(), 3);
}

#[test]
fn viewport_width_is_debounced() {
    let table = BreakpointTable::single().with_breakpoint(Breakpoint::new(800, 4));
    let mut ctl = Controller::new(cards(0..12), options().with_breakpoints(table))
        .with_resize_debounce_ms(100);

    assert!(!ctl.on_viewport_width(1_000, 0));
    assert!(ctl.has_pending_resize());
    assert_eq!(ctl.carousel().page_count(), 12);

    ctl.tick(50);
    assert_eq!(ctl.carousel().page_count(), 12);

    // A newer width restarts the wait.
    ctl.on_viewport_width(1_200, 60);
    ctl.tick(120);
    assert!(ctl.has_pending_resize());
    ctl.tick(160);
    assert!(!ctl.has_pending_resize());
    assert_eq!(ctl.carousel().page_count(), 3);
    assert_eq!(ctl.carousel().viewport_width(), 1_200);
}

#[test]
fn viewport_width_applies_immediately_without_debounce() {
    let table = BreakpointTable::single().with_breakpoint(Breakpoint::new(800, 4));
    let mut ctl = Controller::new(cards(0..12), options().with_breakpoints(table));
    assert!(ctl.on_viewport_width(1_000, 0));
    assert_eq!(ctl.carousel().page_count(), 3);
}

#[test]
fn navigation_animates_track_offset() {
    let mut ctl = Controller::new(cards(0..5), options()).with_transition(300, Easing::Linear);
    ctl.on_viewport_width(400, 0);

    assert!(ctl.next(0));
    assert!(ctl.is_animating());
    assert_eq!(ctl.tick(150), Some(200.0));
    assert_eq!(ctl.tick(300), Some(400.0));
    assert!(!ctl.is_animating());
    assert_eq!(ctl.tick(310), None);
    assert_eq!(ctl.track_offset(310), 400.0);
}

#[test]
fn zero_duration_transition_snaps() {
    let mut ctl = Controller::new(cards(0..5), options()).with_transition(0, Easing::Linear);
    ctl.on_viewport_width(400, 0);
    ctl.go_to(2, 0);
    assert!(!ctl.is_animating());
    assert_eq!(ctl.track_offset(0), 800.0);
}

#[test]
fn autoplay_tick_starts_a_transition() {
    let opts = options()
        .with_autoplay(true)
        .with_autoplay_interval_ms(1_000);
    let mut ctl = Controller::new(cards(0..5), opts).with_transition(200, Easing::Linear);
    ctl.on_viewport_width(400, 0);
    ctl.mount(0);

    assert_eq!(ctl.tick(999), None);
    assert_eq!(ctl.tick(1_000), Some(0.0));
    assert_eq!(ctl.carousel().index(), 1);
    assert_eq!(ctl.tick(1_200), Some(400.0));
    assert_eq!(ctl.tick(1_250), None);
}

#[test]
fn drag_tracks_pointer_and_settles_on_the_new_page() {
    let mut ctl = Controller::new(cards(0..5), options()).with_transition(100, Easing::Linear);
    ctl.on_viewport_width(400, 0);

    ctl.on_drag_start(300.0);
    ctl.on_drag_move(250.0);
    assert_eq!(ctl.track_offset(0), 50.0);

    assert_eq!(ctl.on_drag_end(200.0, 0), DragOutcome::Next);
    assert_eq!(ctl.carousel().index(), 1);
    assert_eq!(ctl.tick(0), Some(100.0));
    assert_eq!(ctl.tick(100), Some(400.0));
}

#[test]
fn drag_cancel_springs_back() {
    let mut ctl = Controller::new(cards(0..5), options()).with_transition(100, Easing::Linear);
    ctl.on_viewport_width(400, 0);

    ctl.on_drag_start(300.0);
    ctl.on_drag_move(280.0);
    ctl.on_drag_cancel(0);
    assert_eq!(ctl.carousel().index(), 0);
    assert_eq!(ctl.tick(0), Some(20.0));
    assert_eq!(ctl.tick(100), Some(0.0));
}

#[test]
fn unmount_drops_transition_and_pending_resize() {
    let mut ctl = Controller::new(cards(0..5), options().with_autoplay(true))
        .with_resize_debounce_ms(100);
    ctl.mount(0);
    ctl.on_viewport_width(400, 0);
    ctl.next(0);
    ctl.unmount();

    assert!(!ctl.is_animating());
    assert!(!ctl.has_pending_resize());
    assert_eq!(ctl.tick(10_000), None);
    assert!(!ctl.next(10_000));
}

#[test]
fn tween_retarget_starts_from_current_sample() {
    let mut tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(tween.sample(50), 50.0);
    tween.retarget(50, 0.0, 100);
    assert_eq!(tween.from, 50.0);
    assert_eq!(tween.sample(150), 0.0);
    assert!(tween.is_done(150));
}

#[test]
fn easings_hit_their_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(0.5), 0.5);
    }
}
