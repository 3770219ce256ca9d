use carousel::{CarouselOptions, CommitThreshold, Keyed};
use carousel_adapter::{Controller, Easing};

fn main() {
    // Example: a controller driving slide transitions without holding any UI objects.
    //
    // An adapter would:
    // - forward container resizes and pointer events
    // - call tick(now_ms) in a frame loop / timer
    // - translate the slide strip by the returned track offset
    let slides: Vec<_> = (0..5u32).map(|i| Keyed::new(i, ())).collect();
    let opts = CarouselOptions::new(CommitThreshold::Fraction(0.15))
        .with_looping(true)
        .with_autoplay_interval_ms(2_000);
    let mut c = Controller::new(slides, opts)
        .with_transition(240, Easing::EaseInOutCubic)
        .with_resize_debounce_ms(120);

    c.on_viewport_width(360, 0);
    c.mount(0);

    let mut now_ms = 0u64;
    while now_ms < 6_000 {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} index={} off={off:.1}", c.carousel().index());
            }
        }

        // Simulate a swipe to the right at ~3s.
        if (3_000..3_016).contains(&now_ms) {
            c.on_drag_start(100.0);
            c.on_drag_move(140.0);
            let outcome = c.on_drag_end(190.0, now_ms);
            println!("t={now_ms} swipe={outcome:?} index={}", c.carousel().index());
        }
    }

    c.unmount();
    println!("done: index={}", c.carousel().index());
}
