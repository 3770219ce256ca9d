use carousel::{Carousel, CarouselEvent, CarouselOptions, CommitThreshold, Keyed};

fn main() {
    // A hero banner: 6 slides, one per view, autoplay every 5s, clamp at the ends.
    let slides: Vec<_> = (0..6u32)
        .map(|i| Keyed::new(i, format!("banner-{i}.webp")))
        .collect();
    let opts = CarouselOptions::new(CommitThreshold::Pixels(50.0))
        .with_autoplay_interval_ms(5_000)
        .with_on_change(Some(|c: &Carousel<Keyed<u32, String>>, e: CarouselEvent| {
            println!(
                "event={e:?} counter={} prev={} next={}",
                c.counter(),
                c.can_scroll_prev(),
                c.can_scroll_next()
            );
        }));

    let mut c = Carousel::new(slides, opts);
    c.mount(0);

    // Simulate a 60fps host loop for 16 seconds.
    let mut now_ms = 0u64;
    while now_ms < 16_000 {
        now_ms += 16;
        c.tick(now_ms);
    }

    // User presses the "previous" arrow; the next automatic advance is a full interval away.
    c.previous(now_ms);
    println!(
        "after previous: index={} next_deadline={:?}",
        c.index(),
        c.next_autoplay_deadline()
    );

    // A swipe to the left past the threshold moves forward one page.
    c.on_drag_start(300.0);
    c.on_drag_move(260.0);
    let outcome = c.on_drag_end(220.0, now_ms + 500);
    println!("drag outcome={outcome:?} index={}", c.index());

    c.unmount();
    println!("unmounted: tick moves={}", c.tick(now_ms + 60_000));
}
