use carousel::{
    Breakpoint, BreakpointTable, Carousel, CarouselOptions, CommitThreshold, Keyed, Layout,
};

fn main() {
    // A cards row: 1 card on phones, 2 on tablets, 4 on desktop (advancing 2 pages at a time).
    let table = BreakpointTable::new(Layout::SINGLE)
        .with_breakpoint(Breakpoint::new(640, 2))
        .with_breakpoint(Breakpoint::new(1_024, 4).with_advance_step(2));
    let opts = CarouselOptions::new(CommitThreshold::Fraction(0.2))
        .with_autoplay(false)
        .with_looping(true)
        .with_breakpoints(table);

    let cards: Vec<_> = (0..14u32).map(|i| Keyed::new(i, ())).collect();
    let mut c = Carousel::new(cards, opts);

    for width in [375u32, 768, 1_280, 1_920, 500] {
        c.on_viewport_change(width, 0);
        c.next(0);
        let visible: Vec<u32> = c.visible_slides().iter().map(|s| s.key).collect();
        println!(
            "width={width} layout={:?} pages={} index={} visible={visible:?}",
            c.layout(),
            c.page_count(),
            c.index()
        );
        let mut dots = String::new();
        c.for_each_page(|p| dots.push(if p.page == c.index() { '●' } else { '○' }));
        println!("  {dots}");
    }
}
