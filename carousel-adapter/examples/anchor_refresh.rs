use carousel::{Carousel, CarouselOptions, CommitThreshold, Keyed};
use carousel_adapter::{apply_anchor, capture_anchor};

fn main() {
    // Example: a "hot deals" row refetches and fresh deals arrive at the front.
    let deals = |ids: &[u64]| -> Vec<Keyed<u64, String>> {
        ids.iter()
            .map(|&id| Keyed::new(id, format!("deal #{id}")))
            .collect()
    };

    let opts = CarouselOptions::new(CommitThreshold::Pixels(40.0)).with_autoplay(false);
    let mut c = Carousel::new(deals(&[10, 11, 12, 13, 14]), opts);
    c.go_to(3, 0);
    println!("before: index={} showing={:?}", c.index(), c.visible_slides());

    let anchor = capture_anchor(&c);
    c.set_slides(deals(&[30, 31, 10, 11, 12, 13, 14]), 0);
    println!("after refresh: index={} showing={:?}", c.index(), c.visible_slides());

    if let Some(anchor) = anchor {
        apply_anchor(&mut c, &anchor, 0);
    }
    println!("anchored: index={} showing={:?}", c.index(), c.visible_slides());
}
