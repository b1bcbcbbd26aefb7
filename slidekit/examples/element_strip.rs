// Example: a variable-width chip strip with measured widths and rubber-banding.
use slidekit::{SliderEngine, SliderOptions};

fn main() {
    let chips = ["All", "Shoes", "Outerwear", "Bags", "Accessories", "Sale", "New in"];

    let mut engine = SliderEngine::headless(SliderOptions::strip(chips.len()).with_gap(8.0));
    engine.handle_resize(320.0);

    // The host measures each chip once it is laid out.
    for (i, chip) in chips.iter().enumerate() {
        engine.measure(i, 24.0 + 9.0 * chip.len() as f32);
    }
    println!(
        "content={} max_offset={} reachable={}",
        engine.position().content_width(),
        engine.position().min_offset(),
        engine.dot_count()
    );

    // Drag past the left edge: the strip follows at half speed.
    engine.begin_drag(100.0, 0);
    engine.drag_move(180.0, 200);
    println!("rubber-banded offset: {}", engine.offset());
    engine.end_drag(180.0, 216);
    engine.tick(600);

    while engine.next(0) {
        engine.tick(1_000);
        println!("index={} offset={}", engine.index(), engine.offset());
    }
}
