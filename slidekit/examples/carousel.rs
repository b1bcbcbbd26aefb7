// Example: a looping image carousel driven by a headless host.
use slidekit::{PointerEvent, SliderEngine, SliderOptions};

fn main() {
    let images = ["sunrise.jpg", "harbor.jpg", "market.jpg", "dunes.jpg"];

    let mut engine = SliderEngine::headless(
        SliderOptions::carousel(images.len())
            .with_viewport_width(360.0)
            .with_autoplay(true)
            .with_autoplay_interval_ms(2_000)
            .with_on_index_change(Some(|change: slidekit::IndexChange| {
                println!(
                    "index {} -> {} ({:?})",
                    change.previous, change.current, change.cause
                );
            })),
    );

    // A quick flick to the left.
    engine.handle_pointer(PointerEvent::begin(300.0, 0));
    engine.handle_pointer(PointerEvent::moved(270.0, 16));
    engine.handle_pointer(PointerEvent::end(240.0, 32));

    // Simulate a 60fps host for ten seconds; the host has no transition events, so `tick`
    // settles each move once its duration has elapsed.
    let mut now_ms = 32u64;
    while now_ms < 10_000 {
        now_ms += 16;
        engine.tick(now_ms);
    }

    engine.for_each_visible_slide(|slide| {
        println!(
            "paint {} at x={} (slot {}, clone: {})",
            images[slide.index], slide.x, slide.slot, slide.is_clone
        );
    });
}
