// Example: a frame loop painting a carousel through the tween-backed controller.
use slidekit::SliderOptions;
use slidekit_adapter::Controller;

fn main() {
    let mut c = Controller::new(SliderOptions::carousel(3).with_viewport_width(300.0));
    c.next(0);

    let mut now_ms = 0u64;
    while now_ms <= 400 {
        let offset = c.tick(now_ms);
        let mut painted = Vec::new();
        c.for_each_visible_slide(|s| painted.push((s.index, s.x)));
        println!("t={now_ms}ms offset={offset:.1} slides={painted:?}");
        now_ms += 16;
    }

    // New data arrives: keep the same slide selected by key.
    let old_keys = ["a", "b", "c"];
    let new_keys = ["z", "b", "c", "d"];
    let kept = c.replace_slides(
        new_keys.len(),
        |i| old_keys[i],
        |k| new_keys.iter().position(|n| n == k),
    );
    println!("kept={kept} index={}", c.index());
}
