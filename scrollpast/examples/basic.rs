// Example: minimal usage, driving the controller with a scripted scroll trace.
use scrollpast::{ControllerOptions, ViewportSample, VisibilityController};

fn sample(pos: f64) -> ViewportSample {
    ViewportSample {
        scroll_position: pos,
        viewport_height: 600.0,
        content_height: 4000.0,
        element_height: 80.0,
    }
}

fn main() {
    let mut c = VisibilityController::new(
        ControllerOptions::new()
            .with_appear_offset(40.0)
            .with_multiplier(1.5),
    );

    // Attachment: one immediate computation for the initial state.
    c.on_scroll(sample(0.0), 0);

    let mut now = 0;
    for pos in [20.0, 60.0, 120.0, 300.0, 260.0, 180.0, 40.0] {
        now += 16;
        if let Some(update) = c.on_scroll(sample(pos), now) {
            println!(
                "pos={pos:>5} visibility={:.2} offset={:>7.1}px animate={}",
                update.visibility, update.offset, update.animate
            );
        }
    }
    println!("range={:?}", c.scroll_range());
}
