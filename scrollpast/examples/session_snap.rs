// Example: session lifecycle — after the scroll burst goes idle, a half-way
// visibility snaps to the nearer terminal with an animated transition.
use scrollpast::{ControllerOptions, ViewportSample, VisibilityController};

fn sample(pos: f64) -> ViewportSample {
    ViewportSample {
        scroll_position: pos,
        viewport_height: 600.0,
        content_height: 4000.0,
        element_height: 100.0,
    }
}

fn main() {
    let mut c = VisibilityController::new(ControllerOptions::new().with_scroll_timeout_ms(200));
    c.on_scroll(sample(0.0), 0);

    // A burst that ends deep in the content with the element 30% visible.
    c.on_scroll(sample(50.0), 16);
    c.on_scroll(sample(100.0), 32);
    c.on_scroll(sample(400.0), 48);
    c.on_scroll(sample(370.0), 64);
    println!("after burst: visibility={:.2}", c.visibility());

    // Idle for scroll_timeout_ms: the session ends and the snap fires.
    let mut now = 64;
    loop {
        now += 16;
        if let Some(update) = c.tick(sample(370.0), now) {
            println!(
                "t={now}ms snap to visibility={:.0} (animated={})",
                update.visibility, update.animate
            );
        }
        if now > 232 && !c.is_animating() {
            break;
        }
    }
    println!("settled: visibility={:.0}", c.visibility());
}
