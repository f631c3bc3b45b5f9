// Example: a simulated sticky header — scroll events are forwarded to a
// binding, visual writes are coalesced to one per frame, and the idle snap
// animates through eased intermediate offsets.
use std::cell::Cell;
use std::rc::Rc;

use scrollpast_adapter::{
    AttachOptions, Binding, ElementNode, FrameScheduler, Overflow, Viewport,
};

#[derive(Clone)]
struct Header;

impl ElementNode for Header {
    fn parent(&self) -> Option<Self> {
        None
    }

    fn height(&self) -> f64 {
        64.0
    }

    fn overflow(&self) -> Overflow {
        Overflow::Visible
    }
}

#[derive(Clone)]
struct Page {
    pos: Rc<Cell<f64>>,
}

impl Viewport for Page {
    fn scroll_position(&self) -> f64 {
        self.pos.get()
    }

    fn height(&self) -> f64 {
        800.0
    }

    fn content_height(&self) -> f64 {
        4000.0
    }
}

fn main() {
    let page = Page {
        pos: Rc::new(Cell::new(0.0)),
    };
    let mut scheduler = FrameScheduler::new();
    let mut binding = Binding::attach(
        Header,
        page.clone(),
        1,
        AttachOptions::new(),
        0,
        &mut scheduler,
    );

    // A scroll burst, three events per 16ms frame.
    let mut now = 0;
    for chunk in [[10.0, 22.0, 35.0], [48.0, 55.0, 80.0], [120.0, 150.0, 200.0]] {
        for pos in chunk {
            page.pos.set(pos);
            binding.notify_scroll(now, &mut scheduler);
            now += 5;
        }
        scheduler.run_frame(|_, u| {
            println!("t={now:>4}ms frame write: offset={:>7.2}px", u.offset);
        });
    }

    // Go idle: frames keep ticking until the session ends and any snap
    // transition finishes.
    page.pos.set(170.0);
    binding.notify_scroll(now, &mut scheduler);
    for _ in 0..60 {
        now += 16;
        binding.tick(now, &mut scheduler);
        scheduler.run_frame(|_, u| {
            println!(
                "t={now:>4}ms frame write: offset={:>7.2}px animate={}",
                u.offset, u.animate
            );
        });
    }
    println!("settled: visibility={:.0}", binding.controller().visibility());
}
