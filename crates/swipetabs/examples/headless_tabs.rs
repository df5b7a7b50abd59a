//! Headless Tabs Example - Driving the widget from a scripted input stream
//!
//! This example plays a recorded sequence of host events into a widget and
//! prints the state the host would draw after each step:
//! - Layout measurement of the container and the tab bar
//! - A slow drag, a fast flick and a drag that snaps back
//! - A tap that arrives while a transition is still settling
//!
//! Run with `RUST_LOG=swipetabs=trace` to see every gesture decision.
//! puffin_viewer can attach on 127.0.0.1:8585 while the example runs.

use swipetabs::{ComponentProps, SwipeTabsConfig, TabContent, TabDescriptor, TabsEvent};
use swipetabs_core::logging;
use swipetabs_core::math::vec2;
use swipetabs_core::profiling::{ProfilingBackend, init_profiling, new_frame};

const WIDTH: f32 = 390.0;
const FRAME: f32 = 1.0 / 60.0;

struct Page {
    name: &'static str,
}

impl TabContent for Page {
    fn mount(&mut self, props: &ComponentProps, width: f32) {
        tracing::info!(page = self.name, width, props = props.len(), "Page mounted");
    }

    fn resize(&mut self, width: f32) {
        tracing::info!(page = self.name, width, "Page resized");
    }
}

fn main() {
    logging::init();
    init_profiling(ProfilingBackend::PuffinHttp);

    let tabs = vec![
        TabDescriptor::new("home", "Home", Page { name: "home" }).icon("home"),
        TabDescriptor::new("search", "Search", Page { name: "search" }).icon("search"),
        TabDescriptor::new("inbox", "Inbox", Page { name: "inbox" })
            .icon("inbox")
            .active_icon("inbox-open")
            .props(ComponentProps::new().with("unread", 3i64)),
        TabDescriptor::new("me", "Me", Page { name: "me" }),
    ];

    let mut widget = match SwipeTabsConfig::new(tabs)
        .active_color("#1e88e5")
        .inactive_color("#9e9e9e")
        .lazy(true)
        .on_tab_change(|index, key| tracing::info!(index, key, "Tab changed"))
        .build()
    {
        Ok(widget) => widget,
        Err(e) => {
            tracing::error!("Failed to build tabs: {}", e);
            return;
        }
    };

    let mut script = vec![TabsEvent::ContainerLayout { width: WIDTH }];
    for (index, bounds) in swipetabs::equal_tab_bounds(WIDTH, widget.tab_count())
        .into_iter()
        .enumerate()
    {
        script.push(TabsEvent::TabLayout {
            index,
            width: bounds.width,
            x: bounds.x,
        });
    }
    script.extend(drag(-220.0, -150.0));
    script.extend(drag(-60.0, -1100.0));
    script.extend(drag(50.0, 120.0));
    script.push(TabsEvent::TabPress { index: 0 });
    script.push(TabsEvent::TabPress { index: 3 });

    for event in script {
        if let Some(change) = widget.handle_event(event) {
            tracing::info!(
                from = change.previous,
                to = change.index,
                mounted = ?change.mounted,
                "Accepted"
            );
        }

        // Let transitions settle before the next scripted input, except for
        // the final tap pair which exercises the lock.
        if !matches!(event, TabsEvent::TabPress { index: 0 }) {
            let mut frames = 0;
            while widget.update(FRAME) {
                new_frame();
                frames += 1;
            }
            if frames > 0 {
                report(&widget, frames);
            }
        }
    }
}

fn drag(dx: f32, vx: f32) -> [TabsEvent; 4] {
    [
        TabsEvent::PanStart,
        TabsEvent::PanUpdate {
            translation: vec2(dx * 0.5, 0.0),
        },
        TabsEvent::PanUpdate {
            translation: vec2(dx, 0.0),
        },
        TabsEvent::PanEnd {
            translation: vec2(dx, 0.0),
            velocity: vec2(vx, 0.0),
        },
    ]
}

fn report(widget: &swipetabs::SwipeableTabs, frames: usize) {
    let frame = widget.frame();
    let labels: Vec<_> = frame
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                t.label.to_string()
            }
        })
        .collect();
    let visible: Vec<_> = frame.visible_pages().map(|p| p.key).collect();

    println!(
        "settled in {:>3} frames | offset {:>7.1} | {} | visible {:?} | indicator {:?}",
        frames,
        frame.content_offset,
        labels.join(" "),
        visible,
        frame.indicator.map(|i| (i.x, i.width)),
    );
}
