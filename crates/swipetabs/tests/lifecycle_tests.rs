//! Construction, mounting, measurement and transition-lock tests.

use std::cell::RefCell;
use std::rc::Rc;

use swipetabs::{
    AnimationCompletion, AnimationKind, ComponentProps, CompletionKind, EmptyContent,
    SpringOverrides, SwipeTabsConfig, SwipeTabsError, SwipeableTabs, TabContent, TabDescriptor,
    TabsDirty, TabsEvent, TimingOverrides, TransitionState, equal_tab_bounds,
};

/// Records mount and resize calls as `"key:event:width"`.
struct Recorder {
    key: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl TabContent for Recorder {
    fn mount(&mut self, props: &ComponentProps, width: f32) {
        let extra = if props.is_empty() { "" } else { "+props" };
        self.log
            .borrow_mut()
            .push(format!("{}:mount{}:{}", self.key, extra, width));
    }

    fn resize(&mut self, width: f32) {
        self.log
            .borrow_mut()
            .push(format!("{}:resize:{}", self.key, width));
    }
}

const KEYS: [&str; 5] = ["a", "b", "c", "d", "e"];

fn recorded_tabs(log: &Rc<RefCell<Vec<String>>>) -> Vec<TabDescriptor> {
    KEYS.iter()
        .map(|&key| {
            TabDescriptor::new(
                key,
                key.to_uppercase(),
                Recorder {
                    key,
                    log: log.clone(),
                },
            )
        })
        .collect()
}

fn plain_tabs(n: usize) -> Vec<TabDescriptor> {
    (0..n)
        .map(|i| TabDescriptor::new(format!("t{i}"), format!("T{i}"), EmptyContent))
        .collect()
}

fn run_until_idle(widget: &mut SwipeableTabs) {
    for _ in 0..600 {
        if !widget.update(1.0 / 60.0) {
            break;
        }
    }
}

#[test]
fn test_eager_mounts_every_tab_at_construction() {
    let log = Rc::default();
    let widget = SwipeTabsConfig::new(recorded_tabs(&log))
        .container_width(320.0)
        .build()
        .unwrap();

    assert_eq!(widget.render_set().len(), 5);
    assert_eq!(
        *log.borrow(),
        vec!["a:mount:320", "b:mount:320", "c:mount:320", "d:mount:320", "e:mount:320"]
    );
}

#[test]
fn test_lazy_mounts_on_activation_only_once() {
    let log = Rc::default();
    let mut widget = SwipeTabsConfig::new(recorded_tabs(&log))
        .container_width(300.0)
        .lazy(true)
        .preload_adjacent_tabs(false)
        .build()
        .unwrap();
    assert_eq!(*log.borrow(), vec!["a:mount:300"]);

    widget.on_tab_pressed(3);
    run_until_idle(&mut widget);
    widget.on_tab_pressed(0);
    run_until_idle(&mut widget);
    widget.on_tab_pressed(3);

    assert_eq!(*log.borrow(), vec!["a:mount:300", "d:mount:300"]);
}

#[test]
fn test_mount_receives_props() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let tab = TabDescriptor::new(
        "x",
        "X",
        Recorder {
            key: "x",
            log: log.clone(),
        },
    )
    .props(ComponentProps::new().with("user", "ada"));

    SwipeTabsConfig::new(vec![tab]).build().unwrap();
    assert_eq!(*log.borrow(), vec!["x:mount+props:0"]);
}

#[test]
fn test_container_resize_reaches_mounted_content() {
    let log = Rc::default();
    let mut widget = SwipeTabsConfig::new(recorded_tabs(&log))
        .lazy(true)
        .build()
        .unwrap();
    log.borrow_mut().clear();

    widget.handle_event(TabsEvent::ContainerLayout { width: 400.0 });
    widget.handle_event(TabsEvent::ContainerLayout { width: 400.0 });
    assert_eq!(*log.borrow(), vec!["a:resize:400", "b:resize:400"]);
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        SwipeTabsConfig::new(Vec::new()).build().unwrap_err(),
        SwipeTabsError::EmptyTabs
    );
    assert!(matches!(
        SwipeTabsConfig::new(plain_tabs(2))
            .active_color("blue-ish")
            .build()
            .unwrap_err(),
        SwipeTabsError::InvalidColor(_)
    ));
    assert_eq!(
        SwipeTabsConfig::new(plain_tabs(2))
            .container_width(f32::NAN)
            .build()
            .unwrap_err(),
        SwipeTabsError::InvalidContainerWidth
    );
}

#[test]
fn test_animation_config_that_never_settles_is_rejected() {
    let nan_duration = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .animation_type(AnimationKind::Timing)
        .timing_config(TimingOverrides {
            duration: Some(f32::NAN),
            ..Default::default()
        })
        .build();
    assert_eq!(
        nan_duration.unwrap_err(),
        SwipeTabsError::InvalidAnimationConfig("duration")
    );

    let diverging = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .spring_config(SpringOverrides {
            damping: Some(-5.0),
            ..Default::default()
        })
        .build();
    assert_eq!(
        diverging.unwrap_err(),
        SwipeTabsError::InvalidAnimationConfig("damping")
    );

    assert_eq!(
        SwipeTabsConfig::new(plain_tabs(3))
            .tab_bar_height(-1.0)
            .build()
            .unwrap_err(),
        SwipeTabsError::InvalidTabBarHeight
    );
}

#[test]
fn test_tapping_active_tab_is_a_no_op() {
    let calls = Rc::new(RefCell::new(0));
    let counter = calls.clone();
    let mut widget = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .on_tab_change(move |_, _| *counter.borrow_mut() += 1)
        .build()
        .unwrap();
    widget.take_dirty();

    assert!(widget.on_tab_pressed(0).is_none());
    assert!(widget.on_tab_pressed(7).is_none());
    assert!(!widget.is_transitioning());
    assert!(!widget.is_animating());
    assert!(widget.take_dirty().is_empty());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_interrupted_completion_does_not_unlock() {
    let mut widget = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .build()
        .unwrap();
    widget.on_tab_pressed(2);

    let TransitionState::Transitioning { target, settle } = widget.transition_state() else {
        panic!("expected a transition in flight");
    };
    assert_eq!(target, 2);

    assert!(!widget.complete_animation(AnimationCompletion {
        handle: settle,
        kind: CompletionKind::Interrupted,
    }));
    assert!(widget.is_transitioning());
    assert!(widget.on_tab_pressed(1).is_none());

    assert!(widget.complete_animation(AnimationCompletion {
        handle: settle,
        kind: CompletionKind::Finished,
    }));
    assert!(!widget.is_transitioning());
    assert_eq!(widget.active_index(), 2);
}

#[test]
fn test_rotation_during_transition_lands_on_new_width() {
    let mut widget = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .build()
        .unwrap();
    widget.on_tab_pressed(1);
    widget.update(0.1);

    widget.handle_event(TabsEvent::ContainerLayout { width: 500.0 });
    assert!(widget.is_transitioning());
    run_until_idle(&mut widget);
    assert!(!widget.is_transitioning());
    assert_eq!(widget.content_offset(), -500.0);
}

#[test]
fn test_indicator_follows_measured_tabs() {
    let mut widget = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .build()
        .unwrap();
    for (index, bounds) in equal_tab_bounds(300.0, 3).into_iter().enumerate() {
        widget.handle_event(TabsEvent::TabLayout {
            index,
            width: bounds.width,
            x: bounds.x,
        });
    }
    assert_eq!(widget.indicator_geometry().position, 0.0);
    assert_eq!(widget.indicator_geometry().width, 100.0);

    widget.on_tab_pressed(2);
    run_until_idle(&mut widget);
    assert_eq!(widget.indicator_geometry().position, 200.0);
    assert_eq!(widget.indicator_geometry().width, 100.0);

    let frame = widget.frame();
    let indicator = frame.indicator.unwrap();
    assert_eq!(indicator.x, 200.0);
    assert_eq!(indicator.height, 2.0);
    assert!(frame.tabs[2].active);
}

#[test]
fn test_hidden_indicator_stays_put() {
    let mut widget = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .show_indicator(false)
        .build()
        .unwrap();
    widget.on_tab_measured(1, 100.0, 100.0);
    widget.on_tab_pressed(1);
    widget.update(1.0 / 60.0);
    assert!(widget.frame().indicator.is_none());
}

#[test]
fn test_icons_in_frame() {
    let widget = SwipeTabsConfig::new(vec![
        TabDescriptor::new("home", "Home", EmptyContent)
            .icon("home-outline")
            .active_icon("home-filled"),
        TabDescriptor::new("feed", "Feed", EmptyContent).icon("feed"),
        TabDescriptor::new("more", "More", EmptyContent).active_icon("dots"),
    ])
    .build()
    .unwrap();

    let frame = widget.frame();
    assert_eq!(frame.tabs[0].icon.map(|i| i.0.as_str()), Some("home-filled"));
    assert_eq!(frame.tabs[1].icon.map(|i| i.0.as_str()), Some("feed"));
    assert!(frame.tabs[2].icon.is_none());
}

#[test]
fn test_dirty_flags_track_animation() {
    let mut widget = SwipeTabsConfig::new(plain_tabs(3))
        .container_width(300.0)
        .build()
        .unwrap();
    widget.take_dirty();

    widget.on_tab_pressed(1);
    let dirty = widget.take_dirty();
    assert!(dirty.needs_content_redraw());
    assert!(dirty.needs_tab_bar_redraw());

    widget.update(1.0 / 60.0);
    assert!(widget.take_dirty().contains(TabsDirty::OFFSET));

    run_until_idle(&mut widget);
    widget.take_dirty();
    widget.update(1.0 / 60.0);
    assert!(widget.take_dirty().is_empty());
}

/// Deterministic pseudo-random event stream.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (self.next() % 10_000) as f32 / 10_000.0 * (hi - lo)
    }
}

#[test]
fn test_invariants_hold_under_random_input() {
    use swipetabs_core::math::vec2;

    for (lazy, preload) in [(false, false), (true, false), (true, true)] {
        let mut rng = Lcg(0x5eed ^ lazy as u64 ^ ((preload as u64) << 1));
        let mut widget = SwipeTabsConfig::new(plain_tabs(5))
            .container_width(300.0)
            .lazy(lazy)
            .preload_adjacent_tabs(preload)
            .build()
            .unwrap();
        let mut previous_len = widget.render_set().len();

        for _ in 0..2_000 {
            let event = match rng.next() % 7 {
                0 => TabsEvent::PanStart,
                1 | 2 => TabsEvent::PanUpdate {
                    translation: vec2(rng.range(-900.0, 900.0), 0.0),
                },
                3 => TabsEvent::PanEnd {
                    translation: vec2(rng.range(-900.0, 900.0), 0.0),
                    velocity: vec2(rng.range(-1500.0, 1500.0), 0.0),
                },
                4 => TabsEvent::TabPress {
                    index: (rng.next() % 7) as usize,
                },
                5 => TabsEvent::PanCancel,
                _ => TabsEvent::ContainerLayout {
                    width: [300.0, 300.0, 420.0][(rng.next() % 3) as usize],
                },
            };
            widget.handle_event(event);
            widget.update(rng.range(0.0, 0.05));

            let active = widget.active_index();
            assert!(active < widget.tab_count());
            assert!(widget.is_mounted(active));
            assert!(widget.render_set().len() >= previous_len);
            previous_len = widget.render_set().len();
            if !lazy {
                assert_eq!(widget.render_set().len(), 5);
            }

            // Overscroll is damped, so the track never strays far past either end
            let offset = widget.content_offset();
            assert!(offset.is_finite());
            assert!(offset < 500.0);
            assert!(offset > -4.0 * 420.0 - 500.0);
        }
    }
}
