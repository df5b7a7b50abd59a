//! The swipeable tabs widget.

use swipetabs_core::alloc::{HashMap, HashSet};
use swipetabs_core::profiling::profile_function;
use tracing::{debug, trace, warn};

use crate::animation::AnimationCompletion;
use crate::config::{SwipeTabsConfig, TabBarStyle, TabChangeCallback};
use crate::dirty::TabsDirty;
use crate::error::{SwipeTabsError, SwipeTabsResult};
use crate::event::TabsEvent;
use crate::frame::{IndicatorFrame, PageSlot, TabBarItem, TabsFrame};
use crate::gesture::{GestureInterpreter, GestureOutcome};
use crate::indicator::{IndicatorEngine, IndicatorGeometry};
use crate::layout::{ContainerChange, LayoutTracker};
use crate::render_set::RenderSet;
use crate::tab::{TabDescriptor, TabKey};
use crate::transition::{TabChange, TransitionContext, TransitionController, TransitionState};

/// A horizontally paged content area with a synchronized tab bar.
///
/// The host forwards layout, drag and tap input (see [`TabsEvent`]), calls
/// [`update`](Self::update) once per frame, and draws the [`TabsFrame`].
///
/// # Example
/// ```
/// use swipetabs::{EmptyContent, SwipeTabsConfig, TabDescriptor, TabsEvent};
///
/// let mut tabs = SwipeTabsConfig::new(vec![
///     TabDescriptor::new("home", "Home", EmptyContent),
///     TabDescriptor::new("profile", "Profile", EmptyContent),
/// ])
/// .build()
/// .unwrap();
///
/// tabs.handle_event(TabsEvent::ContainerLayout { width: 360.0 });
/// let change = tabs.handle_event(TabsEvent::TabPress { index: 1 });
/// assert_eq!(change.map(|c| c.index), Some(1));
///
/// while tabs.update(1.0 / 60.0) {}
/// assert_eq!(tabs.content_offset(), -360.0);
/// ```
pub struct SwipeableTabs {
    tabs: Vec<TabDescriptor>,
    key_index: HashMap<TabKey, usize>,
    layout: LayoutTracker,
    indicator: IndicatorEngine,
    render_set: RenderSet,
    controller: TransitionController,
    gesture: GestureInterpreter,
    style: TabBarStyle,
    on_tab_change: Option<TabChangeCallback>,
    dirty: TabsDirty,
}

impl SwipeableTabs {
    /// Validate `config` and mount the initial pages.
    pub fn new(config: SwipeTabsConfig) -> SwipeTabsResult<Self> {
        if config.tabs.is_empty() {
            return Err(SwipeTabsError::EmptyTabs);
        }

        let mut seen = HashSet::new();
        for tab in &config.tabs {
            if !seen.insert(tab.key().as_str()) {
                return Err(SwipeTabsError::DuplicateTabKey(tab.key().to_string()));
            }
        }

        let style = config.resolve_style()?;
        let behavior = config.resolve_behavior()?;
        let container_width = config.validated_container_width()?;

        let tab_count = config.tabs.len();
        let initial = if config.initial_tab < tab_count {
            config.initial_tab
        } else {
            warn!(
                initial_tab = config.initial_tab,
                tab_count, "Initial tab out of range, clamping to last tab"
            );
            tab_count - 1
        };

        let key_index = config
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| (tab.key().clone(), i))
            .collect();

        let mut widget = Self {
            tabs: config.tabs,
            key_index,
            layout: LayoutTracker::new(tab_count),
            indicator: IndicatorEngine::new(style.show_indicator),
            render_set: RenderSet::new(tab_count, initial, behavior.lazy, behavior.preload_adjacent),
            controller: TransitionController::new(tab_count, initial, behavior.animation),
            gesture: GestureInterpreter::new(behavior.swipe_enabled),
            style,
            on_tab_change: config.on_tab_change,
            dirty: TabsDirty::all(),
        };

        if let Some(width) = container_width {
            widget.layout.set_container_width(width);
            widget.controller.relayout(&widget.layout);
        }
        for index in widget.render_set.indices() {
            widget.tabs[index].mount_content(widget.layout.container_width());
        }

        debug!(tab_count, initial, lazy = behavior.lazy, "Swipeable tabs created");
        Ok(widget)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn active_key(&self) -> &TabKey {
        self.tabs[self.controller.active_index()].key()
    }

    /// Index of the tab with `key`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.key_index.get(&TabKey::new(key)).copied()
    }

    /// True while a tab change is settling; new changes are dropped meanwhile.
    pub fn is_transitioning(&self) -> bool {
        self.controller.is_locked()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.controller.state()
    }

    pub fn content_offset(&self) -> f32 {
        self.controller.offset()
    }

    pub fn indicator_geometry(&self) -> IndicatorGeometry {
        self.indicator.geometry()
    }

    pub fn render_set(&self) -> &RenderSet {
        &self.render_set
    }

    pub fn is_mounted(&self, index: usize) -> bool {
        self.render_set.contains(index)
    }

    pub fn layout(&self) -> &LayoutTracker {
        &self.layout
    }

    pub fn container_width(&self) -> f32 {
        self.layout.container_width()
    }

    pub fn style(&self) -> &TabBarStyle {
        &self.style
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// True while any animated value is moving.
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating() || self.indicator.is_animating()
    }

    /// Take the accumulated change flags, resetting them.
    pub fn take_dirty(&mut self) -> TabsDirty {
        std::mem::replace(&mut self.dirty, TabsDirty::empty())
    }

    /// Record the content container width.
    ///
    /// The first measurement places the content at the active page. Later
    /// measurements (rotation) re-derive the resting offset.
    pub fn on_container_measured(&mut self, width: f32) {
        match self.layout.set_container_width(width) {
            ContainerChange::Ignored => {
                trace!(width, "Ignoring invalid container width");
            }
            ContainerChange::Unchanged => {}
            change => {
                debug!(width, ?change, "Container measured");
                self.controller.relayout(&self.layout);
                self.gesture.relayout(change, &self.controller, &self.layout);
                for index in self.render_set.indices() {
                    self.tabs[index].resize_content(width);
                }
                self.dirty |= TabsDirty::LAYOUT | TabsDirty::OFFSET;
            }
        }
    }

    /// Record the bounds of tab bar entry `index`.
    ///
    /// Measuring the active tab places the indicator on it without animating.
    pub fn on_tab_measured(&mut self, index: usize, width: f32, x: f32) {
        if !self.layout.record_tab(index, width, x) {
            trace!(index, "Ignoring tab layout");
            return;
        }
        if index == self.controller.active_index() {
            self.indicator.set_resting(IndicatorGeometry { position: x, width });
            self.dirty |= TabsDirty::INDICATOR;
        }
        self.dirty |= TabsDirty::LAYOUT;
    }

    /// Ask to make `index` the active tab.
    ///
    /// Dropped when out of range, already active, or while a transition settles.
    pub fn request_change(&mut self, index: usize) -> Option<TabChange> {
        let result = self.controller.request_change(
            index,
            TransitionContext {
                layout: &self.layout,
                indicator: &mut self.indicator,
                render_set: &mut self.render_set,
            },
        );
        let change = result.ok()?;
        self.commit(&change);
        Some(change)
    }

    /// A tab bar entry was tapped.
    pub fn on_tab_pressed(&mut self, index: usize) -> Option<TabChange> {
        self.request_change(index)
    }

    /// Programmatically select tab `index`. Same rules as a tap.
    pub fn select_tab(&mut self, index: usize) -> Option<TabChange> {
        self.request_change(index)
    }

    /// Select the tab with `key`.
    pub fn select_tab_by_key(&mut self, key: &str) -> Option<TabChange> {
        let index = self.index_of(key)?;
        self.request_change(index)
    }

    pub fn on_pan_start(&mut self) {
        self.gesture.begin(&self.controller);
    }

    /// `translation_x` is the horizontal distance moved since the drag began.
    pub fn on_pan_update(&mut self, translation_x: f32) {
        if let GestureOutcome::Followed { .. } =
            self.gesture
                .update(translation_x, &mut self.controller, &self.layout)
        {
            self.dirty |= TabsDirty::OFFSET;
        }
    }

    /// `velocity_x` is in pixels per second.
    pub fn on_pan_end(&mut self, translation_x: f32, velocity_x: f32) -> Option<TabChange> {
        let outcome = self.gesture.end(
            translation_x,
            velocity_x,
            &mut self.controller,
            TransitionContext {
                layout: &self.layout,
                indicator: &mut self.indicator,
                render_set: &mut self.render_set,
            },
        );
        match outcome {
            GestureOutcome::Committed(change) => {
                self.commit(&change);
                Some(change)
            }
            GestureOutcome::SnappedBack(_) => {
                self.dirty |= TabsDirty::OFFSET;
                None
            }
            _ => None,
        }
    }

    pub fn on_pan_cancel(&mut self) {
        self.gesture.cancel(&mut self.controller, &self.layout);
    }

    /// Dispatch a host event. Returns the tab change it caused, if any.
    pub fn handle_event(&mut self, event: TabsEvent) -> Option<TabChange> {
        profile_function!();
        match event {
            TabsEvent::ContainerLayout { width } => {
                self.on_container_measured(width);
                None
            }
            TabsEvent::TabLayout { index, width, x } => {
                self.on_tab_measured(index, width, x);
                None
            }
            TabsEvent::PanStart => {
                self.on_pan_start();
                None
            }
            TabsEvent::PanUpdate { translation } => {
                self.on_pan_update(translation.x);
                None
            }
            TabsEvent::PanEnd {
                translation,
                velocity,
            } => self.on_pan_end(translation.x, velocity.x),
            TabsEvent::PanCancel => {
                self.on_pan_cancel();
                None
            }
            TabsEvent::TabPress { index } => self.on_tab_pressed(index),
        }
    }

    /// Advance animations by `dt` seconds.
    ///
    /// Returns `true` while anything is still animating.
    pub fn update(&mut self, dt: f32) -> bool {
        profile_function!();
        let offset_running = self.controller.is_animating();
        let indicator_running = self.indicator.is_animating();

        let offset_still = self.controller.tick(dt);
        let indicator_still = self.indicator.tick(dt);

        if offset_running {
            self.dirty |= TabsDirty::OFFSET;
        }
        if indicator_running {
            self.dirty |= TabsDirty::INDICATOR;
        }
        offset_still || indicator_still
    }

    /// Deliver a completion from an externally driven offset animation.
    ///
    /// Returns `true` if it released the transition lock.
    pub fn complete_animation(&mut self, completion: AnimationCompletion) -> bool {
        self.controller.complete_animation(completion)
    }

    /// Build the render snapshot for the current state.
    pub fn frame(&self) -> TabsFrame<'_> {
        let width = self.layout.container_width();
        let offset = self.controller.offset();
        let active = self.controller.active_index();

        let pages = self
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| PageSlot {
                index,
                key: tab.key().as_str(),
                x: index as f32 * width + offset,
                width,
                mounted: self.render_set.contains(index),
            })
            .collect();

        let tabs = self
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let is_active = index == active;
                TabBarItem {
                    index,
                    label: tab.label(),
                    icon: tab.icon_for(is_active),
                    color: if is_active {
                        self.style.active_color
                    } else {
                        self.style.inactive_color
                    },
                    active: is_active,
                    bounds: self.layout.tab(index),
                }
            })
            .collect();

        let indicator = self.style.show_indicator.then(|| {
            let geometry = self.indicator.geometry();
            IndicatorFrame {
                x: geometry.position,
                width: geometry.width,
                height: self.style.indicator_height,
                color: self.style.indicator_color,
            }
        });

        TabsFrame {
            container_width: width,
            content_offset: offset,
            pages,
            tab_bar_height: self.style.height,
            tab_bar_background: self.style.background_color,
            tabs,
            indicator,
        }
    }

    fn commit(&mut self, change: &TabChange) {
        let width = self.layout.container_width();
        for &index in &change.mounted {
            self.tabs[index].mount_content(width);
        }

        self.dirty |= TabsDirty::ACTIVE | TabsDirty::OFFSET | TabsDirty::INDICATOR;
        if !change.mounted.is_empty() {
            self.dirty |= TabsDirty::RENDER_SET;
        }

        if let Some(callback) = self.on_tab_change.as_mut() {
            callback(change.index, self.tabs[change.index].key().as_str());
        }
    }
}

impl std::fmt::Debug for SwipeableTabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeableTabs")
            .field("tabs", &self.tabs)
            .field("layout", &self.layout)
            .field("render_set", &self.render_set)
            .field("controller", &self.controller)
            .field("gesture", &self.gesture)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
