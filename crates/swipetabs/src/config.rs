//! Construction-time configuration for [`SwipeableTabs`](crate::SwipeableTabs).

use swipetabs_core::color::Color;

use crate::animation::{AnimationSpec, EasingFunction, SpringConfig, TimingConfig};
use crate::error::{SwipeTabsError, SwipeTabsResult};
use crate::tab::TabDescriptor;

/// Default tab bar height in pixels.
pub const DEFAULT_TAB_BAR_HEIGHT: f32 = 60.0;

/// Default indicator thickness in pixels.
pub const DEFAULT_INDICATOR_HEIGHT: f32 = 2.0;

/// Default active label color.
pub const DEFAULT_ACTIVE_COLOR: &str = "#000";

/// Default inactive label color.
pub const DEFAULT_INACTIVE_COLOR: &str = "#999";

/// Default tab bar background color.
pub const DEFAULT_TAB_BAR_BACKGROUND: &str = "#fff";

/// Which animation drives tab transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    #[default]
    Spring,
    Timing,
}

/// Partial spring configuration. Unset fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringOverrides {
    pub damping: Option<f32>,
    pub stiffness: Option<f32>,
    pub mass: Option<f32>,
    pub overshoot_clamping: Option<bool>,
    pub rest_displacement_threshold: Option<f32>,
    pub rest_speed_threshold: Option<f32>,
}

impl SpringOverrides {
    /// Merge onto `base` field by field.
    pub fn apply(&self, base: SpringConfig) -> SpringConfig {
        SpringConfig {
            damping: self.damping.unwrap_or(base.damping),
            stiffness: self.stiffness.unwrap_or(base.stiffness),
            mass: self.mass.unwrap_or(base.mass),
            overshoot_clamping: self.overshoot_clamping.unwrap_or(base.overshoot_clamping),
            rest_displacement_threshold: self
                .rest_displacement_threshold
                .unwrap_or(base.rest_displacement_threshold),
            rest_speed_threshold: self
                .rest_speed_threshold
                .unwrap_or(base.rest_speed_threshold),
        }
    }
}

/// Partial timing configuration. Unset fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingOverrides {
    /// Duration in seconds.
    pub duration: Option<f32>,
    pub easing: Option<EasingFunction>,
}

impl TimingOverrides {
    /// Merge onto `base` field by field.
    pub fn apply(&self, base: TimingConfig) -> TimingConfig {
        TimingConfig {
            duration: self.duration.unwrap_or(base.duration),
            easing: self.easing.unwrap_or(base.easing),
        }
    }
}

/// Resolved tab bar appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBarStyle {
    pub height: f32,
    pub active_color: Color,
    pub inactive_color: Color,
    pub background_color: Color,
    pub indicator_color: Color,
    pub indicator_height: f32,
    pub show_indicator: bool,
}

/// Behavioral options after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Behavior {
    pub swipe_enabled: bool,
    pub lazy: bool,
    pub preload_adjacent: bool,
    pub animation: AnimationSpec,
}

/// Callback fired once per accepted tab change, with the new index and key.
pub type TabChangeCallback = Box<dyn FnMut(usize, &str)>;

/// Builder for a swipeable tab widget.
///
/// # Example
/// ```
/// use swipetabs::{EmptyContent, SwipeTabsConfig, TabDescriptor};
///
/// let tabs = SwipeTabsConfig::new(vec![
///     TabDescriptor::new("home", "Home", EmptyContent),
///     TabDescriptor::new("search", "Search", EmptyContent),
/// ])
/// .initial_tab(1)
/// .active_color("#1e88e5")
/// .lazy(true)
/// .build()
/// .unwrap();
///
/// assert_eq!(tabs.active_index(), 1);
/// ```
pub struct SwipeTabsConfig {
    pub(crate) tabs: Vec<TabDescriptor>,
    pub(crate) initial_tab: usize,
    pub(crate) on_tab_change: Option<TabChangeCallback>,
    pub(crate) container_width: Option<f32>,
    tab_bar_height: f32,
    active_color: String,
    inactive_color: String,
    tab_bar_background_color: String,
    indicator_color: Option<String>,
    show_indicator: bool,
    swipe_enabled: bool,
    animation_kind: AnimationKind,
    spring: SpringOverrides,
    timing: TimingOverrides,
    lazy: bool,
    preload_adjacent_tabs: bool,
}

impl SwipeTabsConfig {
    /// Start a configuration from the ordered tab sequence.
    pub fn new(tabs: Vec<TabDescriptor>) -> Self {
        Self {
            tabs,
            initial_tab: 0,
            on_tab_change: None,
            container_width: None,
            tab_bar_height: DEFAULT_TAB_BAR_HEIGHT,
            active_color: DEFAULT_ACTIVE_COLOR.to_string(),
            inactive_color: DEFAULT_INACTIVE_COLOR.to_string(),
            tab_bar_background_color: DEFAULT_TAB_BAR_BACKGROUND.to_string(),
            indicator_color: None,
            show_indicator: true,
            swipe_enabled: true,
            animation_kind: AnimationKind::Spring,
            spring: SpringOverrides::default(),
            timing: TimingOverrides::default(),
            lazy: false,
            preload_adjacent_tabs: true,
        }
    }

    /// Starting tab. Out-of-range values are clamped to the last tab.
    pub fn initial_tab(mut self, index: usize) -> Self {
        self.initial_tab = index;
        self
    }

    /// Notification fired when a tab change is accepted (not when it settles).
    pub fn on_tab_change(mut self, callback: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_tab_change = Some(Box::new(callback));
        self
    }

    /// Container width, if the host already knows it before the first layout pass.
    pub fn container_width(mut self, width: f32) -> Self {
        self.container_width = Some(width);
        self
    }

    pub fn tab_bar_height(mut self, height: f32) -> Self {
        self.tab_bar_height = height;
        self
    }

    pub fn active_color(mut self, color: impl Into<String>) -> Self {
        self.active_color = color.into();
        self
    }

    pub fn inactive_color(mut self, color: impl Into<String>) -> Self {
        self.inactive_color = color.into();
        self
    }

    pub fn tab_bar_background_color(mut self, color: impl Into<String>) -> Self {
        self.tab_bar_background_color = color.into();
        self
    }

    /// Indicator color. Defaults to the active color.
    pub fn indicator_color(mut self, color: impl Into<String>) -> Self {
        self.indicator_color = Some(color.into());
        self
    }

    pub fn show_indicator(mut self, show: bool) -> Self {
        self.show_indicator = show;
        self
    }

    pub fn swipe_enabled(mut self, enabled: bool) -> Self {
        self.swipe_enabled = enabled;
        self
    }

    pub fn animation_type(mut self, kind: AnimationKind) -> Self {
        self.animation_kind = kind;
        self
    }

    pub fn spring_config(mut self, overrides: SpringOverrides) -> Self {
        self.spring = overrides;
        self
    }

    pub fn timing_config(mut self, overrides: TimingOverrides) -> Self {
        self.timing = overrides;
        self
    }

    /// Defer mounting tab content until the tab becomes active (or adjacent).
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// With lazy rendering, also mount the neighbors of the active tab.
    pub fn preload_adjacent_tabs(mut self, preload: bool) -> Self {
        self.preload_adjacent_tabs = preload;
        self
    }

    /// Validate and build the widget.
    pub fn build(self) -> SwipeTabsResult<crate::SwipeableTabs> {
        crate::SwipeableTabs::new(self)
    }

    pub(crate) fn resolve_style(&self) -> SwipeTabsResult<TabBarStyle> {
        let active_color = self.active_color.parse::<Color>()?;
        let indicator_color = match &self.indicator_color {
            Some(color) => color.parse::<Color>()?,
            None => active_color,
        };

        if !self.tab_bar_height.is_finite() || self.tab_bar_height < 0.0 {
            return Err(SwipeTabsError::InvalidTabBarHeight);
        }

        Ok(TabBarStyle {
            height: self.tab_bar_height,
            active_color,
            inactive_color: self.inactive_color.parse::<Color>()?,
            background_color: self.tab_bar_background_color.parse::<Color>()?,
            indicator_color,
            indicator_height: DEFAULT_INDICATOR_HEIGHT,
            show_indicator: self.show_indicator,
        })
    }

    pub(crate) fn resolve_behavior(&self) -> SwipeTabsResult<Behavior> {
        let animation = match self.animation_kind {
            AnimationKind::Spring => {
                AnimationSpec::Spring(validate_spring(self.spring.apply(SpringConfig::default()))?)
            }
            AnimationKind::Timing => {
                AnimationSpec::Timing(validate_timing(self.timing.apply(TimingConfig::default()))?)
            }
        };

        Ok(Behavior {
            swipe_enabled: self.swipe_enabled,
            lazy: self.lazy,
            preload_adjacent: self.preload_adjacent_tabs,
            animation,
        })
    }

    pub(crate) fn validated_container_width(&self) -> SwipeTabsResult<Option<f32>> {
        match self.container_width {
            Some(w) if !w.is_finite() || w < 0.0 => Err(SwipeTabsError::InvalidContainerWidth),
            other => Ok(other),
        }
    }
}

/// A spring that cannot come to rest would hold the transition lock forever.
fn validate_spring(config: SpringConfig) -> SwipeTabsResult<SpringConfig> {
    let positive = |v: f32| v.is_finite() && v > 0.0;
    let non_negative = |v: f32| v.is_finite() && v >= 0.0;

    if !positive(config.stiffness) {
        Err(SwipeTabsError::InvalidAnimationConfig("stiffness"))
    } else if !positive(config.mass) {
        Err(SwipeTabsError::InvalidAnimationConfig("mass"))
    } else if !non_negative(config.damping) {
        Err(SwipeTabsError::InvalidAnimationConfig("damping"))
    } else if !non_negative(config.rest_displacement_threshold) {
        Err(SwipeTabsError::InvalidAnimationConfig(
            "rest_displacement_threshold",
        ))
    } else if !non_negative(config.rest_speed_threshold) {
        Err(SwipeTabsError::InvalidAnimationConfig("rest_speed_threshold"))
    } else {
        Ok(config)
    }
}

fn validate_timing(config: TimingConfig) -> SwipeTabsResult<TimingConfig> {
    if config.duration.is_finite() && config.duration >= 0.0 {
        Ok(config)
    } else {
        Err(SwipeTabsError::InvalidAnimationConfig("duration"))
    }
}
