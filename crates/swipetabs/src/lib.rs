//! Swipetabs - swipeable tab navigation for immediate-mode hosts
//!
//! This crate provides the state machine behind a horizontally paged tab view:
//! - A content track that follows the finger with rubber-banding at the edges
//! - Velocity, distance and nearest-page rules for resolving a released drag
//! - A transition lock that serializes tab changes until the content settles
//! - A sliding indicator sized to the measured tab bar entries
//! - Lazy mounting of pages, optionally preloading neighbours
//!
//! The crate does not draw anything. The host forwards [`TabsEvent`]s, ticks
//! the widget once per frame and draws the resulting [`TabsFrame`].
//!
//! ## Quick Start
//!
//! ```rust
//! use swipetabs::{EmptyContent, SwipeTabsConfig, TabDescriptor, TabsEvent};
//! use swipetabs_core::math::vec2;
//!
//! let mut tabs = SwipeTabsConfig::new(vec![
//!     TabDescriptor::new("feed", "Feed", EmptyContent),
//!     TabDescriptor::new("inbox", "Inbox", EmptyContent),
//!     TabDescriptor::new("me", "Me", EmptyContent),
//! ])
//! .on_tab_change(|index, key| println!("now on {key} ({index})"))
//! .build()
//! .unwrap();
//!
//! tabs.handle_event(TabsEvent::ContainerLayout { width: 300.0 });
//!
//! // A quick flick to the left
//! tabs.handle_event(TabsEvent::PanStart);
//! tabs.handle_event(TabsEvent::PanUpdate { translation: vec2(-50.0, 0.0) });
//! tabs.handle_event(TabsEvent::PanEnd {
//!     translation: vec2(-50.0, 0.0),
//!     velocity: vec2(-800.0, 0.0),
//! });
//! assert_eq!(tabs.active_index(), 1);
//!
//! // In the frame loop:
//! while tabs.update(1.0 / 60.0) {
//!     let _frame = tabs.frame();
//! }
//! ```

pub mod animation;
pub mod config;
pub mod dirty;
pub mod error;
pub mod event;
pub mod frame;
pub mod gesture;
pub mod indicator;
pub mod layout;
pub mod render_set;
pub mod tab;
pub mod transition;
pub mod widget;

pub use animation::{
    AnimatedValue, AnimationCompletion, AnimationHandle, AnimationSpec, CompletionKind,
    EasingFunction, SpringConfig, TimingConfig,
};
pub use config::{
    AnimationKind, SpringOverrides, SwipeTabsConfig, TabBarStyle, TabChangeCallback,
    TimingOverrides,
};
pub use dirty::TabsDirty;
pub use error::{SwipeTabsError, SwipeTabsResult};
pub use event::TabsEvent;
pub use frame::{IndicatorFrame, PageSlot, TabBarItem, TabsFrame};
pub use gesture::{DISTANCE_THRESHOLD, RUBBER_BAND_FACTOR, VELOCITY_THRESHOLD};
pub use indicator::IndicatorGeometry;
pub use layout::{TabLayout, equal_tab_bounds};
pub use render_set::RenderSet;
pub use tab::{ComponentProps, EmptyContent, IconRef, PropValue, TabContent, TabDescriptor, TabKey};
pub use transition::{Rejection, TabChange, TransitionState};
pub use widget::SwipeableTabs;

pub use swipetabs_core::color::Color;
