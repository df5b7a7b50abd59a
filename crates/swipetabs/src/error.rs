//! Construction errors.

use swipetabs_core::color::ColorParseError;

/// Errors raised while building a [`SwipeableTabs`](crate::SwipeableTabs).
///
/// Runtime input never fails: out-of-range indices and stale animation
/// completions are ignored instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeTabsError {
    /// The tab sequence was empty.
    EmptyTabs,
    /// Two tabs share the same key.
    DuplicateTabKey(String),
    /// A color option could not be parsed.
    InvalidColor(String),
    /// A container width was negative or not finite.
    InvalidContainerWidth,
    /// The tab bar height was negative or not finite.
    InvalidTabBarHeight,
    /// An animation parameter was out of range. Carries the field name.
    InvalidAnimationConfig(&'static str),
}

impl std::fmt::Display for SwipeTabsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeTabsError::EmptyTabs => write!(f, "At least one tab is required"),
            SwipeTabsError::DuplicateTabKey(key) => write!(f, "Duplicate tab key: {}", key),
            SwipeTabsError::InvalidColor(value) => write!(f, "Invalid color: {}", value),
            SwipeTabsError::InvalidContainerWidth => {
                write!(f, "Container width must be finite and non-negative")
            }
            SwipeTabsError::InvalidTabBarHeight => {
                write!(f, "Tab bar height must be finite and non-negative")
            }
            SwipeTabsError::InvalidAnimationConfig(field) => {
                write!(f, "Invalid animation parameter: {}", field)
            }
        }
    }
}

impl std::error::Error for SwipeTabsError {}

impl From<ColorParseError> for SwipeTabsError {
    fn from(err: ColorParseError) -> Self {
        SwipeTabsError::InvalidColor(err.0)
    }
}

/// Result type for widget construction.
pub type SwipeTabsResult<T> = Result<T, SwipeTabsError>;
