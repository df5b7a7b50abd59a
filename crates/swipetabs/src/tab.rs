//! Tab descriptors and the content provider boundary.

use std::fmt;

use indexmap::IndexMap;

/// Stable, unique identity of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabKey(String);

impl TabKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TabKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque reference to an icon resolved by the host (asset name, glyph id, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(pub String);

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single value inside [`ComponentProps`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<PropValue>),
    Map(ComponentProps),
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        PropValue::Int(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(v)
    }
}

/// Configuration bag handed verbatim to a tab's content provider.
///
/// The widget never reads these values. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentProps(IndexMap<String, PropValue>);

impl ComponentProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Content rendered inside one page of the swipeable area.
///
/// Implementors render self-sufficiently within the width they are given.
pub trait TabContent {
    /// Called once, when the tab first enters the render set.
    fn mount(&mut self, props: &ComponentProps, width: f32);

    /// Called when the page width changes after mounting.
    fn resize(&mut self, _width: f32) {}
}

/// Content that renders nothing. Useful for placeholder tabs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyContent;

impl TabContent for EmptyContent {
    fn mount(&mut self, _props: &ComponentProps, _width: f32) {}
}

/// Description of one tab, supplied by the caller at construction.
pub struct TabDescriptor {
    key: TabKey,
    label: String,
    icon: Option<IconRef>,
    active_icon: Option<IconRef>,
    content: Box<dyn TabContent>,
    props: ComponentProps,
}

impl TabDescriptor {
    /// Create a tab with a key, a label and its content provider.
    pub fn new(
        key: impl Into<TabKey>,
        label: impl Into<String>,
        content: impl TabContent + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            active_icon: None,
            content: Box::new(content),
            props: ComponentProps::default(),
        }
    }

    /// Set the icon shown in the tab bar.
    pub fn icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the icon shown while this tab is active. Falls back to [`Self::icon`].
    pub fn active_icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.active_icon = Some(icon.into());
        self
    }

    /// Set the props passed to the content provider.
    pub fn props(mut self, props: ComponentProps) -> Self {
        self.props = props;
        self
    }

    pub fn key(&self) -> &TabKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn component_props(&self) -> &ComponentProps {
        &self.props
    }

    /// Icon to draw for the given activity state.
    ///
    /// Active tabs prefer the active icon; inactive tabs always use the base icon.
    /// Tabs without a base icon draw no icon at all.
    pub fn icon_for(&self, active: bool) -> Option<&IconRef> {
        let icon = self.icon.as_ref()?;
        if active {
            Some(self.active_icon.as_ref().unwrap_or(icon))
        } else {
            Some(icon)
        }
    }

    pub(crate) fn mount_content(&mut self, width: f32) {
        self.content.mount(&self.props, width);
    }

    pub(crate) fn resize_content(&mut self, width: f32) {
        self.content.resize(width);
    }
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("active_icon", &self.active_icon)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}
