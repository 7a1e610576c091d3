//! A single row action and its per-row appearance providers.

use std::fmt;
use std::sync::{Arc, RwLock};

use log::trace;

use crate::icon::Icon;

/// Callback fired after any action mutation so the owning column can
/// recompile its renderer.
pub(crate) type RefreshHook = Arc<dyn Fn() + Send + Sync>;

type IconProvider<T> = Arc<dyn Fn(&T) -> Option<Icon> + Send + Sync>;
type TextProvider<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type ClickHandler<T> = Arc<dyn Fn(&mut T) + Send + Sync>;

struct ActionInner<T> {
    icon: IconProvider<T>,
    class_name: TextProvider<T>,
    accessible_name: TextProvider<T>,
    tooltip: TextProvider<T>,
    visible: Predicate<T>,
    enabled: Predicate<T>,
    click_handlers: Vec<ClickHandler<T>>,
}

impl<T> Default for ActionInner<T> {
    fn default() -> Self {
        Self {
            icon: Arc::new(|_| None),
            class_name: Arc::new(|_| String::new()),
            accessible_name: Arc::new(|_| String::new()),
            tooltip: Arc::new(|_| String::new()),
            visible: Arc::new(|_| true),
            enabled: Arc::new(|_| true),
            click_handlers: Vec::new(),
        }
    }
}

/// A row action rendered as a button in the action column.
///
/// Cheaply cloneable handle; every appearance aspect is a provider
/// evaluated per row, with constant-value setters as shorthand. All
/// providers have defaults (no icon, empty strings, visible, enabled),
/// so a freshly added action renders immediately. Every setter triggers
/// a renderer refresh on the owning column.
pub struct Action<T> {
    key: Arc<str>,
    inner: Arc<RwLock<ActionInner<T>>>,
    refresh: RefreshHook,
}

impl<T> Action<T> {
    pub(crate) fn new(key: &str, refresh: RefreshHook) -> Self {
        Self {
            key: Arc::from(key),
            inner: Arc::new(RwLock::new(ActionInner::default())),
            refresh,
        }
    }

    /// The action key.
    pub fn key(&self) -> &str {
        &self.key
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Set the per-row icon provider.
    pub fn set_icon_provider(
        &self,
        provider: impl Fn(&T) -> Option<Icon> + Send + Sync + 'static,
    ) -> &Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.icon = Arc::new(provider);
        }
        self.refresh();
        self
    }

    /// Use the same icon for every row.
    pub fn set_icon(&self, icon: Icon) -> &Self {
        self.set_icon_provider(move |_| Some(icon.clone()))
    }

    /// Remove the icon.
    pub fn clear_icon(&self) -> &Self {
        self.set_icon_provider(|_| None)
    }

    /// Set the per-row CSS class name provider.
    pub fn set_class_name_provider(
        &self,
        provider: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> &Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.class_name = Arc::new(provider);
        }
        self.refresh();
        self
    }

    /// Use the same class name for every row.
    pub fn set_class_name(&self, class_name: impl Into<String>) -> &Self {
        let class_name = class_name.into();
        self.set_class_name_provider(move |_| class_name.clone())
    }

    /// Remove the class name.
    pub fn clear_class_name(&self) -> &Self {
        self.set_class_name_provider(|_| String::new())
    }

    /// Set the per-row accessible-name provider.
    pub fn set_accessible_name_provider(
        &self,
        provider: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> &Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.accessible_name = Arc::new(provider);
        }
        self.refresh();
        self
    }

    /// Use the same accessible name for every row.
    pub fn set_accessible_name(&self, name: impl Into<String>) -> &Self {
        let name = name.into();
        self.set_accessible_name_provider(move |_| name.clone())
    }

    /// Remove the accessible name.
    pub fn clear_accessible_name(&self) -> &Self {
        self.set_accessible_name_provider(|_| String::new())
    }

    /// Set the per-row tooltip provider.
    pub fn set_tooltip_provider(
        &self,
        provider: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> &Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.tooltip = Arc::new(provider);
        }
        self.refresh();
        self
    }

    /// Use the same tooltip for every row.
    pub fn set_tooltip(&self, tooltip: impl Into<String>) -> &Self {
        let tooltip = tooltip.into();
        self.set_tooltip_provider(move |_| tooltip.clone())
    }

    /// Remove the tooltip.
    pub fn clear_tooltip(&self) -> &Self {
        self.set_tooltip_provider(|_| String::new())
    }

    /// Set the per-row visibility predicate.
    pub fn set_visible_predicate(
        &self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> &Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.visible = Arc::new(predicate);
        }
        self.refresh();
        self
    }

    /// Show or hide the action on every row.
    pub fn set_visible(&self, visible: bool) -> &Self {
        self.set_visible_predicate(move |_| visible)
    }

    /// Restore the default visibility (visible on every row).
    pub fn clear_visible_predicate(&self) -> &Self {
        self.set_visible_predicate(|_| true)
    }

    /// Set the per-row enablement predicate.
    pub fn set_enabled_predicate(
        &self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> &Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.enabled = Arc::new(predicate);
        }
        self.refresh();
        self
    }

    /// Enable or disable the action on every row.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        self.set_enabled_predicate(move |_| enabled)
    }

    /// Restore the default enablement (enabled on every row).
    pub fn clear_enabled_predicate(&self) -> &Self {
        self.set_enabled_predicate(|_| true)
    }

    /// Register a click handler. Handlers run in registration order.
    pub fn add_click_handler(&self, handler: impl Fn(&mut T) + Send + Sync + 'static) -> &Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.click_handlers.push(Arc::new(handler));
        }
        self.refresh();
        self
    }

    // -------------------------------------------------------------------------
    // Per-row evaluation
    // -------------------------------------------------------------------------

    /// The icon for a row, if any.
    pub fn icon_for(&self, row: &T) -> Option<Icon> {
        self.inner.read().ok().and_then(|g| (g.icon)(row))
    }

    /// The icon name for a row; empty when there is no icon.
    pub fn icon_name_for(&self, row: &T) -> String {
        self.icon_for(row)
            .map(|icon| icon.name().to_string())
            .unwrap_or_default()
    }

    /// The CSS class name for a row.
    pub fn class_name_for(&self, row: &T) -> String {
        self.inner
            .read()
            .map(|g| (g.class_name)(row))
            .unwrap_or_default()
    }

    /// The accessible name for a row.
    pub fn accessible_name_for(&self, row: &T) -> String {
        self.inner
            .read()
            .map(|g| (g.accessible_name)(row))
            .unwrap_or_default()
    }

    /// The tooltip for a row.
    pub fn tooltip_for(&self, row: &T) -> String {
        self.inner
            .read()
            .map(|g| (g.tooltip)(row))
            .unwrap_or_default()
    }

    /// Whether the action is visible for a row.
    pub fn is_visible_for(&self, row: &T) -> bool {
        self.inner.read().map(|g| (g.visible)(row)).unwrap_or(true)
    }

    /// Whether the action is enabled for a row.
    pub fn is_enabled_for(&self, row: &T) -> bool {
        self.inner.read().map(|g| (g.enabled)(row)).unwrap_or(true)
    }

    /// Dispatch a click against a row.
    ///
    /// Visibility and enablement are re-evaluated here, not only at render
    /// time: a click arriving for a row where the action is hidden or
    /// disabled is discarded. Handlers are cloned out of the lock before
    /// running, so they may reconfigure this action or its siblings.
    pub fn click_for(&self, row: &mut T) {
        if !self.is_visible_for(row) || !self.is_enabled_for(row) {
            trace!(
                "discarding click for hidden or disabled action \"{}\"",
                self.key
            );
            return;
        }
        let handlers = self
            .inner
            .read()
            .map(|g| g.click_handlers.clone())
            .unwrap_or_default();
        for handler in handlers {
            handler(row);
        }
    }

    fn refresh(&self) {
        (self.refresh)();
    }
}

impl<T> Clone for Action<T> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            inner: Arc::clone(&self.inner),
            refresh: Arc::clone(&self.refresh),
        }
    }
}

impl<T> PartialEq for Action<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for Action<T> {}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("key", &self.key).finish()
    }
}
