//! Host column handle.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::renderer::CellRenderer;

/// Unique identity for a column handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(usize);

impl ColumnId {
    fn next() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// Column width specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in layout units.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// Column header content: plain text or a template fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnHeader {
    Text(String),
    Template(String),
}

#[derive(Debug)]
struct ColumnInner<T> {
    key: String,
    header: Option<ColumnHeader>,
    width: ColumnWidth,
    flex_grow: u16,
    frozen: bool,
    frozen_to_end: bool,
    visible: bool,
    renderer: Option<CellRenderer<T>>,
}

/// A column of the underlying grid view.
///
/// Cheaply cloneable handle over shared state; equality is handle identity,
/// not configuration. The key is fixed at construction and doubles as the
/// lookup identifier on the grid.
pub struct Column<T> {
    id: ColumnId,
    inner: Arc<RwLock<ColumnInner<T>>>,
}

impl<T> Column<T> {
    /// Create a column with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            id: ColumnId::next(),
            inner: Arc::new(RwLock::new(ColumnInner {
                key: key.into(),
                header: None,
                width: ColumnWidth::default(),
                flex_grow: 1,
                frozen: false,
                frozen_to_end: false,
                visible: true,
                renderer: None,
            })),
        }
    }

    // -------------------------------------------------------------------------
    // Builder configuration
    // -------------------------------------------------------------------------

    /// Set a plain-text header.
    pub fn header(self, text: impl Into<String>) -> Self {
        self.set_header(Some(ColumnHeader::Text(text.into())));
        self
    }

    /// Set a fixed width.
    pub fn fixed(self, width: u16) -> Self {
        self.set_width(ColumnWidth::Fixed(width));
        self
    }

    /// Set a flex width.
    pub fn flex(self, weight: u16) -> Self {
        self.set_width(ColumnWidth::Flex(weight));
        self
    }

    /// Freeze the column to the beginning of the grid.
    pub fn frozen(self) -> Self {
        self.set_frozen(true);
        self
    }

    /// Freeze the column to the end of the grid.
    pub fn frozen_to_end(self) -> Self {
        self.set_frozen_to_end(true);
        self
    }

    /// Attach a cell renderer.
    pub fn with_renderer(self, renderer: CellRenderer<T>) -> Self {
        self.set_renderer(renderer);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The handle identity.
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// The column key.
    pub fn key(&self) -> String {
        self.inner
            .read()
            .map(|g| g.key.clone())
            .unwrap_or_default()
    }

    /// The header content, if any.
    pub fn header_content(&self) -> Option<ColumnHeader> {
        self.inner.read().ok().and_then(|g| g.header.clone())
    }

    /// The header text, if the header is plain text.
    pub fn header_text(&self) -> Option<String> {
        match self.header_content() {
            Some(ColumnHeader::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The width specification.
    pub fn width(&self) -> ColumnWidth {
        self.inner.read().map(|g| g.width).unwrap_or_default()
    }

    /// The flex-grow weight.
    pub fn flex_grow(&self) -> u16 {
        self.inner.read().map(|g| g.flex_grow).unwrap_or(1)
    }

    /// Whether the column is frozen to the beginning.
    pub fn is_frozen(&self) -> bool {
        self.inner.read().map(|g| g.frozen).unwrap_or(false)
    }

    /// Whether the column is frozen to the end.
    pub fn is_frozen_to_end(&self) -> bool {
        self.inner.read().map(|g| g.frozen_to_end).unwrap_or(false)
    }

    /// Whether the column is visible.
    pub fn is_visible(&self) -> bool {
        self.inner.read().map(|g| g.visible).unwrap_or(true)
    }

    /// The cell renderer, if one is attached.
    pub fn cell_renderer(&self) -> Option<CellRenderer<T>> {
        self.inner.read().ok().and_then(|g| g.renderer.clone())
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Set or clear the header content.
    pub fn set_header(&self, header: Option<ColumnHeader>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.header = header;
        }
    }

    /// Set a plain-text header.
    pub fn set_header_text(&self, text: impl Into<String>) {
        self.set_header(Some(ColumnHeader::Text(text.into())));
    }

    /// Set the width specification.
    pub fn set_width(&self, width: ColumnWidth) {
        if let Ok(mut guard) = self.inner.write() {
            guard.width = width;
        }
    }

    /// Set the flex-grow weight.
    pub fn set_flex_grow(&self, flex_grow: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.flex_grow = flex_grow;
        }
    }

    /// Set the frozen-to-beginning flag.
    pub fn set_frozen(&self, frozen: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.frozen = frozen;
        }
    }

    /// Set the frozen-to-end flag.
    pub fn set_frozen_to_end(&self, frozen_to_end: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.frozen_to_end = frozen_to_end;
        }
    }

    /// Set the visibility.
    pub fn set_visible(&self, visible: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.visible = visible;
        }
    }

    /// Replace the cell renderer.
    pub fn set_renderer(&self, renderer: CellRenderer<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.renderer = Some(renderer);
        }
    }

    /// Downgrade to a weak handle.
    pub(crate) fn downgrade(&self) -> WeakColumn<T> {
        WeakColumn {
            id: self.id,
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Column<T> {}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("key", &self.key())
            .finish()
    }
}

/// Weak counterpart of [`Column`], used by the renderer-refresh hook so the
/// hook held by every action does not keep the column alive.
pub(crate) struct WeakColumn<T> {
    id: ColumnId,
    inner: Weak<RwLock<ColumnInner<T>>>,
}

impl<T> WeakColumn<T> {
    pub(crate) fn upgrade(&self) -> Option<Column<T>> {
        self.inner.upgrade().map(|inner| Column { id: self.id, inner })
    }
}

impl<T> Clone for WeakColumn<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Weak::clone(&self.inner),
        }
    }
}
