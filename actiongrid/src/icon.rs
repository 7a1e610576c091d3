//! Opaque icon handle.

use std::fmt;

/// A reference to an icon by symbolic name.
///
/// The icon/asset system itself is an external collaborator; the grid only
/// ever needs the symbolic name to bind into a cell template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    name: String,
}

impl Icon {
    /// Create an icon handle for the given symbolic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The symbolic name of this icon.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
