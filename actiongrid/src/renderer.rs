//! Templated cell renderer with named per-row bindings.
//!
//! This is the renderer protocol consumed from the host view: a markup
//! template plus two binding tables. Property bindings are pure functions
//! from a row to a scalar value, re-evaluated on every render pass.
//! Function bindings are callbacks invoked from client-side events with
//! the row they were rendered for.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A scalar value produced by a property binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
}

impl PropertyValue {
    /// The text value, or `None` for a flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Flag(_) => None,
        }
    }

    /// The boolean value, or `None` for text.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(flag) => Some(*flag),
            PropertyValue::Text(_) => None,
        }
    }
}

type PropertyBinding<T> = Arc<dyn Fn(&T) -> PropertyValue + Send + Sync>;
pub(crate) type FunctionBinding<T> = Arc<dyn Fn(&mut T) + Send + Sync>;

/// A cell renderer: template markup plus named bindings evaluated per row.
pub struct CellRenderer<T> {
    template: String,
    properties: HashMap<String, PropertyBinding<T>>,
    functions: HashMap<String, FunctionBinding<T>>,
}

impl<T> CellRenderer<T> {
    /// Create a renderer from template markup.
    pub fn of(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            properties: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    /// Bind a named per-row property.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        provider: impl Fn(&T) -> PropertyValue + Send + Sync + 'static,
    ) -> Self {
        self.properties.insert(name.into(), Arc::new(provider));
        self
    }

    /// Bind a named function invoked from a client-side event.
    pub fn with_function(
        mut self,
        name: impl Into<String>,
        function: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> Self {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// The template markup.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Names of all bound properties, sorted.
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.properties.keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether a function binding with the given name exists.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Evaluate a property binding for a row.
    pub fn property_value(&self, name: &str, row: &T) -> Option<PropertyValue> {
        self.properties.get(name).map(|provider| provider(row))
    }

    /// Look up a function binding by name.
    pub(crate) fn function(&self, name: &str) -> Option<FunctionBinding<T>> {
        self.functions.get(name).cloned()
    }

    /// Invoke a bound function against a row.
    ///
    /// Returns `false` when no binding with that name exists.
    pub fn invoke(&self, name: &str, row: &mut T) -> bool {
        match self.functions.get(name) {
            Some(function) => {
                function(row);
                true
            }
            None => false,
        }
    }
}

impl<T> Clone for CellRenderer<T> {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
            properties: self.properties.clone(),
            functions: self.functions.clone(),
        }
    }
}

impl<T> fmt::Debug for CellRenderer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRenderer")
            .field("template", &self.template)
            .field("properties", &self.property_names())
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}
