//! Named color-table resources.
//!
//! Hosts usually define widget colors centrally and refer to them by
//! name. The [`ColorTableSource`] trait is the lookup seam; the
//! [`ColorCatalog`] is a plain in-memory implementation for hosts that
//! have no resource system of their own.

use indexmap::IndexMap;

use rondo_style::table::ColorTable;

/// A source of named color tables.
pub trait ColorTableSource {
    /// Look up a color table by name.
    fn color_table(&self, name: &str) -> Option<ColorTable>;
}

/// An in-memory registry of named color tables, iterated in insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct ColorCatalog {
    tables: IndexMap<String, ColorTable>,
}

impl ColorCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named table, replacing any previous entry with that name.
    pub fn with_table(mut self, name: impl Into<String>, table: ColorTable) -> Self {
        self.insert(name, table);
        self
    }

    /// Insert a named table.
    pub fn insert(&mut self, name: impl Into<String>, table: ColorTable) {
        self.tables.insert(name.into(), table);
    }

    /// The number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the catalog has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The registered names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl ColorTableSource for ColorCatalog {
    fn color_table(&self, name: &str) -> Option<ColorTable> {
        self.tables.get(name).cloned()
    }
}
