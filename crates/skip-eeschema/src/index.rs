//! Indexed symbol library
//!
//! Provides [`LibSymbols`], the typed view over a `(lib_symbols ...)` node.
//!
//! Construction walks the node's children once. Each child gets a
//! [`LibSymbol`] in a side table indexed by position, so lookups return the
//! typed entity while the tree itself stays untouched. Two maps are built on
//! top of that table:
//!
//! - raw symbol name → position
//! - sanitized name → position
//!
//! A later symbol with the same key replaces the earlier one in the map
//! (last write wins). Every such replacement is reported as a
//! [`CollisionDiagnostic`].

use crate::base::SymbolBase;
use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::symbol::LibSymbol;
use crate::validation::{CollisionDiagnostic, CollisionLog};
use crate::wrapper::{EntityWrapper, WRAPPER_FIELDS};
use indexmap::IndexMap;
use skip_sexp::{to_safe_attribute_key, NodeRef};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// All symbols of one library
///
/// Fully built by [`wrap`](Self::wrap) before any query; never extended
/// afterwards.
#[derive(Debug)]
pub struct LibSymbols<'t> {
    node: NodeRef<'t>,

    /// Typed entities by document position
    symbols: Vec<LibSymbol<'t>>,

    /// Raw name -> position
    by_identifier: IndexMap<String, usize>,

    /// Sanitized name -> position
    by_safe_name: IndexMap<String, usize>,

    /// Every sanitized name in insertion order, duplicates included
    safe_name_order: Vec<String>,

    collisions: CollisionLog,
}

impl<'t> LibSymbols<'t> {
    /// Index every child of `node` with the default configuration
    #[must_use]
    pub fn wrap(node: NodeRef<'t>) -> Self {
        Self::wrap_with(node, &IndexConfig::default(), |_| {})
    }

    /// Index every child of `node`
    ///
    /// `on_collision` is called once per key collision, in the order they
    /// occur.
    pub fn wrap_with<F>(node: NodeRef<'t>, config: &IndexConfig, mut on_collision: F) -> Self
    where
        F: FnMut(&CollisionDiagnostic),
    {
        let pin_scan = Arc::new(config.pin_scan());
        let mut index = Self {
            node,
            symbols: Vec::with_capacity(node.len()),
            by_identifier: IndexMap::with_capacity(node.len()),
            by_safe_name: IndexMap::with_capacity(node.len()),
            safe_name_order: Vec::with_capacity(node.len()),
            collisions: CollisionLog::new(),
        };

        for (position, child) in node.children().enumerate() {
            let symbol = LibSymbol::with_pin_scan(child, Arc::clone(&pin_scan));
            let identifier = symbol.name().to_string();
            let safe_name = to_safe_attribute_key(&identifier);

            tracing::trace!("Indexing symbol '{}' as '{}' at {}", identifier, safe_name, position);

            if let Some(shadowed) = index.by_identifier.insert(identifier.clone(), position) {
                let diagnostic = CollisionDiagnostic::identifier(identifier, shadowed, position);
                on_collision(&diagnostic);
                index.collisions.record(diagnostic, config.warn_on_collision);
            }

            if let Some(shadowed) = index.by_safe_name.insert(safe_name.clone(), position) {
                let diagnostic =
                    CollisionDiagnostic::safe_name(safe_name.clone(), shadowed, position);
                on_collision(&diagnostic);
                index.collisions.record(diagnostic, config.warn_on_collision);
            }

            index.safe_name_order.push(safe_name);
            index.symbols.push(symbol);
        }

        tracing::debug!(
            "Indexed {} library symbols ({} collisions)",
            index.symbols.len(),
            index.collisions.len()
        );

        index
    }

    /// Check if a symbol is registered under this raw name
    #[inline]
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    /// Symbol by raw name
    ///
    /// # Errors
    /// Returns [`IndexError::NotFound`] if no symbol has that name
    pub fn get(&self, identifier: &str) -> Result<&LibSymbol<'t>, IndexError> {
        self.by_identifier
            .get(identifier)
            .and_then(|position| self.symbols.get(*position))
            .ok_or_else(|| IndexError::not_found(identifier))
    }

    /// Symbol by sanitized name
    #[must_use]
    pub fn get_by_safe_name(&self, safe_name: &str) -> Option<&LibSymbol<'t>> {
        self.by_safe_name
            .get(safe_name)
            .and_then(|position| self.symbols.get(*position))
    }

    /// Symbol by document position
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&LibSymbol<'t>> {
        self.symbols.get(position)
    }

    /// Number of symbols, equal to the wrapped node's child count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the library holds no symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in document order
    pub fn iter(&self) -> std::slice::Iter<'_, LibSymbol<'t>> {
        self.symbols.iter()
    }

    /// Distinct raw names, in first-seen order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.by_identifier.keys().map(String::as_str)
    }

    /// Names available for member-style access, for completion tooling
    ///
    /// Wrapper accessors come first, then every sanitized symbol name in
    /// insertion order.
    #[must_use]
    pub fn enumerate_safe_names(&self) -> Vec<&str> {
        WRAPPER_FIELDS
            .iter()
            .copied()
            .chain(self.safe_name_order.iter().map(String::as_str))
            .collect()
    }

    /// Collisions recorded while indexing
    #[inline]
    #[must_use]
    pub fn collisions(&self) -> &CollisionLog {
        &self.collisions
    }
}

impl<'t> EntityWrapper<'t> for LibSymbols<'t> {
    #[inline]
    fn wrapped(&self) -> NodeRef<'t> {
        self.node
    }

    #[inline]
    fn kind(&self) -> &'static str {
        "lib_symbols"
    }
}

impl<'a, 't> IntoIterator for &'a LibSymbols<'t> {
    type Item = &'a LibSymbol<'t>;
    type IntoIter = std::slice::Iter<'a, LibSymbol<'t>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for LibSymbols<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<LibSymbols ({})>", self.len())
    }
}
