//! Entity wrapper contract
//!
//! Every typed entity is bound to exactly one node of the parsed tree. The
//! binding is a borrowed [`NodeRef`], never ownership: the same node is still
//! reachable through its parent's children while the entity exists.
//!
//! Typed accessors cover what an entity models explicitly. Anything else goes
//! through [`EntityWrapper::field`], which forwards to the node.

use crate::error::FieldNotFound;
use skip_sexp::NodeRef;

/// Accessor names every wrapper provides, listed for enumeration tooling
pub const WRAPPER_FIELDS: &[&str] = &["value", "children", "field"];

/// Typed view over a single tree node
pub trait EntityWrapper<'t> {
    /// Node this entity is bound to
    fn wrapped(&self) -> NodeRef<'t>;

    /// Short entity kind used in diagnostics (`symbol`, `pin`, ...)
    fn kind(&self) -> &'static str;

    /// Raw value of the node (its first atom)
    #[inline]
    fn value(&self) -> Option<&'t str> {
        self.wrapped().value()
    }

    /// Child lists of the node, in document order
    #[inline]
    fn children(&self) -> Vec<NodeRef<'t>> {
        self.wrapped().children().collect()
    }

    /// Fallback lookup of a named field on the node
    ///
    /// # Errors
    /// Returns [`FieldNotFound`] if the node has no child with that tag
    fn field(&self, name: &str) -> Result<NodeRef<'t>, FieldNotFound> {
        self.wrapped()
            .field(name)
            .ok_or_else(|| FieldNotFound::new(self.kind(), name))
    }
}
