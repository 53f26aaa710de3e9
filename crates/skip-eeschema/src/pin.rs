//! Library symbol pins

use crate::base::PinBase;
use crate::error::FieldNotFound;
use crate::wrapper::EntityWrapper;
use skip_sexp::NodeRef;
use std::fmt::{self, Display, Formatter};

/// Pin of a library symbol
///
/// Adds the pin `name` to the base pin model. The name is a separate field
/// from the number: `(pin input line (name "IN+") (number "3"))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibSymbolPin<'t> {
    node: NodeRef<'t>,
}

impl<'t> LibSymbolPin<'t> {
    /// Bind a pin entity to a pin node
    #[inline]
    #[must_use]
    pub fn new(node: NodeRef<'t>) -> Self {
        Self { node }
    }

    /// `(name "...")` field of the pin
    ///
    /// # Errors
    /// Returns [`FieldNotFound`] if the pin node has no name
    #[inline]
    pub fn name(&self) -> Result<NodeRef<'t>, FieldNotFound> {
        self.field("name")
    }

    /// Pin name text
    #[inline]
    #[must_use]
    pub fn name_value(&self) -> Option<&'t str> {
        self.name().ok().and_then(|node| node.value())
    }
}

impl<'t> EntityWrapper<'t> for LibSymbolPin<'t> {
    #[inline]
    fn wrapped(&self) -> NodeRef<'t> {
        self.node
    }

    #[inline]
    fn kind(&self) -> &'static str {
        "pin"
    }
}

impl<'t> PinBase<'t> for LibSymbolPin<'t> {}

impl Display for LibSymbolPin<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Pin '{}' ({}) >",
            self.name_value().unwrap_or("?"),
            self.number_value().unwrap_or("?")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skip_sexp::parse;

    #[test]
    fn pin_name_reads_nested_field() {
        let tree = parse(r#"(pin input line (name "IN+" (effects)) (number "3"))"#).unwrap();
        let node = tree.root(0).unwrap();
        let pin = LibSymbolPin::new(node);

        assert_eq!(pin.name().unwrap(), node.field("name").unwrap());
        assert_eq!(pin.name_value(), Some("IN+"));
        assert_eq!(pin.number_value(), Some("3"));
    }

    #[test]
    fn pin_display() {
        let tree = parse(r#"(pin passive line (name "~") (number "1"))"#).unwrap();
        let pin = LibSymbolPin::new(tree.root(0).unwrap());
        assert_eq!(pin.to_string(), "<Pin '~' (1) >");
    }

    #[test]
    fn pin_display_with_missing_fields() {
        let tree = parse("(pin passive line)").unwrap();
        let pin = LibSymbolPin::new(tree.root(0).unwrap());

        assert_eq!(pin.to_string(), "<Pin '?' (?) >");
        assert_eq!(pin.name().unwrap_err(), FieldNotFound::new("pin", "name"));
    }
}
