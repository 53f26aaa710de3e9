//! Semantic base model for symbols and pins
//!
//! Read-only accessors over the KiCad symbol grammar. Typed entities pick
//! these up by implementing the traits; nothing here is cached.

use crate::error::FieldNotFound;
use crate::wrapper::EntityWrapper;
use skip_sexp::{Atom, NodeRef};

/// `(property "Key" "Value" ...)` entry of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'t> {
    /// Property name (`Reference`, `Value`, `Footprint`, ...)
    pub key: &'t str,
    /// Property text
    pub value: &'t str,
    /// Node the property was read from
    pub node: NodeRef<'t>,
}

/// Pin anchor read from `(at x y rotation)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinPosition {
    /// Horizontal offset from the symbol origin
    pub x: f64,
    /// Vertical offset from the symbol origin
    pub y: f64,
    /// Degrees; zero when omitted
    pub rotation: f64,
}

/// Attributes shared by all symbol entities
pub trait SymbolBase<'t>: EntityWrapper<'t> {
    /// Symbol name; empty when the node carries no value
    fn name(&self) -> &'t str {
        self.value().unwrap_or_default()
    }

    /// All properties in document order
    ///
    /// Property nodes lacking a key or value are skipped.
    fn properties(&self) -> Vec<Property<'t>> {
        self.wrapped()
            .children_by_tag("property")
            .filter_map(|node| {
                Some(Property {
                    key: node.arg(0)?.text(),
                    value: node.arg(1)?.text(),
                    node,
                })
            })
            .collect()
    }

    /// Property text by key
    fn property(&self, key: &str) -> Option<&'t str> {
        self.properties()
            .into_iter()
            .find(|p| p.key == key)
            .map(|p| p.value)
    }

    /// Number of units, counted from nested unit sub-symbols
    fn unit_count(&self) -> usize {
        self.wrapped().children_by_tag("symbol").count().max(1)
    }

    /// `(in_bom yes|no)`
    fn in_bom(&self) -> Option<bool> {
        self.field("in_bom").ok().and_then(flag)
    }

    /// `(on_board yes|no)`
    fn on_board(&self) -> Option<bool> {
        self.field("on_board").ok().and_then(flag)
    }

    /// Power symbols carry a bare `(power)` marker
    fn is_power(&self) -> bool {
        self.field("power").is_ok()
    }

    /// Name of the symbol this one derives from
    fn extends(&self) -> Option<&'t str> {
        self.field("extends").ok().and_then(|node| node.value())
    }
}

/// Attributes shared by all pin entities
pub trait PinBase<'t>: EntityWrapper<'t> {
    /// `(number "1")` field
    ///
    /// # Errors
    /// Returns [`FieldNotFound`] if the pin has no number
    fn number(&self) -> Result<NodeRef<'t>, FieldNotFound> {
        self.field("number")
    }

    /// Pin number text
    fn number_value(&self) -> Option<&'t str> {
        self.number().ok().and_then(|node| node.value())
    }

    /// Electrical type (`input`, `passive`, `power_in`, ...)
    fn electrical_type(&self) -> Option<&'t str> {
        self.wrapped().arg(0).map(Atom::text)
    }

    /// Graphic style (`line`, `inverted`, `clock`, ...)
    fn graphic_style(&self) -> Option<&'t str> {
        self.wrapped().arg(1).map(Atom::text)
    }

    /// Anchor position
    fn position(&self) -> Option<PinPosition> {
        let at = self.field("at").ok()?;
        Some(PinPosition {
            x: at.arg(0)?.as_f64()?,
            y: at.arg(1)?.as_f64()?,
            rotation: at.arg(2).and_then(Atom::as_f64).unwrap_or(0.0),
        })
    }

    /// Pin length
    fn length(&self) -> Option<f64> {
        self.field("length").ok()?.arg(0)?.as_f64()
    }
}

fn flag(node: NodeRef<'_>) -> Option<bool> {
    match node.value()? {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skip_sexp::parse;

    struct Sym<'t>(NodeRef<'t>);

    impl<'t> EntityWrapper<'t> for Sym<'t> {
        fn wrapped(&self) -> NodeRef<'t> {
            self.0
        }
        fn kind(&self) -> &'static str {
            "symbol"
        }
    }

    impl<'t> SymbolBase<'t> for Sym<'t> {}

    struct Pn<'t>(NodeRef<'t>);

    impl<'t> EntityWrapper<'t> for Pn<'t> {
        fn wrapped(&self) -> NodeRef<'t> {
            self.0
        }
        fn kind(&self) -> &'static str {
            "pin"
        }
    }

    impl<'t> PinBase<'t> for Pn<'t> {}

    const OPAMP: &str = r#"
        (symbol "LM358" (in_bom yes) (on_board no) (extends "LM2904")
          (property "Reference" "U" (at 0 5 0))
          (property "Value" "LM358")
          (property "Broken")
          (symbol "LM358_1_1")
          (symbol "LM358_2_1")
          (symbol "LM358_3_1"))
    "#;

    #[test]
    fn symbol_properties() {
        let tree = parse(OPAMP).unwrap();
        let sym = Sym(tree.root(0).unwrap());

        assert_eq!(sym.name(), "LM358");
        assert_eq!(sym.properties().len(), 2);
        assert_eq!(sym.property("Reference"), Some("U"));
        assert_eq!(sym.property("Footprint"), None);
    }

    #[test]
    fn symbol_flags_and_units() {
        let tree = parse(OPAMP).unwrap();
        let sym = Sym(tree.root(0).unwrap());

        assert_eq!(sym.unit_count(), 3);
        assert_eq!(sym.in_bom(), Some(true));
        assert_eq!(sym.on_board(), Some(false));
        assert_eq!(sym.extends(), Some("LM2904"));
        assert!(!sym.is_power());
    }

    #[test]
    fn bare_symbol_has_one_unit() {
        let tree = parse("(symbol \"GND\" (power))").unwrap();
        let sym = Sym(tree.root(0).unwrap());

        assert_eq!(sym.unit_count(), 1);
        assert!(sym.is_power());
        assert_eq!(sym.in_bom(), None);
    }

    #[test]
    fn pin_attributes() {
        let tree = parse(
            r#"(pin power_in inverted (at 1.27 -2.54 90) (length 2.54) (name "VCC") (number "8"))"#,
        )
        .unwrap();
        let pin = Pn(tree.root(0).unwrap());

        assert_eq!(pin.number_value(), Some("8"));
        assert_eq!(pin.electrical_type(), Some("power_in"));
        assert_eq!(pin.graphic_style(), Some("inverted"));
        assert_eq!(pin.length(), Some(2.54));
        assert_eq!(
            pin.position(),
            Some(PinPosition {
                x: 1.27,
                y: -2.54,
                rotation: 90.0
            })
        );
    }

    #[test]
    fn pin_without_number() {
        let tree = parse("(pin passive line (at 0 0))").unwrap();
        let pin = Pn(tree.root(0).unwrap());

        assert_eq!(pin.number().unwrap_err(), FieldNotFound::new("pin", "number"));
        assert_eq!(pin.position().map(|p| p.rotation), Some(0.0));
    }
}
