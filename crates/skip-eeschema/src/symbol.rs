//! Library symbols with cached pin views
//!
//! Provides [`LibSymbol`], one entry of a symbol library. Its pins are
//! scanned on first request and kept for the life of the entity.

use crate::base::{PinBase, SymbolBase};
use crate::config::{PinScan, PinSearch};
use crate::pin::LibSymbolPin;
use crate::wrapper::EntityWrapper;
use once_cell::sync::OnceCell;
use skip_sexp::NodeRef;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

/// Symbol of a schematic library
///
/// # Pin cache
/// [`pins`](Self::pins) is computed once. Later calls return the same slice
/// without rescanning. The view is a snapshot of the node at first access;
/// there is no refresh. The tree is borrowed for `'t`, so it cannot change
/// underneath a live entity.
pub struct LibSymbol<'t> {
    node: NodeRef<'t>,
    pin_scan: Arc<PinScan>,
    pins: OnceCell<Vec<LibSymbolPin<'t>>>,
}

impl<'t> LibSymbol<'t> {
    /// Bind a symbol entity using the default pin scan
    #[inline]
    #[must_use]
    pub fn new(node: NodeRef<'t>) -> Self {
        Self::with_pin_scan(node, Arc::new(PinScan::default()))
    }

    /// Bind a symbol entity with explicit pin scan settings
    #[inline]
    #[must_use]
    pub fn with_pin_scan(node: NodeRef<'t>, pin_scan: Arc<PinScan>) -> Self {
        Self {
            node,
            pin_scan,
            pins: OnceCell::new(),
        }
    }

    /// Pins of this symbol, in document order
    #[must_use]
    pub fn pins(&self) -> &[LibSymbolPin<'t>] {
        self.pins.get_or_init(|| self.scan_pins())
    }

    /// Whether the pin view has been computed yet
    #[inline]
    #[must_use]
    pub fn pins_loaded(&self) -> bool {
        self.pins.get().is_some()
    }

    /// First pin with the given number
    #[must_use]
    pub fn pin(&self, number: &str) -> Option<&LibSymbolPin<'t>> {
        self.pins()
            .iter()
            .find(|pin| pin.number_value() == Some(number))
    }

    fn scan_pins(&self) -> Vec<LibSymbolPin<'t>> {
        let tag = self.pin_scan.tag.as_str();
        let pins: Vec<_> = match self.pin_scan.search {
            PinSearch::Children => self
                .node
                .children_by_tag(tag)
                .map(LibSymbolPin::new)
                .collect(),
            PinSearch::Descendants => self
                .node
                .descendants_by_tag(tag)
                .into_iter()
                .map(LibSymbolPin::new)
                .collect(),
        };

        tracing::debug!("Cached {} pins for symbol '{}'", pins.len(), self.name());
        pins
    }
}

impl<'t> EntityWrapper<'t> for LibSymbol<'t> {
    #[inline]
    fn wrapped(&self) -> NodeRef<'t> {
        self.node
    }

    #[inline]
    fn kind(&self) -> &'static str {
        "symbol"
    }
}

impl<'t> SymbolBase<'t> for LibSymbol<'t> {}

impl Display for LibSymbol<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<LibSymbol {}>", self.name())
    }
}

impl Debug for LibSymbol<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibSymbol")
            .field("node", &self.node)
            .field("pin_scan", &self.pin_scan)
            .field("pins_loaded", &self.pins_loaded())
            .finish()
    }
}
