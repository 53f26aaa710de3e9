//! Skip schematic symbol libraries
//!
//! Typed, navigable view over the `lib_symbols` section of a KiCad schematic
//! or symbol library.
//!
//! # Overview
//!
//! - **LibSymbols**: every symbol of a library, by position, raw name or sanitized name
//! - **LibSymbol**: one symbol, with a pin view computed once on first access
//! - **LibSymbolPin**: one pin, with name and number
//! - **EntityWrapper**: binding of a typed entity to its node, with field fallback
//!
//! # Example
//!
//! ```rust
//! use skip_eeschema::prelude::*;
//!
//! let tree = skip_sexp::parse(r#"
//!     (lib_symbols
//!       (symbol "R_0603"
//!         (pin passive line (name "~") (number "1"))
//!         (pin passive line (name "~") (number "2"))))
//! "#).unwrap();
//!
//! let lib = LibSymbols::wrap(tree.root(0).unwrap());
//! assert!(lib.contains("R_0603"));
//!
//! let resistor = lib.get("R_0603").unwrap();
//! assert_eq!(resistor.pins().len(), 2);
//! assert_eq!(resistor.pins()[0].to_string(), "<Pin '~' (1) >");
//! ```

#![warn(missing_docs)]

pub mod base;
pub mod config;
pub mod error;
pub mod index;
pub mod pin;
pub mod symbol;
pub mod validation;
pub mod wrapper;

// Re-exports
pub use base::{PinBase, PinPosition, Property, SymbolBase};
pub use config::{IndexConfig, PinScan, PinSearch};
pub use error::{ConfigError, EeschemaError, EeschemaResult, FieldNotFound, IndexError};
pub use index::LibSymbols;
pub use pin::LibSymbolPin;
pub use symbol::LibSymbol;
pub use validation::{CollisionDiagnostic, CollisionLog, ConflictKind};
pub use wrapper::{EntityWrapper, WRAPPER_FIELDS};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for library navigation
    pub use crate::{
        EntityWrapper, FieldNotFound, IndexConfig, IndexError, LibSymbol, LibSymbolPin,
        LibSymbols, PinBase, SymbolBase,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
