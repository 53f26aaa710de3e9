//! Skip S-expression trees
//!
//! The node layer underneath the schematic object model.
//!
//! # Overview
//!
//! - **SexpTree**: arena owning every parsed node, addressed by [`NodeId`]
//! - **NodeRef**: borrowed handle for navigation, tag filtering and field lookup
//! - **parse**: reader turning KiCad-style S-expression text into a tree
//! - **to_safe_attribute_key**: maps arbitrary names to valid identifiers
//!
//! # Example
//!
//! ```rust
//! use skip_sexp::parse;
//!
//! let tree = parse(r#"(lib_symbols (symbol "R_0603" (pin passive line (number "1"))))"#).unwrap();
//! let lib = tree.root(0).unwrap();
//!
//! let symbol = lib.child(0).unwrap();
//! assert_eq!(symbol.value(), Some("R_0603"));
//! assert_eq!(symbol.children_by_tag("pin").count(), 1);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod node;
pub mod parser;
pub mod safe_key;

// Re-exports
pub use error::ParseError;
pub use node::{Atom, Node, NodeId, NodeRef, SexpTree};
pub use parser::{parse, MAX_DEPTH};
pub use safe_key::{is_safe_attribute_key, to_safe_attribute_key};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
