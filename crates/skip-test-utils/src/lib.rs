//! Testing utilities for skip workspace
//!
//! Library fixtures and tracing setup shared by the crates' tests.

#![allow(missing_docs)]

use skip_sexp::{parse, NodeRef, SexpTree};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber, honouring `RUST_LOG`
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// S-expression text for a single pin numbered `number`
pub fn pin_source(number: usize) -> String {
    format!(
        "(pin passive line (at 0 {} 0) (length 2.54) (name {}) (number {}))",
        number as f64 * 2.54,
        quote(&format!("P{number}")),
        quote(&number.to_string())
    )
}

/// S-expression text for a symbol with `pins` direct pin children
pub fn symbol_source(name: &str, pins: usize) -> String {
    let mut out = format!(
        "(symbol {} (in_bom yes) (on_board yes) (property \"Reference\" \"U\")",
        quote(name)
    );
    for number in 1..=pins {
        out.push(' ');
        out.push_str(&pin_source(number));
    }
    out.push(')');
    out
}

/// `(lib_symbols ...)` text with one symbol per `(name, pin count)` entry
pub fn library_source(symbols: &[(&str, usize)]) -> String {
    let body: Vec<String> = symbols
        .iter()
        .map(|(name, pins)| symbol_source(name, *pins))
        .collect();
    format!("(lib_symbols {})", body.join("\n  "))
}

/// Parsed tree for [`library_source`]
pub fn parse_library(symbols: &[(&str, usize)]) -> SexpTree {
    parse(&library_source(symbols)).unwrap()
}

/// The `(lib_symbols ...)` node of a fixture tree
pub fn library_root(tree: &SexpTree) -> NodeRef<'_> {
    tree.root(0).unwrap()
}
