//! S-expression reader
//!
//! Reads KiCad-style text into a [`SexpTree`]:
//!
//! ```text
//! (kicad_symbol_lib (version 20211014)
//!   (symbol "R_0603" (in_bom yes)
//!     (pin passive line (at 0 3.81 270) (length 1.27)
//!       (name "~") (number "1"))))
//! ```
//!
//! Each list must start with a bare head symbol. Atoms and nested lists may
//! follow in any order; atoms become arguments, lists become children.

use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, cut, map, opt, value},
    error::{context, ContextError, ParseError as NomParseError, VerboseError},
    multi::many0,
    sequence::{delimited, preceded, terminated},
    IResult,
};

use crate::error::ParseError;
use crate::node::{Atom, Node, NodeId, SexpTree};

// ============================================================================
// Public API
// ============================================================================

/// Deepest list nesting accepted by [`parse`]
///
/// KiCad documents stay well under twenty levels.
pub const MAX_DEPTH: usize = 128;

/// Parse a complete document into a tree
///
/// Every top-level list becomes a root of the returned tree.
///
/// # Errors
/// Returns [`ParseError::TooDeep`] if lists nest deeper than [`MAX_DEPTH`],
/// and a syntax error for malformed input.
pub fn parse(input: &str) -> Result<SexpTree, ParseError> {
    check_depth(input)?;

    let lists = match all_consuming(document::<VerboseError<&str>>)(input) {
        Ok((_, lists)) => lists,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(ParseError::syntax(nom::error::convert_error(input, e)));
        }
        Err(nom::Err::Incomplete(_)) => return Err(ParseError::Incomplete),
    };

    if lists.is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let mut tree = SexpTree::new();
    for list in lists {
        let node = lower(&mut tree, list);
        tree.push_root(node);
    }
    Ok(tree)
}

/// Reject input nested deeper than [`MAX_DEPTH`] before the recursive reader
/// sees it
///
/// Parentheses inside string literals do not count. Unbalanced input is left
/// for the reader to report.
fn check_depth(input: &str) -> Result<(), ParseError> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for c in input.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '(' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(ParseError::TooDeep { limit: MAX_DEPTH });
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

// ============================================================================
// Lowering into the arena
// ============================================================================

/// List as read, before it is placed in the arena
#[derive(Debug, Clone, PartialEq)]
struct RawList {
    head: String,
    elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
enum Element {
    Atom(Atom),
    List(RawList),
}

/// Push all nested lists of `list`, returning the (not yet pushed) node itself
fn lower(tree: &mut SexpTree, list: RawList) -> Node {
    let mut node = Node::new(list.head);
    for element in list.elements {
        node = match element {
            Element::Atom(atom) => node.with_arg(atom),
            Element::List(nested) => {
                let child = lower(tree, nested);
                let id: NodeId = tree.push(child);
                node.with_child(id)
            }
        };
    }
    node
}

// ============================================================================
// Internal Parsers
// ============================================================================

fn document<'a, E: NomParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Vec<RawList>, E> {
    terminated(many0(preceded(multispace0, list)), multispace0)(input)
}

fn list<'a, E: NomParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, RawList, E> {
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, head) = cut(context("list head", bare))(input)?;
    let (input, elements) = many0(preceded(multispace0, element))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = cut(context("closing parenthesis", char(')')))(input)?;

    Ok((
        input,
        RawList {
            head: head.to_string(),
            elements,
        },
    ))
}

fn element<'a, E: NomParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Element, E> {
    alt((
        map(list, Element::List),
        map(quoted, |text| Element::Atom(Atom::quoted(text))),
        map(bare, |text: &str| Element::Atom(Atom::bare(text))),
    ))(input)
}

fn bare<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')' && c != '"')(input)
}

fn quoted<'a, E: NomParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, String, E> {
    let escapes = alt((
        value("\\", tag("\\")),
        value("\"", tag("\"")),
        value("\n", tag("n")),
        value("\t", tag("t")),
    ));
    delimited(
        char('"'),
        map(
            opt(escaped_transform(is_not("\\\""), '\\', escapes)),
            Option::unwrap_or_default,
        ),
        cut(context("closing quote", char('"'))),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_nested_library() {
        let tree = parse(
            r#"(lib_symbols
                 (symbol "R_0603" (in_bom yes)
                   (pin passive line (at 0 3.81 270) (name "~") (number "1"))
                   (pin passive line (at 0 -3.81 90) (name "~") (number "2"))))"#,
        )
        .unwrap();

        let lib = tree.root(0).unwrap();
        assert_eq!(lib.tag(), "lib_symbols");
        assert_eq!(lib.len(), 1);

        let symbol = lib.child(0).unwrap();
        assert_eq!(symbol.value(), Some("R_0603"));
        assert_eq!(symbol.children_by_tag("pin").count(), 2);

        let pin = symbol.child(1).unwrap();
        let args: Vec<_> = pin.args().iter().map(Atom::text).collect();
        assert_eq!(args, vec!["passive", "line"]);
        assert_eq!(pin.field("number").and_then(|n| n.value()), Some("1"));
    }

    #[test]
    fn parse_string_escapes() {
        let tree = parse(r#"(property "Desc" "say \"hi\"\\n" "")"#).unwrap();
        let prop = tree.root(0).unwrap();
        assert_eq!(prop.arg(1).unwrap().text(), "say \"hi\"\\n");
        assert_eq!(prop.arg(2).unwrap().text(), "");
        assert!(prop.arg(2).unwrap().is_quoted());
    }

    #[test]
    fn parse_multiple_roots() {
        let tree = parse("(a 1) (b 2)\n").unwrap();
        assert_eq!(tree.roots().len(), 2);
        assert_eq!(tree.root(1).unwrap().tag(), "b");
    }

    #[test]
    fn parse_rejects_unbalanced() {
        let err = parse("(symbol \"R\" (pin)").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn parse_rejects_deep_nesting() {
        let err = parse(&"(a ".repeat(100_000)).unwrap_err();
        assert_eq!(err, ParseError::TooDeep { limit: MAX_DEPTH });

        let balanced = format!("{}{}", "(a ".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(parse(&balanced).unwrap_err(), ParseError::TooDeep { limit: MAX_DEPTH });
    }

    #[test]
    fn parse_accepts_nesting_at_limit() {
        let source = format!("{}{}", "(a ".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let tree = parse(&source).unwrap();
        assert_eq!(tree.len(), MAX_DEPTH);
    }

    #[test]
    fn parens_in_strings_do_not_count_towards_depth() {
        let deep_text = "(".repeat(MAX_DEPTH * 2);
        let tree = parse(&format!("(property \"Desc\" \"{deep_text}\")")).unwrap();
        assert_eq!(tree.root(0).unwrap().arg(1).unwrap().text(), deep_text);
    }

    #[test]
    fn parse_rejects_headless_list() {
        assert!(parse("(\"quoted head\")").is_err());
        assert!(parse("()").is_err());
    }

    #[test]
    fn parse_rejects_empty_document() {
        assert_eq!(parse("   \n").unwrap_err(), ParseError::EmptyDocument);
    }
}
