//! Arena-backed S-expression nodes
//!
//! Provides [`SexpTree`] which owns every node of a document, and
//! [`NodeRef`] for borrowing navigation over it.
//!
//! A list such as `(pin passive line (at 0 3.81 270) (name "~"))` becomes one
//! [`Node`] with tag `pin`, atom arguments `passive` and `line`, and two
//! child nodes tagged `at` and `name`.

use std::fmt::{self, Debug, Display, Formatter};

/// Position of a node inside its [`SexpTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena slot of this node
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Leaf value inside a list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    text: String,
    quoted: bool,
}

impl Atom {
    /// Unquoted atom (`passive`, `3.81`, `yes`)
    #[inline]
    #[must_use]
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    /// Quoted string atom (`"R_0603"`)
    #[inline]
    #[must_use]
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }

    /// Unescaped text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the atom was written as a string literal
    #[inline]
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Numeric view of the atom, if it reads as a number
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One list of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    args: Vec<Atom>,
    children: Vec<NodeId>,
}

impl Node {
    /// Create a list with the given head symbol and nothing else
    #[inline]
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            args: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an atom argument
    #[inline]
    #[must_use]
    pub fn with_arg(mut self, atom: Atom) -> Self {
        self.args.push(atom);
        self
    }

    /// Append an unquoted atom argument
    #[inline]
    #[must_use]
    pub fn with_bare(self, text: impl Into<String>) -> Self {
        self.with_arg(Atom::bare(text))
    }

    /// Append a quoted atom argument
    #[inline]
    #[must_use]
    pub fn with_quoted(self, text: impl Into<String>) -> Self {
        self.with_arg(Atom::quoted(text))
    }

    /// Append a child list already pushed into the tree
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: NodeId) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child lists already pushed into the tree
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children.extend(children);
        self
    }

    /// Head symbol, used as the type tag
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Atom arguments in document order
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Atom] {
        &self.args
    }

    /// Child list ids in document order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// First atom argument, the node's name or content
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.args.first().map(Atom::text)
    }
}

/// Parsed document
///
/// Nodes are stored in an arena and never move or disappear once pushed, so a
/// [`NodeId`] stays valid for the life of the tree.
#[derive(Debug, Clone, Default)]
pub struct SexpTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl SexpTree {
    /// Create empty tree
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the arena
    ///
    /// Children referenced by `node` must have been pushed first.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Add a node and register it as a top-level list
    pub fn push_root(&mut self, node: Node) -> NodeId {
        let id = self.push(node);
        self.roots.push(id);
        id
    }

    /// Top-level list ids in document order
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Top-level list by position
    #[must_use]
    pub fn root(&self, position: usize) -> Option<NodeRef<'_>> {
        self.roots.get(position).and_then(|id| self.get(*id))
    }

    /// Borrow a node by id
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Raw node by id
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Total number of nodes in the arena
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Borrowed handle to one node of a [`SexpTree`]
///
/// Cheap to copy. Never owns the node, so any number of handles may refer to
/// the same list at once.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SexpTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    /// Arena id of this node
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tree this node belongs to
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &'t SexpTree {
        self.tree
    }

    /// Underlying node data
    #[inline]
    #[must_use]
    pub fn node(&self) -> &'t Node {
        // ids handed out by `SexpTree::get` are always in bounds
        &self.tree.nodes[self.id.0]
    }

    /// Type tag (head symbol)
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &'t str {
        self.node().tag()
    }

    /// First atom argument
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'t str> {
        self.node().value()
    }

    /// Atom arguments
    #[inline]
    #[must_use]
    pub fn args(&self) -> &'t [Atom] {
        self.node().args()
    }

    /// Atom argument by position
    #[inline]
    #[must_use]
    pub fn arg(&self, position: usize) -> Option<&'t Atom> {
        self.node().args().get(position)
    }

    /// Number of child lists
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.node().children().len()
    }

    /// Check if node has no child lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node().children().is_empty()
    }

    /// Child list by position
    #[must_use]
    pub fn child(&self, position: usize) -> Option<NodeRef<'t>> {
        self.node()
            .children()
            .get(position)
            .and_then(|id| self.tree.get(*id))
    }

    /// Child lists in document order
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        self.node()
            .children()
            .iter()
            .filter_map(move |id| tree.get(*id))
    }

    /// Direct children carrying the given type tag, in document order
    pub fn children_by_tag<'a>(&self, tag: &'a str) -> impl Iterator<Item = NodeRef<'t>> + 'a
    where
        't: 'a,
    {
        self.children().filter(move |child| child.tag() == tag)
    }

    /// All descendants carrying the given type tag, pre-order
    ///
    /// The node itself is not included.
    #[must_use]
    pub fn descendants_by_tag(&self, tag: &str) -> Vec<NodeRef<'t>> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeRef<'t>> = self.children().collect();
        stack.reverse();

        while let Some(current) = stack.pop() {
            if current.tag() == tag {
                found.push(current);
            }
            let mut nested: Vec<NodeRef<'t>> = current.children().collect();
            nested.reverse();
            stack.extend(nested);
        }

        found
    }

    /// Named field: the first direct child whose tag equals `name`
    #[must_use]
    pub fn field(&self, name: &str) -> Option<NodeRef<'t>> {
        self.children_by_tag(name).next()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .field("value", &self.value())
            .field("children", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    /// (symbol "U1"
    ///   (pin input line (number "1"))
    ///   (property "Ref" "U")
    ///   (pin output line (number "2")))
    /// ```
    fn sample() -> (SexpTree, NodeId) {
        let mut tree = SexpTree::new();
        let n1 = tree.push(Node::new("number").with_quoted("1"));
        let p1 = tree.push(
            Node::new("pin")
                .with_bare("input")
                .with_bare("line")
                .with_child(n1),
        );
        let prop = tree.push(Node::new("property").with_quoted("Ref").with_quoted("U"));
        let n2 = tree.push(Node::new("number").with_quoted("2"));
        let p2 = tree.push(
            Node::new("pin")
                .with_bare("output")
                .with_bare("line")
                .with_child(n2),
        );
        let sym = tree.push_root(
            Node::new("symbol")
                .with_quoted("U1")
                .with_children([p1, prop, p2]),
        );
        (tree, sym)
    }

    #[test]
    fn node_value_is_first_arg() {
        let (tree, sym) = sample();
        let node = tree.get(sym).unwrap();
        assert_eq!(node.tag(), "symbol");
        assert_eq!(node.value(), Some("U1"));
        assert!(node.arg(0).unwrap().is_quoted());
    }

    #[test]
    fn children_by_tag_preserves_order() {
        let (tree, sym) = sample();
        let node = tree.get(sym).unwrap();

        let numbers: Vec<_> = node
            .children_by_tag("pin")
            .filter_map(|p| p.field("number"))
            .filter_map(|n| n.value())
            .collect();

        assert_eq!(numbers, vec!["1", "2"]);
        assert_eq!(node.len(), 3);
    }

    #[test]
    fn descendants_by_tag_walks_preorder() {
        let (tree, sym) = sample();
        let node = tree.get(sym).unwrap();

        let numbers: Vec<_> = node
            .descendants_by_tag("number")
            .into_iter()
            .filter_map(|n| n.value())
            .collect();
        assert_eq!(numbers, vec!["1", "2"]);
        assert!(node.descendants_by_tag("symbol").is_empty());
    }

    #[test]
    fn field_missing_returns_none() {
        let (tree, sym) = sample();
        assert!(tree.get(sym).unwrap().field("footprint").is_none());
    }

    #[test]
    fn get_out_of_bounds() {
        let (tree, _) = sample();
        assert!(tree.get(NodeId(tree.len())).is_none());
        assert!(tree.root(1).is_none());
    }

    #[test]
    fn node_refs_compare_by_tree_and_id() {
        let (tree, sym) = sample();
        let (other, _) = sample();
        assert_eq!(tree.get(sym), tree.root(0));
        assert_ne!(tree.get(sym), other.get(sym));
    }

    #[test]
    fn atom_numeric_view() {
        assert_eq!(Atom::bare("3.81").as_f64(), Some(3.81));
        assert_eq!(Atom::bare("passive").as_f64(), None);
    }
}
