//! The arena-backed binary expression tree.
//!
//! Rewrite passes constantly splice subtrees in and out of the tree while also asking questions
//! about a node's surroundings ("what is my sibling?", "is my parent a `*` node?"). Owning
//! pointers in both directions would make that a cyclic ownership problem, so the tree is stored
//! as an arena: nodes live in one `Vec`, and positions are identified by stable [`NodeId`]
//! handles. Children are a `[NodeId; 2]` pair, and the parent is an optional back-handle that is
//! refreshed by a fixup pass after structural edits.
//!
//! A node is either a leaf (a constant or a variable, zero children) or a full binary operator
//! node with exactly two children. The dominant mutation is [`Tree::replace_subtree`]: overwrite
//! a slot's payload and child handles in place, keeping the slot's position under its parent
//! valid. Slots abandoned by a replacement simply become unreachable; they are reclaimed when the
//! tree is dropped.

use crate::parser::op::BinOpKind;

/// A single datum stored in a tree node: a constant, an operator, or a variable.
///
/// Constants keep their decimal source text until a fold actually needs the numeric value, so
/// text that never participates in arithmetic is rendered back untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, stored as its decimal text representation.
    Constant(String),

    /// A binary operator.
    Operator(BinOpKind),

    /// A variable, such as `x`.
    Variable(String),
}

impl Expr {
    /// The precedence of the datum: the operator's precedence, or -1 for leaf data.
    pub fn precedence(&self) -> i8 {
        match self {
            Expr::Operator(op) => op.precedence() as i8,
            Expr::Constant(_) | Expr::Variable(_) => -1,
        }
    }
}

/// A stable handle to a node slot in a [`Tree`].
///
/// Handles stay valid across [`Tree::replace_subtree`]; only the slot's contents change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One slot in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// The datum stored at this position.
    pub expr: Expr,

    /// The ordered child pair. `None` for leaves; operator nodes always have exactly two.
    pub children: Option<[NodeId; 2]>,

    /// Back-reference to the parent, used for context queries only. `None` for the root and for
    /// freshly built detached nodes until a fixup pass runs.
    pub parent: Option<NodeId>,
}

/// An expression tree rooted at a single node.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: usize,
}

impl Tree {
    /// Creates an empty tree. The root must be set before the tree is used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a leaf node.
    pub fn leaf(&mut self, expr: Expr) -> NodeId {
        self.push(Node { expr, children: None, parent: None })
    }

    /// Allocates an operator node over the two given subtrees, wiring their parent handles.
    pub fn binary(&mut self, op: BinOpKind, lhs: NodeId, rhs: NodeId) -> NodeId {
        let id = self.push(Node {
            expr: Expr::Operator(op),
            children: Some([lhs, rhs]),
            parent: None,
        });
        self.nodes[lhs.0].parent = Some(id);
        self.nodes[rhs.0].parent = Some(id);
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// The root of the tree.
    pub fn root(&self) -> NodeId {
        NodeId(self.root)
    }

    /// Marks the given node as the root.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = id.0;
        self.nodes[id.0].parent = None;
    }

    /// The datum stored at the given position.
    pub fn expr(&self, id: NodeId) -> &Expr {
        &self.nodes[id.0].expr
    }

    /// The operator stored at the given position, if it is an operator node.
    pub fn op(&self, id: NodeId) -> Option<BinOpKind> {
        match self.nodes[id.0].expr {
            Expr::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// The child pair of the given node, or `None` for a leaf.
    pub fn children(&self, id: NodeId) -> Option<[NodeId; 2]> {
        self.nodes[id.0].children
    }

    /// The parent of the given node, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The other child of this node's parent, or `None` for the root.
    pub fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let [lhs, rhs] = self.children(self.parent(id)?)?;
        Some(if lhs == id { rhs } else { lhs })
    }

    /// Returns true if the node is a constant leaf.
    pub fn is_constant(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].expr, Expr::Constant(_))
    }

    /// Returns true if the node is a variable leaf.
    pub fn is_variable(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].expr, Expr::Variable(_))
    }

    /// Returns true if the node is an operator node.
    pub fn is_operator(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].expr, Expr::Operator(_))
    }

    /// The source text of a leaf: a constant's literal text or a variable's name.
    pub fn leaf_text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].expr {
            Expr::Constant(text) | Expr::Variable(text) => Some(text),
            Expr::Operator(_) => None,
        }
    }

    /// The numeric value of a constant leaf. `None` if the node is not a constant or its text
    /// does not parse as a decimal number; folds that hit such a constant quietly abort.
    pub fn constant_value(&self, id: NodeId) -> Option<f64> {
        match &self.nodes[id.0].expr {
            Expr::Constant(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Swaps the two children of an operator node in place.
    pub fn swap_children(&mut self, id: NodeId) {
        if let Some(children) = &mut self.nodes[id.0].children {
            children.swap(0, 1);
        }
    }

    /// Copies the subtree rooted at `id` into fresh slots, returning the detached copy.
    ///
    /// Rewrite rules always build their replacement out of copies, so no subtree is ever shared
    /// between two positions.
    pub fn deep_copy(&mut self, id: NodeId) -> NodeId {
        let expr = self.nodes[id.0].expr.clone();
        let children = self.nodes[id.0].children;
        let copy = self.push(Node { expr, children: None, parent: None });

        if let Some([lhs, rhs]) = children {
            let lhs_copy = self.deep_copy(lhs);
            let rhs_copy = self.deep_copy(rhs);
            self.nodes[copy.0].children = Some([lhs_copy, rhs_copy]);
            self.nodes[lhs_copy.0].parent = Some(copy);
            self.nodes[rhs_copy.0].parent = Some(copy);
        }

        copy
    }

    /// Overwrites the target slot's payload and child handles with the source node's, keeping
    /// the target's position under its parent, then refreshes parent handles below the target.
    ///
    /// The source subtree must not contain the target; callers build the source out of
    /// [`Tree::deep_copy`] copies before replacing.
    pub fn replace_subtree(&mut self, target: NodeId, source: NodeId) {
        let expr = self.nodes[source.0].expr.clone();
        let children = self.nodes[source.0].children;
        self.nodes[target.0].expr = expr;
        self.nodes[target.0].children = children;
        self.fix_parents(target);
    }

    /// Rewires every parent back-handle in the subtree rooted at `from`.
    pub fn fix_parents(&mut self, from: NodeId) {
        let mut pending = vec![from];
        while let Some(id) = pending.pop() {
            if let Some([lhs, rhs]) = self.nodes[id.0].children {
                self.nodes[lhs.0].parent = Some(id);
                self.nodes[rhs.0].parent = Some(id);
                pending.push(lhs);
                pending.push(rhs);
            }
        }
    }

    /// Structural equality of two subtrees: same data at every position.
    pub fn structural_eq(&self, a: NodeId, b: NodeId) -> bool {
        if self.nodes[a.0].expr != self.nodes[b.0].expr {
            return false;
        }
        match (self.children(a), self.children(b)) {
            (None, None) => true,
            (Some([al, ar]), Some([bl, br])) => {
                self.structural_eq(al, bl) && self.structural_eq(ar, br)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn constant(tree: &mut Tree, text: &str) -> NodeId {
        tree.leaf(Expr::Constant(text.to_string()))
    }

    /// Builds `x + 2` and returns `(root, x, 2)`.
    fn sample(tree: &mut Tree) -> (NodeId, NodeId, NodeId) {
        let x = tree.leaf(Expr::Variable("x".to_string()));
        let two = constant(tree, "2");
        let root = tree.binary(BinOpKind::Add, x, two);
        tree.set_root(root);
        (root, x, two)
    }

    #[test]
    fn parent_and_sibling_queries() {
        let mut tree = Tree::new();
        let (root, x, two) = sample(&mut tree);

        assert_eq!(tree.parent(x), Some(root));
        assert_eq!(tree.sibling(x), Some(two));
        assert_eq!(tree.sibling(root), None);
    }

    #[test]
    fn deep_copy_is_detached() {
        let mut tree = Tree::new();
        let (root, x, _) = sample(&mut tree);

        let copy = tree.deep_copy(root);
        assert_eq!(tree.parent(copy), None);
        assert!(tree.structural_eq(root, copy));

        // mutating the original must not touch the copy
        let five = constant(&mut tree, "5");
        tree.replace_subtree(x, five);
        assert!(!tree.structural_eq(root, copy));
    }

    #[test]
    fn replace_keeps_position_and_fixes_parents() {
        let mut tree = Tree::new();
        let (root, x, _) = sample(&mut tree);

        // x -> (3 * 4), spliced in at x's position
        let three = constant(&mut tree, "3");
        let four = constant(&mut tree, "4");
        let product = tree.binary(BinOpKind::Mul, three, four);
        tree.replace_subtree(x, product);

        assert_eq!(tree.parent(x), Some(root));
        assert_eq!(tree.op(x), Some(BinOpKind::Mul));
        let [lhs, rhs] = tree.children(x).unwrap();
        assert_eq!(tree.parent(lhs), Some(x));
        assert_eq!(tree.parent(rhs), Some(x));
    }

    #[test]
    fn swap_children_swaps_in_place() {
        let mut tree = Tree::new();
        let (root, x, two) = sample(&mut tree);

        tree.swap_children(root);
        assert_eq!(tree.children(root), Some([two, x]));
    }

    #[test]
    fn constant_value_rejects_non_numeric_text() {
        let mut tree = Tree::new();
        let num = constant(&mut tree, "2.5");
        let junk = constant(&mut tree, "abc");

        assert_eq!(tree.constant_value(num), Some(2.5));
        assert_eq!(tree.constant_value(junk), None);
    }
}
