use core::fmt;

use crate::{
    arena::{Handle, Store},
    syntax::Span,
};

pub type NodeId<'a> = Handle<Node<'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Name(&'a str),
    Integer(i64),
    /// Head of a nested group.
    SubExpression(NodeId<'a>),
}

/// One element of a group. Elements of the same group are chained through
/// `next`; the last one has `next == None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'a> {
    pub(crate) kind: NodeKind<'a>,
    pub(crate) span: Span,
    pub(crate) next: Option<NodeId<'a>>,
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind<'a> {
        self.kind
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn next(&self) -> Option<NodeId<'a>> {
        self.next
    }
}

/// A parsed expression: every node plus the head of the outermost group.
///
/// Nodes are only written by the parser. Everything here hands out shared
/// references, so evaluating a tree can't change it.
#[derive(Clone, PartialEq, Eq)]
pub struct ExprTree<'a> {
    pub(crate) nodes: Store<'a, Node<'a>>,
    pub(crate) root: NodeId<'a>,
}

impl<'a> ExprTree<'a> {
    /// Head of the outermost group.
    pub fn root(&self) -> NodeId<'a> {
        self.root
    }

    pub fn node(&self, id: NodeId<'a>) -> &Node<'a> {
        self.nodes.get(id)
    }

    /// Total number of nodes, across all groups.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The group starting at `head`, in order, head included.
    pub fn siblings(&self, head: NodeId<'a>) -> Siblings<'_, 'a> {
        Siblings {
            tree: self,
            next: Some(head),
        }
    }

    fn fmt_group(&self, head: NodeId<'a>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (_, node)) in self.siblings(head).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match node.kind {
                NodeKind::Name(name) => write!(f, "{name}")?,
                NodeKind::Integer(value) => write!(f, "{value}")?,
                NodeKind::SubExpression(child) => self.fmt_group(child, f)?,
            }
        }
        write!(f, ")")
    }
}

/// Iterator over one group, see [`ExprTree::siblings`].
#[derive(Clone)]
pub struct Siblings<'t, 'a> {
    tree: &'t ExprTree<'a>,
    next: Option<NodeId<'a>>,
}

impl<'t, 'a> Iterator for Siblings<'t, 'a> {
    type Item = (NodeId<'a>, &'t Node<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.node(id);
        self.next = node.next;
        Some((id, node))
    }
}

impl fmt::Display for ExprTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_group(self.root, f)
    }
}

impl fmt::Debug for ExprTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprTree")
            .field("root", &self.root)
            .field("nodes", &self.nodes)
            .finish()
    }
}
