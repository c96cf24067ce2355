//! Parsed S-expression trees.

use std::fmt::{Display, Formatter};

/// A node of a parsed S-expression.
///
/// The first child of an interior node is its _tag_; it labels the node when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// An atom: a run of characters other than whitespace and parentheses.
    Leaf(String),
    /// A parenthesized list.
    Interior(Vec<Tree>),
}

impl Tree {
    pub fn leaf(text: impl Into<String>) -> Self {
        Tree::Leaf(text.into())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// The children of an interior node; empty for a leaf.
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Interior(children) => children,
        }
    }

    /// The tag of an interior node, if it has one and it is an atom.
    pub fn tag(&self) -> Option<&str> {
        match self.children().first() {
            Some(Tree::Leaf(tag)) => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Total number of nodes in this tree, including tags and this node.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Tree::node_count).sum::<usize>()
    }
}

impl From<&str> for Tree {
    fn from(value: &str) -> Self {
        Tree::leaf(value)
    }
}

impl From<Vec<Tree>> for Tree {
    fn from(value: Vec<Tree>) -> Self {
        Tree::Interior(value)
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tree::Leaf(text) => write!(f, "{text}"),
            Tree::Interior(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
