//! Flatten a parsed tree into graph nodes and edges.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Display;

use crate::data::Tree;

/// Tags that are displayed as-is. Any other tag is shown as `<tag>`.
pub type KnownTags = HashSet<String>;

/// Display attributes of a node or edge, e.g. `shape` => `box`.
pub type Attributes = BTreeMap<&'static str, &'static str>;

/// Suffix marking the head child of a phrase.
pub const HEAD_MARKER: &str = "=H";

const FOREGROUND: &str = "black";

/// Name of a node in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One statement of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Node {
        id: NodeId,
        label: String,
        attributes: Attributes,
    },
    Edge {
        from: NodeId,
        to: NodeId,
        attributes: Attributes,
    },
}

/// Intermediate state when flattening a tree.
///
/// Node IDs are handed out in pre-order from a counter owned by the builder.
/// A builder can be reused to keep numbering unique across several trees.
pub struct GraphBuilder<'a> {
    known: &'a KnownTags,
    next_id: usize,
    entries: Vec<Entry>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(known: &'a KnownTags) -> Self {
        Self::starting_at(known, 0)
    }

    /// Start numbering nodes from `first_id`.
    pub fn starting_at(known: &'a KnownTags, first_id: usize) -> Self {
        GraphBuilder {
            known,
            next_id: first_id,
            entries: Vec::new(),
        }
    }

    /// The ID the next node will get.
    pub fn next_id(&self) -> NodeId {
        NodeId(self.next_id)
    }

    /// Add the tree to the graph. Returns the ID of its root node.
    pub fn add_tree(&mut self, tree: &Tree) -> NodeId {
        self.visit(tree, None)
    }

    pub fn finish(self) -> Vec<Entry> {
        self.entries
    }

    fn add_node(&mut self, label: String, shape: &'static str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let attributes = Attributes::from([
            ("shape", shape),
            ("fontcolor", FOREGROUND),
            ("color", FOREGROUND),
        ]);
        self.entries.push(Entry::Node {
            id,
            label,
            attributes,
        });
        id
    }

    /// Add a node for `tree`, the edge into it (if it has a parent), then its subtree.
    fn visit(&mut self, tree: &Tree, parent: Option<(NodeId, bool)>) -> NodeId {
        let id = match tree {
            Tree::Leaf(text) => self.add_node(text.clone(), "box"),
            Tree::Interior(children) => {
                let label = children
                    .first()
                    .map(|tag| self.display_tag(tag))
                    .unwrap_or_default();
                self.add_node(label, "none")
            }
        };

        if let Some((from, bold)) = parent {
            let mut attributes = Attributes::from([("arrowhead", "none"), ("color", FOREGROUND)]);
            if bold {
                attributes.insert("style", "bold");
            }
            self.entries.push(Entry::Edge {
                from,
                to: id,
                attributes,
            });
        }

        let children = tree.children();
        for child in children.iter().skip(1) {
            let bold = children.len() > 2 && is_head(child);
            self.visit(child, Some((id, bold)));
        }
        id
    }

    fn display_tag(&self, tag: &Tree) -> String {
        let text = tag.to_string();
        if self.known.contains(&text) {
            text
        } else {
            format!("<{text}>")
        }
    }
}

/// Whether the subtree is a phrase whose tag carries the head marker.
fn is_head(tree: &Tree) -> bool {
    tree.tag().is_some_and(|tag| tag.ends_with(HEAD_MARKER))
}

/// Flatten the tree into graph entries, numbering nodes from 0.
pub fn build(tree: &Tree, known: &KnownTags) -> Vec<Entry> {
    let mut builder = GraphBuilder::new(known);
    builder.add_tree(tree);
    let entries = builder.finish();
    tracing::debug!("built graph with {} entries", entries.len());
    entries
}
