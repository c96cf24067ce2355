//! Support for reading S-expressions from strings.

use crate::data::Tree;

/// Tag given to a top-level expression that has no leading atom, e.g. `((a b) (c d))`.
pub const ROOT_TAG: &str = "ROOT";

/// Error type if a read does not complete.
///
/// A reader may experience a true parsing error, e.g. "())", that no additional input can fix.
/// This is distinct from a reader that gets an unexpected end-of-input, e.g. "(()":
/// it may be that more input will fix the issue. [`ReadErr::is_incomplete`] covers this distinction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadErr {
    #[error("too many closing parens: unmatched ')' at offset {offset}")]
    Unbalanced { offset: usize },
    #[error("didn't close all parens, depth {depth}")]
    Incomplete { depth: usize },
    #[error("no '(' found in input")]
    Empty,
}

impl ReadErr {
    /// True if more input could complete the expression.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ReadErr::Incomplete { .. })
    }
}

/// The main result type for this module:
/// a T (usually a tree), or an error.
pub type ReadResult<T> = Result<T, ReadErr>;

/// Intermediate state of a read.
#[derive(Default)]
struct Reader {
    /// Expressions completed at the top level.
    top: Vec<Tree>,
    /// A stack of incomplete lists, by depth.
    open: Vec<Vec<Tree>>,
    /// Atom in progress.
    atom: String,
}

impl Reader {
    /// The list that new children are appended to.
    fn current(&mut self) -> &mut Vec<Tree> {
        match self.open.last_mut() {
            Some(list) => list,
            None => &mut self.top,
        }
    }

    fn flush_atom(&mut self) {
        if !self.atom.is_empty() {
            let atom = Tree::Leaf(std::mem::take(&mut self.atom));
            self.current().push(atom);
        }
    }

    fn open_list(&mut self) {
        // An atom running straight into '(' is dropped, not flushed.
        self.atom.clear();
        self.open.push(Vec::new());
    }

    fn close_list(&mut self, offset: usize) -> ReadResult<()> {
        self.flush_atom();
        let children = self.open.pop().ok_or(ReadErr::Unbalanced { offset })?;
        self.current().push(Tree::Interior(children));
        Ok(())
    }

    fn finish(self) -> ReadResult<Tree> {
        if !self.open.is_empty() {
            return Err(ReadErr::Incomplete {
                depth: self.open.len(),
            });
        }
        match self.top.into_iter().next() {
            Some(Tree::Interior(mut children)) => {
                if matches!(children.first(), Some(Tree::Interior(_))) {
                    children.insert(0, Tree::leaf(ROOT_TAG));
                }
                Ok(Tree::Interior(children))
            }
            // The scan starts at a '(', so a completed read always has a list first.
            _ => Err(ReadErr::Empty),
        }
    }
}

/// Read the first parenthesized expression in the input.
///
/// Anything before the first '(' is ignored, as is anything after the first
/// top-level expression closes (apart from unbalanced closing parens).
pub fn read(input: &str) -> ReadResult<Tree> {
    let start = input.find('(').ok_or(ReadErr::Empty)?;
    let mut reader = Reader::default();

    for (i, ch) in input[start..].char_indices() {
        match ch {
            '(' => reader.open_list(),
            ')' => reader.close_list(start + i)?,
            c if c.is_whitespace() => reader.flush_atom(),
            c => reader.atom.push(c),
        }
    }
    reader.flush_atom();

    let tree = reader.finish()?;
    tracing::debug!("read expression with {} nodes", tree.node_count());
    Ok(tree)
}
