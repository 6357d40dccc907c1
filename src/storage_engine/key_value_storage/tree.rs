use crate::error::Result;
use crate::storage_engine::key_value_storage::{Degree, Item, Node, Status};
use log::debug;

/// An in-memory B-tree mapping byte keys to byte values, ordered by key. Every node except the
/// root holds between degree-1 and 2*degree-1 items, and all leaves are at the same depth, so
/// lookups, inserts and deletes visit O(log n) nodes.
///
/// Inserts split full nodes on the way down, and deletes refill under-full nodes on the way back
/// up. The tree only grows or shrinks in height at the root.
#[derive(Debug, PartialEq)]
pub struct BTree {
    root: Option<Node>,
    degree: Degree,
}

impl Default for BTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BTree {
    /// Creates a new, empty tree using the default degree.
    pub fn new() -> Self {
        Self { root: None, degree: Degree::default() }
    }

    /// Creates a new, empty tree using the given degree.
    pub fn with_degree(degree: usize) -> Result<Self> {
        Ok(Self { root: None, degree: Degree::new(degree)? })
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels in the tree, 0 if it is empty.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Fetches the value for a key, if it exists.
    pub fn find(&self, key: &[u8]) -> Option<&[u8]> {
        let mut next = self.root.as_ref();
        while let Some(node) = next {
            let (pos, found) = node.search(key);
            if found {
                return Some(node.item(pos).value.as_slice());
            }
            next = node.child(pos);
        }
        None
    }

    /// Sets a key to a value, inserting or updating the key as appropriate. Returns false if an
    /// existing value was overwritten in place, true otherwise. A key that was just promoted by a
    /// child split on the way down is also updated in place, and reports true.
    pub fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) -> bool {
        let degree = self.degree;
        let root = self.root.get_or_insert_with(|| Node::new(degree));
        if root.is_full() {
            Self::split_root(root);
        }
        root.insert(Item::new(key, value))
    }

    /// Deletes a key, returning true if it existed.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        let root = match self.root.as_mut() {
            Some(root) => root,
            None => return false,
        };
        let removed = root.delete(key, false);

        if root.is_empty() {
            let next = if root.is_leaf() {
                None
            } else {
                assert_eq!(1, root.children.len(), "Empty root with several children");
                Some(root.remove_child_at(0))
            };
            debug!("Collapsing empty root, height now {}", next.as_ref().map_or(0, Node::height));
            self.root = next;
        }

        removed.is_some()
    }

    /// Returns structural statistics about the tree.
    pub fn status(&self) -> Status {
        let (keys, nodes) = self.root.as_ref().map_or((0, 0), Node::count);
        Status { keys, nodes, height: self.height(), degree: self.degree.get() }
    }

    /// Splits a full root, growing the tree by one level. The new root holds the median and has
    /// the old root and its new sibling as its two children.
    fn split_root(root: &mut Node) {
        debug!("Splitting full root with {} items", root.len());
        let degree = root.degree;
        let mut left = std::mem::replace(root, Node::new(degree));
        let (median, right) = left.split();
        root.insert_item_at(0, median);
        root.insert_child_at(0, left);
        root.insert_child_at(1, right);
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Checks the structural invariants of the whole tree, panicking on violations.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        if let Some(root) = &self.root {
            assert!(!root.is_empty(), "Empty root left in tree");
            assert_eq!(self.height(), root.assert_invariants(true, None, None));
        }
    }

    /// Returns all keys in the tree, in order.
    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<Vec<u8>> {
        let mut items = Vec::new();
        if let Some(root) = &self.root {
            root.collect_items(&mut items);
        }
        items.into_iter().map(|item| item.key.clone()).collect()
    }
}
