use crate::storage_engine::key_value_storage::{Degree, Item};
use std::cmp::Ordering;
use std::mem::replace;

/// A B-tree node. Items are kept sorted by key, and inner nodes have exactly one child more than
/// they have items, where the child at index i holds the keys between items i-1 and i. A node
/// without children is a leaf.
///
/// Both vectors are allocated up front with the maximum capacity given by the degree, and are
/// never grown beyond it, so their lengths act as the item and child counts of a fixed-size node.
/// The root node can hold anywhere between 0 and the maximum number of items, while all other
/// nodes stay between degree-1 and 2*degree-1 items.
#[derive(Debug, PartialEq)]
pub struct Node {
    pub(super) items: Vec<Item>,
    pub(super) children: Vec<Node>,
    pub(super) degree: Degree,
}

impl Node {
    /// Creates a new, empty node of the given degree.
    pub fn new(degree: Degree) -> Self {
        Self {
            items: Vec::with_capacity(degree.max_items()),
            children: Vec::with_capacity(degree.max_children()),
            degree,
        }
    }

    /// Returns the number of items in the node.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.degree.max_items()
    }

    /// Returns the item at the given position.
    pub fn item(&self, pos: usize) -> &Item {
        &self.items[pos]
    }

    /// Returns the child at the given position, if any. Always None for leaves.
    pub fn child(&self, pos: usize) -> Option<&Node> {
        self.children.get(pos)
    }

    /// Searches the node for a key. Returns the position of the first item with a key greater
    /// than or equal to the given key, and whether that item's key is an exact match. When there
    /// is no match, the position is also the index of the child responsible for the key.
    pub fn search(&self, key: &[u8]) -> (usize, bool) {
        match self.items.binary_search_by(|item| item.key.as_slice().cmp(key)) {
            Ok(pos) => (pos, true),
            Err(pos) => (pos, false),
        }
    }

    /// Inserts an item at the given position, shifting later items to the right.
    pub fn insert_item_at(&mut self, pos: usize, item: Item) {
        assert!(self.len() < self.degree.max_items(), "Can't insert into full node {:?}", self);
        assert!(pos <= self.len(), "Item position {} out of bounds in {:?}", pos, self);
        self.items.insert(pos, item);
    }

    /// Removes and returns the item at the given position, shifting later items to the left.
    pub fn remove_item_at(&mut self, pos: usize) -> Item {
        assert!(pos < self.len(), "Item position {} out of bounds in {:?}", pos, self);
        self.items.remove(pos)
    }

    /// Splits a full node in two. The node keeps the items (and children) before the median,
    /// while the ones after it are moved to a new right sibling. Returns the median item, to be
    /// promoted into the parent, and the new sibling.
    pub fn split(&mut self) -> (Item, Node) {
        assert_eq!(self.len(), self.degree.max_items(), "Can't split non-full node {:?}", self);
        let mid = self.degree.min_items();

        let mut sibling = Node::new(self.degree);
        sibling.items.extend(self.items.drain(mid + 1..));
        if !self.is_leaf() {
            sibling.children.extend(self.children.drain(mid + 1..));
        }
        let median = self.remove_item_at(mid);

        (median, sibling)
    }

    /// Inserts an item into the subtree rooted at this node, or updates the value in place if the
    /// key already exists. Returns true if the item was placed as a new entry, false if an
    /// existing entry was overwritten.
    ///
    /// Full children are split before descending into them, so the node receiving the item always
    /// has room for it. The caller must make sure this node itself is not full.
    pub fn insert(&mut self, item: Item) -> bool {
        let (mut pos, found) = self.search(&item.key);
        if found {
            self.items[pos] = item;
            return false;
        }

        if self.is_leaf() {
            self.insert_item_at(pos, item);
            return true;
        }

        if self.children[pos].is_full() {
            let (median, sibling) = self.children[pos].split();
            self.insert_item_at(pos, median);
            self.insert_child_at(pos + 1, sibling);

            // The promoted median now separates the two halves, so pick a side again.
            match item.key.cmp(&self.items[pos].key) {
                Ordering::Less => {}
                Ordering::Greater => pos += 1,
                Ordering::Equal => {
                    self.items[pos] = item;
                    return true;
                }
            }
        }

        self.children[pos].insert(item)
    }

    /// Deletes a key from the subtree rooted at this node, returning the removed item if the key
    /// existed.
    ///
    /// A key found in an inner node is replaced by its in-order successor, which is extracted
    /// from the leftmost leaf of the right subtree by descending with `seeking_successor` set.
    /// Children left under-full by the removal are refilled on the way back up, so only this
    /// node may end up with fewer than the minimum number of items.
    pub fn delete(&mut self, key: &[u8], seeking_successor: bool) -> Option<Item> {
        let (pos, found) = self.search(key);

        if self.is_leaf() {
            return if found {
                Some(self.remove_item_at(pos))
            } else if seeking_successor {
                Some(self.remove_item_at(0))
            } else {
                None
            };
        }

        let next = if found { pos + 1 } else { pos };
        let removed = self.children[next].delete(key, found || seeking_successor);

        let removed = if found {
            let successor = removed.unwrap_or_else(|| {
                panic!("Missing in-order successor for {:?}", self.items[pos])
            });
            Some(replace(&mut self.items[pos], successor))
        } else {
            removed
        };

        if self.children[next].len() < self.degree.min_items() {
            self.fill_child_at(next);
        }
        removed
    }

    /// Counts the items and nodes in the subtree rooted at this node.
    pub fn count(&self) -> (usize, usize) {
        self.children.iter().fold((self.len(), 1), |(items, nodes), child| {
            let (child_items, child_nodes) = child.count();
            (items + child_items, nodes + child_nodes)
        })
    }

    /// Returns the height of the subtree rooted at this node, counting this node.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self;
        while let Some(child) = node.children.first() {
            height += 1;
            node = child;
        }
        height
    }

    /// Checks the structural invariants of the subtree rooted at this node, panicking on any
    /// violation. Keys must lie strictly within (lower, upper). Returns the subtree height.
    #[cfg(test)]
    pub(crate) fn assert_invariants(
        &self,
        is_root: bool,
        lower: Option<&[u8]>,
        upper: Option<&[u8]>,
    ) -> usize {
        assert!(self.len() <= self.degree.max_items(), "Overfull node {:?}", self);
        if !is_root {
            assert!(self.len() >= self.degree.min_items(), "Underfull node {:?}", self);
        }
        assert!(
            self.is_leaf() || self.children.len() == self.len() + 1,
            "Node has {} items but {} children",
            self.len(),
            self.children.len()
        );
        for pair in self.items.windows(2) {
            assert!(pair[0].key < pair[1].key, "Unordered items {:?}", pair);
        }
        if let (Some(lower), Some(first)) = (lower, self.items.first()) {
            assert!(lower < first.key.as_slice(), "Item {:?} out of bounds", first);
        }
        if let (Some(upper), Some(last)) = (upper, self.items.last()) {
            assert!(last.key.as_slice() < upper, "Item {:?} out of bounds", last);
        }

        let mut heights = self.children.iter().enumerate().map(|(i, child)| {
            let lower = if i == 0 { lower } else { Some(self.items[i - 1].key.as_slice()) };
            let upper = self.items.get(i).map(|item| item.key.as_slice()).or(upper);
            child.assert_invariants(false, lower, upper)
        });
        match heights.next() {
            None => 1,
            Some(height) => {
                assert!(heights.all(|h| h == height), "Unbalanced children in {:?}", self);
                height + 1
            }
        }
    }

    /// Appends all items of the subtree rooted at this node, in key order.
    #[cfg(test)]
    pub(crate) fn collect_items<'a>(&'a self, items: &mut Vec<&'a Item>) {
        for (i, item) in self.items.iter().enumerate() {
            if let Some(child) = self.children.get(i) {
                child.collect_items(items);
            }
            items.push(item);
        }
        if let Some(child) = self.children.get(self.len()) {
            child.collect_items(items);
        }
    }
}
