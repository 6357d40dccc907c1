use crate::storage_engine::key_value_storage::Node;
use log::trace;
use std::mem::replace;

/// Child management for inner nodes. The parent owns both siblings involved in a rotation or
/// merge, so rebalancing is a local restructuring of the parent, its separator item, and the
/// two adjacent children.
///
/// Index  Items  Children
/// 0      d      a,b,c              Items:           d         f
/// 1      f      e                  Children:  a,b,c | e       | g,h
/// 2             g,h
impl Node {
    /// Inserts a child at the given position, shifting later children to the right.
    pub fn insert_child_at(&mut self, pos: usize, child: Node) {
        assert!(
            self.children.len() < self.degree.max_children(),
            "Can't insert child into full node {:?}",
            self
        );
        assert!(pos <= self.children.len(), "Child position {} out of bounds", pos);
        self.children.insert(pos, child);
    }

    /// Removes and returns the child at the given position, shifting later children to the left.
    pub fn remove_child_at(&mut self, pos: usize) -> Node {
        assert!(pos < self.children.len(), "Child position {} out of bounds", pos);
        self.children.remove(pos)
    }

    /// Refills the under-full child at the given position, by borrowing an item from its left
    /// sibling, else from its right sibling, else by merging it with a sibling.
    pub fn fill_child_at(&mut self, pos: usize) {
        let min = self.degree.min_items();
        if pos > 0 && self.children[pos - 1].len() > min {
            self.rotate_right(pos - 1);
        } else if pos + 1 < self.children.len() && self.children[pos + 1].len() > min {
            self.rotate_left(pos + 1);
        } else if pos >= self.len() {
            self.merge(self.len() - 1);
        } else {
            self.merge(pos);
        }
    }

    /// Merges the child at index i with its right sibling, pulling the separator item down
    /// between them. The right sibling is discarded.
    pub fn merge(&mut self, i: usize) {
        trace!("Merging children {} and {}", i, i + 1);
        let separator = self.remove_item_at(i);
        let mut right = self.remove_child_at(i + 1);
        let left = &mut self.children[i];
        assert!(
            left.len() + right.len() < left.degree.max_items(),
            "Can't merge {:?} and {:?}",
            left,
            right
        );
        left.items.push(separator);
        left.items.append(&mut right.items);
        left.children.append(&mut right.children);
    }

    /// Rotates children to the left, by transferring the first item of the child at the given
    /// index up into the separator, and the old separator down into its left sibling. For inner
    /// nodes the first grandchild moves along with it.
    pub fn rotate_left(&mut self, i: usize) {
        trace!("Rotating child {} into {}", i, i - 1);
        let (left, right) = pair_mut(&mut self.children, i - 1);
        let item = right.remove_item_at(0);
        let separator = replace(&mut self.items[i - 1], item);
        left.insert_item_at(left.len(), separator);
        if !left.is_leaf() {
            let child = right.remove_child_at(0);
            left.insert_child_at(left.children.len(), child);
        }
    }

    /// Rotates children to the right, by transferring the last item of the child at the given
    /// index up into the separator, and the old separator down into its right sibling. For inner
    /// nodes the last grandchild moves along with it.
    pub fn rotate_right(&mut self, i: usize) {
        trace!("Rotating child {} into {}", i, i + 1);
        let (left, right) = pair_mut(&mut self.children, i);
        let item = left.remove_item_at(left.len() - 1);
        let separator = replace(&mut self.items[i], item);
        right.insert_item_at(0, separator);
        if !right.is_leaf() {
            let child = left.remove_child_at(left.children.len() - 1);
            right.insert_child_at(0, child);
        }
    }
}

/// Borrows the child at index i and its right sibling mutably at the same time.
fn pair_mut(children: &mut [Node], i: usize) -> (&mut Node, &mut Node) {
    let (head, tail) = children.split_at_mut(i + 1);
    (&mut head[i], &mut tail[0])
}
