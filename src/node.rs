use hashbrown::HashMap;

/// Child nodes keyed by their exact distance from the parent item. The value
/// is an index into the tree's node arena.
pub(crate) type ChildMap = HashMap<u32, u32, std::hash::BuildHasherDefault<ahash::AHasher>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) children: ChildMap,
}

impl<T> Node<T> {
    pub(crate) fn new(item: T) -> Self {
        Self {
            item,
            children: ChildMap::default(),
        }
    }

    /// Gets the arena index of the child stored at exactly `distance`.
    #[inline(always)]
    pub(crate) fn child(&self, distance: u32) -> Option<u32> {
        self.children.get(&distance).copied()
    }

    /// Iterates over the arena indices of the children whose key lies in
    /// `lower..=upper`.
    pub(crate) fn children_within(
        &self,
        lower: u32,
        upper: u32,
    ) -> impl Iterator<Item = u32> + '_ {
        self.children
            .iter()
            .filter(move |&(&key, _)| key >= lower && key <= upper)
            .map(|(_, &child)| child)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_children_within() {
        let mut node = Node::new(0u8);
        node.children.insert(1, 10);
        node.children.insert(3, 30);
        node.children.insert(7, 70);
        assert_eq!(node.child(3), Some(30));
        assert_eq!(node.child(2), None);
        let mut within = node.children_within(2, 7).collect::<Vec<u32>>();
        within.sort_unstable();
        assert_eq!(within, [30, 70]);
        assert_eq!(node.children_within(4, 6).count(), 0);
    }
}
