use crate::node::Node;
use crate::{Distance, Find};
use itertools::Itertools;
use log::trace;
use std::fmt;

/// Index of the root node in the arena of a non-empty tree.
pub(crate) const ROOT: u32 = 0;

/// A BK-tree over items of type `T` compared with the distance `D`.
///
/// Every node holds one item and a sparse map from distance to child. A child
/// stored under key `d` always sits at exactly distance `d` from its parent, which
/// lets `find` discard whole subtrees using the triangle inequality.
#[derive(Clone)]
pub struct BkTree<T, D> {
    /// The root is at index `0`. A `u32` pointing to a child is just an index
    /// into this array, which is a bump allocator for nodes.
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) distance: D,
}

impl<T, D> BkTree<T, D>
where
    D: Distance<T>,
{
    /// Makes an empty `BkTree` which compares items with `distance`.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let tree: BkTree<u64, _> = BkTree::new(hamming_distance::<u64>);
    /// assert!(tree.is_empty());
    /// ```
    pub fn new(distance: D) -> Self {
        Self::with_capacity(distance, 0)
    }

    /// Makes an empty `BkTree` with room for `capacity` items before the node
    /// arena reallocates.
    pub fn with_capacity(distance: D, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            distance,
        }
    }

    /// Makes a `BkTree` and adds `items` to it in order.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let tree = BkTree::from_items(hamming_distance::<u64>, vec![0, 4, 5]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn from_items(distance: D, items: impl IntoIterator<Item = T>) -> Self {
        let items = items.into_iter();
        let mut tree = Self::with_capacity(distance, items.size_hint().0);
        tree.extend(items);
        tree
    }

    fn allocate(&mut self, item: T) -> u32 {
        assert!(self.nodes.len() < std::u32::MAX as usize);
        let node = self.nodes.len() as u32;
        self.nodes.push(Node::new(item));
        node
    }

    /// Adds an item to the `BkTree`.
    ///
    /// Items at distance `0` from an existing item are not merged; they are
    /// stored again one level further down.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let mut tree = BkTree::new(hamming_distance::<u64>);
    /// tree.add(4);
    /// tree.add(15);
    /// assert_eq!(tree.iter().sorted().collect::<Vec<_>>(), [&4, &15]);
    /// # use itertools::Itertools;
    /// ```
    pub fn add(&mut self, item: T) {
        if self.is_empty() {
            trace!("add root");
            self.allocate(item);
            return;
        }
        // Walk down until the slot at the item's distance is vacant. Nothing is
        // mutated until the walk ends, so a panicking distance leaves the tree intact.
        let mut current = ROOT;
        let mut depth = 0usize;
        let distance = loop {
            let node = &self.nodes[current as usize];
            let distance = self.distance.distance(&node.item, &item);
            match node.child(distance) {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => break distance,
            }
        };
        let new_node = self.allocate(item);
        self.nodes[current as usize]
            .children
            .insert(distance, new_node);
        trace!(
            "add node({}) parent({}) distance({}) depth({})",
            new_node,
            current,
            distance,
            depth + 1
        );
    }

    /// Find all items within `max_distance` of `query`, along with their
    /// distance to it.
    ///
    /// The order is unspecified. Use [`BkTree::find_sorted`] when it matters.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let tree = BkTree::from_items(hamming_distance::<u64>, vec![0, 4, 5, 14, 15]);
    /// let mut found = tree.find(&13, 1).collect::<Vec<_>>();
    /// found.sort();
    /// assert_eq!(found, [(1, &5), (1, &15)]);
    /// ```
    pub fn find<'a, 'q>(&'a self, query: &'q T, max_distance: u32) -> Find<'a, 'q, T, D> {
        Find::new(self, query, max_distance)
    }

    /// Like [`BkTree::find`], but the matches are collected and ordered by
    /// ascending distance. Matches at the same distance keep their search order.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let tree = BkTree::from_items(hamming_distance::<u64>, vec![0, 4, 5, 14, 15]);
    /// let distances = tree
    ///     .find_sorted(&13, 2)
    ///     .into_iter()
    ///     .map(|(distance, _)| distance)
    ///     .collect::<Vec<_>>();
    /// assert_eq!(distances, [1, 1, 2, 2]);
    /// ```
    pub fn find_sorted<'a>(&'a self, query: &T, max_distance: u32) -> Vec<(u32, &'a T)> {
        self.find(query, max_distance)
            .sorted_by_key(|&(distance, _)| distance)
            .collect()
    }

    /// Checks if an item equal to `item` is in the `BkTree`.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let tree = BkTree::from_items(hamming_distance::<u64>, vec![0b101, 0b010]);
    /// assert!(tree.contains(&0b101));
    /// assert!(!tree.contains(&0b111));
    /// ```
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let radius = self.distance.distance(item, item);
        self.find(item, radius).any(|(_, found)| found == item)
    }
}

impl<T, D> BkTree<T, D> {
    /// Gets the number of items in the `BkTree`, counting every duplicate.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let mut tree = BkTree::new(hamming_distance::<u64>);
    /// tree.add(5);
    /// tree.add(5);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if the `BkTree` is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the distance function the tree was built with.
    pub fn distance_fn(&self) -> &D {
        &self.distance
    }

    /// Iterates over every item in the `BkTree`, duplicates included, in
    /// unspecified order.
    ///
    /// ```
    /// # use bktree::{BkTree, hamming_distance};
    /// let tree = BkTree::from_items(hamming_distance::<u64>, vec![1, 2, 2, 3]);
    /// assert_eq!(tree.iter().count(), 4);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes.iter(),
        }
    }
}

impl<T, D> Extend<T> for BkTree<T, D>
where
    D: Distance<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }
}

impl<'a, T, D> IntoIterator for &'a BkTree<T, D> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, D> fmt::Debug for BkTree<T, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("BkTree")
            .field("len", &self.nodes.len())
            .field(
                "top_level_nodes",
                &self.nodes.first().map_or(0, |root| root.children.len()),
            )
            .field("distance", &std::any::type_name::<D>())
            .finish()
    }
}

/// Iterator over the items of a `BkTree`. See [`BkTree::iter`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    nodes: std::slice::Iter<'a, Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.nodes.next().map(|node| &node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
