use crate::tree::ROOT;
use crate::{BkTree, Distance};
use log::trace;

/// Iterator over the items within a radius of a query. See [`BkTree::find`].
///
/// Yields `(distance, item)` pairs. The search is depth-first over an explicit
/// stack of node indices, so it never recurses no matter how deep the tree is.
pub struct Find<'a, 'q, T, D> {
    tree: &'a BkTree<T, D>,
    query: &'q T,
    max_distance: u32,
    stack: Vec<u32>,
}

impl<'a, 'q, T, D> Find<'a, 'q, T, D>
where
    D: Distance<T>,
{
    pub(crate) fn new(tree: &'a BkTree<T, D>, query: &'q T, max_distance: u32) -> Self {
        let stack = if tree.is_empty() { vec![] } else { vec![ROOT] };
        Self {
            tree,
            query,
            max_distance,
            stack,
        }
    }
}

impl<'a, 'q, T, D> Iterator for Find<'a, 'q, T, D>
where
    D: Distance<T>,
{
    type Item = (u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(index) = self.stack.pop() {
            let node = &tree.nodes[index as usize];
            let distance = tree.distance.distance(&node.item, self.query);
            // Everything under the child at key `k` is exactly `k` from this
            // node, so by the triangle inequality it is at least `|k - distance|`
            // from the query.
            let lower = distance.saturating_sub(self.max_distance);
            let upper = distance.saturating_add(self.max_distance);
            let before = self.stack.len();
            self.stack.extend(node.children_within(lower, upper));
            trace!(
                "find node({}) distance({}) pushed({}) of children({})",
                index,
                distance,
                self.stack.len() - before,
                node.children.len()
            );
            if distance <= self.max_distance {
                return Some((distance, &node.item));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.is_empty() {
            (0, Some(0))
        } else {
            (0, Some(self.tree.len()))
        }
    }
}
