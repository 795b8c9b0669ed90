/// A discrete distance between two items of type `T`.
///
/// The `BkTree` only ever talks to its items through this trait. For queries
/// to be correct the distance must be symmetric and satisfy the triangle
/// inequality:
///
/// `|distance(x, z) - distance(y, z)| <= distance(x, y)`
///
/// Nothing checks this at runtime. A distance that violates it silently makes
/// `find` miss matches.
///
/// Any `Fn(&T, &T) -> u32` is a `Distance<T>`:
///
/// ```
/// # use bktree::Distance;
/// let manhattan = |a: &(i32, i32), b: &(i32, i32)| {
///     ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as u32
/// };
/// assert_eq!(manhattan.distance(&(0, 0), &(3, -4)), 7);
/// ```
pub trait Distance<T: ?Sized> {
    fn distance(&self, a: &T, b: &T) -> u32;
}

impl<T, F> Distance<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> u32,
{
    #[inline(always)]
    fn distance(&self, a: &T, b: &T) -> u32 {
        self(a, b)
    }
}
