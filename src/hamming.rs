/// Integers whose Hamming distance is the population count of their XOR.
pub trait Hamming {
    fn hamming(&self, other: &Self) -> u32;
}

macro_rules! impl_hamming {
    ($($t:ty),*) => {
        $(
            impl Hamming for $t {
                #[inline(always)]
                fn hamming(&self, other: &Self) -> u32 {
                    (self ^ other).count_ones()
                }
            }
        )*
    };
}

impl_hamming!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Computes the number of bits that differ between `a` and `b`.
///
/// ```
/// # use bktree::hamming_distance;
/// let distances = [0u32, 8, 10, 12, 14, 15]
///     .iter()
///     .map(|x| hamming_distance(x, &15))
///     .collect::<Vec<_>>();
/// assert_eq!(distances, [4, 3, 2, 2, 1, 0]);
/// ```
#[inline(always)]
pub fn hamming_distance<T: Hamming>(a: &T, b: &T) -> u32 {
    a.hamming(b)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hamming_widths() {
        assert_eq!(hamming_distance(&0u8, &0xFF), 8);
        assert_eq!(hamming_distance(&0u128, &!0), 128);
        assert_eq!(hamming_distance(&-1i32, &0), 32);
        assert_eq!(hamming_distance(&0b1010u64, &0b0101), 4);
    }

    #[test]
    fn test_hamming_symmetric() {
        for &(a, b) in &[(0u32, 7u32), (13, 5), (0xDEAD_BEEF, 0x1234_5678)] {
            assert_eq!(hamming_distance(&a, &b), hamming_distance(&b, &a));
            assert_eq!(hamming_distance(&a, &a), 0);
        }
    }
}
