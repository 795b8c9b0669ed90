use std::cmp::min;

/// Computes the edit distance between two strings: the minimum number of
/// single character insertions, deletions and substitutions turning `a` into
/// `b`. Characters are Unicode scalar values.
///
/// ```
/// # use bktree::levenshtein_distance;
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// assert_eq!(levenshtein_distance(&String::from("flaw"), &String::from("lawn")), 2);
/// ```
pub fn levenshtein_distance<S: AsRef<str> + ?Sized>(a: &S, b: &S) -> u32 {
    let a = a.as_ref();
    let b = b.as_ref();
    if a == b {
        return 0;
    }
    let b = b.chars().collect::<Vec<char>>();
    // Only two rows of the table are ever live.
    let mut previous = (0..=b.len() as u32).collect::<Vec<u32>>();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        current[0] = i as u32 + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + if ca == cb { 0 } else { 1 };
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = min(substitution, min(deletion, insertion));
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("abc", "ab"), 1);
        assert_eq!(levenshtein_distance("ab", "ba"), 2);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_chars() {
        // Multi-byte characters count once.
        assert_eq!(levenshtein_distance("héllo", "hello"), 1);
        assert_eq!(levenshtein_distance("日本", "日本語"), 1);
    }
}
