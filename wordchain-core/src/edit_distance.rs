//! Edit-distance-1 predicates
//!
//! Both predicates compare bytes, which is exact for the ASCII words the chain
//! builder works with. Neither allocates, and both run in linear time.

/// Do two equal-length strings differ at exactly one position?
///
/// Strings of different lengths are never at Hamming distance one.
pub fn hamming_distance_is_one(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut differences = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}

/// Are two strings exactly one substitution, insertion or deletion apart?
///
/// Identical strings are zero edits apart and return `false`.
pub fn edit_distance_is_one(a: &str, b: &str) -> bool {
    match a.len().abs_diff(b.len()) {
        0 => hamming_distance_is_one(a, b),
        1 if a.len() > b.len() => single_deletion(a.as_bytes(), b.as_bytes()),
        1 => single_deletion(b.as_bytes(), a.as_bytes()),
        _ => false,
    }
}

/// Does removing one byte from `long` yield `short`?
///
/// Requires `long.len() == short.len() + 1`. Everything left of `left` and
/// right of `right` matches, so the strings are one deletion apart exactly
/// when the two pointers meet on the same hole.
fn single_deletion(long: &[u8], short: &[u8]) -> bool {
    debug_assert_eq!(long.len(), short.len() + 1);

    let mut left = 0;
    let mut right = long.len() - 1;

    while left < right && long[left] == short[left] {
        left += 1;
    }
    while right > left && long[right] == short[right - 1] {
        right -= 1;
    }
    left == right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_one_position() {
        assert!(hamming_distance_is_one("cat", "cot"));
        assert!(hamming_distance_is_one("cat", "cab"));
        assert!(hamming_distance_is_one("a", "b"));
    }

    #[test]
    fn test_hamming_rejects_zero_and_many() {
        assert!(!hamming_distance_is_one("cat", "cat"));
        assert!(!hamming_distance_is_one("cat", "dog"));
        assert!(!hamming_distance_is_one("", ""));
        assert!(!hamming_distance_is_one("cat", "cats"));
    }

    #[test]
    fn test_substitution() {
        assert!(edit_distance_is_one("cat", "cot"));
        assert!(edit_distance_is_one("farm", "form"));
    }

    #[test]
    fn test_insertion_and_deletion() {
        assert!(edit_distance_is_one("cat", "cats"));
        assert!(edit_distance_is_one("cats", "cat"));
        assert!(edit_distance_is_one("at", "cat"));
        assert!(edit_distance_is_one("ct", "cat"));
        assert!(edit_distance_is_one("form", "for"));
        assert!(edit_distance_is_one("or", "nor"));
    }

    #[test]
    fn test_empty_strings() {
        assert!(edit_distance_is_one("", "a"));
        assert!(edit_distance_is_one("a", ""));
        assert!(!edit_distance_is_one("", ""));
        assert!(!edit_distance_is_one("", "ab"));
    }

    #[test]
    fn test_not_one_edit() {
        assert!(!edit_distance_is_one("cat", "cat"));
        assert!(!edit_distance_is_one("cat", "cats and dogs"));
        assert!(!edit_distance_is_one("cat", "act"));
        assert!(!edit_distance_is_one("hats", "cat"));
        assert!(!edit_distance_is_one("abc", "xabd"));
    }

    #[test]
    fn test_repeated_letters() {
        assert!(edit_distance_is_one("aaa", "aa"));
        assert!(edit_distance_is_one("book", "bok"));
        assert!(!edit_distance_is_one("abab", "babb"));
    }
}
