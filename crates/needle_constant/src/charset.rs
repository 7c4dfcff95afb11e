//! The fixed character set rendered into every artifact.
//!
//! Iteration order is digits, uppercase, lowercase, punctuation.

pub const DIGITS: &str = "0123456789";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const PUNCTUATION: &str = ",.?!;:'\"`~@#$%^&*()-_+=<>[]{}\\|/";

/// Groups in iteration order.
pub const GROUPS: [&str; 4] = [DIGITS, UPPERCASE, LOWERCASE, PUNCTUATION];

/// Every character of the set, in iteration order.
pub fn chars() -> impl Iterator<Item = char> {
    GROUPS.into_iter().flat_map(str::chars)
}

/// Number of characters in the set.
pub fn len() -> usize {
    GROUPS.iter().map(|g| g.chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_digits_upper_lower_punct() {
        let all: String = chars().collect();
        assert!(all.starts_with("0123456789ABC"));
        assert!(all.contains("XYZabc"));
        assert!(all.contains("xyz,.?"));
        assert!(all.ends_with("\\|/"));
    }

    #[test]
    fn test_len() {
        assert_eq!(PUNCTUATION.chars().count(), 32);
        assert_eq!(len(), 10 + 26 + 26 + 32);
        assert_eq!(chars().count(), len());
    }

    #[test]
    fn test_no_duplicates() {
        let mut seen: Vec<char> = chars().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), len());
    }
}
