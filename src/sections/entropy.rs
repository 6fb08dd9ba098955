//! Entropy section - bonus for character uniqueness.

use std::collections::HashSet;

use super::{PasswordFacts, SectionScore};

/// Distinct characters divided by length, `0.0` for the empty password.
pub fn uniqueness_ratio(password: &str) -> f64 {
    let len = password.chars().count();
    if len == 0 {
        return 0.0;
    }
    let unique: HashSet<char> = password.chars().collect();
    unique.len() as f64 / len as f64
}

/// +20 above 4.0, +10 above 3.0.
///
/// The ratio never exceeds 1.0, so neither tier is currently reachable.
pub fn entropy_section(facts: &PasswordFacts<'_>) -> SectionScore {
    let entropy = uniqueness_ratio(facts.password);
    let points = if entropy > 4.0 {
        20
    } else if entropy > 3.0 {
        10
    } else {
        0
    };
    SectionScore::points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniqueness_ratio() {
        assert_eq!(uniqueness_ratio(""), 0.0);
        assert_eq!(uniqueness_ratio("aaaa"), 0.25);
        assert_eq!(uniqueness_ratio("abcd"), 1.0);
    }

    #[test]
    fn test_entropy_section_awards_nothing() {
        for pwd in ["", "a", "abcdefghijklmnopqrstuvwxyz", "Xk9!mQ2#vL7$pW4&"] {
            assert_eq!(entropy_section(&PasswordFacts::new(pwd)).points, 0, "unexpected bonus for {pwd:?}");
        }
    }
}
