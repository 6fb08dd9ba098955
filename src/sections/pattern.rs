//! Pattern section - penalizes predictable structure.

use super::{PasswordFacts, SectionScore};

pub const COMMON_PATTERN_PENALTY: i64 = -20;

pub fn pattern_section(facts: &PasswordFacts<'_>) -> SectionScore {
    if facts.has_common_patterns {
        return SectionScore::with_reason(
            COMMON_PATTERN_PENALTY,
            "Password contains predictable patterns",
        );
    }
    SectionScore::points(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let result = pattern_section(&PasswordFacts::new("aaaaBBBB1111"));
        assert_eq!(result.points, -20);
        assert!(result.reason.unwrap().contains("predictable"));
    }

    #[test]
    fn test_pattern_section_short_password() {
        assert_eq!(pattern_section(&PasswordFacts::new("Zq!9")).points, -20);
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert_eq!(pattern_section(&PasswordFacts::new("RandomPass!@#Word")), SectionScore::points(0));
    }
}
