//! Password scoring sections
//!
//! Each section scores one aspect of the password and may explain why it
//! held the score back.

mod dictionary;
mod entropy;
mod length;
mod pattern;
mod variety;

pub use dictionary::dictionary_section;
pub use entropy::entropy_section;
pub use length::{RECOMMENDED_LENGTH, length_section};
pub use pattern::pattern_section;
pub use variety::{CharacterClasses, character_variety_section};

use crate::dictionary::is_common_password;
use crate::patterns::has_common_patterns;

/// What the sections read, derived once per password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordFacts<'a> {
    pub password: &'a str,
    /// In chars, not bytes.
    pub length: usize,
    pub classes: CharacterClasses,
    pub is_common_password: bool,
    pub has_common_patterns: bool,
}

impl<'a> PasswordFacts<'a> {
    pub fn new(password: &'a str) -> Self {
        Self {
            password,
            length: password.chars().count(),
            classes: CharacterClasses::detect(password),
            is_common_password: is_common_password(password),
            has_common_patterns: has_common_patterns(password),
        }
    }
}

/// Outcome of one scoring section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionScore {
    /// Points added to (or, when negative, removed from) the running total.
    pub points: i64,
    pub reason: Option<String>,
}

impl SectionScore {
    pub fn points(points: i64) -> Self {
        Self { points, reason: None }
    }

    pub fn with_reason(points: i64, reason: impl Into<String>) -> Self {
        Self { points, reason: Some(reason.into()) }
    }
}

/// Signature shared by all sections.
pub type Section = fn(&PasswordFacts<'_>) -> SectionScore;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::reset_blacklist_for_testing;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_password_facts() {
        reset_blacklist_for_testing();
        let facts = PasswordFacts::new("P@ssw0rd1999");

        assert_eq!(facts.length, 12);
        assert!(facts.classes.uppercase && facts.classes.digit && facts.classes.core_special);
        assert!(facts.is_common_password);
        assert!(facts.has_common_patterns);

        let facts = PasswordFacts::new("Tr0ub4dor&3xyz");
        assert!(!facts.is_common_password);
        assert!(!facts.has_common_patterns);
    }
}
