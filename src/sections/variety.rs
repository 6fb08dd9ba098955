//! Character variety section - rewards lowercase, uppercase, digits and
//! special characters.

use serde::Serialize;

use super::{PasswordFacts, SectionScore};

/// Punctuation that counts as a special character.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Narrower special set used for the mixed-classes bonus.
pub const CORE_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Character classes present in a password. Only ASCII letters and digits
/// count towards their classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
    pub core_special: bool,
}

impl CharacterClasses {
    pub fn detect(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut classes, c| {
            classes.lowercase |= c.is_ascii_lowercase();
            classes.uppercase |= c.is_ascii_uppercase();
            classes.digit |= c.is_ascii_digit();
            classes.special |= SPECIAL_CHARS.contains(c);
            classes.core_special |= CORE_SPECIAL_CHARS.contains(c);
            classes
        })
    }

    /// Number of classes present among lowercase, uppercase, digit and the
    /// narrow special set.
    pub fn mixed_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digit, self.core_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// +5 each for lowercase, uppercase and digits, +10 for a special character,
/// +5 more when at least three classes are mixed.
pub fn character_variety_section(facts: &PasswordFacts<'_>) -> SectionScore {
    let classes = facts.classes;

    let mut points = 0;
    if classes.lowercase {
        points += 5;
    }
    if classes.uppercase {
        points += 5;
    }
    if classes.digit {
        points += 5;
    }
    if classes.special {
        points += 10;
    }
    if classes.mixed_count() >= 3 {
        points += 5;
    }

    let missing: Vec<_> = vec![
        if !classes.uppercase { Some("uppercase") } else { None },
        if !classes.lowercase { Some("lowercase") } else { None },
        if !classes.digit { Some("numbers") } else { None },
        if !classes.special { Some("special characters") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return SectionScore::with_reason(points, format!("Missing: {}", missing.join(", ")));
    }
    SectionScore::points(points)
}
