//! Live password requirement checklist.

use serde::Serialize;

use crate::sections::{CharacterClasses, RECOMMENDED_LENGTH};

/// Which of the five displayed requirements a password meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl Requirements {
    pub fn met_count(&self) -> usize {
        [self.length, self.uppercase, self.lowercase, self.numbers, self.special]
            .iter()
            .filter(|&&met| met)
            .count()
    }

    pub fn all_met(&self) -> bool {
        self.met_count() == 5
    }
}

pub fn check_requirements(password: &str) -> Requirements {
    let classes = CharacterClasses::detect(password);
    Requirements {
        length: password.chars().count() >= RECOMMENDED_LENGTH,
        uppercase: classes.uppercase,
        lowercase: classes.lowercase,
        numbers: classes.digit,
        special: classes.special,
    }
}
