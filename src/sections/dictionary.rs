//! Dictionary section - penalizes passwords built on common words.

use super::{PasswordFacts, SectionScore};

pub const COMMON_PASSWORD_PENALTY: i64 = -30;

pub fn dictionary_section(facts: &PasswordFacts<'_>) -> SectionScore {
    if facts.is_common_password {
        return SectionScore::with_reason(
            COMMON_PASSWORD_PENALTY,
            "Password contains a common word or password",
        );
    }
    SectionScore::points(0)
}
