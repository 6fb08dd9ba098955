//! Length section - awards the base points for password length.

use super::{PasswordFacts, SectionScore};

/// Length below which a password is reported as too short.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Base points by length: >=16 -> 40, >=12 -> 30, >=8 -> 20, else 10.
pub fn length_section(facts: &PasswordFacts<'_>) -> SectionScore {
    let len = facts.length;
    let points = match len {
        16.. => 40,
        12..=15 => 30,
        8..=11 => 20,
        _ => 10,
    };

    if len < RECOMMENDED_LENGTH {
        return SectionScore::with_reason(
            points,
            format!("Password should be at least {} characters", RECOMMENDED_LENGTH),
        );
    }
    SectionScore::points(points)
}
