//! Built-in common password dictionary and leetspeak normalization.

use crate::blacklist::is_blacklisted;

/// Words and passwords that make a password "common" when found anywhere in it.
pub const COMMON_PASSWORDS: [&str; 35] = [
    "password", "123456", "12345678", "qwerty", "abc123", "monkey", "1234567",
    "letmein", "trustno1", "dragon", "baseball", "iloveyou", "master", "sunshine",
    "ashley", "bailey", "passw0rd", "shadow", "123123", "654321", "superman",
    "qazwsx", "michael", "football", "welcome", "jesus", "ninja", "mustang",
    "password1", "admin", "administrator", "root", "toor", "pass", "test",
];

/// Leetspeak substitutions undone before the dictionary lookup.
pub const SUBSTITUTIONS: [(char, char); 12] = [
    ('@', 'a'),
    ('4', 'a'),
    ('8', 'b'),
    ('(', 'c'),
    ('3', 'e'),
    ('1', 'i'),
    ('!', 'i'),
    ('0', 'o'),
    ('$', 's'),
    ('5', 's'),
    ('7', 't'),
    ('+', 't'),
];

/// Lower-cases the password and replaces every leetspeak character.
pub fn normalize_password(password: &str) -> String {
    password
        .to_lowercase()
        .chars()
        .map(|c| {
            SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}

/// Returns `true` if the password contains a dictionary word, either as typed
/// (case-insensitive) or after undoing leetspeak, or if it is on the extra
/// blacklist.
pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    let normalized = normalize_password(&lower);

    COMMON_PASSWORDS
        .iter()
        .any(|common| lower.contains(common) || normalized.contains(common))
        || is_blacklisted(password)
}
