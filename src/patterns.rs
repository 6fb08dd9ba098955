//! Weakness patterns: repeated characters, sequential runs, keyboard rows,
//! embedded years and very short passwords.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length of a run of identical characters that counts as repetition.
const REPEAT_RUN: usize = 3;

static SEQUENTIAL_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:012|123|234|345|456|567|678|789|890)+").unwrap());

static SEQUENTIAL_LETTERS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u)^(?:abc|bcd|cde|def|efg|fgh|ghi|hij|ijk|jkl|klm|lmn|mno|nop|opq|pqr|qrs|rst|stu|tuv|uvw|vwx|wxy|xyz)+",
    )
    .unwrap()
});

static KEYBOARD_ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^(?:qwerty|asdfgh|zxcvbn)+").unwrap());

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:19|20)[0-9]{2}").unwrap());

static VERY_SHORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\n\r\u{2028}\u{2029}]{1,7}$").unwrap());

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` if the password holds a run of at least three identical
/// characters. Line terminators never form a run.
pub fn has_repeated_run(password: &str) -> bool {
    let mut run = 0;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if is_line_terminator(c) {
            run = 0;
            prev = None;
            continue;
        }
        run = if prev == Some(c) { run + 1 } else { 1 };
        if run >= REPEAT_RUN {
            return true;
        }
        prev = Some(c);
    }
    false
}

/// Returns `true` if the password matches any weakness pattern.
pub fn has_common_patterns(password: &str) -> bool {
    has_repeated_run(password)
        || [
            &*SEQUENTIAL_DIGITS_RE,
            &*SEQUENTIAL_LETTERS_RE,
            &*KEYBOARD_ROW_RE,
            &*YEAR_RE,
            &*VERY_SHORT_RE,
        ]
        .iter()
        .any(|re| re.is_match(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_characters() {
        assert!(has_common_patterns("aaaaaa"));
        assert!(has_common_patterns("Strong!Pass111word"));
        assert!(!has_repeated_run("aabbaabb"));
        assert!(!has_repeated_run("aa\naa"));
        assert!(!has_repeated_run("\n\n\n"));
    }

    #[test]
    fn test_sequential_runs_only_at_start() {
        assert!(has_common_patterns("123Kangaroo!x"));
        assert!(has_common_patterns("890Kangaroo!x"));
        assert!(has_common_patterns("XYZkangaroo!42"));
        assert!(!has_common_patterns("Kangaroo!x123"));
        assert!(!has_common_patterns("Kangaroo!xabc"));
    }

    #[test]
    fn test_keyboard_rows() {
        assert!(has_common_patterns("QWERTYkangaroo!"));
        assert!(has_common_patterns("zxcvbnKangaroo!"));
        assert!(!has_common_patterns("Kangaroo!asdfgh"));
    }

    #[test]
    fn test_case_folding_stays_ascii() {
        // KELVIN SIGN and LONG S only fold to 'k' and 's' under Unicode rules
        assert!(!has_common_patterns("\u{212A}lmzq!29XPw"));
        assert!(!has_common_patterns("\u{017F}tuzq!29XPw"));
        assert!(has_common_patterns("KLMzq!29XPw"));
        assert!(has_common_patterns("STUzq!29XPw"));
        assert!(!has_common_patterns("Wq!29XPzkr"));
    }

    #[test]
    fn test_embedded_years() {
        assert!(has_common_patterns("Kangaroo!1987x"));
        assert!(has_common_patterns("Kangaroo!2024x"));
        assert!(!has_common_patterns("Kangaroo!1887x"));
    }

    #[test]
    fn test_very_short() {
        assert!(has_common_patterns("Zq!9"));
        assert!(has_common_patterns("Zq!9Zq!"));
        assert!(!has_common_patterns("Zq!9Zq!p"));
        assert!(!has_common_patterns(""));
    }

    #[test]
    fn test_clean_password() {
        assert!(!has_common_patterns("Tr0ub4dor&3xyz"));
        assert!(!has_common_patterns("correct-horse-battery-staple"));
    }
}
