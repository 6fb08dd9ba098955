//! Extra blacklist management module
//!
//! Loads an optional list of known-bad passwords on top of the built-in
//! dictionary. The list is read once and never reloaded.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

static EXTRA_BLACKLIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Environment variable overriding the blacklist location.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Loads the extra blacklist from the configured path.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_BLACKLIST_PATH", "/etc/myapp/blacklist.txt"); }
/// let loaded = pwd_posture::init_blacklist()?;
/// ```
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(get_blacklist_path())
}

/// Loads the extra blacklist from a specific file path.
///
/// One entry per line, trimmed and lower-cased; blank lines are skipped.
/// Idempotent: once a list is loaded, later calls return its size without
/// touching the filesystem.
pub fn init_blacklist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = EXTRA_BLACKLIST.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: file not found {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTRA_BLACKLIST.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race; keep the first list.
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.len());
        }
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {}", count, path.display());

    Ok(count)
}

/// Returns `true` once an extra blacklist has been loaded.
pub fn blacklist_loaded() -> bool {
    EXTRA_BLACKLIST
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Checks if a password is in the extra blacklist.
///
/// Exact match, case-insensitive. Returns `false` if no list was loaded.
pub fn is_blacklisted(password: &str) -> bool {
    let guard = EXTRA_BLACKLIST.read().unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .map(|bl| bl.contains(&password.to_lowercase()))
        .unwrap_or(false)
}

/// Resets the blacklist for testing purposes.
#[cfg(test)]
pub(crate) fn reset_blacklist_for_testing() {
    let mut guard = EXTRA_BLACKLIST.write().unwrap();
    *guard = None;
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    #[serial]
    fn test_get_blacklist_path_default() {
        remove_env(BLACKLIST_PATH_ENV);

        let path = get_blacklist_path();
        assert_eq!(path, PathBuf::from("./assets/blacklist.txt"));
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        let path = get_blacklist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_file_not_found() {
        reset_blacklist_for_testing();
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));
        assert!(!blacklist_loaded());

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_empty_file() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n\n").expect("Failed to write");

        set_env(BLACKLIST_PATH_ENV, temp_file.path().to_str().unwrap());

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_success_dedups_and_skips_blank_lines() {
        reset_blacklist_for_testing();
        let temp_file = blacklist_file(&["hunter2", "", "  Qwerty99 ", "qwerty99"]);

        set_env(BLACKLIST_PATH_ENV, temp_file.path().to_str().unwrap());

        let count = init_blacklist().unwrap();
        assert_eq!(count, 2);
        assert!(blacklist_loaded());

        remove_env(BLACKLIST_PATH_ENV);
        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_init_blacklist_is_not_reloaded() {
        let _first = load_blacklist(&["alpha1"]);
        let second = blacklist_file(&["beta1", "gamma1", "delta1"]);

        let count = init_blacklist_from_path(second.path()).unwrap();
        assert_eq!(count, 1);
        assert!(is_blacklisted("alpha1"));
        assert!(!is_blacklisted("beta1"));

        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_is_blacklisted_exact_and_case_insensitive() {
        let _file = load_blacklist(&["hunter2"]);

        assert!(is_blacklisted("hunter2"));
        assert!(is_blacklisted("HUNTER2"));
        assert!(!is_blacklisted("myhunter2pass"));

        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_is_blacklisted_without_list() {
        reset_blacklist_for_testing();
        assert!(!is_blacklisted("hunter2"));
    }
}
