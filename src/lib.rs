//! Password strength and security posture assessment library
//!
//! Scores a password with length, character-variety, dictionary and pattern
//! heuristics, then combines the score with three self-reported practices
//! (password reuse, password manager, MFA) into a ranked risk assessment.
//! Everything is computed locally and deterministically.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to an extra blacklist file
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_posture::{Answer, SurveyAnswers, evaluate, init_blacklist};
//! use secrecy::SecretString;
//!
//! // Optional: load an extra blacklist (call once at startup)
//! init_blacklist().expect("Failed to load blacklist");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let answers = SurveyAnswers::new(Answer::No, Answer::Yes, Answer::No);
//!
//! let assessment = evaluate(&password, answers);
//! println!("Risk: {} ({})", assessment.risk_level, assessment.risk_score);
//! for rec in &assessment.recommendations {
//!     println!("[{:?}] {}", rec.priority, rec.text);
//! }
//! ```

// Internal modules
mod assessment;
mod blacklist;
mod dictionary;
mod evaluator;
mod patterns;
mod requirements;
mod sections;
mod types;

// Public API
pub use assessment::{build_assessment, MAX_RECOMMENDATIONS};
pub use blacklist::{
    blacklist_loaded, get_blacklist_path, init_blacklist, init_blacklist_from_path, is_blacklisted,
    BlacklistError, BLACKLIST_PATH_ENV,
};
pub use dictionary::{is_common_password, normalize_password, COMMON_PASSWORDS, SUBSTITUTIONS};
pub use evaluator::{evaluate, score_password};
pub use patterns::has_common_patterns;
pub use requirements::{check_requirements, Requirements};
pub use sections::CharacterClasses;
pub use types::{
    Answer, AnswerParseError, AssessmentResult, PasswordScore, Priority, Recommendation, RiskLevel,
    SecurityProfile, StrengthEvaluation, StrengthLabel, SurveyAnswers, Vulnerability,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_cancellable, evaluate_tx};
