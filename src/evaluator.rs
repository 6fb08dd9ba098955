//! Password evaluator - scoring orchestration and the evaluation entry points.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::assessment::build_assessment;
use crate::sections::{
    PasswordFacts, Section, character_variety_section, dictionary_section, entropy_section,
    length_section, pattern_section,
};
use crate::types::{AssessmentResult, PasswordScore, SecurityProfile, StrengthEvaluation, SurveyAnswers};

/// Sections in evaluation order.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("dictionary", dictionary_section),
    ("pattern", pattern_section),
    ("entropy", entropy_section),
];

fn run_sections(facts: &PasswordFacts<'_>) -> StrengthEvaluation {
    let mut points: i64 = 0;
    let mut reasons = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        let outcome = section_fn(facts);

        #[cfg(feature = "tracing")]
        tracing::debug!("section {} scored {} points", _section_name, outcome.points);

        points += outcome.points;
        if let Some(reason) = outcome.reason {
            reasons.push(reason);
        }
    }

    StrengthEvaluation {
        score: PasswordScore::new(points),
        reasons,
    }
}

/// Scores password strength on a 0-100 scale.
///
/// # Returns
/// A `StrengthEvaluation` with the clamped score and the reasons the
/// password lost points or missed bonuses.
pub fn score_password(password: &SecretString) -> StrengthEvaluation {
    run_sections(&PasswordFacts::new(password.expose_secret()))
}

impl SecurityProfile {
    /// Scores the password and records everything the assessment needs.
    pub fn build(password: &SecretString, answers: SurveyAnswers) -> Self {
        let facts = PasswordFacts::new(password.expose_secret());
        let strength = run_sections(&facts);

        SecurityProfile {
            password_strength: strength.score,
            password_length: facts.length,
            has_uppercase: facts.classes.uppercase,
            has_lowercase: facts.classes.lowercase,
            has_numbers: facts.classes.digit,
            has_special_chars: facts.classes.special,
            is_common_password: facts.is_common_password,
            has_common_patterns: facts.has_common_patterns,
            answers,
            timestamp: Utc::now(),
        }
    }
}

/// Evaluates a password together with the survey answers.
///
/// Total over all inputs; the empty password is valid.
///
/// # Example
///
/// ```rust
/// use pwd_posture::{Answer, RiskLevel, SurveyAnswers, evaluate};
/// use secrecy::SecretString;
///
/// let password = SecretString::new("P@ssw0rd".to_string().into());
/// let answers = SurveyAnswers::new(Answer::Yes, Answer::No, Answer::No);
///
/// let result = evaluate(&password, answers);
/// assert_eq!(result.risk_level, RiskLevel::High);
/// ```
pub fn evaluate(password: &SecretString, answers: SurveyAnswers) -> AssessmentResult {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    let profile = SecurityProfile::build(password, answers);
    let result = build_assessment(&profile);

    #[cfg(feature = "tracing")]
    tracing::info!(
        "evaluation done: strength {}, risk {} ({})",
        profile.password_strength,
        result.risk_score,
        result.risk_level
    );

    result
}

/// Like [`evaluate`], but gives up if `token` is cancelled between stages.
#[cfg(feature = "async")]
pub fn evaluate_cancellable(
    password: &SecretString,
    answers: SurveyAnswers,
    token: &CancellationToken,
) -> Option<AssessmentResult> {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before scoring");
        return None;
    }

    let profile = SecurityProfile::build(password, answers);

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before assessment");
        return None;
    }

    Some(build_assessment(&profile))
}

/// Async version that sends the assessment via channel.
///
/// Nothing is sent if the evaluation is cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    answers: SurveyAnswers,
    token: CancellationToken,
    tx: mpsc::Sender<AssessmentResult>,
) {
    let Some(result) = evaluate_cancellable(password, answers, &token) else {
        return;
    };

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send assessment result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::blacklist::reset_blacklist_for_testing;
    use crate::types::Answer;
    use serial_test::serial;

    fn answers() -> SurveyAnswers {
        SurveyAnswers::new(Answer::No, Answer::Yes, Answer::No)
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_with_cancellation() {
        reset_blacklist_for_testing();
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        assert!(evaluate_cancellable(&pwd, answers(), &token).is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_without_cancellation_matches_sync() {
        reset_blacklist_for_testing();
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let result = evaluate_cancellable(&pwd, answers(), &token).expect("not cancelled");
        assert_eq!(result, evaluate(&pwd, answers()));
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_tx() {
        reset_blacklist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_tx(&pwd, answers(), token, tx).await;

        let result = rx.recv().await.expect("Should receive assessment");
        assert!(result.recommendations.len() <= 7);
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_tx_cancelled_sends_nothing() {
        reset_blacklist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_tx(&pwd, answers(), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
