//! Data types shared by the evaluator and the assessment builder.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Password strength score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Builds a score from a raw point total, clamping it to `0..=100`.
    pub fn new(points: i64) -> Self {
        Self(points.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(*self)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Coarse wording for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl StrengthLabel {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            80.. => Self::Strong,
            60..=79 => Self::Moderate,
            40..=59 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Strong => "Strong: Your password demonstrates excellent security characteristics.",
            Self::Moderate => "Moderate: Your password is acceptable but has room for improvement.",
            Self::Weak => "Weak: Your password is vulnerable and should be strengthened.",
            Self::VeryWeak => "Very Weak: Your password is highly vulnerable to attacks.",
        }
    }
}

/// Result of running the strength sections over a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: PasswordScore,
    /// Section findings, in section order.
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    pub fn strength(&self) -> StrengthLabel {
        self.score.label()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid survey answer: {0:?} (expected \"yes\" or \"no\")")]
pub struct AnswerParseError(pub String);

/// A yes/no survey answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value { Answer::Yes } else { Answer::No }
    }
}

impl FromStr for Answer {
    type Err = AnswerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            _ => Err(AnswerParseError(s.to_string())),
        }
    }
}

/// Self-reported security practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    /// Is this password reused on other sites?
    pub reuse: Answer,
    pub password_manager: Answer,
    pub mfa: Answer,
}

impl SurveyAnswers {
    pub fn new(reuse: Answer, password_manager: Answer, mfa: Answer) -> Self {
        Self { reuse, password_manager, mfa }
    }

    pub fn reuses_password(&self) -> bool {
        self.reuse.is_yes()
    }

    pub fn uses_password_manager(&self) -> bool {
        self.password_manager.is_yes()
    }

    pub fn has_mfa(&self) -> bool {
        self.mfa.is_yes()
    }
}

/// Snapshot of everything the assessment needs to know about one evaluation.
///
/// Built once by [`SecurityProfile::build`](crate::SecurityProfile::build) and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityProfile {
    pub password_strength: PasswordScore,
    pub password_length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_special_chars: bool,
    pub is_common_password: bool,
    pub has_common_patterns: bool,
    pub answers: SurveyAnswers,
    pub timestamp: DateTime<Utc>,
}

/// Recommendation priority. Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub text: &'static str,
}

/// Weaknesses reported by an assessment.
/// Serialized as its [`label`](Vulnerability::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vulnerability {
    #[serde(rename = "Weak password strength")]
    WeakStrength,
    #[serde(rename = "Common password detected")]
    CommonPassword,
    #[serde(rename = "Predictable patterns found")]
    PredictablePatterns,
    #[serde(rename = "Password reuse across sites")]
    PasswordReuse,
    #[serde(rename = "Manual password management")]
    ManualPasswordManagement,
    #[serde(rename = "No multi-factor authentication")]
    NoMfa,
    #[serde(rename = "Password too short")]
    TooShort,
}

impl Vulnerability {
    pub fn label(&self) -> &'static str {
        match self {
            Self::WeakStrength => "Weak password strength",
            Self::CommonPassword => "Common password detected",
            Self::PredictablePatterns => "Predictable patterns found",
            Self::PasswordReuse => "Password reuse across sites",
            Self::ManualPasswordManagement => "Manual password management",
            Self::NoMfa => "No multi-factor authentication",
            Self::TooShort => "Password too short",
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_risk_score(risk_score: i64) -> Self {
        if risk_score <= 30 {
            RiskLevel::Low
        } else if risk_score <= 60 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(s)
    }
}

/// Final risk assessment for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub risk_level: RiskLevel,
    /// Capped at 100, no lower bound.
    pub risk_score: i64,
    pub vulnerabilities: Vec<Vulnerability>,
    /// At most 7 entries, most urgent first.
    pub recommendations: Vec<Recommendation>,
}
