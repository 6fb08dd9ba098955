//! Risk assessment built from a security profile and fixed advisory text.

use crate::types::{AssessmentResult, Priority, Recommendation, RiskLevel, SecurityProfile, Vulnerability};

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 7;

/// Below this many targeted recommendations the generic tips are added.
const MIN_TARGETED_RECOMMENDATIONS: usize = 5;

/// Password-specific advice is only given below this strength.
const PASSWORD_ADVICE_THRESHOLD: u8 = 70;

const WEAK_STRENGTH_THRESHOLD: u8 = 50;
const SHORT_PASSWORD_LENGTH: usize = 12;

const REUSE_RISK: i64 = 20;
const NO_PASSWORD_MANAGER_RISK: i64 = 10;
const NO_MFA_RISK: i64 = 15;
const MAX_RISK_SCORE: i64 = 100;

const INCREASE_LENGTH: Recommendation = Recommendation {
    priority: Priority::High,
    text: "Increase password length to at least 12-16 characters. Longer passwords exponentially increase crack time and provide better protection against brute-force attacks.",
};

const ADD_SPECIAL_CHARS: Recommendation = Recommendation {
    priority: Priority::High,
    text: "Add special characters (!@#$%^&*) to your password. This increases the character pool and makes password cracking significantly more difficult.",
};

const REPLACE_COMMON_PASSWORD: Recommendation = Recommendation {
    priority: Priority::Critical,
    text: "Your password contains common words or patterns found in breach databases. Replace it immediately with a truly random passphrase or use a password generator.",
};

const AVOID_PATTERNS: Recommendation = Recommendation {
    priority: Priority::High,
    text: "Avoid sequential patterns (123, abc) or keyboard patterns (qwerty). These are among the first combinations attackers try during password cracking attempts.",
};

const STOP_REUSE: Recommendation = Recommendation {
    priority: Priority::Critical,
    text: "Never reuse passwords across multiple sites. If one service is breached, attackers will try your credentials on other platforms (credential stuffing attacks). Use unique passwords for each account.",
};

const USE_PASSWORD_MANAGER: Recommendation = Recommendation {
    priority: Priority::High,
    text: "Adopt a reputable password manager (1Password, Bitwarden, LastPass). This allows you to maintain unique, complex passwords for every account without memorization burden.",
};

const ENABLE_MFA: Recommendation = Recommendation {
    priority: Priority::Critical,
    text: "Enable Multi-Factor Authentication (MFA) immediately. Even if your password is compromised, MFA blocks 99.9% of automated attacks. Prefer authenticator apps or hardware keys over SMS.",
};

const GENERIC_TIPS: [Recommendation; 3] = [
    Recommendation {
        priority: Priority::Medium,
        text: "Consider using a passphrase instead of a password. Example: \"correct-horse-battery-staple\" is both memorable and secure due to its length and randomness.",
    },
    Recommendation {
        priority: Priority::Medium,
        text: "Regularly audit your accounts at haveibeenpwned.com to check if your credentials have appeared in known data breaches.",
    },
    Recommendation {
        priority: Priority::Low,
        text: "Enable login alerts and review active sessions regularly. This helps you detect unauthorized access attempts early.",
    },
];

/// Raw risk: inverse strength plus penalties for each risky practice.
/// Not clamped.
pub fn risk_score(profile: &SecurityProfile) -> i64 {
    let answers = &profile.answers;
    let mut risk = MAX_RISK_SCORE - profile.password_strength.value() as i64;
    if answers.reuses_password() {
        risk += REUSE_RISK;
    }
    if !answers.uses_password_manager() {
        risk += NO_PASSWORD_MANAGER_RISK;
    }
    if !answers.has_mfa() {
        risk += NO_MFA_RISK;
    }
    risk
}

/// Weaknesses in a fixed order.
pub fn identify_vulnerabilities(profile: &SecurityProfile) -> Vec<Vulnerability> {
    let answers = &profile.answers;
    [
        (profile.password_strength.value() < WEAK_STRENGTH_THRESHOLD, Vulnerability::WeakStrength),
        (profile.is_common_password, Vulnerability::CommonPassword),
        (profile.has_common_patterns, Vulnerability::PredictablePatterns),
        (answers.reuses_password(), Vulnerability::PasswordReuse),
        (!answers.uses_password_manager(), Vulnerability::ManualPasswordManagement),
        (!answers.has_mfa(), Vulnerability::NoMfa),
        (profile.password_length < SHORT_PASSWORD_LENGTH, Vulnerability::TooShort),
    ]
    .into_iter()
    .filter_map(|(applies, vulnerability)| applies.then_some(vulnerability))
    .collect()
}

/// Ranked advice, most urgent first, at most [`MAX_RECOMMENDATIONS`].
pub fn build_recommendations(profile: &SecurityProfile) -> Vec<Recommendation> {
    let answers = &profile.answers;
    let mut recommendations = Vec::new();

    if profile.password_strength.value() < PASSWORD_ADVICE_THRESHOLD {
        if profile.password_length < SHORT_PASSWORD_LENGTH {
            recommendations.push(INCREASE_LENGTH);
        }
        if !profile.has_special_chars {
            recommendations.push(ADD_SPECIAL_CHARS);
        }
        if profile.is_common_password {
            recommendations.push(REPLACE_COMMON_PASSWORD);
        }
        if profile.has_common_patterns {
            recommendations.push(AVOID_PATTERNS);
        }
    }

    if answers.reuses_password() {
        recommendations.push(STOP_REUSE);
    }
    if !answers.uses_password_manager() {
        recommendations.push(USE_PASSWORD_MANAGER);
    }
    if !answers.has_mfa() {
        recommendations.push(ENABLE_MFA);
    }

    if recommendations.len() < MIN_TARGETED_RECOMMENDATIONS {
        recommendations.extend(GENERIC_TIPS);
    }

    // Stable: equal priorities keep insertion order.
    recommendations.sort_by_key(|r| r.priority);
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Builds the risk assessment for a profile.
pub fn build_assessment(profile: &SecurityProfile) -> AssessmentResult {
    let risk = risk_score(profile);

    AssessmentResult {
        risk_level: RiskLevel::from_risk_score(risk),
        risk_score: risk.min(MAX_RISK_SCORE),
        vulnerabilities: identify_vulnerabilities(profile),
        recommendations: build_recommendations(profile),
    }
}
