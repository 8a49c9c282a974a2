use crate::charset::is_special;
use crate::common::is_common_password;
use log::debug;
use std::fmt;

pub const MAX_SCORE: u8 = 5;
pub const MIN_LENGTH: usize = 8;

const STRONG_SCORE: u8 = 5;
const MODERATE_SCORE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooCommon,
    Strong,
    Moderate,
    Weak,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::TooCommon | Verdict::Weak => "Weak",
            Verdict::Moderate => "Moderate",
            Verdict::Strong => "Strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suggestion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Suggestion {
    pub fn text(&self) -> &'static str {
        match self {
            Suggestion::Length => "Increase length to at least 8 characters.",
            Suggestion::Uppercase => "Add an uppercase letter.",
            Suggestion::Lowercase => "Add a lowercase letter.",
            Suggestion::Digit => "Include at least one digit.",
            Suggestion::Special => "Use at least one special character (!@#$%^&*).",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

type Predicate = fn(&str) -> bool;

// Order here is the order suggestions are reported in.
const CHECKS: [(Suggestion, Predicate); 5] = [
    (Suggestion::Length, has_min_length),
    (Suggestion::Uppercase, has_uppercase),
    (Suggestion::Lowercase, has_lowercase),
    (Suggestion::Digit, has_digit),
    (Suggestion::Special, has_special),
];

fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(is_special)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: u8,
    pub verdict: Verdict,
    pub suggestions: Vec<Suggestion>,
}

impl Evaluation {
    /// Number of structural checks that held. Zero for a common password,
    /// whose score is pinned regardless of structure.
    pub fn passed_checks(&self) -> usize {
        match self.verdict {
            Verdict::TooCommon => 0,
            _ => CHECKS.len() - self.suggestions.len(),
        }
    }

    pub fn message(&self) -> String {
        match self.verdict {
            Verdict::TooCommon => {
                "Weak: Your password is too common! Choose a unique one.".to_string()
            }
            Verdict::Strong => "Strong Password! Well done.".to_string(),
            Verdict::Moderate | Verdict::Weak => {
                format!("{}: {}", self.verdict.label(), self.feedback())
            }
        }
    }

    fn feedback(&self) -> String {
        self.suggestions
            .iter()
            .map(Suggestion::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub fn evaluate_password(password: &str) -> Evaluation {
    if is_common_password(password) {
        debug!("Password matched the common-password denylist");
        return Evaluation {
            score: 1,
            verdict: Verdict::TooCommon,
            suggestions: Vec::new(),
        };
    }

    let mut score = 0u8;
    let mut suggestions = Vec::with_capacity(CHECKS.len());

    for (suggestion, check) in CHECKS {
        if check(password) {
            score += 1;
        } else {
            suggestions.push(suggestion);
        }
    }

    let verdict = if score >= STRONG_SCORE {
        Verdict::Strong
    } else if score >= MODERATE_SCORE {
        Verdict::Moderate
    } else {
        Verdict::Weak
    };

    debug!("Password scored {}/{} ({})", score, MAX_SCORE, verdict.label());

    Evaluation {
        score,
        verdict,
        suggestions,
    }
}
