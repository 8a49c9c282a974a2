use std::collections::HashSet;
use std::sync::OnceLock;

const COMMON_PASSWORDS_DATA: [&str; 16] = [
    "password",
    "123456",
    "123456789",
    "qwerty",
    "password123",
    "abc123",
    "letmein",
    "123123",
    "admin",
    "welcome",
    "monkey",
    "football",
    "iloveyou",
    "sunshine",
    "1234",
    "princess",
];

static COMMON_PASSWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Denylist of known-weak passwords. Membership is exact and case-sensitive.
pub fn get_common_passwords() -> &'static HashSet<&'static str> {
    COMMON_PASSWORDS.get_or_init(|| COMMON_PASSWORDS_DATA.iter().copied().collect())
}

pub fn is_common_password(password: &str) -> bool {
    get_common_passwords().contains(password)
}
