pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*";

/// Generator alphabet: uppercase, lowercase, digits, then specials.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

pub fn is_special(c: char) -> bool {
    SPECIAL.contains(c)
}

pub const fn alphabet_size() -> usize {
    ALPHABET.len()
}
