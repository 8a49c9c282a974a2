use crate::charset::ALPHABET;
use log::debug;
use rand::Rng;
use zeroize::Zeroizing;

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

pub fn generate_password(password_length: usize) -> Zeroizing<String> {
    generate_password_with(&mut rand::thread_rng(), password_length)
}

/// Draws `password_length` characters uniformly, with replacement, from
/// [`ALPHABET`]. A length of zero yields an empty string.
pub fn generate_password_with<R: Rng + ?Sized>(
    rng: &mut R,
    password_length: usize,
) -> Zeroizing<String> {
    let mut password = Zeroizing::new(String::with_capacity(password_length));

    for _ in 0..password_length {
        let index = rng.gen_range(0..ALPHABET.len());
        password.push(ALPHABET[index] as char);
    }

    debug!("Generated a {}-character password", password_length);

    password
}
