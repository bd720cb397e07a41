use regex::Regex;

use super::errors::AuthError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

const COMMON_PASSWORDS: [&str; 10] = [
    "123456",
    "12345678",
    "123456789",
    "password",
    "senha",
    "abc123",
    "qwerty",
    "111111",
    "000000",
    "123123",
];

/// Sign-up password policy: minimum length, not a common password,
/// and at least one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort);
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return Err(AuthError::PasswordTooCommon);
    }

    if !contains(r"[A-Za-z]", password) || !contains(r"[0-9]", password) {
        return Err(AuthError::PasswordNeedsLettersAndDigits);
    }

    Ok(())
}

fn contains(pattern: &str, text: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}
