//! Deterministic user generation from a numeric seed.
//!
//! The same seed and count always produce identical output.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::seed::ExampleUserSeed;
use crate::validation::{
    EMAIL_MAX, NAME_MAX, PHONE_DIGITS, is_valid_person_name, sanitize_person_name,
};

/// Maximum number of attempts to generate a valid name part.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Domain used for generated email addresses.
const EMAIL_DOMAIN: &str = "example.com";

/// Generates `count` example users from `seed`.
///
/// Each generated user has:
///
/// - First and last names containing only letters and spaces
/// - A ten digit mobile number starting with 6-9
/// - A unique, lower-cased `first.last.N@example.com` address
///
/// # Errors
///
/// Returns [`GenerationError`] if a valid name cannot be produced within the
/// retry budget or an email address would exceed the length limit.
///
/// # Example
///
/// ```
/// use example_data::{generate_example_users, is_valid_person_name};
///
/// let users = generate_example_users(7, 4).expect("generated");
/// assert!(users.iter().all(|user| is_valid_person_name(&user.first_name)));
/// ```
pub fn generate_example_users(
    seed: u64,
    count: usize,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut users = Vec::with_capacity(count);

    for index in 0..count {
        users.push(generate_single_user(&mut rng, index)?);
    }

    Ok(users)
}

fn generate_single_user(
    rng: &mut ChaCha8Rng,
    index: usize,
) -> Result<ExampleUserSeed, GenerationError> {
    let first_name = generate_name_part(rng, "first", |rng| FirstName(EN).fake_with_rng(rng))?;
    let last_name = generate_name_part(rng, "last", |rng| LastName(EN).fake_with_rng(rng))?;
    let phone_number = generate_phone_number(rng);
    let email_address = build_email(&first_name, &last_name, index)?;

    Ok(ExampleUserSeed {
        first_name,
        last_name,
        phone_number,
        email_address,
    })
}

fn generate_name_part(
    rng: &mut ChaCha8Rng,
    part: &'static str,
    mut produce: impl FnMut(&mut ChaCha8Rng) -> String,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = sanitize_person_name(&produce(rng));
        let truncated: String = candidate.trim().chars().take(NAME_MAX).collect();

        if is_valid_person_name(&truncated) {
            return Ok(truncated);
        }
    }

    Err(GenerationError::NameGenerationFailed {
        part,
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn generate_phone_number(rng: &mut ChaCha8Rng) -> String {
    let mut phone = String::with_capacity(PHONE_DIGITS);
    let leading: u8 = rng.random_range(6..=9);
    phone.push(char::from(b'0' + leading));
    for _ in 1..PHONE_DIGITS {
        let digit: u8 = rng.random_range(0..=9);
        phone.push(char::from(b'0' + digit));
    }
    phone
}

fn build_email(first: &str, last: &str, index: usize) -> Result<String, GenerationError> {
    let local = format!("{first}.{last}.{index}")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    let email = format!("{local}@{EMAIL_DOMAIN}");
    if email.chars().count() > EMAIL_MAX {
        return Err(GenerationError::EmailTooLong {
            email,
            max: EMAIL_MAX,
        });
    }
    Ok(email)
}
