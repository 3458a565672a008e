//! Generated example users must satisfy the client form rules unchanged.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use example_data::generate_example_users;
use roster_client::{FieldName, FormValues, validate};
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(42)]
#[case(2024)]
fn generated_users_pass_form_validation(#[case] seed: u64) {
    let users = generate_example_users(seed, 50).expect("generation succeeds");

    for user in users {
        let mut values = FormValues::new();
        values.set(FieldName::FirstName, user.first_name.as_str());
        values.set(FieldName::LastName, user.last_name.as_str());
        values.set(FieldName::PhoneNumber, user.phone_number.as_str());
        values.set(FieldName::EmailAddress, user.email_address.as_str());

        let input = validate(&values)
            .unwrap_or_else(|errors| panic!("{user:?} failed validation: {errors:?}"));
        assert_eq!(input.first_name, user.first_name);
        assert_eq!(input.email_address, user.email_address);
    }
}
