//! Property-based tests for the kitten field validators.
//!
//! Covers the name length and character rules, the age range and the closed breed/color
//! sets. Refer to `src/models/kitten/validation.rs` for the rules themselves.
use kittens_api::models::{
    validate_age, validate_breed, validate_color, validate_name, AgeInput, Breed, Color,
    KittenValidationError,
};
use kittens_api::utils::title_case;
use proptest::{prelude::*, test_runner::Config};

proptest! {
  #![proptest_config(Config {
    cases: 500, ..Config::default()
  })]

  /// Letters-only names of 4 to 20 characters are accepted, Latin or Cyrillic.
  #[test]
  fn prop_valid_names_are_accepted(name in "[a-zA-Zа-яА-ЯёЁ]{4,20}") {
      prop_assert_eq!(validate_name(&name), Ok(()));
  }

  /// Names shorter than 4 or longer than 20 characters are rejected on length, whatever
  /// they contain.
  #[test]
  fn prop_names_out_of_length_are_rejected(
    name in prop_oneof!["[a-zа-я0-9]{1,3}", "[a-zа-я0-9]{21,40}"]
  ) {
      prop_assert_eq!(validate_name(&name), Err(KittenValidationError::NameLength));
  }

  /// A digit anywhere in an otherwise valid-length name is a character error.
  #[test]
  fn prop_names_with_digits_are_rejected(
    prefix in "[a-zA-Z]{2,8}",
    digit in "[0-9]",
    suffix in "[a-zA-Z]{2,8}"
  ) {
      let name = format!("{}{}{}", prefix, digit, suffix);
      prop_assert_eq!(validate_name(&name), Err(KittenValidationError::NameCharacters));
  }

  /// Title-casing never changes the length or validity of a valid name.
  #[test]
  fn prop_title_case_preserves_valid_names(name in "[a-zA-Zа-яА-ЯёЁ ]{4,20}") {
      prop_assume!(validate_name(&name).is_ok());
      let normalized = title_case(&name);
      prop_assert_eq!(normalized.chars().count(), name.chars().count());
      prop_assert_eq!(validate_name(&normalized), Ok(()));
  }

  /// Ages in 1..=6 are accepted as numbers and as numeric strings.
  #[test]
  fn prop_ages_in_range_are_accepted(age in 1i64..=6, padding in " {0,3}") {
      prop_assert_eq!(validate_age(&AgeInput::Number(age)), Ok(age as i32));
      let text = format!("{}{}{}", padding, age, padding);
      prop_assert_eq!(validate_age(&AgeInput::Text(text)), Ok(age as i32));
  }

  /// Non-zero ages outside 1..=6 are out of range.
  #[test]
  fn prop_ages_out_of_range_are_rejected(
    age in prop_oneof![i64::MIN..0i64, 7i64..i64::MAX]
  ) {
      prop_assert_eq!(
          validate_age(&AgeInput::Number(age)),
          Err(KittenValidationError::AgeOutOfRange)
      );
  }

  /// Strings that are not integers are reported as such.
  #[test]
  fn prop_non_numeric_ages_are_rejected(text in "[a-zA-Z]{1,10}") {
      prop_assert_eq!(
          validate_age(&AgeInput::Text(text)),
          Err(KittenValidationError::AgeNotInteger)
      );
  }

  /// Anything that is not exactly a breed or color display name is rejected.
  #[test]
  fn prop_unknown_breeds_and_colors_are_rejected(value in "[a-z]{1,20}") {
      prop_assume!(!Breed::values().contains(&value.as_str()));
      prop_assume!(!Color::values().contains(&value.as_str()));
      prop_assert_eq!(validate_breed(&value), Err(KittenValidationError::InvalidBreed));
      prop_assert_eq!(validate_color(&value), Err(KittenValidationError::InvalidColor));
  }
}

#[test]
fn test_every_listed_breed_and_color_validates() {
    for breed in Breed::values() {
        assert_eq!(validate_breed(breed).map(|b| b.as_str()), Ok(breed));
    }
    for color in Color::values() {
        assert_eq!(validate_color(color).map(|c| c.as_str()), Ok(color));
    }
}
