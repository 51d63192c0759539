use lazy_static::lazy_static;
use regex::Regex;

pub const KITTEN_NAME_MIN_LENGTH: usize = 4;
pub const KITTEN_NAME_MAX_LENGTH: usize = 20;
pub const KITTEN_DESCRIPTION_MAX_LENGTH: usize = 200;
pub const KITTEN_MIN_AGE: i64 = 1;
pub const KITTEN_MAX_AGE: i64 = 6;

// Latin and Cyrillic letters (including Ё/ё, which sit outside the А-я range) and whitespace.
lazy_static! {
    pub static ref KITTEN_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s]+$").unwrap();
    pub static ref KITTEN_DESCRIPTION_REGEX: Regex =
        Regex::new(r#"^[a-zA-Zа-яА-ЯёЁ0-9\s.,!?;:()'"-]+$"#).unwrap();
}
