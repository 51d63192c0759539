/// Title-cases `value`: every letter that follows a non-letter is uppercased and every
/// other letter is lowercased. Non-letters are kept as they are.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("whiskers"), "Whiskers");
        assert_eq!(title_case("WHISKERS"), "Whiskers");
        assert_eq!(title_case("wHiSkErS"), "Whiskers");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("mister  whiskers"), "Mister  Whiskers");
        assert_eq!(title_case(" tom\tcat"), " Tom\tCat");
    }

    #[test]
    fn test_title_case_cyrillic() {
        assert_eq!(title_case("мурзик"), "Мурзик");
        assert_eq!(title_case("ЁЖИК барсик"), "Ёжик Барсик");
    }

    #[test]
    fn test_title_case_non_letters_start_words() {
        assert_eq!(title_case("o'malley"), "O'Malley");
        assert_eq!(title_case("cat9lives"), "Cat9Lives");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
