//! Parsing of the user's select-N count.

use std::num::NonZeroUsize;

use crate::error::InvalidSelectCount;

/// Parses a "select first N" count typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a positive
/// integer is rejected.
///
/// # Example
///
/// ```
/// use gallery_lib::selection::parse_select_count;
///
/// assert_eq!(parse_select_count(" 15 ").unwrap().get(), 15);
/// assert!(parse_select_count("0").is_err());
/// assert!(parse_select_count("ten").is_err());
/// ```
pub fn parse_select_count(input: &str) -> Result<NonZeroUsize, InvalidSelectCount> {
    let trimmed = input.trim();
    if let Ok(count) = trimmed.parse::<usize>() {
        return NonZeroUsize::new(count).ok_or(InvalidSelectCount::NotPositive { value: 0 });
    }

    match trimmed.parse::<i64>() {
        Ok(value) => Err(InvalidSelectCount::NotPositive { value }),
        Err(_) if is_unsigned_integer(trimmed) => Err(InvalidSelectCount::TooLarge {
            input: trimmed.to_string(),
        }),
        Err(_) if trimmed.strip_prefix('-').is_some_and(|d| d.bytes().all(|b| b.is_ascii_digit()) && !d.is_empty()) => {
            Err(InvalidSelectCount::NotPositive { value: i64::MIN })
        }
        Err(_) => Err(InvalidSelectCount::NotANumber {
            input: trimmed.to_string(),
        }),
    }
}

fn is_unsigned_integer(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_counts() {
        assert_eq!(parse_select_count("1").unwrap().get(), 1);
        assert_eq!(parse_select_count("\t250\n").unwrap().get(), 250);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            parse_select_count("0"),
            Err(InvalidSelectCount::NotPositive { value: 0 })
        );
        assert_eq!(
            parse_select_count("-4"),
            Err(InvalidSelectCount::NotPositive { value: -4 })
        );
    }

    #[test]
    fn test_rejects_oversized_count() {
        assert_eq!(
            parse_select_count("99999999999999999999"),
            Err(InvalidSelectCount::TooLarge {
                input: "99999999999999999999".to_string()
            })
        );
        assert!(matches!(
            parse_select_count("-99999999999999999999"),
            Err(InvalidSelectCount::NotPositive { .. })
        ));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(matches!(
            parse_select_count("12abc"),
            Err(InvalidSelectCount::NotANumber { .. })
        ));
        assert!(matches!(
            parse_select_count(""),
            Err(InvalidSelectCount::NotANumber { .. })
        ));
        assert!(matches!(
            parse_select_count("1.5"),
            Err(InvalidSelectCount::NotANumber { .. })
        ));
    }
}
