//! Parsers for numeric console input. Surrounding whitespace is ignored.

use crate::domain::{DomainError, Mark};

/// Parses an entity count. Must be a strictly positive integer.
pub fn parse_count(input: &str) -> Result<usize, DomainError> {
    let trimmed = input.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| DomainError::InvalidNumber(trimmed.to_string()))?;
    if n <= 0 {
        return Err(DomainError::NotPositive(n));
    }
    usize::try_from(n).map_err(|_| DomainError::InvalidNumber(trimmed.to_string()))
}

/// Parses a 1-based menu position and converts it to a 0-based index.
///
/// Returns `CourseNotFound` when the position is outside `1..=len`.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, DomainError> {
    let trimmed = input.trim();
    let choice: i64 = trimmed
        .parse()
        .map_err(|_| DomainError::InvalidNumber(trimmed.to_string()))?;
    match usize::try_from(choice) {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        Ok(n) => Err(DomainError::CourseNotFound(n)),
        Err(_) => Err(DomainError::CourseNotFound(0)),
    }
}

/// Parses a real number and checks it is a valid mark.
pub fn parse_mark(input: &str) -> Result<Mark, DomainError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| DomainError::InvalidNumber(trimmed.to_string()))?;
    Mark::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Ok(3));
        assert_eq!(parse_count("  12 \n"), Ok(12));
        assert_eq!(parse_count("0"), Err(DomainError::NotPositive(0)));
        assert_eq!(parse_count("-4"), Err(DomainError::NotPositive(-4)));
        assert_eq!(
            parse_count("two"),
            Err(DomainError::InvalidNumber("two".into()))
        );
        assert!(parse_count("1.5").is_err());
        assert!(parse_count("").is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 2), Ok(0));
        assert_eq!(parse_selection("2", 2), Ok(1));
        assert_eq!(parse_selection("0", 2), Err(DomainError::CourseNotFound(0)));
        assert_eq!(parse_selection("3", 2), Err(DomainError::CourseNotFound(3)));
        assert_eq!(parse_selection("-1", 2), Err(DomainError::CourseNotFound(0)));
        assert!(matches!(
            parse_selection("first", 2),
            Err(DomainError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_mark_accepts_bounds() {
        for input in ["0", "20", "10.5", " 12 "] {
            assert!(parse_mark(input).is_ok(), "{input} should be accepted");
        }
    }

    #[test]
    fn test_parse_mark_rejects() {
        assert!(matches!(
            parse_mark("abc"),
            Err(DomainError::InvalidNumber(_))
        ));
        assert_eq!(parse_mark("-0.01"), Err(DomainError::MarkOutOfRange(-0.01)));
        assert_eq!(parse_mark("20.01"), Err(DomainError::MarkOutOfRange(20.01)));
        assert!(matches!(
            parse_mark("NaN"),
            Err(DomainError::MarkOutOfRange(_))
        ));
    }
}
