//! Result type alias for Khione
//!
//! This module provides a convenient Result type alias that uses KhioneError
//! as the error type.

use super::errors::KhioneError;

/// Result type alias for Khione operations
///
/// # Examples
///
/// ```
/// use khione::domain::result::Result;
/// use khione::domain::errors::KhioneError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(KhioneError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, KhioneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::KhioneError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(KhioneError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
