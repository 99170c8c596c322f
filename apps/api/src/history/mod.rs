// Generation history: every question set and correction a signed-in user
// produces is stored so it can be revisited later.

pub mod handlers;
pub mod store;

use crate::errors::AppError;

/// Returns the caller's user id, or `Unauthorized` when it is missing or blank.
pub fn require_user_id(user_id: Option<&str>) -> Result<&str, AppError> {
    match user_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_user_id_accepts_trimmed_id() {
        assert_eq!(require_user_id(Some(" user_2abc ")).unwrap(), "user_2abc");
    }

    #[test]
    fn test_require_user_id_rejects_missing_or_blank() {
        assert!(matches!(require_user_id(None), Err(AppError::Unauthorized)));
        assert!(matches!(
            require_user_id(Some("  ")),
            Err(AppError::Unauthorized)
        ));
    }
}
