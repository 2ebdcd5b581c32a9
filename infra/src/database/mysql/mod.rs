//! MySQL repository implementations

mod item_repository_impl;
mod user_repository_impl;

pub use item_repository_impl::MySqlItemRepository;
pub use user_repository_impl::MySqlUserRepository;

use lf_core::errors::DomainError;

/// Wrap a SQLx error with the failed operation's name
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// Parse a CHAR(36) id column
pub(crate) fn parse_uuid(raw: &str, column: &str) -> Result<uuid::Uuid, DomainError> {
    uuid::Uuid::parse_str(raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", column, e),
    })
}
