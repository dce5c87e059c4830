//! Result type alias for folio operations.

use super::folio_error::FolioError;

/// Type alias for Results using FolioError.
///
/// # Example
///
/// ```ignore
/// use folio::error::FolioResult;
///
/// fn open_email(address: &str) -> FolioResult<()> {
///     open::that(format!("mailto:{}", address))?;
///     Ok(())
/// }
/// ```
pub type FolioResult<T> = Result<T, FolioError>;
