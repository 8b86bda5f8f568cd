//! HTTP handler functions, grouped by concern.

pub mod catalog;
pub mod quotes;
pub mod wizard;

use altana_core::error::CoreError;
use altana_core::product_line::ProductLine;

use crate::error::AppError;

/// Parse the `{line}` path segment into a [`ProductLine`].
pub(crate) fn parse_line(line: &str) -> Result<ProductLine, AppError> {
    ProductLine::from_str_db(line).map_err(AppError::Core)
}

/// Reject a draft whose product line does not match the URL.
pub(crate) fn ensure_line_matches(
    line: ProductLine,
    draft_line: ProductLine,
) -> Result<(), AppError> {
    if line != draft_line {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Draft belongs to the {} line, not {}",
            draft_line.as_str(),
            line.as_str()
        ))));
    }
    Ok(())
}
