use crate::api::error::Error;

/// Largest page the list endpoints accept
pub const MAX_PAGE_SIZE: i32 = 100;

/// Rejects empty path ids before they turn into a different endpoint
pub(crate) fn require_id<'a>(field: &str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidParams(format!("{} must not be empty", field)));
    }
    Ok(value)
}

/// Rejects blank body fields the API requires a value for
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidParams(format!("{} must not be blank", field)));
    }
    Ok(())
}

/// Checks paging parameters shared by the list endpoints
pub(crate) fn check_page(page_size: Option<i32>, page_number: Option<i32>) -> Result<(), Error> {
    if let Some(size) = page_size {
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(Error::InvalidParams(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, size
            )));
        }
    }
    if let Some(number) = page_number {
        if number < 0 {
            return Err(Error::InvalidParams(format!(
                "page_number must not be negative, got {}",
                number
            )));
        }
    }
    Ok(())
}

/// Rejects empty collections the API requires at least one element of
pub(crate) fn require_non_empty<T>(field: &str, items: &[T]) -> Result<(), Error> {
    if items.is_empty() {
        return Err(Error::InvalidParams(format!("{} must not be empty", field)));
    }
    Ok(())
}
