//! Pagination request shared by every listing.

use crate::{model::api::PageQuery, server::error::AppError};

pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated, 1-based page request with an optional search term.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
    /// Trimmed and lowercased; blank searches are dropped.
    pub search: Option<String>,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64, search: Option<String>) -> Result<Self, AppError> {
        if page < 1 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }

        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(AppError::Validation(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        Ok(Self {
            page,
            page_size,
            search,
        })
    }

    pub fn from_query(query: PageQuery) -> Result<Self, AppError> {
        Self::new(query.page, query.page_size, query.search)
    }

    /// Zero-based page index for sea-orm's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }

    /// `%term%` LIKE pattern with `%`, `_` and `\` escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|term| {
            let mut escaped = String::with_capacity(term.len() + 2);
            escaped.push('%');
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped.push('%');
            escaped
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforces_bounds() {
        assert!(PageRequest::new(1, 1, None).is_ok());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE, None).is_ok());
        assert!(matches!(PageRequest::new(0, 10, None), Err(AppError::Validation(_))));
        assert!(matches!(PageRequest::new(1, 0, None), Err(AppError::Validation(_))));
        assert!(matches!(
            PageRequest::new(1, MAX_PAGE_SIZE + 1, None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn computes_total_pages() {
        let request = PageRequest::new(1, 10, None).unwrap();
        assert_eq!(request.total_pages(0), 0);
        assert_eq!(request.total_pages(10), 1);
        assert_eq!(request.total_pages(11), 2);
    }

    #[test]
    fn escapes_like_wildcards() {
        let request = PageRequest::new(1, 10, Some("  100%_Bazar ".to_string())).unwrap();
        assert_eq!(request.like_pattern().as_deref(), Some("%100\\%\\_bazar%"));

        let blank = PageRequest::new(1, 10, Some("   ".to_string())).unwrap();
        assert_eq!(blank.like_pattern(), None);
    }
}
