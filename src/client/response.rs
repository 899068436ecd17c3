use super::{Pagination, Rate};
use std::ops::Deref;

/// A payload returned by the GitHub API along with the pagination and rate limit information
/// carried in the response headers.
#[derive(Debug)]
pub struct Response<T> {
    pagination: Pagination,
    rate: Rate,
    inner: T,
}

impl<T> Response<T> {
    pub(super) fn new(pagination: Pagination, rate: Rate, inner: T) -> Self {
        Self {
            pagination,
            rate,
            inner,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn into_parts(self) -> (Pagination, Rate, T) {
        (self.pagination, self.rate, self.inner)
    }
}

impl<T> Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}
