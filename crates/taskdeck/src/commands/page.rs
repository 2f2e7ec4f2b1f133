//! # Offset Pagination
//!
//! Pages are zero-based. Page `n` of size `s` starts at offset `n * s`.
//!
//! - `total_pages` is `ceil(total / size)`, or `0` when `size` is `0`
//! - `last` is `true` when this page reaches the end of the backing set
//! - A page past the end is empty, not an error

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Task;
use crate::store::TaskStore;

/// Anything that can report its size and hand out a bounded window.
pub trait PageAccessor {
    type Item;

    fn total_elements(&self) -> Result<usize>;

    fn fetch(&self, offset: usize, limit: usize) -> Result<Vec<Self::Item>>;
}

impl<T: Clone> PageAccessor for [T] {
    type Item = T;

    fn total_elements(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn fetch(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        Ok(self.iter().skip(offset).take(limit).cloned().collect())
    }
}

/// Adapts a [`TaskStore`] so pages are read without a full snapshot.
pub struct StorePages<'a, S: TaskStore>(pub &'a S);

impl<S: TaskStore> PageAccessor for StorePages<'_, S> {
    type Item = Task;

    fn total_elements(&self) -> Result<usize> {
        self.0.count_tasks()
    }

    fn fetch(&self, offset: usize, limit: usize) -> Result<Vec<Task>> {
        self.0.page_tasks(offset, limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub last: bool,
}

pub fn run<A: PageAccessor + ?Sized>(accessor: &A, page: usize, size: usize) -> Result<Page<A::Item>> {
    let total_elements = accessor.total_elements()?;
    let offset = page.saturating_mul(size);

    let content = if size == 0 || offset >= total_elements {
        Vec::new()
    } else {
        accessor.fetch(offset, size)?
    };

    let total_pages = if size == 0 {
        0
    } else {
        total_elements.div_ceil(size)
    };
    let last = offset.saturating_add(content.len()) >= total_elements;

    Ok(Page {
        content,
        page_number: page,
        page_size: size,
        total_elements,
        total_pages,
        last,
    })
}
