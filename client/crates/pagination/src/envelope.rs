//! The `{ total, elements }` collection envelope.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

/// One page of a server-side collection.
///
/// ## Invariants
/// - `elements.len() <= total`; `total` is the server count, not the length
///   of the local page.
///
/// Deserialisation validates the invariant, so a malformed payload is
/// reported as a decode error instead of producing a value.
///
/// # Examples
/// ```
/// use pagination::Paginated;
///
/// let page = Paginated::new(10, vec![1, 2, 3]).expect("valid page");
/// assert_eq!(page.len(), 3);
/// assert!(Paginated::new(1, vec![1, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaginatedDto<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    total: u64,
    elements: Vec<T>,
}

/// Search endpoints return the same envelope.
pub type SearchResult<T> = Paginated<T>;

impl<T> Paginated<T> {
    /// Build a page, checking that it does not exceed the reported total.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ElementsExceedTotal`] when the page is
    /// larger than `total`.
    pub fn new(total: u64, elements: Vec<T>) -> Result<Self, PaginationError> {
        let count = elements.len();
        if u64::try_from(count).map_or(true, |len| len > total) {
            return Err(PaginationError::ElementsExceedTotal {
                elements: count,
                total,
            });
        }
        Ok(Self { total, elements })
    }

    /// An empty collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total: 0,
            elements: Vec::new(),
        }
    }

    /// Server-side element count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Elements of this page in server order.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Number of elements on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether this page carries no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consume the page and return its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Iterate over the elements of this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Transform each element while keeping the reported total.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            total: self.total,
            elements: self.elements.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[derive(Deserialize)]
struct PaginatedDto<T> {
    total: u64,
    #[serde(default = "Vec::new")]
    elements: Vec<T>,
}

impl<T> TryFrom<PaginatedDto<T>> for Paginated<T> {
    type Error = PaginationError;

    fn try_from(value: PaginatedDto<T>) -> Result<Self, Self::Error> {
        Self::new(value.total, value.elements)
    }
}
