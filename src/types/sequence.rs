//! Fixed and unbounded array metadata.

use super::ty::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayCount {
    Fixed(usize),
    /// Consumes every remaining element; only legal as a template's last field.
    Unbounded,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayType {
    pub element: Box<Type>,
    pub count: ArrayCount,
}

impl ArrayType {
    pub fn new(element: Type, count: ArrayCount) -> Self {
        Self {
            element: Box::new(element),
            count,
        }
    }

    pub fn element_count(&self) -> Option<usize> {
        match self.count {
            ArrayCount::Fixed(count) => Some(count),
            ArrayCount::Unbounded => None,
        }
    }

    /// Byte stride of one element; unbounded nested elements have no stride.
    pub fn stride(&self) -> Option<usize> {
        self.element.fixed_size()
    }

    /// Total byte size; `None` when unbounded or when the size overflows `usize`.
    pub fn fixed_size(&self) -> Option<usize> {
        self.stride()?.checked_mul(self.element_count()?)
    }
}
