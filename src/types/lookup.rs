//! The seam shared by the catalog, architecture, and OS layers.

use std::sync::Arc;

use super::endianness::Endianness;
use super::scalar::PointerWidth;
use super::ty::Type;
use crate::error::TypeResult;

/// Resolves symbolic type names. Implementations are immutable once built.
pub trait TypeLookup: Send + Sync {
    fn lookup(&self, name: &str) -> TypeResult<Type>;

    fn pointer_width(&self) -> PointerWidth;

    fn endianness(&self) -> Endianness;

    /// Label used in logs, e.g. `x86_64` or `linux`.
    fn label(&self) -> &str;
}

impl<T: TypeLookup + ?Sized> TypeLookup for Arc<T> {
    fn lookup(&self, name: &str) -> TypeResult<Type> {
        (**self).lookup(name)
    }

    fn pointer_width(&self) -> PointerWidth {
        (**self).pointer_width()
    }

    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

impl<T: TypeLookup + ?Sized> TypeLookup for &T {
    fn lookup(&self, name: &str) -> TypeResult<Type> {
        (**self).lookup(name)
    }

    fn pointer_width(&self) -> PointerWidth {
        (**self).pointer_width()
    }

    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
