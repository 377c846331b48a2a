//! Canonical table of primitive machine types for one byte order and pointer width.

use super::endianness::Endianness;
use super::lookup::TypeLookup;
use super::scalar::{PointerWidth, ScalarEncoding, ScalarType};
use super::ty::Type;
use crate::error::{TypeError, TypeResult};

const PRIMITIVES: &[(&str, usize, ScalarEncoding)] = &[
    ("int8", 1, ScalarEncoding::Signed),
    ("uint8", 1, ScalarEncoding::Unsigned),
    ("int16", 2, ScalarEncoding::Signed),
    ("uint16", 2, ScalarEncoding::Unsigned),
    ("int32", 4, ScalarEncoding::Signed),
    ("uint32", 4, ScalarEncoding::Unsigned),
    ("int64", 8, ScalarEncoding::Signed),
    ("uint64", 8, ScalarEncoding::Unsigned),
    ("float32", 4, ScalarEncoding::Floating),
    ("float64", 8, ScalarEncoding::Floating),
];

/// Splits `uint16_be` into `("uint16", Some(Big))`. Names without a
/// recognised suffix are returned whole.
pub(crate) fn split_endian_suffix(name: &str) -> (&str, Option<Endianness>) {
    if let Some((base, suffix)) = name.rsplit_once('_') {
        if let Some(order) = Endianness::from_suffix(suffix) {
            return (base, Some(order));
        }
    }
    (name, None)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimitiveCatalog {
    pointer_width: PointerWidth,
    endianness: Endianness,
}

impl PrimitiveCatalog {
    pub const fn new(pointer_width: PointerWidth, endianness: Endianness) -> Self {
        Self {
            pointer_width,
            endianness,
        }
    }

    /// Catalog matching the host's pointer width and byte order.
    pub const fn native() -> Self {
        let width = if cfg!(target_pointer_width = "64") {
            PointerWidth::W64
        } else {
            PointerWidth::W32
        };
        Self::new(width, Endianness::native())
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PRIMITIVES
            .iter()
            .map(|(name, _, _)| *name)
            .chain(["pointer", "float", "double"])
    }

    /// Looks up a primitive by its suffix-free name in the given byte order.
    pub(crate) fn primitive(&self, base: &str, order: Endianness) -> Option<ScalarType> {
        let base = match base {
            "float" => "float32",
            "double" => "float64",
            other => other,
        };
        if base == "pointer" {
            return Some(ScalarType::pointer(self.pointer_width, order));
        }
        PRIMITIVES
            .iter()
            .find(|(name, _, _)| *name == base)
            .map(|(name, size, encoding)| ScalarType::new(*name, *size, *encoding, order))
    }
}

impl TypeLookup for PrimitiveCatalog {
    fn lookup(&self, name: &str) -> TypeResult<Type> {
        let (base, order) = split_endian_suffix(name);
        self.primitive(base, order.unwrap_or(self.endianness))
            .map(Type::Scalar)
            .ok_or_else(|| TypeError::unknown(name))
    }

    fn pointer_width(&self) -> PointerWidth {
        self.pointer_width
    }

    fn endianness(&self) -> Endianness {
        self.endianness
    }

    fn label(&self) -> &str {
        "primitives"
    }
}
