//! Entry point for the type-resolution layers: primitives, architectures, and OS typedefs.

pub mod arch;
pub mod catalog;
pub mod codec;
pub mod endianness;
pub mod lookup;
pub mod os;
pub mod scalar;
pub mod sequence;
pub mod ty;
pub mod value;

pub use arch::{Arch, ArchSpec, ArchTypes};
pub use catalog::PrimitiveCatalog;
pub use codec::{decode, encode};
pub use endianness::Endianness;
pub use lookup::TypeLookup;
pub use os::{Os, OsTypes};
pub use scalar::{PointerWidth, ScalarEncoding, ScalarType};
pub use sequence::{ArrayCount, ArrayType};
pub use ty::Type;
pub use value::Value;
