//! Binary type resolution and struct templates.
//!
//! Primitive machine types are bound per CPU architecture into C native
//! aliases, overlaid per operating system with typedef tables, and consumed by
//! templates that pack typed records into bytes and unpack them again.
//!
//! ```
//! use typepack::template::{Record, Template};
//! use typepack::types::{Endianness, PointerWidth, PrimitiveCatalog};
//!
//! let types = PrimitiveCatalog::new(PointerWidth::W64, Endianness::Big);
//! let template = Template::compile(&types, [("a", "uint16"), ("b", "uint16")]).unwrap();
//! let bytes = template.pack(&Record::new().with("a", 1u16).with("b", 2u16)).unwrap();
//! assert_eq!(bytes, [0x00, 0x01, 0x00, 0x02]);
//! ```

pub mod error;
pub mod target;
pub mod template;
pub mod types;

pub use error::{TypeError, TypeResult};
pub use target::Target;
pub use template::{FieldSpec, Record, Template, pack_value as pack, unpack_value as unpack};
pub use types::{Type, TypeLookup, Value};
