//! Per-architecture bindings of the native C aliases onto primitive types.
//!
//! Sizing follows the platform C ABI: `short` is 2 bytes, `int` 4, `long_long`
//! 8, and `long`/`ulong`/`pointer` track the pointer width. Every alias maps
//! straight to a catalog entry; nothing here chains through other aliases.

mod family;

pub use family::{Arch, ArchSpec};

use ahash::AHashMap;

use super::catalog::{PrimitiveCatalog, split_endian_suffix};
use super::endianness::Endianness;
use super::lookup::TypeLookup;
use super::scalar::{PointerWidth, ScalarType};
use super::ty::Type;
use crate::error::{TypeError, TypeResult};

const FIXED_ALIASES: &[(&str, &str)] = &[
    ("char", "int8"),
    ("uchar", "uint8"),
    ("short", "int16"),
    ("ushort", "uint16"),
    ("int", "int32"),
    ("uint", "uint32"),
    ("long_long", "int64"),
    ("ulong_long", "uint64"),
    ("float", "float32"),
    ("double", "float64"),
    ("pointer", "pointer"),
    ("int8", "int8"),
    ("uint8", "uint8"),
    ("int16", "int16"),
    ("uint16", "uint16"),
    ("int32", "int32"),
    ("uint32", "uint32"),
    ("int64", "int64"),
    ("uint64", "uint64"),
    ("float32", "float32"),
    ("float64", "float64"),
];

const ILP32_ALIASES: &[(&str, &str)] = &[("long", "int32"), ("ulong", "uint32")];

const LP64_ALIASES: &[(&str, &str)] = &[("long", "int64"), ("ulong", "uint64")];

pub struct ArchTypes {
    spec: ArchSpec,
    aliases: AHashMap<&'static str, ScalarType>,
}

impl ArchTypes {
    /// Generic architecture with natural alignment for every scalar.
    pub fn new(pointer_width: PointerWidth, endianness: Endianness) -> Self {
        let name = match pointer_width {
            PointerWidth::W32 => "generic32",
            PointerWidth::W64 => "generic64",
        };
        Self::from_spec(ArchSpec {
            name,
            pointer_width,
            endianness,
            max_alignment: None,
        })
    }

    pub fn for_arch(arch: Arch) -> Self {
        Self::from_spec(arch.spec())
    }

    pub fn from_spec(spec: ArchSpec) -> Self {
        let catalog = PrimitiveCatalog::new(spec.pointer_width, spec.endianness);
        let long_aliases = match spec.pointer_width {
            PointerWidth::W32 => ILP32_ALIASES,
            PointerWidth::W64 => LP64_ALIASES,
        };
        let mut aliases = AHashMap::with_capacity(FIXED_ALIASES.len() + long_aliases.len());
        for (alias, primitive) in FIXED_ALIASES.iter().chain(long_aliases) {
            let Some(mut scalar) = catalog.primitive(primitive, spec.endianness) else {
                unreachable!("architecture alias {alias} names unknown primitive {primitive}");
            };
            if let Some(max_alignment) = spec.max_alignment {
                scalar = scalar.with_max_alignment(max_alignment);
            }
            aliases.insert(*alias, scalar);
        }
        Self { spec, aliases }
    }

    pub fn spec(&self) -> &ArchSpec {
        &self.spec
    }

    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.aliases.keys().copied()
    }
}

impl TypeLookup for ArchTypes {
    /// Resolves an alias, honoring an optional `_le`/`_be`/`_ne`/`_net` suffix.
    fn lookup(&self, name: &str) -> TypeResult<Type> {
        if let Some(scalar) = self.aliases.get(name) {
            return Ok(Type::Scalar(scalar.clone()));
        }
        match split_endian_suffix(name) {
            (base, Some(order)) => self
                .aliases
                .get(base)
                .map(|scalar| Type::Scalar(scalar.clone().with_endianness(order)))
                .ok_or_else(|| TypeError::unknown(name)),
            (_, None) => Err(TypeError::unknown(name)),
        }
    }

    fn pointer_width(&self) -> PointerWidth {
        self.spec.pointer_width
    }

    fn endianness(&self) -> Endianness {
        self.spec.endianness
    }

    fn label(&self) -> &str {
        self.spec.name
    }
}

#[cfg(test)]
mod tests {
    //! ABI sizing checks for the native alias tables.
    use super::*;

    fn size(types: &ArchTypes, name: &str) -> usize {
        types
            .lookup(name)
            .unwrap_or_else(|err| panic!("{name}: {err}"))
            .fixed_size()
            .expect("scalars are fixed size")
    }

    #[test]
    fn ilp32_sizes() {
        let types = ArchTypes::new(PointerWidth::W32, Endianness::Little);
        assert_eq!(size(&types, "long"), 4, "long is pointer sized on ILP32");
        assert_eq!(size(&types, "pointer"), 4);
        assert_eq!(size(&types, "int"), 4);
        assert_eq!(size(&types, "short"), 2);
        assert_eq!(size(&types, "long_long"), 8);
    }

    #[test]
    fn lp64_sizes() {
        let types = ArchTypes::new(PointerWidth::W64, Endianness::Little);
        assert_eq!(size(&types, "long"), 8, "long is pointer sized on LP64");
        assert_eq!(size(&types, "ulong"), 8);
        assert_eq!(size(&types, "pointer"), 8);
        assert_eq!(size(&types, "int"), 4, "int stays 4 bytes on LP64");
        assert_eq!(size(&types, "char"), 1);
    }

    #[test]
    fn aliases_resolve_to_catalog_entries() {
        let types = ArchTypes::for_arch(Arch::X86_64);
        assert_eq!(types.lookup("ulong").unwrap(), types.lookup("uint64").unwrap());
        assert_eq!(types.lookup("uchar").unwrap().name(), "uint8");
        let signed = types.lookup("char").unwrap();
        assert!(signed.as_scalar().unwrap().is_signed(), "char is signed");
    }

    #[test]
    fn i386_caps_eight_byte_alignment() {
        let types = ArchTypes::for_arch(Arch::X86);
        assert_eq!(types.lookup("double").unwrap().alignment(), 4);
        assert_eq!(types.lookup("long_long").unwrap().alignment(), 4);
        assert_eq!(types.lookup("short").unwrap().alignment(), 2);
        let amd64 = ArchTypes::for_arch(Arch::X86_64);
        assert_eq!(amd64.lookup("double").unwrap().alignment(), 8);
    }

    #[test]
    fn arch_order_and_suffix_override() {
        let ppc = ArchTypes::for_arch(Arch::Ppc);
        assert_eq!(ppc.lookup("int").unwrap().endianness(), Endianness::Big);
        let swapped = ppc.lookup("int_le").expect("suffix applies to native aliases");
        assert_eq!(swapped.endianness(), Endianness::Little);
        assert_eq!(swapped.fixed_size(), Some(4));
    }

    #[test]
    fn unknown_alias_is_reported() {
        let types = ArchTypes::for_arch(Arch::Arm64);
        assert_eq!(
            types.lookup("not_a_real_type"),
            Err(TypeError::unknown("not_a_real_type"))
        );
        assert!(types.lookup("size_t").is_err(), "OS typedefs are not architecture aliases");
    }
}
