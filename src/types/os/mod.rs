//! Operating-system typedef tables layered over an architecture (or another OS).
//!
//! Each `OsTypes` owns an alias table and an explicit parent lookup. Names the
//! table does not define are handed to the parent unchanged, so one table can
//! serve both 32- and 64-bit builds of the same OS; width-specific entries are
//! added only when the parent reports a 64-bit pointer.

mod bsd;
mod freebsd;
mod linux;
mod macos;
mod netbsd;
mod openbsd;
mod unix;
mod windows;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::catalog::split_endian_suffix;
use super::endianness::Endianness;
use super::lookup::TypeLookup;
use super::scalar::PointerWidth;
use super::ty::Type;
use crate::error::{TypeError, TypeResult};

type Typedefs = &'static [(&'static str, &'static str)];

/// Static description of one OS layer.
pub(crate) struct TypedefTable {
    pub name: &'static str,
    pub common: Typedefs,
    pub lp64: Typedefs,
}

pub struct OsTypes {
    name: String,
    parent: Arc<dyn TypeLookup>,
    typedefs: AHashMap<String, String>,
}

impl OsTypes {
    /// Later entries replace earlier ones with the same alias.
    pub fn new<I, K, V>(name: impl Into<String>, parent: Arc<dyn TypeLookup>, typedefs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let typedefs: AHashMap<String, String> = typedefs
            .into_iter()
            .map(|(alias, target)| (alias.into(), target.into()))
            .collect();
        let name = name.into();
        debug!(
            os = %name,
            parent = parent.label(),
            typedefs = typedefs.len(),
            "built OS type module"
        );
        Self {
            name,
            parent,
            typedefs,
        }
    }

    pub(crate) fn from_table(table: &TypedefTable, parent: Arc<dyn TypeLookup>) -> Self {
        let lp64 = match parent.pointer_width() {
            PointerWidth::W64 => table.lp64,
            PointerWidth::W32 => &[],
        };
        let entries = table.common.iter().chain(lp64).copied();
        Self::new(table.name, parent, entries)
    }

    pub fn parent(&self) -> &Arc<dyn TypeLookup> {
        &self.parent
    }

    /// Whether `name` is defined by this layer (ignoring parents).
    pub fn defines(&self, name: &str) -> bool {
        self.typedefs.contains_key(name)
    }

    pub fn typedefs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.typedefs
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// Resolves every alias in this layer, reporting the first failure in
    /// alias order.
    pub fn validate(&self) -> TypeResult<()> {
        let mut aliases: Vec<&str> = self.typedefs.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        for alias in aliases {
            self.lookup(alias)?;
        }
        Ok(())
    }

    fn resolve_alias(&self, name: &str) -> TypeResult<Type> {
        let mut visited: SmallVec<[&str; 8]> = SmallVec::new();
        let mut current = name;
        loop {
            visited.push(current);
            let Some(target) = self.typedefs.get(current) else {
                unreachable!("resolve_alias is only entered for defined aliases");
            };
            // `typedef uint uint` re-exports the parent's definition.
            if target == current {
                return self.delegate(target);
            }
            match self.typedefs.get_key_value(target.as_str()) {
                Some((next, _)) => {
                    if visited.contains(&next.as_str()) {
                        let mut chain: Vec<String> =
                            visited.iter().map(|alias| (*alias).to_owned()).collect();
                        chain.push(next.clone());
                        trace!(os = %self.name, ?chain, "typedef cycle");
                        return Err(TypeError::CyclicTypedef { chain });
                    }
                    current = next.as_str();
                }
                None => return self.delegate(target),
            }
        }
    }

    fn delegate(&self, name: &str) -> TypeResult<Type> {
        trace!(os = %self.name, parent = self.parent.label(), name, "delegating lookup");
        self.parent.lookup(name)
    }
}

impl TypeLookup for OsTypes {
    /// `size_t_be` resolves `size_t` in this layer before the order is applied.
    fn lookup(&self, name: &str) -> TypeResult<Type> {
        if self.typedefs.contains_key(name) {
            return self.resolve_alias(name);
        }
        match split_endian_suffix(name) {
            (base, Some(order)) if self.typedefs.contains_key(base) => {
                Ok(self.resolve_alias(base)?.with_endianness(order))
            }
            _ => self.delegate(name),
        }
    }

    fn pointer_width(&self) -> PointerWidth {
        self.parent.pointer_width()
    }

    fn endianness(&self) -> Endianness {
        self.parent.endianness()
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Os {
    Unix,
    Linux,
    Bsd,
    FreeBsd,
    NetBsd,
    OpenBsd,
    MacOs,
    Windows,
}

impl Os {
    pub const ALL: [Os; 8] = [
        Os::Unix,
        Os::Linux,
        Os::Bsd,
        Os::FreeBsd,
        Os::NetBsd,
        Os::OpenBsd,
        Os::MacOs,
        Os::Windows,
    ];

    /// Typedef layers from the outermost base down to this OS.
    fn layers(self) -> &'static [&'static TypedefTable] {
        match self {
            Os::Unix => &[&unix::TABLE],
            Os::Linux => &[&unix::TABLE, &linux::TABLE],
            Os::Bsd => &[&unix::TABLE, &bsd::TABLE],
            Os::FreeBsd => &[&unix::TABLE, &bsd::TABLE, &freebsd::TABLE],
            Os::NetBsd => &[&unix::TABLE, &bsd::TABLE, &netbsd::TABLE],
            Os::OpenBsd => &[&unix::TABLE, &bsd::TABLE, &openbsd::TABLE],
            Os::MacOs => &[&unix::TABLE, &bsd::TABLE, &macos::TABLE],
            Os::Windows => &[&windows::TABLE],
        }
    }

    pub fn name(self) -> &'static str {
        let layers = self.layers();
        layers[layers.len() - 1].name
    }

    /// Builds the full typedef chain for this OS on top of `parent`.
    pub fn types(self, parent: Arc<dyn TypeLookup>) -> OsTypes {
        let (last, bases) = match self.layers().split_last() {
            Some(split) => split,
            None => unreachable!("every OS has at least one typedef layer"),
        };
        let parent = bases.iter().fold(parent, |parent, table| {
            Arc::new(OsTypes::from_table(table, parent)) as Arc<dyn TypeLookup>
        });
        OsTypes::from_table(last, parent)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Os {
    type Err = TypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let os = match value.to_ascii_lowercase().as_str() {
            "unix" | "posix" => Os::Unix,
            "linux" | "gnu" => Os::Linux,
            "bsd" => Os::Bsd,
            "freebsd" => Os::FreeBsd,
            "netbsd" => Os::NetBsd,
            "openbsd" => Os::OpenBsd,
            "macos" | "darwin" | "osx" | "apple" => Os::MacOs,
            "windows" | "win32" | "win64" | "mingw" => Os::Windows,
            _ => return Err(TypeError::UnknownTarget(value.to_owned())),
        };
        Ok(os)
    }
}

#[cfg(test)]
mod tests {
    //! Resolution semantics shared by every OS table.
    use super::*;
    use crate::types::arch::{Arch, ArchTypes};

    fn arch64() -> Arc<dyn TypeLookup> {
        Arc::new(ArchTypes::new(PointerWidth::W64, Endianness::Little))
    }

    #[test]
    fn aliases_chain_through_own_table() {
        // pid_t -> __pid_t -> int, the second hop stays inside the table
        let os = OsTypes::new("test", arch64(), [("pid_t", "__pid_t"), ("__pid_t", "int")]);
        assert_eq!(os.lookup("pid_t").unwrap(), os.parent().lookup("int").unwrap());
    }

    #[test]
    fn forward_references_resolve_lazily() {
        // declaration order does not matter
        let os = OsTypes::new("test", arch64(), [("a", "b"), ("b", "c"), ("c", "ushort")]);
        assert_eq!(os.lookup("a").unwrap().fixed_size(), Some(2));
    }

    #[test]
    fn misses_delegate_unchanged() {
        let os = OsTypes::new("test", arch64(), [("size_t", "ulong")]);
        assert_eq!(os.lookup("double").unwrap(), os.parent().lookup("double").unwrap());
        assert!(matches!(
            os.lookup("not_a_real_type"),
            Err(TypeError::UnknownType { .. })
        ));
    }

    #[test]
    fn own_entries_override_parent() {
        // LLP64 style override of an architecture alias
        let os = OsTypes::new("llp64", arch64(), [("long", "int32")]);
        assert_eq!(os.lookup("long").unwrap().fixed_size(), Some(4));
    }

    #[test]
    fn suffixes_apply_to_own_aliases() {
        let os = OsTypes::new("llp64", arch64(), [("long", "int32"), ("size_t", "ulong")]);
        let long_be = os.lookup("long_be").expect("suffixed override");
        assert_eq!(long_be.fixed_size(), Some(4), "override wins over the parent's long");
        assert_eq!(long_be.endianness(), Endianness::Big);
        let size_t = os.lookup("size_t_net").expect("suffixed alias");
        assert_eq!(size_t, os.lookup("size_t").unwrap().with_endianness(Endianness::Big));
        assert_eq!(
            os.lookup("double_be").unwrap().endianness(),
            Endianness::Big,
            "parent names keep their suffix"
        );
        assert!(matches!(
            os.lookup("size_t_xx"),
            Err(TypeError::UnknownType { .. })
        ));
    }

    #[test]
    fn cycles_are_reported_with_chain() {
        let os = OsTypes::new("test", arch64(), [("a", "b"), ("b", "c"), ("c", "a")]);
        let err = os.lookup("a").unwrap_err();
        assert_eq!(
            err,
            TypeError::CyclicTypedef {
                chain: vec!["a".into(), "b".into(), "c".into(), "a".into()]
            }
        );
        assert!(os.validate().is_err(), "validation walks every alias");
    }

    #[test]
    fn self_typedef_re_exports_parent() {
        let os = OsTypes::new("test", arch64(), [("uint", "uint")]);
        assert_eq!(os.lookup("uint").unwrap(), os.parent().lookup("uint").unwrap());
    }

    #[test]
    fn dangling_target_is_unknown() {
        let os = OsTypes::new("test", arch64(), [("foo_t", "bar_t")]);
        assert_eq!(os.lookup("foo_t"), Err(TypeError::unknown("bar_t")));
    }

    #[test]
    fn os_over_os_layers() {
        let base: Arc<dyn TypeLookup> =
            Arc::new(OsTypes::new("base", arch64(), [("__off_t", "long_long")]));
        let os = OsTypes::new("derived", base, [("off_t", "__off_t")]);
        assert_eq!(os.lookup("off_t").unwrap().fixed_size(), Some(8));
        assert_eq!(os.pointer_width(), PointerWidth::W64, "width comes from the root");
    }

    #[test]
    fn every_builtin_table_validates_on_every_arch() {
        for arch in Arch::ALL {
            let parent: Arc<dyn TypeLookup> = Arc::new(ArchTypes::for_arch(arch));
            for os in Os::ALL {
                let types = os.types(parent.clone());
                if let Err(err) = types.validate() {
                    panic!("{os} on {arch}: {err}");
                }
            }
        }
    }

    #[test]
    fn os_names_parse() {
        for os in Os::ALL {
            assert_eq!(os.name().parse::<Os>(), Ok(os));
        }
        assert_eq!("darwin".parse::<Os>(), Ok(Os::MacOs));
    }
}
