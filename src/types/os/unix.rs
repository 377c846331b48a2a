//! Fixed-width `stdint.h` typedefs shared by the POSIX systems.

use super::TypedefTable;

pub(super) const TABLE: TypedefTable = TypedefTable {
    name: "unix",
    common: &[
        ("int8_t", "char"),
        ("uint8_t", "uchar"),
        ("int16_t", "short"),
        ("uint16_t", "ushort"),
        ("int32_t", "int"),
        ("uint32_t", "uint"),
        ("int64_t", "long_long"),
        ("uint64_t", "ulong_long"),
        ("size_t", "ulong"),
        ("ssize_t", "long"),
        ("ptrdiff_t", "long"),
        ("wchar_t", "int"),
        ("pid_t", "int"),
        ("uid_t", "uint"),
        ("gid_t", "uint"),
        ("id_t", "uint"),
        ("off_t", "long_long"),
        ("socklen_t", "uint"),
        ("in_addr_t", "uint32_t"),
        ("in_port_t", "uint16_t"),
    ],
    lp64: &[("intptr_t", "long"), ("uintptr_t", "ulong")],
};
