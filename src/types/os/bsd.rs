//! Typedefs common to the BSD family, including Darwin.

use super::TypedefTable;

pub(super) const TABLE: TypedefTable = TypedefTable {
    name: "bsd",
    common: &[
        ("u_char", "uchar"),
        ("u_short", "ushort"),
        ("u_int", "uint"),
        ("u_long", "ulong"),
        ("unchar", "uchar"),
        ("ushort", "ushort"),
        ("uint", "uint"),
        ("ulong", "ulong"),
        ("u_int8_t", "uint8_t"),
        ("u_int16_t", "uint16_t"),
        ("u_int32_t", "uint32_t"),
        ("u_int64_t", "uint64_t"),
        ("quad_t", "int64_t"),
        ("u_quad_t", "uint64_t"),
        ("qaddr_t", "pointer"),
        ("caddr_t", "pointer"),
        ("fixpt_t", "uint"),
    ],
    lp64: &[],
};
