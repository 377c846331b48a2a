//! Darwin typedefs from `sys/_types.h` and `i386/_types.h`.

use super::TypedefTable;

pub(super) const TABLE: TypedefTable = TypedefTable {
    name: "macos",
    common: &[
        ("__int8_t", "char"),
        ("__uint8_t", "uchar"),
        ("__int16_t", "short"),
        ("__uint16_t", "ushort"),
        ("__int32_t", "int"),
        ("__uint32_t", "uint"),
        ("__int64_t", "long_long"),
        ("__uint64_t", "ulong_long"),
        ("__darwin_intptr_t", "long"),
        ("__darwin_natural_t", "uint"),
        ("__darwin_ct_rune_t", "int"),
        ("__darwin_ptrdiff_t", "long"),
        ("ptrdiff_t", "__darwin_ptrdiff_t"),
        ("__darwin_size_t", "ulong"),
        ("size_t", "__darwin_size_t"),
        ("__darwin_ssize_t", "long"),
        ("ssize_t", "__darwin_ssize_t"),
        ("__darwin_wchar_t", "int"),
        ("wchar_t", "__darwin_wchar_t"),
        ("__darwin_wint_t", "int"),
        ("__darwin_clock_t", "ulong"),
        ("clock_t", "__darwin_clock_t"),
        ("__darwin_socklen_t", "__uint32_t"),
        ("socklen_t", "__darwin_socklen_t"),
        ("__darwin_time_t", "long"),
        ("time_t", "__darwin_time_t"),
        ("__darwin_blkcnt_t", "__int64_t"),
        ("blkcnt_t", "__darwin_blkcnt_t"),
        ("__darwin_blksize_t", "__int32_t"),
        ("blksize_t", "__darwin_blksize_t"),
        ("__darwin_dev_t", "__int32_t"),
        ("dev_t", "__darwin_dev_t"),
        ("__darwin_fsblkcnt_t", "uint"),
        ("fsblkcnt_t", "__darwin_fsblkcnt_t"),
        ("__darwin_fsfilcnt_t", "uint"),
        ("fsfilcnt_t", "__darwin_fsfilcnt_t"),
        ("__darwin_gid_t", "__uint32_t"),
        ("gid_t", "__darwin_gid_t"),
        ("__darwin_id_t", "__uint32_t"),
        ("id_t", "__darwin_id_t"),
        ("__darwin_ino64_t", "__uint64_t"),
        ("__darwin_ino_t", "__darwin_ino64_t"),
        ("ino_t", "__darwin_ino_t"),
        ("__darwin_mode_t", "__uint16_t"),
        ("mode_t", "__darwin_mode_t"),
        ("__darwin_off_t", "__int64_t"),
        ("off_t", "__darwin_off_t"),
        ("__darwin_pid_t", "__int32_t"),
        ("pid_t", "__darwin_pid_t"),
        ("__darwin_sigset_t", "__uint32_t"),
        ("__darwin_suseconds_t", "__int32_t"),
        ("suseconds_t", "__darwin_suseconds_t"),
        ("__darwin_uid_t", "__uint32_t"),
        ("uid_t", "__darwin_uid_t"),
        ("__darwin_useconds_t", "__uint32_t"),
        ("useconds_t", "__darwin_useconds_t"),
        ("__darwin_mach_port_name_t", "__darwin_natural_t"),
        ("__darwin_mach_port_t", "__darwin_mach_port_name_t"),
        ("clockid_t", "int"),
        ("key_t", "__int32_t"),
        ("nlink_t", "__uint16_t"),
        ("sa_family_t", "__uint8_t"),
        ("in_port_t", "__uint16_t"),
        ("in_addr_t", "__uint32_t"),
        ("rlim_t", "__uint64_t"),
        ("register_t", "long"),
    ],
    lp64: &[("__darwin_natural_t", "uint"), ("user_addr_t", "__uint64_t")],
};
