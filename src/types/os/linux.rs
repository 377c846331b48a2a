//! glibc typedefs from `bits/types.h` and friends.

use super::TypedefTable;

pub(super) const TABLE: TypedefTable = TypedefTable {
    name: "linux",
    common: &[
        ("__u_char", "uchar"),
        ("__u_short", "ushort"),
        ("__u_int", "uint"),
        ("__u_long", "ulong"),
        ("__int8_t", "char"),
        ("__uint8_t", "uchar"),
        ("__int16_t", "short"),
        ("__uint16_t", "ushort"),
        ("__int32_t", "int"),
        ("__uint32_t", "uint"),
        ("__int64_t", "long_long"),
        ("__uint64_t", "ulong_long"),
        ("__quad_t", "long_long"),
        ("__u_quad_t", "ulong_long"),
        ("__intmax_t", "__int64_t"),
        ("__uintmax_t", "__uint64_t"),
        ("__dev_t", "__u_quad_t"),
        ("dev_t", "__dev_t"),
        ("__uid_t", "uint"),
        ("uid_t", "__uid_t"),
        ("__gid_t", "uint"),
        ("gid_t", "__gid_t"),
        ("__ino_t", "ulong"),
        ("ino_t", "__ino_t"),
        ("__ino64_t", "__u_quad_t"),
        ("ino64_t", "__ino64_t"),
        ("__mode_t", "uint"),
        ("mode_t", "__mode_t"),
        ("__nlink_t", "uint"),
        ("nlink_t", "__nlink_t"),
        ("__off_t", "long"),
        ("off_t", "__off_t"),
        ("__off64_t", "__quad_t"),
        ("off64_t", "__off64_t"),
        ("loff_t", "__off64_t"),
        ("__pid_t", "int"),
        ("pid_t", "__pid_t"),
        ("__id_t", "uint"),
        ("id_t", "__id_t"),
        ("__rlim_t", "ulong"),
        ("rlim_t", "__rlim_t"),
        ("__rlim64_t", "__u_quad_t"),
        ("__clock_t", "long"),
        ("clock_t", "__clock_t"),
        ("__clockid_t", "int"),
        ("clockid_t", "__clockid_t"),
        ("__time_t", "long"),
        ("time_t", "__time_t"),
        ("__timer_t", "pointer"),
        ("timer_t", "__timer_t"),
        ("__useconds_t", "uint"),
        ("useconds_t", "__useconds_t"),
        ("__suseconds_t", "long"),
        ("suseconds_t", "__suseconds_t"),
        ("__key_t", "int"),
        ("key_t", "__key_t"),
        ("__daddr_t", "int"),
        ("daddr_t", "__daddr_t"),
        ("__blksize_t", "long"),
        ("blksize_t", "__blksize_t"),
        ("__blkcnt_t", "long"),
        ("blkcnt_t", "__blkcnt_t"),
        ("__blkcnt64_t", "__quad_t"),
        ("__fsblkcnt_t", "ulong"),
        ("fsblkcnt_t", "__fsblkcnt_t"),
        ("__fsfilcnt_t", "ulong"),
        ("fsfilcnt_t", "__fsfilcnt_t"),
        ("__ssize_t", "long"),
        ("ssize_t", "__ssize_t"),
        ("__socklen_t", "uint"),
        ("socklen_t", "__socklen_t"),
        ("sa_family_t", "ushort"),
        ("__caddr_t", "pointer"),
        ("caddr_t", "__caddr_t"),
        ("__fd_mask", "long"),
        ("fd_mask", "__fd_mask"),
        ("u_char", "__u_char"),
        ("u_short", "__u_short"),
        ("u_int", "__u_int"),
        ("u_long", "__u_long"),
        ("quad_t", "__quad_t"),
        ("u_quad_t", "__u_quad_t"),
        ("register_t", "long"),
    ],
    lp64: &[
        ("__int64_t", "long"),
        ("__uint64_t", "ulong"),
        ("__quad_t", "long"),
        ("__u_quad_t", "ulong"),
        ("__nlink_t", "ulong"),
        ("int64_t", "long"),
        ("uint64_t", "ulong"),
        ("__intptr_t", "long"),
    ],
};
