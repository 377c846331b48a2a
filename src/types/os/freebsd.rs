//! FreeBSD typedefs from `sys/_types.h` and `x86/_types.h`.

use super::TypedefTable;

pub(super) const TABLE: TypedefTable = TypedefTable {
    name: "freebsd",
    common: &[
        ("__int8_t", "char"),
        ("__uint8_t", "uchar"),
        ("__int16_t", "short"),
        ("__uint16_t", "ushort"),
        ("__int32_t", "int"),
        ("__uint32_t", "uint"),
        ("__int64_t", "long_long"),
        ("__uint64_t", "ulong_long"),
        ("__intptr_t", "long"),
        ("__uintptr_t", "ulong"),
        ("__intmax_t", "__int64_t"),
        ("__uintmax_t", "__uint64_t"),
        ("__register_t", "long"),
        ("register_t", "__register_t"),
        ("__size_t", "ulong"),
        ("size_t", "__size_t"),
        ("__ssize_t", "long"),
        ("ssize_t", "__ssize_t"),
        ("__ptrdiff_t", "long"),
        ("__blksize_t", "__int32_t"),
        ("blksize_t", "__blksize_t"),
        ("__blkcnt_t", "__int64_t"),
        ("blkcnt_t", "__blkcnt_t"),
        ("__clock_t", "__int32_t"),
        ("clock_t", "__clock_t"),
        ("__clockid_t", "__int32_t"),
        ("clockid_t", "__clockid_t"),
        ("__critical_t", "__int32_t"),
        ("__dev_t", "__uint64_t"),
        ("dev_t", "__dev_t"),
        ("__fflags_t", "__uint32_t"),
        ("__fixpt_t", "__uint32_t"),
        ("__fsblkcnt_t", "__uint64_t"),
        ("fsblkcnt_t", "__fsblkcnt_t"),
        ("__fsfilcnt_t", "__uint64_t"),
        ("fsfilcnt_t", "__fsfilcnt_t"),
        ("__gid_t", "__uint32_t"),
        ("gid_t", "__gid_t"),
        ("__id_t", "__int64_t"),
        ("id_t", "__id_t"),
        ("__ino_t", "__uint64_t"),
        ("ino_t", "__ino_t"),
        ("__key_t", "long"),
        ("key_t", "__key_t"),
        ("__lwpid_t", "__int32_t"),
        ("lwpid_t", "__lwpid_t"),
        ("__mode_t", "__uint16_t"),
        ("mode_t", "__mode_t"),
        ("__nlink_t", "__uint64_t"),
        ("nlink_t", "__nlink_t"),
        ("__off_t", "__int64_t"),
        ("off_t", "__off_t"),
        ("__pid_t", "__int32_t"),
        ("pid_t", "__pid_t"),
        ("__rlim_t", "__int64_t"),
        ("rlim_t", "__rlim_t"),
        ("__sa_family_t", "__uint8_t"),
        ("sa_family_t", "__sa_family_t"),
        ("__socklen_t", "__uint32_t"),
        ("socklen_t", "__socklen_t"),
        ("__suseconds_t", "long"),
        ("suseconds_t", "__suseconds_t"),
        ("__time_t", "__int32_t"),
        ("time_t", "__time_t"),
        ("__timer_t", "pointer"),
        ("timer_t", "__timer_t"),
        ("__uid_t", "__uint32_t"),
        ("uid_t", "__uid_t"),
        ("__useconds_t", "uint"),
        ("useconds_t", "__useconds_t"),
        ("__wchar_t", "int"),
        ("__wint_t", "int"),
        ("__vm_offset_t", "ulong"),
        ("vm_offset_t", "__vm_offset_t"),
        ("__vm_size_t", "ulong"),
        ("vm_size_t", "__vm_size_t"),
    ],
    lp64: &[
        ("__int64_t", "long"),
        ("__uint64_t", "ulong"),
        ("__time_t", "__int64_t"),
        ("__register_t", "__int64_t"),
    ],
};
