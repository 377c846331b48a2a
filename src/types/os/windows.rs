//! Win32 typedefs. Windows is LLP64: `long` stays 32 bits on 64-bit targets,
//! so the table overrides the architecture's `long`/`ulong`.

use super::TypedefTable;

pub(super) const TABLE: TypedefTable = TypedefTable {
    name: "windows",
    common: &[
        ("long", "int32"),
        ("ulong", "uint32"),
        ("BOOL", "int"),
        ("BOOLEAN", "BYTE"),
        ("BYTE", "uchar"),
        ("CHAR", "char"),
        ("UCHAR", "uchar"),
        ("WCHAR", "wchar_t"),
        ("wchar_t", "ushort"),
        ("SHORT", "short"),
        ("USHORT", "ushort"),
        ("WORD", "ushort"),
        ("INT", "int"),
        ("UINT", "uint"),
        ("LONG", "long"),
        ("ULONG", "ulong"),
        ("DWORD", "ulong"),
        ("LONGLONG", "long_long"),
        ("ULONGLONG", "ulong_long"),
        ("DWORDLONG", "ULONGLONG"),
        ("DWORD32", "uint"),
        ("DWORD64", "ulong_long"),
        ("QWORD", "ulong_long"),
        ("INT8", "char"),
        ("UINT8", "uchar"),
        ("INT16", "short"),
        ("UINT16", "ushort"),
        ("INT32", "int"),
        ("UINT32", "uint"),
        ("INT64", "long_long"),
        ("UINT64", "ulong_long"),
        ("LONG32", "int"),
        ("ULONG32", "uint"),
        ("LONG64", "long_long"),
        ("ULONG64", "ulong_long"),
        ("FLOAT", "float"),
        ("INT_PTR", "int"),
        ("UINT_PTR", "uint"),
        ("LONG_PTR", "long"),
        ("ULONG_PTR", "ulong"),
        ("DWORD_PTR", "ULONG_PTR"),
        ("SIZE_T", "ULONG_PTR"),
        ("SSIZE_T", "LONG_PTR"),
        ("HALF_PTR", "short"),
        ("UHALF_PTR", "ushort"),
        ("PVOID", "pointer"),
        ("LPVOID", "pointer"),
        ("LPCVOID", "pointer"),
        ("HANDLE", "PVOID"),
        ("HINSTANCE", "HANDLE"),
        ("HMODULE", "HINSTANCE"),
        ("HKEY", "HANDLE"),
        ("HWND", "HANDLE"),
        ("ATOM", "WORD"),
        ("LANGID", "WORD"),
        ("LCID", "DWORD"),
        ("COLORREF", "DWORD"),
        ("HRESULT", "LONG"),
        ("NTSTATUS", "LONG"),
        ("WPARAM", "UINT_PTR"),
        ("LPARAM", "LONG_PTR"),
        ("LRESULT", "LONG_PTR"),
        ("size_t", "SIZE_T"),
        ("ssize_t", "SSIZE_T"),
        ("intptr_t", "INT_PTR"),
        ("uintptr_t", "UINT_PTR"),
        ("ptrdiff_t", "INT_PTR"),
        ("time_t", "long_long"),
        ("off_t", "long"),
        ("int8_t", "char"),
        ("uint8_t", "uchar"),
        ("int16_t", "short"),
        ("uint16_t", "ushort"),
        ("int32_t", "int"),
        ("uint32_t", "uint"),
        ("int64_t", "long_long"),
        ("uint64_t", "ulong_long"),
    ],
    lp64: &[
        ("INT_PTR", "long_long"),
        ("UINT_PTR", "ulong_long"),
        ("LONG_PTR", "long_long"),
        ("ULONG_PTR", "ulong_long"),
        ("HALF_PTR", "int"),
        ("UHALF_PTR", "uint"),
    ],
};
