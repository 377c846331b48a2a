//! Byte order model plus the raw integer helpers every scalar codec is built on.

pub const MAX_SCALAR_BYTES: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    #[inline(always)]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// Network byte order.
    #[inline(always)]
    pub const fn network() -> Self {
        Endianness::Big
    }

    /// Maps a type-name suffix (`le`, `be`, `ne`, `net`) to a byte order.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "le" => Some(Endianness::Little),
            "be" => Some(Endianness::Big),
            "ne" => Some(Endianness::native()),
            "net" => Some(Endianness::network()),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn decode_bytes(self, bytes: &[u8]) -> u64 {
        assert!(bytes.len() <= MAX_SCALAR_BYTES, "value exceeds 64 bits");
        if bytes.is_empty() {
            return 0;
        }
        let mut buf = [0u8; MAX_SCALAR_BYTES];
        match self {
            Endianness::Little => {
                buf[..bytes.len()].copy_from_slice(bytes);
                u64::from_le_bytes(buf)
            }
            Endianness::Big => {
                let start = MAX_SCALAR_BYTES - bytes.len();
                buf[start..].copy_from_slice(bytes);
                u64::from_be_bytes(buf)
            }
        }
    }

    /// Appends the low `byte_len` bytes of `value` to `out` in this order.
    #[inline(always)]
    pub fn encode_into(self, value: u64, byte_len: usize, out: &mut Vec<u8>) {
        assert!(byte_len <= MAX_SCALAR_BYTES, "value exceeds 64 bits");
        match self {
            Endianness::Little => out.extend_from_slice(&value.to_le_bytes()[..byte_len]),
            Endianness::Big => {
                let start = MAX_SCALAR_BYTES - byte_len;
                out.extend_from_slice(&value.to_be_bytes()[start..]);
            }
        }
    }
}

#[inline(always)]
pub(crate) fn mask_bits(width_bits: u32) -> u64 {
    if width_bits >= 64 {
        u64::MAX
    } else {
        (1u64 << width_bits) - 1
    }
}

#[inline(always)]
pub(crate) fn sign_extend(value: u64, bits: u32) -> i64 {
    if bits == 0 {
        return 0;
    }
    let shift = 64u32.saturating_sub(bits);
    ((value << shift) as i64) >> shift
}
