//! Scalar machine types: width, signedness, alignment and byte order.

use super::endianness::Endianness;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarEncoding {
    Unsigned,
    Signed,
    Floating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerWidth {
    W32,
    W64,
}

impl PointerWidth {
    pub const fn bytes(self) -> usize {
        match self {
            PointerWidth::W32 => 4,
            PointerWidth::W64 => 8,
        }
    }

    pub const fn bits(self) -> u32 {
        (self.bytes() * 8) as u32
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(PointerWidth::W32),
            64 => Some(PointerWidth::W64),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScalarType {
    pub name: &'static str,
    pub byte_size: usize,
    pub alignment: usize,
    pub encoding: ScalarEncoding,
    pub endianness: Endianness,
    pub is_pointer: bool,
}

impl ScalarType {
    pub fn new(
        name: &'static str,
        byte_size: usize,
        encoding: ScalarEncoding,
        endianness: Endianness,
    ) -> Self {
        assert!(
            matches!(byte_size, 1 | 2 | 4 | 8),
            "unsupported scalar width: {byte_size} bytes"
        );
        assert!(
            encoding != ScalarEncoding::Floating || matches!(byte_size, 4 | 8),
            "floating scalars are 4 or 8 bytes"
        );
        Self {
            name,
            byte_size,
            alignment: byte_size,
            encoding,
            endianness,
            is_pointer: false,
        }
    }

    pub fn pointer(width: PointerWidth, endianness: Endianness) -> Self {
        let mut scalar = Self::new("pointer", width.bytes(), ScalarEncoding::Unsigned, endianness);
        scalar.is_pointer = true;
        scalar
    }

    /// Caps the natural alignment, e.g. i386 SysV aligns 8-byte scalars to 4.
    pub fn with_max_alignment(mut self, max_alignment: usize) -> Self {
        debug_assert!(max_alignment.is_power_of_two());
        self.alignment = self.byte_size.min(max_alignment);
        self
    }

    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn bit_size(&self) -> u32 {
        (self.byte_size * 8) as u32
    }

    pub fn is_signed(&self) -> bool {
        matches!(self.encoding, ScalarEncoding::Signed)
    }

    pub fn is_float(&self) -> bool {
        matches!(self.encoding, ScalarEncoding::Floating)
    }

    pub fn min_signed(&self) -> i64 {
        i64::MIN >> (64 - self.bit_size())
    }

    pub fn max_signed(&self) -> i64 {
        i64::MAX >> (64 - self.bit_size())
    }

    pub fn max_unsigned(&self) -> u64 {
        u64::MAX >> (64 - self.bit_size())
    }
}

#[cfg(test)]
mod tests {
    //! Range helpers must agree with the Rust primitive bounds.
    use super::*;

    #[test]
    fn ranges_match_primitives() {
        let i16_ty = ScalarType::new("int16", 2, ScalarEncoding::Signed, Endianness::Little);
        assert_eq!(i16_ty.min_signed(), i16::MIN as i64);
        assert_eq!(i16_ty.max_signed(), i16::MAX as i64);
        let u32_ty = ScalarType::new("uint32", 4, ScalarEncoding::Unsigned, Endianness::Big);
        assert_eq!(u32_ty.max_unsigned(), u32::MAX as u64);
        let u64_ty = ScalarType::new("uint64", 8, ScalarEncoding::Unsigned, Endianness::Big);
        assert_eq!(u64_ty.max_unsigned(), u64::MAX, "full width must not overflow the shift");
    }

    #[test]
    fn alignment_cap_never_exceeds_size() {
        let ty = ScalarType::new("int64", 8, ScalarEncoding::Signed, Endianness::Little)
            .with_max_alignment(4);
        assert_eq!(ty.alignment, 4, "i386 caps 8-byte scalars at 4");
        let small = ScalarType::new("int16", 2, ScalarEncoding::Signed, Endianness::Little)
            .with_max_alignment(4);
        assert_eq!(small.alignment, 2, "narrow scalars keep their natural alignment");
    }

    #[test]
    fn pointer_tracks_width() {
        let ptr = ScalarType::pointer(PointerWidth::W32, Endianness::Little);
        assert_eq!(ptr.byte_size, 4);
        assert!(ptr.is_pointer);
        assert!(!ptr.is_signed());
    }
}
