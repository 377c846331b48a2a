//! Free-standing encode/decode entry points, dispatched on the `Type` tag.
//!
//! Integers use two's complement, floats IEEE-754, both in the byte order
//! carried by the scalar. Values outside a type's domain are rejected rather
//! than truncated.

use super::endianness::{mask_bits, sign_extend};
use super::scalar::{ScalarEncoding, ScalarType};
use super::sequence::{ArrayCount, ArrayType};
use super::ty::Type;
use super::value::Value;
use crate::error::{TypeError, TypeResult};

pub fn encode(value: &Value, ty: &Type) -> TypeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(ty.fixed_size().unwrap_or_default());
    encode_into(value, ty, &mut out)?;
    Ok(out)
}

/// Appends the encoding of `value` to `out`. On error `out` may hold a partial
/// encoding; callers that expose buffers must discard it.
pub fn encode_into(value: &Value, ty: &Type, out: &mut Vec<u8>) -> TypeResult<()> {
    match ty {
        Type::Scalar(scalar) => encode_scalar(value, scalar, out),
        Type::Array(array) => encode_array(value, array, out),
    }
}

/// Decodes a value from the front of `bytes`. Scalars and fixed arrays read
/// their own width and ignore anything after it; unbounded arrays consume the
/// whole slice.
pub fn decode(bytes: &[u8], ty: &Type) -> TypeResult<Value> {
    match ty {
        Type::Scalar(scalar) => {
            ensure_len(bytes, scalar.byte_size)?;
            Ok(decode_scalar(&bytes[..scalar.byte_size], scalar))
        }
        Type::Array(array) => decode_array(bytes, array),
    }
}

fn encode_scalar(value: &Value, ty: &ScalarType, out: &mut Vec<u8>) -> TypeResult<()> {
    let raw = match ty.encoding {
        ScalarEncoding::Unsigned => value
            .as_u64()
            .filter(|raw| *raw <= ty.max_unsigned())
            .ok_or_else(|| out_of_domain(ty, value))?,
        ScalarEncoding::Signed => {
            let signed = value
                .as_i64()
                .filter(|raw| (ty.min_signed()..=ty.max_signed()).contains(raw))
                .ok_or_else(|| out_of_domain(ty, value))?;
            (signed as u64) & mask_bits(ty.bit_size())
        }
        ScalarEncoding::Floating => {
            let float = value.as_f64().ok_or_else(|| out_of_domain(ty, value))?;
            if ty.byte_size == 4 {
                u64::from(narrow_f64(float).ok_or_else(|| out_of_domain(ty, value))?)
            } else {
                float.to_bits()
            }
        }
    };
    ty.endianness.encode_into(raw, ty.byte_size, out);
    Ok(())
}

fn decode_scalar(bytes: &[u8], ty: &ScalarType) -> Value {
    let raw = ty.endianness.decode_bytes(bytes);
    match ty.encoding {
        ScalarEncoding::Unsigned => Value::Unsigned(raw),
        ScalarEncoding::Signed => Value::Signed(sign_extend(raw, ty.bit_size())),
        ScalarEncoding::Floating if ty.byte_size == 4 => Value::Float(widen_f32(raw as u32)),
        ScalarEncoding::Floating => Value::Float(f64::from_bits(raw)),
    }
}

const F32_EXPONENT: u32 = 0x7F80_0000;
const F32_MANTISSA: u32 = 0x007F_FFFF;
const F32_QUIET: u32 = 0x0040_0000;
const F64_EXPONENT: u64 = 0x7FF0_0000_0000_0000;
const F64_MANTISSA: u64 = 0x000F_FFFF_FFFF_FFFF;
const MANTISSA_SHIFT: u32 = 52 - 23;

/// Widens float32 bits to f64. NaNs are rebuilt by hand because a hardware
/// conversion sets the quiet bit and would lose a signaling payload.
fn widen_f32(bits: u32) -> f64 {
    let value = f32::from_bits(bits);
    if !value.is_nan() {
        return f64::from(value);
    }
    let sign = u64::from(bits >> 31) << 63;
    let payload = u64::from(bits & F32_MANTISSA) << MANTISSA_SHIFT;
    f64::from_bits(sign | F64_EXPONENT | payload)
}

/// Narrows to float32 bits, or `None` when the value has no exact f32 form.
/// Inverse of `widen_f32` for every NaN it produces.
fn narrow_f64(value: f64) -> Option<u32> {
    if value.is_nan() {
        let bits = value.to_bits();
        let sign = ((bits >> 63) as u32) << 31;
        let mut payload = ((bits & F64_MANTISSA) >> MANTISSA_SHIFT) as u32;
        // A payload held only in the dropped low bits would otherwise read as infinity.
        if payload == 0 {
            payload = F32_QUIET;
        }
        return Some(sign | F32_EXPONENT | payload);
    }
    let narrowed = value as f32;
    (f64::from(narrowed) == value).then(|| narrowed.to_bits())
}

fn encode_array(value: &Value, array: &ArrayType, out: &mut Vec<u8>) -> TypeResult<()> {
    let items = value.as_list().ok_or_else(|| TypeError::InvalidValue {
        ty: "array",
        details: format!("expected a list but got a {} value", value.kind()),
    })?;
    if let ArrayCount::Fixed(count) = array.count {
        if items.len() != count {
            return Err(TypeError::SizeMismatch {
                field: String::new(),
                expected: count,
                actual: items.len(),
                unit: "element(s)",
            });
        }
    }
    for item in items {
        encode_into(item, &array.element, out)?;
    }
    Ok(())
}

fn decode_array(bytes: &[u8], array: &ArrayType) -> TypeResult<Value> {
    let stride = array.stride().ok_or_else(|| TypeError::InvalidValue {
        ty: "array",
        details: "element type has no fixed size".into(),
    })?;
    if stride == 0 {
        return Err(TypeError::InvalidValue {
            ty: "array",
            details: "element type occupies zero bytes".into(),
        });
    }
    let count = match array.count {
        ArrayCount::Fixed(count) => {
            ensure_len(bytes, stride.saturating_mul(count))?;
            count
        }
        ArrayCount::Unbounded => {
            if bytes.len() % stride != 0 {
                return Err(TypeError::SizeMismatch {
                    field: String::new(),
                    expected: bytes.len().next_multiple_of(stride),
                    actual: bytes.len(),
                    unit: "byte(s)",
                });
            }
            bytes.len() / stride
        }
    };
    let items = bytes
        .chunks_exact(stride)
        .take(count)
        .map(|chunk| decode(chunk, &array.element))
        .collect::<TypeResult<Vec<_>>>()?;
    Ok(Value::List(items))
}

fn ensure_len(bytes: &[u8], needed: usize) -> TypeResult<()> {
    if bytes.len() < needed {
        return Err(TypeError::BufferTooShort {
            field: String::new(),
            needed,
            remaining: bytes.len(),
        });
    }
    Ok(())
}

fn out_of_domain(ty: &ScalarType, value: &Value) -> TypeError {
    TypeError::InvalidValue {
        ty: ty.name,
        details: format!("{value:?} is outside the type's domain"),
    }
}
