//! The resolvable type shapes handed out by every lookup layer.

use super::codec;
use super::endianness::Endianness;
use super::scalar::ScalarType;
use super::sequence::{ArrayCount, ArrayType};
use super::value::Value;
use crate::error::TypeResult;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Scalar(ScalarType),
    Array(ArrayType),
}

impl Type {
    pub fn array(element: Type, count: ArrayCount) -> Self {
        Type::Array(ArrayType::new(element, count))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::Scalar(scalar) => scalar.name,
            Type::Array(_) => "array",
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Type::Scalar(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    /// Byte size, or `None` for an unbounded array.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Type::Scalar(scalar) => Some(scalar.byte_size),
            Type::Array(array) => array.fixed_size(),
        }
    }

    pub fn alignment(&self) -> usize {
        match self {
            Type::Scalar(scalar) => scalar.alignment,
            Type::Array(array) => array.element.alignment(),
        }
    }

    pub fn endianness(&self) -> Endianness {
        match self {
            Type::Scalar(scalar) => scalar.endianness,
            Type::Array(array) => array.element.endianness(),
        }
    }

    /// Rewrites the byte order of the scalar, or of every array element.
    pub fn with_endianness(self, endianness: Endianness) -> Self {
        match self {
            Type::Scalar(scalar) => Type::Scalar(scalar.with_endianness(endianness)),
            Type::Array(array) => {
                Type::array((*array.element).with_endianness(endianness), array.count)
            }
        }
    }

    pub fn encode(&self, value: &Value) -> TypeResult<Vec<u8>> {
        codec::encode(value, self)
    }

    pub fn decode(&self, bytes: &[u8]) -> TypeResult<Value> {
        codec::decode(bytes, self)
    }
}

impl From<ScalarType> for Type {
    fn from(value: ScalarType) -> Self {
        Type::Scalar(value)
    }
}

impl From<ArrayType> for Type {
    fn from(value: ArrayType) -> Self {
        Type::Array(value)
    }
}
