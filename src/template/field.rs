//! Field declarations and their compiled form.

use crate::types::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    Scalar,
    Fixed(usize),
    /// Trailing field consuming the rest of the buffer.
    Unbounded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub type_name: String,
    pub multiplicity: Multiplicity,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        multiplicity: Multiplicity,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            multiplicity,
        }
    }

    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, type_name, Multiplicity::Scalar)
    }

    pub fn array(name: impl Into<String>, type_name: impl Into<String>, count: usize) -> Self {
        Self::new(name, type_name, Multiplicity::Fixed(count))
    }

    pub fn trailing(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, type_name, Multiplicity::Unbounded)
    }
}

impl<N: Into<String>, T: Into<String>> From<(N, T)> for FieldSpec {
    fn from((name, type_name): (N, T)) -> Self {
        FieldSpec::scalar(name, type_name)
    }
}

/// A field after its type name has been resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateField {
    pub name: String,
    pub multiplicity: Multiplicity,
    /// The scalar type for `Scalar`, an array type otherwise.
    pub ty: Type,
    pub offset: usize,
}

impl TemplateField {
    pub fn is_trailing(&self) -> bool {
        matches!(self.multiplicity, Multiplicity::Unbounded)
    }

    /// Byte span of the field; `None` for the trailing field.
    pub fn fixed_size(&self) -> Option<usize> {
        self.ty.fixed_size()
    }
}
