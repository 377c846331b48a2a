//! Compiled field layouts that pack records into bytes and unpack them back.
//!
//! Layouts are packed: each field starts where the previous one ends. Only the
//! last field may be unbounded; any relation between a count field and an
//! array length is the caller's business.

mod field;
mod record;

pub use field::{FieldSpec, Multiplicity, TemplateField};
pub use record::Record;

use smallvec::SmallVec;
use tracing::debug;

use crate::error::{TypeError, TypeResult};
use crate::types::codec;
use crate::types::{ArrayCount, Type, TypeLookup, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    fields: SmallVec<[TemplateField; 8]>,
    fixed_size: usize,
}

impl Template {
    /// Resolves every field type once through `types`.
    pub fn compile<L, I, F>(types: &L, fields: I) -> TypeResult<Self>
    where
        L: TypeLookup + ?Sized,
        I: IntoIterator<Item = F>,
        F: Into<FieldSpec>,
    {
        let mut compiled: SmallVec<[TemplateField; 8]> = SmallVec::new();
        let mut offset = 0usize;
        for spec in fields.into_iter().map(Into::into) {
            if compiled.iter().any(|field| field.name == spec.name) {
                return Err(TypeError::invalid_field(spec.name, "duplicate field name"));
            }
            if compiled.last().is_some_and(TemplateField::is_trailing) {
                let reason = if spec.multiplicity == Multiplicity::Unbounded {
                    "only one unbounded field is allowed"
                } else {
                    "unbounded field must be the last field"
                };
                return Err(TypeError::invalid_field(spec.name, reason));
            }
            if spec.multiplicity == Multiplicity::Fixed(0) {
                return Err(TypeError::invalid_field(
                    spec.name,
                    "array multiplicity must be positive",
                ));
            }
            let element = types.lookup(&spec.type_name)?;
            let (ty, size) = match spec.multiplicity {
                Multiplicity::Scalar => {
                    let size = element.fixed_size();
                    (element, size)
                }
                Multiplicity::Fixed(count) => {
                    let size = element
                        .fixed_size()
                        .and_then(|stride| stride.checked_mul(count));
                    (Type::array(element, ArrayCount::Fixed(count)), size)
                }
                Multiplicity::Unbounded => (Type::array(element, ArrayCount::Unbounded), Some(0)),
            };
            let next = size
                .and_then(|size| offset.checked_add(size))
                .ok_or_else(|| TypeError::invalid_field(&spec.name, "field size overflows usize"))?;
            compiled.push(TemplateField {
                name: spec.name,
                multiplicity: spec.multiplicity,
                ty,
                offset,
            });
            offset = next;
        }
        debug!(
            lookup = types.label(),
            fields = compiled.len(),
            fixed_size = offset,
            "compiled template"
        );
        Ok(Self {
            fields: compiled,
            fixed_size: offset,
        })
    }

    pub fn fields(&self) -> &[TemplateField] {
        &self.fields
    }

    /// Sum of the fixed field sizes, excluding any trailing field.
    pub fn size(&self) -> usize {
        self.fixed_size
    }

    pub fn is_variable(&self) -> bool {
        self.fields.last().is_some_and(TemplateField::is_trailing)
    }

    pub fn pack(&self, record: &Record) -> TypeResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.fixed_size);
        for field in &self.fields {
            let value = record
                .get(&field.name)
                .ok_or_else(|| TypeError::invalid_field(&field.name, "missing value"))?;
            codec::encode_into(value, &field.ty, &mut out)
                .map_err(|err| err.in_field(&field.name))?;
        }
        Ok(out)
    }

    /// Bytes past the last fixed field are ignored unless a trailing field
    /// claims them.
    pub fn unpack(&self, bytes: &[u8]) -> TypeResult<Record> {
        let mut record = Record::with_capacity(self.fields.len());
        let mut cursor = 0usize;
        for field in &self.fields {
            let remaining = &bytes[cursor..];
            let value = match field.fixed_size() {
                Some(size) => {
                    if remaining.len() < size {
                        return Err(TypeError::BufferTooShort {
                            field: field.name.clone(),
                            needed: size,
                            remaining: remaining.len(),
                        });
                    }
                    cursor += size;
                    codec::decode(&remaining[..size], &field.ty)
                }
                None => {
                    cursor = bytes.len();
                    codec::decode(remaining, &field.ty)
                }
            }
            .map_err(|err| err.in_field(&field.name))?;
            record.insert(field.name.clone(), value);
        }
        Ok(record)
    }
}

/// Encodes a single value as the named type.
pub fn pack_value<L>(types: &L, type_name: &str, value: impl Into<Value>) -> TypeResult<Vec<u8>>
where
    L: TypeLookup + ?Sized,
{
    types.lookup(type_name)?.encode(&value.into())
}

/// Decodes a single value of the named type from the front of `bytes`.
pub fn unpack_value<L>(types: &L, type_name: &str, bytes: &[u8]) -> TypeResult<Value>
where
    L: TypeLookup + ?Sized,
{
    types.lookup(type_name)?.decode(bytes)
}

#[cfg(test)]
mod tests {
    //! Layout, validation, and codec behavior of compiled templates.
    use super::*;
    use crate::types::{Endianness, PointerWidth, PrimitiveCatalog};
    use hex_literal::hex;

    fn big() -> PrimitiveCatalog {
        PrimitiveCatalog::new(PointerWidth::W64, Endianness::Big)
    }

    #[test]
    fn offsets_are_packed() {
        let template = Template::compile(
            &big(),
            [
                FieldSpec::scalar("tag", "uint8"),
                FieldSpec::array("words", "uint32", 2),
                FieldSpec::scalar("tail", "uint16"),
            ],
        )
        .expect("compile");
        let offsets: Vec<_> = template.fields().iter().map(|f| f.offset).collect();
        assert_eq!(offsets, [0, 1, 9], "no alignment padding between fields");
        assert_eq!(template.size(), 11);
        assert!(!template.is_variable());
    }

    #[test]
    fn tuple_specs_are_scalars() {
        let template = Template::compile(&big(), [("a", "uint16"), ("b", "int8")]).expect("compile");
        assert_eq!(template.size(), 3);
        assert_eq!(template.fields()[1].multiplicity, Multiplicity::Scalar);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Template::compile(&big(), [("a", "uint8"), ("a", "uint16")]).unwrap_err();
        assert_eq!(err, TypeError::invalid_field("a", "duplicate field name"));
    }

    #[test]
    fn zero_length_arrays_are_rejected() {
        let err = Template::compile(&big(), [FieldSpec::array("a", "uint8", 0)]).unwrap_err();
        assert!(matches!(err, TypeError::InvalidFieldSpec { .. }));
    }

    #[test]
    fn unbounded_field_must_be_last_and_unique() {
        let not_last = Template::compile(
            &big(),
            [FieldSpec::trailing("rest", "uint8"), FieldSpec::scalar("x", "uint8")],
        )
        .unwrap_err();
        assert_eq!(
            not_last,
            TypeError::invalid_field("x", "unbounded field must be the last field")
        );
        let twice = Template::compile(
            &big(),
            [FieldSpec::trailing("a", "uint8"), FieldSpec::trailing("b", "uint8")],
        )
        .unwrap_err();
        assert_eq!(twice, TypeError::invalid_field("b", "only one unbounded field is allowed"));
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let err = Template::compile(&big(), [FieldSpec::array("a", "uint64", usize::MAX)]).unwrap_err();
        assert_eq!(err, TypeError::invalid_field("a", "field size overflows usize"));
        let half = usize::MAX / 2 + 1;
        let err = Template::compile(
            &big(),
            [FieldSpec::array("a", "uint8", half), FieldSpec::array("b", "uint8", half)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TypeError::invalid_field("b", "field size overflows usize"),
            "the running offset is checked too"
        );
    }

    #[test]
    fn unknown_types_propagate() {
        let err = Template::compile(&big(), [("a", "not_a_real_type")]).unwrap_err();
        assert_eq!(err, TypeError::unknown("not_a_real_type"));
    }

    #[test]
    fn missing_values_fail_at_pack_time() {
        let template = Template::compile(&big(), [("a", "uint8"), ("b", "uint8")]).unwrap();
        let err = template.pack(&Record::new().with("a", 1u8)).unwrap_err();
        assert_eq!(err, TypeError::invalid_field("b", "missing value"));
    }

    #[test]
    fn mixed_record_round_trips() {
        let template = Template::compile(
            &big(),
            [
                FieldSpec::scalar("kind", "int8"),
                FieldSpec::array("coords", "float32", 2),
                FieldSpec::scalar("flags", "uint16_le"),
                FieldSpec::trailing("payload", "uint16"),
            ],
        )
        .unwrap();
        let record = Record::new()
            .with("kind", -3i8)
            .with("coords", vec![1.5f32, -0.25])
            .with("flags", 0x0102u16)
            .with("payload", vec![0xAAAAu16, 0x0001]);
        let bytes = template.pack(&record).expect("pack");
        assert_eq!(bytes, hex!("FD 3FC00000 BE800000 0201 AAAA 0001"));
        assert_eq!(template.unpack(&bytes).expect("unpack"), record);
    }

    #[test]
    fn errors_are_labelled_with_the_field() {
        let template = Template::compile(&big(), [FieldSpec::array("items", "uint8", 3)]).unwrap();
        let err = template
            .pack(&Record::new().with("items", vec![1u8, 2]))
            .unwrap_err();
        assert_eq!(
            err,
            TypeError::SizeMismatch {
                field: "items".into(),
                expected: 3,
                actual: 2,
                unit: "element(s)",
            }
        );
    }

    #[test]
    fn trailing_bytes_without_tail_field_are_ignored() {
        let template = Template::compile(&big(), [("a", "uint8")]).unwrap();
        let record = template.unpack(&[7, 8, 9]).expect("extra bytes are not an error");
        assert_eq!(record, Record::new().with("a", 7u8));
    }

    #[test]
    fn single_value_helpers() {
        let catalog = big();
        assert_eq!(pack_value(&catalog, "uint32_le", 1u32).unwrap(), [1, 0, 0, 0]);
        assert_eq!(
            unpack_value(&catalog, "int16", &[0xFF, 0xFE]).unwrap(),
            Value::Signed(-2)
        );
    }
}
