use hex_literal::hex;
use typepack::template::{FieldSpec, Record, Template};
use typepack::types::{Endianness, PointerWidth, PrimitiveCatalog};
use typepack::{Target, TypeError, Value};

fn big() -> PrimitiveCatalog {
    PrimitiveCatalog::new(PointerWidth::W64, Endianness::Big)
}

#[test]
fn two_big_endian_words() {
    let template = Template::compile(&big(), [("a", "uint16"), ("b", "uint16")]).unwrap();
    let record = Record::new().with("a", 1u16).with("b", 2u16);
    let bytes = template.pack(&record).unwrap();
    assert_eq!(bytes, hex!("0001 0002"));
    assert_eq!(template.unpack(&bytes).unwrap(), record);
}

#[test]
fn count_byte_then_trailing_items() {
    let template = Template::compile(
        &big(),
        [
            FieldSpec::scalar("count", "uint8"),
            FieldSpec::trailing("items", "uint8"),
        ],
    )
    .unwrap();
    let record = Record::new()
        .with("count", 2u8)
        .with("items", vec![10u8, 20]);
    assert_eq!(template.pack(&record).unwrap(), hex!("02 0a 14"));
}

#[test]
fn trailing_length_comes_from_the_buffer_not_a_count_field() {
    let template = Template::compile(
        &big(),
        [
            FieldSpec::scalar("first", "uint8"),
            FieldSpec::trailing("items", "uint8"),
        ],
    )
    .unwrap();
    let record = template.unpack(&hex!("02 0a 14")).unwrap();
    assert_eq!(record.get("first"), Some(&Value::Unsigned(2)));
    assert_eq!(record.get("items"), Some(&Value::from(vec![10u8, 20])));
    assert_eq!(record.names().collect::<Vec<_>>(), ["first", "items"]);
}

#[test]
fn fixed_array_rejects_wrong_lengths() {
    let template = Template::compile(&big(), [FieldSpec::array("triple", "uint16", 3)]).unwrap();
    for len in [2usize, 4] {
        let values: Vec<u16> = (0..len as u16).collect();
        let err = template
            .pack(&Record::new().with("triple", values))
            .unwrap_err();
        assert!(
            matches!(err, TypeError::SizeMismatch { expected: 3, actual, .. } if actual == len),
            "{len} elements should be rejected, got {err}"
        );
    }
    let ok = template.pack(&Record::new().with("triple", vec![1u16, 2, 3]));
    assert_eq!(ok.unwrap(), hex!("0001 0002 0003"));
}

#[test]
fn unpack_one_byte_short() {
    let template = Template::compile(
        &big(),
        [
            FieldSpec::scalar("a", "uint32"),
            FieldSpec::array("b", "uint16", 2),
        ],
    )
    .unwrap();
    assert_eq!(template.size(), 8);
    let err = template.unpack(&[0u8; 7]).unwrap_err();
    assert_eq!(
        err,
        TypeError::BufferTooShort {
            field: "b".into(),
            needed: 4,
            remaining: 3,
        }
    );
}

#[test]
fn partial_trailing_element_is_malformed() {
    let template = Template::compile(
        &big(),
        [
            FieldSpec::scalar("tag", "uint8"),
            FieldSpec::trailing("words", "uint16"),
        ],
    )
    .unwrap();
    let err = template.unpack(&hex!("01 0002 03")).unwrap_err();
    assert!(matches!(err, TypeError::SizeMismatch { ref field, .. } if field == "words"));
    let empty = template.unpack(&hex!("01")).unwrap();
    assert_eq!(empty.get("words"), Some(&Value::List(Vec::new())));
}

#[test]
fn repacking_unpacked_bytes_is_identity() {
    let template = Template::compile(
        &big(),
        [
            FieldSpec::scalar("magic", "uint32_le"),
            FieldSpec::scalar("ratio", "float64"),
            FieldSpec::array("delta", "int16", 2),
            FieldSpec::trailing("body", "uint8"),
        ],
    )
    .unwrap();
    let bytes = hex!("7f454c46 400921fb54442d18 ffff 8000 deadbeef");
    let record = template.unpack(&bytes).unwrap();
    assert_eq!(record.get("magic"), Some(&Value::Unsigned(0x464c_457f)));
    assert_eq!(record.get("ratio"), Some(&Value::Float(std::f64::consts::PI)));
    assert_eq!(record.get("delta"), Some(&Value::from(vec![-1i16, i16::MIN])));
    assert_eq!(template.pack(&record).unwrap(), bytes);
}

#[test]
fn templates_resolve_os_typedefs() {
    let linux64 = "x86_64-linux".parse::<Target>().unwrap().types();
    let linux32 = "i386-linux".parse::<Target>().unwrap().types();
    let fields = [
        FieldSpec::scalar("pid", "pid_t"),
        FieldSpec::scalar("len", "size_t"),
        FieldSpec::scalar("addr", "pointer"),
    ];
    let wide = Template::compile(linux64.as_ref(), fields.clone()).unwrap();
    let narrow = Template::compile(linux32.as_ref(), fields).unwrap();
    assert_eq!(wide.size(), 20);
    assert_eq!(narrow.size(), 12);

    let record = Record::new()
        .with("pid", 1234i32)
        .with("len", 16u64)
        .with("addr", 0xdead_beefu32);
    assert_eq!(
        narrow.pack(&record).unwrap(),
        hex!("d2040000 10000000 efbeadde")
    );
}

#[test]
fn single_value_helpers_use_named_types() {
    let types = "ppc-linux".parse::<Target>().unwrap().types();
    assert_eq!(typepack::pack(types.as_ref(), "uint32_t", 0x0102_0304u32).unwrap(), hex!("01020304"));
    assert_eq!(typepack::pack(types.as_ref(), "float_le", 1.0f32).unwrap(), hex!("0000803f"));
    assert_eq!(
        typepack::unpack(types.as_ref(), "short", &hex!("fffe")).unwrap(),
        Value::Signed(-2)
    );
    assert!(matches!(
        typepack::pack(types.as_ref(), "uchar", 300u16),
        Err(TypeError::InvalidValue { .. })
    ));
}

#[test]
fn failed_pack_returns_no_bytes() {
    let template = Template::compile(&big(), [("a", "uint8"), ("b", "uint8")]).unwrap();
    let result = template.pack(&Record::new().with("a", 1u8).with("b", 999u16));
    assert!(matches!(result, Err(TypeError::InvalidValue { ty: "uint8", .. })));
}

#[test]
fn signaling_nan_bytes_repack_unchanged() {
    let types = PrimitiveCatalog::new(PointerWidth::W64, Endianness::Big);
    let template = Template::compile(&types, [("f", "float32"), ("g", "float32_le")]).unwrap();
    let bytes = hex!("7F800001 0100807F");
    let record = template.unpack(&bytes).expect("NaNs are valid float32 input");
    assert_eq!(template.pack(&record).expect("repack"), bytes);
}
