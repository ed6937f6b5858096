use jclass::access_flags::ClassAccessFlags;
use jclass::attributes::AttributeInfo;
use jclass::constants::{Class, Constant, ConstantPool, Methodref, NameAndType, Utf8};
use jclass::descriptors::{FieldDescriptor, MethodDescriptor};
use jclass::errors::DecodeCause;

fn class_image(minor: u16, major: u16, pool_count: u16, pool: &[u8], tail: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0xCAFEBABEu32.to_be_bytes());
    bytes.extend_from_slice(&minor.to_be_bytes());
    bytes.extend_from_slice(&major.to_be_bytes());
    bytes.extend_from_slice(&pool_count.to_be_bytes());
    bytes.extend_from_slice(pool);
    bytes.extend_from_slice(tail);
    bytes
}

/// access_flags, this, super, interfaces, fields, methods, attributes: all
/// zero.
fn empty_tail() -> Vec<u8> {
    vec![0; 14]
}

fn utf8_entry(value: &str) -> Vec<u8> {
    let mut bytes = vec![1u8];
    bytes.extend_from_slice(&(value.len() as u16).to_be_bytes());
    bytes.extend_from_slice(value.as_bytes());
    bytes
}

fn attribute_record(name_index: u16, body: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&name_index.to_be_bytes());
    bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

/// One method `test()V` whose `Code` attribute nests a `LineNumberTable`
/// with entries (0, 10) and (2, 11).
fn code_class() -> Vec<u8> {
    let mut pool = Vec::new();
    for name in ["Code", "LineNumberTable", "test", "()V"] {
        pool.extend_from_slice(&utf8_entry(name));
    }

    let mut lnt_body = Vec::new();
    lnt_body.extend_from_slice(&2u16.to_be_bytes());
    for (start_pc, line_number) in [(0u16, 10u16), (2, 11)] {
        lnt_body.extend_from_slice(&start_pc.to_be_bytes());
        lnt_body.extend_from_slice(&line_number.to_be_bytes());
    }

    let mut code_body = Vec::new();
    code_body.extend_from_slice(&2u16.to_be_bytes()); // max_stack
    code_body.extend_from_slice(&1u16.to_be_bytes()); // max_locals
    code_body.extend_from_slice(&3u32.to_be_bytes());
    code_body.extend_from_slice(&[0x03, 0x3c, 0xb1]); // iconst_0, istore_1, return
    code_body.extend_from_slice(&0u16.to_be_bytes()); // exception_table_length
    code_body.extend_from_slice(&1u16.to_be_bytes()); // nested attribute count
    code_body.extend_from_slice(&attribute_record(2, &lnt_body));

    let mut tail = Vec::new();
    tail.extend_from_slice(&[0; 8]); // flags, this, super, interfaces
    tail.extend_from_slice(&0u16.to_be_bytes()); // fields
    tail.extend_from_slice(&1u16.to_be_bytes()); // methods
    tail.extend_from_slice(&0u16.to_be_bytes()); // method access_flags
    tail.extend_from_slice(&3u16.to_be_bytes()); // name_index "test"
    tail.extend_from_slice(&4u16.to_be_bytes()); // descriptor_index "()V"
    tail.extend_from_slice(&1u16.to_be_bytes()); // method attribute count
    tail.extend_from_slice(&attribute_record(1, &code_body));
    tail.extend_from_slice(&0u16.to_be_bytes()); // class attribute count
    class_image(0, 52, 5, &pool, &tail)
}

#[test]
fn loads_empty_class() {
    let bytes = class_image(0, 52, 1, &[], &empty_tail());
    let class = jclass::decode(&bytes).unwrap();
    assert_eq!(class.magic, 0xCAFEBABE);
    assert_eq!(class.major_version, 52);
    assert_eq!(class.minor_version, 0);
    assert_eq!(class.version_description(), "JDK 1.8 (LTS)");
    assert!(class.access_flags.is_empty());
    assert_eq!(class.this_class, 0);
    assert_eq!(class.super_class, 0);
    assert!(class.interfaces.is_empty());
    assert!(class.fields.is_empty());
    assert!(class.methods.is_empty());
    assert!(class.attributes.is_empty());
    // Slot 0 only.
    assert_eq!(class.constant_pool.entries().len(), 1);
}

#[test]
fn pool_long_occupies_two_slots() {
    let mut pool = utf8_entry("A");
    pool.push(5u8); // Long tag
    pool.extend_from_slice(&0x1122334455667788u64.to_be_bytes());
    pool.extend_from_slice(&utf8_entry("B"));
    let bytes = class_image(0, 52, 5, &pool, &empty_tail());
    let class = jclass::decode(&bytes).unwrap();

    let pool = &class.constant_pool;
    assert!(matches!(pool.get(1), Ok(Constant::Utf8(utf8)) if utf8.bytes == b"A"));
    assert!(matches!(pool.get(2), Ok(Constant::Long(long)) if long.value == 0x1122334455667788));
    assert_eq!(pool.get(3).unwrap_err(), DecodeCause::InvalidIndex(3));
    assert!(matches!(pool.get(4), Ok(Constant::Utf8(utf8)) if utf8.bytes == b"B"));
    assert_eq!(pool.get(5).unwrap_err(), DecodeCause::InvalidIndex(5));
    assert_eq!(pool.get(0).unwrap_err(), DecodeCause::InvalidIndex(0));
}

#[test]
fn utf8_payload_matches_input_region() {
    let pool = utf8_entry("Hello");
    let bytes = class_image(0, 52, 2, &pool, &empty_tail());
    let class = jclass::decode(&bytes).unwrap();
    let Ok(Constant::Utf8(utf8)) = class.constant_pool.get(1) else {
        panic!("expected a Utf8 constant in slot 1");
    };
    assert_eq!(utf8.length, 5);
    assert_eq!(utf8.bytes, b"Hello");
    // The payload is the exact region after the length prefix: magic(4) +
    // versions(4) + count(2) + tag(1) + length(2) = 13.
    let start = utf8.bytes.as_ptr() as usize - bytes.as_ptr() as usize;
    assert_eq!(start, 13);
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = class_image(0, 52, 1, &[], &empty_tail());
    bytes[0] = 0xDE;
    bytes[1] = 0xAD;
    bytes[2] = 0xBE;
    bytes[3] = 0xEF;
    let error = jclass::decode(&bytes).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::BadMagic(0xDEADBEEF));
    assert_eq!(error.offset(), 0);
}

#[test]
fn rejects_any_corrupted_magic_bit() {
    let bytes = class_image(0, 52, 1, &[], &empty_tail());
    for byte in 0..4 {
        for bit in 0..8 {
            let mut corrupted = bytes.clone();
            corrupted[byte] ^= 1 << bit;
            let error = jclass::decode(&corrupted).unwrap_err();
            assert!(
                matches!(error.cause(), DecodeCause::BadMagic(_)),
                "flipping bit {bit} of byte {byte} should break the magic"
            );
        }
    }
}

#[test]
fn any_truncation_is_unexpected_eof() {
    let bytes = code_class();
    assert!(jclass::decode(&bytes).is_ok());
    for length in 0..bytes.len() {
        let error = jclass::decode(&bytes[..length]).unwrap_err();
        assert_eq!(
            error.cause(),
            &DecodeCause::UnexpectedEof,
            "prefix of {length} bytes should run out of input"
        );
    }
}

#[test]
fn code_attribute_nests_line_number_table() {
    let bytes = code_class();
    let class = jclass::decode(&bytes).unwrap();
    assert_eq!(class.methods.len(), 1);
    let method = &class.methods[0];
    assert_eq!(method.attributes.len(), 1);
    assert_eq!(method.attributes[0].name_index(), 1);
    assert_eq!(method.attributes[0].length(), 31);
    let AttributeInfo::Code(code) = &method.attributes[0] else {
        panic!("expected a Code attribute");
    };
    assert_eq!(code.max_stack, 2);
    assert_eq!(code.max_locals, 1);
    assert_eq!(code.code_length, 3);
    assert_eq!(code.code, &[0x03, 0x3c, 0xb1]);
    assert!(code.exception_tables.is_empty());
    assert_eq!(code.attributes.len(), 1);
    let AttributeInfo::LineNumberTable(table) = &code.attributes[0] else {
        panic!("expected a nested LineNumberTable");
    };
    assert_eq!(table.line_number_table_length, 2);
    assert_eq!(table.line_number_table[0].start_pc, 0);
    assert_eq!(table.line_number_table[0].line_number, 10);
    assert_eq!(table.line_number_table[1].start_pc, 2);
    assert_eq!(table.line_number_table[1].line_number, 11);

    // The raw code slice is a sub-range of the input buffer, not a copy.
    let start = code.code.as_ptr() as usize - bytes.as_ptr() as usize;
    assert_eq!(&bytes[start..start + 3], code.code);
}

#[test]
fn version_descriptions() {
    let image_45 = class_image(3, 45, 1, &[], &empty_tail());
    let major_45 = jclass::decode(&image_45).unwrap();
    assert_eq!(major_45.version_description(), "JDK 1.0.2 or 1.1");

    let image_55 = class_image(0, 55, 1, &[], &empty_tail());
    let major_55 = jclass::decode(&image_55).unwrap();
    assert_eq!(major_55.version_description(), "JDK 11 (LTS)");

    let image_61 = class_image(0, 61, 1, &[], &empty_tail());
    let major_61 = jclass::decode(&image_61).unwrap();
    assert_eq!(major_61.version_description(), "JDK 17 (LTS)");

    let image_63 = class_image(0, 63, 1, &[], &empty_tail());
    let major_63 = jclass::decode(&image_63).unwrap();
    assert_eq!(major_63.version_description(), "JDK 19");

    let image_preview = class_image(65535, 61, 1, &[], &empty_tail());
    let preview = jclass::decode(&image_preview).unwrap();
    assert_eq!(preview.version_description(), "JDK 17 (LTS)");

    let image_bad_minor = class_image(1, 56, 1, &[], &empty_tail());
    let bad_minor = jclass::decode(&image_bad_minor).unwrap();
    assert_eq!(bad_minor.version_description(), "unknown version");
}

#[test]
fn class_access_flags_split() {
    let mut tail = empty_tail();
    tail[0] = 0x00;
    tail[1] = 0x21; // public | super
    let image = class_image(0, 52, 1, &[], &tail);
    let class = jclass::decode(&image).unwrap();
    assert_eq!(
        class.access_flags,
        vec![ClassAccessFlags::AccPublic, ClassAccessFlags::AccSuper]
    );
}

#[test]
fn render_tolerates_fabricated_indices() {
    // A Class constant whose name index points nowhere near the pool, used
    // as this_class.
    let mut pool = vec![7u8];
    pool.extend_from_slice(&99u16.to_be_bytes());
    let mut tail = empty_tail();
    tail[3] = 1; // this_class = #1
    let bytes = class_image(0, 52, 2, &pool, &tail);
    let class = jclass::decode(&bytes).unwrap();
    assert_eq!(class.constant_pool.label(1), "<invalid #99>");
    let report = class.to_pretty_fmt();
    assert!(report.contains("<invalid #99>"));
}

#[test]
fn labels_resolve_through_pool() {
    let entries = vec![
        Constant::Unused,
        Constant::Utf8(Utf8 {
            length: 16,
            bytes: b"java/lang/Object",
        }),
        Constant::Class(Class::new(1)),
        Constant::Utf8(Utf8 {
            length: 6,
            bytes: b"<init>",
        }),
        Constant::Utf8(Utf8 {
            length: 3,
            bytes: b"()V",
        }),
        Constant::NameAndType(NameAndType::new(3, 4)),
        Constant::Methodref(Methodref::new(2, 5)),
    ];
    let pool = ConstantPool::from_entries(entries);
    assert_eq!(pool.label(1), "java/lang/Object");
    assert_eq!(pool.label(2), "java/lang/Object");
    assert_eq!(pool.label(5), "<init>:()V");
    assert_eq!(pool.label(6), "java/lang/Object.<init>:()V");
    assert_eq!(pool.label(40), "<invalid #40>");
    // A NameAndType whose indices point at non-Utf8 entries degrades per
    // hop instead of failing.
    let broken = ConstantPool::from_entries(vec![
        Constant::Unused,
        Constant::NameAndType(NameAndType::new(1, 9)),
    ]);
    assert_eq!(broken.label(1), "<invalid #1>:<invalid #9>");
}

#[test]
fn descriptor_spellings() {
    let array = FieldDescriptor::parse("[[I").unwrap();
    assert_eq!(String::from(&array), "int[][]");
    let object = FieldDescriptor::parse("Ljava/lang/String;").unwrap();
    assert_eq!(String::from(&object), "java/lang/String");
    assert!(FieldDescriptor::parse("Q").is_none());
    assert!(FieldDescriptor::parse("II").is_none());

    let main = MethodDescriptor::parse("([Ljava/lang/String;)V").unwrap();
    assert_eq!(main.len(), 2);
    assert_eq!(String::from(&main[0]), "java/lang/String[]");
    assert!(matches!(main[1], MethodDescriptor::VoidReturn));

    let mixed = MethodDescriptor::parse("(IJ)Ljava/lang/Object;").unwrap();
    assert_eq!(mixed.len(), 3);
    assert!(matches!(
        &mixed[2],
        MethodDescriptor::ReturnDescriptor(FieldDescriptor::ObjectType(name)) if name == "java/lang/Object"
    ));
    assert!(MethodDescriptor::parse("()V trailing").is_none());
}

#[test]
fn cursor_reads_are_bounded() {
    use jclass::cursor::ByteCursor;

    let bytes = [0x12u8, 0x34, 0x56, 0x78, 0x9A];
    let mut cursor = ByteCursor::new(&bytes);
    assert_eq!(cursor.peek_u8().unwrap(), 0x12);
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.read_u16().unwrap(), 0x1234);
    assert_eq!(cursor.remaining(), 3);

    // A bounded sub-cursor cannot read past its own region even though the
    // parent has more bytes.
    let mut sub = cursor.sub_cursor(2).unwrap();
    assert_eq!(cursor.offset(), 4);
    assert_eq!(sub.read_u16().unwrap(), 0x5678);
    let error = sub.read_u8().unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::UnexpectedEof);
    assert_eq!(error.offset(), 4);

    assert_eq!(cursor.read_u8().unwrap(), 0x9A);
    let error = cursor.sub_cursor(1).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::UnexpectedEof);
}

#[test]
fn report_lists_pool_and_members() {
    let bytes = code_class();
    let class = jclass::decode(&bytes).unwrap();
    let report = class.to_pretty_fmt();
    assert!(report.contains("major version: 52 (JDK 1.8 (LTS))"));
    assert!(report.contains("#1 = Utf8"));
    assert!(report.contains("Code (name #1, 31 bytes)"));
    assert!(report.contains("void test();"));
    assert!(report.contains("descriptor: ()V"));
}
