use jclass::access_flags::module_flags::{
    ModuleAccessFlags, OpensAccessFlags, RequiresAccessFlags,
};
use jclass::access_flags::ParameterAccessFlags;
use jclass::attributes::{
    read_attribute, read_attributes, AttributeInfo, ElementValue, StackMapFrame, TargetInfo,
    TypeAnnotation, VerificationTypeInfo,
};
use jclass::constants::{Class, Constant, ConstantPool, Utf8};
use jclass::cursor::ByteCursor;
use jclass::errors::DecodeCause;

fn pool(names: &[&'static str]) -> ConstantPool<'static> {
    let mut entries = vec![Constant::Unused];
    for name in names {
        entries.push(Constant::Utf8(Utf8 {
            length: name.len() as u16,
            bytes: name.as_bytes(),
        }));
    }
    ConstantPool::from_entries(entries)
}

fn attribute_record(name_index: u16, body: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&name_index.to_be_bytes());
    bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

#[test]
fn unknown_attribute_is_preserved_not_rejected() {
    let pool = pool(&["FooBar"]);
    let record = attribute_record(1, &[0x01, 0x02, 0x03]);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::Unknown(unknown) = &attribute else {
        panic!("expected an Unknown attribute");
    };
    assert_eq!(unknown.name, "FooBar");
    assert_eq!(unknown.attribute_length, 3);
    assert_eq!(unknown.info, &[0x01, 0x02, 0x03]);
    assert_eq!(attribute.name(), "FooBar");
    assert_eq!(attribute.name_index(), 1);
    assert_eq!(attribute.length(), 3);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn deprecated_with_payload_fails_but_stream_resynchronizes() {
    let pool = pool(&["Deprecated", "LineNumberTable"]);
    let mut buffer = attribute_record(1, &[0xFF]);
    let mut lnt_body = Vec::new();
    lnt_body.extend_from_slice(&1u16.to_be_bytes());
    lnt_body.extend_from_slice(&0u16.to_be_bytes());
    lnt_body.extend_from_slice(&42u16.to_be_bytes());
    buffer.extend_from_slice(&attribute_record(2, &lnt_body));

    let mut cursor = ByteCursor::new(&buffer);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::DeprecatedNonZeroLength);
    // The failed record was consumed in full: 6 header bytes + 1 body byte.
    assert_eq!(cursor.offset(), 7);

    let next = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::LineNumberTable(table) = next else {
        panic!("expected the following LineNumberTable to decode normally");
    };
    assert_eq!(table.line_number_table[0].line_number, 42);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn zero_length_deprecated_decodes() {
    let pool = pool(&["Deprecated"]);
    let record = attribute_record(1, &[]);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    assert!(matches!(attribute, AttributeInfo::Deprecated(_)));
}

#[test]
fn short_body_is_malformed_and_consumed() {
    let pool = pool(&["Signature"]);
    // Signature needs two body bytes; give it one.
    let record = attribute_record(1, &[0x00]);
    let mut cursor = ByteCursor::new(&record);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(
        error.cause(),
        &DecodeCause::MalformedAttribute("Signature".to_string())
    );
    assert_eq!(cursor.offset(), 7);
}

#[test]
fn oversized_body_is_malformed() {
    let pool = pool(&["Signature"]);
    // Two bytes of index plus one stray byte the length claims as body.
    let record = attribute_record(1, &[0x00, 0x05, 0x00]);
    let mut cursor = ByteCursor::new(&record);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(
        error.cause(),
        &DecodeCause::MalformedAttribute("Signature".to_string())
    );
    assert_eq!(cursor.offset(), 9);
}

#[test]
fn attribute_name_must_resolve_to_utf8() {
    let pool = ConstantPool::from_entries(vec![Constant::Unused, Constant::Class(Class::new(1))]);
    let record = attribute_record(1, &[]);
    let mut cursor = ByteCursor::new(&record);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::WrongKind(1));

    let record = attribute_record(0, &[]);
    let mut cursor = ByteCursor::new(&record);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::InvalidIndex(0));
}

#[test]
fn stack_map_frame_families() {
    let pool = pool(&["StackMapTable"]);
    let mut body = Vec::new();
    body.extend_from_slice(&7u16.to_be_bytes());
    body.push(5); // same_frame
    body.extend_from_slice(&[70, 7, 0x00, 0x02]); // one stack item, Object(#2)
    body.extend_from_slice(&[247, 0x00, 0x0A, 8, 0x00, 0x04]); // extended + Uninitialized(4)
    body.extend_from_slice(&[248, 0x00, 0x01]); // chop
    body.extend_from_slice(&[251, 0x00, 0x02]); // same_frame_extended
    body.extend_from_slice(&[253, 0x00, 0x03, 1, 4]); // append two locals
    body.extend_from_slice(&[255, 0x00, 0x04, 0x00, 0x02, 0, 1, 0x00, 0x01, 7, 0x00, 0x02]);

    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::StackMapTable(table) = attribute else {
        panic!("expected a StackMapTable");
    };
    assert_eq!(table.number_of_entries, 7);
    assert!(matches!(
        table.entries[0],
        StackMapFrame::SameFrame { frame_type: 5 }
    ));
    assert!(matches!(
        table.entries[1],
        StackMapFrame::SameLocals1StackItemFrame {
            frame_type: 70,
            stack: VerificationTypeInfo::ObjectVariable(2),
        }
    ));
    // A 247 frame is exactly tag + offset_delta + one verification type.
    assert!(matches!(
        table.entries[2],
        StackMapFrame::SameLocals1StackItemFrameExtended {
            offset_delta: 10,
            stack: VerificationTypeInfo::UninitializedVariable(4),
            ..
        }
    ));
    assert!(matches!(
        table.entries[3],
        StackMapFrame::ChopFrame {
            frame_type: 248,
            offset_delta: 1,
        }
    ));
    assert!(matches!(
        table.entries[4],
        StackMapFrame::SameFrameExtended {
            offset_delta: 2,
            ..
        }
    ));
    let StackMapFrame::AppendFrame {
        offset_delta,
        locals,
        ..
    } = &table.entries[5]
    else {
        panic!("expected an append frame");
    };
    assert_eq!(*offset_delta, 3);
    assert_eq!(locals.len(), 2);
    assert!(matches!(locals[0], VerificationTypeInfo::IntegerVariable));
    assert!(matches!(locals[1], VerificationTypeInfo::LongVariable));
    let StackMapFrame::FullFrame {
        number_of_locals,
        locals,
        number_of_stack_items,
        stack,
        ..
    } = &table.entries[6]
    else {
        panic!("expected a full frame");
    };
    assert_eq!(*number_of_locals, 2);
    assert!(matches!(locals[0], VerificationTypeInfo::TopVariable));
    assert!(matches!(locals[1], VerificationTypeInfo::IntegerVariable));
    assert_eq!(*number_of_stack_items, 1);
    assert!(matches!(stack[0], VerificationTypeInfo::ObjectVariable(2)));
}

#[test]
fn reserved_frame_type_is_rejected() {
    let pool = pool(&["StackMapTable"]);
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes());
    body.push(200);
    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::InvalidStackMapFrameType(200));
}

#[test]
fn invalid_verification_tag_is_rejected() {
    let pool = pool(&["StackMapTable"]);
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&[64, 9]);
    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::InvalidVerificationTag(9));
}

#[test]
fn annotations_with_array_values() {
    let pool = pool(&["RuntimeVisibleAnnotations"]);
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes()); // one annotation
    body.extend_from_slice(&5u16.to_be_bytes()); // type_index
    body.extend_from_slice(&2u16.to_be_bytes()); // two pairs
    body.extend_from_slice(&6u16.to_be_bytes()); // pair 1 name
    body.push(b's');
    body.extend_from_slice(&7u16.to_be_bytes());
    body.extend_from_slice(&8u16.to_be_bytes()); // pair 2 name
    body.push(b'[');
    body.extend_from_slice(&2u16.to_be_bytes());
    body.push(b'I');
    body.extend_from_slice(&9u16.to_be_bytes());
    body.push(b'I');
    body.extend_from_slice(&10u16.to_be_bytes());

    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::RuntimeVisibleAnnotations(annotations) = attribute else {
        panic!("expected RuntimeVisibleAnnotations");
    };
    assert_eq!(annotations.num_annotations, 1);
    let annotation = &annotations.annotations[0];
    assert_eq!(annotation.type_index, 5);
    assert_eq!(annotation.num_element_value_pairs, 2);
    assert!(matches!(
        annotation.element_value_pairs[0].value,
        ElementValue::ConstValueIndex('s', 7)
    ));
    let ElementValue::ArrayValue { num_values, values } = &annotation.element_value_pairs[1].value
    else {
        panic!("expected an array element value");
    };
    assert_eq!(*num_values, 2);
    assert!(matches!(values[1], ElementValue::ConstValueIndex('I', 10)));
}

#[test]
fn invalid_element_value_tag_is_rejected() {
    let pool = pool(&["RuntimeVisibleAnnotations"]);
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&5u16.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&6u16.to_be_bytes());
    body.push(b'x');
    body.extend_from_slice(&0u16.to_be_bytes());
    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let error = read_attribute(&pool, &mut cursor).unwrap_err();
    assert_eq!(error.cause(), &DecodeCause::InvalidElementValueTag(b'x'));
}

#[test]
fn annotation_default_nests_annotations() {
    let pool = pool(&["AnnotationDefault"]);
    let mut body = Vec::new();
    body.push(b'@');
    body.extend_from_slice(&5u16.to_be_bytes()); // nested type_index
    body.extend_from_slice(&1u16.to_be_bytes()); // one pair
    body.extend_from_slice(&6u16.to_be_bytes());
    body.push(b'e');
    body.extend_from_slice(&7u16.to_be_bytes());
    body.extend_from_slice(&8u16.to_be_bytes());
    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::AnnotationDefault(default) = attribute else {
        panic!("expected AnnotationDefault");
    };
    let ElementValue::AnnotationValue(annotation) = &default.default_value else {
        panic!("expected a nested annotation");
    };
    assert!(matches!(
        annotation.element_value_pairs[0].value,
        ElementValue::EnumConstValue {
            type_name_index: 7,
            const_name_index: 8,
        }
    ));
}

fn read_target(target: &[u8]) -> TypeAnnotation {
    let mut bytes = target.to_vec();
    bytes.push(0); // empty target_path
    bytes.extend_from_slice(&1u16.to_be_bytes()); // type_index
    bytes.extend_from_slice(&0u16.to_be_bytes()); // no pairs
    let mut cursor = ByteCursor::new(&bytes);
    let annotation = TypeAnnotation::read(&mut cursor).unwrap();
    assert_eq!(cursor.remaining(), 0);
    annotation
}

#[test]
fn type_annotation_target_shapes() {
    for target_type in [0x00, 0x01] {
        let annotation = read_target(&[target_type, 3]);
        assert!(matches!(
            annotation.target_info,
            TargetInfo::TypeParameterTarget {
                type_parameter_index: 3,
            }
        ));
    }
    let annotation = read_target(&[0x10, 0xFF, 0xFF]);
    assert!(matches!(
        annotation.target_info,
        TargetInfo::SupertypeTarget {
            supertype_index: 65535,
        }
    ));
    for target_type in [0x11, 0x12] {
        let annotation = read_target(&[target_type, 1, 2]);
        assert!(matches!(
            annotation.target_info,
            TargetInfo::TypeParameterBoundTarget {
                type_parameter_index: 1,
                bound_index: 2,
            }
        ));
    }
    for target_type in [0x13, 0x14, 0x15] {
        let annotation = read_target(&[target_type]);
        assert!(matches!(annotation.target_info, TargetInfo::EmptyTarget));
    }
    let annotation = read_target(&[0x16, 4]);
    assert!(matches!(
        annotation.target_info,
        TargetInfo::FormalParameterTarget {
            formal_parameter_index: 4,
        }
    ));
    let annotation = read_target(&[0x17, 0x00, 0x09]);
    assert!(matches!(
        annotation.target_info,
        TargetInfo::ThrowsTarget {
            throws_type_index: 9,
        }
    ));
    for target_type in [0x40, 0x41] {
        let annotation = read_target(&[target_type, 0x00, 0x01, 0x00, 0x00, 0x00, 0x08, 0x00, 0x02]);
        let TargetInfo::LocalvarTarget {
            table_length,
            table,
        } = &annotation.target_info
        else {
            panic!("expected a localvar target");
        };
        assert_eq!(*table_length, 1);
        assert_eq!(table[0].length, 8);
        assert_eq!(table[0].index, 2);
    }
    let annotation = read_target(&[0x42, 0x00, 0x06]);
    assert!(matches!(
        annotation.target_info,
        TargetInfo::CatchTarget {
            exception_table_index: 6,
        }
    ));
    for target_type in [0x43, 0x44, 0x45, 0x46] {
        let annotation = read_target(&[target_type, 0x00, 0x0C]);
        assert!(matches!(
            annotation.target_info,
            TargetInfo::OffsetTarget { offset: 12 }
        ));
    }
    for target_type in [0x47, 0x48, 0x49, 0x4A, 0x4B] {
        let annotation = read_target(&[target_type, 0x00, 0x0C, 1]);
        assert!(matches!(
            annotation.target_info,
            TargetInfo::TypeArgumentTarget {
                offset: 12,
                type_argument_index: 1,
            }
        ));
    }
}

#[test]
fn undefined_target_type_is_rejected() {
    for target_type in [0x02, 0x18, 0x3F, 0x4C, 0xFF] {
        let bytes = [target_type, 0, 0, 0, 0, 0];
        let mut cursor = ByteCursor::new(&bytes);
        let error = TypeAnnotation::read(&mut cursor).unwrap_err();
        assert_eq!(
            error.cause(),
            &DecodeCause::InvalidTargetType(target_type),
            "target_type {target_type:#04X} has no defined target_info"
        );
        assert_eq!(error.offset(), 0);
    }
}

#[test]
fn type_annotation_with_path_inside_attribute() {
    let pool = pool(&["RuntimeInvisibleTypeAnnotations"]);
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes());
    body.push(0x13); // empty target
    body.push(2); // two path steps
    body.extend_from_slice(&[0, 0]); // deeper into array
    body.extend_from_slice(&[3, 1]); // type argument 1
    body.extend_from_slice(&4u16.to_be_bytes()); // type_index
    body.extend_from_slice(&0u16.to_be_bytes());
    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::RuntimeInvisibleTypeAnnotations(annotations) = attribute else {
        panic!("expected RuntimeInvisibleTypeAnnotations");
    };
    let annotation = &annotations.type_annotations[0];
    assert_eq!(annotation.target_path.path_length, 2);
    assert_eq!(annotation.target_path.path[1].type_path_kind, 3);
    assert_eq!(annotation.target_path.path[1].type_argument_index, 1);
    assert_eq!(annotation.type_index, 4);
}

#[test]
fn module_attribute_sections() {
    let pool = pool(&["Module"]);
    let mut body = Vec::new();
    body.extend_from_slice(&3u16.to_be_bytes()); // module_name_index
    body.extend_from_slice(&0x0020u16.to_be_bytes()); // open
    body.extend_from_slice(&0u16.to_be_bytes()); // no version
    body.extend_from_slice(&1u16.to_be_bytes()); // requires
    body.extend_from_slice(&4u16.to_be_bytes());
    body.extend_from_slice(&0x0040u16.to_be_bytes()); // static phase
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes()); // exports
    body.extend_from_slice(&5u16.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&2u16.to_be_bytes()); // to two modules
    body.extend_from_slice(&6u16.to_be_bytes());
    body.extend_from_slice(&7u16.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes()); // opens
    body.extend_from_slice(&8u16.to_be_bytes());
    body.extend_from_slice(&0x1000u16.to_be_bytes()); // synthetic
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&2u16.to_be_bytes()); // uses
    body.extend_from_slice(&9u16.to_be_bytes());
    body.extend_from_slice(&10u16.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes()); // provides
    body.extend_from_slice(&11u16.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&12u16.to_be_bytes());

    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::Module(module) = attribute else {
        panic!("expected a Module attribute");
    };
    assert_eq!(module.module_name_index, 3);
    assert_eq!(module.module_flags, vec![ModuleAccessFlags::AccOpen]);
    assert_eq!(module.requires.len(), 1);
    assert_eq!(
        module.requires[0].requires_flags,
        vec![RequiresAccessFlags::AccStaticPhase]
    );
    assert_eq!(module.exports[0].exports_to_index, vec![6, 7]);
    assert_eq!(
        module.opens[0].opens_flags,
        vec![OpensAccessFlags::AccSynthetic]
    );
    // Each uses_index entry advances the cursor by exactly two bytes; a
    // mis-advance here would leave the provides section desynchronized and
    // fail the whole record.
    assert_eq!(module.uses_count, 2);
    assert_eq!(module.uses_index, vec![9, 10]);
    assert_eq!(module.provides[0].provides_with_index, vec![12]);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn record_components_nest_attributes() {
    let pool = pool(&["Record", "Signature"]);
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes()); // one component
    body.extend_from_slice(&5u16.to_be_bytes()); // name_index
    body.extend_from_slice(&6u16.to_be_bytes()); // descriptor_index
    body.extend_from_slice(&1u16.to_be_bytes()); // one nested attribute
    body.extend_from_slice(&attribute_record(2, &[0x00, 0x09]));
    let record = attribute_record(1, &body);
    let mut cursor = ByteCursor::new(&record);
    let attribute = read_attribute(&pool, &mut cursor).unwrap();
    let AttributeInfo::Record(record) = attribute else {
        panic!("expected a Record attribute");
    };
    assert_eq!(record.components_count, 1);
    let component = &record.components[0];
    assert_eq!(component.name_index, 5);
    assert_eq!(component.descriptor_index, 6);
    let AttributeInfo::Signature(signature) = &component.attributes[0] else {
        panic!("expected a nested Signature");
    };
    assert_eq!(signature.signature_index, 9);
}

#[test]
fn parameter_annotations_keep_visibility_distinction() {
    let pool = pool(&[
        "RuntimeVisibleParameterAnnotations",
        "RuntimeInvisibleParameterAnnotations",
    ]);
    let mut body = Vec::new();
    body.push(1); // one parameter
    body.extend_from_slice(&1u16.to_be_bytes()); // one annotation
    body.extend_from_slice(&5u16.to_be_bytes()); // type_index
    body.extend_from_slice(&0u16.to_be_bytes()); // no pairs

    let mut buffer = attribute_record(1, &body);
    buffer.extend_from_slice(&attribute_record(2, &body));
    let mut cursor = ByteCursor::new(&buffer);
    let attributes = read_attributes(&pool, 2, &mut cursor).unwrap();
    let AttributeInfo::RuntimeVisibleParameterAnnotations(visible) = &attributes[0] else {
        panic!("expected the visible variant first");
    };
    assert_eq!(visible.num_parameters, 1);
    assert_eq!(visible.parameter_annotations[0].annotations[0].type_index, 5);
    assert!(matches!(
        &attributes[1],
        AttributeInfo::RuntimeInvisibleParameterAnnotations(invisible)
            if invisible.num_parameters == 1
    ));
}

#[test]
fn assorted_attribute_shapes() {
    let names = [
        "ConstantValue",
        "Signature",
        "SourceFile",
        "Synthetic",
        "Exceptions",
        "InnerClasses",
        "EnclosingMethod",
        "NestHost",
        "NestMembers",
        "PermittedSubclasses",
        "ModulePackages",
        "ModuleMainClass",
        "BootstrapMethods",
        "MethodParameters",
        "LocalVariableTable",
        "LocalVariableTypeTable",
        "SourceDebugExtension",
        "LineNumberTable",
    ];
    let pool = pool(&names);
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&attribute_record(1, &[0x00, 0x05]));
    buffer.extend_from_slice(&attribute_record(2, &[0x00, 0x02]));
    buffer.extend_from_slice(&attribute_record(3, &[0x00, 0x03]));
    buffer.extend_from_slice(&attribute_record(4, &[]));
    buffer.extend_from_slice(&attribute_record(5, &[0x00, 0x02, 0x00, 0x07, 0x00, 0x08]));
    buffer.extend_from_slice(&attribute_record(
        6,
        &[0x00, 0x01, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06, 0x00, 0x19],
    ));
    buffer.extend_from_slice(&attribute_record(7, &[0x00, 0x04, 0x00, 0x05]));
    buffer.extend_from_slice(&attribute_record(8, &[0x00, 0x06]));
    buffer.extend_from_slice(&attribute_record(9, &[0x00, 0x02, 0x00, 0x07, 0x00, 0x08]));
    buffer.extend_from_slice(&attribute_record(10, &[0x00, 0x01, 0x00, 0x09]));
    buffer.extend_from_slice(&attribute_record(11, &[0x00, 0x01, 0x00, 0x0A]));
    buffer.extend_from_slice(&attribute_record(12, &[0x00, 0x0B]));
    buffer.extend_from_slice(&attribute_record(
        13,
        &[0x00, 0x01, 0x00, 0x0C, 0x00, 0x02, 0x00, 0x0D, 0x00, 0x0E],
    ));
    buffer.extend_from_slice(&attribute_record(
        14,
        &[0x02, 0x00, 0x0F, 0x80, 0x10, 0x00, 0x00, 0x10, 0x00],
    ));
    buffer.extend_from_slice(&attribute_record(
        15,
        &[
            0x00, 0x01, 0x00, 0x00, 0x00, 0x08, 0x00, 0x10, 0x00, 0x11, 0x00, 0x01,
        ],
    ));
    buffer.extend_from_slice(&attribute_record(
        16,
        &[
            0x00, 0x01, 0x00, 0x00, 0x00, 0x08, 0x00, 0x10, 0x00, 0x12, 0x00, 0x02,
        ],
    ));
    buffer.extend_from_slice(&attribute_record(17, &[0x53, 0x4D, 0x41, 0x50]));
    buffer.extend_from_slice(&attribute_record(18, &[0x00, 0x01, 0x00, 0x00, 0x00, 0x14]));

    let mut cursor = ByteCursor::new(&buffer);
    let attributes = read_attributes(&pool, names.len() as u16, &mut cursor).unwrap();
    assert_eq!(cursor.remaining(), 0);
    let decoded_names: Vec<&str> = attributes.iter().map(|a| a.name()).collect();
    assert_eq!(decoded_names, names);

    let AttributeInfo::ConstantValue(constant_value) = &attributes[0] else {
        panic!("expected ConstantValue");
    };
    assert_eq!(constant_value.constantvalue_index, 5);
    let AttributeInfo::Exceptions(exceptions) = &attributes[4] else {
        panic!("expected Exceptions");
    };
    assert_eq!(exceptions.exception_index_table, vec![7, 8]);
    let AttributeInfo::InnerClasses(inner_classes) = &attributes[5] else {
        panic!("expected InnerClasses");
    };
    assert_eq!(inner_classes.classes[0].inner_class_access_flags, 0x19);
    let AttributeInfo::BootstrapMethods(bootstrap) = &attributes[12] else {
        panic!("expected BootstrapMethods");
    };
    assert_eq!(bootstrap.bootstrap_methods[0].bootstrap_method_ref, 12);
    assert_eq!(bootstrap.bootstrap_methods[0].bootstrap_arguments, vec![13, 14]);
    let AttributeInfo::MethodParameters(parameters) = &attributes[13] else {
        panic!("expected MethodParameters");
    };
    assert_eq!(
        parameters.parameters[0].access_flags,
        vec![ParameterAccessFlags::AccFinal, ParameterAccessFlags::AccMandated]
    );
    assert_eq!(
        parameters.parameters[1].access_flags,
        vec![ParameterAccessFlags::AccSynthetic]
    );
    let AttributeInfo::LocalVariableTable(locals) = &attributes[14] else {
        panic!("expected LocalVariableTable");
    };
    assert_eq!(locals.local_variable_table[0].descriptor_index, 17);
    let AttributeInfo::LocalVariableTypeTable(local_types) = &attributes[15] else {
        panic!("expected LocalVariableTypeTable");
    };
    assert_eq!(local_types.local_variable_type_table[0].signature_index, 18);
    let AttributeInfo::SourceDebugExtension(debug) = &attributes[16] else {
        panic!("expected SourceDebugExtension");
    };
    assert_eq!(debug.debug_extension, b"SMAP");
}
