use crate::access_flags::{module_flags, ParameterAccessFlags};
use crate::constants::ConstantPool;
use crate::cursor::ByteCursor;
use crate::errors::{DecodeCause, DecodeError};

/*
 * Every attribute starts with the same six bytes:\
 * **attribute_name_index**: index of the Utf8 pool entry naming the
 * attribute; the name string drives dispatch.\
 * **attribute_length**: length of the body, excluding those six bytes.
 * The body is sliced off the containing stream before it is interpreted, so
 * the containing stream always advances by exactly 6 + attribute_length.
 */

/// [ConstantValue](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=120)
#[derive(Clone, Debug)]
pub struct ConstantValue {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    /// Index of the pool entry giving the field's initial value; its kind
    /// must suit the field's type, which the verifier checks, not us.
    pub constantvalue_index: u16,
}

impl ConstantValue {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<ConstantValue, DecodeError> {
        Ok(ConstantValue {
            attribute_name_index,
            attribute_length,
            constantvalue_index: cursor.read_u16()?,
        })
    }
}

/// One exception handler of a `Code` attribute. The handler is active while
/// the program counter is within [start_pc, end_pc); `catch_type` 0 means
/// all throwables (that is how `finally` is compiled).
#[derive(Clone, Debug)]
pub struct ExceptionTable {
    pub start_pc: u16,
    pub end_pc: u16,
    pub handler_pc: u16,
    pub catch_type: u16,
}

impl ExceptionTable {
    pub fn new(start_pc: u16, end_pc: u16, handler_pc: u16, catch_type: u16) -> ExceptionTable {
        ExceptionTable {
            start_pc,
            end_pc,
            handler_pc,
            catch_type,
        }
    }
}

/// [Code](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=118)
///
/// The instruction stream is kept as the raw `code` byte slice of the input
/// buffer; this crate does not decode instructions. The trailing attribute
/// table nests arbitrary attributes (typically `LineNumberTable`,
/// `LocalVariableTable`, `StackMapTable`).
#[derive(Clone, Debug)]
pub struct Code<'a> {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    /// Maximum operand-stack depth at any point in the method.
    pub max_stack: u16,
    /// Size of the local-variable array, parameters included.
    pub max_locals: u16,
    pub code_length: u32,
    pub code: &'a [u8],
    pub exception_table_length: u16,
    pub exception_tables: Vec<ExceptionTable>,
    pub attributes_count: u16,
    pub attributes: Vec<AttributeInfo<'a>>,
}

impl<'a> Code<'a> {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        constant_pool: &ConstantPool<'a>,
        cursor: &mut ByteCursor<'a>,
    ) -> Result<Code<'a>, DecodeError> {
        let max_stack = cursor.read_u16()?;
        let max_locals = cursor.read_u16()?;
        let code_length = cursor.read_u32()?;
        let code = cursor.read_bytes(code_length as usize)?;
        let exception_table_length = cursor.read_u16()?;
        let mut exception_tables = Vec::with_capacity(exception_table_length as usize);
        for _ in 0..exception_table_length {
            exception_tables.push(ExceptionTable::new(
                cursor.read_u16()?,
                cursor.read_u16()?,
                cursor.read_u16()?,
                cursor.read_u16()?,
            ));
        }
        let attributes_count = cursor.read_u16()?;
        let attributes = read_attributes(constant_pool, attributes_count, cursor)?;
        Ok(Code {
            attribute_name_index,
            attribute_length,
            max_stack,
            max_locals,
            code_length,
            code,
            exception_table_length,
            exception_tables,
            attributes_count,
            attributes,
        })
    }
}

/// [VerificationTypeInfo](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=129)
///
/// One-byte tag; only `Object` (7) and `Uninitialized` (8) carry a payload.
#[derive(Clone, Debug)]
pub enum VerificationTypeInfo {
    TopVariable,
    IntegerVariable,
    FloatVariable,
    LongVariable,
    DoubleVariable,
    NullVariable,
    UninitializedThisVariable,
    /// Constant-pool index of the `Class` entry naming the type.
    ObjectVariable(u16),
    /// Code-array offset of the `new` instruction that created the value.
    UninitializedVariable(u16),
}

impl VerificationTypeInfo {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<VerificationTypeInfo, DecodeError> {
        let tag_offset = cursor.offset();
        let tag = cursor.read_u8()?;
        Ok(match tag {
            0 => VerificationTypeInfo::TopVariable,
            1 => VerificationTypeInfo::IntegerVariable,
            2 => VerificationTypeInfo::FloatVariable,
            3 => VerificationTypeInfo::DoubleVariable,
            4 => VerificationTypeInfo::LongVariable,
            5 => VerificationTypeInfo::NullVariable,
            6 => VerificationTypeInfo::UninitializedThisVariable,
            7 => VerificationTypeInfo::ObjectVariable(cursor.read_u16()?),
            8 => VerificationTypeInfo::UninitializedVariable(cursor.read_u16()?),
            _ => {
                return Err(DecodeError::new(
                    DecodeCause::InvalidVerificationTag(tag),
                    tag_offset,
                ))
            }
        })
    }
}

/// [StackMapFrame](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=131)
///
/// Seven frame families discriminated by ranges of the single `frame_type`
/// byte. Tags 128..=246 are reserved and rejected.
#[derive(Clone, Debug)]
pub enum StackMapFrame {
    /// Tags 0..=63. Same locals as the previous frame, empty operand
    /// stack; the offset delta is the tag itself.
    SameFrame { frame_type: u8 },
    /// Tags 64..=127. Same locals, one stack entry; the offset delta is
    /// `frame_type - 64`.
    SameLocals1StackItemFrame {
        frame_type: u8,
        stack: VerificationTypeInfo,
    },
    /// Tag 247. Like the previous family but with an explicit offset delta.
    SameLocals1StackItemFrameExtended {
        frame_type: u8,
        offset_delta: u16,
        stack: VerificationTypeInfo,
    },
    /// Tags 248..=250. The last `251 - frame_type` locals are absent, the
    /// operand stack is empty.
    ChopFrame { frame_type: u8, offset_delta: u16 },
    /// Tag 251. Same locals, empty stack, explicit offset delta.
    SameFrameExtended { frame_type: u8, offset_delta: u16 },
    /// Tags 252..=254. `frame_type - 251` additional locals, empty stack.
    AppendFrame {
        frame_type: u8,
        offset_delta: u16,
        locals: Vec<VerificationTypeInfo>,
    },
    /// Tag 255. Locals and stack given in full.
    FullFrame {
        frame_type: u8,
        offset_delta: u16,
        number_of_locals: u16,
        locals: Vec<VerificationTypeInfo>,
        number_of_stack_items: u16,
        stack: Vec<VerificationTypeInfo>,
    },
}

impl StackMapFrame {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<StackMapFrame, DecodeError> {
        let tag_offset = cursor.offset();
        let frame_type = cursor.read_u8()?;
        Ok(match frame_type {
            0..=63 => StackMapFrame::SameFrame { frame_type },
            64..=127 => StackMapFrame::SameLocals1StackItemFrame {
                frame_type,
                stack: VerificationTypeInfo::read(cursor)?,
            },
            247 => StackMapFrame::SameLocals1StackItemFrameExtended {
                frame_type,
                offset_delta: cursor.read_u16()?,
                stack: VerificationTypeInfo::read(cursor)?,
            },
            248..=250 => StackMapFrame::ChopFrame {
                frame_type,
                offset_delta: cursor.read_u16()?,
            },
            251 => StackMapFrame::SameFrameExtended {
                frame_type,
                offset_delta: cursor.read_u16()?,
            },
            252..=254 => {
                let offset_delta = cursor.read_u16()?;
                let mut locals = Vec::with_capacity((frame_type - 251) as usize);
                for _ in 0..(frame_type - 251) {
                    locals.push(VerificationTypeInfo::read(cursor)?);
                }
                StackMapFrame::AppendFrame {
                    frame_type,
                    offset_delta,
                    locals,
                }
            }
            255 => {
                let offset_delta = cursor.read_u16()?;
                let number_of_locals = cursor.read_u16()?;
                let mut locals = Vec::with_capacity(number_of_locals as usize);
                for _ in 0..number_of_locals {
                    locals.push(VerificationTypeInfo::read(cursor)?);
                }
                let number_of_stack_items = cursor.read_u16()?;
                let mut stack = Vec::with_capacity(number_of_stack_items as usize);
                for _ in 0..number_of_stack_items {
                    stack.push(VerificationTypeInfo::read(cursor)?);
                }
                StackMapFrame::FullFrame {
                    frame_type,
                    offset_delta,
                    number_of_locals,
                    locals,
                    number_of_stack_items,
                    stack,
                }
            }
            // 128..=246 are reserved for future use.
            _ => {
                return Err(DecodeError::new(
                    DecodeCause::InvalidStackMapFrameType(frame_type),
                    tag_offset,
                ))
            }
        })
    }
}

/// [StackMapTable](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=126)
#[derive(Clone, Debug)]
pub struct StackMapTable {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub number_of_entries: u16,
    /// The frame order is significant: each frame's offset is delta-encoded
    /// against the previous one.
    pub entries: Vec<StackMapFrame>,
}

impl StackMapTable {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<StackMapTable, DecodeError> {
        let number_of_entries = cursor.read_u16()?;
        let mut entries = Vec::with_capacity(number_of_entries as usize);
        for _ in 0..number_of_entries {
            entries.push(StackMapFrame::read(cursor)?);
        }
        Ok(StackMapTable {
            attribute_name_index,
            attribute_length,
            number_of_entries,
            entries,
        })
    }
}

/// [Exceptions](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=135)
#[derive(Clone, Debug)]
pub struct Exceptions {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub number_of_exceptions: u16,
    /// `Class` pool indices of the checked exceptions the method declares.
    pub exception_index_table: Vec<u16>,
}

impl Exceptions {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<Exceptions, DecodeError> {
        let number_of_exceptions = cursor.read_u16()?;
        let mut exception_index_table = Vec::with_capacity(number_of_exceptions as usize);
        for _ in 0..number_of_exceptions {
            exception_index_table.push(cursor.read_u16()?);
        }
        Ok(Exceptions {
            attribute_name_index,
            attribute_length,
            number_of_exceptions,
            exception_index_table,
        })
    }
}

/// One row of [`InnerClasses`]. The zero value of `outer_class_info_index`
/// marks top-level, local and anonymous classes; the zero value of
/// `inner_name_index` marks anonymous ones.
#[derive(Clone, Debug)]
pub struct InnerClassInfo {
    pub inner_class_info_index: u16,
    pub outer_class_info_index: u16,
    pub inner_name_index: u16,
    pub inner_class_access_flags: u16,
}

impl InnerClassInfo {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<InnerClassInfo, DecodeError> {
        Ok(InnerClassInfo {
            inner_class_info_index: cursor.read_u16()?,
            outer_class_info_index: cursor.read_u16()?,
            inner_name_index: cursor.read_u16()?,
            inner_class_access_flags: cursor.read_u16()?,
        })
    }
}

/// [InnerClasses](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=136)
#[derive(Clone, Debug)]
pub struct InnerClasses {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub number_of_classes: u16,
    pub classes: Vec<InnerClassInfo>,
}

impl InnerClasses {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<InnerClasses, DecodeError> {
        let number_of_classes = cursor.read_u16()?;
        let mut classes = Vec::with_capacity(number_of_classes as usize);
        for _ in 0..number_of_classes {
            classes.push(InnerClassInfo::read(cursor)?);
        }
        Ok(InnerClasses {
            attribute_name_index,
            attribute_length,
            number_of_classes,
            classes,
        })
    }
}

/// [EnclosingMethod](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=139)
///
/// Present on local and anonymous classes only. `method_index` is zero when
/// the class is enclosed by an initializer rather than a method.
#[derive(Clone, Debug)]
pub struct EnclosingMethod {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub class_index: u16,
    pub method_index: u16,
}

impl EnclosingMethod {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<EnclosingMethod, DecodeError> {
        Ok(EnclosingMethod {
            attribute_name_index,
            attribute_length,
            class_index: cursor.read_u16()?,
            method_index: cursor.read_u16()?,
        })
    }
}

/// [Synthetic](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=140)
#[derive(Clone, Debug)]
pub struct Synthetic {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
}

impl Synthetic {
    pub fn new(attribute_name_index: u16, attribute_length: u32) -> Synthetic {
        Synthetic {
            attribute_name_index,
            attribute_length,
        }
    }
}

/// [Signature](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=141)
#[derive(Clone, Debug)]
pub struct Signature {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    /// Index of the `Utf8` entry holding the generic signature of the
    /// class, method or field this attribute hangs off.
    pub signature_index: u16,
}

impl Signature {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<Signature, DecodeError> {
        Ok(Signature {
            attribute_name_index,
            attribute_length,
            signature_index: cursor.read_u16()?,
        })
    }
}

/// [SourceFile](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=147)
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    /// File name only, never a directory or path.
    pub sourcefile_index: u16,
}

impl SourceFile {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<SourceFile, DecodeError> {
        Ok(SourceFile {
            attribute_name_index,
            attribute_length,
            sourcefile_index: cursor.read_u16()?,
        })
    }
}

/// [SourceDebugExtension](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=148)
///
/// An opaque modified-UTF-8 run with no length prefix of its own: the body
/// is the whole declared attribute length.
#[derive(Clone, Debug)]
pub struct SourceDebugExtension<'a> {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub debug_extension: &'a [u8],
}

impl<'a> SourceDebugExtension<'a> {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'a>,
    ) -> Result<SourceDebugExtension<'a>, DecodeError> {
        Ok(SourceDebugExtension {
            attribute_name_index,
            attribute_length,
            debug_extension: cursor.read_bytes(attribute_length as usize)?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct LineNumber {
    /// Index into the code array where a new source line begins.
    pub start_pc: u16,
    pub line_number: u16,
}

/// [LineNumberTable](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=149)
#[derive(Clone, Debug)]
pub struct LineNumberTable {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub line_number_table_length: u16,
    pub line_number_table: Vec<LineNumber>,
}

impl LineNumberTable {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<LineNumberTable, DecodeError> {
        let line_number_table_length = cursor.read_u16()?;
        let mut line_number_table = Vec::with_capacity(line_number_table_length as usize);
        for _ in 0..line_number_table_length {
            line_number_table.push(LineNumber {
                start_pc: cursor.read_u16()?,
                line_number: cursor.read_u16()?,
            });
        }
        Ok(LineNumberTable {
            attribute_name_index,
            attribute_length,
            line_number_table_length,
            line_number_table,
        })
    }
}

/// One live range of a local variable. The variable holds a value over
/// [start_pc, start_pc + length) and lives in frame slot `index` (and
/// `index + 1` for `long`/`double`).
#[derive(Clone, Debug)]
pub struct LocalVariable {
    pub start_pc: u16,
    pub length: u16,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub index: u16,
}

/// [LocalVariableTable](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=150)
#[derive(Clone, Debug)]
pub struct LocalVariableTable {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub local_variable_table_length: u16,
    pub local_variable_table: Vec<LocalVariable>,
}

impl LocalVariableTable {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<LocalVariableTable, DecodeError> {
        let local_variable_table_length = cursor.read_u16()?;
        let mut local_variable_table = Vec::with_capacity(local_variable_table_length as usize);
        for _ in 0..local_variable_table_length {
            local_variable_table.push(LocalVariable {
                start_pc: cursor.read_u16()?,
                length: cursor.read_u16()?,
                name_index: cursor.read_u16()?,
                descriptor_index: cursor.read_u16()?,
                index: cursor.read_u16()?,
            });
        }
        Ok(LocalVariableTable {
            attribute_name_index,
            attribute_length,
            local_variable_table_length,
            local_variable_table,
        })
    }
}

/// Same layout as [`LocalVariable`] with a generic signature in place of
/// the descriptor.
#[derive(Clone, Debug)]
pub struct LocalVariableType {
    pub start_pc: u16,
    pub length: u16,
    pub name_index: u16,
    pub signature_index: u16,
    pub index: u16,
}

/// [LocalVariableTypeTable](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=152)
#[derive(Clone, Debug)]
pub struct LocalVariableTypeTable {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub local_variable_type_table_length: u16,
    pub local_variable_type_table: Vec<LocalVariableType>,
}

impl LocalVariableTypeTable {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<LocalVariableTypeTable, DecodeError> {
        let local_variable_type_table_length = cursor.read_u16()?;
        let mut local_variable_type_table =
            Vec::with_capacity(local_variable_type_table_length as usize);
        for _ in 0..local_variable_type_table_length {
            local_variable_type_table.push(LocalVariableType {
                start_pc: cursor.read_u16()?,
                length: cursor.read_u16()?,
                name_index: cursor.read_u16()?,
                signature_index: cursor.read_u16()?,
                index: cursor.read_u16()?,
            });
        }
        Ok(LocalVariableTypeTable {
            attribute_name_index,
            attribute_length,
            local_variable_type_table_length,
            local_variable_type_table,
        })
    }
}

/// [Deprecated](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=154)
///
/// Carries no body; a declared length other than zero fails the decode
/// with [`DecodeCause::DeprecatedNonZeroLength`].
#[derive(Clone, Debug)]
pub struct Deprecated {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
}

impl Deprecated {
    pub fn new(attribute_name_index: u16, attribute_length: u32) -> Deprecated {
        Deprecated {
            attribute_name_index,
            attribute_length,
        }
    }
}

/// [element_value](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=158)
///
/// The tagged value half of an element-value pair. Primitive tags
/// (`B C D F I J S Z s`) carry one pool index; `e`, `c`, `@` and `[` carry
/// the richer shapes. Arrays and nested annotations make this grammar
/// mutually recursive with [`Annotation`].
#[derive(Clone, Debug)]
pub enum ElementValue {
    /// Primitive or `String` constant: the original tag character plus the
    /// pool index of the value.
    ConstValueIndex(char, u16),
    /// Enum constant: field descriptor of the enum type, then the simple
    /// name of the constant.
    EnumConstValue {
        type_name_index: u16,
        const_name_index: u16,
    },
    /// Class literal: return descriptor of the named type.
    ClassInfoIndex(u16),
    /// Nested annotation.
    AnnotationValue(Annotation),
    ArrayValue {
        num_values: u16,
        values: Vec<ElementValue>,
    },
}

impl ElementValue {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<ElementValue, DecodeError> {
        let tag_offset = cursor.offset();
        let tag = cursor.read_u8()?;
        Ok(match tag as char {
            'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z' | 's' => {
                ElementValue::ConstValueIndex(tag as char, cursor.read_u16()?)
            }
            'e' => ElementValue::EnumConstValue {
                type_name_index: cursor.read_u16()?,
                const_name_index: cursor.read_u16()?,
            },
            'c' => ElementValue::ClassInfoIndex(cursor.read_u16()?),
            '@' => ElementValue::AnnotationValue(Annotation::read(cursor)?),
            '[' => {
                let num_values = cursor.read_u16()?;
                let mut values = Vec::with_capacity(num_values as usize);
                for _ in 0..num_values {
                    values.push(ElementValue::read(cursor)?);
                }
                ElementValue::ArrayValue { num_values, values }
            }
            _ => {
                return Err(DecodeError::new(
                    DecodeCause::InvalidElementValueTag(tag),
                    tag_offset,
                ))
            }
        })
    }
}

#[derive(Clone, Debug)]
pub struct ElementValuePair {
    /// `Utf8` index of the annotation interface element being set.
    pub element_name_index: u16,
    pub value: ElementValue,
}

impl ElementValuePair {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<ElementValuePair, DecodeError> {
        Ok(ElementValuePair {
            element_name_index: cursor.read_u16()?,
            value: ElementValue::read(cursor)?,
        })
    }
}

/// [annotation](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=156)
#[derive(Clone, Debug)]
pub struct Annotation {
    /// `Utf8` index of the field descriptor naming the annotation type.
    pub type_index: u16,
    pub num_element_value_pairs: u16,
    pub element_value_pairs: Vec<ElementValuePair>,
}

impl Annotation {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Annotation, DecodeError> {
        let type_index = cursor.read_u16()?;
        let num_element_value_pairs = cursor.read_u16()?;
        let mut element_value_pairs = Vec::with_capacity(num_element_value_pairs as usize);
        for _ in 0..num_element_value_pairs {
            element_value_pairs.push(ElementValuePair::read(cursor)?);
        }
        Ok(Annotation {
            type_index,
            num_element_value_pairs,
            element_value_pairs,
        })
    }
}

/// [RuntimeVisibleAnnotations](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=155)
#[derive(Clone, Debug)]
pub struct RuntimeVisibleAnnotations {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub num_annotations: u16,
    pub annotations: Vec<Annotation>,
}

impl RuntimeVisibleAnnotations {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<RuntimeVisibleAnnotations, DecodeError> {
        let num_annotations = cursor.read_u16()?;
        let mut annotations = Vec::with_capacity(num_annotations as usize);
        for _ in 0..num_annotations {
            annotations.push(Annotation::read(cursor)?);
        }
        Ok(RuntimeVisibleAnnotations {
            attribute_name_index,
            attribute_length,
            num_annotations,
            annotations,
        })
    }
}

/// Same layout as [`RuntimeVisibleAnnotations`]; the distinction is only
/// whether the reflection libraries expose the annotations at run time.
#[derive(Clone, Debug)]
pub struct RuntimeInvisibleAnnotations {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub num_annotations: u16,
    pub annotations: Vec<Annotation>,
}

impl RuntimeInvisibleAnnotations {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<RuntimeInvisibleAnnotations, DecodeError> {
        let num_annotations = cursor.read_u16()?;
        let mut annotations = Vec::with_capacity(num_annotations as usize);
        for _ in 0..num_annotations {
            annotations.push(Annotation::read(cursor)?);
        }
        Ok(RuntimeInvisibleAnnotations {
            attribute_name_index,
            attribute_length,
            num_annotations,
            annotations,
        })
    }
}

/// The annotations of one formal parameter.
#[derive(Clone, Debug)]
pub struct ParameterAnnotations {
    pub num_annotations: u16,
    pub annotations: Vec<Annotation>,
}

impl ParameterAnnotations {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<ParameterAnnotations, DecodeError> {
        let num_annotations = cursor.read_u16()?;
        let mut annotations = Vec::with_capacity(num_annotations as usize);
        for _ in 0..num_annotations {
            annotations.push(Annotation::read(cursor)?);
        }
        Ok(ParameterAnnotations {
            num_annotations,
            annotations,
        })
    }
}

/// [RuntimeVisibleParameterAnnotations](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=165)
///
/// The parameter count here is a `u8` and need not match the number of
/// parameter descriptors in the method descriptor.
#[derive(Clone, Debug)]
pub struct RuntimeVisibleParameterAnnotations {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub num_parameters: u8,
    pub parameter_annotations: Vec<ParameterAnnotations>,
}

impl RuntimeVisibleParameterAnnotations {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<RuntimeVisibleParameterAnnotations, DecodeError> {
        let num_parameters = cursor.read_u8()?;
        let mut parameter_annotations = Vec::with_capacity(num_parameters as usize);
        for _ in 0..num_parameters {
            parameter_annotations.push(ParameterAnnotations::read(cursor)?);
        }
        Ok(RuntimeVisibleParameterAnnotations {
            attribute_name_index,
            attribute_length,
            num_parameters,
            parameter_annotations,
        })
    }
}

/// Kept separate from the visible variant: collapsing the two would lose
/// the run-time visibility distinction the two attribute names encode.
#[derive(Clone, Debug)]
pub struct RuntimeInvisibleParameterAnnotations {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub num_parameters: u8,
    pub parameter_annotations: Vec<ParameterAnnotations>,
}

impl RuntimeInvisibleParameterAnnotations {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<RuntimeInvisibleParameterAnnotations, DecodeError> {
        let num_parameters = cursor.read_u8()?;
        let mut parameter_annotations = Vec::with_capacity(num_parameters as usize);
        for _ in 0..num_parameters {
            parameter_annotations.push(ParameterAnnotations::read(cursor)?);
        }
        Ok(RuntimeInvisibleParameterAnnotations {
            attribute_name_index,
            attribute_length,
            num_parameters,
            parameter_annotations,
        })
    }
}

/// One live range of an annotated local variable; same information as a
/// `LocalVariableTable` row.
#[derive(Clone, Debug)]
pub struct LocalVarTargetTable {
    pub start_pc: u16,
    pub length: u16,
    pub index: u16,
}

impl LocalVarTargetTable {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<LocalVarTargetTable, DecodeError> {
        Ok(LocalVarTargetTable {
            start_pc: cursor.read_u16()?,
            length: cursor.read_u16()?,
            index: cursor.read_u16()?,
        })
    }
}

/// [target_info](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=168)
///
/// Which type use-site a type annotation applies to. The shape is selected
/// by the `target_type` byte of the enclosing [`TypeAnnotation`]:
///
/// | target_type | variant |
/// |---|---|
/// | 0x00, 0x01 | `TypeParameterTarget` |
/// | 0x10 | `SupertypeTarget` |
/// | 0x11, 0x12 | `TypeParameterBoundTarget` |
/// | 0x13, 0x14, 0x15 | `EmptyTarget` |
/// | 0x16 | `FormalParameterTarget` |
/// | 0x17 | `ThrowsTarget` |
/// | 0x40, 0x41 | `LocalvarTarget` |
/// | 0x42 | `CatchTarget` |
/// | 0x43..=0x46 | `OffsetTarget` |
/// | 0x47..=0x4B | `TypeArgumentTarget` |
#[derive(Clone, Debug)]
pub enum TargetInfo {
    TypeParameterTarget {
        type_parameter_index: u8,
    },
    /// 65535 means the superclass of an `extends` clause; anything else
    /// indexes the `interfaces` array of the enclosing class file.
    SupertypeTarget {
        supertype_index: u16,
    },
    TypeParameterBoundTarget {
        type_parameter_index: u8,
        bound_index: u8,
    },
    EmptyTarget,
    FormalParameterTarget {
        formal_parameter_index: u8,
    },
    /// Indexes the `exception_index_table` of the method's `Exceptions`
    /// attribute.
    ThrowsTarget {
        throws_type_index: u16,
    },
    LocalvarTarget {
        table_length: u16,
        table: Vec<LocalVarTargetTable>,
    },
    /// Indexes the `exception_table` of the enclosing `Code` attribute.
    CatchTarget {
        exception_table_index: u16,
    },
    /// Code-array offset of the annotated `instanceof`/`new`/method
    /// reference instruction.
    OffsetTarget {
        offset: u16,
    },
    TypeArgumentTarget {
        offset: u16,
        type_argument_index: u8,
    },
}

impl TargetInfo {
    pub fn read(target_type: u8, cursor: &mut ByteCursor<'_>) -> Result<TargetInfo, DecodeError> {
        match target_type {
            0x00 | 0x01 => Ok(TargetInfo::TypeParameterTarget {
                type_parameter_index: cursor.read_u8()?,
            }),
            0x10 => Ok(TargetInfo::SupertypeTarget {
                supertype_index: cursor.read_u16()?,
            }),
            0x11 | 0x12 => Ok(TargetInfo::TypeParameterBoundTarget {
                type_parameter_index: cursor.read_u8()?,
                bound_index: cursor.read_u8()?,
            }),
            0x13..=0x15 => Ok(TargetInfo::EmptyTarget),
            0x16 => Ok(TargetInfo::FormalParameterTarget {
                formal_parameter_index: cursor.read_u8()?,
            }),
            0x17 => Ok(TargetInfo::ThrowsTarget {
                throws_type_index: cursor.read_u16()?,
            }),
            0x40 | 0x41 => {
                let table_length = cursor.read_u16()?;
                let mut table = Vec::with_capacity(table_length as usize);
                for _ in 0..table_length {
                    table.push(LocalVarTargetTable::read(cursor)?);
                }
                Ok(TargetInfo::LocalvarTarget {
                    table_length,
                    table,
                })
            }
            0x42 => Ok(TargetInfo::CatchTarget {
                exception_table_index: cursor.read_u16()?,
            }),
            0x43..=0x46 => Ok(TargetInfo::OffsetTarget {
                offset: cursor.read_u16()?,
            }),
            0x47..=0x4B => Ok(TargetInfo::TypeArgumentTarget {
                offset: cursor.read_u16()?,
                type_argument_index: cursor.read_u8()?,
            }),
            _ => Err(DecodeError::new(
                DecodeCause::InvalidTargetType(target_type),
                cursor.offset(),
            )),
        }
    }
}

/// One step towards the annotated part of a compound type: into an array
/// level, a nested type, a wildcard bound, or type argument
/// `type_argument_index` of a parameterized type.
#[derive(Clone, Debug)]
pub struct PathDescriptor {
    pub type_path_kind: u8,
    pub type_argument_index: u8,
}

impl PathDescriptor {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<PathDescriptor, DecodeError> {
        Ok(PathDescriptor {
            type_path_kind: cursor.read_u8()?,
            type_argument_index: cursor.read_u8()?,
        })
    }
}

/// [type_path](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=172)
///
/// An empty path means the annotation sits on the type itself (or on the
/// outermost admissible part of a nested type).
#[derive(Clone, Debug)]
pub struct TypePath {
    pub path_length: u8,
    pub path: Vec<PathDescriptor>,
}

impl TypePath {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<TypePath, DecodeError> {
        let path_length = cursor.read_u8()?;
        let mut path = Vec::with_capacity(path_length as usize);
        for _ in 0..path_length {
            path.push(PathDescriptor::read(cursor)?);
        }
        Ok(TypePath { path_length, path })
    }
}

/// One annotation on a type *use* rather than on a declaration: the
/// `target_type`/`target_info` pair locates the use-site, the `target_path`
/// walks into the compound type, and the tail is an ordinary annotation.
#[derive(Clone, Debug)]
pub struct TypeAnnotation {
    pub target_type: u8,
    pub target_info: TargetInfo,
    pub target_path: TypePath,
    pub type_index: u16,
    pub num_element_value_pairs: u16,
    pub element_value_pairs: Vec<ElementValuePair>,
}

impl TypeAnnotation {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<TypeAnnotation, DecodeError> {
        let target_type_offset = cursor.offset();
        let target_type = cursor.read_u8()?;
        let target_info = match TargetInfo::read(target_type, cursor) {
            Ok(target_info) => target_info,
            Err(error) => {
                // Re-anchor the error on the tag byte itself.
                if let DecodeCause::InvalidTargetType(tag) = error.cause() {
                    return Err(DecodeError::new(
                        DecodeCause::InvalidTargetType(*tag),
                        target_type_offset,
                    ));
                }
                return Err(error);
            }
        };
        let target_path = TypePath::read(cursor)?;
        let type_index = cursor.read_u16()?;
        let num_element_value_pairs = cursor.read_u16()?;
        let mut element_value_pairs = Vec::with_capacity(num_element_value_pairs as usize);
        for _ in 0..num_element_value_pairs {
            element_value_pairs.push(ElementValuePair::read(cursor)?);
        }
        Ok(TypeAnnotation {
            target_type,
            target_info,
            target_path,
            type_index,
            num_element_value_pairs,
            element_value_pairs,
        })
    }
}

/// [RuntimeVisibleTypeAnnotations](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=166)
#[derive(Clone, Debug)]
pub struct RuntimeVisibleTypeAnnotations {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub num_annotations: u16,
    pub type_annotations: Vec<TypeAnnotation>,
}

impl RuntimeVisibleTypeAnnotations {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<RuntimeVisibleTypeAnnotations, DecodeError> {
        let num_annotations = cursor.read_u16()?;
        let mut type_annotations = Vec::with_capacity(num_annotations as usize);
        for _ in 0..num_annotations {
            type_annotations.push(TypeAnnotation::read(cursor)?);
        }
        Ok(RuntimeVisibleTypeAnnotations {
            attribute_name_index,
            attribute_length,
            num_annotations,
            type_annotations,
        })
    }
}

#[derive(Clone, Debug)]
pub struct RuntimeInvisibleTypeAnnotations {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub num_annotations: u16,
    pub type_annotations: Vec<TypeAnnotation>,
}

impl RuntimeInvisibleTypeAnnotations {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<RuntimeInvisibleTypeAnnotations, DecodeError> {
        let num_annotations = cursor.read_u16()?;
        let mut type_annotations = Vec::with_capacity(num_annotations as usize);
        for _ in 0..num_annotations {
            type_annotations.push(TypeAnnotation::read(cursor)?);
        }
        Ok(RuntimeInvisibleTypeAnnotations {
            attribute_name_index,
            attribute_length,
            num_annotations,
            type_annotations,
        })
    }
}

/// [AnnotationDefault](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=176)
#[derive(Clone, Debug)]
pub struct AnnotationDefault {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    /// Default value of the annotation interface element the enclosing
    /// method represents.
    pub default_value: ElementValue,
}

impl AnnotationDefault {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<AnnotationDefault, DecodeError> {
        Ok(AnnotationDefault {
            attribute_name_index,
            attribute_length,
            default_value: ElementValue::read(cursor)?,
        })
    }
}

/// One bootstrap method specifier: a `MethodHandle` pool index plus static
/// argument pool indices.
#[derive(Clone, Debug)]
pub struct BootstrapMethod {
    pub bootstrap_method_ref: u16,
    pub num_bootstrap_arguments: u16,
    pub bootstrap_arguments: Vec<u16>,
}

impl BootstrapMethod {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<BootstrapMethod, DecodeError> {
        let bootstrap_method_ref = cursor.read_u16()?;
        let num_bootstrap_arguments = cursor.read_u16()?;
        let mut bootstrap_arguments = Vec::with_capacity(num_bootstrap_arguments as usize);
        for _ in 0..num_bootstrap_arguments {
            bootstrap_arguments.push(cursor.read_u16()?);
        }
        Ok(BootstrapMethod {
            bootstrap_method_ref,
            num_bootstrap_arguments,
            bootstrap_arguments,
        })
    }
}

/// [BootstrapMethods](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=177)
///
/// Referenced by index from `Dynamic` and `InvokeDynamic` pool entries.
#[derive(Clone, Debug)]
pub struct BootstrapMethods {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub num_bootstrap_methods: u16,
    pub bootstrap_methods: Vec<BootstrapMethod>,
}

impl BootstrapMethods {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<BootstrapMethods, DecodeError> {
        let num_bootstrap_methods = cursor.read_u16()?;
        let mut bootstrap_methods = Vec::with_capacity(num_bootstrap_methods as usize);
        for _ in 0..num_bootstrap_methods {
            bootstrap_methods.push(BootstrapMethod::read(cursor)?);
        }
        Ok(BootstrapMethods {
            attribute_name_index,
            attribute_length,
            num_bootstrap_methods,
            bootstrap_methods,
        })
    }
}

/// One formal parameter; `name_index` 0 means the parameter has no name.
#[derive(Clone, Debug)]
pub struct Parameter {
    pub name_index: u16,
    pub access_flags: Vec<ParameterAccessFlags>,
}

impl Parameter {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Parameter, DecodeError> {
        Ok(Parameter {
            name_index: cursor.read_u16()?,
            access_flags: ParameterAccessFlags::from_u16(cursor.read_u16()?),
        })
    }
}

/// [MethodParameters](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=181)
#[derive(Clone, Debug)]
pub struct MethodParameters {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    /// A single byte: a method descriptor is limited to 255 parameters.
    pub parameters_count: u8,
    pub parameters: Vec<Parameter>,
}

impl MethodParameters {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<MethodParameters, DecodeError> {
        let parameters_count = cursor.read_u8()?;
        let mut parameters = Vec::with_capacity(parameters_count as usize);
        for _ in 0..parameters_count {
            parameters.push(Parameter::read(cursor)?);
        }
        Ok(MethodParameters {
            attribute_name_index,
            attribute_length,
            parameters_count,
            parameters,
        })
    }
}

/// One dependence of the module. `requires_version_index` is 0 when no
/// version information is recorded.
#[derive(Clone, Debug)]
pub struct ModuleRequires {
    pub requires_index: u16,
    pub requires_flags: Vec<module_flags::RequiresAccessFlags>,
    pub requires_version_index: u16,
}

impl ModuleRequires {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<ModuleRequires, DecodeError> {
        Ok(ModuleRequires {
            requires_index: cursor.read_u16()?,
            requires_flags: module_flags::RequiresAccessFlags::from_u16(cursor.read_u16()?),
            requires_version_index: cursor.read_u16()?,
        })
    }
}

/// One exported package. An empty `exports_to_index` table means the export
/// is unqualified.
#[derive(Clone, Debug)]
pub struct ModuleExports {
    pub exports_index: u16,
    pub exports_flags: Vec<module_flags::ExportsAccessFlags>,
    pub exports_to_count: u16,
    pub exports_to_index: Vec<u16>,
}

impl ModuleExports {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<ModuleExports, DecodeError> {
        let exports_index = cursor.read_u16()?;
        let exports_flags = module_flags::ExportsAccessFlags::from_u16(cursor.read_u16()?);
        let exports_to_count = cursor.read_u16()?;
        let mut exports_to_index = Vec::with_capacity(exports_to_count as usize);
        for _ in 0..exports_to_count {
            exports_to_index.push(cursor.read_u16()?);
        }
        Ok(ModuleExports {
            exports_index,
            exports_flags,
            exports_to_count,
            exports_to_index,
        })
    }
}

/// One package opened for reflective access; same qualification rule as
/// [`ModuleExports`].
#[derive(Clone, Debug)]
pub struct ModuleOpens {
    pub opens_index: u16,
    pub opens_flags: Vec<module_flags::OpensAccessFlags>,
    pub opens_to_count: u16,
    pub opens_to_index: Vec<u16>,
}

impl ModuleOpens {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<ModuleOpens, DecodeError> {
        let opens_index = cursor.read_u16()?;
        let opens_flags = module_flags::OpensAccessFlags::from_u16(cursor.read_u16()?);
        let opens_to_count = cursor.read_u16()?;
        let mut opens_to_index = Vec::with_capacity(opens_to_count as usize);
        for _ in 0..opens_to_count {
            opens_to_index.push(cursor.read_u16()?);
        }
        Ok(ModuleOpens {
            opens_index,
            opens_flags,
            opens_to_count,
            opens_to_index,
        })
    }
}

/// One service implementation table: the service interface's `Class` index
/// plus the implementing classes.
#[derive(Clone, Debug)]
pub struct ModuleProvides {
    pub provides_index: u16,
    pub provides_with_count: u16,
    pub provides_with_index: Vec<u16>,
}

impl ModuleProvides {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<ModuleProvides, DecodeError> {
        let provides_index = cursor.read_u16()?;
        let provides_with_count = cursor.read_u16()?;
        let mut provides_with_index = Vec::with_capacity(provides_with_count as usize);
        for _ in 0..provides_with_count {
            provides_with_index.push(cursor.read_u16()?);
        }
        Ok(ModuleProvides {
            provides_index,
            provides_with_count,
            provides_with_index,
        })
    }
}

/// [Module](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=182)
///
/// Fixed section order: requires, exports, opens, uses, provides. Each
/// `uses_index` entry is one `u16` read, advancing the cursor by two.
#[derive(Clone, Debug)]
pub struct Module {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub module_name_index: u16,
    pub module_flags: Vec<module_flags::ModuleAccessFlags>,
    pub module_version_index: u16,
    pub requires_count: u16,
    pub requires: Vec<ModuleRequires>,
    pub exports_count: u16,
    pub exports: Vec<ModuleExports>,
    pub opens_count: u16,
    pub opens: Vec<ModuleOpens>,
    pub uses_count: u16,
    /// `Class` indices of the service interfaces the module may discover.
    pub uses_index: Vec<u16>,
    pub provides_count: u16,
    pub provides: Vec<ModuleProvides>,
}

impl Module {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<Module, DecodeError> {
        let module_name_index = cursor.read_u16()?;
        let module_flags = module_flags::ModuleAccessFlags::from_u16(cursor.read_u16()?);
        let module_version_index = cursor.read_u16()?;

        let requires_count = cursor.read_u16()?;
        let mut requires = Vec::with_capacity(requires_count as usize);
        for _ in 0..requires_count {
            requires.push(ModuleRequires::read(cursor)?);
        }

        let exports_count = cursor.read_u16()?;
        let mut exports = Vec::with_capacity(exports_count as usize);
        for _ in 0..exports_count {
            exports.push(ModuleExports::read(cursor)?);
        }

        let opens_count = cursor.read_u16()?;
        let mut opens = Vec::with_capacity(opens_count as usize);
        for _ in 0..opens_count {
            opens.push(ModuleOpens::read(cursor)?);
        }

        let uses_count = cursor.read_u16()?;
        let mut uses_index = Vec::with_capacity(uses_count as usize);
        for _ in 0..uses_count {
            uses_index.push(cursor.read_u16()?);
        }

        let provides_count = cursor.read_u16()?;
        let mut provides = Vec::with_capacity(provides_count as usize);
        for _ in 0..provides_count {
            provides.push(ModuleProvides::read(cursor)?);
        }

        Ok(Module {
            attribute_name_index,
            attribute_length,
            module_name_index,
            module_flags,
            module_version_index,
            requires_count,
            requires,
            exports_count,
            exports,
            opens_count,
            opens,
            uses_count,
            uses_index,
            provides_count,
            provides,
        })
    }
}

/// [ModulePackages](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=189)
#[derive(Clone, Debug)]
pub struct ModulePackages {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub package_count: u16,
    pub package_index: Vec<u16>,
}

impl ModulePackages {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<ModulePackages, DecodeError> {
        let package_count = cursor.read_u16()?;
        let mut package_index = Vec::with_capacity(package_count as usize);
        for _ in 0..package_count {
            package_index.push(cursor.read_u16()?);
        }
        Ok(ModulePackages {
            attribute_name_index,
            attribute_length,
            package_count,
            package_index,
        })
    }
}

/// [ModuleMainClass](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=190)
#[derive(Clone, Debug)]
pub struct ModuleMainClass {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub main_class_index: u16,
}

impl ModuleMainClass {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<ModuleMainClass, DecodeError> {
        Ok(ModuleMainClass {
            attribute_name_index,
            attribute_length,
            main_class_index: cursor.read_u16()?,
        })
    }
}

/// [NestHost](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=191)
#[derive(Clone, Debug)]
pub struct NestHost {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub host_class_index: u16,
}

impl NestHost {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<NestHost, DecodeError> {
        Ok(NestHost {
            attribute_name_index,
            attribute_length,
            host_class_index: cursor.read_u16()?,
        })
    }
}

/// [NestMembers](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=192)
#[derive(Clone, Debug)]
pub struct NestMembers {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub number_of_classes: u16,
    pub classes: Vec<u16>,
}

impl NestMembers {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<NestMembers, DecodeError> {
        let number_of_classes = cursor.read_u16()?;
        let mut classes = Vec::with_capacity(number_of_classes as usize);
        for _ in 0..number_of_classes {
            classes.push(cursor.read_u16()?);
        }
        Ok(NestMembers {
            attribute_name_index,
            attribute_length,
            number_of_classes,
            classes,
        })
    }
}

/// One record component: name, descriptor, and its own attribute table
/// (typically `Signature` and annotation attributes).
#[derive(Clone, Debug)]
pub struct RecordComponentInfo<'a> {
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes_count: u16,
    pub attributes: Vec<AttributeInfo<'a>>,
}

impl<'a> RecordComponentInfo<'a> {
    pub fn read(
        constant_pool: &ConstantPool<'a>,
        cursor: &mut ByteCursor<'a>,
    ) -> Result<RecordComponentInfo<'a>, DecodeError> {
        let name_index = cursor.read_u16()?;
        let descriptor_index = cursor.read_u16()?;
        let attributes_count = cursor.read_u16()?;
        let attributes = read_attributes(constant_pool, attributes_count, cursor)?;
        Ok(RecordComponentInfo {
            name_index,
            descriptor_index,
            attributes_count,
            attributes,
        })
    }
}

/// [Record](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=193)
#[derive(Clone, Debug)]
pub struct Record<'a> {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub components_count: u16,
    /// Components in declaration order.
    pub components: Vec<RecordComponentInfo<'a>>,
}

impl<'a> Record<'a> {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        constant_pool: &ConstantPool<'a>,
        cursor: &mut ByteCursor<'a>,
    ) -> Result<Record<'a>, DecodeError> {
        let components_count = cursor.read_u16()?;
        let mut components = Vec::with_capacity(components_count as usize);
        for _ in 0..components_count {
            components.push(RecordComponentInfo::read(constant_pool, cursor)?);
        }
        Ok(Record {
            attribute_name_index,
            attribute_length,
            components_count,
            components,
        })
    }
}

/// [PermittedSubclasses](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=195)
#[derive(Clone, Debug)]
pub struct PermittedSubclasses {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub number_of_classes: u16,
    pub classes: Vec<u16>,
}

impl PermittedSubclasses {
    pub fn new(
        attribute_name_index: u16,
        attribute_length: u32,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<PermittedSubclasses, DecodeError> {
        let number_of_classes = cursor.read_u16()?;
        let mut classes = Vec::with_capacity(number_of_classes as usize);
        for _ in 0..number_of_classes {
            classes.push(cursor.read_u16()?);
        }
        Ok(PermittedSubclasses {
            attribute_name_index,
            attribute_length,
            number_of_classes,
            classes,
        })
    }
}

/// An attribute whose name this decoder does not recognize. Not an error:
/// the resolved name and the raw body are preserved so the attribute can be
/// inspected or re-decoded by other tooling.
#[derive(Clone, Debug)]
pub struct Unknown<'a> {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub name: String,
    pub info: &'a [u8],
}

/// One decoded attribute, dispatched on the resolved name string.
#[derive(Clone, Debug)]
pub enum AttributeInfo<'a> {
    ConstantValue(ConstantValue),
    Code(Code<'a>),
    StackMapTable(StackMapTable),
    Exceptions(Exceptions),
    InnerClasses(InnerClasses),
    EnclosingMethod(EnclosingMethod),
    Synthetic(Synthetic),
    Signature(Signature),
    SourceFile(SourceFile),
    SourceDebugExtension(SourceDebugExtension<'a>),
    LineNumberTable(LineNumberTable),
    LocalVariableTable(LocalVariableTable),
    LocalVariableTypeTable(LocalVariableTypeTable),
    Deprecated(Deprecated),
    RuntimeVisibleAnnotations(RuntimeVisibleAnnotations),
    RuntimeInvisibleAnnotations(RuntimeInvisibleAnnotations),
    RuntimeVisibleParameterAnnotations(RuntimeVisibleParameterAnnotations),
    RuntimeInvisibleParameterAnnotations(RuntimeInvisibleParameterAnnotations),
    RuntimeVisibleTypeAnnotations(RuntimeVisibleTypeAnnotations),
    RuntimeInvisibleTypeAnnotations(RuntimeInvisibleTypeAnnotations),
    AnnotationDefault(AnnotationDefault),
    BootstrapMethods(BootstrapMethods),
    MethodParameters(MethodParameters),
    Module(Module),
    ModulePackages(ModulePackages),
    ModuleMainClass(ModuleMainClass),
    NestHost(NestHost),
    NestMembers(NestMembers),
    Record(Record<'a>),
    PermittedSubclasses(PermittedSubclasses),
    Unknown(Unknown<'a>),
}

impl AttributeInfo<'_> {
    /// The attribute's name string (for `Unknown`, the name as resolved
    /// from the pool).
    pub fn name(&self) -> &str {
        match self {
            AttributeInfo::ConstantValue(_) => "ConstantValue",
            AttributeInfo::Code(_) => "Code",
            AttributeInfo::StackMapTable(_) => "StackMapTable",
            AttributeInfo::Exceptions(_) => "Exceptions",
            AttributeInfo::InnerClasses(_) => "InnerClasses",
            AttributeInfo::EnclosingMethod(_) => "EnclosingMethod",
            AttributeInfo::Synthetic(_) => "Synthetic",
            AttributeInfo::Signature(_) => "Signature",
            AttributeInfo::SourceFile(_) => "SourceFile",
            AttributeInfo::SourceDebugExtension(_) => "SourceDebugExtension",
            AttributeInfo::LineNumberTable(_) => "LineNumberTable",
            AttributeInfo::LocalVariableTable(_) => "LocalVariableTable",
            AttributeInfo::LocalVariableTypeTable(_) => "LocalVariableTypeTable",
            AttributeInfo::Deprecated(_) => "Deprecated",
            AttributeInfo::RuntimeVisibleAnnotations(_) => "RuntimeVisibleAnnotations",
            AttributeInfo::RuntimeInvisibleAnnotations(_) => "RuntimeInvisibleAnnotations",
            AttributeInfo::RuntimeVisibleParameterAnnotations(_) => {
                "RuntimeVisibleParameterAnnotations"
            }
            AttributeInfo::RuntimeInvisibleParameterAnnotations(_) => {
                "RuntimeInvisibleParameterAnnotations"
            }
            AttributeInfo::RuntimeVisibleTypeAnnotations(_) => "RuntimeVisibleTypeAnnotations",
            AttributeInfo::RuntimeInvisibleTypeAnnotations(_) => "RuntimeInvisibleTypeAnnotations",
            AttributeInfo::AnnotationDefault(_) => "AnnotationDefault",
            AttributeInfo::BootstrapMethods(_) => "BootstrapMethods",
            AttributeInfo::MethodParameters(_) => "MethodParameters",
            AttributeInfo::Module(_) => "Module",
            AttributeInfo::ModulePackages(_) => "ModulePackages",
            AttributeInfo::ModuleMainClass(_) => "ModuleMainClass",
            AttributeInfo::NestHost(_) => "NestHost",
            AttributeInfo::NestMembers(_) => "NestMembers",
            AttributeInfo::Record(_) => "Record",
            AttributeInfo::PermittedSubclasses(_) => "PermittedSubclasses",
            AttributeInfo::Unknown(unknown) => &unknown.name,
        }
    }

    /// The `attribute_name_index` of this attribute's six-byte header.
    pub fn name_index(&self) -> u16 {
        match self {
            AttributeInfo::ConstantValue(a) => a.attribute_name_index,
            AttributeInfo::Code(a) => a.attribute_name_index,
            AttributeInfo::StackMapTable(a) => a.attribute_name_index,
            AttributeInfo::Exceptions(a) => a.attribute_name_index,
            AttributeInfo::InnerClasses(a) => a.attribute_name_index,
            AttributeInfo::EnclosingMethod(a) => a.attribute_name_index,
            AttributeInfo::Synthetic(a) => a.attribute_name_index,
            AttributeInfo::Signature(a) => a.attribute_name_index,
            AttributeInfo::SourceFile(a) => a.attribute_name_index,
            AttributeInfo::SourceDebugExtension(a) => a.attribute_name_index,
            AttributeInfo::LineNumberTable(a) => a.attribute_name_index,
            AttributeInfo::LocalVariableTable(a) => a.attribute_name_index,
            AttributeInfo::LocalVariableTypeTable(a) => a.attribute_name_index,
            AttributeInfo::Deprecated(a) => a.attribute_name_index,
            AttributeInfo::RuntimeVisibleAnnotations(a) => a.attribute_name_index,
            AttributeInfo::RuntimeInvisibleAnnotations(a) => a.attribute_name_index,
            AttributeInfo::RuntimeVisibleParameterAnnotations(a) => a.attribute_name_index,
            AttributeInfo::RuntimeInvisibleParameterAnnotations(a) => a.attribute_name_index,
            AttributeInfo::RuntimeVisibleTypeAnnotations(a) => a.attribute_name_index,
            AttributeInfo::RuntimeInvisibleTypeAnnotations(a) => a.attribute_name_index,
            AttributeInfo::AnnotationDefault(a) => a.attribute_name_index,
            AttributeInfo::BootstrapMethods(a) => a.attribute_name_index,
            AttributeInfo::MethodParameters(a) => a.attribute_name_index,
            AttributeInfo::Module(a) => a.attribute_name_index,
            AttributeInfo::ModulePackages(a) => a.attribute_name_index,
            AttributeInfo::ModuleMainClass(a) => a.attribute_name_index,
            AttributeInfo::NestHost(a) => a.attribute_name_index,
            AttributeInfo::NestMembers(a) => a.attribute_name_index,
            AttributeInfo::Record(a) => a.attribute_name_index,
            AttributeInfo::PermittedSubclasses(a) => a.attribute_name_index,
            AttributeInfo::Unknown(a) => a.attribute_name_index,
        }
    }

    /// The declared `attribute_length` of this attribute's six-byte header.
    pub fn length(&self) -> u32 {
        match self {
            AttributeInfo::ConstantValue(a) => a.attribute_length,
            AttributeInfo::Code(a) => a.attribute_length,
            AttributeInfo::StackMapTable(a) => a.attribute_length,
            AttributeInfo::Exceptions(a) => a.attribute_length,
            AttributeInfo::InnerClasses(a) => a.attribute_length,
            AttributeInfo::EnclosingMethod(a) => a.attribute_length,
            AttributeInfo::Synthetic(a) => a.attribute_length,
            AttributeInfo::Signature(a) => a.attribute_length,
            AttributeInfo::SourceFile(a) => a.attribute_length,
            AttributeInfo::SourceDebugExtension(a) => a.attribute_length,
            AttributeInfo::LineNumberTable(a) => a.attribute_length,
            AttributeInfo::LocalVariableTable(a) => a.attribute_length,
            AttributeInfo::LocalVariableTypeTable(a) => a.attribute_length,
            AttributeInfo::Deprecated(a) => a.attribute_length,
            AttributeInfo::RuntimeVisibleAnnotations(a) => a.attribute_length,
            AttributeInfo::RuntimeInvisibleAnnotations(a) => a.attribute_length,
            AttributeInfo::RuntimeVisibleParameterAnnotations(a) => a.attribute_length,
            AttributeInfo::RuntimeInvisibleParameterAnnotations(a) => a.attribute_length,
            AttributeInfo::RuntimeVisibleTypeAnnotations(a) => a.attribute_length,
            AttributeInfo::RuntimeInvisibleTypeAnnotations(a) => a.attribute_length,
            AttributeInfo::AnnotationDefault(a) => a.attribute_length,
            AttributeInfo::BootstrapMethods(a) => a.attribute_length,
            AttributeInfo::MethodParameters(a) => a.attribute_length,
            AttributeInfo::Module(a) => a.attribute_length,
            AttributeInfo::ModulePackages(a) => a.attribute_length,
            AttributeInfo::ModuleMainClass(a) => a.attribute_length,
            AttributeInfo::NestHost(a) => a.attribute_length,
            AttributeInfo::NestMembers(a) => a.attribute_length,
            AttributeInfo::Record(a) => a.attribute_length,
            AttributeInfo::PermittedSubclasses(a) => a.attribute_length,
            AttributeInfo::Unknown(a) => a.attribute_length,
        }
    }
}

/// Decode one attribute from `cursor`.
///
/// The six-byte header and the `length` body bytes are consumed from
/// `cursor` before the body is interpreted, so the cursor lands at
/// `start + 6 + length` whether or not the body decodes. A caller that
/// gets an error back can still read the next attribute from the same
/// position.
///
/// Unknown names are preserved as [`AttributeInfo::Unknown`]. A known body
/// that runs out of bytes, or leaves declared bytes unread, fails with
/// [`DecodeCause::MalformedAttribute`]; tag errors inside the body keep
/// their own causes.
pub fn read_attribute<'a>(
    constant_pool: &ConstantPool<'a>,
    cursor: &mut ByteCursor<'a>,
) -> Result<AttributeInfo<'a>, DecodeError> {
    let name_offset = cursor.offset();
    let name_index = cursor.read_u16()?;
    let length = cursor.read_u32()?;
    let mut body = cursor.sub_cursor(length as usize)?;
    let name = String::from(
        constant_pool
            .get_utf8(name_index)
            .map_err(|cause| DecodeError::new(cause, name_offset))?,
    );
    let decoded = match name.as_str() {
        "ConstantValue" => {
            ConstantValue::new(name_index, length, &mut body).map(AttributeInfo::ConstantValue)
        }
        "Code" => {
            Code::new(name_index, length, constant_pool, &mut body).map(AttributeInfo::Code)
        }
        "StackMapTable" => {
            StackMapTable::new(name_index, length, &mut body).map(AttributeInfo::StackMapTable)
        }
        "Exceptions" => {
            Exceptions::new(name_index, length, &mut body).map(AttributeInfo::Exceptions)
        }
        "InnerClasses" => {
            InnerClasses::new(name_index, length, &mut body).map(AttributeInfo::InnerClasses)
        }
        "EnclosingMethod" => {
            EnclosingMethod::new(name_index, length, &mut body).map(AttributeInfo::EnclosingMethod)
        }
        "Synthetic" => Ok(AttributeInfo::Synthetic(Synthetic::new(name_index, length))),
        "Signature" => Signature::new(name_index, length, &mut body).map(AttributeInfo::Signature),
        "SourceFile" => {
            SourceFile::new(name_index, length, &mut body).map(AttributeInfo::SourceFile)
        }
        "SourceDebugExtension" => SourceDebugExtension::new(name_index, length, &mut body)
            .map(AttributeInfo::SourceDebugExtension),
        "LineNumberTable" => {
            LineNumberTable::new(name_index, length, &mut body).map(AttributeInfo::LineNumberTable)
        }
        "LocalVariableTable" => LocalVariableTable::new(name_index, length, &mut body)
            .map(AttributeInfo::LocalVariableTable),
        "LocalVariableTypeTable" => LocalVariableTypeTable::new(name_index, length, &mut body)
            .map(AttributeInfo::LocalVariableTypeTable),
        "Deprecated" => {
            if length != 0 {
                return Err(DecodeError::new(
                    DecodeCause::DeprecatedNonZeroLength,
                    name_offset + 2,
                ));
            }
            Ok(AttributeInfo::Deprecated(Deprecated::new(name_index, length)))
        }
        "RuntimeVisibleAnnotations" => RuntimeVisibleAnnotations::new(name_index, length, &mut body)
            .map(AttributeInfo::RuntimeVisibleAnnotations),
        "RuntimeInvisibleAnnotations" => {
            RuntimeInvisibleAnnotations::new(name_index, length, &mut body)
                .map(AttributeInfo::RuntimeInvisibleAnnotations)
        }
        "RuntimeVisibleParameterAnnotations" => {
            RuntimeVisibleParameterAnnotations::new(name_index, length, &mut body)
                .map(AttributeInfo::RuntimeVisibleParameterAnnotations)
        }
        "RuntimeInvisibleParameterAnnotations" => {
            RuntimeInvisibleParameterAnnotations::new(name_index, length, &mut body)
                .map(AttributeInfo::RuntimeInvisibleParameterAnnotations)
        }
        "RuntimeVisibleTypeAnnotations" => {
            RuntimeVisibleTypeAnnotations::new(name_index, length, &mut body)
                .map(AttributeInfo::RuntimeVisibleTypeAnnotations)
        }
        "RuntimeInvisibleTypeAnnotations" => {
            RuntimeInvisibleTypeAnnotations::new(name_index, length, &mut body)
                .map(AttributeInfo::RuntimeInvisibleTypeAnnotations)
        }
        "AnnotationDefault" => AnnotationDefault::new(name_index, length, &mut body)
            .map(AttributeInfo::AnnotationDefault),
        "BootstrapMethods" => BootstrapMethods::new(name_index, length, &mut body)
            .map(AttributeInfo::BootstrapMethods),
        "MethodParameters" => MethodParameters::new(name_index, length, &mut body)
            .map(AttributeInfo::MethodParameters),
        "Module" => Module::new(name_index, length, &mut body).map(AttributeInfo::Module),
        "ModulePackages" => {
            ModulePackages::new(name_index, length, &mut body).map(AttributeInfo::ModulePackages)
        }
        "ModuleMainClass" => {
            ModuleMainClass::new(name_index, length, &mut body).map(AttributeInfo::ModuleMainClass)
        }
        "NestHost" => NestHost::new(name_index, length, &mut body).map(AttributeInfo::NestHost),
        "NestMembers" => {
            NestMembers::new(name_index, length, &mut body).map(AttributeInfo::NestMembers)
        }
        "Record" => Record::new(name_index, length, constant_pool, &mut body)
            .map(AttributeInfo::Record),
        "PermittedSubclasses" => PermittedSubclasses::new(name_index, length, &mut body)
            .map(AttributeInfo::PermittedSubclasses),
        _ => {
            let info = body.read_bytes(length as usize)?;
            Ok(AttributeInfo::Unknown(Unknown {
                attribute_name_index: name_index,
                attribute_length: length,
                name: name.clone(),
                info,
            }))
        }
    };
    let attribute = match decoded {
        Ok(attribute) => attribute,
        Err(error) => {
            // The body ran dry: the declared length was too short for the
            // attribute's own counts.
            if let DecodeCause::UnexpectedEof = error.cause() {
                return Err(DecodeError::new(
                    DecodeCause::MalformedAttribute(name),
                    error.offset(),
                ));
            }
            return Err(error);
        }
    };
    if body.remaining() != 0 {
        return Err(DecodeError::new(
            DecodeCause::MalformedAttribute(name),
            body.offset(),
        ));
    }
    Ok(attribute)
}

/// Decode a counted attribute table, failing on the first bad attribute.
pub fn read_attributes<'a>(
    constant_pool: &ConstantPool<'a>,
    count: u16,
    cursor: &mut ByteCursor<'a>,
) -> Result<Vec<AttributeInfo<'a>>, DecodeError> {
    let mut attributes = Vec::with_capacity(count as usize);
    for _ in 0..count {
        attributes.push(read_attribute(constant_pool, cursor)?);
    }
    Ok(attributes)
}
