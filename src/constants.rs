use std::str::from_utf8;

use crate::cursor::ByteCursor;
use crate::errors::{DecodeCause, DecodeError};

/// [The Constant Pool](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=91)
///
/// One entry of the `constant_pool` table. The format of each entry is
/// indicated by its first "tag" byte; `Unused` is not a wire variant but the
/// filler occupying slot 0 and the phantom slot after every `Long` and
/// `Double` (§4.4.5: "In retrospect, making 8-byte constants take two
/// constant pool entries was a poor choice.").
#[derive(Clone, Debug)]
pub enum Constant<'a> {
    Utf8(Utf8<'a>),
    Integer(Integer),
    Float(Float),
    Long(Long),
    Double(Double),
    Class(Class),
    String(JString),
    Fieldref(Fieldref),
    Methodref(Methodref),
    InterfaceMethodref(InterfaceMethodref),
    NameAndType(NameAndType),
    MethodHandle(MethodHandle),
    MethodType(MethodType),
    Dynamic(Dynamic),
    InvokeDynamic(InvokeDynamic),
    Module(Module),
    Package(Package),
    Unused,
}

impl Constant<'_> {
    /// The tag spelling used by the pool listing of the rendered report.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Constant::Utf8(_) => "Utf8",
            Constant::Integer(_) => "Integer",
            Constant::Float(_) => "Float",
            Constant::Long(_) => "Long",
            Constant::Double(_) => "Double",
            Constant::Class(_) => "Class",
            Constant::String(_) => "String",
            Constant::Fieldref(_) => "Fieldref",
            Constant::Methodref(_) => "Methodref",
            Constant::InterfaceMethodref(_) => "InterfaceMethodref",
            Constant::NameAndType(_) => "NameAndType",
            Constant::MethodHandle(_) => "MethodHandle",
            Constant::MethodType(_) => "MethodType",
            Constant::Dynamic(_) => "Dynamic",
            Constant::InvokeDynamic(_) => "InvokeDynamic",
            Constant::Module(_) => "Module",
            Constant::Package(_) => "Package",
            Constant::Unused => "Unused",
        }
    }
}

#[repr(u8)]
pub enum Tags {
    Utf8 = 1,
    Integer = 3,
    Float = 4,
    Long = 5,
    Double = 6,
    Class = 7,
    String = 8,
    Fieldref = 9,
    Methodref = 10,
    InterfaceMethodref = 11,
    NameAndType = 12,
    MethodHandle = 15,
    MethodType = 16,
    Dynamic = 17,
    InvokeDynamic = 18,
    Module = 19,
    Package = 20,
    Unknown = 128,
}

impl From<u8> for Tags {
    fn from(value: u8) -> Self {
        match value {
            1 => Tags::Utf8,
            3 => Tags::Integer,
            4 => Tags::Float,
            5 => Tags::Long,
            6 => Tags::Double,
            7 => Tags::Class,
            8 => Tags::String,
            9 => Tags::Fieldref,
            10 => Tags::Methodref,
            11 => Tags::InterfaceMethodref,
            12 => Tags::NameAndType,
            15 => Tags::MethodHandle,
            16 => Tags::MethodType,
            17 => Tags::Dynamic,
            18 => Tags::InvokeDynamic,
            19 => Tags::Module,
            20 => Tags::Package,
            _ => Tags::Unknown,
        }
    }
}

/// [Utf8 Constant](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=103)
///
/// The byte run is kept as-is: it is *modified* UTF-8, which this crate
/// treats as opaque bytes with a length prefix. Conversion to a `String` is
/// lossy on the modified sequences, which only matters for display.
#[derive(Clone)]
pub struct Utf8<'a> {
    /// Number of bytes in `bytes`, not the length of the decoded string.
    pub length: u16,
    pub bytes: &'a [u8],
}

impl<'a> Utf8<'a> {
    pub(crate) fn read(cursor: &mut ByteCursor<'a>) -> Result<Utf8<'a>, DecodeError> {
        let length = cursor.read_u16()?;
        Ok(Utf8 {
            length,
            bytes: cursor.read_bytes(length as usize)?,
        })
    }
}

impl From<&Utf8<'_>> for String {
    fn from(value: &Utf8<'_>) -> Self {
        // Kotlin emits Utf8 constants that are not valid UTF-8, so lossy it is.
        match from_utf8(value.bytes) {
            Ok(s) => s.to_string(),
            Err(_) => String::from_utf8_lossy(value.bytes).into_owned(),
        }
    }
}

impl std::fmt::Debug for Utf8<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", String::from(self))
    }
}

#[derive(Clone, Debug)]
pub struct Integer {
    pub value: i32,
}

#[derive(Clone, Debug)]
pub struct Float {
    pub value: f32,
}

/// [Long Constant](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=99)
///
/// Occupies two logical pool slots; the slot after it stays [`Constant::Unused`].
#[derive(Clone, Debug)]
pub struct Long {
    pub value: i64,
}

/// Occupies two logical pool slots, like [`Long`].
#[derive(Clone, Debug)]
pub struct Double {
    pub value: f64,
}

/// [Class Constant](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=97)
#[derive(Clone, Debug)]
pub struct Class {
    /// Index of a `Utf8` entry holding the binary class or interface name
    /// in internal form.
    pub name_index: u16,
}

impl Class {
    pub fn new(name_index: u16) -> Class {
        Class { name_index }
    }
}

/// [String Constant](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=98)
///
/// Named `JString` to keep it apart from `std::string::String`, which this
/// module uses heavily for rendering.
#[derive(Clone, Debug)]
pub struct JString {
    /// Index of the `Utf8` entry holding the string's code points.
    pub string_index: u16,
}

impl JString {
    pub fn new(string_index: u16) -> JString {
        JString { string_index }
    }
}

/// [Fieldref Constant](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=97)
#[derive(Clone, Debug)]
pub struct Fieldref {
    /// Index of the `Class` entry owning the field.
    pub class_index: u16,
    /// Index of the `NameAndType` entry naming the field and its descriptor.
    pub name_and_type_index: u16,
}

impl Fieldref {
    pub fn new(class_index: u16, name_and_type_index: u16) -> Fieldref {
        Fieldref {
            class_index,
            name_and_type_index,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Methodref {
    pub class_index: u16,
    pub name_and_type_index: u16,
}

impl Methodref {
    pub fn new(class_index: u16, name_and_type_index: u16) -> Methodref {
        Methodref {
            class_index,
            name_and_type_index,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InterfaceMethodref {
    pub class_index: u16,
    pub name_and_type_index: u16,
}

impl InterfaceMethodref {
    pub fn new(class_index: u16, name_and_type_index: u16) -> InterfaceMethodref {
        InterfaceMethodref {
            class_index,
            name_and_type_index,
        }
    }
}

/// [NameAndType Constant](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=102)
#[derive(Clone, Debug)]
pub struct NameAndType {
    /// Index of a `Utf8` entry holding an unqualified member name.
    pub name_index: u16,
    /// Index of a `Utf8` entry holding a field or method descriptor.
    pub descriptor_index: u16,
}

impl NameAndType {
    pub fn new(name_index: u16, descriptor_index: u16) -> NameAndType {
        NameAndType {
            name_index,
            descriptor_index,
        }
    }
}

/// [MethodHandle kinds](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=104)
///
/// Values 1..=9 characterize the handle's bytecode behaviour. Anything else
/// decodes to `Unknown`; whether the kind is legal for the referenced entry
/// is a verifier question, not a decoder one.
#[repr(u8)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MethodHandleKinds {
    GetField = 1,
    GetStatic,
    PutField,
    PutStatic,
    InvokeVirtual,
    InvokeStatic,
    InvokeSpecial,
    NewInvokeSpecial,
    InvokeInterface,
    Unknown,
}

impl From<u8> for MethodHandleKinds {
    fn from(value: u8) -> Self {
        match value {
            1 => MethodHandleKinds::GetField,
            2 => MethodHandleKinds::GetStatic,
            3 => MethodHandleKinds::PutField,
            4 => MethodHandleKinds::PutStatic,
            5 => MethodHandleKinds::InvokeVirtual,
            6 => MethodHandleKinds::InvokeStatic,
            7 => MethodHandleKinds::InvokeSpecial,
            8 => MethodHandleKinds::NewInvokeSpecial,
            9 => MethodHandleKinds::InvokeInterface,
            _ => MethodHandleKinds::Unknown,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MethodHandle {
    pub reference_kind: MethodHandleKinds,
    /// Index of the `Fieldref`/`Methodref`/`InterfaceMethodref` entry the
    /// handle is created over.
    pub reference_index: u16,
}

impl MethodHandle {
    pub fn new(reference_kind: u8, reference_index: u16) -> MethodHandle {
        MethodHandle {
            reference_kind: MethodHandleKinds::from(reference_kind),
            reference_index,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MethodType {
    /// Index of a `Utf8` entry holding a method descriptor.
    pub descriptor_index: u16,
}

impl MethodType {
    pub fn new(descriptor_index: u16) -> MethodType {
        MethodType { descriptor_index }
    }
}

/// [Dynamic Constant](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=106)
#[derive(Clone, Debug)]
pub struct Dynamic {
    /// Index into the `bootstrap_methods` array of the `BootstrapMethods`
    /// attribute, not into the constant pool.
    pub bootstrap_method_attr_index: u16,
    pub name_and_type_index: u16,
}

impl Dynamic {
    pub fn new(bootstrap_method_attr_index: u16, name_and_type_index: u16) -> Dynamic {
        Dynamic {
            bootstrap_method_attr_index,
            name_and_type_index,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InvokeDynamic {
    /// Index into the `bootstrap_methods` array of the `BootstrapMethods`
    /// attribute, not into the constant pool.
    pub bootstrap_method_attr_index: u16,
    pub name_and_type_index: u16,
}

impl InvokeDynamic {
    pub fn new(bootstrap_method_attr_index: u16, name_and_type_index: u16) -> InvokeDynamic {
        InvokeDynamic {
            bootstrap_method_attr_index,
            name_and_type_index,
        }
    }
}

/// Only legal in the pool of a class file with the module access flag set.
#[derive(Clone, Debug)]
pub struct Module {
    pub name_index: u16,
}

impl Module {
    pub fn new(name_index: u16) -> Module {
        Module { name_index }
    }
}

/// Only legal in the pool of a class file with the module access flag set.
#[derive(Clone, Debug)]
pub struct Package {
    pub name_index: u16,
}

impl Package {
    pub fn new(name_index: u16) -> Package {
        Package { name_index }
    }
}

/// The decoded `constant_pool` table.
///
/// The table is indexed from 1 to `constant_pool_count - 1`; slot 0 and the
/// slot after each `Long`/`Double` hold [`Constant::Unused`] and are not
/// valid targets of any index.
#[derive(Clone, Debug)]
pub struct ConstantPool<'a> {
    entries: Vec<Constant<'a>>,
}

impl<'a> ConstantPool<'a> {
    /// Build a pool from pre-decoded slots. Slot 0 should be
    /// [`Constant::Unused`], and wide constants must be followed by their
    /// own `Unused` slot; `get` enforces neither, it only refuses to hand
    /// the filler out.
    pub fn from_entries(entries: Vec<Constant<'a>>) -> ConstantPool<'a> {
        ConstantPool { entries }
    }

    pub(crate) fn read(
        count: u16,
        cursor: &mut ByteCursor<'a>,
    ) -> Result<ConstantPool<'a>, DecodeError> {
        let mut entries = Vec::with_capacity(count as usize);
        entries.push(Constant::Unused);
        // Long and Double take two slots, so the loop variable cannot be a
        // plain range. Wider than u16: a wide constant in slot 65534 would
        // otherwise wrap the counter.
        let mut slot: u32 = 1;
        while slot < count as u32 {
            let tag_offset = cursor.offset();
            let tag = cursor.read_u8()?;
            let constant = match Tags::from(tag) {
                Tags::Utf8 => Constant::Utf8(Utf8::read(cursor)?),
                Tags::Integer => Constant::Integer(Integer {
                    value: cursor.read_i32()?,
                }),
                Tags::Float => Constant::Float(Float {
                    value: cursor.read_f32()?,
                }),
                Tags::Long => Constant::Long(Long {
                    value: cursor.read_u64()? as i64,
                }),
                Tags::Double => Constant::Double(Double {
                    value: cursor.read_f64()?,
                }),
                Tags::Class => Constant::Class(Class::new(cursor.read_u16()?)),
                Tags::String => Constant::String(JString::new(cursor.read_u16()?)),
                Tags::Fieldref => {
                    Constant::Fieldref(Fieldref::new(cursor.read_u16()?, cursor.read_u16()?))
                }
                Tags::Methodref => {
                    Constant::Methodref(Methodref::new(cursor.read_u16()?, cursor.read_u16()?))
                }
                Tags::InterfaceMethodref => Constant::InterfaceMethodref(InterfaceMethodref::new(
                    cursor.read_u16()?,
                    cursor.read_u16()?,
                )),
                Tags::NameAndType => {
                    Constant::NameAndType(NameAndType::new(cursor.read_u16()?, cursor.read_u16()?))
                }
                Tags::MethodHandle => {
                    Constant::MethodHandle(MethodHandle::new(cursor.read_u8()?, cursor.read_u16()?))
                }
                Tags::MethodType => Constant::MethodType(MethodType::new(cursor.read_u16()?)),
                Tags::Dynamic => {
                    Constant::Dynamic(Dynamic::new(cursor.read_u16()?, cursor.read_u16()?))
                }
                Tags::InvokeDynamic => Constant::InvokeDynamic(InvokeDynamic::new(
                    cursor.read_u16()?,
                    cursor.read_u16()?,
                )),
                Tags::Module => Constant::Module(Module::new(cursor.read_u16()?)),
                Tags::Package => Constant::Package(Package::new(cursor.read_u16()?)),
                Tags::Unknown => {
                    return Err(DecodeError::new(
                        DecodeCause::InvalidConstantTag {
                            tag,
                            slot: slot as u16,
                        },
                        tag_offset,
                    ))
                }
            };
            if let Constant::Long(_) | Constant::Double(_) = constant {
                entries.push(constant);
                entries.push(Constant::Unused);
                slot += 2;
            } else {
                entries.push(constant);
                slot += 1;
            }
        }
        Ok(ConstantPool { entries })
    }

    /// All slots, including the unused ones; slot 0 is `entries()[0]`.
    pub fn entries(&self) -> &[Constant<'a>] {
        &self.entries
    }

    /// Resolve a 1-based pool index.
    ///
    /// Index 0, anything at or past the pool count, and the phantom slot
    /// after a `Long`/`Double` are all [`DecodeCause::InvalidIndex`]. Kind
    /// constraints (e.g. that a `Class` name index points at `Utf8`) are
    /// deliberately not checked here.
    pub fn get(&self, index: u16) -> Result<&Constant<'a>, DecodeCause> {
        if index == 0 || index as usize >= self.entries.len() {
            return Err(DecodeCause::InvalidIndex(index));
        }
        match &self.entries[index as usize] {
            Constant::Unused => Err(DecodeCause::InvalidIndex(index)),
            constant => Ok(constant),
        }
    }

    /// Resolve a 1-based pool index that must name a `Utf8` entry.
    pub fn get_utf8(&self, index: u16) -> Result<&Utf8<'a>, DecodeCause> {
        match self.get(index)? {
            Constant::Utf8(utf8) => Ok(utf8),
            _ => Err(DecodeCause::WrongKind(index)),
        }
    }

    /// Human-readable label of the entry at `index`, resolving
    /// cross-references through the pool.
    ///
    /// Never fails: a reference that is out of bounds, unused, or of the
    /// wrong kind renders as `<invalid #n>` so diagnostic output stays
    /// usable on damaged pools.
    pub fn label(&self, index: u16) -> String {
        let constant = match self.get(index) {
            Ok(constant) => constant,
            Err(_) => return invalid(index),
        };
        match constant {
            Constant::Utf8(utf8) => String::from(utf8),
            Constant::Integer(integer) => format!("{}", integer.value),
            Constant::Float(float) => format!("{}", float.value),
            Constant::Long(long) => format!("{}", long.value),
            Constant::Double(double) => format!("{}", double.value),
            Constant::Class(class) => self.utf8_label(class.name_index),
            Constant::String(string) => self.utf8_label(string.string_index),
            Constant::Fieldref(fieldref) => format!(
                "{}.{}",
                self.class_label(fieldref.class_index),
                self.name_and_type_label(fieldref.name_and_type_index)
            ),
            Constant::Methodref(methodref) => format!(
                "{}.{}",
                self.class_label(methodref.class_index),
                self.name_and_type_label(methodref.name_and_type_index)
            ),
            Constant::InterfaceMethodref(interfaceref) => format!(
                "{}.{}",
                self.class_label(interfaceref.class_index),
                self.name_and_type_label(interfaceref.name_and_type_index)
            ),
            Constant::NameAndType(name_and_type) => format!(
                "{}:{}",
                self.utf8_label(name_and_type.name_index),
                self.utf8_label(name_and_type.descriptor_index)
            ),
            Constant::MethodHandle(handle) => format!(
                "{:?} {}",
                handle.reference_kind,
                self.reference_label(handle.reference_index)
            ),
            Constant::MethodType(method_type) => self.utf8_label(method_type.descriptor_index),
            Constant::Dynamic(dynamic) => format!(
                "#{}:{}",
                dynamic.bootstrap_method_attr_index,
                self.name_and_type_label(dynamic.name_and_type_index)
            ),
            Constant::InvokeDynamic(invoke_dynamic) => format!(
                "#{}:{}",
                invoke_dynamic.bootstrap_method_attr_index,
                self.name_and_type_label(invoke_dynamic.name_and_type_index)
            ),
            Constant::Module(module) => self.utf8_label(module.name_index),
            Constant::Package(package) => self.utf8_label(package.name_index),
            Constant::Unused => invalid(index),
        }
    }

    fn utf8_label(&self, index: u16) -> String {
        match self.get_utf8(index) {
            Ok(utf8) => String::from(utf8),
            Err(_) => invalid(index),
        }
    }

    fn class_label(&self, index: u16) -> String {
        match self.get(index) {
            Ok(Constant::Class(class)) => self.utf8_label(class.name_index),
            _ => invalid(index),
        }
    }

    fn name_and_type_label(&self, index: u16) -> String {
        match self.get(index) {
            Ok(Constant::NameAndType(name_and_type)) => format!(
                "{}:{}",
                self.utf8_label(name_and_type.name_index),
                self.utf8_label(name_and_type.descriptor_index)
            ),
            _ => invalid(index),
        }
    }

    // Each hop below is kind-checked, so label resolution always terminates:
    // a fabricated pool can point entries at each other but never form a
    // cycle the renderer will follow.
    fn reference_label(&self, index: u16) -> String {
        match self.get(index) {
            Ok(Constant::Fieldref(r)) => format!(
                "{}.{}",
                self.class_label(r.class_index),
                self.name_and_type_label(r.name_and_type_index)
            ),
            Ok(Constant::Methodref(r)) => format!(
                "{}.{}",
                self.class_label(r.class_index),
                self.name_and_type_label(r.name_and_type_index)
            ),
            Ok(Constant::InterfaceMethodref(r)) => format!(
                "{}.{}",
                self.class_label(r.class_index),
                self.name_and_type_label(r.name_and_type_index)
            ),
            _ => invalid(index),
        }
    }
}

fn invalid(index: u16) -> String {
    format!("<invalid #{index}>")
}
