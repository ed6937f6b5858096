use crate::access_flags::{ClassAccessFlags, FieldAccessFlags, MethodAccessFlags};
use crate::attributes::{self, AttributeInfo};
use crate::constants::{Constant, ConstantPool};
use crate::cursor::ByteCursor;
use crate::descriptors::{FieldDescriptor, MethodDescriptor};
use crate::errors::{DecodeCause, DecodeError};

/// [Fields](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=107)
#[derive(Clone, Debug)]
pub struct FieldInfo<'a> {
    pub access_flags: Vec<FieldAccessFlags>,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes_count: u16,
    pub attributes: Vec<AttributeInfo<'a>>,
}

impl<'a> FieldInfo<'a> {
    pub(crate) fn read(
        constant_pool: &ConstantPool<'a>,
        cursor: &mut ByteCursor<'a>,
    ) -> Result<FieldInfo<'a>, DecodeError> {
        let access_flags = FieldAccessFlags::from_u16(cursor.read_u16()?);
        let name_index = cursor.read_u16()?;
        let descriptor_index = cursor.read_u16()?;
        let attributes_count = cursor.read_u16()?;
        let attributes = attributes::read_attributes(constant_pool, attributes_count, cursor)?;
        Ok(FieldInfo {
            access_flags,
            name_index,
            descriptor_index,
            attributes_count,
            attributes,
        })
    }
}

/// [Methods](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=111)
///
/// Same shape as [`FieldInfo`] apart from the flag set; instance
/// initializers show up here under the special names `<init>`/`<clinit>`.
#[derive(Clone, Debug)]
pub struct MethodInfo<'a> {
    pub access_flags: Vec<MethodAccessFlags>,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes_count: u16,
    pub attributes: Vec<AttributeInfo<'a>>,
}

impl<'a> MethodInfo<'a> {
    pub(crate) fn read(
        constant_pool: &ConstantPool<'a>,
        cursor: &mut ByteCursor<'a>,
    ) -> Result<MethodInfo<'a>, DecodeError> {
        let access_flags = MethodAccessFlags::from_u16(cursor.read_u16()?);
        let name_index = cursor.read_u16()?;
        let descriptor_index = cursor.read_u16()?;
        let attributes_count = cursor.read_u16()?;
        let attributes = attributes::read_attributes(constant_pool, attributes_count, cursor)?;
        Ok(MethodInfo {
            access_flags,
            name_index,
            descriptor_index,
            attributes_count,
            attributes,
        })
    }
}

/// [The ClassFile Structure](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=82)
///
/// The decoded form of one class file. Borrowing: `Utf8` constants, raw
/// `Code` bytes and unknown attribute bodies are sub-slices of the input
/// buffer, so the value cannot outlive the bytes handed to
/// [`ClassFile::from_bytes`]. Everything else is indices into the pool,
/// resolved lazily by the renderer.
#[derive(Clone, Debug)]
pub struct ClassFile<'a> {
    /// Always `0xCAFEBABE` once decoding succeeded.
    pub magic: u32,
    pub minor_version: u16,
    pub major_version: u16,
    /// One greater than the last usable pool index.
    pub constant_pool_count: u16,
    pub constant_pool: ConstantPool<'a>,
    pub access_flags: Vec<ClassAccessFlags>,
    /// Pool index of the `Class` entry for this class or interface.
    pub this_class: u16,
    /// Pool index of the superclass's `Class` entry, or 0 for
    /// `java/lang/Object` (the only class without a direct superclass).
    pub super_class: u16,
    pub interfaces_count: u16,
    /// `Class` pool indices of the direct superinterfaces, in source order.
    pub interfaces: Vec<u16>,
    pub field_count: u16,
    pub fields: Vec<FieldInfo<'a>>,
    pub methods_count: u16,
    pub methods: Vec<MethodInfo<'a>>,
    pub attributes_count: u16,
    pub attributes: Vec<AttributeInfo<'a>>,
}

impl<'a> ClassFile<'a> {
    /// Decode a whole class file from its byte image.
    ///
    /// A single forward pass with no recovery: the first malformed item
    /// aborts with a [`DecodeError`] carrying the byte offset. Trailing
    /// bytes after the class-level attribute table are ignored.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<ClassFile<'a>, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);
        let magic = cursor.read_u32()?;
        if magic != 0xCAFEBABE {
            return Err(DecodeError::new(DecodeCause::BadMagic(magic), 0));
        }
        let minor_version = cursor.read_u16()?;
        let major_version = cursor.read_u16()?;
        let constant_pool_count = cursor.read_u16()?;
        let constant_pool = ConstantPool::read(constant_pool_count, &mut cursor)?;
        let access_flags = ClassAccessFlags::from_u16(cursor.read_u16()?);
        let this_class = cursor.read_u16()?;
        let super_class = cursor.read_u16()?;
        let interfaces_count = cursor.read_u16()?;
        let interfaces = {
            let mut interfaces = Vec::with_capacity(interfaces_count as usize);
            for _ in 0..interfaces_count {
                interfaces.push(cursor.read_u16()?);
            }
            interfaces
        };
        let field_count = cursor.read_u16()?;
        let fields = {
            let mut fields = Vec::with_capacity(field_count as usize);
            for _ in 0..field_count {
                fields.push(FieldInfo::read(&constant_pool, &mut cursor)?);
            }
            fields
        };
        let methods_count = cursor.read_u16()?;
        let methods = {
            let mut methods = Vec::with_capacity(methods_count as usize);
            for _ in 0..methods_count {
                methods.push(MethodInfo::read(&constant_pool, &mut cursor)?);
            }
            methods
        };
        let attributes_count = cursor.read_u16()?;
        let attributes = attributes::read_attributes(&constant_pool, attributes_count, &mut cursor)?;
        Ok(ClassFile {
            magic,
            minor_version,
            major_version,
            constant_pool_count,
            constant_pool,
            access_flags,
            this_class,
            super_class,
            interfaces_count,
            interfaces,
            field_count,
            fields,
            methods_count,
            methods,
            attributes_count,
            attributes,
        })
    }

    /// The JDK release this version pair belongs to.
    ///
    /// Majors 46..=52 are the old `1.x` numbering; above that the release
    /// is `major - 44`, and once the major reaches 56 the minor may only be
    /// 0 or 65535 (preview features).
    pub fn version_description(&self) -> String {
        match self.major_version {
            45 => "JDK 1.0.2 or 1.1".to_string(),
            46..=52 if self.minor_version == 0 => {
                let jdk = self.major_version - 44;
                if jdk == 8 {
                    format!("JDK 1.{jdk} (LTS)")
                } else {
                    format!("JDK 1.{jdk}")
                }
            }
            53.. => {
                if self.major_version >= 56 && self.minor_version != 0 && self.minor_version != 65535
                {
                    return "unknown version".to_string();
                }
                let jdk = self.major_version - 44;
                match jdk {
                    8 | 11 | 17 | 21 => format!("JDK {jdk} (LTS)"),
                    _ => format!("JDK {jdk}"),
                }
            }
            _ => "unknown version".to_string(),
        }
    }

    /// Resolve a pool index, range-checked against the declared count.
    pub fn get_from_constant_pool(&self, index: u16) -> Result<&Constant<'a>, DecodeCause> {
        self.constant_pool.get(index)
    }

    /// Render the whole model as a javap-flavoured report: version lines,
    /// the indexed pool listing, the class declaration, then field and
    /// method listings with their attributes.
    ///
    /// Purely informational; never fails, even on fabricated indices (bad
    /// references render as `<invalid #n>`).
    pub fn to_pretty_fmt(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("magic: {:#010X}\n", self.magic));
        output.push_str(&format!("minor version: {}\n", self.minor_version));
        output.push_str(&format!(
            "major version: {} ({})\n",
            self.major_version,
            self.version_description()
        ));
        let flags: Vec<String> = self.access_flags.iter().map(String::from).collect();
        output.push_str(&format!("flags: {}\n", flags.join(" ")));
        output.push_str(&format!(
            "this_class: #{}\t// {}\n",
            self.this_class,
            self.constant_pool.label(self.this_class)
        ));
        if self.super_class == 0 {
            output.push_str("super_class: #0\n");
        } else {
            output.push_str(&format!(
                "super_class: #{}\t// {}\n",
                self.super_class,
                self.constant_pool.label(self.super_class)
            ));
        }
        output.push_str(&format!("Constant pool: size {}\n", self.constant_pool_count));
        for (index, constant) in self.constant_pool.entries().iter().enumerate() {
            if index == 0 {
                continue;
            }
            if let Constant::Unused = constant {
                continue;
            }
            output.push_str(&self.pool_line(index as u16, constant));
            output.push('\n');
        }
        if self.interfaces_count > 0 {
            let interfaces: Vec<String> = self
                .interfaces
                .iter()
                .map(|index| self.constant_pool.label(*index))
                .collect();
            output.push_str(&format!("interfaces: {}\n", interfaces.join(", ")));
        }
        output.push_str(&format!("{}\n", self.class_declaration()));
        for field in &self.fields {
            output.push_str(&format!("  {}\n", self.field_declaration(field)));
            output.push_str(&format!(
                "    descriptor: {}\n",
                self.constant_pool.label(field.descriptor_index)
            ));
            Self::push_attributes(&mut output, "    ", &field.attributes);
        }
        for method in &self.methods {
            output.push_str(&format!("  {}\n", self.method_declaration(method)));
            output.push_str(&format!(
                "    descriptor: {}\n",
                self.constant_pool.label(method.descriptor_index)
            ));
            Self::push_attributes(&mut output, "    ", &method.attributes);
        }
        output.push_str("}\n");
        Self::push_attributes(&mut output, "", &self.attributes);
        output
    }

    fn push_attributes(output: &mut String, indent: &str, attributes: &[AttributeInfo<'_>]) {
        for attribute in attributes {
            output.push_str(&format!(
                "{indent}{} (name #{}, {} bytes): {:#?}\n",
                attribute.name(),
                attribute.name_index(),
                attribute.length(),
                attribute
            ));
        }
    }

    fn pool_line(&self, index: u16, constant: &Constant<'a>) -> String {
        let pool = &self.constant_pool;
        let (operands, resolved) = match constant {
            Constant::Utf8(utf8) => (String::from(utf8), false),
            Constant::Integer(integer) => (format!("{}", integer.value), false),
            Constant::Float(float) => (format!("{}f", float.value), false),
            Constant::Long(long) => (format!("{}l", long.value), false),
            Constant::Double(double) => (format!("{}d", double.value), false),
            Constant::Class(class) => (format!("#{}", class.name_index), true),
            Constant::String(string) => (format!("#{}", string.string_index), true),
            Constant::Fieldref(r) => {
                (format!("#{}.#{}", r.class_index, r.name_and_type_index), true)
            }
            Constant::Methodref(r) => {
                (format!("#{}.#{}", r.class_index, r.name_and_type_index), true)
            }
            Constant::InterfaceMethodref(r) => {
                (format!("#{}.#{}", r.class_index, r.name_and_type_index), true)
            }
            Constant::NameAndType(nt) => {
                (format!("#{}:#{}", nt.name_index, nt.descriptor_index), true)
            }
            Constant::MethodHandle(handle) => (
                format!("{:?} #{}", handle.reference_kind, handle.reference_index),
                true,
            ),
            Constant::MethodType(method_type) => {
                (format!("#{}", method_type.descriptor_index), true)
            }
            Constant::Dynamic(dynamic) => (
                format!(
                    "#{}:#{}",
                    dynamic.bootstrap_method_attr_index, dynamic.name_and_type_index
                ),
                true,
            ),
            Constant::InvokeDynamic(invoke_dynamic) => (
                format!(
                    "#{}:#{}",
                    invoke_dynamic.bootstrap_method_attr_index,
                    invoke_dynamic.name_and_type_index
                ),
                true,
            ),
            Constant::Module(module) => (format!("#{}", module.name_index), true),
            Constant::Package(package) => (format!("#{}", package.name_index), true),
            Constant::Unused => (String::new(), false),
        };
        let mut line = format!("  #{index} = {:<19}{operands}", constant.tag_name());
        if resolved {
            line.push_str(&format!("\t// {}", pool.label(index)));
        }
        line
    }

    fn class_declaration(&self) -> String {
        let kind = if self.access_flags.contains(&ClassAccessFlags::AccInterface) {
            "interface"
        } else {
            "class"
        };
        let keywords: Vec<String> = self
            .access_flags
            .iter()
            .filter(|flag| {
                !matches!(
                    **flag,
                    ClassAccessFlags::AccSuper
                        | ClassAccessFlags::AccInterface
                        | ClassAccessFlags::AccSynthetic
                )
            })
            .map(String::from)
            .collect();
        let name = self.constant_pool.label(self.this_class);
        format!("{} {kind} {name} {{", keywords.join(" "))
            .trim_start()
            .to_string()
    }

    fn field_declaration(&self, field: &FieldInfo<'a>) -> String {
        let keywords: Vec<String> = field.access_flags.iter().map(String::from).collect();
        let descriptor = self.constant_pool.label(field.descriptor_index);
        let type_name = match FieldDescriptor::parse(&descriptor) {
            Some(parsed) => String::from(&parsed),
            None => descriptor,
        };
        let name = self.constant_pool.label(field.name_index);
        format!("{} {type_name} {name};", keywords.join(" "))
            .trim_start()
            .to_string()
    }

    fn method_declaration(&self, method: &MethodInfo<'a>) -> String {
        let keywords: Vec<String> = method
            .access_flags
            .iter()
            .filter(|flag| {
                !matches!(
                    **flag,
                    MethodAccessFlags::AccBridge | MethodAccessFlags::AccSynthetic
                )
            })
            .map(String::from)
            .collect();
        let keywords = keywords.join(" ");
        let name = self.constant_pool.label(method.name_index);
        if name == "<clinit>" {
            return "static {};".to_string();
        }
        let descriptor = self.constant_pool.label(method.descriptor_index);
        let Some(parsed) = MethodDescriptor::parse(&descriptor) else {
            return format!("{keywords} {name}{descriptor};").trim_start().to_string();
        };
        let params: Vec<String> = parsed
            .iter()
            .filter_map(|part| match part {
                MethodDescriptor::ParameterDescriptor(fd) => Some(String::from(fd)),
                _ => None,
            })
            .collect();
        let params = params.join(", ");
        if name == "<init>" {
            let this_name = self.constant_pool.label(self.this_class);
            return format!("{keywords} {this_name}({params});")
                .trim_start()
                .to_string();
        }
        let return_type = parsed
            .iter()
            .find_map(|part| match part {
                MethodDescriptor::ReturnDescriptor(fd) => Some(String::from(fd)),
                MethodDescriptor::VoidReturn => Some("void".to_string()),
                _ => None,
            })
            .unwrap_or_else(|| "void".to_string());
        format!("{keywords} {return_type} {name}({params});")
            .trim_start()
            .to_string()
    }
}
