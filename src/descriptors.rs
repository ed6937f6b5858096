//! Source-level spellings of field and method descriptors, used by the
//! rendered report. The model itself keeps raw descriptor strings; parsing
//! here is best-effort and the renderer falls back to the raw string when a
//! descriptor does not parse.

/// [Field Descriptors](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=86)
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDescriptor {
    /// A primitive type, e.g. `I` → `int`.
    BaseType(String),
    /// `Lcom/example/Thing;` → `com/example/Thing`.
    ObjectType(String),
    /// One `[` level around a component type.
    ArrayType(Box<FieldDescriptor>),
}

impl FieldDescriptor {
    /// Parse a descriptor string holding exactly one field type.
    pub fn parse(descriptor: &str) -> Option<FieldDescriptor> {
        let bytes = descriptor.as_bytes();
        let mut pos = 0;
        let parsed = parse_one(bytes, &mut pos)?;
        if pos == bytes.len() {
            Some(parsed)
        } else {
            None
        }
    }
}

impl From<&FieldDescriptor> for String {
    fn from(descriptor: &FieldDescriptor) -> Self {
        match descriptor {
            FieldDescriptor::BaseType(name) => name.clone(),
            FieldDescriptor::ObjectType(name) => name.clone(),
            FieldDescriptor::ArrayType(component) => {
                format!("{}[]", String::from(component.as_ref()))
            }
        }
    }
}

/// [Method Descriptors](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=87)
#[derive(Debug, Clone, PartialEq)]
pub enum MethodDescriptor {
    ParameterDescriptor(FieldDescriptor),
    ReturnDescriptor(FieldDescriptor),
    VoidReturn,
}

impl MethodDescriptor {
    /// Parse `(<params>)<return>` into the parameter types followed by the
    /// return type.
    pub fn parse(descriptor: &str) -> Option<Vec<MethodDescriptor>> {
        let bytes = descriptor.as_bytes();
        if bytes.first() != Some(&b'(') {
            return None;
        }
        let mut pos = 1;
        let mut descriptors = vec![];
        while *bytes.get(pos)? != b')' {
            descriptors.push(MethodDescriptor::ParameterDescriptor(parse_one(
                bytes, &mut pos,
            )?));
        }
        pos += 1;
        if bytes.get(pos) == Some(&b'V') {
            descriptors.push(MethodDescriptor::VoidReturn);
            pos += 1;
        } else {
            descriptors.push(MethodDescriptor::ReturnDescriptor(parse_one(
                bytes, &mut pos,
            )?));
        }
        if pos == bytes.len() {
            Some(descriptors)
        } else {
            None
        }
    }
}

impl From<&MethodDescriptor> for String {
    fn from(descriptor: &MethodDescriptor) -> Self {
        match descriptor {
            MethodDescriptor::ParameterDescriptor(fd) => fd.into(),
            MethodDescriptor::ReturnDescriptor(fd) => fd.into(),
            MethodDescriptor::VoidReturn => "void".into(),
        }
    }
}

fn parse_one(bytes: &[u8], pos: &mut usize) -> Option<FieldDescriptor> {
    match *bytes.get(*pos)? {
        b'[' => {
            *pos += 1;
            Some(FieldDescriptor::ArrayType(Box::new(parse_one(bytes, pos)?)))
        }
        b'L' => {
            let start = *pos + 1;
            let end = start + bytes[start..].iter().position(|b| *b == b';')?;
            *pos = end + 1;
            Some(FieldDescriptor::ObjectType(
                String::from_utf8_lossy(&bytes[start..end]).into_owned(),
            ))
        }
        base => {
            let name = match base {
                b'B' => "byte",
                b'C' => "char",
                b'D' => "double",
                b'F' => "float",
                b'I' => "int",
                b'J' => "long",
                b'S' => "short",
                b'Z' => "boolean",
                _ => return None,
            };
            *pos += 1;
            Some(FieldDescriptor::BaseType(name.into()))
        }
    }
}
