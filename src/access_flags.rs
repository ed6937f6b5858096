#[repr(u16)]
#[derive(Debug, Clone, PartialEq, Eq)]
/// [Class Access Flags](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=85)
pub enum ClassAccessFlags {
    /// Declared public; may be accessed from outside its package.
    AccPublic = 0x0001,
    /// Declared final; no subclasses allowed.
    AccFinal = 0x0010,
    /// Treat superclass methods specially when invoked by\
    /// the invokespecial instruction.
    AccSuper = 0x0020,
    /// Is an interface, not a class.
    AccInterface = 0x0200,
    /// Declared abstract; must not be instantiated.
    AccAbstract = 0x0400,
    /// Declared synthetic; not present in the source code.
    AccSynthetic = 0x1000,
    /// Declared as an annotation interface.
    AccAnnotation = 0x2000,
    /// Declared as an enum class.
    AccEnum = 0x4000,
    /// Is a module, not a class or interface.
    AccModule = 0x8000,
}

impl ClassAccessFlags {
    pub fn from_u16(value: u16) -> Vec<Self> {
        let mut flags = vec![];
        if value & ClassAccessFlags::AccPublic as u16 != 0 {
            flags.push(ClassAccessFlags::AccPublic);
        }
        if value & ClassAccessFlags::AccFinal as u16 != 0 {
            flags.push(ClassAccessFlags::AccFinal);
        }
        if value & ClassAccessFlags::AccSuper as u16 != 0 {
            flags.push(ClassAccessFlags::AccSuper);
        }
        if value & ClassAccessFlags::AccInterface as u16 != 0 {
            flags.push(ClassAccessFlags::AccInterface);
        }
        if value & ClassAccessFlags::AccAbstract as u16 != 0 {
            flags.push(ClassAccessFlags::AccAbstract);
        }
        if value & ClassAccessFlags::AccSynthetic as u16 != 0 {
            flags.push(ClassAccessFlags::AccSynthetic);
        }
        if value & ClassAccessFlags::AccAnnotation as u16 != 0 {
            flags.push(ClassAccessFlags::AccAnnotation);
        }
        if value & ClassAccessFlags::AccEnum as u16 != 0 {
            flags.push(ClassAccessFlags::AccEnum);
        }
        if value & ClassAccessFlags::AccModule as u16 != 0 {
            flags.push(ClassAccessFlags::AccModule);
        }
        flags
    }
}

impl From<&ClassAccessFlags> for String {
    fn from(flag: &ClassAccessFlags) -> Self {
        match flag {
            ClassAccessFlags::AccPublic => "public",
            ClassAccessFlags::AccFinal => "final",
            ClassAccessFlags::AccSuper => "super",
            ClassAccessFlags::AccInterface => "interface",
            ClassAccessFlags::AccAbstract => "abstract",
            ClassAccessFlags::AccSynthetic => "synthetic",
            ClassAccessFlags::AccAnnotation => "annotation",
            ClassAccessFlags::AccEnum => "enum",
            ClassAccessFlags::AccModule => "module",
        }
        .into()
    }
}

#[repr(u16)]
#[derive(Debug, Clone, PartialEq, Eq)]
/// [Field Access Flags](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=108)
pub enum FieldAccessFlags {
    /// Declared public; may be accessed from outside its package.
    AccPublic = 0x0001,
    /// Declared private; accessible only within the
    /// defining class and other classes belonging to the same
    /// nest (§5.4.4).
    AccPrivate = 0x0002,
    /// Declared protected; may be accessed within
    /// subclasses.
    AccProtected = 0x0004,
    /// Declared static.
    AccStatic = 0x0008,
    /// Declared final; never directly assigned to after
    /// object construction.
    AccFinal = 0x0010,
    /// Declared volatile; cannot be cached.
    AccVolatile = 0x0040,
    /// Declared transient; not written or read by a
    /// persistent object manager.
    AccTransient = 0x0080,
    /// Declared synthetic; not present in the source code.
    AccSynthetic = 0x1000,
    /// Declared as an element of an enum class.
    AccEnum = 0x4000,
}

impl FieldAccessFlags {
    pub fn from_u16(value: u16) -> Vec<Self> {
        let mut flags = vec![];
        if value & FieldAccessFlags::AccPublic as u16 != 0 {
            flags.push(FieldAccessFlags::AccPublic);
        }
        if value & FieldAccessFlags::AccPrivate as u16 != 0 {
            flags.push(FieldAccessFlags::AccPrivate);
        }
        if value & FieldAccessFlags::AccProtected as u16 != 0 {
            flags.push(FieldAccessFlags::AccProtected);
        }
        if value & FieldAccessFlags::AccStatic as u16 != 0 {
            flags.push(FieldAccessFlags::AccStatic);
        }
        if value & FieldAccessFlags::AccFinal as u16 != 0 {
            flags.push(FieldAccessFlags::AccFinal);
        }
        if value & FieldAccessFlags::AccVolatile as u16 != 0 {
            flags.push(FieldAccessFlags::AccVolatile);
        }
        if value & FieldAccessFlags::AccTransient as u16 != 0 {
            flags.push(FieldAccessFlags::AccTransient);
        }
        if value & FieldAccessFlags::AccSynthetic as u16 != 0 {
            flags.push(FieldAccessFlags::AccSynthetic);
        }
        if value & FieldAccessFlags::AccEnum as u16 != 0 {
            flags.push(FieldAccessFlags::AccEnum);
        }
        flags
    }
}

impl From<&FieldAccessFlags> for String {
    fn from(flag: &FieldAccessFlags) -> Self {
        match flag {
            FieldAccessFlags::AccPublic => "public",
            FieldAccessFlags::AccPrivate => "private",
            FieldAccessFlags::AccProtected => "protected",
            FieldAccessFlags::AccStatic => "static",
            FieldAccessFlags::AccFinal => "final",
            FieldAccessFlags::AccVolatile => "volatile",
            FieldAccessFlags::AccTransient => "transient",
            FieldAccessFlags::AccSynthetic => "synthetic",
            FieldAccessFlags::AccEnum => "enum",
        }
        .into()
    }
}

#[repr(u16)]
#[derive(Debug, Clone, PartialEq, Eq)]
/// [Method Access Flags](https://docs.oracle.com/javase/specs/jvms/se17/jvms17.pdf#page=112)
pub enum MethodAccessFlags {
    /// Declared public; may be accessed from outside its package.
    AccPublic = 0x0001,
    /// Declared private; accessible only within the
    /// defining class and other classes belonging to the same
    /// nest (§5.4.4).
    AccPrivate = 0x0002,
    /// Declared protected; may be accessed within
    /// subclasses.
    AccProtected = 0x0004,
    /// Declared static.
    AccStatic = 0x0008,
    /// Declared final; must not be overridden.
    AccFinal = 0x0010,
    /// Declared synchronized; invocation is wrapped
    /// by a monitor use.
    AccSynchronized = 0x0020,
    /// A bridge method, generated by the compiler.
    AccBridge = 0x0040,
    /// Declared with variable number of arguments.
    AccVarArgs = 0x0080,
    /// Declared native; implemented in a language other
    /// than the Java programming language.
    AccNative = 0x0100,
    /// Declared abstract; no implementation is provided.
    AccAbstract = 0x0400,
    /// In a class file whose major version number is at
    /// least 46 and at most 60: Declared strictfp.
    AccStrict = 0x0800,
    /// Declared synthetic; not present in the source code.
    AccSynthetic = 0x1000,
}

impl MethodAccessFlags {
    pub fn from_u16(value: u16) -> Vec<Self> {
        let mut flags = vec![];
        if value & MethodAccessFlags::AccPublic as u16 != 0 {
            flags.push(MethodAccessFlags::AccPublic);
        }
        if value & MethodAccessFlags::AccPrivate as u16 != 0 {
            flags.push(MethodAccessFlags::AccPrivate);
        }
        if value & MethodAccessFlags::AccProtected as u16 != 0 {
            flags.push(MethodAccessFlags::AccProtected);
        }
        if value & MethodAccessFlags::AccStatic as u16 != 0 {
            flags.push(MethodAccessFlags::AccStatic);
        }
        if value & MethodAccessFlags::AccFinal as u16 != 0 {
            flags.push(MethodAccessFlags::AccFinal);
        }
        if value & MethodAccessFlags::AccSynchronized as u16 != 0 {
            flags.push(MethodAccessFlags::AccSynchronized);
        }
        if value & MethodAccessFlags::AccBridge as u16 != 0 {
            flags.push(MethodAccessFlags::AccBridge);
        }
        if value & MethodAccessFlags::AccVarArgs as u16 != 0 {
            flags.push(MethodAccessFlags::AccVarArgs);
        }
        if value & MethodAccessFlags::AccNative as u16 != 0 {
            flags.push(MethodAccessFlags::AccNative);
        }
        if value & MethodAccessFlags::AccAbstract as u16 != 0 {
            flags.push(MethodAccessFlags::AccAbstract);
        }
        if value & MethodAccessFlags::AccStrict as u16 != 0 {
            flags.push(MethodAccessFlags::AccStrict);
        }
        if value & MethodAccessFlags::AccSynthetic as u16 != 0 {
            flags.push(MethodAccessFlags::AccSynthetic);
        }
        flags
    }
}

impl From<&MethodAccessFlags> for String {
    fn from(flag: &MethodAccessFlags) -> Self {
        match flag {
            MethodAccessFlags::AccPublic => "public",
            MethodAccessFlags::AccPrivate => "private",
            MethodAccessFlags::AccProtected => "protected",
            MethodAccessFlags::AccStatic => "static",
            MethodAccessFlags::AccFinal => "final",
            MethodAccessFlags::AccSynchronized => "synchronized",
            MethodAccessFlags::AccBridge => "bridge",
            MethodAccessFlags::AccVarArgs => "varargs",
            MethodAccessFlags::AccNative => "native",
            MethodAccessFlags::AccAbstract => "abstract",
            MethodAccessFlags::AccStrict => "strictfp",
            MethodAccessFlags::AccSynthetic => "synthetic",
        }
        .into()
    }
}

#[repr(u16)]
#[derive(Debug, Clone, PartialEq, Eq)]
/// Flags of a single `MethodParameters` entry.
pub enum ParameterAccessFlags {
    /// Declared final; never assigned to after construction.
    AccFinal = 0x0010,
    /// Not explicitly or implicitly declared in source code.
    AccSynthetic = 0x1000,
    /// Implicitly declared in source code (e.g. the parameter of a
    /// compact record constructor).
    AccMandated = 0x8000,
}

impl ParameterAccessFlags {
    pub fn from_u16(value: u16) -> Vec<Self> {
        let mut flags = vec![];
        if value & ParameterAccessFlags::AccFinal as u16 != 0 {
            flags.push(ParameterAccessFlags::AccFinal);
        }
        if value & ParameterAccessFlags::AccSynthetic as u16 != 0 {
            flags.push(ParameterAccessFlags::AccSynthetic);
        }
        if value & ParameterAccessFlags::AccMandated as u16 != 0 {
            flags.push(ParameterAccessFlags::AccMandated);
        }
        flags
    }
}

/// Flag sets used by the `Module` attribute (§4.7.25).
pub mod module_flags {
    #[repr(u16)]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ModuleAccessFlags {
        /// Declared open; all of its packages are reflectively accessible.
        AccOpen = 0x0020,
        /// Not explicitly or implicitly declared.
        AccSynthetic = 0x1000,
        /// Implicitly declared.
        AccMandated = 0x8000,
    }

    impl ModuleAccessFlags {
        pub fn from_u16(value: u16) -> Vec<Self> {
            let mut flags = vec![];
            if value & ModuleAccessFlags::AccOpen as u16 != 0 {
                flags.push(ModuleAccessFlags::AccOpen);
            }
            if value & ModuleAccessFlags::AccSynthetic as u16 != 0 {
                flags.push(ModuleAccessFlags::AccSynthetic);
            }
            if value & ModuleAccessFlags::AccMandated as u16 != 0 {
                flags.push(ModuleAccessFlags::AccMandated);
            }
            flags
        }
    }

    #[repr(u16)]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RequiresAccessFlags {
        /// Any module depending on the current module implicitly also
        /// depends on this one.
        AccTransitive = 0x0020,
        /// Mandatory at compile time, optional at run time.
        AccStaticPhase = 0x0040,
        /// Not explicitly or implicitly declared.
        AccSynthetic = 0x1000,
        /// Implicitly declared.
        AccMandated = 0x8000,
    }

    impl RequiresAccessFlags {
        pub fn from_u16(value: u16) -> Vec<Self> {
            let mut flags = vec![];
            if value & RequiresAccessFlags::AccTransitive as u16 != 0 {
                flags.push(RequiresAccessFlags::AccTransitive);
            }
            if value & RequiresAccessFlags::AccStaticPhase as u16 != 0 {
                flags.push(RequiresAccessFlags::AccStaticPhase);
            }
            if value & RequiresAccessFlags::AccSynthetic as u16 != 0 {
                flags.push(RequiresAccessFlags::AccSynthetic);
            }
            if value & RequiresAccessFlags::AccMandated as u16 != 0 {
                flags.push(RequiresAccessFlags::AccMandated);
            }
            flags
        }
    }

    #[repr(u16)]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ExportsAccessFlags {
        /// Not explicitly or implicitly declared.
        AccSynthetic = 0x1000,
        /// Implicitly declared.
        AccMandated = 0x8000,
    }

    impl ExportsAccessFlags {
        pub fn from_u16(value: u16) -> Vec<Self> {
            let mut flags = vec![];
            if value & ExportsAccessFlags::AccSynthetic as u16 != 0 {
                flags.push(ExportsAccessFlags::AccSynthetic);
            }
            if value & ExportsAccessFlags::AccMandated as u16 != 0 {
                flags.push(ExportsAccessFlags::AccMandated);
            }
            flags
        }
    }

    #[repr(u16)]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum OpensAccessFlags {
        /// Not explicitly or implicitly declared.
        AccSynthetic = 0x1000,
        /// Implicitly declared.
        AccMandated = 0x8000,
    }

    impl OpensAccessFlags {
        pub fn from_u16(value: u16) -> Vec<Self> {
            let mut flags = vec![];
            if value & OpensAccessFlags::AccSynthetic as u16 != 0 {
                flags.push(OpensAccessFlags::AccSynthetic);
            }
            if value & OpensAccessFlags::AccMandated as u16 != 0 {
                flags.push(OpensAccessFlags::AccMandated);
            }
            flags
        }
    }
}
