use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Suffix marking a C typedef as an opaque handle type (`zobj_t`)
pub const HANDLE_SUFFIX: &str = "_t";

/// Accepted spellings of the receiver parameter name
pub const SELF_NAMES: [&str; 2] = ["self", "self_p"];

/// A C type stripped down to its base name and pointer indirection count
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Innermost named type (`int`, `char`, `zobj_t`, ...)
    pub base: String,

    /// Number of pointer layers stripped from the declared type
    pub ptr_depth: u8,
}

impl TypeRef {
    pub fn new(base: impl Into<String>, ptr_depth: u8) -> Self {
        Self {
            base: base.into(),
            ptr_depth,
        }
    }

    /// The `(void)` placeholder used for empty parameter lists
    pub fn void() -> Self {
        Self::new("void", 0)
    }

    /// The reserved pseudo-type for a variadic ellipsis parameter
    pub fn ellipsis() -> Self {
        Self::new("...", 0)
    }

    /// Whether the base name follows the opaque-handle naming convention
    pub fn is_handle(&self) -> bool {
        self.base.ends_with(HANDLE_SUFFIX)
    }

    pub fn is_void(&self) -> bool {
        self.base == "void" && self.ptr_depth == 0
    }

    pub fn is_ellipsis(&self) -> bool {
        self.base == "..."
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, "*".repeat(self.ptr_depth as usize))
    }
}

/// A single declared parameter, in source order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    /// Parameter name; empty for unnamed and variadic parameters
    pub name: String,

    /// Declared type
    pub ty: TypeRef,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// The `(void)` placeholder argument for a declaration with no parameters
    pub fn void() -> Self {
        Self::new("", TypeRef::void())
    }

    /// The reserved marker argument for a variadic ellipsis
    pub fn ellipsis() -> Self {
        Self::new("", TypeRef::ellipsis())
    }

    /// Whether this argument is the conventional receiver (`self`/`self_p`
    /// named, handle-typed, single indirection)
    pub fn is_self_receiver(&self) -> bool {
        SELF_NAMES.contains(&self.name.as_str()) && self.ty.is_handle() && self.ty.ptr_depth == 1
    }

    /// Whether the name alone matches a receiver spelling, regardless of type
    pub fn is_self_named(&self) -> bool {
        SELF_NAMES.contains(&self.name.as_str())
    }
}

/// Semantic role of a declaration within its class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Constructor,
    Destructor,
    Method,
    Singleton,
    Callback,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Role::Constructor => "constructor",
            Role::Destructor => "destructor",
            Role::Method => "method",
            Role::Singleton => "singleton",
            Role::Callback => "callback_type",
        };
        f.write_str(tag)
    }
}

/// One function-shaped declaration or function typedef from a header
///
/// Built once by the extractor; only `role` is reassigned afterwards, exactly
/// once, when the classifier refines the provisional guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Declared name (`zobj_new`, `zobj_size`, ...)
    pub name: String,

    /// Declared return type; `void` for callbacks without one
    pub return_type: TypeRef,

    /// Parameters in source order; never empty, since a declaration without
    /// parameters carries the single `(void)` placeholder
    pub args: Vec<Argument>,

    /// Header file the declaration was read from
    pub source_file: PathBuf,

    /// 1-based line of the declaration in that file
    pub source_line: usize,

    /// Semantic role; provisional until classified
    pub role: Role,
}

impl Declaration {
    pub fn new(
        name: impl Into<String>,
        return_type: TypeRef,
        args: Vec<Argument>,
        source_file: impl Into<PathBuf>,
        source_line: usize,
        role: Role,
    ) -> Self {
        let mut args = args;
        if args.is_empty() {
            args.push(Argument::void());
        }
        Self {
            name: name.into(),
            return_type,
            args,
            source_file: source_file.into(),
            source_line,
            role,
        }
    }

    /// Class key: the name up to (excluding) its last underscore segment
    pub fn class_key(&self) -> Option<&str> {
        self.name.rfind('_').map(|idx| &self.name[..idx])
    }

    /// Name with the `<class>_` prefix stripped
    pub fn short_name<'a>(&'a self, class: &str) -> &'a str {
        self.name
            .strip_prefix(class)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typeref_display() {
        assert_eq!(TypeRef::new("zobj_t", 1).to_string(), "zobj_t*");
        assert_eq!(TypeRef::new("int", 0).to_string(), "int");
        assert_eq!(TypeRef::new("zobj_t", 2).to_string(), "zobj_t**");
    }

    #[test]
    fn test_handle_detection() {
        assert!(TypeRef::new("zobj_t", 1).is_handle());
        assert!(!TypeRef::new("int", 0).is_handle());
        assert!(!TypeRef::new("char", 1).is_handle());
    }

    #[test]
    fn test_self_receiver() {
        let arg = Argument::new("self", TypeRef::new("zobj_t", 1));
        assert!(arg.is_self_receiver());

        // Wrong indirection is not a receiver
        let arg = Argument::new("self_p", TypeRef::new("zobj_t", 2));
        assert!(!arg.is_self_receiver());
        assert!(arg.is_self_named());

        // Wrong type is not a receiver
        let arg = Argument::new("self", TypeRef::new("int", 1));
        assert!(!arg.is_self_receiver());

        // Wrong name is not a receiver
        let arg = Argument::new("this", TypeRef::new("zobj_t", 1));
        assert!(!arg.is_self_receiver());
    }

    #[test]
    fn test_declaration_empty_args_get_void() {
        let decl = Declaration::new(
            "zobj_new",
            TypeRef::new("zobj_t", 1),
            Vec::new(),
            "include/zobj.h",
            10,
            Role::Singleton,
        );
        assert_eq!(decl.args.len(), 1);
        assert!(decl.args[0].ty.is_void());
    }

    #[test]
    fn test_class_key() {
        let decl = Declaration::new(
            "zobj_set_verbose",
            TypeRef::void(),
            Vec::new(),
            "include/zobj.h",
            1,
            Role::Singleton,
        );
        assert_eq!(decl.class_key(), Some("zobj_set"));

        let decl = Declaration::new(
            "main",
            TypeRef::new("int", 0),
            Vec::new(),
            "include/zobj.h",
            1,
            Role::Singleton,
        );
        assert_eq!(decl.class_key(), None);
    }

    #[test]
    fn test_short_name() {
        let decl = Declaration::new(
            "zobj_size",
            TypeRef::new("int", 0),
            Vec::new(),
            "include/zobj.h",
            1,
            Role::Method,
        );
        assert_eq!(decl.short_name("zobj"), "size");
        // Unrelated prefix stays untouched
        assert_eq!(decl.short_name("other"), "zobj_size");
    }

    #[test]
    fn test_role_tags() {
        assert_eq!(Role::Method.to_string(), "method");
        assert_eq!(Role::Callback.to_string(), "callback_type");
    }

    #[test]
    fn test_declaration_serde_round_trip() {
        let decl = Declaration::new(
            "zobj_recv",
            TypeRef::new("zmsg_t", 1),
            vec![
                Argument::new("self", TypeRef::new("zobj_t", 1)),
                Argument::new("timeout", TypeRef::new("int", 0)),
            ],
            "include/zobj.h",
            42,
            Role::Method,
        );
        let json = serde_json::to_string(&decl).unwrap();
        let back: Declaration = serde_json::from_str(&json).unwrap();
        assert_eq!(decl, back);
    }
}
