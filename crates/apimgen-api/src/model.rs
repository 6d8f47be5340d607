use crate::decl::Declaration;
use crate::docs::MacroConstant;
use serde::{Deserialize, Serialize};

/// Per-class grouping of declarations and constants, assembled right before
/// emission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    /// Class name inferred from the declaration prefix (`zobj`)
    pub class_name: String,

    /// Constants scanned from the class's own header, textual order
    pub constants: Vec<MacroConstant>,

    /// The `<class>_new` declaration, when present
    pub constructor: Option<Declaration>,

    /// The `<class>_destroy` declaration, when present
    pub destructor: Option<Declaration>,

    /// Remaining methods, singletons and callbacks in source order
    pub entries: Vec<Declaration>,
}

impl ClassModel {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    /// Slot a declaration into the model, pulling the conventionally-named
    /// constructor and destructor out of line and refining their roles
    pub fn push(&mut self, mut decl: Declaration) {
        if decl.name == format!("{}_new", self.class_name) {
            decl.role = crate::decl::Role::Constructor;
            self.constructor = Some(decl);
        } else if decl.name == format!("{}_destroy", self.class_name) {
            decl.role = crate::decl::Role::Destructor;
            self.destructor = Some(decl);
        } else {
            self.entries.push(decl);
        }
    }
}
