//! API model document emitter
//!
//! Renders one class's declarations, constants and comments into the XML
//! document the binding generator consumes. Pure: returns the document text,
//! leaving file writing to the caller.

use crate::mapper::map_type;
use apimgen_api::{Argument, ClassModel, Declaration, HeaderDocs, MacroConstant, Role};

/// Render a class model into its XML document
pub fn emit(model: &ClassModel, docs: &HeaderDocs) -> String {
    let mut out = String::new();

    out.push_str("<!--\n    This model defines a public API for binding.\n-->\n");
    out.push_str(&format!(
        "<class name = \"{}\" >\n",
        escape_attr(&model.class_name)
    ));
    out.push_str("\n    <include filename = \"../license.xml\" />\n");

    for constant in &model.constants {
        out.push('\n');
        out.push_str(&render_constant(constant, &model.class_name));
    }

    if let Some(ctor) = &model.constructor {
        out.push('\n');
        out.push_str(&render_constructor(ctor, docs));
    }

    if model.destructor.is_some() {
        out.push_str("\n    <destructor />\n");
    }

    for entry in &model.entries {
        out.push('\n');
        out.push_str(&render_entry(entry, &model.class_name, docs));
    }

    out.push_str("</class>\n");
    out
}

fn render_constant(constant: &MacroConstant, class: &str) -> String {
    let prefix = format!("{}_", class.to_uppercase());
    let name = constant
        .name
        .strip_prefix(&prefix)
        .unwrap_or(&constant.name)
        .to_lowercase();

    if constant.comment.is_empty() {
        format!(
            "    <constant name = \"{}\" value = \"{}\" />\n",
            escape_attr(&name),
            escape_attr(&constant.value)
        )
    } else {
        format!(
            "    <constant name = \"{}\" value = \"{}\">{}</constant>\n",
            escape_attr(&name),
            escape_attr(&constant.value),
            escape_text(&constant.comment)
        )
    }
}

fn render_constructor(decl: &Declaration, docs: &HeaderDocs) -> String {
    let mut out = String::from("    <constructor>\n");
    if let Some(block) = docs.comment_for(decl.source_line) {
        out.push_str(&render_text(&block.text));
    }
    for arg in emittable_args(decl) {
        out.push_str(&render_argument(arg));
    }
    out.push_str("    </constructor>\n");
    out
}

fn render_entry(decl: &Declaration, class: &str, docs: &HeaderDocs) -> String {
    let (tag, singleton) = match decl.role {
        Role::Callback => ("callback_type", false),
        Role::Singleton => ("method", true),
        _ => ("method", false),
    };
    let singleton_attr = if singleton { " singleton = \"1\"" } else { "" };

    let mut out = format!(
        "    <{tag} name = \"{}\"{singleton_attr}>\n",
        escape_attr(decl.short_name(class))
    );
    if let Some(block) = docs.comment_for(decl.source_line) {
        out.push_str(&render_text(&block.text));
    }
    for arg in emittable_args(decl) {
        out.push_str(&render_argument(arg));
    }
    if decl.return_type.base != "void" {
        out.push_str(&format!(
            "        <return type = \"{}\" />\n",
            escape_attr(&map_type(&decl.return_type))
        ));
    }
    out.push_str(&format!("    </{tag}>\n"));
    out
}

/// Arguments that appear in the document: receivers, the `(void)`
/// placeholder and the variadic marker carry no bindable value
fn emittable_args(decl: &Declaration) -> impl Iterator<Item = &Argument> {
    decl.args
        .iter()
        .filter(|arg| !arg.is_self_named() && !arg.ty.is_void() && !arg.ty.is_ellipsis())
}

fn render_argument(arg: &Argument) -> String {
    let byref = if arg.ty.ptr_depth == 2 {
        " by_reference = \"1\""
    } else {
        ""
    };
    format!(
        "        <argument name = \"{}\" type = \"{}\"{byref} />\n",
        escape_attr(&arg.name),
        escape_attr(&map_type(&arg.ty))
    )
}

fn render_text(text: &str) -> String {
    text.lines()
        .map(|line| format!("        {}\n", escape_text(line)))
        .collect()
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
