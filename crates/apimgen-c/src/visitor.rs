//! AST visitor for extracting header declarations
//!
//! Walks the tree-sitter AST of a prepared header and collects every
//! function-shaped declaration and function typedef as a [`Declaration`]
//! record with full type and argument information. Everything else
//! (variables, struct bodies, forward declarations) is skipped.

use apimgen_api::{Argument, Declaration, ExtractError, ExtractResult, Role, TypeRef};
use std::path::Path;
use tree_sitter::Node;

pub struct HeaderVisitor<'a> {
    pub source: &'a [u8],
    pub path: &'a Path,
    pub decls: Vec<Declaration>,
}

impl<'a> HeaderVisitor<'a> {
    pub fn new(source: &'a [u8], path: &'a Path) -> Self {
        Self {
            source,
            path,
            decls: Vec::new(),
        }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").trim().to_string()
    }

    pub fn visit_node(&mut self, node: Node) -> ExtractResult<()> {
        match node.kind() {
            "declaration" => self.visit_declaration(node)?,
            "type_definition" => self.visit_typedef(node)?,
            _ => {
                // Recurse so declarations inside extern "C" blocks are seen
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    self.visit_node(child)?;
                }
            }
        }
        Ok(())
    }

    fn visit_declaration(&mut self, node: Node) -> ExtractResult<()> {
        let Some(base) = node.child_by_field_name("type") else {
            return Ok(());
        };
        let base = self.node_text(base);

        let mut cursor = node.walk();
        for declarator in node.children_by_field_name("declarator", &mut cursor) {
            if let Some((func, ret_depth)) = find_function_declarator(declarator) {
                let decl = self.build_declaration(
                    node,
                    func,
                    TypeRef::new(base.clone(), ret_depth),
                    Role::Singleton,
                )?;
                self.decls.push(decl);
            }
        }
        Ok(())
    }

    fn visit_typedef(&mut self, node: Node) -> ExtractResult<()> {
        let Some(base) = node.child_by_field_name("type") else {
            return Ok(());
        };
        let base = self.node_text(base);

        let mut cursor = node.walk();
        for declarator in node.children_by_field_name("declarator", &mut cursor) {
            if let Some((func, ret_depth)) = find_function_declarator(declarator) {
                let decl = self.build_declaration(
                    node,
                    func,
                    TypeRef::new(base.clone(), ret_depth),
                    Role::Callback,
                )?;
                self.decls.push(decl);
            }
        }
        Ok(())
    }

    fn build_declaration(
        &self,
        node: Node,
        func: Node,
        return_type: TypeRef,
        role: Role,
    ) -> ExtractResult<Declaration> {
        let name = func
            .child_by_field_name("declarator")
            .map(|d| self.extract_identifier(d))
            .unwrap_or_default();

        let args = match func.child_by_field_name("parameters") {
            Some(params) => self.extract_arguments(params)?,
            None => Vec::new(),
        };

        Ok(Declaration::new(
            name,
            return_type,
            args,
            self.path,
            node.start_position().row + 1,
            role,
        ))
    }

    fn extract_identifier(&self, node: Node) -> String {
        match node.kind() {
            "identifier" | "type_identifier" | "field_identifier" => self.node_text(node),
            _ => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    let id = self.extract_identifier(child);
                    if !id.is_empty() {
                        return id;
                    }
                }
                String::new()
            }
        }
    }

    fn extract_arguments(&self, node: Node) -> ExtractResult<Vec<Argument>> {
        let mut args = Vec::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "parameter_declaration" => args.push(self.extract_parameter(child)?),
                "variadic_parameter" => args.push(Argument::ellipsis()),
                "(" | ")" | "," | "comment" => {}
                other => {
                    return Err(ExtractError::UnsupportedParameter(
                        self.path.to_path_buf(),
                        child.start_position().row + 1,
                        other.to_string(),
                    ))
                }
            }
        }

        Ok(args)
    }

    fn extract_parameter(&self, node: Node) -> ExtractResult<Argument> {
        let base = node
            .child_by_field_name("type")
            .map(|t| self.node_text(t))
            .unwrap_or_default();

        let (name, depth) = match node.child_by_field_name("declarator") {
            Some(declarator) => self.declarator_info(declarator)?,
            None => (String::new(), 0),
        };

        Ok(Argument::new(name, TypeRef::new(base, depth)))
    }

    /// Name and pointer depth of a parameter declarator. Unmodeled shapes
    /// (arrays, raw function pointers) are fatal rather than silently
    /// dropped.
    fn declarator_info(&self, node: Node) -> ExtractResult<(String, u8)> {
        match node.kind() {
            "identifier" | "field_identifier" => Ok((self.node_text(node), 0)),
            "pointer_declarator" | "abstract_pointer_declarator" => {
                let mut name = String::new();
                let mut depth = 0u8;
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    match child.kind() {
                        "*" => depth = depth.saturating_add(1),
                        "type_qualifier" => {}
                        _ => {
                            let (inner_name, inner_depth) = self.declarator_info(child)?;
                            name = inner_name;
                            depth = depth.saturating_add(inner_depth);
                        }
                    }
                }
                Ok((name, depth))
            }
            other => Err(ExtractError::UnsupportedParameter(
                self.path.to_path_buf(),
                node.start_position().row + 1,
                other.to_string(),
            )),
        }
    }
}

/// Descend a declarator chain to the function declarator, counting the
/// pointer layers above it into the return type's indirection
fn find_function_declarator(node: Node) -> Option<(Node, u8)> {
    let mut current = node;
    let mut depth = 0u8;
    loop {
        match current.kind() {
            "function_declarator" => return Some((current, depth)),
            "pointer_declarator" => {
                depth = depth.saturating_add(1);
                current = current.child_by_field_name("declarator")?;
            }
            "parenthesized_declarator" => {
                current = current.named_child(0)?;
            }
            _ => return None,
        }
    }
}
