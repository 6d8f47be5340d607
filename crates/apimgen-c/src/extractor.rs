//! Declaration extraction driver
//!
//! Parses one prepared header with the tree-sitter C front-end and hands the
//! tree to the visitor. Parsing is strict: a header that does not parse
//! cleanly after preparation aborts the run rather than producing a partial
//! model.

use crate::preprocessor::{self, HeaderUnit};
use crate::visitor::HeaderVisitor;
use apimgen_api::{Config, Declaration, ExtractError, ExtractResult};
use tree_sitter::Parser;

/// Extract every function declaration and function typedef from one header
pub fn extract_unit(unit: &HeaderUnit, config: &Config) -> ExtractResult<Vec<Declaration>> {
    let prepared = preprocessor::prepare(&unit.text, config);

    let mut parser = Parser::new();
    let language = tree_sitter_c::language();
    parser
        .set_language(&language)
        .map_err(|e| ExtractError::Parse(unit.path.clone(), e.to_string()))?;

    let tree = parser
        .parse(&prepared, None)
        .ok_or_else(|| ExtractError::Parse(unit.path.clone(), "failed to parse".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(ExtractError::Syntax(
            unit.path.clone(),
            format!("{} error nodes", count_errors(root)),
        ));
    }

    let mut visitor = HeaderVisitor::new(prepared.as_bytes(), &unit.path);
    visitor.visit_node(root)?;
    Ok(visitor.decls)
}

/// Extract across all units, preserving unit order and source order within
/// each unit
pub fn extract_all(units: &[HeaderUnit], config: &Config) -> ExtractResult<Vec<Declaration>> {
    let mut decls = Vec::new();
    for unit in units {
        decls.extend(extract_unit(unit, config)?);
    }
    Ok(decls)
}

/// Count ERROR nodes in the syntax tree
fn count_errors(node: tree_sitter::Node) -> usize {
    let mut count = 0;

    if node.is_error() || node.is_missing() {
        count += 1;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        count += count_errors(child);
    }

    count
}
