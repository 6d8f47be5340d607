//! Mapping C type signatures onto the model's semantic argument kinds

use apimgen_api::TypeRef;

/// Map a `(base, pointer depth)` pair to the semantic type vocabulary of the
/// model schema. Pure and total: unmodeled pairs pass the base name through.
///
/// Opaque handles win over the fixed table: a `_t`-suffixed base at one or
/// two levels of indirection is the typedef name itself (double indirection
/// is the by-reference case, flagged at the call site).
pub fn map_type(ty: &TypeRef) -> String {
    if ty.is_handle() && (ty.ptr_depth == 1 || ty.ptr_depth == 2) {
        return ty.base.clone();
    }

    match (ty.base.as_str(), ty.ptr_depth) {
        ("void", 1) => "anything".to_string(),
        ("int", 0) => "integer".to_string(),
        ("float", 0) => "real".to_string(),
        ("bool", 0) | ("_Bool", 0) => "boolean".to_string(),
        ("char", 1) => "string".to_string(),
        _ => ty.base.clone(),
    }
}
