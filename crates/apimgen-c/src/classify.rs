//! Role classification for extracted declarations

use apimgen_api::{Declaration, Role};

/// Refine a declaration's provisional role
///
/// A declaration is a `Method` only when its first argument is the
/// conventional receiver: named `self` or `self_p`, typed with an opaque
/// handle, at exactly one level of indirection. Everything else stays a
/// `Singleton`. Typedef-derived callbacks pass through untouched.
///
/// The test is purely structural; a coincidentally-named parameter that
/// happens to match the shape will classify as a receiver.
pub fn classify(decl: &Declaration) -> Role {
    match decl.role {
        Role::Callback => Role::Callback,
        _ => {
            if decl.args.first().is_some_and(|arg| arg.is_self_receiver()) {
                Role::Method
            } else {
                Role::Singleton
            }
        }
    }
}
