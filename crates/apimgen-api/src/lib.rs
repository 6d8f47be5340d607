//! apimgen API
//!
//! Shared types for turning C library headers into per-class API model
//! documents.
//!
//! This crate defines:
//!
//! - **Declaration records**: language-agnostic representations of the
//!   function declarations and function typedefs found in a header tree
//!   ([`Declaration`], [`Argument`], [`TypeRef`], [`Role`])
//! - **Header documentation**: macro constants and comment blocks harvested
//!   from a header's documentation region ([`MacroConstant`],
//!   [`CommentBlock`], [`HeaderDocs`])
//! - **Class models**: the per-class grouping handed to the document
//!   emitter ([`ClassModel`])
//! - **Configuration**: include search paths and macro definitions forwarded
//!   to the preprocessing layer ([`Config`])
//! - **Error handling**: the [`ExtractError`] taxonomy

pub mod config;
pub mod decl;
pub mod docs;
pub mod errors;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use decl::{Argument, Declaration, Role, TypeRef};
pub use docs::{CommentBlock, HeaderDocs, MacroConstant};
pub use errors::{ExtractError, ExtractResult};
pub use model::ClassModel;
