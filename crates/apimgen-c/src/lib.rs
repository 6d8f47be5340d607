//! # apimgen-c
//!
//! Builds per-class API model documents from a C library's public headers.
//!
//! The pipeline reads a root header, expands its includes into an ordered
//! set of header units, extracts every function declaration and function
//! typedef with full type information, classifies each into a semantic role
//! (constructor, destructor, method, singleton, callback), groups them by
//! naming convention into classes, stitches the documentation region's
//! macro constants and comments back on, and renders one XML document per
//! class.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use apimgen_c::Generator;
//! use apimgen_api::Config;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = Generator::new(Config::new());
//! for doc in generator.run(Path::new("include/zproject.h"))? {
//!     println!("{}: {} bytes", doc.file_name(), doc.xml.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Headers follow the CLASS conventions: one `include/<class>.h` per class,
//! `<class>_new`/`<class>_destroy` lifecycle pairs, `self`/`self_p`
//! receivers on opaque `<class>_t` handles, and a `@interface`/`@end`
//! documentation region.

pub mod classify;
pub mod emitter;
pub mod extractor;
pub mod generator;
pub mod grouper;
pub mod mapper;
pub mod preprocessor;
pub mod scanner;
pub mod visitor;

// Re-export api types for convenience
pub use apimgen_api::{
    Argument, ClassModel, CommentBlock, Config, Declaration, ExtractError, ExtractResult,
    HeaderDocs, MacroConstant, Role, TypeRef,
};

// Export key types from submodules
pub use generator::{ClassDocument, Generator};
pub use grouper::ClassGroup;
pub use preprocessor::HeaderUnit;
