//! Grouping classified declarations into classes
//!
//! A declaration's class is its name up to the last underscore segment,
//! so `zobj_size` belongs to `zobj`. A class materializes only when a header
//! named
//! after it exists next to the root header; prefixes without a header are
//! dropped silently, since many helper-prefixed functions are not classes.

use apimgen_api::Declaration;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// One class's worth of declarations, in source order
#[derive(Debug, Clone)]
pub struct ClassGroup {
    /// Inferred class name
    pub name: String,

    /// The class's own header, `<include_dir>/<name>.h`
    pub header: PathBuf,

    /// Declarations from that header only
    pub decls: Vec<Declaration>,
}

/// Partition declarations by class, preserving first-seen class order
///
/// `header_exists` is the filesystem probe; injected so grouping stays
/// testable without a disk layout. Declarations from a different header
/// than the class's own are excluded (a convenience function declared
/// elsewhere must not leak into the class it name-matches).
pub fn group<F>(decls: Vec<Declaration>, include_dir: &Path, header_exists: F) -> Vec<ClassGroup>
where
    F: Fn(&Path) -> bool,
{
    let mut groups: Vec<ClassGroup> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut rejected: HashSet<String> = HashSet::new();

    for decl in decls {
        let Some(key) = decl.class_key() else {
            log::debug!("no class prefix, skipping: {}", decl.name);
            continue;
        };
        if rejected.contains(key) {
            continue;
        }

        let index = match by_name.get(key) {
            Some(&index) => index,
            None => {
                let header = include_dir.join(format!("{key}.h"));
                if !header_exists(&header) {
                    log::debug!("no header for class candidate {key}, skipping");
                    rejected.insert(key.to_string());
                    continue;
                }
                groups.push(ClassGroup {
                    name: key.to_string(),
                    header,
                    decls: Vec::new(),
                });
                by_name.insert(key.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };

        if groups[index].header == decl.source_file {
            groups[index].decls.push(decl);
        } else {
            log::debug!(
                "excluding {} declared in {} from class {}",
                decl.name,
                decl.source_file.display(),
                groups[index].name
            );
        }
    }

    groups
}
