//! Lightweight header preprocessing
//!
//! The declaration extractor consumes one tree-sitter translation unit per
//! header. Real C preprocessing is out of scope; this module does just enough
//! text preparation for declaration-only headers to parse cleanly:
//!
//! 1. Include expansion: resolve the root header's `#include` lines into an
//!    ordered list of header units, so declarations keep per-file coordinates
//! 2. Line-preserving cleanup: blank preprocessor directives, substitute
//!    `-D` macros, strip export markers

use apimgen_api::{Config, ExtractError, ExtractResult};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*#\s*include\s+["<]([^">]+)[">]"#).unwrap());

// Upper-case export annotations (ZOBJ_EXPORT, CZMQ_EXPORT, ...) sit in front
// of almost every public declaration and mean nothing to the model
static RE_EXPORT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9_]*_EXPORT\b").unwrap());

/// One header file scheduled for extraction
#[derive(Debug, Clone)]
pub struct HeaderUnit {
    /// Resolved path of the header
    pub path: PathBuf,

    /// Raw file contents, exactly as on disk (the documentation scanner
    /// reads these; only the parser sees the prepared form)
    pub text: String,
}

/// Expand a root header into the ordered list of headers it pulls in
///
/// Resolution is depth-first in include order, against the root header's own
/// directory first and then `config.include_dirs`. Headers that do not
/// resolve (system headers) are skipped, and each header is visited once, so
/// include cycles terminate. The root header itself is the first unit.
pub fn expand(root: &Path, config: &Config) -> ExtractResult<Vec<HeaderUnit>> {
    let mut units = Vec::new();
    let mut visited = HashSet::new();
    expand_into(root, config, &mut visited, &mut units)?;
    Ok(units)
}

fn expand_into(
    path: &Path,
    config: &Config,
    visited: &mut HashSet<PathBuf>,
    units: &mut Vec<HeaderUnit>,
) -> ExtractResult<()> {
    if !visited.insert(path.to_path_buf()) {
        return Ok(());
    }

    let text = fs::read_to_string(path).map_err(|e| ExtractError::Io(path.to_path_buf(), e))?;
    let unit_index = units.len();
    units.push(HeaderUnit {
        path: path.to_path_buf(),
        text: String::new(),
    });

    for line in text.lines() {
        if let Some(caps) = RE_INCLUDE.captures(line) {
            let name = &caps[1];
            match resolve_include(name, path, config) {
                Some(included) => expand_into(&included, config, visited, units)?,
                None => log::debug!("include not found, skipping: {name}"),
            }
        }
    }

    units[unit_index].text = text;
    Ok(())
}

/// Resolve an include name against the including header's directory, then
/// the configured search paths
fn resolve_include(name: &str, from: &Path, config: &Config) -> Option<PathBuf> {
    let own_dir = from.parent().map(Path::to_path_buf);
    own_dir
        .iter()
        .chain(config.include_dirs.iter())
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Prepare raw header text for the C front-end
///
/// Output has exactly as many lines as the input, so tree-sitter rows stay
/// valid against the raw text the scanner reads.
pub fn prepare(text: &str, config: &Config) -> String {
    // Escaped macro names always compile; invalid ones cannot be expressed
    let defines: Vec<(Regex, &str)> = config
        .defines
        .iter()
        .filter_map(|(name, value)| {
            Regex::new(&format!(r"\b{}\b", regex::escape(name)))
                .ok()
                .map(|re| (re, value.as_str()))
        })
        .collect();

    let mut result = String::with_capacity(text.len());
    for line in text.lines() {
        result.push_str(&prepare_line(line, &defines));
        result.push('\n');
    }

    result
}

fn prepare_line(line: &str, defines: &[(Regex, &str)]) -> String {
    let trimmed = line.trim_start();

    // Directives carry no declarations; blank them but keep the line
    if trimmed.starts_with('#') {
        return "/* directive */".to_string();
    }

    let mut result = RE_EXPORT_MARKER.replace_all(line, "").into_owned();

    for (pattern, value) in defines {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, *value).into_owned();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_header(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_expand_orders_includes_depth_first() {
        let dir = TempDir::new().unwrap();
        write_header(dir.path(), "zobj.h", "// zobj\n");
        write_header(dir.path(), "zlog.h", "// zlog\n");
        let root = write_header(
            dir.path(),
            "zproj.h",
            "#include \"zobj.h\"\n#include \"zlog.h\"\n",
        );

        let units = expand(&root, &Config::new()).unwrap();
        let names: Vec<_> = units
            .iter()
            .map(|u| u.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["zproj.h", "zobj.h", "zlog.h"]);
    }

    #[test]
    fn test_expand_visits_each_header_once() {
        let dir = TempDir::new().unwrap();
        write_header(dir.path(), "a.h", "#include \"b.h\"\n");
        write_header(dir.path(), "b.h", "#include \"a.h\"\n");
        let root = write_header(dir.path(), "root.h", "#include \"a.h\"\n#include \"b.h\"\n");

        let units = expand(&root, &Config::new()).unwrap();
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn test_expand_skips_system_headers() {
        let dir = TempDir::new().unwrap();
        let root = write_header(dir.path(), "root.h", "#include <stdio.h>\n");

        let units = expand(&root, &Config::new()).unwrap();
        assert_eq!(units.len(), 1);
    }

    #[test]
    fn test_expand_uses_search_dirs() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        write_header(other.path(), "dep.h", "// dep\n");
        let root = write_header(dir.path(), "root.h", "#include \"dep.h\"\n");

        let config = Config::new().with_include_dir(other.path());
        let units = expand(&root, &config).unwrap();
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn test_prepare_preserves_line_count() {
        let text = "#ifndef X\n#define X\nint zobj_size (zobj_t *self);\n#endif\n";
        let prepared = prepare(text, &Config::new());
        assert_eq!(prepared.lines().count(), text.lines().count());
    }

    #[test]
    fn test_prepare_blanks_directives() {
        let prepared = prepare("#define ZOBJ_MAX 10\n", &Config::new());
        assert!(!prepared.contains("#define"));
    }

    #[test]
    fn test_prepare_strips_export_markers() {
        let prepared = prepare("CZMQ_EXPORT int zobj_size (zobj_t *self);\n", &Config::new());
        assert!(!prepared.contains("CZMQ_EXPORT"));
        assert!(prepared.contains("int zobj_size"));
    }

    #[test]
    fn test_prepare_applies_defines() {
        let config = Config::new().with_define("MY_ANNOTATION");
        let prepared = prepare("MY_ANNOTATION void zobj_print (zobj_t *self);\n", &config);
        assert!(!prepared.contains("MY_ANNOTATION"));

        let config = Config::new().with_define("handle_t=zobj_t");
        let prepared = prepare("handle_t *zobj_dup (handle_t *self);\n", &config);
        assert!(prepared.contains("zobj_t *zobj_dup (zobj_t *self);"));
    }
}
