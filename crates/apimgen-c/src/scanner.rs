//! Documentation-region scanner
//!
//! Reads raw header text and harvests macro constants and comment blocks
//! from the region bounded by the `@interface` / `@end` sentinel lines.
//! Everything outside the region is ignored. Implemented as a small state
//! machine with a single pending-comment buffer.

use apimgen_api::{CommentBlock, ExtractError, ExtractResult, HeaderDocs, MacroConstant};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

// Sentinels are whole-line: a comment marker, optional non-word separators,
// and the keyword. Prose mentioning @interface does not open a region.
static RE_REGION_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//\W*@interface\W*$").unwrap());

static RE_REGION_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//\W*@end\W*$").unwrap());

// `#define NAME VALUE` with an optional trailing remainder, validated below
static RE_MACRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#define\s+(\S+)\s+(\S+)\s*(.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    BeforeRegion,
    InRegion,
    Done,
}

/// Scan one header's documentation region
///
/// Deterministic: the same text always yields the same result. The only
/// failure is a `#define` inside the region that fits neither accepted
/// shape.
pub fn scan(path: &Path, text: &str) -> ExtractResult<HeaderDocs> {
    let mut docs = HeaderDocs::default();
    let mut state = State::BeforeRegion;
    let mut pending: Vec<String> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;

        match state {
            State::BeforeRegion => {
                if RE_REGION_OPEN.is_match(line) {
                    state = State::InRegion;
                }
            }
            State::InRegion => {
                if RE_REGION_END.is_match(line) {
                    state = State::Done;
                } else if line.trim_start().starts_with("#define") {
                    docs.constants.push(parse_macro(path, line_no, line)?);
                } else if let Some(comment) = line.trim_start().strip_prefix("//") {
                    pending.push(comment.trim_start().to_string());
                } else if !pending.is_empty() {
                    docs.comments.insert(
                        line_no,
                        CommentBlock {
                            line: line_no,
                            text: pending.join("\n"),
                        },
                    );
                    pending.clear();
                }
            }
            State::Done => break,
        }
    }

    Ok(docs)
}

/// Parse a `#define NAME VALUE [// comment]` line
fn parse_macro(path: &Path, line_no: usize, line: &str) -> ExtractResult<MacroConstant> {
    let malformed = || {
        ExtractError::MalformedMacro(path.to_path_buf(), line_no, line.trim().to_string())
    };

    let caps = RE_MACRO.captures(line).ok_or_else(malformed)?;
    let name = caps[1].to_string();
    let value = caps[2].to_string();
    let rest = caps[3].trim_end();

    if value.starts_with("//") {
        // `#define NAME // ...` has no value field
        return Err(malformed());
    }

    let comment = if rest.is_empty() {
        String::new()
    } else {
        // Strip the marker plus one following character (the usual space)
        let after = rest.strip_prefix("//").ok_or_else(malformed)?;
        let mut chars = after.chars();
        chars.next();
        chars.as_str().to_string()
    };

    Ok(MacroConstant::new(name, value, comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_text(text: &str) -> HeaderDocs {
        scan(Path::new("include/zobj.h"), text).unwrap()
    }

    #[test]
    fn test_region_bounds() {
        let text = "\
#define OUTSIDE 1
//  @interface
#define ZOBJ_INSIDE 2
//  @end
#define AFTER 3
";
        let docs = scan_text(text);
        assert_eq!(docs.constants.len(), 1);
        assert_eq!(docs.constants[0].name, "ZOBJ_INSIDE");
    }

    #[test]
    fn test_no_region_collects_nothing() {
        let docs = scan_text("#define ZOBJ_MAX 10\n// a comment\nint x;\n");
        assert!(docs.constants.is_empty());
        assert!(docs.comments.is_empty());
    }

    #[test]
    fn test_sentinel_must_be_whole_line() {
        let text = "\
// see the @interface section below
//  @interface
#define ZOBJ_MAX 10
//  @end
";
        let docs = scan_text(text);
        // The prose line did not open the region early
        assert_eq!(docs.constants.len(), 1);
    }

    #[test]
    fn test_macro_with_comment() {
        let text = "//  @interface\n#define ZOBJ_MAX_SIZE 42 // Maximum payload size\n//  @end\n";
        let docs = scan_text(text);
        let constant = &docs.constants[0];
        assert_eq!(constant.name, "ZOBJ_MAX_SIZE");
        assert_eq!(constant.value, "42");
        assert_eq!(constant.comment, "Maximum payload size");
    }

    #[test]
    fn test_macro_without_comment() {
        let text = "//  @interface\n#define ZOBJ_VERSION 3\n//  @end\n";
        let docs = scan_text(text);
        assert_eq!(docs.constants[0].value, "3");
        assert_eq!(docs.constants[0].comment, "");
    }

    #[test]
    fn test_macro_missing_value_is_fatal() {
        let text = "//  @interface\n#define ZOBJ_BARE\n//  @end\n";
        let result = scan(Path::new("include/zobj.h"), text);
        assert!(matches!(result, Err(ExtractError::MalformedMacro(..))));
    }

    #[test]
    fn test_macro_trailing_junk_is_fatal() {
        let text = "//  @interface\n#define ZOBJ_MAX (1 << 4)\n//  @end\n";
        let result = scan(Path::new("include/zobj.h"), text);
        assert!(matches!(result, Err(ExtractError::MalformedMacro(..))));
    }

    #[test]
    fn test_comment_block_keyed_by_following_line() {
        let text = "\
//  @interface
//  Return the size of the object.
//  The object must not be null.
int zobj_size (zobj_t *self);
//  @end
";
        let docs = scan_text(text);
        let block = docs.comments.get(&4).unwrap();
        assert_eq!(
            block.text,
            "Return the size of the object.\nThe object must not be null."
        );
    }

    #[test]
    fn test_macro_does_not_break_comment_accumulation() {
        let text = "\
//  @interface
//  Size of the receive buffer.
#define ZOBJ_BUFSIZE 256
int zobj_size (zobj_t *self);
//  @end
";
        let docs = scan_text(text);
        assert_eq!(docs.constants.len(), 1);
        // The pending comment rides over the macro line and keys to line 4
        assert!(docs.comments.contains_key(&4));
    }

    #[test]
    fn test_blank_line_flushes_pending_comment() {
        let text = "\
//  @interface
//  Orphaned remark.

int zobj_size (zobj_t *self);
//  @end
";
        let docs = scan_text(text);
        assert!(docs.comments.contains_key(&3));
        assert!(!docs.comments.contains_key(&4));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let text = "\
//  @interface
//  One.
#define ZOBJ_A 1 // first
int zobj_one (zobj_t *self);
//  Two.
int zobj_two (zobj_t *self);
//  @end
";
        let first = scan_text(text);
        let second = scan_text(text);
        assert_eq!(first, second);
    }
}
