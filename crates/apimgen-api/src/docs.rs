use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How far above a declaration a comment block may sit and still be
/// associated with it
pub const COMMENT_LOOKBACK: usize = 3;

/// One `#define` line from a header's documentation region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroConstant {
    /// Macro name as written (`ZOBJ_MAX_SIZE`)
    pub name: String,

    /// Raw value text, not evaluated
    pub value: String,

    /// Trailing comment with its marker stripped; empty when absent
    pub comment: String,
}

impl MacroConstant {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: comment.into(),
        }
    }
}

/// A contiguous run of `//` comment lines, keyed by the line that follows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentBlock {
    /// 1-based line number of the first non-comment line after the run
    pub line: usize,

    /// Comment text, markers and leading whitespace stripped, lines joined
    /// with newlines
    pub text: String,
}

/// Everything the scanner harvests from one header's documentation region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderDocs {
    /// Comment blocks by the line number they precede
    pub comments: BTreeMap<usize, CommentBlock>,

    /// Macro constants in textual order
    pub constants: Vec<MacroConstant>,
}

impl HeaderDocs {
    /// Comment associated with a declaration at `line`: the closest block at
    /// most [`COMMENT_LOOKBACK`] lines above it, scanning upward
    pub fn comment_for(&self, line: usize) -> Option<&CommentBlock> {
        (0..=COMMENT_LOOKBACK).find_map(|back| self.comments.get(&line.saturating_sub(back)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_with_comment_at(line: usize) -> HeaderDocs {
        let mut docs = HeaderDocs::default();
        docs.comments.insert(
            line,
            CommentBlock {
                line,
                text: "Get the size".to_string(),
            },
        );
        docs
    }

    #[test]
    fn test_comment_exact_line() {
        let docs = docs_with_comment_at(10);
        assert!(docs.comment_for(10).is_some());
    }

    #[test]
    fn test_comment_within_lookback() {
        let docs = docs_with_comment_at(10);
        assert!(docs.comment_for(13).is_some());
    }

    #[test]
    fn test_comment_beyond_lookback() {
        let docs = docs_with_comment_at(10);
        assert!(docs.comment_for(14).is_none());
    }

    #[test]
    fn test_closest_block_wins() {
        let mut docs = HeaderDocs::default();
        docs.comments.insert(
            8,
            CommentBlock {
                line: 8,
                text: "far".to_string(),
            },
        );
        docs.comments.insert(
            10,
            CommentBlock {
                line: 10,
                text: "near".to_string(),
            },
        );
        assert_eq!(docs.comment_for(11).unwrap().text, "near");
    }
}
