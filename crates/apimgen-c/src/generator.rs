//! Whole-pipeline orchestration
//!
//! Runs the batch translation for one root header: include expansion,
//! declaration extraction, classification, grouping, documentation scanning
//! and per-class emission. Returns the documents in memory; writing them is
//! the caller's concern.

use crate::{classify, emitter, extractor, grouper, preprocessor, scanner};
use apimgen_api::{ClassModel, Config, ExtractResult, HeaderDocs};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One finished per-class document
#[derive(Debug, Clone)]
pub struct ClassDocument {
    pub class_name: String,
    pub xml: String,
}

impl ClassDocument {
    /// Output file name for this document
    pub fn file_name(&self) -> String {
        format!("{}.xml", self.class_name)
    }
}

pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Translate one root header tree into per-class documents
    pub fn run(&self, root_header: &Path) -> ExtractResult<Vec<ClassDocument>> {
        let units = preprocessor::expand(root_header, &self.config)?;
        log::info!("expanded {} header units", units.len());

        let mut decls = extractor::extract_all(&units, &self.config)?;
        for decl in &mut decls {
            decl.role = classify::classify(decl);
        }
        log::info!("extracted {} declarations", decls.len());

        let include_dir = root_header.parent().unwrap_or_else(|| Path::new("."));
        let groups = grouper::group(decls, include_dir, |path| path.is_file());

        let texts: HashMap<&PathBuf, &String> =
            units.iter().map(|unit| (&unit.path, &unit.text)).collect();

        let mut documents = Vec::new();
        for group in groups {
            let docs = match texts.get(&group.header) {
                Some(text) => scanner::scan(&group.header, text)?,
                None => HeaderDocs::default(),
            };

            let mut model = ClassModel::new(&group.name);
            model.constants = docs.constants.clone();
            for decl in group.decls {
                model.push(decl);
            }

            log::debug!(
                "class {}: {} constants, {} entries",
                model.class_name,
                model.constants.len(),
                model.entries.len()
            );
            documents.push(ClassDocument {
                xml: emitter::emit(&model, &docs),
                class_name: model.class_name,
            });
        }

        Ok(documents)
    }
}
