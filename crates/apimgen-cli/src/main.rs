//! apimgen: generate per-class API model documents from C headers.
//!
//! Reads a root header, follows its local includes, and writes one
//! `<class>.xml` model under the output directory for every class header
//! found next to the root:
//!
//! ```text
//! apimgen include/zproject.h -o api -D ZPROJECT_EXPORT -I vendor/include
//! ```

use anyhow::{Context, Result};
use apimgen_api::Config;
use apimgen_c::Generator;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "apimgen",
    about = "Generate per-class API model documents from a C library's headers"
)]
struct Cli {
    /// Root header whose includes name the class headers
    header: PathBuf,

    /// Output directory, created if absent
    #[arg(short = 'o', long, default_value = "api")]
    output: PathBuf,

    /// Macro definition forwarded to preprocessing, NAME or NAME=VALUE.
    /// Can be specified multiple times.
    #[arg(short = 'D', long = "define")]
    defines: Vec<String>,

    /// Additional include search directory. Can be specified multiple times.
    #[arg(short = 'I', long = "include-dir")]
    include_dirs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::new();
    for dir in &cli.include_dirs {
        config = config.with_include_dir(dir);
    }
    for define in &cli.defines {
        config = config.with_define(define);
    }

    let documents = Generator::new(config)
        .run(&cli.header)
        .with_context(|| format!("failed to process {}", cli.header.display()))?;

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory: {}", cli.output.display()))?;

    for doc in &documents {
        let out_path = cli.output.join(doc.file_name());
        fs::write(&out_path, &doc.xml)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        log::info!("wrote {}", out_path.display());
    }

    println!(
        "{} class model{} written to {}",
        documents.len(),
        if documents.len() == 1 { "" } else { "s" },
        cli.output.display()
    );
    Ok(())
}
