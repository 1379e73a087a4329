//! Generates TypeScript from a JSON generation request.
//!
//! Run with: `cargo run --example generate -- request.json [out_dir]`
//!
//! Set `RUST_LOG=debug` to see model build summaries and collision reports.

use querytype::codegen::typescript::OUTPUT_FILE;
use querytype::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("querytype=info".parse()?))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: generate <request.json> [out_dir]");
        std::process::exit(2);
    };
    let out_dir = args.next().map(PathBuf::from);

    let request = parse_request_file(Path::new(&input))?;
    let model = build_model(&request)?;

    for collision in &model.collisions {
        eprintln!("[generate] warning: {}", collision);
    }

    let source = TypeScriptGenerator::new(&model).generate();
    match out_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let path = dir.join(OUTPUT_FILE);
            std::fs::write(&path, source)?;
            println!(
                "[generate] wrote {} ({} enums, {} records, {} queries)",
                path.display(),
                model.enums.len(),
                model.records.len() + model.emitted_records().count(),
                model.queries.len()
            );
        }
        None => print!("{}", source),
    }

    Ok(())
}
