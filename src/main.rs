use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::{Env, Target};
use module_quiz::{Catalog, ModuleConfig, Quiz, QuizError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON catalog listing the modules and their data files
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// CSV question bank to offer as a module (repeatable)
    #[arg(short, long = "module")]
    modules: Vec<PathBuf>,

    /// Questions per part (overrides the catalog)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    part_size: Option<u16>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = log_file else {
        // Off unless RUST_LOG says otherwise.
        env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        return Ok(());
    };

    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn build_catalog(args: &Args) -> Result<Catalog, QuizError> {
    let mut catalog = match &args.catalog {
        Some(path) => Catalog::from_json(path)?,
        None => Catalog::default(),
    };
    for path in &args.modules {
        catalog.add_module(ModuleConfig::from_path(path.clone()));
    }
    if let Some(size) = args.part_size {
        catalog.part_size = usize::from(size);
    }
    Ok(catalog)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    let quiz = match build_catalog(&args).and_then(Quiz::new) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
