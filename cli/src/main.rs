use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tagwire_compiler::error::SchemaError;
use tagwire_compiler::{compile_schema, emit_all};

#[derive(Parser)]
#[command(name = "tagwire")]
#[command(about = "Compile a .msg schema into per-language message codecs", long_about = None)]
struct Cli {
    /// Input `.msg` schema file
    schema: PathBuf,

    /// Directory for generated sources (defaults to the schema's directory)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Print the compiled message set as JSON instead of writing sources
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SchemaError> {
    let text = fs::read_to_string(&cli.schema)?;
    let set = compile_schema(&text)?;

    if cli.dump {
        println!("{}", tagwire::dump_to_json(&set)?);
        return Ok(());
    }

    let base = match cli.schema.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => "schema".to_string(),
    };
    let dir = match &cli.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            dir.clone()
        }
        None => cli
            .schema
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    // Render every artifact before writing any file, so no error can
    // leave the target languages inconsistent on disk.
    let artifacts = emit_all(&set);
    for artifact in &artifacts {
        let path = dir.join(format!("{}.{}", base, artifact.extension));
        fs::write(&path, &artifact.source)?;
        println!("Generated {} → {}", artifact.target, path.display());
    }
    Ok(())
}
