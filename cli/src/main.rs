use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zorsh_gen::{decode_to_json, generate_from_file, GeneratorOptions, ZorshError};

#[derive(Parser)]
#[command(name = "zorsh-gen")]
#[command(about = "Generate Zorsh schemas from Borsh schema files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Zorsh declarations from a Borsh schema `.bin` file
    Generate {
        /// Input `.bin` file containing a serialized `BorshSchemaContainer`
        input: PathBuf,

        /// Output file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Don't export the generated schemas and types
        #[arg(long)]
        no_exports: bool,
    },

    /// Decode a Borsh schema `.bin` file to JSON (printed to stdout)
    Decode {
        /// Input `.bin` file
        input: PathBuf,
    },
}

fn main() -> Result<(), ZorshError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run(&Cli::parse())
}

/// Errors are returned to `main`, which reports them once on exit.
fn run(cli: &Cli) -> Result<(), ZorshError> {
    match &cli.command {
        Commands::Generate { input, output, no_exports } => {
            let options = GeneratorOptions { exports: !no_exports };
            tracing::debug!(input = %input.display(), exports = options.exports, "generating");
            let code = generate_from_file(input, &options)?;

            if let Some(out_path) = output {
                fs::write(out_path, &code)?;
                println!("Schema written to {}", out_path.display());
            } else {
                print!("{}", code);
            }
            Ok(())
        }

        Commands::Decode { input } => {
            let data = fs::read(input)?;
            let json = decode_to_json(&data)?;
            println!("{}", json);
            Ok(())
        }
    }
}
