use clap::{Parser, Subcommand};
use framegen::prelude::*;
use std::fs;
use std::path::Path;
use tracing::info;

/// Converts frame DSL documents to the flat production model and back
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flatten a frame DSL file and print the production model
    Gen {
        /// Path to the frame DSL JSON file
        #[arg(short, long)]
        path: String,
        /// Local copy of the JSON Schema named by the document's `$schema`
        #[arg(long)]
        schema_file: Option<String>,
        /// Optional transform config JSON file
        #[arg(short, long)]
        config: Option<String>,
        /// Write the output here instead of stdout
        #[arg(short, long)]
        out: Option<String>,
        /// Emit the remote sync payload (`route` + `frameJson`) instead of the envelope
        #[arg(long)]
        sync_payload: bool,
    },
    /// Rebuild a frame DSL file from a flat production model
    Rebuild {
        /// Path to the flat frame JSON file
        #[arg(short, long)]
        flat: String,
        /// Frame DSL file to write
        #[arg(short, long)]
        path: String,
        /// `$schema` to attach; defaults to the one in the existing file at `--path`
        #[arg(short, long)]
        schema: Option<String>,
        /// Optional transform config JSON file
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Gen {
            path,
            schema_file,
            config,
            out,
            sync_payload,
        } => run_gen(&path, schema_file, config, out, sync_payload),
        Command::Rebuild {
            flat,
            path,
            schema,
            config,
        } => run_rebuild(&flat, &path, schema, config),
    }
}

fn run_gen(
    path: &str,
    schema_file: Option<String>,
    config_path: Option<String>,
    out: Option<String>,
    sync_payload: bool,
) {
    if !Path::new(path).is_file() {
        exit_with_error(&format!("Could not find the file under: {}", path));
    }
    let dsl = FrameDsl::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let config = load_config(config_path);

    let mut validator = JsonSchemaValidator::new();
    if let Some(schema_path) = schema_file {
        let content = fs::read_to_string(&schema_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read schema file '{}': {}",
                schema_path, e
            ))
        });
        let schema: serde_json::Value = serde_json::from_str(&content)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse schema JSON: {}", e)));
        validator = validator.with_schema(&dsl.schema, schema);
    }

    let flattener = Flattener::builder(validator).with_config(config).build();
    let frame = match flattener.flatten(&dsl) {
        Ok(FlattenOutcome::Flattened(frame)) => frame,
        Ok(FlattenOutcome::SchemaRejected(violations)) => {
            for violation in violations {
                println!("- {}", violation);
            }
            return;
        }
        Err(e) => exit_with_error(&e.to_string()),
    };
    info!(frame = %frame.name, blocks = frame.blocks.len(), "frame generated");

    let output = if sync_payload {
        SyncFrameInput::from_frame(&frame)
            .and_then(|input| serde_json::to_string(&input).map_err(FrameError::from))
    } else {
        serde_json::to_string(&FrameProductionEnvelope::new(frame)).map_err(FrameError::from)
    }
    .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    match out {
        Some(out_path) => {
            fs::write(&out_path, output).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", out_path, e))
            });
            println!("Frame written to '{}'", out_path);
        }
        None => println!("{}", output),
    }
}

fn run_rebuild(flat: &str, path: &str, schema: Option<String>, config_path: Option<String>) {
    let frame = Frame::from_file(flat).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let schema = schema
        .or_else(|| {
            FrameDsl::from_file(path)
                .ok()
                .map(|existing| existing.schema)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| {
            exit_with_error("No $schema given and none found in the existing frame file")
        });

    let rebuilder = Rebuilder::new().with_config(load_config(config_path));
    let dsl = rebuilder
        .rebuild(&frame, &schema)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    if dsl.route.is_empty() {
        exit_with_error("Could not find frame route");
    }

    dsl.save(path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("Frame successfully synced to '{}'", path);
}

fn load_config(path: Option<String>) -> TransformConfig {
    match path {
        Some(p) => {
            TransformConfig::from_file(&p).unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
        None => TransformConfig::default(),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
