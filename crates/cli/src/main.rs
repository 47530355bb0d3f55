//! CLI for chunking, summarizing, and outlining generated text.

mod backend;
mod chat;

use anyhow::{Context, Result};
use backend::CommandGenerator;
use clap::{Parser, Subcommand};
use deckgen_core::{
    parse_outline, Chunker, Intent, Outline, OutlineFormatter, OutlineMode, Summarizer,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Turn generated text into outlines and summaries.
#[derive(Parser, Debug)]
#[command(name = "deckgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a text file into overlapping windows
    Chunk {
        /// Input text file
        input: PathBuf,

        /// Window size in characters
        #[arg(short = 's', long, default_value = "8000")]
        chunk_size: usize,

        /// Overlap between windows in characters
        #[arg(short = 'o', long, default_value = "300")]
        overlap: usize,

        /// Print chunks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse generated outline text into sections
    Outline {
        /// File containing the generated outline text
        input: PathBuf,

        /// Outline kind: ppt or doc
        #[arg(short, long, default_value = "ppt", value_parser = parse_mode)]
        mode: OutlineMode,

        /// Outline title (default: input file stem)
        #[arg(short, long)]
        title: Option<String>,

        /// Print the outline as JSON
        #[arg(long)]
        json: bool,

        /// Print output to stdout instead of writing to file
        #[arg(short, long)]
        print: bool,

        /// Output directory (default: same as input file)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Summarize a text file through an external generator command
    Summarize {
        /// Input text file
        input: PathBuf,

        /// Command that reads a prompt on stdin and prints the answer
        #[arg(short, long)]
        generator: String,

        /// Window size in characters
        #[arg(short = 's', long, default_value = "8000")]
        chunk_size: usize,

        /// Overlap between windows in characters
        #[arg(short = 'o', long, default_value = "300")]
        overlap: usize,
    },

    /// Show how a request would be routed
    Classify {
        /// The request text
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Interactive session reading requests from stdin
    Chat {
        /// Command that reads a prompt on stdin and prints the answer
        #[arg(short, long)]
        generator: String,

        /// Command that reads a prompt on stdin and prints PNG bytes
        #[arg(short, long)]
        image_generator: Option<String>,

        /// Directory for exported outlines and images
        #[arg(short, long, default_value = "generated_files")]
        output: PathBuf,
    },
}

fn parse_mode(name: &str) -> std::result::Result<OutlineMode, String> {
    OutlineMode::from_name(name).ok_or_else(|| format!("unknown outline mode '{}'", name))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match args.command {
        Commands::Chunk {
            input,
            chunk_size,
            overlap,
            json,
        } => run_chunk(&input, chunk_size, overlap, json),
        Commands::Outline {
            input,
            mode,
            title,
            json,
            print,
            output,
        } => run_outline(&input, mode, title, json, print, output.as_ref(), args.verbose),
        Commands::Summarize {
            input,
            generator,
            chunk_size,
            overlap,
        } => run_summarize(&input, &generator, chunk_size, overlap),
        Commands::Classify { message } => {
            let intent = Intent::classify(&message.join(" "));
            println!("{}", serde_json::to_string(&intent)?.trim_matches('"'));
            Ok(())
        }
        Commands::Chat {
            generator,
            image_generator,
            output,
        } => chat::run(&generator, image_generator.as_deref(), &output),
    }
}

fn run_chunk(input: &Path, chunk_size: usize, overlap: usize, json: bool) -> Result<()> {
    let text = read_text(input)?;
    let chunker = Chunker::new(chunk_size, overlap)?;
    let chunks = chunker.chunk(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(chunks.as_slice())?);
    } else {
        for (idx, chunk) in chunks.iter().enumerate() {
            println!("chunk {}: {} characters", idx + 1, chunk.chars().count());
        }
        println!("{} chunks", chunks.len());
    }

    Ok(())
}

fn run_outline(
    input: &Path,
    mode: OutlineMode,
    title: Option<String>,
    json: bool,
    print: bool,
    output_dir: Option<&PathBuf>,
    verbose: bool,
) -> Result<()> {
    let text = read_text(input)?;
    let title = title.unwrap_or_else(|| {
        input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("outline")
            .to_string()
    });

    let outline = Outline::new(title, mode, parse_outline(&text));
    if verbose {
        eprintln!("  Found {} {}s", outline.len(), mode.label().to_lowercase());
    }

    let rendered = if json {
        format!("{}\n", serde_json::to_string_pretty(&outline)?)
    } else {
        OutlineFormatter::new().format_with_newline(&outline)
    };

    if print {
        print!("{}", rendered);
    } else {
        let extension = if json { "json" } else { "txt" };
        let output_path = get_output_path(input, output_dir, &outline, extension)?;
        write_output(&output_path, &rendered)?;
        if verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

fn run_summarize(input: &Path, generator: &str, chunk_size: usize, overlap: usize) -> Result<()> {
    let text = read_text(input)?;
    let mut generator = CommandGenerator::from_command_line(generator)?;
    let summarizer = Summarizer::new().with_chunker(Chunker::new(chunk_size, overlap)?);

    let summary = summarizer
        .summarize(&text, &mut generator)
        .with_context(|| format!("Failed to summarize {}", input.display()))?;
    println!("{}", summary);

    Ok(())
}

/// Read a whole text file, replacing invalid UTF-8.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Determine where a rendered outline is written: next to the input unless
/// an output directory is given, named after the sanitized outline title.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    outline: &Outline,
    extension: &str,
) -> Result<PathBuf> {
    let stem = deckgen_core::sanitize_filename(&outline.title);
    let output_filename = format!("{}.{}", stem, extension);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
pub(crate) fn write_output(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_ref())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
