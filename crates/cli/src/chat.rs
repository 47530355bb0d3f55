//! Line-oriented chat session.
//!
//! Each input line is one request. Lines starting with `/` are commands:
//! `/export` writes the current outline preview and any generated images,
//! `/summarize <file>` summarizes a text file, `/reset` starts over and
//! `/quit` exits.

use anyhow::{Context, Result};
use deckgen_core::{Assistant, ImageGenerator, OutlineFormatter, Session, TextGenerator};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::backend::CommandGenerator;
use crate::{read_text, write_output};

/// A line of input, once interpreted.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Request(&'a str),
    Export,
    Summarize(&'a str),
    Reset,
    Quit,
    Unknown(&'a str),
    Empty,
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return Input::Request(line);
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(n, r)| (n, r.trim()))
        .unwrap_or((command, ""));
    match name {
        "export" => Input::Export,
        "summarize" if !rest.is_empty() => Input::Summarize(rest),
        "reset" => Input::Reset,
        "quit" | "exit" => Input::Quit,
        _ => Input::Unknown(line),
    }
}

/// Run the session until end of input or `/quit`.
pub fn run(generator: &str, image_generator: Option<&str>, output_dir: &Path) -> Result<()> {
    let text = CommandGenerator::from_command_line(generator)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    match image_generator {
        Some(command) => {
            let images = CommandGenerator::from_command_line(command)?;
            let mut assistant = Assistant::new(text).with_image_generator(images);
            session_loop(&mut assistant, stdin.lock(), stdout.lock(), output_dir)
        }
        None => {
            let mut assistant = Assistant::new(text);
            session_loop(&mut assistant, stdin.lock(), stdout.lock(), output_dir)
        }
    }
}

fn session_loop<G, I, R, W>(
    assistant: &mut Assistant<G, I>,
    input: R,
    mut out: W,
    output_dir: &Path,
) -> Result<()>
where
    G: TextGenerator,
    G::Error: Display,
    I: ImageGenerator,
    I::Error: Display,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    let formatter = OutlineFormatter::new();

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Reset => {
                session.reset();
                writeln!(out, "Session cleared.")?;
            }
            Input::Unknown(command) => {
                writeln!(out, "Unknown command: {}", command)?;
            }
            Input::Export => export(&mut session, output_dir, &formatter, &mut out)?,
            Input::Summarize(path) => {
                let text = match read_text(Path::new(path)) {
                    Ok(text) => text,
                    Err(e) => {
                        writeln!(out, "⚠️ Error: {:#}", e)?;
                        continue;
                    }
                };
                match assistant.summarize_document(&mut session, &text) {
                    Ok(summary) => writeln!(out, "{}", summary)?,
                    Err(e) => writeln!(out, "⚠️ Error: {}", e)?,
                }
            }
            Input::Request(request) => {
                let intent = assistant.handle(&mut session, request);
                if let Some(reply) = session.last_reply() {
                    writeln!(out, "{}", reply)?;
                }
                if intent.outline_mode().is_some() {
                    if let Some(outline) = session.outline() {
                        writeln!(out, "\n{}", formatter.format(outline))?;
                    }
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}

/// Write the pending outline preview and all generated images to `output_dir`.
fn export<W: Write>(
    session: &mut Session,
    output_dir: &Path,
    formatter: &OutlineFormatter,
    out: &mut W,
) -> Result<()> {
    if session.outline().is_none() && session.images().is_empty() {
        writeln!(out, "Nothing to export.")?;
        return Ok(());
    }

    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    if let Some(outline) = session.take_outline() {
        let path = output_dir.join(format!("{}.txt", outline.file_name()));
        write_output(&path, formatter.format_with_newline(&outline))?;
        writeln!(out, "Outline written to {}", path.display())?;
    }

    for image in session.take_images() {
        let path = output_dir.join(&image.filename);
        write_output(&path, &image.content)?;
        writeln!(out, "Image written to {}", path.display())?;
    }

    Ok(())
}
