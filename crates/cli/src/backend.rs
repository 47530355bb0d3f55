//! Generation backends that run an external command.
//!
//! The prompt is written to the command's stdin and whatever it prints to
//! stdout is the result. This keeps provider clients out of the binary: any
//! script that calls a hosted model can be plugged in.

use deckgen_core::{Error, ImageGenerator, Result, TextGenerator};
use std::io::Write;
use std::process::{Command, Stdio};

/// Runs `program args...` once per prompt.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    /// Build from a command line such as `"python ask.py --model fast"`.
    ///
    /// Arguments are split on whitespace; quoting is not supported.
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| Error::InvalidArgument("generator command is empty".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    fn run(&self, prompt: &str) -> Result<Vec<u8>> {
        log::debug!("Running {} ({} byte prompt)", self.program, prompt.len());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Feed stdin from its own thread while this one drains stdout, so a
        // command that echoes as it reads cannot fill both pipes and stall.
        let stdin = child.stdin.take();
        let output = std::thread::scope(|scope| -> Result<_> {
            let writer = scope.spawn(move || -> std::io::Result<()> {
                let Some(mut stdin) = stdin else {
                    return Ok(());
                };
                // A command that ignores its input may exit before we finish writing.
                match stdin.write_all(prompt.as_bytes()) {
                    Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e),
                    _ => Ok(()),
                }
            });

            let output = child.wait_with_output()?;
            writer
                .join()
                .map_err(|_| Error::Generation("stdin writer thread panicked".to_string()))??;
            Ok(output)
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Generation(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

impl TextGenerator for CommandGenerator {
    type Error = Error;

    fn generate(&mut self, prompt: &str) -> Result<String> {
        let stdout = self.run(prompt)?;
        let text = String::from_utf8(stdout)
            .map_err(|e| Error::Generation(format!("{} printed invalid UTF-8: {}", self.program, e)))?;
        Ok(text.trim().to_string())
    }
}

impl ImageGenerator for CommandGenerator {
    type Error = Error;

    fn generate_image(&mut self, prompt: &str) -> Result<Vec<u8>> {
        let bytes = self.run(prompt)?;
        if bytes.is_empty() {
            return Err(Error::Generation(format!(
                "{} produced no image data",
                self.program
            )));
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line() {
        let generator = CommandGenerator::from_command_line("python ask.py  --fast").unwrap();
        assert_eq!(generator.program, "python");
        assert_eq!(generator.args, vec!["ask.py", "--fast"]);
    }

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(matches!(
            CommandGenerator::from_command_line("   "),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_reads_stdout() {
        let mut generator = CommandGenerator::from_command_line("cat").unwrap();
        assert_eq!(generator.generate("  hello\n").unwrap(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_a_generation_error() {
        let mut generator = CommandGenerator::from_command_line("false").unwrap();
        assert!(matches!(generator.generate("x"), Err(Error::Generation(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_large_prompt_does_not_stall() {
        let mut generator = CommandGenerator::from_command_line("cat").unwrap();
        let prompt = "a".repeat(300_000);
        assert_eq!(generator.generate(&prompt).unwrap(), prompt);
    }

    #[test]
    fn test_missing_program_is_an_io_error() {
        let mut generator =
            CommandGenerator::from_command_line("deckgen-no-such-program-xyz").unwrap();
        assert!(matches!(generator.generate("x"), Err(Error::Io(_))));
    }
}
