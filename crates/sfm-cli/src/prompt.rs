//! Line-based [`Prompt`] implementation.

use std::io::{self, BufRead, Write};

use sfm_core::{Confirmation, Prompt};

/// Prompts on a writer and reads answers line by line.
///
/// The same reader also feeds the command loop (see [`TerminalPrompt::read_line`])
/// so that prompts and commands consume one shared input stream.
/// End of input cancels the pending prompt.
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `prompt` and reads one line without its line ending.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        match self.read_line(prompt) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("prompt input failed: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str, default_no: bool) -> Confirmation {
        let hint = if default_no { "[y/N]" } else { "[Y/n]" };
        let Some(answer) = self.ask(&format!("{message} {hint} ")) else {
            return Confirmation::Cancelled;
        };
        match answer.trim().to_lowercase().as_str() {
            "" if default_no => Confirmation::No,
            "" => Confirmation::Yes,
            "y" | "yes" => Confirmation::Yes,
            "n" | "no" => Confirmation::No,
            _ => Confirmation::Cancelled,
        }
    }

    fn request_text(&mut self, prompt: &str, title: &str, prefill: &str) -> Option<String> {
        let question = if prefill.is_empty() {
            format!("{title}: {prompt} ")
        } else {
            format!("{title}: {prompt} [{prefill}] ")
        };
        let answer = self.ask(&question)?;
        // Enter on an empty line keeps the pre-filled value.
        if answer.trim().is_empty() {
            Some(prefill.to_string())
        } else {
            Some(answer)
        }
    }
}
