use std::{
    collections::VecDeque,
    io::{self, Write},
};

/// Where a running program writes its output and reads its numeric input.
pub trait Console {
    /// Writes `text` without a trailing line break.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the output cannot be written.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes a single line break.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the output cannot be written.
    fn write_line(&mut self) -> io::Result<()>;

    /// Reads one line of input without its line terminator.
    ///
    /// Returns `Ok(None)` when the input stream is exhausted.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the input cannot be read.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// The process's standard output and standard input.
///
/// Output is flushed after every write so that text printed without a line
/// break shows up before the program blocks on input.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a console bound to standard output and standard input.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.write("\n")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// A console backed by memory: input comes from a queue of lines and output
/// is collected into a string.
///
/// ## Example
/// ```
/// use kirlang::{interpreter::console::BufferConsole, run_source};
///
/// let mut console = BufferConsole::with_input(["41"]);
/// run_source("цел x = 0; ввод x; вывод x + 1;", &mut console).unwrap();
///
/// assert_eq!(console.output(), "42.0");
/// ```
#[derive(Debug, Default)]
pub struct BufferConsole {
    input:  VecDeque<String>,
    output: String,
}

impl BufferConsole {
    /// Creates a console with no input queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that answers `read_line` with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input:  lines.into_iter().map(Into::into).collect(),
               output: String::new(), }
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the console, returning everything written.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.output.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front().map(strip_line_ending))
    }
}

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}
