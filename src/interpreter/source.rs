use std::{
    io::{self, BufRead, Write},
    str::Chars,
    vec,
};

/// A stream of source characters.
///
/// The scanner pulls characters one at a time and never looks further ahead
/// than the line it is working on, so a source backed by a terminal only
/// blocks when the program actually needs more text.
pub trait CharacterSource {
    /// Returns the next character, or `None` once the stream is exhausted.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the stream cannot be read or is not
    /// valid UTF-8.
    fn read_one(&mut self) -> io::Result<Option<char>>;
}

impl<T: CharacterSource + ?Sized> CharacterSource for &mut T {
    fn read_one(&mut self) -> io::Result<Option<char>> {
        (**self).read_one()
    }
}

/// In-memory program text.
///
/// ## Example
/// ```
/// use kirlang::interpreter::source::{CharacterSource, StrSource};
///
/// let mut source = StrSource::new("вывод");
///
/// assert_eq!(source.read_one().unwrap(), Some('в'));
/// ```
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Creates a source yielding the characters of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl CharacterSource for StrSource<'_> {
    fn read_one(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Characters decoded from any buffered reader, typically an opened file.
pub struct ReaderSource<R> {
    reader:  R,
    pending: vec::IntoIter<char>,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps `reader`; text is decoded as UTF-8 one line at a time.
    pub fn new(reader: R) -> Self {
        Self { reader,
               pending: Vec::new().into_iter() }
    }
}

impl<R: BufRead> CharacterSource for ReaderSource<R> {
    fn read_one(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(c) = self.pending.next() {
                return Ok(Some(c));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.chars().collect::<Vec<_>>().into_iter();
        }
    }
}

/// Characters typed on the terminal.
///
/// Standard input is shared with the console's `read_line`, so the lock is
/// only held while a single line is being read. When a prompt is configured
/// it is written to standard output every time a new line is requested.
pub struct TerminalSource {
    prompt:  Option<String>,
    pending: vec::IntoIter<char>,
}

impl TerminalSource {
    /// Creates a terminal source that writes `prompt` before reading each
    /// line. Pass `None` to read silently.
    #[must_use]
    pub fn new(prompt: Option<String>) -> Self {
        Self { prompt,
               pending: Vec::new().into_iter() }
    }
}

impl CharacterSource for TerminalSource {
    fn read_one(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(c) = self.pending.next() {
                return Ok(Some(c));
            }

            if let Some(prompt) = &self.prompt {
                let mut out = io::stdout().lock();
                out.write_all(prompt.as_bytes())?;
                out.flush()?;
            }

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.chars().collect::<Vec<_>>().into_iter();
        }
    }
}
