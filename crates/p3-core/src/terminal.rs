//! Hidden secret input.

use std::io::{self, BufRead, IsTerminal};

use crate::quiz::SecretReader;

/// Reads secrets from the controlling terminal with echo turned off.
///
/// Input that is not valid UTF-8 comes back as a read error, which the
/// quiz treats like any other failed read.
#[derive(Debug, Default)]
pub struct TerminalReader;

impl SecretReader for TerminalReader {
    fn read_secret(&mut self) -> io::Result<Vec<u8>> {
        rpassword::read_password().map(String::into_bytes)
    }
}

/// Reads one secret line from `input`, stripping the line terminator.
///
/// Used when stdin is not a terminal, e.g. `echo secret | p3 hash`.
#[derive(Debug)]
pub struct LineReader<B> {
    input: B,
}

impl<B: BufRead> LineReader<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }
}

impl<B: BufRead> SecretReader for LineReader<B> {
    fn read_secret(&mut self) -> io::Result<Vec<u8>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Fail unless stdin is a terminal that hidden reads can use.
pub fn ensure_terminal() -> io::Result<()> {
    if !io::stdin().is_terminal() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "stdin is not a terminal",
        ));
    }

    #[cfg(unix)]
    std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")?;

    Ok(())
}

/// Pick the hidden terminal reader when stdin is interactive, otherwise read
/// plain lines from stdin.
pub fn stdin_reader() -> Box<dyn SecretReader + Send> {
    if io::stdin().is_terminal() {
        Box::new(TerminalReader)
    } else {
        Box::new(LineReader::new(io::BufReader::new(io::stdin())))
    }
}
