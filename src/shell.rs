//! Line-oriented front ends over stdin/stdout.

use crate::output::{write_normalized, OutputFormat};
use name_normalizer::error::AppError;
use std::io::{BufRead, Write};
use tracing::debug;

/// Reads bytes up to and excluding the next `\n`.
///
/// Returns `None` at end of stream. A final line without a terminator is
/// returned as-is.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(Some(buf))
}

/// Prompts once, reads one line and prints its normalized form.
///
/// End of stream counts as an empty line, so the output is always exactly one
/// line.
pub fn run_prompt<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    prompt: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    if let Some(text) = prompt {
        output.write_all(text.as_bytes())?;
        output.flush()?;
    }

    let line = read_line(&mut input)?.unwrap_or_default();
    debug!(bytes = line.len(), "read interactive line");

    write_normalized(&mut output, &line, format)?;
    output.flush()?;
    Ok(())
}

/// Normalizes every line of `input`; returns the number of lines written.
pub fn run_lines<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<usize, AppError> {
    let mut count = 0;
    while let Some(line) = read_line(&mut input)? {
        write_normalized(&mut output, &line, format)?;
        count += 1;
    }
    output.flush()?;

    debug!(lines = count, "normalized line batch");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_strips_only_the_newline() {
        let mut input = &b"one\r\ntwo"[..];
        assert_eq!(read_line(&mut input).expect("read"), Some(b"one\r".to_vec()));
        assert_eq!(read_line(&mut input).expect("read"), Some(b"two".to_vec()));
        assert_eq!(read_line(&mut input).expect("read"), None);
    }
}
