//! Input acquisition: first argument, or an interactive prompt.

use crate::error::Ipv4InfoError;
use std::error::Error;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Please enter an IP: ";

/// Return `arg` if given, otherwise prompt on `writer` and read one line.
///
/// Surrounding whitespace is trimmed. End of input with nothing read is a
/// [`Ipv4InfoError::MalformedAddressText`].
pub fn read_input<R, W>(
    arg: Option<String>,
    mut reader: R,
    mut writer: W,
) -> Result<String, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    if let Some(arg) = arg {
        log::debug!("Input from argument: '{arg}'");
        return Ok(arg.trim().to_string());
    }

    write!(writer, "{PROMPT}")?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        log::warn!("No input on stdin");
        return Err(Ipv4InfoError::MalformedAddressText(String::new()).into());
    }
    log::debug!("Input from prompt: '{}'", line.trim());
    Ok(line.trim().to_string())
}
