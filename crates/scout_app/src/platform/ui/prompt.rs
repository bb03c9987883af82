use std::io::{self, BufRead, Write};

/// Reads one field from `input`.
///
/// Returns `None` on end of input. An empty line keeps `current`, so a
/// pre-filled value survives a bare Enter.
pub fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<Option<String>> {
    if current.is_empty() {
        write!(output, "{label}: ")?;
    } else {
        write!(output, "{label} [{current}]: ")?;
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let entered = line.trim_end_matches(['\r', '\n']).trim();
    if entered.is_empty() {
        Ok(Some(current.to_string()))
    } else {
        Ok(Some(entered.to_string()))
    }
}

/// Blocks until the user presses Enter (or input ends).
pub fn wait_for_enter<R: BufRead>(input: &mut R) -> io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
