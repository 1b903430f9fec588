use std::io::{self, Read, Write};

/// Ask a yes/no question and read a single keystroke.
///
/// Prints `"<message> (y/n)"`, then reads exactly one byte from `input`.
/// Returns true only for `y` or `Y`; anything else, including Enter and end of
/// input, is a no. The rest of the line stays unread.
pub fn confirm(message: &str, input: &mut impl Read, output: &mut impl Write) -> io::Result<bool> {
    writeln!(output, "{message} (y/n)")?;
    output.flush()?;

    let mut buf = [0u8; 1];
    let read = loop {
        match input.read(&mut buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            other => break other?,
        }
    };
    Ok(read == 1 && buf[0].eq_ignore_ascii_case(&b'y'))
}
