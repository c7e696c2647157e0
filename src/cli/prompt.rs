//! Yes/no confirmation on the terminal

use std::io::{self, BufRead, Write};

/// Ask `question` and read one line of answer.
///
/// Empty input or end of input selects `default`. Unrecognised answers are
/// asked again.
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    default: bool,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    loop {
        write!(out, "{} {}: ", question, hint)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(default);
        }

        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => writeln!(out, "Error: invalid input '{}'", other)?,
        }
    }
}

/// `confirm` against the process's stdin/stdout
pub fn confirm_stdin(question: &str, default: bool) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    confirm(question, default, &mut input, &mut out)
}
