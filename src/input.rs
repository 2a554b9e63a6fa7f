use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "Unexpected EOF!")
}

/// Print `prompt` and read one line without its line ending.
/// Returns `None` once the input is exhausted.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, io::Error> {
    let mut buffer = String::new();

    write!(output, "{}", prompt)?;
    output.flush()?;

    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }

    let line = buffer.trim_end_matches(|c: char| c == '\n' || c == '\r');
    Ok(Some(line.to_string()))
}

/// Like [`read_line`], but running out of input is an error.
pub fn read_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, io::Error> {
    read_line(input, output, prompt)?.ok_or_else(end_of_input)
}

/// Ask until the answer parses as a `T`.
pub fn read_value<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<T, io::Error>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_text(input, output, prompt)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please insert only natural numbers in decimal!")?,
        }
    }
}
