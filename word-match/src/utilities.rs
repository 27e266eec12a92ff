use std::io::{self, Write};

/// Prints `prompt` and reads one line, without the trailing newline.
pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_owned())
}

pub fn str_to_bool(str: &str) -> Option<bool> {
    match &str.trim().to_ascii_lowercase()[..] {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}
