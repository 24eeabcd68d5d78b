use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Pipes `input` through `rustfmt`.
pub fn rustfmt(input: &str) -> io::Result<String> {
    let mut command = Command::new("rustfmt")
        .arg("--emit")
        .arg("stdout")
        .arg("--edition")
        .arg("2021")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = command.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let output = command.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::new(io::ErrorKind::Other, stderr.trim().to_string()));
    }

    String::from_utf8(output.stdout).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
