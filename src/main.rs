//! Minimal render harness: reads one JSON invoice record from a file
//! argument or stdin, writes the PDF next to the working directory, and
//! prints the artifact name.

use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(filename) => {
            println!("{filename}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, Box<dyn std::error::Error>> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let rendered = faktura::render_invoice_json(&json)?;
    std::fs::write(&rendered.filename, &rendered.bytes)?;
    Ok(rendered.filename)
}
