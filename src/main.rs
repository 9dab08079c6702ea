use std::io::{self, BufRead, Write};

use colored::Colorize;
use rtucite::crossref::CrossrefClient;
use rtucite::error::CitationError;
use rtucite::session::{ConsoleSink, PromptSource, Session};
use rtucite::SystemClipboard;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CitationError> {
    let client = CrossrefClient::new()?;
    let session = Session::new(client, StdinPrompt, Terminal, SystemClipboard);
    session.run()
}

/// Reads prompt answers from standard input.
struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn read_line(&mut self, label: &str) -> Result<String, CitationError> {
        print!("{label}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // End of input ends the session like a declined continuation.
            return Ok("n".to_string());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prints citations and failures to the terminal.
struct Terminal;

impl ConsoleSink for Terminal {
    fn show(&mut self, citation: &str) {
        println!("\n{}\n{}\n", "Citation:".green(), citation);
    }

    fn show_error(&mut self, err: &CitationError) {
        println!("{} {}", "Error:".red(), err);
    }
}
