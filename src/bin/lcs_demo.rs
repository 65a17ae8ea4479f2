//! Interactive driver: prompts for two strings, shows the grid fill row
//! by row, then lists every distinct longest common subsequence.

use std::io::{self, BufRead, Write};

use log::{LevelFilter, Log, Metadata, Record};

use lcs_all::{enumerate, LcsTable};

/// Forwards every record to stdout so the grid dumps the library emits
/// while filling are visible without any configuration.
struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

fn prompt(reader: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn main() -> io::Result<()> {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let a = match prompt(&mut reader, "\nEnter string 1: ")? {
            Some(line) => line,
            None => break,
        };
        let b = match prompt(&mut reader, "Enter string 2: ")? {
            Some(line) => line,
            None => break,
        };

        println!();
        let table = LcsTable::build(&a, &b);

        match enumerate(&table) {
            Ok(found) => {
                println!("Length of the longest common subsequence: {}\n", found.length);
                println!("Longest common subsequences:\n");
                for s in &found.sequences {
                    println!("{s}");
                }
                if found.truncated {
                    println!("\n(deduplication set filled; further subsequences were not listed)");
                }
            }
            Err(err) => println!("error: {err}"),
        }

        let again = match prompt(&mut reader, "\nContinue? (enter 'y' for yes): ")? {
            Some(line) => line,
            None => break,
        };
        if again.trim() != "y" {
            break;
        }
    }

    Ok(())
}
