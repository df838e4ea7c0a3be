//! Console glue: record sources and the read-evaluate query loop
//!
//! Everything here is thin I/O around the search core. Readers and writers
//! are injected so tests can script a whole session; queries and strategy
//! selections pass into the pure `find` path as immutable values, and no
//! state lives outside the loop's own locals.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::config::RecordSource;
use crate::error::{LinedexError, Result};
use crate::query::SearchStrategy;
use crate::service::SearchService;

/// Fixed message printed when a query matches nothing
pub const NO_RESULTS_MESSAGE: &str = "No matching records found.";

const PROMPT: &str = "search> ";

/// Load the startup record set described by a source
///
/// The reader and writer are only touched for `Interactive`; a file source
/// reads from the path alone.
pub fn load_records<R: BufRead, W: Write>(
    source: &RecordSource,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    match source {
        RecordSource::File(path) => read_records_from_file(path),
        RecordSource::Interactive => read_records_interactive(input, output),
    }
}

/// Read records from a file, one record per line
pub fn read_records_from_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        records.push(line?);
    }
    info!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Read records from the console: a count line, then that many record lines
///
/// The count must be a non-negative integer; running out of input before
/// the promised number of lines is an unexpected-EOF error.
pub fn read_records_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    write!(output, "Number of records: ")?;
    output.flush()?;
    let header = read_line_opt(input)?.ok_or_else(unexpected_eof)?;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|_| LinedexError::InvalidRecordCount(header.trim().to_string()))?;

    // The count is console input; take it as a capacity hint only.
    let mut records = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        write!(output, "Record {}: ", i + 1)?;
        output.flush()?;
        let line = read_line_opt(input)?.ok_or_else(unexpected_eof)?;
        records.push(line);
    }
    info!("Collected {} record(s) interactively", records.len());
    Ok(records)
}

/// Run the query loop until `exit`, `quit`, or end of input
///
/// Each iteration reads one line of the form `<STRATEGY> <terms...>`,
/// prints the matching records one per line (or the fixed no-results
/// message), and finishes with a count-and-timing line. A selector that
/// parses to no strategy is reported and the loop keeps prompting.
pub fn run<R: BufRead, W: Write>(
    service: &SearchService,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{} record(s) indexed", service.record_count())?;
    print_usage(output)?;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match read_line_opt(input)? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.eq_ignore_ascii_case("help") {
            print_usage(output)?;
            continue;
        }

        match parse_query_line(line) {
            Ok((strategy, query)) => run_query(service, strategy, query, output)?,
            Err(err) if err.is_input_error() => writeln!(output, "{}", err)?,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Split a console line into its strategy selector and query string
///
/// The query part may be empty; its meaning is up to the strategy (`None`
/// matches everything, the others match nothing).
fn parse_query_line(line: &str) -> Result<(SearchStrategy, &str)> {
    let (selector, query) = match line.split_once(char::is_whitespace) {
        Some((selector, query)) => (selector, query),
        None => (line, ""),
    };
    Ok((selector.parse()?, query))
}

fn run_query<W: Write>(
    service: &SearchService,
    strategy: SearchStrategy,
    query: &str,
    output: &mut W,
) -> Result<()> {
    let start = Instant::now();
    let matches = service.find(query, strategy);
    let elapsed = start.elapsed();

    if matches.is_empty() {
        writeln!(output, "{}", NO_RESULTS_MESSAGE)?;
    } else {
        for record in &matches {
            writeln!(output, "{}", record)?;
        }
    }
    writeln!(
        output,
        "{} match(es) in {} ms",
        matches.len(),
        elapsed.as_millis()
    )?;
    Ok(())
}

fn print_usage<W: Write>(output: &mut W) -> Result<()> {
    writeln!(
        output,
        "Enter ALL|ANY|NONE followed by search terms; help reprints this, exit quits."
    )?;
    Ok(())
}

/// Read one line without its trailing newline; `None` at end of input
fn read_line_opt<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

fn unexpected_eof() -> LinedexError {
    LinedexError::Io(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        "record input ended before the promised number of lines",
    ))
}
