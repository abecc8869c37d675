use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use log::{debug, error, info};

mod report;
mod report_types;
mod source;
mod stats;

use report_types::Report;
use source::{FileSource, SourceError, TextSource};
use stats::{count_characters, count_words};

const USAGE_ARG: &str = "<path_to_book>"; // single positional argument
const DEFAULT_LOG_FILTER: &str = "warn"; // overridden by RUST_LOG
const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1; // usage and read errors alike

/// Count words and letters of an already loaded text.
/// The two counters only borrow `text`, so they run side by side.
fn analyze(source: &str, text: &str) -> Report {
    let start = Instant::now();
    let (word_count, counts) = rayon::join(|| count_words(text), || count_characters(text));
    debug!(
        "analyzed {} ({} words, {} distinct letters) in {:.2?}",
        source,
        word_count,
        counts.len(),
        start.elapsed()
    );
    Report::new(source, word_count, &counts)
}

/// Load the book at `path` and build its report. Nothing is counted if the
/// read fails.
fn run(reader: &impl TextSource, path: &Path) -> Result<Report, SourceError> {
    info!("--- Processing {} ---", path.display());
    let text = reader.read_text(path)?;
    Ok(analyze(&path.display().to_string(), &text))
}

/// Handle the command line: `args` includes the program name. The report goes
/// to `out`, usage and errors go to `err`. Returns the process exit status.
fn cli(
    args: impl IntoIterator<Item = OsString>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    let args: Vec<OsString> = args.into_iter().collect();
    if args.len() != 2 {
        let program = args
            .first()
            .map(|p| Path::new(p).display().to_string())
            .unwrap_or_else(|| "bookbot".to_string());
        let _ = writeln!(err, "Usage: {} {}", program, USAGE_ARG);
        return EXIT_FAILURE;
    }

    match run(&FileSource, Path::new(&args[1])) {
        Ok(report) => match write!(out, "{}", report).and_then(|()| out.flush()) {
            Ok(()) => EXIT_OK,
            Err(e) => {
                error!("failed to write report: {}", e);
                EXIT_FAILURE
            }
        },
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let code = cli(env::args_os(), &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}
