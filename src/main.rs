use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use mimalloc::MiMalloc;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use lox::common::{EXIT_DATA_ERROR, EXIT_IO_ERROR, EXIT_USAGE, PROMPT};
use lox::{ScanError, ScannerConfig, Token};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "lox", about = "Scan Lox source and print its tokens")]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Emit OR for any lowercase `o` directly followed by `r`.
    #[arg(long)]
    or_shortcut: bool,
}

struct Lox {
    config: ScannerConfig,
    had_error: bool,
}

impl Lox {
    fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            had_error: false,
        }
    }

    fn run(&mut self, source: &str) -> io::Result<()> {
        match lox::scan_tokens_with(source, self.config) {
            Ok(tokens) => print_tokens(&tokens),
            Err(err) => {
                self.report(&err);
                Ok(())
            }
        }
    }

    fn report(&mut self, err: &ScanError) {
        eprintln!("{}", err.report());
        self.had_error = true;
    }
}

fn print_tokens(tokens: &[Token]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for token in tokens {
        writeln!(out, "{} {token}", token.line)?;
    }
    out.flush()
}

fn main() {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            exit(EXIT_USAGE)
        }
        Err(err) => err.exit(),
    };
    let lox = Lox::new(ScannerConfig::new().with_or_shortcut(cli.or_shortcut));
    debug!(config = ?lox.config, "starting");

    let result = match &cli.script {
        Some(path) => run_file(lox, path),
        None => repl(lox),
    };
    if let Err(err) = result {
        error!("i/o failure: {err}");
        exit(EXIT_IO_ERROR);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn repl(mut lox: Lox) -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        print!("{PROMPT}");
        io::stdout().flush()?;
        if stdin.read_until(b'\n', &mut buf)? == 0 {
            println!();
            return Ok(());
        }
        lox.run(&decode(&buf))?;
        // one bad line must not poison the next
        lox.had_error = false;
    }
}

fn run_file(mut lox: Lox, path: &Path) -> io::Result<()> {
    let Ok(bytes) = std::fs::read(path) else {
        eprintln!("Could not read file \"{}\".", path.display());
        exit(EXIT_IO_ERROR);
    };
    lox.run(&decode(&bytes))?;
    if lox.had_error {
        exit(EXIT_DATA_ERROR);
    }
    Ok(())
}

/// Source is raw bytes. Invalid UTF-8 becomes U+FFFD, which is harmless inside strings and
/// comments and an unexpected character anywhere else.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let source = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = source {
        debug!(bytes = bytes.len(), "replaced invalid UTF-8 in source");
    }
    source
}
