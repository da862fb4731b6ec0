use clap::Parser;
use std::io;
use std::path::PathBuf;

use jpg_scanner::prelude::*;

#[derive(Parser)]
#[command(name = "jpg_scanner", version)]
#[command(about = "Recursively list JPG file names under a directory", long_about = None)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    directory: PathBuf,

    /// Print scan progress and a summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("Scanning {}", cli.directory.display());
    }

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Scan failures are reported on stderr; the exit status stays 0
    match list_jpg_files(&cli.directory, &mut stdout) {
        Ok(count) => {
            if cli.verbose {
                // Nowhere left to report a failing stderr
                let _ = write_summary(&mut stderr, &cli.directory, count);
            }
        }
        Err(e) => {
            // Same: stderr is the last resort
            let _ = write_filesystem_error(&mut stderr, &e);
        }
    }
}
