use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

#[derive(Parser)]
#[command(name = "findx", version, about = "Find all files and directories with pattern")]
struct Cli {
    /// Glob pattern matched against each entry's base name (`*`, `?`, `[...]`)
    pattern: String,

    /// Search in directory
    #[arg(short = 'i', long = "in", value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Print all the files and directories searched through
    #[arg(short, long, visible_alias = "ver")]
    verbose: bool,

    /// Print entries that could not be read or matched
    #[arg(short, long, visible_alias = "de")]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    println!("Searching for: {} in: {}", cli.pattern, cli.dir.display());

    let results = match findx::search()
        .root(cli.dir.clone())
        .pattern(cli.pattern.clone())
        .run()
    {
        Ok(results) => results,
        Err(err) => match err.path() {
            Some(path) => bail!("{err}: {}", path.display()),
            None => bail!("{err}"),
        },
    };

    println!("Matches:");
    if results.paths.is_empty() {
        println!("File or directory not found");
    } else {
        for path in &results.paths {
            println!("{}", path.display());
        }
    }
    println!("Elapsed time: {:?}", results.stats.duration);

    Ok(())
}

/// Install the stderr subscriber.
///
/// The engine emits visited paths at TRACE and per-entry skips at DEBUG, so
/// `--verbose` shows both while `--debug` alone shows skips only. `RUST_LOG`
/// overrides either flag when set.
fn init_tracing(verbose: bool, debug: bool) {
    let default = if verbose {
        "findx=trace"
    } else if debug {
        "findx=debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
