// Command-line front end for ggpatch.
//
// Subcommands: `patch` rewrites the hostnames in a client executable,
// `scan` reports occurrences without writing, `hosts` prints the table.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::engine::{self, PatchReport};
use crate::error::PatchError;
use crate::hostnames::{HOSTNAMES, MAX_DOMAIN_LENGTH, MIN_DOMAIN_LENGTH};
use crate::io as patch_io;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Rewrite GG server hostnames in a client executable.
#[derive(Parser, Debug)]
#[command(
    name = "ggpatch",
    version,
    about = "Fixed-size hostname patcher for GG client executables",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Replace every known hostname with a new server address.
    Patch(PatchArgs),
    /// Count known hostnames without modifying anything.
    Scan(ScanArgs),
    /// Print the hostname table.
    Hosts,
}

#[derive(Args, Debug)]
struct PatchArgs {
    /// Replacement server address (at most 21 characters).
    #[arg(long, short = 's', value_name = "ADDRESS")]
    server: String,

    /// Output file (default: <input>_patched.exe next to the input).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Run all checks but do not write output.
    #[arg(long = "check-only")]
    no_output: bool,

    /// Client executable.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Client executable.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Patch,
    Scan,
    Hosts,
}

struct Options {
    command: Command,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    no_output: bool,
    server: Option<String>,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    json_output: bool,
}

fn resolve_options(cli: Cli) -> Options {
    let quiet = cli.quiet;
    let verbose = cli.verbose.min(2);
    let force = cli.force;
    let json_output = cli.json_output;

    match cli.command {
        Cmd::Patch(args) => Options {
            command: Command::Patch,
            use_stdout: args.stdout,
            force,
            quiet,
            verbose,
            no_output: args.no_output,
            server: Some(args.server),
            input_file: Some(args.input),
            output_file: args.output.or(args.output_pos),
            json_output,
        },
        Cmd::Scan(args) => Options {
            command: Command::Scan,
            use_stdout: false,
            force,
            quiet,
            verbose,
            no_output: true,
            server: None,
            input_file: Some(args.input),
            output_file: None,
            json_output,
        },
        Cmd::Hosts => Options {
            command: Command::Hosts,
            use_stdout: false,
            force,
            quiet,
            verbose,
            no_output: true,
            server: None,
            input_file: None,
            output_file: None,
            json_output,
        },
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("ggpatch".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Hosts command
// ---------------------------------------------------------------------------

fn cmd_hosts(opts: &Options) -> i32 {
    if opts.json_output {
        let json = serde_json::json!({
            "command": "hosts",
            "hostnames": HOSTNAMES,
            "max_domain_length": MAX_DOMAIN_LENGTH,
            "min_domain_length": MIN_DOMAIN_LENGTH,
        });
        eprintln!("{json:#}");
    }
    for h in HOSTNAMES {
        println!("{h:<24} {}", h.len());
    }
    println!("MAX_DOMAIN_LENGTH={MAX_DOMAIN_LENGTH}");
    println!("MIN_DOMAIN_LENGTH={MIN_DOMAIN_LENGTH}");
    0
}

// ---------------------------------------------------------------------------
// Scan command
// ---------------------------------------------------------------------------

fn print_report(report: &PatchReport) {
    println!("{:<24} {:>6} {:>6}", "hostname", "ascii", "utf16");
    for h in &report.hosts {
        println!("{:<24} {:>6} {:>6}", h.hostname, h.ascii, h.utf16);
    }
}

fn report_json(report: &PatchReport) -> serde_json::Value {
    report
        .hosts
        .iter()
        .map(|h| {
            serde_json::json!({
                "hostname": h.hostname,
                "ascii": h.ascii,
                "utf16": h.utf16,
            })
        })
        .collect()
}

fn cmd_scan(opts: &Options) -> i32 {
    let Some(input) = opts.input_file.as_deref() else {
        eprintln!("ggpatch: scan requires an input file");
        return 1;
    };

    let data = match patch_io::read_input(input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("ggpatch: {e}");
            return 1;
        }
    };

    let report = engine::survey(&data);
    let totals = report.totals();

    if !opts.quiet {
        print_report(&report);
        println!(
            "total: ASCII {}x, UTF-16 {}x",
            totals.ascii_replacements, totals.utf16_replacements
        );
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": "scan",
            "input_size": data.len(),
            "ascii": totals.ascii_replacements,
            "utf16": totals.utf16_replacements,
            "hosts": report_json(&report),
        });
        eprintln!("{json:#}");
    }

    if totals.is_empty() {
        eprintln!("ggpatch: {}", PatchError::NoMatchesFound);
        return 1;
    }
    0
}

// ---------------------------------------------------------------------------
// Patch command
// ---------------------------------------------------------------------------

fn cmd_patch(opts: &Options) -> i32 {
    let (Some(input), Some(server)) = (opts.input_file.as_deref(), opts.server.as_deref()) else {
        eprintln!("ggpatch: patch requires an input file and --server");
        return 1;
    };

    let result = if opts.use_stdout && !opts.no_output {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        patch_io::patch_to_writer(input, &mut out, server)
    } else {
        let output = opts
            .output_file
            .clone()
            .unwrap_or_else(|| patch_io::default_output_path(input));
        let output = (!opts.no_output).then_some(output);
        patch_io::patch_file(input, output.as_deref(), server, opts.force)
    };

    let stats = match result {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ggpatch: {e}");
            return 1;
        }
    };

    let address = server.trim();
    if !opts.quiet {
        match &stats.output_path {
            Some(path) => eprintln!("ggpatch: patched {} -> {address}", path.display()),
            None if opts.no_output => eprintln!("ggpatch: check passed, no output written"),
            None => eprintln!("ggpatch: patched <stdout> -> {address}"),
        }
        eprintln!(
            "ggpatch: ASCII: {}x, UTF-16: {}x",
            stats.result.ascii_replacements, stats.result.utf16_replacements
        );
    }

    if opts.verbose > 0 && !opts.quiet {
        for h in stats.report.hosts.iter().filter(|h| h.ascii + h.utf16 > 0) {
            eprintln!("ggpatch:   {}: ascii {}, utf16 {}", h.hostname, h.ascii, h.utf16);
        }
        if let (Some(i), Some(o)) = (stats.input_sha256, stats.output_sha256) {
            eprintln!("ggpatch: sha256 in:  {}", patch_io::hex(&i));
            eprintln!("ggpatch: sha256 out: {}", patch_io::hex(&o));
        }
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": "patch",
            "server": address,
            "input_size": stats.input_size,
            "output_size": stats.output_size,
            "output": stats.output_path.as_ref().map(|p| p.display().to_string()),
            "ascii": stats.result.ascii_replacements,
            "utf16": stats.result.utf16_replacements,
            "hosts": report_json(&stats.report),
            "input_sha256": stats.input_sha256.map(|d| patch_io::hex(&d)),
            "output_sha256": stats.output_sha256.map(|d| patch_io::hex(&d)),
        });
        eprintln!("{json:#}");
    }

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let mut opts = resolve_options(cli);

    let default_filter = match opts.verbose {
        _ if opts.quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Warn if -c overrides output filename.
    if opts.use_stdout
        && !opts.quiet
        && let Some(path) = opts.output_file.take()
    {
        eprintln!(
            "ggpatch: warning: -c option overrides output filename: {}",
            path.display()
        );
    }

    let exit_code = match opts.command {
        Command::Patch => cmd_patch(&opts),
        Command::Scan => cmd_scan(&opts),
        Command::Hosts => cmd_hosts(&opts),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
