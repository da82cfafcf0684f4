use anyhow::{Context, Result};
use argh::{EarlyExit, FromArgs};
use bloop::flavor::{self, BLAME, Flavor, KONAMI_CODE, RICK_ROLL};
use bloop::{Config, Interpreter, Program};
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Run a BLOOP program from a file or from the command line.
struct Args {
    #[argh(positional)]
    /// program file, conventionally ending in .bloop
    file: Option<PathBuf>,

    #[argh(option, short = 'c')]
    /// inline BLOOP code to run instead of a file
    code: Option<String>,

    #[argh(option, short = 'm', from_str_fn(positive_steps))]
    /// step limit (default 1000000)
    max: Option<u64>,

    #[argh(switch)]
    /// enable existential commentary
    existential: bool,

    #[argh(switch)]
    /// race the die
    speedrun: bool,

    #[argh(switch)]
    /// you know what this does
    rick: bool,

    #[argh(switch)]
    /// it's not a bug
    blame: bool,

    #[argh(switch, short = 'i')]
    /// run lines interactively
    interactive: bool,
}

fn positive_steps(value: &str) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!(
            "--max value must be a positive integer, got {value:?}"
        )),
    }
}

fn usage() -> String {
    match Args::from_args(&["bloop"], &["--help"]) {
        Err(EarlyExit { output, .. }) => output,
        Ok(_) => String::new(),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bloop=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn read_source(path: &Path) -> Result<String> {
    let is_bloop = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bloop"));
    if !is_bloop {
        warn!(path = %path.display(), "file does not have a .bloop extension");
    }
    fs::read_to_string(path).with_context(|| format!("error reading file {}", path.display()))
}

fn run(args: Args) -> Result<ExitCode> {
    if args.rick {
        println!("{RICK_ROLL}");
        return Ok(ExitCode::SUCCESS);
    }
    if args.blame {
        println!("{BLAME}");
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = args.max.map(Config::with_max_steps).unwrap_or_default();

    if args.interactive {
        Interpreter::new(config)
            .repl()
            .map_err(|err| anyhow::anyhow!("interactive session failed: {err}"))?;
        return Ok(ExitCode::SUCCESS);
    }

    let source = match (args.code, args.file) {
        (Some(code), _) => code,
        (None, Some(path)) => read_source(&path)?,
        (None, None) => String::new(),
    };
    if source.is_empty() {
        eprintln!("error: no BLOOP code provided");
        eprint!("{}", usage());
        return Ok(ExitCode::FAILURE);
    }

    let mut flavor = Flavor::new(rand::thread_rng());
    let program = Program::parse(&source);
    if program.is_empty() {
        println!("{}", flavor.koan());
        return Ok(ExitCode::SUCCESS);
    }

    let balance = program.balance();
    if !balance.is_balanced() {
        warn!(
            unmatched_open = balance.unmatched_open,
            unmatched_close = balance.unmatched_close,
            "unbalanced brackets"
        );
    }

    if source.contains(KONAMI_CODE) {
        config = config.doubled();
        eprintln!("🕹️  +30 lives! Step limit doubled.");
    }

    let start = Instant::now();
    let result = Interpreter::new(config).run(&program);
    let elapsed = start.elapsed();

    let output = match &result {
        Ok(run) => run.output.as_str(),
        Err(err) => err.output.as_str(),
    };
    let mut stdout = std::io::stdout().lock();
    if args.existential {
        write!(stdout, "{}", flavor.existential(output))?;
    } else {
        write!(stdout, "{output}")?;
    }
    stdout.flush()?;

    if args.speedrun {
        eprintln!(
            "\n⏱  {:?} — {}",
            elapsed,
            flavor::speedrun_verdict(elapsed)
        );
    }
    if flavor::is_nice(output) {
        eprintln!("\nnice.");
    }

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("\n{}", flavor.step_limit_quip());
            eprintln!("{err}");
            Ok(ExitCode::from(2))
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args: Args = argh::from_env();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
