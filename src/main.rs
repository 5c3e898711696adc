use std::{
  fs::File,
  io::{self, BufReader, BufWriter, Read, Write},
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::{Parser, Subcommand};
use pngchunk::*;
use tracing_subscriber::EnvFilter;

/// Take PNG and APNG files apart chunk by chunk.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Write every record of a PNG to its own file in DIR.
  Split {
    /// PNG to read, `-` for stdin.
    input: PathBuf,
    /// Output directory, must be empty or not exist yet.
    dir: PathBuf,
  },
  /// Set how many times an APNG plays, 0 is forever.
  SetLoop {
    /// New play count.
    count: u32,
    /// PNG to read, `-` for stdin.
    #[arg(default_value = "-")]
    input: PathBuf,
    /// Where to write the result, `-` for stdout.
    #[arg(default_value = "-")]
    output: PathBuf,
  },
  /// Print each chunk's type, length and CRC status.
  List {
    /// PNG to read, `-` for stdin.
    #[arg(default_value = "-")]
    input: PathBuf,
  },
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  match run(Cli::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("pngchunk: {e}");
      if e.is_format_error() {
        ExitCode::from(1)
      } else {
        ExitCode::from(2)
      }
    }
  }
}

fn run(cli: Cli) -> PngChunkResult<()> {
  match cli.command {
    Command::Split { input, dir } => {
      let written = split_to_dir(open_input(&input)?, &dir)?;
      println!("wrote {} files to {}", written.len(), dir.display());
    }
    Command::SetLoop { count, input, output } => {
      let source = open_input(&input)?;
      let sink = open_output(&output)?;
      let report = rewrite_loop_count(source, sink, count)?;
      for warning in &report.warnings {
        eprintln!("pngchunk: warning: {warning}");
      }
    }
    Command::List { input } => {
      let stdout = io::stdout();
      let mut out = stdout.lock();
      for summary in list_chunks(open_input(&input)?)? {
        writeln!(out, "{summary}")?;
      }
    }
  }
  Ok(())
}

fn is_std_stream(path: &Path) -> bool {
  path.as_os_str() == "-"
}

fn open_input(path: &Path) -> io::Result<Box<dyn Read>> {
  Ok(if is_std_stream(path) {
    Box::new(BufReader::new(io::stdin().lock()))
  } else {
    Box::new(BufReader::new(File::open(path)?))
  })
}

fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
  Ok(if is_std_stream(path) {
    Box::new(BufWriter::new(io::stdout().lock()))
  } else {
    Box::new(BufWriter::new(File::create(path)?))
  })
}
