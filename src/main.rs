use {
  anyhow::Context,
  clap::Parser,
  legible::{Normalizer, NormalizerOptions},
  std::{fs, path::PathBuf, process},
};

#[derive(Parser)]
#[command(name = "legible")]
#[command(about = "Normalize rich markup descriptions into clean plain text", long_about = None)]
struct Arguments {
  /// Path to the markup file to normalize
  #[arg(value_name = "FILE")]
  input: PathBuf,
  /// Styling-class token to strip from the output (repeatable)
  #[arg(long = "strip-class", value_name = "TOKEN")]
  strip_class: Vec<String>,
}

impl Arguments {
  fn run(self) -> Result {
    let markup = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let options = NormalizerOptions::builder()
      .class_denylist(self.strip_class)
      .build();

    let normalizer =
      Normalizer::new(options).context("failed to create normalizer")?;

    println!("{}", normalizer.normalize(&markup));

    Ok(())
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    )
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
