use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, Level};

use out_preview::{BuildOutput, CommandDecoder, PreviewCache};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let (source, cache) = match (args.next(), args.next()) {
        (Some(source), Some(cache)) => (source, cache),
        _ => bail!("usage: outfile-preview <source-file> <cache-dir>"),
    };

    let source_path = PathBuf::from(&source)
        .canonicalize()
        .with_context(|| format!("cannot resolve source file {}", source))?;
    let cache_dir = absolutize(PathBuf::from(cache))?;

    let decoder_cmd =
        env::var("OUT_DECODER_CMD").context("OUT_DECODER_CMD is not set")?;
    let decoder = CommandDecoder::from_command_line(&decoder_cmd)?;

    info!("building preview cache for {}", source_path.display());

    let preview = PreviewCache::new().build(&decoder, &source_path, &cache_dir)?;

    // single machine-readable result line; logs go to stderr
    println!("{}", serde_json::to_string(&BuildOutput { preview })?);

    Ok(())
}

fn absolutize(path: PathBuf) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
