use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use rand::{SeedableRng as _, rngs::StdRng};
use tracing_subscriber::EnvFilter;

use contrib_invaders::{
    ComposeOpts, Config, FetchOptions,
    config::{DEFAULT_LOGIN, DEFAULT_OUTPUT, TOKEN_ENV_VAR},
    fetch_contributions, generate_svg,
};

#[derive(Parser, Debug)]
#[command(name = "contrib-invaders", version)]
struct Cli {
    /// GitHub login whose contribution calendar is charted.
    #[arg(default_value = DEFAULT_LOGIN)]
    user: String,

    /// Output SVG path.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Pin the starfield seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// HTTP timeout for the contribution fetch, in seconds.
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let token = std::env::var(TOKEN_ENV_VAR).ok();
    let config = Config::new(
        cli.user,
        token,
        cli.out,
        cli.seed.unwrap_or_else(rand::random),
        Duration::from_secs(cli.timeout_secs),
    )?;
    run(config)
}

fn run(config: Config) -> anyhow::Result<()> {
    let options = FetchOptions {
        timeout: config.timeout,
        ..FetchOptions::default()
    };
    let calendar = fetch_contributions(&config.login, &config.token, &options)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let document = generate_svg(&calendar, &ComposeOpts::default(), &mut rng)?;

    if let Some(parent) = config.output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&config.output, document)
        .with_context(|| format!("write svg '{}'", config.output.display()))?;

    eprintln!("wrote {}", config.output.display());
    Ok(())
}
