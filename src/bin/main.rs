extern crate sphere_tracer as root;

use root::parsing::{load_config, Config, TOMLConfig};
use root::renderer::{output_film, NaiveRenderer, Renderer};

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info, warn, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    /// output path without extension, overrides the config file
    #[structopt(short, long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn construct_config(opts: &Opt) -> anyhow::Result<Config> {
    let path = Path::new(&opts.config_file);
    let mut config = if path.exists() {
        load_config(path).with_context(|| format!("couldn't load {}", path.display()))?
    } else {
        warn!(
            "config file {} not found, rendering the default scene",
            path.display()
        );
        Config::try_from(TOMLConfig::default())?
    };
    if let Some(output) = &opts.output {
        config.render_settings.filename = output.clone();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    let config = construct_config(&opts)?;
    let scene = match config.scene.build() {
        Ok(scene) => Arc::new(scene),
        Err(e) => {
            error!("fatal error building scene, aborting. error is {}", e);
            return Err(e.into());
        }
    };

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let renderer: Box<dyn Renderer> = Box::new(NaiveRenderer::new());
    let framebuffer = renderer.render(scene, &config)?;
    for path in output_film(&config.render_settings, &framebuffer)
        .context("failed to write render output")?
    {
        info!("wrote {}", path.display());
    }
    Ok(())
}
