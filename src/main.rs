/// Запуск конвейера масштабирования признаков URL

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phishing_ml::{Pipeline, PipelineConfig};

#[derive(Debug, Parser)]
#[command(name = "phishing-ml", version, about = "URL feature extraction and MinMax scaling")]
struct Cli {
    /// JSON файл настроек
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV со столбцами URL и Label
    #[arg(long)]
    input: Option<PathBuf>,

    /// Каталог для CSV и JSON сводки
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Каталог для PNG графиков
    #[arg(long)]
    plots_dir: Option<PathBuf>,

    /// Не рисовать графики
    #[arg(long)]
    no_plots: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(plots_dir) = self.plots_dir {
            config.plots_dir = plots_dir;
        }
        if self.no_plots {
            config.render_plots = false;
        }

        Ok(config)
    }
}

fn main() {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("phishing-ml error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;
    tracing::debug!("Config: {:?}", config);

    Pipeline::new(config).run().context("Pipeline failed")?;
    Ok(())
}
