use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;

use docs_versioning::banner::{LoadOutcome, PageStatus, classify, load_and_render};
use docs_versioning::config::{BannerConfig, current_version_from_env};
use docs_versioning::document::{LoadSignal, Page};
use docs_versioning::logging::{DEFAULT_LOG_LEVEL, init_logging};
use docs_versioning::manifest::ManifestSource;
use docs_versioning::manifest::sources::{FileManifestSource, HttpManifestSource};

#[derive(Parser)]
#[command(name = "docs-versioning")]
#[command(version, about = "Version banner and version switcher for documentation sites")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the version list and banner as HTML fragments
    Render {
        #[command(flatten)]
        target: TargetArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },
    /// Print whether the version is current, outdated or development
    Classify {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// JSON file with `currentVersion` and `baseUrl`
    #[arg(long, conflicts_with_all = ["base_url", "current_version"])]
    config: Option<PathBuf>,

    /// Root URL of the documentation site
    #[arg(long, required_unless_present = "config")]
    base_url: Option<String>,

    /// Viewed version without the leading "v" (defaults to the GITHUB_REF branch)
    #[arg(long)]
    current_version: Option<String>,

    /// Read the manifest from a local file instead of `{base-url}/versions.json`
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

impl TargetArgs {
    fn banner_config(&self) -> anyhow::Result<BannerConfig> {
        if let Some(path) = &self.config {
            return BannerConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {:?}", path));
        }

        let current_version = self
            .current_version
            .clone()
            .unwrap_or_else(current_version_from_env);
        let base_url = self.base_url.clone().unwrap_or_default();

        Ok(BannerConfig::new(current_version, base_url)?)
    }

    fn manifest_source(&self, config: &BannerConfig) -> Box<dyn ManifestSource> {
        match &self.manifest {
            Some(path) => Box::new(FileManifestSource::new(path)),
            None => Box::new(HttpManifestSource::new(config)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let output = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command))?;
    println!("{}", output);

    Ok(())
}

async fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Render { target, format } => {
            let config = target.banner_config()?;
            let source = target.manifest_source(&config);
            let mut page = Page::new();

            let outcome =
                load_and_render(&config, source.as_ref(), &mut page, &LoadSignal::complete())
                    .await?;
            // A manifest failure is already logged; the page goes out without a banner
            let status = match outcome {
                LoadOutcome::Rendered(status) => Some(status),
                LoadOutcome::Skipped(_) => None,
            };

            format_page(&page, status, format)
        }
        Command::Classify { target } => {
            let config = target.banner_config()?;
            let manifest = target.manifest_source(&config).fetch_manifest().await?;
            Ok(classify(config.current_version(), &manifest).to_string())
        }
    }
}

fn format_page(
    page: &Page,
    status: Option<PageStatus>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let list_html = page.other_versions().map(|e| e.to_html()).unwrap_or_default();
    let banner_html = page.banner().map(|e| e.to_html()).unwrap_or_default();

    match format {
        OutputFormat::Html => Ok(format!("{}\n{}", list_html, banner_html)),
        OutputFormat::Json => {
            let output = json!({
                "status": status.map(|s| s.as_str()),
                "versions": list_html,
                "banner": banner_html,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}
