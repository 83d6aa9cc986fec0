use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use tracing::Level;

use downstyle::config::Manifest;
use downstyle::{Props, RenderedElement, Theme, html, merge_all};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = env!("CARGO_PKG_NAME"), version = env!("GIT_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
struct Cli {
    /// Directory holding the manifest; theme arguments to `merge` resolve here too
    #[arg(short = 'C', long = "directory", default_value = ".", global = true)]
    root: PathBuf,

    /// Manifest file name inside the directory
    #[arg(short = 'm', long = "manifest", default_value = "downstyle.toml", global = true)]
    manifest: PathBuf,

    #[command(flatten)]
    log: LogOptions,

    #[command(subcommand)]
    command: Command,
}

/// Log verbosity flags shared by every subcommand.
#[derive(Debug, Args)]
struct LogOptions {
    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

impl LogOptions {
    fn level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

/// What to print for a rendered component.
#[derive(Debug, Args)]
struct RenderOptions {
    /// Render properties as a JSON object
    #[arg(short, long, default_value = "{}")]
    props: String,

    /// Print HTML instead of the JSON element description
    #[arg(long)]
    html: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge theme files in order and print the result
    Merge {
        /// Theme files (.toml or .json), later ones take precedence
        #[arg(required = true)]
        themes: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value = "toml")]
        format: Format,
    },

    /// Render one component from the manifest
    Render {
        component: String,

        #[command(flatten)]
        output: RenderOptions,
    },

    /// Render every manifest component with the same properties
    RenderAll {
        #[command(flatten)]
        output: RenderOptions,
    },

    /// Validate the manifest and its themes, listing resolved components
    Check,
}

fn init_tracing(level: Level) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    #[cfg(distribute)]
    builder.json().init();

    #[cfg(not(distribute))]
    builder.compact().init();
}

fn main() -> CliResult {
    let cli = Cli::parse();
    init_tracing(cli.log.level());
    tracing::debug!(?cli, "parsed arguments");

    let manifest_path = cli.root.join(&cli.manifest);

    match &cli.command {
        Command::Merge { themes, format } => merge_themes(&cli.root, themes, *format),
        Command::Render { component, output } => {
            render_one(&manifest_path, component, output)
        }
        Command::RenderAll { output } => render_all(&manifest_path, output),
        Command::Check => check(&manifest_path),
    }
}

fn merge_themes(root: &Path, paths: &[PathBuf], format: Format) -> CliResult {
    let themes = paths
        .iter()
        .map(|path| Theme::load(&root.join(path)))
        .collect::<downstyle::Result<Vec<_>>>()?;
    let merged = merge_all(&themes);

    tracing::info!(themes = themes.len(), "themes merged");

    let text = match format {
        Format::Toml => toml::to_string_pretty(&merged)?,
        Format::Json => serde_json::to_string_pretty(&merged)?,
    };
    println!("{}", text);
    Ok(())
}

/// Load a manifest together with its merged theme.
fn load(manifest_path: &Path) -> CliResult<(Manifest, Arc<Theme>)> {
    let manifest = Manifest::load(manifest_path)?;
    let theme = Arc::new(manifest.theme()?);
    Ok((manifest, theme))
}

fn render_one(manifest_path: &Path, name: &str, output: &RenderOptions) -> CliResult {
    let (manifest, theme) = load(manifest_path)?;
    let component = manifest.component(name, &theme)?;

    let rendered = component.render(serde_json::from_str(&output.props)?);
    println!("{}", describe(&rendered, output.html)?);
    Ok(())
}

fn render_all(manifest_path: &Path, output: &RenderOptions) -> CliResult {
    let (manifest, theme) = load(manifest_path)?;
    let props: Props = serde_json::from_str(&output.props)?;

    // Components only share the read-only theme, so each renders on its own worker
    let sections = manifest
        .components
        .par_iter()
        .map(|(name, config)| {
            let rendered = config.build(&theme).render(props.clone());
            describe(&rendered, output.html).map(|text| format!("# {}\n{}", name, text))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(components = sections.len(), "rendered all components");

    for section in sections {
        println!("{}", section);
    }
    Ok(())
}

fn check(manifest_path: &Path) -> CliResult {
    let (manifest, theme) = load(manifest_path)?;

    for name in manifest.components.keys() {
        let component = manifest.component(name, &theme)?;
        let base = component.base();
        println!(
            "{}: <{}> class=\"{}\" blocks={:?}",
            name,
            base.element,
            base.class_name,
            component.names().as_slice()
        );
    }

    tracing::info!(components = manifest.components.len(), "manifest ok");
    Ok(())
}

fn describe(rendered: &RenderedElement, as_html: bool) -> Result<String, serde_json::Error> {
    if as_html {
        Ok(html::render(rendered))
    } else {
        serde_json::to_string_pretty(rendered)
    }
}
