//! kasikari CLI
//!
//! 将样式属性解析为 CSS，或渲染首页文档。

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kasikari_components::{home_page, Document};
use kasikari_core::{default_theme, to_prop_value, NamingMode, Responsive, StyleValue, Theme};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// kasikari style resolver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Theme JSON file (defaults to the built-in theme)
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a single prop to CSS declarations
    Resolve {
        /// CSS property in kebab-case (e.g. margin-top)
        property: String,
        /// Prop value as JSON: "primary", 2, {"base": 1, "md": 2} or null
        value: String,
        /// Resolve without theme token substitution
        #[arg(long)]
        no_theme: bool,
    },
    /// Render the landing page as a full HTML document
    Render {
        /// Document title
        #[arg(long, default_value = "kasikari")]
        title: String,
        /// Class naming strategy
        #[arg(long, value_enum, default_value_t = Naming::Hash)]
        naming: Naming,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Naming {
    Hash,
    Readable,
}

impl From<Naming> for NamingMode {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Hash => NamingMode::Hash,
            Naming::Readable => NamingMode::Readable,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let theme = load_theme(args.theme.as_deref())?;

    match args.command {
        Command::Resolve {
            property,
            value,
            no_theme,
        } => {
            let theme = if no_theme { None } else { Some(&theme) };
            if let Some(css) = resolve(&property, &value, theme)? {
                println!("{}", css);
            }
        }
        Command::Render { title, naming } => {
            let html = Document::new(&title)
                .with_naming(naming.into())
                .render(&theme, home_page)?;
            print!("{}", html);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_theme(path: Option<&Path>) -> Result<Theme> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading theme");
            Theme::from_path(path).with_context(|| format!("loading theme {}", path.display()))
        }
        None => Ok(default_theme().clone()),
    }
}

/// `null` 表示未提供值，不输出任何内容
fn resolve(property: &str, value_json: &str, theme: Option<&Theme>) -> Result<Option<String>> {
    let value: Option<Responsive<StyleValue>> = serde_json::from_str(value_json)
        .with_context(|| format!("invalid prop value: {}", value_json))?;

    Ok(to_prop_value(property, value.as_ref(), theme))
}
