use clap::{Parser, Subcommand};
use simple_folio::changelog::group_by_month;
use simple_folio::document::Document;
use simple_folio::theme::{FileStore, Theme, ThemeManager};
use simple_folio::{config, content, generate, output};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Single-page static site generator for personal portfolios")]
#[command(long_about = "\
Single-page static site generator for personal portfolios

Four JSON files describe you: who you are, where you worked, what you
built, and what you did each week. The output is one index.html with
inline styles and script, plus your assets.

Content structure:

  content/
  ├── config.toml        # Site config (optional)
  ├── personal.json      # Name, age, position, photo, contacts
  ├── experience.json    # Work history, shown in file order
  ├── projects.json      # Projects, each \"hobby\" or \"personal\"
  ├── changelog.json     # Weekly entries: { week: \"YYYY-MM-DD\", tasks: [...] }
  └── assets/            # Photos and images → copied to output root

The changelog is shown grouped by calendar month, most recent first.

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for persisted state (theme preference)
    #[arg(long, default_value = ".simple-folio", global = true)]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site into the output directory
    Build,
    /// Validate the content directory without building
    Check,
    /// Print the changelog grouped by month
    Changelog,
    /// Show or change the page's default theme, used by the next build
    /// until a visitor picks their own
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the theme the next build will use
    Get,
    /// Flip between light and dark and store the choice
    Toggle,
    /// Store an explicit choice
    Set {
        /// light or dark
        theme: Theme,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!(
                "==> Building {} → {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = generate::generate(&cli.source, &cli.output, &cli.state_dir)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let loaded = content::load_content(&cli.source)?;
            let months = group_by_month(&loaded.changelog, site_config.locale).len();
            output::print_content_summary(&loaded, months, site_config.locale);
            println!("==> Content is valid");
        }
        Command::Changelog => {
            let site_config = config::load_config(&cli.source)?;
            let entries = content::load_changelog(&cli.source)?;
            let groups = group_by_month(&entries, site_config.locale);
            output::print_changelog(&groups, site_config.locale);
        }
        Command::Theme { action } => run_theme(action, &cli.source, &cli.state_dir)?,
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Theme commands act on the same preference file the build reads.
fn run_theme(
    action: ThemeAction,
    source: &Path,
    state_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let store = FileStore::in_dir(state_dir, &site_config.theme.storage_key);
    let mut doc = Document::skeleton();
    let mut manager = ThemeManager::new(store, site_config.theme.system, &mut doc);

    match action {
        ThemeAction::Get => {}
        ThemeAction::Toggle => {
            manager.toggle(&mut doc)?;
        }
        ThemeAction::Set { theme } => manager.set(theme, &mut doc)?,
    }
    output::print_theme(manager.get(), manager.has_explicit_choice());
    Ok(())
}
