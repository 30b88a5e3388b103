//! oxc-configs-gh CLI - OXC configs through the authenticated GitHub CLI

use clap::Parser;
use oxc_configs_core::{JsonStyle, ProductConfig, RunArgs, SourceKind};
use std::path::PathBuf;

/// oxc-configs-gh product configuration
#[derive(Clone)]
pub struct OxcConfigsGh;

impl ProductConfig for OxcConfigsGh {
    fn name(&self) -> &'static str {
        "oxc-configs-gh"
    }

    fn display_name(&self) -> &'static str {
        "oxc-configs (GitHub)"
    }

    fn source_kind(&self) -> SourceKind {
        SourceKind::GitHubApi
    }

    fn default_template_location(&self) -> &'static str {
        "simek/oxc-configs"
    }

    fn template_location_env(&self) -> &'static str {
        "OXC_CONFIGS_REPO"
    }

    fn offers_dependency_install(&self) -> bool {
        false
    }

    fn formats_configs(&self) -> bool {
        false
    }

    fn json_style(&self) -> JsonStyle {
        JsonStyle::Pretty
    }
}

#[derive(Parser, Debug)]
#[command(name = "oxc-configs-gh")]
#[command(about = "Fetch OXC formatter and linter configs using the GitHub CLI")]
#[command(version)]
pub struct Args {
    /// Template to use (react-typescript, typescript, javascript)
    pub template: Option<String>,

    /// Local directory to use for templates instead of fetching from remote (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for RunArgs {
    fn from(args: Args) -> Self {
        RunArgs {
            template: args.template,
            template_dir: args.template_dir,
            yes: args.yes,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt cancels the run
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(0);
    })
    .ok();

    let args = Args::parse();
    let result = oxc_configs_core::run(&OxcConfigsGh, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        std::process::exit(oxc_configs_core::report(&err));
    }
}
