//! oxc-configs CLI - OXC formatter and linter configs from the public template repository

use clap::Parser;
use oxc_configs_core::{JsonStyle, PackageManager, ProductConfig, RunArgs, SourceKind};
use std::path::PathBuf;

/// oxc-configs product configuration
#[derive(Clone)]
pub struct OxcConfigs;

impl ProductConfig for OxcConfigs {
    fn name(&self) -> &'static str {
        "oxc-configs"
    }

    fn display_name(&self) -> &'static str {
        "oxc-configs"
    }

    fn source_kind(&self) -> SourceKind {
        SourceKind::Raw
    }

    fn default_template_location(&self) -> &'static str {
        "https://raw.githubusercontent.com/simek/oxc-configs/HEAD"
    }

    fn template_location_env(&self) -> &'static str {
        "OXC_CONFIGS_TEMPLATE_URL"
    }

    fn offers_dependency_install(&self) -> bool {
        true
    }

    fn formats_configs(&self) -> bool {
        true
    }

    // oxfmt rewrites the files afterwards
    fn json_style(&self) -> JsonStyle {
        JsonStyle::Compact
    }
}

#[derive(Parser, Debug)]
#[command(name = "oxc-configs")]
#[command(about = "Fetch OXC formatter and linter configs for your project")]
#[command(version)]
pub struct Args {
    /// Template to use (react-typescript, typescript, javascript)
    pub template: Option<String>,

    /// Local directory to use for templates instead of fetching from remote (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Package manager to install dependencies with (detected when omitted)
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Don't offer to install oxlint and oxfmt
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Don't run oxfmt on the written configs
    #[arg(long = "skip-format")]
    pub skip_format: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for RunArgs {
    fn from(args: Args) -> Self {
        RunArgs {
            template: args.template,
            template_dir: args.template_dir,
            package_manager: args.package_manager,
            skip_install: args.skip_install,
            skip_format: args.skip_format,
            yes: args.yes,
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
    let result = oxc_configs_core::run(&OxcConfigs, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        std::process::exit(oxc_configs_core::report(&err));
    }
}
