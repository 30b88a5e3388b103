//! Charm-style CLI prompts using cliclack

use crate::exit::{exit_code, Abort, CancelExt};
use crate::product::ProductConfig;
use crate::runtime::{self, tool, Detection, DetectionSource, PackageManager};
use crate::templates::{sync_config, ConfigFetcher, ConfigFile, SyncPrompt, Template};
use anyhow::{Context, Result};
use cliclack::ProgressBar;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for a run
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Template name; prompted for when absent
    pub template: Option<String>,

    /// Local directory to use for templates instead of fetching from remote
    pub template_dir: Option<PathBuf>,

    /// Package manager to install with instead of detecting one
    pub package_manager: Option<PackageManager>,

    /// Skip the dependency installation step
    pub skip_install: bool,

    /// Skip formatting the written configs
    pub skip_format: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: RunArgs) -> Result<()> {
    cliclack::intro(config.display_name().yellow())?;

    // Step 1: Check the GitHub CLI (local templates don't need it)
    if config.requires_gh_auth() && args.template_dir.is_none() {
        check_gh_auth().await?;
    }

    // Step 2: Setup config fetcher
    let fetcher = setup_fetcher(config, &args.template_dir)?;

    // Step 3: Select template
    let template = select_template(args.template.as_deref())?;

    let project_dir = std::env::current_dir().context("Failed to read the current directory")?;

    // Step 4: Install dev dependencies
    if config.offers_dependency_install() && !args.skip_install {
        handle_dependencies(template, &project_dir, &args).await?;
    }

    // Step 5: Fetch configs
    let mut prompt = CliclackSync::new(args.yes);
    for file in ConfigFile::ALL {
        sync_config(
            &fetcher,
            template,
            file,
            &project_dir,
            config.json_style(),
            &mut prompt,
        )
        .await?;
    }

    // Step 6: Normalize formatting
    if config.formats_configs() && !args.skip_format {
        format_configs(&project_dir).await?;
    }

    cliclack::outro("All done!".green())?;

    Ok(())
}

/// Print the outcome of a failed run and return the process exit code
pub fn report(err: &anyhow::Error) -> i32 {
    // The exit code matters more than whether the message could be printed
    match err.downcast_ref::<Abort>() {
        Some(Abort::Cancelled(message)) => cliclack::outro_cancel(message).ok(),
        Some(Abort::Invalid(message)) => cliclack::log::error(message).ok(),
        None => cliclack::log::error(format!("{:#}", err)).ok(),
    };
    exit_code(err)
}

async fn check_gh_auth() -> Result<()> {
    let gh = tool::gh_tool();

    if !gh.is_installed().await {
        return Err(Abort::invalid(gh.missing_message()).into());
    }

    if !gh.is_authenticated().await {
        return Err(Abort::invalid(gh.unauthenticated_message()).into());
    }

    let version = gh.get_version().await.unwrap_or_else(|| "unknown".to_string());
    cliclack::log::success(format!(
        "{} authenticated ({})",
        gh.config().display_name,
        version
    ))?;

    Ok(())
}

fn setup_fetcher<C: ProductConfig>(
    config: &C,
    template_dir: &Option<PathBuf>,
) -> Result<ConfigFetcher> {
    let fetcher = match template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local templates from {}", path.display()))?;
            ConfigFetcher::from_local(path.clone(), config.user_agent())
        }
        None => ConfigFetcher::from_config(config)?,
    };

    Ok(fetcher)
}

fn select_template(specified_template: Option<&str>) -> Result<Template> {
    let name = match specified_template {
        Some(name) => name.to_string(),
        None => {
            let mut select = cliclack::select("Select OXC toolset configs template to download:");
            for template in Template::ALL {
                select = select.item(template.as_str(), template.label(), "");
            }
            select
                .interact()
                .or_cancel("No template has been selected.")?
                .to_string()
        }
    };

    // Validated whatever the source
    match name.parse::<Template>() {
        Ok(template) => Ok(template),
        Err(_) => Err(Abort::invalid(format!("Unknown template: {}", name.bold())).into()),
    }
}

async fn handle_dependencies(template: Template, dir: &Path, args: &RunArgs) -> Result<()> {
    let install = args.yes
        || cliclack::confirm("Do you want to install or update OXC dependencies?")
            .interact()
            .or_cancel("Dependencies installation process has been cancelled.")?;

    if !install {
        return Ok(());
    }

    let pm = resolve_package_manager(dir, args).await?;

    let type_aware = template.supports_type_aware()
        && (args.yes
            || cliclack::confirm("Do you want to enable type aware linting?")
                .interact()
                .or_cancel("OXC dependencies setup process has been cancelled.")?);

    let packages = runtime::oxc_packages(type_aware);
    cliclack::log::info(format!(
        "Installing {} packages using {}.",
        packages.join(", ").bold(),
        pm.to_string().bold()
    ))?;

    let spinner = cliclack::spinner();
    spinner.start("Installing dependencies...");

    match runtime::install_dependencies(pm, &packages, dir).await {
        Ok(command) => {
            spinner.stop(format!("Dependencies installed ({})", command));
            Ok(())
        }
        Err(e) => {
            spinner.error("Installation failed");
            // A failed install ends the run as a cancellation, not a crash
            Err(Abort::cancelled(format!("OXC dependencies cannot be installed. {:#}", e)).into())
        }
    }
}

async fn resolve_package_manager(dir: &Path, args: &RunArgs) -> Result<PackageManager> {
    if let Some(pm) = args.package_manager {
        if !runtime::has_global_installation(pm).await {
            return Err(Abort::invalid(format!(
                "{} has been requested but seems to not be installed.",
                pm
            ))
            .into());
        }
        return Ok(pm);
    }

    match runtime::detect(dir).await {
        Some(Detection {
            manager,
            source: DetectionSource::Lockfile,
        }) => {
            if !runtime::has_global_installation(manager).await {
                return Err(Abort::invalid(format!(
                    "The {} lock has been detected but package manager seems to not be installed.",
                    manager
                ))
                .into());
            }
            Ok(manager)
        }
        Some(Detection {
            manager,
            source: DetectionSource::Installed,
        }) => Ok(manager),
        None => select_package_manager(args).await,
    }
}

async fn select_package_manager(args: &RunArgs) -> Result<PackageManager> {
    let installed: Vec<PackageManager> = runtime::installed_managers()
        .await
        .into_iter()
        .filter(|(_, available)| *available)
        .map(|(pm, _)| pm)
        .collect();

    let Some(first) = installed.first().copied() else {
        return Err(Abort::invalid(
            "No supported package manager (npm, yarn, pnpm, bun) seems to be installed.",
        )
        .into());
    };

    if args.yes {
        return Ok(first);
    }

    let mut select = cliclack::select(
        "Looks like current project does not have any lock file. \
         Which package manager you want to use for the installation?",
    );
    for pm in &installed {
        select = select.item(*pm, pm, "");
    }

    select
        .interact()
        .or_cancel("Installation preparation has been cancelled.")
}

async fn format_configs(dir: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Formatting config files...");

    match runtime::format_configs(&ConfigFile::ALL, dir).await {
        Ok(()) => {
            spinner.stop("Config files formatted");
            Ok(())
        }
        Err(e) => {
            spinner.error("Formatting failed");
            Err(e)
        }
    }
}

/// cliclack front end for config syncing
struct CliclackSync {
    yes: bool,
    spinner: Option<ProgressBar>,
}

impl CliclackSync {
    fn new(yes: bool) -> Self {
        Self { yes, spinner: None }
    }
}

impl SyncPrompt for CliclackSync {
    fn confirm_replace(&mut self, file: ConfigFile) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }

        cliclack::confirm(format!(
            "{} already exists. Do you want to replace its content with the template?",
            file.file_name().bold()
        ))
        .interact()
        .or_cancel("Replacement cancelled.")
    }

    fn skipped(&mut self, file: ConfigFile) -> Result<()> {
        cliclack::log::info(format!("Skipping {} config file.", file.file_name().bold()))?;
        Ok(())
    }

    fn fetching(&mut self, file: ConfigFile) {
        let spinner = cliclack::spinner();
        spinner.start(format!("Fetching {} config file...", file.file_name().bold()));
        self.spinner = Some(spinner);
    }

    fn written(&mut self, file: ConfigFile) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(format!("{} fetched and written.", file.file_name().bold()));
        }
    }

    fn failed(&mut self, file: ConfigFile) {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(format!("Failed to fetch {}", file.file_name().bold()));
        }
    }
}
