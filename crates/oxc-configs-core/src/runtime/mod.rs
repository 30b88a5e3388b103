//! Package manager detection and external tool management
//!
//! This module provides:
//! - Package manager detection (lockfiles, then installed executables)
//! - Dev dependency install command building and execution
//! - Tool checks for CLIs like gh

pub mod command;
pub mod install;
pub mod package_manager;
pub mod tool;

pub use command::CommandToRun;
pub use install::{format_configs, install_dependencies, oxc_packages};
pub use package_manager::{
    detect, has_global_installation, installed_managers, Detection, DetectionSource,
    PackageManager,
};
pub use tool::ToolManager;
