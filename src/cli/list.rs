//! List command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde_json::json;

use super::utils::ProjectArgs;
use crate::source::DependencySource;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

pub fn run(args: ListArgs) -> Result<()> {
    let project = args.project.load()?;
    let source: &dyn DependencySource = &project.registry;

    let sections = [
        ("dpkg_depends", source.dpkg_depends(false)?),
        ("dpkg_packages", source.dpkg_depends(true)?),
        ("rpm_requires", source.rpm_requires()?),
        ("install_requires", source.install_requires()?),
    ];

    match args.format {
        ListFormat::Json => {
            let value = json!({
                "project": project.config.project.name,
                "dpkg_depends": sections[0].1,
                "dpkg_packages": sections[1].1,
                "rpm_requires": sections[2].1,
                "install_requires": sections[3].1,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ListFormat::Text => {
            for (title, items) in &sections {
                println!("{}:", title);
                for item in items {
                    println!("  {}", item);
                }
            }
        }
    }
    Ok(())
}
