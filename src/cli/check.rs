//! Check command implementation

use anyhow::Result;
use clap::Args;

use super::utils::ProjectArgs;
use crate::source::DependencySource;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let project = args.project.load()?;

    println!("Checking availability and versions of dependencies.");
    let source: &dyn DependencySource = &project.registry;
    let report = source.check_report();
    for entry in &report.entries {
        println!("{}", entry);
    }
    println!();

    if !report.all_required_satisfied() {
        let failed = report.failures().count();
        anyhow::bail!("{} required dependencies are missing or have the wrong version", failed);
    }
    Ok(())
}
