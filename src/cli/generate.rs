//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::{parse_csv, ProjectArgs};
use crate::domain::ArtifactKind;
use crate::generate::Generator;
use crate::utils::normalize_path;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only generate these artifacts (comma-separated: control, requirements,
    /// setup-cfg, install-script)
    #[arg(long, value_name = "LIST")]
    pub only: Option<String>,

    /// Render everything but do not write any file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let only = parse_csv(&args.only)
        .map(|names| {
            names.iter().map(|n| n.parse::<ArtifactKind>()).collect::<Result<Vec<_>, _>>()
        })
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let project = args.project.load()?;

    let mut generator = Generator::new(project.root.clone(), &project.config).dry_run(args.dry_run);
    if let Some(kinds) = only {
        generator = generator.only(kinds);
    }

    let results = generator
        .run(&project.registry)
        .with_context(|| format!("Generation failed in {}", project.root.display()))?;

    for result in &results {
        let relative = result.path.strip_prefix(&project.root).unwrap_or(&result.path);
        let action = if result.written { "wrote" } else { "would write" };
        println!(
            "{} {} ({} bytes, sha256 {})",
            action,
            normalize_path(relative),
            result.bytes,
            result.digest
        );
    }

    Ok(())
}
