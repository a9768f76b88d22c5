//! CI bootstrap script (config/travis/install.sh).

use super::{assemble, Renderer, VariantSubstitution};
use crate::domain::{Artifact, ArtifactKind, Config};
use crate::error::RenderError;
use crate::source::DependencySource;
use std::path::Path;

const COVERAGE_VARIABLE: &str = "COVERALL_DEPENDENCIES";

pub struct InstallScriptRenderer<'a> {
    config: &'a Config,
}

impl<'a> InstallScriptRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn file_header(&self) -> Vec<String> {
        vec![
            "#!/bin/bash".to_string(),
            "#".to_string(),
            "# Script to set up Travis-CI test VM.".to_string(),
            String::new(),
            format!(
                "{}=\"{}\";",
                COVERAGE_VARIABLE,
                self.config.ci.coverage_dependencies.join(" ")
            ),
            String::new(),
        ]
    }

    /// Darwin fetches dependencies with the tooling repository, Linux installs
    /// them from the package repository. Other platforms fall through.
    fn file_footer(&self) -> Vec<String> {
        let ci = &self.config.ci;
        let tools = ci.tools_dir_name();
        let runtime = &self.config.runtime;

        vec![
            String::new(),
            "# Exit on error.".to_string(),
            "set -e;".to_string(),
            String::new(),
            "if test `uname -s` = \"Darwin\";".to_string(),
            "then".to_string(),
            format!("\tgit clone {};", ci.tools_repository),
            String::new(),
            format!("\tmv {} ../;", tools),
            "\tmkdir dependencies;".to_string(),
            String::new(),
            format!(
                "\tPYTHONPATH=../{tools} ../{tools}/tools/update.py \
                 --download-directory=dependencies --preset={preset};",
                tools = tools,
                preset = self.config.ci_preset()
            ),
            String::new(),
            "elif test `uname -s` = \"Linux\";".to_string(),
            "then".to_string(),
            format!("\tsudo add-apt-repository {} -y;", ci.package_repository),
            "\tsudo apt-get update -q;".to_string(),
            format!(
                "\tsudo apt-get install -y ${{{}}} ${{{}}} ${{{}}};",
                COVERAGE_VARIABLE,
                runtime.primary.dependencies_variable(),
                runtime.secondary.dependencies_variable()
            ),
            "fi".to_string(),
            String::new(),
        ]
    }
}

impl Renderer for InstallScriptRenderer<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::InstallScript
    }

    fn target_path(&self) -> &Path {
        &self.config.paths.install_script
    }

    fn render(&self, source: &dyn DependencySource) -> Result<Artifact, RenderError> {
        let runtime = &self.config.runtime;
        let substitution = VariantSubstitution::new(&runtime.primary, &runtime.secondary)?;

        let primary = source.dpkg_depends(true)?.join(" ");
        let secondary = substitution.apply(&primary);

        let body = vec![
            format!("{}=\"{}\";", runtime.primary.dependencies_variable(), primary),
            String::new(),
            format!("{}=\"{}\";", runtime.secondary.dependencies_variable(), secondary),
        ];

        Ok(Artifact {
            kind: self.kind(),
            target_path: self.target_path().to_path_buf(),
            content: assemble(&self.file_header(), &body, &self.file_footer()),
        })
    }
}
