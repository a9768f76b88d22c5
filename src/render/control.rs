//! Debian package control file.

use super::{Document, Renderer, VariantSubstitution};
use crate::domain::{Artifact, ArtifactKind, Config, RuntimeVariant};
use crate::error::RenderError;
use crate::source::DependencySource;
use std::path::Path;

pub struct ControlFileRenderer<'a> {
    config: &'a Config,
}

impl<'a> ControlFileRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn file_header(&self) -> Vec<String> {
        let project = &self.config.project;
        let dpkg = &self.config.dpkg;

        let mut lines = vec![
            format!("Source: {}", project.name),
            format!("Section: {}", dpkg.section),
            format!("Priority: {}", dpkg.priority),
            format!("Maintainer: {}", project.maintainer),
            format!("Build-Depends: {}", dpkg.build_depends),
            format!("Standards-Version: {}", dpkg.standards_version),
        ];
        lines.extend(dpkg.extra_fields.iter().cloned());
        lines.push(format!("Homepage: {}", project.homepage));
        lines.push(String::new());
        lines
    }

    fn package_header(&self, variant: &RuntimeVariant) -> Vec<String> {
        vec![
            format!("Package: {}", variant.package_name(&self.config.project.name)),
            format!("Architecture: {}", self.config.dpkg.architecture),
        ]
    }

    /// `dependencies` is `None` when the source returned nothing, so the
    /// placeholders are not preceded by a dangling separator.
    fn depends_line(&self, dependencies: Option<&str>) -> String {
        let fields: Vec<&str> = dependencies
            .into_iter()
            .chain(self.config.dpkg.substvars.iter().map(String::as_str))
            .collect();
        format!("Depends: {}", fields.join(", "))
    }

    fn package_footer(&self) -> Vec<String> {
        let project = &self.config.project;
        let mut lines = vec![format!("Description: {}", project.summary)];
        for line in &project.description {
            // Blank lines inside an extended description are spelled " .".
            if line.trim().is_empty() {
                lines.push(" .".to_string());
            } else {
                lines.push(format!(" {}", line));
            }
        }
        lines.push(String::new());
        lines
    }
}

impl Renderer for ControlFileRenderer<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Control
    }

    fn target_path(&self) -> &Path {
        &self.config.paths.control
    }

    fn render(&self, source: &dyn DependencySource) -> Result<Artifact, RenderError> {
        let runtime = &self.config.runtime;
        let substitution = VariantSubstitution::new(&runtime.primary, &runtime.secondary)?;

        let dependencies = source.dpkg_depends(false)?;
        let primary = (!dependencies.is_empty()).then(|| dependencies.join(", "));
        let secondary = primary.as_deref().map(|text| substitution.apply(text));

        let mut doc = Document::new();
        doc.extend(self.file_header());
        doc.extend(self.package_header(&runtime.primary));
        doc.push(self.depends_line(primary.as_deref()));
        doc.extend(self.package_footer());
        doc.extend(self.package_header(&runtime.secondary));
        doc.push(self.depends_line(secondary.as_deref()));
        doc.extend(self.package_footer());

        Ok(Artifact {
            kind: self.kind(),
            target_path: self.target_path().to_path_buf(),
            content: doc.into_content(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{dfwinreg_config, python_registry, scenario};
    use crate::source::Registry;
    use std::path::PathBuf;

    fn depends_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| l.starts_with("Depends: ")).collect()
    }

    #[test]
    fn renders_full_document() {
        let config = dfwinreg_config();
        let artifact = ControlFileRenderer::new(&config).render(&python_registry()).unwrap();

        let expected = "\
Source: dfwinreg
Section: python
Priority: extra
Maintainer: Log2Timeline maintainers <log2timeline-maintainers@googlegroups.com>
Build-Depends: debhelper (>= 7), python-all (>= 2.7~), python-setuptools, python3-all (>= 3.4~), python3-setuptools
Standards-Version: 3.9.5
X-Python-Version: >= 2.7
X-Python3-Version: >= 3.4
Homepage: https://github.com/log2timeline/dfwinreg

Package: python-dfwinreg
Architecture: all
Depends: python-construct (>= 2.5.2), python-six, ${python:Depends}, ${misc:Depends}
Description: Digital Forensics Windows Registry (dfWinReg).
 dfWinReg, or Digital Forensics Windows Registry, provides read-only access to
 Windows Registry objects.

Package: python3-dfwinreg
Architecture: all
Depends: python3-construct (>= 2.5.2), python3-six, ${python:Depends}, ${misc:Depends}
Description: Digital Forensics Windows Registry (dfWinReg).
 dfWinReg, or Digital Forensics Windows Registry, provides read-only access to
 Windows Registry objects.
";
        similar_asserts::assert_eq!(artifact.content.as_str(), expected);
        assert_eq!(artifact.target_path, PathBuf::from("config/dpkg/control"));
    }

    #[test]
    fn scenario_depends_line() {
        let config = dfwinreg_config();
        let artifact = ControlFileRenderer::new(&config).render(&scenario()).unwrap();
        assert_eq!(
            depends_lines(&artifact.content)[0],
            "Depends: foo (>= 1.0), bar, ${python:Depends}, ${misc:Depends}"
        );
    }

    #[test]
    fn secondary_line_is_primary_with_token_substituted() {
        let config = dfwinreg_config();
        let artifact = ControlFileRenderer::new(&config).render(&python_registry()).unwrap();
        let lines = depends_lines(&artifact.content);
        assert_eq!(lines.len(), 2);

        let substitution =
            VariantSubstitution::new(&config.runtime.primary, &config.runtime.secondary).unwrap();
        let primary_deps = lines[0]
            .strip_prefix("Depends: ")
            .and_then(|l| l.strip_suffix(", ${python:Depends}, ${misc:Depends}"))
            .unwrap();
        let expected = format!(
            "Depends: {}, ${{python:Depends}}, ${{misc:Depends}}",
            substitution.apply(primary_deps)
        );
        assert_eq!(lines[1], expected.as_str());
    }

    #[test]
    fn empty_dependencies_keep_placeholders_only() {
        let config = dfwinreg_config();
        let artifact = ControlFileRenderer::new(&config).render(&Registry::default()).unwrap();
        assert_eq!(
            depends_lines(&artifact.content),
            vec!["Depends: ${python:Depends}, ${misc:Depends}"; 2]
        );
    }

    #[test]
    fn blank_description_lines_become_dots() {
        let mut config = dfwinreg_config();
        config.project.description =
            vec!["first".to_string(), String::new(), "second".to_string()];
        let artifact = ControlFileRenderer::new(&config).render(&scenario()).unwrap();
        assert!(artifact.content.contains("\n first\n .\n second\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = dfwinreg_config();
        let renderer = ControlFileRenderer::new(&config);
        let first = renderer.render(&python_registry()).unwrap();
        let second = renderer.render(&python_registry()).unwrap();
        assert_eq!(first, second);
    }
}
