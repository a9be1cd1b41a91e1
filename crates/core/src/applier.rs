//! Convention Applier: merges organization, target and plugin records into one document.
//!
//! Each `apply_*` step builds one section and never touches the others. The license file
//! is the only input read from disk.

use std::collections::HashSet;

use crate::descriptor::PluginPublishDescriptor;
use crate::document::{
    ConventionDocument, DependencyEntry, IssueManagementSection, JavaSection, LicenseSection,
    MINIMUM_GRADLE_VERSION, OrganizationSection, PomLicense, PomSection, PublishingSection,
    ScmSection, ShadowSection,
};
use crate::error::{ConventionError, Result};
use crate::profile::OrganizationProfile;
use crate::relocation::Relocation;
use crate::target::{BuildTargetSpec, Coordinate, MAX_LANGUAGE_LEVEL, MIN_LANGUAGE_LEVEL};

/// Records the Java release to compile for.
///
/// Only intent is recorded; whether the host toolchain provides it is the orchestrator's
/// call.
///
/// # Errors
/// Returns a configuration error when the level is outside the supported range.
pub fn apply_language_level(spec: &BuildTargetSpec) -> Result<JavaSection> {
    let level = spec.language_level;
    if !(MIN_LANGUAGE_LEVEL..=MAX_LANGUAGE_LEVEL).contains(&level) {
        return Err(ConventionError::configuration(
            "target.languageLevel",
            format!(
                "Java {level} is not supported, expected {MIN_LANGUAGE_LEVEL}..={MAX_LANGUAGE_LEVEL}"
            ),
        ));
    }
    Ok(JavaSection {
        language_level: level,
    })
}

/// Loads the license header text verbatim.
///
/// # Errors
/// Returns `ResourceNotFound` when the file is absent or unreadable and a configuration
/// error when it holds only whitespace.
pub fn apply_license_header(profile: &OrganizationProfile) -> Result<LicenseSection> {
    let header = std::fs::read_to_string(&profile.license_file).map_err(|source| {
        ConventionError::ResourceNotFound {
            path: profile.license_file.clone(),
            source,
        }
    })?;
    if header.trim().is_empty() {
        return Err(ConventionError::configuration(
            "organization.licenseFile",
            format!("{} is empty", profile.license_file.display()),
        ));
    }
    Ok(LicenseSection {
        spdx: profile.license,
        name: profile.license.display_name().to_string(),
        url: profile.license.url().to_string(),
        header,
        new_line: true,
    })
}

/// Builds the POM and plugin-portal metadata.
///
/// # Errors
/// Returns a configuration error for an invalid descriptor and `DuplicatePluginId` when
/// two descriptors share an id.
pub fn apply_publishing_metadata(
    profile: &OrganizationProfile,
    descriptors: &[PluginPublishDescriptor],
) -> Result<PublishingSection> {
    let mut seen = HashSet::new();
    for (index, descriptor) in descriptors.iter().enumerate() {
        descriptor.validate(index)?;
        if !seen.insert(descriptor.id.as_str()) {
            return Err(ConventionError::DuplicatePluginId(descriptor.id.clone()));
        }
    }

    let pom = PomSection {
        organization: OrganizationSection {
            name: profile.name.clone(),
            url: profile.website.clone(),
        },
        developers: profile.developers.clone(),
        licenses: vec![PomLicense {
            name: profile.license.display_name().to_string(),
            url: profile.license.url().to_string(),
        }],
        scm: profile.github.as_ref().map(|github| ScmSection {
            url: github.url(),
            connection: github.scm_connection(),
            developer_connection: github.developer_connection(),
        }),
        issue_management: profile.github.as_ref().map(|github| IssueManagementSection {
            system: "GitHub".to_string(),
            url: github.issues_url(),
        }),
    };

    Ok(PublishingSection {
        pom,
        website: profile.publish_website(),
        plugins: descriptors.to_vec(),
    })
}

/// Declares the dependency list in its original order. Nothing is resolved here.
///
/// # Errors
/// Returns a configuration error for a malformed or repeated coordinate.
pub fn apply_dependency_policy(spec: &BuildTargetSpec) -> Result<Vec<DependencyEntry>> {
    let mut seen = HashSet::new();
    spec.dependencies
        .iter()
        .map(|dependency| {
            let coordinate: Coordinate = dependency.coordinate().parse()?;
            if !seen.insert((dependency.scope(), coordinate.clone())) {
                return Err(ConventionError::configuration(
                    "target.dependencies",
                    format!(
                        "`{coordinate}` is declared twice in {}",
                        dependency.scope()
                    ),
                ));
            }
            Ok(DependencyEntry {
                scope: dependency.scope(),
                coordinate: coordinate.to_string(),
            })
        })
        .collect()
}

/// Shading setup: relocations without duplicates, first declaration wins.
///
/// # Errors
/// Returns a configuration error for an invalid relocation.
pub fn apply_shading(relocations: &[Relocation]) -> Result<ShadowSection> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(relocations.len());
    for (index, relocation) in relocations.iter().enumerate() {
        relocation.validate(index)?;
        if seen.insert(relocation.key()) {
            kept.push(relocation.clone());
        }
    }
    Ok(ShadowSection {
        archive_classifier: String::new(),
        copy_to_root_build: true,
        relocations: kept,
    })
}

/// Runs every step and assembles the document.
///
/// The license is read first so a missing file is reported before anything else is
/// looked at. No document is produced unless every step succeeds.
///
/// # Errors
/// Returns the first error raised by any step.
pub fn apply_conventions(
    profile: &OrganizationProfile,
    target: &BuildTargetSpec,
    descriptors: &[PluginPublishDescriptor],
    relocations: &[Relocation],
) -> Result<ConventionDocument> {
    let license = apply_license_header(profile)?;
    assemble(license, profile, target, descriptors, relocations)
}

/// Runs the steps after the license header, which the caller has already loaded.
pub(crate) fn assemble(
    license: LicenseSection,
    profile: &OrganizationProfile,
    target: &BuildTargetSpec,
    descriptors: &[PluginPublishDescriptor],
    relocations: &[Relocation],
) -> Result<ConventionDocument> {
    profile.validate()?;
    let java = apply_language_level(target)?;
    let publishing = apply_publishing_metadata(profile, descriptors)?;
    let dependencies = apply_dependency_policy(target)?;
    let shadow = apply_shading(relocations)?;

    Ok(ConventionDocument {
        minimum_gradle_version: MINIMUM_GRADLE_VERSION.to_string(),
        project: None,
        java,
        license,
        publishing,
        dependencies,
        shadow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::LicenseKind;
    use crate::profile::{Developer, GithubRepo};
    use crate::target::{DependencyScope, DependencySpec};
    use rstest::rstest;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const MIT_TEXT: &str = "MIT License\n\nCopyright (c) Acme\n";

    fn write_license(dir: &Path) -> PathBuf {
        let path = dir.join("LICENSE");
        std::fs::write(&path, MIT_TEXT).unwrap();
        path
    }

    fn acme(license_file: PathBuf) -> OrganizationProfile {
        OrganizationProfile {
            name: "Acme".to_string(),
            website: "https://acme.example".to_string(),
            license: LicenseKind::Mit,
            license_file,
            github: None,
            developers: Vec::new(),
        }
    }

    fn conv_descriptor(id: &str) -> PluginPublishDescriptor {
        PluginPublishDescriptor {
            id: id.to_string(),
            name: "Conventions".to_string(),
            description: "Applies Acme conventions".to_string(),
            implementation_class: "com.acme.conv.ConventionsPlugin".to_string(),
            tags: ["java".to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn test_acme_example() {
        let temp_dir = TempDir::new().unwrap();
        let profile = acme(write_license(temp_dir.path()));
        let document = apply_conventions(
            &profile,
            &BuildTargetSpec::new(11),
            &[conv_descriptor("com.acme.conv")],
            &[],
        )
        .unwrap();

        assert_eq!(document.language_level(), 11);
        assert_eq!(document.publishing.plugins.len(), 1);
        assert_eq!(document.publishing.plugins[0].id, "com.acme.conv");
        assert_eq!(document.license.header, MIT_TEXT);
        assert!(document.license.new_line);
        assert_eq!(document.publishing.website, "https://acme.example");
        assert_eq!(document.minimum_gradle_version, "7.5");
    }

    #[test]
    fn test_same_inputs_render_identical_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let profile = acme(write_license(temp_dir.path()));
        let target = BuildTargetSpec::new(11)
            .with_dependency(DependencySpec::Coordinate("b:b:1".to_string()))
            .with_dependency(DependencySpec::Coordinate("a:a:1".to_string()));
        let mut descriptor = conv_descriptor("com.acme.conv");
        descriptor.tags = ["zeta", "alpha", "mid"].into_iter().map(String::from).collect();

        let first = apply_conventions(&profile, &target, &[descriptor.clone()], &[])
            .unwrap()
            .to_json()
            .unwrap();
        let second = apply_conventions(&profile, &target, &[descriptor], &[])
            .unwrap()
            .to_json()
            .unwrap();
        assert_eq!(first, second);
        assert!(first.find("\"b:b:1\"").unwrap() < first.find("\"a:a:1\"").unwrap());
        assert!(first.find("\"alpha\"").unwrap() < first.find("\"zeta\"").unwrap());
    }

    #[test]
    fn test_duplicate_plugin_id() {
        let temp_dir = TempDir::new().unwrap();
        let profile = acme(write_license(temp_dir.path()));
        let result = apply_conventions(
            &profile,
            &BuildTargetSpec::new(11),
            &[conv_descriptor("com.acme.conv"), conv_descriptor("com.acme.conv")],
            &[],
        );
        assert!(matches!(
            result,
            Err(ConventionError::DuplicatePluginId(id)) if id == "com.acme.conv"
        ));
    }

    #[test]
    fn test_missing_license_fails_before_other_steps() {
        let temp_dir = TempDir::new().unwrap();
        let mut profile = acme(temp_dir.path().join("MISSING"));
        profile.name = String::new();
        let result = apply_conventions(
            &profile,
            &BuildTargetSpec::new(3),
            &[conv_descriptor("dup"), conv_descriptor("dup")],
            &[],
        );
        match result {
            Err(ConventionError::ResourceNotFound { path, .. }) => {
                assert_eq!(path, temp_dir.path().join("MISSING"));
            }
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_license_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("LICENSE");
        std::fs::write(&path, "\n  \n").unwrap();
        assert!(matches!(
            apply_license_header(&acme(path)),
            Err(ConventionError::Configuration { .. })
        ));
    }

    #[test]
    fn test_license_header_is_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("HEADER");
        let text = "/*\n * Copyright ${year}\n */\n\n";
        std::fs::write(&path, text).unwrap();
        let section = apply_license_header(&acme(path)).unwrap();
        assert_eq!(section.header, text);
        assert_eq!(section.spdx, LicenseKind::Mit);
    }

    #[rstest]
    #[case(7, false)]
    #[case(8, true)]
    #[case(11, true)]
    #[case(17, true)]
    #[case(25, true)]
    #[case(26, false)]
    fn test_language_level(#[case] level: u32, #[case] supported: bool) {
        let result = apply_language_level(&BuildTargetSpec::new(level));
        assert_eq!(result.is_ok(), supported);
        if let Ok(section) = result {
            assert_eq!(section.language_level, level);
        }
    }

    #[test]
    fn test_publishing_metadata_with_github() {
        let mut profile = acme(PathBuf::from("LICENSE"));
        profile.github = Some(GithubRepo::new("acme", "conventions"));
        profile.developers.push(Developer {
            id: "jdoe".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@acme.example".to_string(),
            timezone: "Europe/Lisbon".to_string(),
        });
        let section =
            apply_publishing_metadata(&profile, &[conv_descriptor("com.acme.conv")]).unwrap();

        assert_eq!(section.website, "https://github.com/acme/conventions");
        assert_eq!(section.pom.organization.name, "Acme");
        assert_eq!(section.pom.developers.len(), 1);
        assert_eq!(section.pom.licenses[0].name, "MIT License");
        let scm = section.pom.scm.unwrap();
        assert_eq!(scm.connection, "scm:git:https://github.com/acme/conventions.git");
        assert_eq!(
            section.pom.issue_management.unwrap().url,
            "https://github.com/acme/conventions/issues"
        );
    }

    #[test]
    fn test_publishing_metadata_without_descriptors() {
        let section = apply_publishing_metadata(&acme(PathBuf::from("LICENSE")), &[]).unwrap();
        assert!(section.plugins.is_empty());
        assert!(section.pom.scm.is_none());
    }

    #[test]
    fn test_dependency_policy_keeps_order_and_scope() {
        let spec = BuildTargetSpec::new(11)
            .with_dependency(DependencySpec::scoped(
                "com.google.code.findbugs:jsr305:3.0.2",
                DependencyScope::CompileOnly,
            ))
            .with_dependency(DependencySpec::Coordinate(
                "net.kyori:indra-common:3.1.3".to_string(),
            ))
            .with_dependency(DependencySpec::Coordinate(
                "com.github.johnrengelman:shadow:8.1.1".to_string(),
            ));
        let entries = apply_dependency_policy(&spec).unwrap();
        let coordinates: Vec<_> = entries.iter().map(|e| e.coordinate.as_str()).collect();
        assert_eq!(
            coordinates,
            [
                "com.google.code.findbugs:jsr305:3.0.2",
                "net.kyori:indra-common:3.1.3",
                "com.github.johnrengelman:shadow:8.1.1",
            ]
        );
        assert_eq!(entries[0].scope, DependencyScope::CompileOnly);
        assert_eq!(entries[1].scope, DependencyScope::Implementation);
    }

    #[test]
    fn test_dependency_policy_rejects_duplicates() {
        let spec = BuildTargetSpec::new(11)
            .with_dependency(DependencySpec::Coordinate("a:b:1".to_string()))
            .with_dependency(DependencySpec::Coordinate("a:b:1".to_string()));
        assert!(apply_dependency_policy(&spec).is_err());

        let spec = BuildTargetSpec::new(11)
            .with_dependency(DependencySpec::Coordinate("a:b:1".to_string()))
            .with_dependency(DependencySpec::scoped("a:b:1", DependencyScope::TestImplementation));
        assert_eq!(apply_dependency_policy(&spec).unwrap().len(), 2);
    }

    #[test]
    fn test_dependency_policy_rejects_malformed() {
        let spec = BuildTargetSpec::new(11)
            .with_dependency(DependencySpec::Coordinate("jsr305".to_string()));
        assert!(matches!(
            apply_dependency_policy(&spec),
            Err(ConventionError::Configuration { .. })
        ));
    }

    #[test]
    fn test_shading_collapses_duplicates() {
        let mut second = Relocation::new("org.yaml", "com.acme.libs.yaml");
        second.excludes.push("org.yaml.snakeyaml.Yaml".to_string());
        let section = apply_shading(&[
            Relocation::new("org.yaml", "com.acme.libs.yaml"),
            Relocation::new("com.fasterxml", "com.acme.libs.fasterxml"),
            second,
        ])
        .unwrap();
        assert_eq!(section.relocations.len(), 2);
        assert!(section.relocations[0].excludes.is_empty());
        assert_eq!(section.archive_classifier, "");
        assert!(section.copy_to_root_build);
    }

    #[test]
    fn test_invalid_profile_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut profile = acme(write_license(temp_dir.path()));
        profile.website = String::new();
        let result = apply_conventions(&profile, &BuildTargetSpec::new(11), &[], &[]);
        assert!(matches!(
            result,
            Err(ConventionError::Configuration { field, .. }) if field == "organization.website"
        ));
    }
}
