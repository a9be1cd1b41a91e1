use colored::Colorize;
use conventions_core::ConventionDocument;

/// Colored multi-line summary of a merged document for terminal output
#[must_use]
pub fn display_document(document: &ConventionDocument) -> String {
    let mut lines = Vec::new();
    if let Some(project) = &document.project {
        lines.push(format!(
            "{} {} {}",
            "[Project]".bright_blue().bold(),
            format!("{}:{}", project.group, project.name)
                .bright_white()
                .bold(),
            format!("(v{})", project.version).bright_green(),
        ));
    }
    lines.push(format!(
        "{} {} {}",
        "[Java]".bright_blue().bold(),
        format!("release {}", document.language_level()).bright_white(),
        format!("(Gradle {}+)", document.minimum_gradle_version).bright_black(),
    ));
    lines.push(format!(
        "{} {} {}",
        "[License]".bright_blue().bold(),
        document.license.spdx.to_string().bright_white().bold(),
        format!("({} header lines)", document.license.header.lines().count()).bright_black(),
    ));
    let pom = &document.publishing.pom;
    lines.push(format!(
        "{} {} {} {}",
        "[Organization]".bright_blue().bold(),
        pom.organization.name.bright_white().bold(),
        "→".bright_cyan(),
        document.publishing.website.bright_black(),
    ));
    for developer in &pom.developers {
        lines.push(format!(
            "  {} {} {}",
            developer.name.bright_white(),
            format!("<{}>", developer.email).bright_black(),
            developer.timezone.bright_black(),
        ));
    }
    for plugin in &document.publishing.plugins {
        let tags: Vec<&str> = plugin.tags.iter().map(String::as_str).collect();
        lines.push(format!(
            "{} {} {} {}",
            "[Plugin]".bright_blue().bold(),
            plugin.id.bright_white().bold(),
            "→".bright_cyan(),
            format!("{} [{}]", plugin.implementation_class, tags.join(", ")).bright_black(),
        ));
    }
    for dependency in &document.dependencies {
        lines.push(format!(
            "{} {} {}",
            "[Dependency]".bright_blue().bold(),
            dependency.scope.to_string().bright_yellow(),
            dependency.coordinate.bright_white(),
        ));
    }
    for relocation in &document.shadow.relocations {
        lines.push(format!(
            "{} {} {} {}",
            "[Relocate]".bright_blue().bold(),
            relocation.pattern.bright_white(),
            "→".bright_cyan(),
            relocation.destination.bright_white(),
        ));
    }
    lines.join("\n")
}
