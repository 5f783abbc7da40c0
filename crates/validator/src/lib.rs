// Advisory checks for prompts and planned site structures.
// Findings are reported, never enforced: a structure with warnings still builds.

use promptsite_core::{FOOTER_FILE, HEADER_FILE, STYLESHEET_FILE, SiteStructure};
use std::collections::HashSet;
use std::path::{Component, Path};

/// Page kinds the structure instruction asks for
pub const RECOMMENDED_PAGES: &[&str] = &["pricing", "login", "signup", "legal"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append another report's findings
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.info.extend(other.info);
    }
}

/// Check a planned structure against the rules it was requested with
pub fn validate_structure(structure: &SiteStructure) -> ValidationReport {
    let mut report = ValidationReport::default();

    if structure.is_empty() {
        report
            .warnings
            .push("Structure lists no pages; only shared assets will be written".to_string());
    }

    let stems: Vec<String> = structure
        .pages
        .iter()
        .map(|p| {
            Path::new(p)
                .file_stem()
                .map(|s| s.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        })
        .collect();

    for kind in RECOMMENDED_PAGES {
        if !stems.iter().any(|stem| stem.contains(kind)) {
            report
                .warnings
                .push(format!("No {} page in structure", kind));
        }
    }

    let mut seen = HashSet::new();
    for page in &structure.pages {
        if !seen.insert(page.as_str()) {
            report.warnings.push(format!(
                "Duplicate page '{}' will be written more than once",
                page
            ));
        }

        if [HEADER_FILE, FOOTER_FILE, STYLESHEET_FILE].contains(&page.as_str()) {
            report.warnings.push(format!(
                "Page '{}' will overwrite the shared asset of the same name",
                page
            ));
        }

        let path = Path::new(page);
        if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
            report.warnings.push(format!(
                "Page '{}' resolves outside the output directory",
                page
            ));
        }

        let is_html = path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                ext == "html" || ext == "htm"
            })
            .unwrap_or(false);
        if !is_html {
            report
                .warnings
                .push(format!("Page '{}' has no .html extension", page));
        }
    }

    report
        .info
        .push(format!("{} page(s) planned", structure.len()));
    report
}

/// Check prompt text before spending any generation calls on it
pub fn validate_prompt(text: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    if text.trim().is_empty() {
        report.errors.push("Prompt is empty".to_string());
    } else {
        report.info.push(format!(
            "Prompt: {} words, {} bytes",
            text.split_whitespace().count(),
            text.len()
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(pages: &[&str]) -> SiteStructure {
        SiteStructure {
            pages: pages.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_complete_structure_has_no_warnings() {
        let report = validate_structure(&structure(&[
            "index.html",
            "pricing.html",
            "login.html",
            "signup.html",
            "legal.html",
        ]));
        assert!(report.is_ok());
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert_eq!(report.info, vec!["5 page(s) planned"]);
    }

    #[test]
    fn test_missing_recommended_pages_are_warnings_only() {
        let report = validate_structure(&structure(&["index.html", "pricing.html"]));
        assert!(report.is_ok());
        assert!(report.warnings.contains(&"No login page in structure".to_string()));
        assert!(report.warnings.contains(&"No signup page in structure".to_string()));
        assert!(report.warnings.contains(&"No legal page in structure".to_string()));
        assert!(!report.warnings.iter().any(|w| w.contains("pricing")));
    }

    #[test]
    fn test_recommended_pages_match_case_insensitive_stems() {
        let report = validate_structure(&structure(&[
            "Pricing.html",
            "user-login.html",
            "SignUp.html",
            "legal-notice.html",
        ]));
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn test_empty_structure() {
        let report = validate_structure(&structure(&[]));
        assert!(report.is_ok());
        assert!(report.warnings[0].contains("no pages"));
        assert_eq!(report.info, vec!["0 page(s) planned"]);
    }

    #[test]
    fn test_duplicate_pages() {
        let report = validate_structure(&structure(&["index.html", "index.html"]));
        assert_eq!(
            report
                .warnings
                .iter()
                .filter(|w| w.starts_with("Duplicate page 'index.html'"))
                .count(),
            1
        );
    }

    #[test]
    fn test_pages_named_like_shared_assets() {
        let report = validate_structure(&structure(&[
            "header.html",
            "footer.html",
            "main.css",
            "index.html",
        ]));
        let clashes: Vec<&String> = report
            .warnings
            .iter()
            .filter(|w| w.contains("overwrite the shared asset"))
            .collect();
        assert_eq!(clashes.len(), 3);
        assert!(clashes[2].contains("'main.css'"));
        assert!(!report.warnings.iter().any(|w| w.contains("'index.html'")));
    }

    #[test]
    fn test_escaping_paths() {
        let report = validate_structure(&structure(&["../evil.html", "/etc/site.html"]));
        let escaping = report
            .warnings
            .iter()
            .filter(|w| w.contains("outside the output directory"))
            .count();
        assert_eq!(escaping, 2);
    }

    #[test]
    fn test_non_html_extension() {
        let report = validate_structure(&structure(&["pricing", "legal.HTM", "login.php"]));
        assert!(report.warnings.contains(&"Page 'pricing' has no .html extension".to_string()));
        assert!(report.warnings.contains(&"Page 'login.php' has no .html extension".to_string()));
        assert!(!report.warnings.iter().any(|w| w.contains("legal.HTM")));
    }

    #[test]
    fn test_validate_prompt() {
        assert!(!validate_prompt(" \n ").is_ok());

        let report = validate_prompt("A fintech landing site");
        assert!(report.is_ok());
        assert_eq!(report.info, vec!["Prompt: 4 words, 22 bytes"]);
    }

    #[test]
    fn test_merge() {
        let mut report = validate_prompt("");
        report.merge(validate_structure(&structure(&[])));
        assert_eq!(report.errors.len(), 1);
        assert!(!report.warnings.is_empty());
        assert_eq!(report.info.len(), 1);
    }
}
