use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Shared header markup file written next to the pages
pub const HEADER_FILE: &str = "header.html";
/// Shared footer markup file written next to the pages
pub const FOOTER_FILE: &str = "footer.html";
/// Stylesheet every assembled page links to
pub const STYLESHEET_FILE: &str = "main.css";

/// The user's description of the site, passed unchanged to every generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Wrap prompt text, rejecting blank input
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::Configuration("Prompt is empty".to_string()));
        }
        Ok(Self(text))
    }

    /// Read the whole prompt file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Cannot read prompt file {}: {}", path.display(), e))
        })?;
        Self::new(text).map_err(|_| {
            Error::Configuration(format!("Prompt file {} is empty", path.display()))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Site map proposed by the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStructure {
    /// Page identifiers, used verbatim as output file names
    pub pages: Vec<String>,
}

impl SiteStructure {
    /// Parse a raw structure response.
    ///
    /// The response must be a JSON object with a `pages` array of strings.
    /// Extra fields are ignored. Nothing is repaired: code fences, trailing
    /// prose or a bare array all fail with [`Error::StructureParse`].
    pub fn parse(raw: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw.trim())
            .map_err(|e| Error::StructureParse(format!("Response is not valid JSON: {}", e)))?;

        if !value.is_object() {
            return Err(Error::StructureParse(
                "Response is not a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| Error::StructureParse(format!("Invalid site structure: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Header and footer markup reused by every page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SharedComponents {
    pub header: String,
    pub footer: String,
}

/// Outcome of a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub output_dir: PathBuf,
    pub pages_written: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_structure_basic() {
        let structure = SiteStructure::parse(r#"{"pages": ["index.html", "pricing.html"]}"#).unwrap();
        assert_eq!(structure.pages, vec!["index.html", "pricing.html"]);
        assert_eq!(structure.len(), 2);
    }

    #[test]
    fn test_parse_structure_ignores_extra_fields() {
        let raw = r#"
        {
            "site_name": "Ledgerly",
            "pages": ["index.html", "legal.html"],
            "navigation": {"primary": ["index.html"]}
        }
        "#;
        let structure = SiteStructure::parse(raw).unwrap();
        assert_eq!(structure.pages, vec!["index.html", "legal.html"]);
    }

    #[test]
    fn test_parse_structure_empty_pages() {
        let structure = SiteStructure::parse(r#"{"pages": []}"#).unwrap();
        assert!(structure.is_empty());
    }

    #[test]
    fn test_parse_structure_rejects_prose() {
        let result = SiteStructure::parse("Sure! Here is your site structure.");
        assert!(matches!(result, Err(Error::StructureParse(_))));
    }

    #[test]
    fn test_parse_structure_rejects_code_fence() {
        let raw = "```json\n{\"pages\": [\"index.html\"]}\n```";
        assert!(matches!(
            SiteStructure::parse(raw),
            Err(Error::StructureParse(_))
        ));
    }

    #[test]
    fn test_parse_structure_rejects_missing_pages() {
        let result = SiteStructure::parse(r#"{"routes": ["index.html"]}"#);
        let err = result.unwrap_err();
        assert!(matches!(err, Error::StructureParse(_)));
        assert!(err.to_string().contains("pages"));
    }

    #[test]
    fn test_parse_structure_rejects_bare_array() {
        let result = SiteStructure::parse(r#"[["index.html"]]"#);
        assert!(matches!(result, Err(Error::StructureParse(_))));
    }

    #[test]
    fn test_parse_structure_rejects_non_string_pages() {
        let result = SiteStructure::parse(r#"{"pages": [{"name": "index.html"}]}"#);
        assert!(matches!(result, Err(Error::StructureParse(_))));
    }

    #[test]
    fn test_prompt_rejects_blank() {
        assert!(matches!(Prompt::new("   \n\t"), Err(Error::Configuration(_))));
        assert_eq!(Prompt::new("A bakery").unwrap().as_str(), "A bakery");
    }

    #[test]
    fn test_prompt_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        fs::write(&path, "A fintech landing site\n").unwrap();

        let prompt = Prompt::from_file(&path).unwrap();
        assert_eq!(prompt.as_str(), "A fintech landing site\n");
    }

    #[test]
    fn test_prompt_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Prompt::from_file(dir.path().join("missing.txt"));
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_prompt_from_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        fs::write(&path, "").unwrap();

        let err = Prompt::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }
}
