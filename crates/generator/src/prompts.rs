//! Instruction text sent to the generation service.
//!
//! Every builder embeds the user's prompt verbatim at the end so the
//! fixed rules always come first.

use promptsite_core::Prompt;

pub const STRUCTURE_SYSTEM: &str = "You are a senior website architect.";
pub const HEADER_SYSTEM: &str = "You create reusable website headers.";
pub const FOOTER_SYSTEM: &str = "You create reusable website footers.";
pub const STYLESHEET_SYSTEM: &str = "You generate production-ready CSS.";
pub const PAGE_SYSTEM: &str = "You generate complete HTML pages.";

/// A system-role / user-role instruction pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub system: &'static str,
    pub user: String,
}

pub fn structure(prompt: &Prompt) -> Instruction {
    Instruction {
        system: STRUCTURE_SYSTEM,
        user: format!(
            r#"Generate a JSON website structure.

Rules:
- Header and footer must be global
- Pages must be independent
- Include pricing, login, signup, legal pages
- List every page file name (for example "pricing.html") in a "pages" array

Return ONLY valid JSON.

Prompt:
{}
"#,
            prompt.as_str()
        ),
    }
}

pub fn header(prompt: &Prompt) -> Instruction {
    Instruction {
        system: HEADER_SYSTEM,
        user: format!(
            "Create a clean global HTML header for this site. \
             Return only the header markup, without <html>, <head> or <body> tags:\n{}",
            prompt.as_str()
        ),
    }
}

pub fn footer(prompt: &Prompt) -> Instruction {
    Instruction {
        system: FOOTER_SYSTEM,
        user: format!(
            "Create a clean global HTML footer with disclaimer. \
             Return only the footer markup, without <html>, <head> or <body> tags:\n{}",
            prompt.as_str()
        ),
    }
}

pub fn stylesheet(prompt: &Prompt) -> Instruction {
    Instruction {
        system: STYLESHEET_SYSTEM,
        user: format!(
            r#"Create a modern CSS stylesheet for this website.
Dark & light friendly.
Mobile responsive.
Return only CSS.

Website prompt:
{}
"#,
            prompt.as_str()
        ),
    }
}

pub fn page(page_name: &str, prompt: &Prompt) -> Instruction {
    Instruction {
        system: PAGE_SYSTEM,
        user: format!(
            r#"Create the page content for '{}'.

Rules:
- Do NOT include header or footer
- Content only inside <main>
- SEO friendly
- Professional UI

Website prompt:
{}
"#,
            page_name,
            prompt.as_str()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> Prompt {
        Prompt::new("A fintech landing site").unwrap()
    }

    #[test]
    fn test_structure_instruction_lists_rules() {
        let instruction = structure(&prompt());
        assert_eq!(instruction.system, "You are a senior website architect.");
        assert!(instruction.user.contains("Include pricing, login, signup, legal pages"));
        assert!(instruction.user.contains("Return ONLY valid JSON."));
        assert!(instruction.user.ends_with("A fintech landing site\n"));
    }

    #[test]
    fn test_footer_instruction_requires_disclaimer() {
        assert!(footer(&prompt()).user.contains("disclaimer"));
    }

    #[test]
    fn test_page_instruction_names_page() {
        let instruction = page("pricing.html", &prompt());
        assert!(instruction.user.contains("'pricing.html'"));
        assert!(instruction.user.contains("Do NOT include header or footer"));
        assert!(instruction.user.contains("A fintech landing site"));
    }

    #[test]
    fn test_system_roles_are_distinct() {
        let p = prompt();
        let systems = [
            structure(&p).system,
            header(&p).system,
            footer(&p).system,
            stylesheet(&p).system,
            page("index.html", &p).system,
        ];
        for (i, a) in systems.iter().enumerate() {
            for b in &systems[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
