//! Static enhancement table — phrasing and improvement tips per résumé section.
//!
//! Only the first prefix and the first action verb are used by the template
//! engine; the rest are kept so output stays deterministic while the table
//! documents the full phrasing vocabulary.

/// A résumé section recognised by the enhancement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
}

impl Section {
    /// Case-insensitive lookup. Returns `None` for unrecognised sections.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "summary" => Some(Section::Summary),
            "experience" => Some(Section::Experience),
            "education" => Some(Section::Education),
            "skills" => Some(Section::Skills),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct SectionTemplate {
    pub prefixes: &'static [&'static str],
    pub action_verbs: &'static [&'static str],
    pub improvements: &'static [&'static str],
}

const SUMMARY: SectionTemplate = SectionTemplate {
    prefixes: &[
        "Results-driven professional with",
        "Accomplished specialist in",
        "Dynamic leader with expertise in",
        "Innovative problem-solver with",
    ],
    action_verbs: &[],
    improvements: &[
        "quantify achievements with specific metrics",
        "highlight leadership and collaboration skills",
        "emphasize industry-specific expertise",
        "showcase problem-solving capabilities",
    ],
};

const EXPERIENCE: SectionTemplate = SectionTemplate {
    prefixes: &[],
    action_verbs: &[
        "Spearheaded",
        "Orchestrated",
        "Optimized",
        "Pioneered",
        "Streamlined",
    ],
    improvements: &[
        "use strong action verbs to start bullet points",
        "quantify results with percentages and numbers",
        "highlight technologies and methodologies used",
        "emphasize impact on business outcomes",
    ],
};

const EDUCATION: SectionTemplate = SectionTemplate {
    prefixes: &[],
    action_verbs: &[],
    improvements: &[
        "include relevant coursework and projects",
        "mention academic achievements and honors",
        "highlight applicable certifications",
        "showcase research or thesis work",
    ],
};

const SKILLS: SectionTemplate = SectionTemplate {
    prefixes: &[],
    action_verbs: &[],
    improvements: &[
        "organize skills by category (Technical, Soft Skills, etc.)",
        "prioritize most relevant skills for target role",
        "include proficiency levels where appropriate",
        "add recently acquired or in-demand skills",
    ],
};

pub fn template_for(section: Section) -> &'static SectionTemplate {
    match section {
        Section::Summary => &SUMMARY,
        Section::Experience => &EXPERIENCE,
        Section::Education => &EDUCATION,
        Section::Skills => &SKILLS,
    }
}

/// Appended to summaries that do not already state an experience length.
pub const SUMMARY_TENURE_CLAIM: &str = " with 5+ years of proven success";

/// Always closes an enhanced summary.
pub const SUMMARY_CLOSING: &str =
    ". Demonstrated expertise in driving results and leading cross-functional teams.";

pub const BULLET: char = '•';

/// Prefix applied to content of sections with no dedicated template branch.
pub const FALLBACK_PREFIX: &str = "Enhanced: ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Section::parse("SUMMARY"), Some(Section::Summary));
        assert_eq!(Section::parse("Experience"), Some(Section::Experience));
        assert_eq!(Section::parse("skills"), Some(Section::Skills));
    }

    #[test]
    fn test_parse_unknown_section() {
        assert_eq!(Section::parse("projects"), None);
        assert_eq!(Section::parse(" summary"), None, "no trimming is applied");
    }

    #[test]
    fn test_every_section_has_four_tips() {
        for section in [
            Section::Summary,
            Section::Experience,
            Section::Education,
            Section::Skills,
        ] {
            assert_eq!(template_for(section).improvements.len(), 4);
        }
    }

    #[test]
    fn test_first_entries_drive_templating() {
        assert_eq!(
            template_for(Section::Summary).prefixes[0],
            "Results-driven professional with"
        );
        assert_eq!(template_for(Section::Experience).action_verbs[0], "Spearheaded");
    }
}
