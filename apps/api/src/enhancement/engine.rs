//! Enhancement engine — pluggable, trait-based rewriter for résumé section text.
//!
//! Default: `TemplateEnhancer` (deterministic string templating, no model call).
//! `AppState` holds an `Arc<dyn Enhancer>`, chosen at startup.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::enhancement::templates::{
    template_for, Section, BULLET, FALLBACK_PREFIX, SUMMARY_CLOSING, SUMMARY_TENURE_CLAIM,
};

/// Rewritten section text plus improvement tips for that section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhancementResult {
    pub enhanced_content: String,
    pub suggestions: Vec<String>,
}

/// Implement this to swap enhancement backends without touching the handler.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, section: &str, content: &str) -> Result<EnhancementResult>;
}

pub struct TemplateEnhancer;

#[async_trait]
impl Enhancer for TemplateEnhancer {
    async fn enhance(&self, section: &str, content: &str) -> Result<EnhancementResult> {
        Ok(enhance_content(section, content))
    }
}

/// Applies the static template for `section` to `content`.
///
/// - summary: fixed prefix + lower-cased text, a tenure claim unless "years"
///   already appears, and a fixed closing sentence
/// - experience: every non-blank, unbulleted line becomes
///   `• <verb> <lower-cased line>`
/// - anything else: `Enhanced: <content>`
///
/// Suggestions come from the same table; unknown sections get none.
pub fn enhance_content(section: &str, content: &str) -> EnhancementResult {
    let parsed = Section::parse(section);

    let enhanced_content = match parsed {
        Some(Section::Summary) => enhance_summary(content),
        Some(Section::Experience) => enhance_experience(content),
        _ => format!("{FALLBACK_PREFIX}{content}"),
    };

    let suggestions = parsed
        .map(|s| {
            template_for(s)
                .improvements
                .iter()
                .map(|tip| tip.to_string())
                .collect()
        })
        .unwrap_or_default();

    EnhancementResult {
        enhanced_content,
        suggestions,
    }
}

fn enhance_summary(content: &str) -> String {
    let prefix = template_for(Section::Summary)
        .prefixes
        .first()
        .copied()
        .unwrap_or_default();
    let lowered = content.to_lowercase();

    let mut enhanced = format!("{prefix} {lowered}");
    if !lowered.contains("years") {
        enhanced.push_str(SUMMARY_TENURE_CLAIM);
    }
    enhanced.push_str(SUMMARY_CLOSING);
    enhanced
}

fn enhance_experience(content: &str) -> String {
    let verb = template_for(Section::Experience)
        .action_verbs
        .first()
        .copied()
        .unwrap_or_default();

    content
        .split('\n')
        .map(|line| {
            if !line.trim().is_empty() && !line.starts_with(BULLET) {
                format!("{BULLET} {verb} {}", line.to_lowercase())
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
