//! LLM prompts for act summarization.

/// Stand-in for the link when a reference has none.
pub const NO_LINK_PLACEHOLDER: &str = "No direct link available";

/// Prompt asking for a six-key JSON summary of one act reference.
pub const SUMMARIZE_ACT_PROMPT: &str = r#"You are a legal research assistant specializing in Texas tax and regulatory law.

The following reference was found in {chapter} of the Texas statutes:

Act reference: {label}
Source link: {link}

Summarize the act this reference points to. Respond with ONLY a JSON object, no prose and no code fences, with exactly these keys:
{
    "act_name": "the name or citation of the act",
    "consumer_product_taxed": "the consumer product or activity the act taxes or regulates",
    "tax_rate": "the tax rate or fee the act imposes",
    "taxpayer": "who is responsible for paying the tax",
    "enforcement": "the agency or mechanism that enforces the act",
    "source_links": ["URLs of sources supporting this summary"]
}

If a detail is unknown, say so in that field rather than omitting the key."#;

/// Fill in the summarization prompt.
pub fn format_summarize_prompt(label: &str, link: Option<&str>, chapter: &str) -> String {
    fill_template(
        SUMMARIZE_ACT_PROMPT,
        &[
            ("{chapter}", chapter),
            ("{label}", label),
            ("{link}", link.unwrap_or(NO_LINK_PLACEHOLDER)),
        ],
    )
}

/// Substitute slots in one left-to-right pass. Inserted values are never
/// rescanned, so a value containing slot text is kept verbatim.
fn fill_template(template: &str, slots: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        rest = &rest[start..];
        match slots.iter().find(|(slot, _)| rest.starts_with(slot)) {
            Some((slot, value)) => {
                filled.push_str(value);
                rest = &rest[slot.len()..];
            }
            None => {
                filled.push('{');
                rest = &rest[1..];
            }
        }
    }

    filled.push_str(rest);
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_reference_and_chapter() {
        let prompt = format_summarize_prompt(
            "Acts 1981, 67th Leg.",
            Some("https://example.test/1981"),
            "Tax Code Chapter 151",
        );

        assert!(prompt.contains("Act reference: Acts 1981, 67th Leg."));
        assert!(prompt.contains("Source link: https://example.test/1981"));
        assert!(prompt.contains("in Tax Code Chapter 151 of"));
        assert!(!prompt.contains("{label}"));
    }

    #[test]
    fn test_prompt_uses_placeholder_without_link() {
        let prompt = format_summarize_prompt("Acts 1971", None, "Tax Code Chapter 162");

        assert!(prompt.contains("Source link: No direct link available"));
    }

    #[test]
    fn test_slot_text_inside_values_is_not_substituted() {
        let prompt = format_summarize_prompt(
            "Acts {link} 1981",
            Some("https://example.test/{chapter}"),
            "Chapter {label}",
        );

        assert!(prompt.contains("in Chapter {label} of"));
        assert!(prompt.contains("Act reference: Acts {link} 1981"));
        assert!(prompt.contains("Source link: https://example.test/{chapter}"));
    }

    #[test]
    fn test_json_braces_survive_filling() {
        let prompt = format_summarize_prompt("Acts 1971", None, "Tax Code Chapter 162");

        assert!(prompt.contains("{\n    \"act_name\""));
        assert!(prompt.trim_end().ends_with("omitting the key."));
    }

    #[test]
    fn test_prompt_names_all_six_keys() {
        for key in [
            "act_name",
            "consumer_product_taxed",
            "tax_rate",
            "taxpayer",
            "enforcement",
            "source_links",
        ] {
            assert!(SUMMARIZE_ACT_PROMPT.contains(&format!("\"{key}\"")), "missing {key}");
        }
    }
}
