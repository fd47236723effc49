//! Prompt templates for the idea enhancement agent.

/// Build the enhancement prompt for a submitted idea.
///
/// Deterministic interpolation: the idea text, a request for a viability
/// opinion aimed at investors, and - only when `enhance_with_search` is set -
/// one extra sentence directing the agent to research comparable ideas.
pub fn build_enhance_prompt(idea_text: &str, enhance_with_search: bool) -> String {
    let mut prompt = format!(
        "Here's an idea:\n{}\n\n\
         Add your insights on how viable this idea is and whether you think it would do well \
         on content platforms (YouTube, Instagram, ...).\n\
         This text is for potential investors, so be honest but also try to be positive.\n",
        idea_text
    );

    if enhance_with_search {
        prompt.push_str(
            "Find some information on similar ideas and how successful they were among consumers.\n",
        );
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESEARCH_CLAUSE: &str = "information on similar ideas";

    #[test]
    fn test_prompt_embeds_idea_text() {
        let prompt = build_enhance_prompt("A mobile app for plant care reminders", false);
        assert!(prompt.contains("A mobile app for plant care reminders"));
        assert!(prompt.contains("potential investors"));
    }

    #[test]
    fn test_prompt_with_search_contains_research_clause() {
        let prompt = build_enhance_prompt("An idea", true);
        assert!(prompt.contains(RESEARCH_CLAUSE));
    }

    #[test]
    fn test_prompt_without_search_omits_research_clause() {
        let prompt = build_enhance_prompt("An idea", false);
        assert!(!prompt.contains(RESEARCH_CLAUSE));
    }
}
