// src/services/prompt_builder.rs - prompt assembly for the Gemini call

use crate::dtos::post_dtos::GeneratePostRequest;

// Clause tables keyed by the values the client's selects send. Anything
// else simply contributes no clause. The wording here is product copy:
// changing a sentence changes what Gemini produces.
const PLATFORM_GUIDELINES: &[(&str, &str)] = &[
    (
        "twitter",
        "Keep it under 280 characters and make it engaging and shareable.",
    ),
    (
        "linkedin",
        "Make it professional and suitable for LinkedIn audience. Can be longer form content.",
    ),
    (
        "facebook",
        "Make it conversational and engaging for Facebook audience.",
    ),
    (
        "instagram",
        "Make it visually engaging and suitable for Instagram audience.",
    ),
    (
        "threads",
        "Keep it conversational and authentic for Threads audience.",
    ),
];

const TONE_GUIDELINES: &[(&str, &str)] = &[
    (
        "professional",
        "Use professional language and maintain a business-appropriate tone.",
    ),
    (
        "friendly",
        "Use warm, approachable language that feels personal and friendly.",
    ),
    (
        "funny",
        "Add humor and wit to make the post entertaining and shareable.",
    ),
    ("bold", "Use strong, confident language that makes a statement."),
    (
        "inspiring",
        "Make it motivational and uplifting to inspire the audience.",
    ),
    (
        "casual",
        "Use relaxed, informal language as if talking to a friend.",
    ),
];

const EMOJI_CLAUSE: &str = "Include relevant emojis to make the post more engaging.";
const HASHTAG_CLAUSE: &str = "Include 2-5 relevant hashtags at the end.";
const IMAGE_CLAUSE: &str =
    "At the end, suggest 1-2 types of images that would work well with this post.";
const CLOSING_CLAUSE: &str =
    "Return only the post content, no additional commentary or explanation.";

fn guideline(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn push_clause(prompt: &mut String, clause: &str) {
    prompt.push(' ');
    prompt.push_str(clause);
}

/// Builds the instruction string sent to Gemini. Clause order is fixed:
/// base sentence, idea (or generic topic), platform guideline, tone
/// guideline, the three optional feature clauses, closing instruction.
pub fn build_prompt(req: &GeneratePostRequest) -> String {
    let mut prompt = format!(
        "Create a social media post for {} with a {} tone.",
        req.platform, req.tone
    );

    // An empty idea string counts as no idea, same as the client sending
    // nothing at all.
    match req.idea.as_deref() {
        Some(idea) if !idea.is_empty() => {
            push_clause(
                &mut prompt,
                &format!("The post should be based on this idea: \"{}\".", idea),
            );
        }
        _ => push_clause(
            &mut prompt,
            "Create an engaging post about a relevant and interesting topic.",
        ),
    }

    if let Some(clause) = guideline(PLATFORM_GUIDELINES, &req.platform) {
        push_clause(&mut prompt, clause);
    }

    if let Some(clause) = guideline(TONE_GUIDELINES, &req.tone) {
        push_clause(&mut prompt, clause);
    }

    if req.add_emojis {
        push_clause(&mut prompt, EMOJI_CLAUSE);
    }

    if req.add_hashtags {
        push_clause(&mut prompt, HASHTAG_CLAUSE);
    }

    if req.suggest_images {
        push_clause(&mut prompt, IMAGE_CLAUSE);
    }

    push_clause(&mut prompt, CLOSING_CLAUSE);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        idea: Option<&str>,
        platform: &str,
        tone: &str,
        add_emojis: bool,
        add_hashtags: bool,
        suggest_images: bool,
    ) -> GeneratePostRequest {
        GeneratePostRequest {
            idea: idea.map(|s| s.to_string()),
            platform: platform.to_string(),
            tone: tone.to_string(),
            add_emojis,
            add_hashtags,
            suggest_images,
        }
    }

    #[test]
    fn every_platform_tone_pair_gets_both_clauses_in_order() {
        for &(platform, platform_clause) in PLATFORM_GUIDELINES {
            for &(tone, tone_clause) in TONE_GUIDELINES {
                let prompt = build_prompt(&request(None, platform, tone, false, false, false));

                assert_eq!(
                    prompt.matches(platform_clause).count(),
                    1,
                    "platform clause ({platform}, {tone})"
                );
                assert_eq!(
                    prompt.matches(tone_clause).count(),
                    1,
                    "tone clause ({platform}, {tone})"
                );
                let platform_at = prompt.find(platform_clause).unwrap();
                let tone_at = prompt.find(tone_clause).unwrap();
                assert!(platform_at < tone_at, "clause order ({platform}, {tone})");
                assert!(prompt.ends_with(CLOSING_CLAUSE));
            }
        }
    }

    #[test]
    fn no_optional_clauses_when_flags_off() {
        let prompt = build_prompt(&request(None, "twitter", "friendly", false, false, false));

        assert!(!prompt.contains(EMOJI_CLAUSE));
        assert!(!prompt.contains(HASHTAG_CLAUSE));
        assert!(!prompt.contains(IMAGE_CLAUSE));
    }

    #[test]
    fn bold_twitter_launch_post_gets_the_expected_clauses() {
        let prompt = build_prompt(&request(
            Some("launch day"),
            "twitter",
            "bold",
            true,
            true,
            false,
        ));

        assert!(prompt.starts_with("Create a social media post for twitter with a bold tone."));
        assert!(prompt.contains("The post should be based on this idea: \"launch day\"."));
        assert!(prompt.contains("Keep it under 280 characters"));
        assert!(prompt.contains("Use strong, confident language that makes a statement."));
        assert!(prompt.contains(EMOJI_CLAUSE));
        assert!(prompt.contains(HASHTAG_CLAUSE));
        assert!(!prompt.contains(IMAGE_CLAUSE));
        assert!(prompt.ends_with(CLOSING_CLAUSE));
    }

    #[test]
    fn unknown_platform_and_tone_contribute_no_clause() {
        let prompt = build_prompt(&request(None, "myspace", "sleepy", false, false, false));

        assert!(prompt.starts_with("Create a social media post for myspace with a sleepy tone."));
        for &(_, clause) in PLATFORM_GUIDELINES.iter().chain(TONE_GUIDELINES) {
            assert!(!prompt.contains(clause));
        }
        assert!(prompt.ends_with(CLOSING_CLAUSE));
    }

    #[test]
    fn missing_or_empty_idea_requests_a_topic() {
        let generic = "Create an engaging post about a relevant and interesting topic.";

        let without = build_prompt(&request(None, "twitter", "casual", false, false, false));
        assert!(without.contains(generic));

        let empty = build_prompt(&request(Some(""), "twitter", "casual", false, false, false));
        assert!(empty.contains(generic));
        assert!(!empty.contains("based on this idea"));
    }

    #[test]
    fn idea_is_interpolated_verbatim() {
        let prompt = build_prompt(&request(
            Some("50% off \"everything\""),
            "instagram",
            "funny",
            false,
            false,
            true,
        ));

        assert!(prompt.contains("The post should be based on this idea: \"50% off \"everything\"\"."));
        assert!(prompt.contains(IMAGE_CLAUSE));
    }
}
