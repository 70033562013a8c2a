//! Canned replies for the LifeLink assistant.
//!
//! A query is lowercased and checked against keyword groups in priority
//! order; the first group with a keyword contained in the query wins.

use async_trait::async_trait;

use super::traits::AiProvider;
use super::types::ProviderId;

pub const BLOOD_REPLY: &str = "To donate blood, you need to be at least 17 years old and weigh \
over 50 kg. You can visit the Blood section in the app to find nearby donation centers or \
respond to urgent requests. Would you like me to guide you through the process?";

pub const MEDICINE_REPLY: &str = "You can share unused, unexpired medicines through our \
Medicine section. Simply list the medicine with its expiry date and location, and those in need \
can request it. All medicines go through a verification process.";

pub const ORGAN_REPLY: &str = "Organ donation registration is a noble decision. You can register \
as an organ donor through our Organ section. The process involves filling out a consent form and \
getting verified. Would you like to know more about eligibility?";

pub const HISTORY_REPLY: &str = "You can check your complete donation history in your Profile \
section. It shows all your blood donations, medicine shares, and any organ registry status. \
Would you like me to take you there?";

pub const FALLBACK_REPLY: &str = "That's a great question! I'm here to help with anything \
related to blood donation, medicine sharing, organ donation, and medical emergencies in \
Pakistan. Could you provide more details so I can assist you better?";

/// Keyword groups in priority order.
const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (&["blood", "donate"], BLOOD_REPLY),
    (&["medicine"], MEDICINE_REPLY),
    (&["organ"], ORGAN_REPLY),
    (&["history", "donation"], HISTORY_REPLY),
];

pub fn select_response(query: &str) -> &'static str {
    let query = query.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| query.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordProvider;

impl KeywordProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AiProvider for KeywordProvider {
    fn provider_id(&self) -> ProviderId {
        ProviderId::Keyword
    }

    async fn respond(&self, prompt: &str) -> String {
        let reply = select_response(prompt);
        tracing::debug!(prompt_len = prompt.len(), "Selected canned reply");
        reply.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_keywords_match_case_insensitively() {
        assert_eq!(select_response("How can I donate blood?"), BLOOD_REPLY);
        assert_eq!(select_response("BLOOD group O+"), BLOOD_REPLY);
        assert_eq!(select_response("I want to Donate"), BLOOD_REPLY);
    }

    #[test]
    fn test_blood_wins_over_lower_priority_groups() {
        assert_eq!(
            select_response("medicine, organ and donation history for blood"),
            BLOOD_REPLY
        );
        assert_eq!(select_response("donate an organ"), BLOOD_REPLY);
    }

    #[test]
    fn test_each_group_reply() {
        assert_eq!(select_response("Find nearby medicine banks"), MEDICINE_REPLY);
        assert_eq!(select_response("Organ donation eligibility"), ORGAN_REPLY);
        assert_eq!(select_response("Check my donation history"), HISTORY_REPLY);
        assert_eq!(select_response("show my HISTORY"), HISTORY_REPLY);
    }

    #[test]
    fn test_medicine_beats_organ_and_history() {
        assert_eq!(select_response("organ or medicine history"), MEDICINE_REPLY);
    }

    #[test]
    fn test_unmatched_queries_fall_back() {
        for query in ["", "   ", "What are your opening hours?", "salam"] {
            let reply = select_response(query);
            assert_eq!(reply, FALLBACK_REPLY);
            assert!(!reply.is_empty());
        }
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "organize" contains "organ"
        assert_eq!(select_response("How do I organize a drive?"), ORGAN_REPLY);
    }

    #[tokio::test]
    async fn test_provider_delegates_to_selector() {
        let provider = KeywordProvider::new();
        assert_eq!(provider.provider_id(), ProviderId::Keyword);
        assert_eq!(provider.respond("medicine").await, MEDICINE_REPLY);
    }
}
