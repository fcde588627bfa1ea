// Conversation weight: how much history exists for a contact.
//
// History is the JSON the conversation endpoint returns: an array of entries,
// each with its own `conversation` array of message turns. The weight is the
// total turn count. Anything malformed counts as zero.

use serde_json::Value;

/// Key holding the list of turns inside an entry, and the history inside a response body.
const CONVERSATION_KEY: &str = "conversation";

/// Total number of message turns across all history entries.
pub fn compute_weight(history: &Value) -> u64 {
    let Some(entries) = history.as_array() else {
        return 0;
    };
    entries
        .iter()
        .filter_map(|entry| entry.get(CONVERSATION_KEY)?.as_array())
        .map(|turns| turns.len() as u64)
        .sum()
}

/// Weight of a conversation-endpoint response body (`{ "conversation": [...] }`).
/// A missing `conversation` field is an empty history.
pub fn weight_from_response(body: &Value) -> u64 {
    body.get(CONVERSATION_KEY).map(compute_weight).unwrap_or(0)
}

/// Parse history JSON text and weigh it. Unparsable text weighs zero.
pub fn compute_weight_str(json: &str) -> u64 {
    serde_json::from_str::<Value>(json)
        .map(|history| compute_weight(&history))
        .unwrap_or(0)
}
