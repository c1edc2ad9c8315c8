// libs/chat-cell/src/services/hints.rs

// Keyword tables mirror the hint vocabulary the portal UI sends; first
// match wins, scanning in table order.
const EMOTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("anxious", &["anxious", "worried", "nervous", "scared", "afraid"]),
    ("sad", &["sad", "depressed", "unhappy", "hopeless"]),
    ("frustrated", &["frustrated", "annoyed", "angry", "fed up"]),
    ("hopeful", &["hopeful", "optimistic", "improving"]),
];

const INTENT_KEYWORDS: &[(&str, &[&str])] = &[
    ("bookingAppointment", &["appointment", "book", "schedule", "reschedule"]),
    ("medicationQuery", &["medication", "medicine", "prescription", "pill", "dose", "refill"]),
    ("symptomReport", &["symptom", "pain", "fever", "cough", "rash", "hurts"]),
    ("askingForHelp", &["help", "advice", "what should i do"]),
];

/// Fallback emotion hint for requests that did not supply one.
pub fn detect_emotion(message: &str) -> Option<&'static str> {
    detect(message, EMOTION_KEYWORDS)
}

/// Fallback intent hint for requests that did not supply one.
pub fn detect_intent(message: &str) -> Option<&'static str> {
    detect(message, INTENT_KEYWORDS)
}

fn detect(message: &str, table: &[(&'static str, &[&str])]) -> Option<&'static str> {
    let lowered = message.to_lowercase();

    for (label, keywords) in table {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return Some(label);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_anxiety() {
        assert_eq!(detect_emotion("I'm really worried about this mole"), Some("anxious"));
    }

    #[test]
    fn test_detects_booking_intent() {
        assert_eq!(
            detect_intent("Can I schedule a follow-up for next week?"),
            Some("bookingAppointment")
        );
    }

    #[test]
    fn test_booking_wins_over_help() {
        // "help" also appears, but booking is checked first
        assert_eq!(
            detect_intent("Help me book an appointment"),
            Some("bookingAppointment")
        );
    }

    #[test]
    fn test_no_match_yields_none() {
        assert_eq!(detect_emotion("The weather is nice today"), None);
        assert_eq!(detect_intent("The weather is nice today"), None);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(detect_emotion("I AM SO FRUSTRATED"), Some("frustrated"));
    }
}
