//! Rule-based advice composer behind `POST /conversations/chat`.
//!
//! A reply is built from independent keyword triggers over the lowercased
//! message, bracketed by a fixed disclaimer and the caller's static profile.

pub mod profiles;

pub use profiles::profile_for;

use tracing::debug;

pub const DISCLAIMER: &str = "This is general educational information only, not a diagnosis or treatment plan. \
     For persistent or severe symptoms, please see a doctor in person.";

pub const DAILY_TARGET: &str = "As a simple daily target, aim for at least 20–30 minutes of movement, \
     2–3 servings of vegetables, and 1–2 big glasses of plain water outside of meals.";

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A keyword trigger group. Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    WeightDiet,
    BloodPressure,
    Joints,
    Breathing,
    StressSleep,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::WeightDiet,
        Topic::BloodPressure,
        Topic::Joints,
        Topic::Breathing,
        Topic::StressSleep,
    ];

    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Topic::WeightDiet => &["weight", "lose", "diet"],
            Topic::BloodPressure => &["bp", "blood pressure", "pressure"],
            Topic::Joints => &["knee", "joint", "arthritis", "pain"],
            Topic::Breathing => &["breath", "asthma", "wheeze"],
            Topic::StressSleep => &["stress", "anxious", "sleep", "tired", "fatigue"],
        }
    }

    /// Substring match against already-normalized text.
    pub fn matches(self, normalized: &str) -> bool {
        self.triggers().iter().any(|word| normalized.contains(word))
    }

    pub fn name(self) -> &'static str {
        match self {
            Topic::WeightDiet => "weight_diet",
            Topic::BloodPressure => "blood_pressure",
            Topic::Joints => "joints",
            Topic::Breathing => "breathing",
            Topic::StressSleep => "stress_sleep",
        }
    }

    fn paragraph(self, user_id: &str) -> &'static str {
        match self {
            // u2 is the hypertension/prediabetes persona
            Topic::WeightDiet if user_id == "u2" => {
                "For you, slow, steady weight loss helps both blood pressure and sugar. \
                 Try smaller portions of rice/bread, avoid sugary drinks, and fill half your plate \
                 with vegetables at lunch and dinner."
            }
            Topic::WeightDiet => {
                "Focus on regular meals, plenty of vegetables, and limiting sweets and deep‑fried foods. \
                 Avoid late‑night snacking where possible."
            }
            Topic::BloodPressure => {
                "To support blood pressure, keep salt low: avoid instant noodles, chips, and very salty pickles. \
                 Aim for 20–30 minutes of relaxed walking on most days."
            }
            Topic::Joints => {
                "For knee and joint comfort, prefer low‑impact activity like cycling, swimming, or flat walking. \
                 Avoid long standing, running on hard ground, or deep squats if they trigger pain."
            }
            Topic::Breathing => {
                "With asthma, warm up before exercise, keep your inhaler available, and avoid heavy exercise in very cold \
                 or polluted air whenever possible."
            }
            Topic::StressSleep => {
                "For stress and sleep, try a fixed sleep and wake time, avoid screens for 30 minutes before bed, \
                 and add one short walk or stretching break in the day purely for relaxation."
            }
        }
    }
}

/// A composed reply together with the groups that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub topics: Vec<Topic>,
    pub paragraphs: Vec<&'static str>,
}

impl Advice {
    pub fn text(&self) -> String {
        self.paragraphs.join(PARAGRAPH_SEPARATOR)
    }
}

/// Stateless responder injected into the chat route.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceResponder;

impl AdviceResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, user_id: &str, message: &str) -> Advice {
        let normalized = message.trim().to_lowercase();

        let topics: Vec<Topic> = Topic::ALL
            .into_iter()
            .filter(|topic| topic.matches(&normalized))
            .collect();

        let mut paragraphs = Vec::with_capacity(topics.len() + 3);
        paragraphs.push(DISCLAIMER);
        paragraphs.extend(topics.iter().map(|topic| topic.paragraph(user_id)));

        if topics.is_empty() {
            paragraphs.push(DAILY_TARGET);
        }

        paragraphs.push(profile_for(user_id));

        Advice { topics, paragraphs }
    }

    /// Never fails; every reply has at least three paragraphs.
    pub fn respond(&self, user_id: &str, message: &str) -> String {
        let advice = self.compose(user_id, message);
        let topics: Vec<&str> = advice.topics.iter().map(|t| t.name()).collect();
        debug!(user_id, ?topics, paragraphs = advice.paragraphs.len(), "Advice composed");
        advice.text()
    }
}

#[cfg(test)]
mod tests {
    use super::profiles::FALLBACK_PROFILE;
    use super::*;

    fn paragraphs(user_id: &str, message: &str) -> Vec<String> {
        AdviceResponder::new()
            .respond(user_id, message)
            .split(PARAGRAPH_SEPARATOR)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn no_trigger_gets_daily_target() {
        let parts = paragraphs("u1", "hello there, how are you?");
        assert_eq!(parts, vec![DISCLAIMER, DAILY_TARGET, profile_for("u1")]);
    }

    #[test]
    fn empty_message_unknown_user() {
        let parts = paragraphs("u9", "");
        assert_eq!(parts, vec![DISCLAIMER, DAILY_TARGET, FALLBACK_PROFILE]);
    }

    #[test]
    fn u2_weight_and_bp() {
        let advice = AdviceResponder::new().compose("u2", "I want to lose weight and control my BP");

        assert_eq!(advice.topics, vec![Topic::WeightDiet, Topic::BloodPressure]);
        assert_eq!(advice.paragraphs.len(), 4);
        assert_eq!(advice.paragraphs[0], DISCLAIMER);
        assert!(advice.paragraphs[1].starts_with("For you, slow, steady weight loss"));
        assert!(advice.paragraphs[2].starts_with("To support blood pressure"));
        assert_eq!(advice.paragraphs[3], profile_for("u2"));
    }

    #[test]
    fn other_users_get_generic_diet_paragraph() {
        for user in ["u1", "u3", "user1", ""] {
            let parts = paragraphs(user, "any diet tips?");
            assert!(parts[1].starts_with("Focus on regular meals"), "user {user:?}");
        }
    }

    #[test]
    fn group_order_ignores_word_order() {
        let advice = AdviceResponder::new().compose("u3", "So much stress, and my pain is worse");
        assert_eq!(advice.topics, vec![Topic::Joints, Topic::StressSleep]);
        assert!(advice.paragraphs[1].starts_with("For knee and joint comfort"));
        assert!(advice.paragraphs[2].starts_with("For stress and sleep"));
    }

    #[test]
    fn group_fires_once_for_many_triggers() {
        let advice = AdviceResponder::new().compose("u1", "tired, can't sleep, so much stress and fatigue");
        assert_eq!(advice.topics, vec![Topic::StressSleep]);
        assert_eq!(advice.paragraphs.len(), 3);
    }

    #[test]
    fn every_group_can_fire_together() {
        let advice = AdviceResponder::new().compose(
            "u1",
            "Diet, blood pressure, knee pain, asthma and sleep",
        );
        assert_eq!(advice.topics, Topic::ALL.to_vec());
        assert_eq!(advice.paragraphs.len(), 7);
        assert_eq!(advice.paragraphs.last(), Some(&profile_for("u1")));
        assert!(!advice.paragraphs.contains(&DAILY_TARGET));
    }

    #[test]
    fn matching_is_case_insensitive_and_trims() {
        let advice = AdviceResponder::new().compose("u1", "   WHEEZE at night   ");
        assert_eq!(advice.topics, vec![Topic::Breathing]);
    }

    #[test]
    fn triggers_match_inside_words() {
        // "bp" inside "bpm", "lose" inside "closer"
        let advice = AdviceResponder::new().compose("u1", "heart at 90 bpm, getting closer");
        assert_eq!(advice.topics, vec![Topic::WeightDiet, Topic::BloodPressure]);
    }

    #[test]
    fn profile_lookup_uses_raw_user_id() {
        let parts = paragraphs("U2", "weight");
        assert!(parts[1].starts_with("Focus on regular meals"));
        assert_eq!(parts.last().map(String::as_str), Some(FALLBACK_PROFILE));
    }

    #[test]
    fn respond_is_deterministic() {
        let responder = AdviceResponder::new();
        let first = responder.respond("u2", "pressure and stress");
        let second = responder.respond("u2", "pressure and stress");
        assert_eq!(first, second);
    }
}
