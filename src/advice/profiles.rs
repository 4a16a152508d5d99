//! Static health context for the demo chat personas.
//!
//! These ids (`u1`..`u3`) are unrelated to the ids handed out by the user
//! registry (`user1`, `user2`, ...). The two tables are kept separate.

pub const FALLBACK_PROFILE: &str = "Adult user with general health goals.";

const PROFILES: &[(&str, &str)] = &[
    (
        "u1",
        "You are Alice, 28-year-old woman with mild asthma. \
         Your main goals are better cardio fitness and stress management.",
    ),
    (
        "u2",
        "You are Brian, 45-year-old man with hypertension and prediabetes. \
         Your main goals are weight loss and blood pressure control.",
    ),
    (
        "u3",
        "You are Dr. Chen, 60-year-old woman with knee osteoarthritis and high cholesterol. \
         Your main goals are joint health and maintaining energy.",
    ),
];

/// Profile sentence for `user_id`, matched exactly; unknown ids get the fallback.
pub fn profile_for(user_id: &str) -> &'static str {
    PROFILES
        .iter()
        .find(|(id, _)| *id == user_id)
        .map(|(_, profile)| *profile)
        .unwrap_or(FALLBACK_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_personas_resolve() {
        assert!(profile_for("u1").starts_with("You are Alice"));
        assert!(profile_for("u2").starts_with("You are Brian"));
        assert!(profile_for("u3").starts_with("You are Dr. Chen"));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(profile_for("U1"), FALLBACK_PROFILE);
        assert_eq!(profile_for(" u1"), FALLBACK_PROFILE);
        assert_eq!(profile_for("user1"), FALLBACK_PROFILE);
        assert_eq!(profile_for(""), FALLBACK_PROFILE);
    }
}
