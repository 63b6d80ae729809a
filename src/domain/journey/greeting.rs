//! Personalized greetings.

use super::UserJourney;
use crate::domain::foundation::Timestamp;

/// Builds a time-of-day greeting for the journey's owner.
///
/// First-time users get an introduction; users returning after more than a
/// day get a welcome back.
pub fn greeting(journey: &UserJourney, now: Timestamp) -> String {
    let time_greet = match now.hour() {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    let name = journey.display_name();

    match journey.last_active_at() {
        None => format!(
            "{}, {}! I'm MindMate, your wellness companion 💙",
            time_greet, name
        ),
        Some(last) if now.duration_since(&last).num_seconds() > 86_400 => {
            format!("{}, {}! Welcome back 💙", time_greet, name)
        }
        Some(_) => format!("{}, {}!", time_greet, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::journey::JourneyLimits;

    // 2024-01-15T10:30:00Z
    const MORNING: u64 = 1_705_314_600;

    fn journey() -> UserJourney {
        UserJourney::new(
            UserId::new("sam_1").unwrap(),
            JourneyLimits::default(),
            Timestamp::from_unix_secs(MORNING),
        )
    }

    #[test]
    fn first_interaction_introduces_assistant() {
        let text = greeting(&journey(), Timestamp::from_unix_secs(MORNING));
        assert!(text.starts_with("Good morning, Sam!"));
        assert!(text.contains("I'm MindMate"));
    }

    #[test]
    fn returning_after_a_day_welcomes_back() {
        let mut journey = journey();
        let start = Timestamp::from_unix_secs(MORNING);
        journey.touch(start);

        let evening = start.add_days(2).plus_secs(9 * 3600);
        assert_eq!(greeting(&journey, evening), "Good evening, Sam! Welcome back 💙");
    }

    #[test]
    fn exactly_one_day_later_is_not_yet_welcome_back() {
        let mut journey = journey();
        let start = Timestamp::from_unix_secs(MORNING);
        journey.touch(start);

        assert_eq!(greeting(&journey, start.add_days(1)), "Good morning, Sam!");
        assert_eq!(
            greeting(&journey, start.add_days(1).plus_secs(1)),
            "Good morning, Sam! Welcome back 💙"
        );
    }

    #[test]
    fn same_day_return_is_plain() {
        let mut journey = journey();
        let start = Timestamp::from_unix_secs(MORNING);
        journey.touch(start);

        let afternoon = start.plus_secs(4 * 3600);
        assert_eq!(greeting(&journey, afternoon), "Good afternoon, Sam!");
    }
}
