//! Validation for the `[persona]` and `[status]` sections.

use crate::schema::WatcherConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate persona text. The system instruction may be empty.
pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &WatcherConfig) {
    let persona = &config.persona;
    validate_not_blank(errors, "persona.welcome_message", &persona.welcome_message);
    validate_not_blank(errors, "persona.failure_notice", &persona.failure_notice);
    validate_not_blank(errors, "persona.image_prompt", &persona.image_prompt);

    if persona.loading_messages.is_empty() {
        errors.push("persona.loading_messages must contain at least one phrase".into());
    }
    for (i, phrase) in persona.loading_messages.iter().enumerate() {
        validate_not_blank(errors, &format!("persona.loading_messages[{i}]"), phrase);
    }
}

/// Validate the status rotation interval.
pub(crate) fn validate_status(errors: &mut Vec<String>, config: &WatcherConfig) {
    validate_range(
        errors,
        "status.interval_ms",
        config.status.interval_ms,
        100,
        60_000,
    );
}
