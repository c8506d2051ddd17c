//! Validation for the `[model]` section.

use crate::schema::WatcherConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

/// Validate model connection settings.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &WatcherConfig) {
    validate_not_blank(errors, "model.name", &config.model.name);
    validate_not_blank(errors, "model.api_key_env", &config.model.api_key_env);
    validate_range_f64(
        errors,
        "model.temperature",
        config.model.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "model.timeout_secs",
        u64::from(config.model.timeout_secs),
        5,
        600,
    );

    let base_url = config.model.base_url.trim();
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        errors.push(format!(
            "model.base_url = {base_url:?} must start with http:// or https://"
        ));
    }
}
