//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Watcher Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gemini-2.5-flash"
# temperature = 0.4       # 0.0-2.0
# api_key_env = "API_KEY" # read on every request
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# timeout_secs = 120      # 5-600

[persona]
# system_instruction = """..."""   # built-in Watcher persona when unset
# welcome_message = "**I am the Hand of the Watcher.** ..."
# failure_notice = "*A cold wind blows through the settlement...* (API Error)"
# image_prompt = "Explain this page to me. Identify any specific rules, tables, or events."
# loading_messages = [
#   "Consulting the Lantern Hoard...",
#   "Listening to the whispers in the dark...",
# ]
# suggested_queries = ["How does Collision work?"]

[status]
# interval_ms = 3000      # 100-60000

[logging]
# level = "INFO"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
