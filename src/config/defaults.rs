pub(super) fn default_timeout_seconds() -> u64 {
    30
}

pub(super) fn default_debounce_ms() -> u64 {
    500
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_json_format() -> bool {
    false
}
