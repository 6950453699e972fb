pub const DEFAULT_PROFILE: &str = "default";

pub fn resolve_profile(requested: &str, fallback: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    trimmed.to_string()
}
