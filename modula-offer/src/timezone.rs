use chrono_tz::Tz;

/// Resolve the effective calendar zone from the host's timezone setting.
///
/// An absent, empty, or unknown setting always falls back to UTC; the
/// resolver never errors.
pub fn resolve_timezone(setting: Option<&str>) -> Tz {
    let name = match setting {
        Some(name) if !name.trim().is_empty() => name.trim(),
        _ => return Tz::UTC,
    };

    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::debug!(zone = name, "unknown timezone setting, falling back to UTC");
            Tz::UTC
        }
    }
}
