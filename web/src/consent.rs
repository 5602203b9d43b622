use leptos::prelude::RwSignal;
use web_sys::js_sys;

pub const CONSENT_KEY: &str = "ageVerified";
pub const CONSENT_DATE_KEY: &str = "ageVerifiedDate";

/// Acceptance expires after 7 days; visitors re-confirm after that.
pub const CONSENT_TTL_MS: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Shared consent flag. True once the visitor has passed the age gate;
/// nothing may hit the network while it is false.
#[derive(Clone, Copy)]
pub struct ConsentSignal(pub RwSignal<bool>);

/// Persisted yes/no gate in front of the whole app.
pub trait ConsentStore {
    fn is_accepted(&self) -> bool;
    fn accept(&self);
}

pub fn is_fresh(accepted_at_ms: f64, now_ms: f64) -> bool {
    now_ms - accepted_at_ms < CONSENT_TTL_MS
}

/// Decides whether a stored flag + timestamp pair still counts as accepted.
pub fn evaluate(flag: Option<&str>, accepted_at_ms: Option<f64>, now_ms: f64) -> bool {
    matches!((flag, accepted_at_ms), (Some("true"), Some(at)) if is_fresh(at, now_ms))
}

/// Browser-localStorage backed store. Callers reach it from effects, so it
/// never runs during server rendering.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageConsent;

impl LocalStorageConsent {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ConsentStore for LocalStorageConsent {
    fn is_accepted(&self) -> bool {
        let Some(storage) = Self::storage() else {
            return false;
        };
        let flag = storage.get_item(CONSENT_KEY).ok().flatten();
        let accepted_at = storage
            .get_item(CONSENT_DATE_KEY)
            .ok()
            .flatten()
            .and_then(|s| s.parse::<f64>().ok());
        evaluate(flag.as_deref(), accepted_at, js_sys::Date::now())
    }

    fn accept(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(CONSENT_KEY, "true");
            let _ = storage.set_item(CONSENT_DATE_KEY, &js_sys::Date::now().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

    #[test]
    fn fresh_within_seven_days() {
        assert!(is_fresh(0.0, 6.9 * DAY_MS));
        assert!(is_fresh(0.0, 0.0));
    }

    #[test]
    fn expired_at_exactly_seven_days() {
        assert!(!is_fresh(0.0, 7.0 * DAY_MS));
        assert!(!is_fresh(0.0, 30.0 * DAY_MS));
    }

    #[test]
    fn evaluate_requires_flag_and_timestamp() {
        let now = 10.0 * DAY_MS;
        assert!(evaluate(Some("true"), Some(now - DAY_MS), now));
        assert!(!evaluate(Some("true"), None, now));
        assert!(!evaluate(None, Some(now - DAY_MS), now));
        assert!(!evaluate(Some("yes"), Some(now - DAY_MS), now));
        assert!(!evaluate(Some("true"), Some(now - 8.0 * DAY_MS), now));
    }
}
