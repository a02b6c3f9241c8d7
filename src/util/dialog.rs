//! Blocking browser dialogs used for destructive confirmations and notices.
//!
//! Outside the browser `confirm` answers "no" and `alert` is a no-op, so
//! destructive flows never proceed without a user.

/// `window.confirm`. False when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window()
            && window.alert_with_message(message).is_err()
        {
            log::warn!("alert failed: {message}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
