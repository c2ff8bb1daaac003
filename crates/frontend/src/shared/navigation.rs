//! Навигация по истории браузера

use web_sys::window;

/// Возврат на предыдущую страницу (`history.back()`).
/// Без `window`/`history` вызов ничего не делает.
pub fn history_back() {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        log::debug!("history_back: history API is not available");
        return;
    };
    if let Err(err) = history.back() {
        log::error!("history.back() failed: {:?}", err);
    }
}
