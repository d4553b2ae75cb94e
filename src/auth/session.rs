use actix_session::Session;

const USER_ID_KEY: &str = "user_id";
const FLASH_KEY: &str = "flash";

/// User id placed in the session by the host application's login flow.
pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>(USER_ID_KEY).unwrap_or(None)
}

/// Stash a one-shot message for the page rendered after the next redirect.
pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Failed to store flash message: {e}");
    }
}

/// Read and clear the pending flash message. A message is returned at most once.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
