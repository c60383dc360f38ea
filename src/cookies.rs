use axum::http::{header::COOKIE, HeaderMap};

use crate::pages::Flash;

pub const SESSION_COOKIE: &str = "session";
pub const FLASH_COOKIE: &str = "flash";

/// Value of the first cookie called `name` across all `Cookie` headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

pub fn flash_cookie(flash: &Flash) -> String {
    format!("{FLASH_COOKIE}={}; HttpOnly; SameSite=Lax; Path=/", flash.encode())
}

pub fn clear_flash_cookie() -> String {
    format!("{FLASH_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Pending flash message, if the request carries a valid one.
pub fn read_flash(headers: &HeaderMap) -> Option<Flash> {
    read_cookie(headers, FLASH_COOKIE).and_then(|raw| Flash::decode(&raw))
}
