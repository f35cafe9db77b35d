//! Cookie lookup for the CSRF token sent with chat requests.
//!
//! Parsing works on the raw `document.cookie` string so it can be tested
//! natively; only `read_cookie` touches the browser.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Find `name` in a `document.cookie` style string and URL-decode its value.
///
/// Returns `None` when the cookie is absent or its value is not valid UTF-8
/// after decoding.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
        .and_then(|raw| match urlencoding::decode(raw) {
            Ok(value) => Some(value.into_owned()),
            Err(err) => {
                log::warn!("cookie {name} is not valid utf-8: {err}");
                None
            }
        })
}

/// Read a cookie from the current document.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html_document.cookie().ok()?;
        parse_cookie(&cookies, name)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}
