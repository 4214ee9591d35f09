use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, AppResult};

/// Anchor holding the display name inside the profile page's title heading.
pub const DISPLAY_NAME_SELECTOR: &str = "h1.project_title > a.project_link";

pub fn display_name_selector() -> AppResult<Selector> {
    Selector::parse(DISPLAY_NAME_SELECTOR)
        .map_err(|err| AppError::Config(format!("invalid display name selector: {err}")))
}

/// Appends `identifier` to `base` as a single percent-encoded path segment.
pub fn profile_url(base: &Url, identifier: &str) -> AppResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| AppError::Config(format!("base url `{base}` cannot carry a path")))?
        .pop_if_empty()
        .push(identifier);
    Ok(url)
}

/// Returns the first non-blank text node directly under a matching anchor,
/// with runs of whitespace (line breaks included) collapsed to one space.
pub fn extract_display_name(body: &str, selector: &Selector) -> Option<String> {
    let document = Html::parse_document(body);
    document
        .select(selector)
        .flat_map(|anchor| anchor.children())
        .filter_map(|node| node.value().as_text().map(|text| collapse_whitespace(text)))
        .find(|name| !name.is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
