//! Gateways to the outside world: position sources,
//! reverse geocoding and the backend API.

use url::Url;

pub mod backend;
pub mod json;
pub mod nominatim;
pub mod position;

/// Append a relative path to the base URL.
///
/// Unlike [`Url::join`] this keeps the last segment of the base
/// path and a trailing slash of the relative path.
pub(crate) fn append_path(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(path.trim_start_matches('/').split('/'));
    }
    url
}
