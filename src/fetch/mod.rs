//! Source retrieval: HTTP URL or local file path.
//!
//! A source string starting with `http` is fetched with a blocking GET and
//! must answer exactly 200 OK; anything else is read from disk. Both paths
//! return raw bytes, since decoding is the loader's job.

use reqwest::StatusCode;

use crate::error::{FetchError, FetchResult};

/// Fetch the raw bytes of a CSV source.
pub fn fetch_source(source: &str) -> FetchResult<Vec<u8>> {
    if source.starts_with("http") {
        fetch_url(source)
    } else {
        std::fs::read(source).map_err(|e| FetchError::FileRead {
            path: source.to_string(),
            source: e,
        })
    }
}

fn fetch_url(url: &str) -> FetchResult<Vec<u8>> {
    let response = reqwest::blocking::get(url).map_err(|e| FetchError::RequestFailed {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response.bytes().map_err(|e| FetchError::RequestFailed {
        url: url.to_string(),
        source: e,
    })?;
    Ok(bytes.to_vec())
}
