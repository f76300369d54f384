// src/core/net.rs
// Blocking HTTPS GET for conjugation pages.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{BASE_URL, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Source of raw conjugation pages, one per verb.
pub trait Fetcher {
    fn fetch(&self, verb: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_base(BASE_URL)
    }

    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| Error::Http { url: base.to_string(), source })?;
        Ok(Self { client, base })
    }

    pub fn url_for(&self, verb: &str) -> Url {
        verb_url(&self.base, verb)
    }
}

/// `base` + `verb` as one percent-encoded path segment (`créer` → `cr%C3%A9er`).
pub fn verb_url(base: &Url, verb: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(verb.trim());
    }
    url
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, verb: &str) -> Result<String> {
        let url = self.url_for(verb);
        logd!("HTTP: GET {}", url);

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| Error::Http { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
        }
        resp.text().map_err(|source| Error::Http { url: url.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_is_one_encoded_segment() {
        let base = Url::parse(BASE_URL).unwrap();
        assert_eq!(
            verb_url(&base, "donner").as_str(),
            "https://conjugaison.bescherelle.com/verbes/donner"
        );
        assert_eq!(
            verb_url(&base, " créer ").as_str(),
            "https://conjugaison.bescherelle.com/verbes/cr%C3%A9er"
        );
        assert_eq!(
            verb_url(&base, "a/b").as_str(),
            "https://conjugaison.bescherelle.com/verbes/a%2Fb"
        );
    }

    #[test]
    fn base_without_trailing_slash_still_appends() {
        let base = Url::parse("https://example.org/verbes").unwrap();
        assert_eq!(verb_url(&base, "aimer").as_str(), "https://example.org/verbes/aimer");
    }
}
