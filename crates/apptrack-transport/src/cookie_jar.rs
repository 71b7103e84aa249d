//! Collector cookie jar persisted to the host's storage directory.
//!
//! Cookies are keyed by exact request host. Domain/path scoping and expiry
//! dates are not modelled; `Max-Age=0` deletes a cookie.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use apptrack_core::constants::COOKIE_JAR_FILENAME;
use apptrack_core::errors::{EngineError, EngineResult};
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;
use reqwest::Url;

type HostCookies = HashMap<String, BTreeMap<String, String>>;

#[derive(Debug, Default)]
pub struct PersistentCookieJar {
    path: Option<PathBuf>,
    cookies: RwLock<HostCookies>,
}

impl PersistentCookieJar {
    /// A jar that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open (or create) the jar file inside `dir`, loading any saved cookies.
    ///
    /// An unreadable jar file is moved aside to `*.json.corrupt` and the jar
    /// starts empty.
    pub fn open(dir: &Path) -> EngineResult<Self> {
        fs::create_dir_all(dir).map_err(EngineError::transport)?;
        let path = dir.join(COOKIE_JAR_FILENAME);

        let cookies = if path.exists() {
            let text = fs::read_to_string(&path).map_err(EngineError::transport)?;
            match serde_json::from_str(&text) {
                Ok(cookies) => cookies,
                Err(e) => {
                    quarantine(&path, &e);
                    HostCookies::new()
                }
            }
        } else {
            HostCookies::new()
        };

        tracing::debug!(path = %path.display(), hosts = cookies.len(), "cookie jar opened");
        Ok(Self {
            path: Some(path),
            cookies: RwLock::new(cookies),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, host: &str, name: &str) -> Option<String> {
        let cookies = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
        cookies.get(host).and_then(|c| c.get(name)).cloned()
    }

    /// Number of cookies across all hosts.
    pub fn len(&self) -> usize {
        let cookies = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
        cookies.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) -> EngineResult<()> {
        let mut cookies = self.cookies.write().unwrap_or_else(PoisonError::into_inner);
        cookies.clear();
        self.persist(&cookies)
    }

    /// Record `Set-Cookie` header values received from `host`.
    pub fn store<'a>(
        &self,
        host: &str,
        set_cookie_headers: impl IntoIterator<Item = &'a str>,
    ) -> EngineResult<()> {
        let mut cookies = self.cookies.write().unwrap_or_else(PoisonError::into_inner);
        let mut changed = false;
        for header in set_cookie_headers {
            let Some(cookie) = ParsedCookie::parse(header) else {
                tracing::debug!(host, "ignoring malformed Set-Cookie header");
                continue;
            };
            let entry = cookies.entry(host.to_string()).or_default();
            if cookie.expired {
                changed |= entry.remove(&cookie.name).is_some();
            } else {
                entry.insert(cookie.name, cookie.value);
                changed = true;
            }
        }
        cookies.retain(|_, c| !c.is_empty());
        if changed {
            self.persist(&cookies)?;
        }
        Ok(())
    }

    /// `Cookie` header value for `host`, if any cookies are stored.
    pub fn header_for(&self, host: &str) -> Option<String> {
        let cookies = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
        let host_cookies = cookies.get(host)?;
        let header = host_cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        Some(header)
    }

    fn persist(&self, cookies: &HostCookies) -> EngineResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string(cookies).map_err(EngineError::transport)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(EngineError::transport)?;
        fs::rename(&tmp, path).map_err(EngineError::transport)
    }
}

fn quarantine(path: &Path, error: &serde_json::Error) {
    let corrupt = path.with_extension("json.corrupt");
    tracing::warn!(path = %path.display(), %error, "discarding unreadable cookie jar");
    if let Err(e) = fs::rename(path, &corrupt) {
        tracing::warn!(path = %corrupt.display(), error = %e, "failed to move cookie jar aside");
    }
}

impl CookieStore for PersistentCookieJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let Some(host) = url.host_str() else {
            return;
        };
        let values: Vec<&str> = cookie_headers.filter_map(|h| h.to_str().ok()).collect();
        if let Err(e) = self.store(host, values) {
            tracing::warn!(host, error = %e, "failed to persist collector cookies");
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let header = self.header_for(url.host_str()?)?;
        HeaderValue::from_str(&header).ok()
    }
}

struct ParsedCookie {
    name: String,
    value: String,
    expired: bool,
}

impl ParsedCookie {
    fn parse(header: &str) -> Option<Self> {
        let mut parts = header.split(';');
        let (name, value) = parts.next()?.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let expired = parts.any(|attr| {
            attr.split_once('=').is_some_and(|(k, v)| {
                k.trim().eq_ignore_ascii_case("max-age")
                    && v.trim().parse::<i64>().is_ok_and(|age| age <= 0)
            })
        });
        Some(Self {
            name: name.to_string(),
            value: value.trim().to_string(),
            expired,
        })
    }
}
