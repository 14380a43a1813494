//! Session state string
//!
//! Filter state is stored as `key=value` pairs joined with `&`, values
//! percent-encoded. Sequences are comma-joined. A value equal to its default,
//! or an empty sequence, is removed from the store rather than written, so a
//! fresh session serializes to the empty string.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::palette::Tag;

use super::FilterState;

pub const KEY_LAYOUT: &str = "layout";
pub const KEY_FORMAT: &str = "format";
pub const KEY_TAGS: &str = "tags";
pub const KEY_DISPLAY: &str = "display";
pub const KEY_FAVORITES: &str = "favorites";

/// Key/value storage the session state is synced into
pub trait StateStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store that round-trips through a query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStore {
    params: Vec<(String, String)>,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `k=v&k=v`. A leading `?` is ignored, undecodable pairs are
    /// dropped, and for repeated keys the first one wins.
    pub fn parse(query: &str) -> Self {
        let mut store = Self::new();
        let query = query.trim().trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Ok(key), Ok(value)) = (decode(key), decode(value)) else {
                tracing::warn!(pair, "dropping undecodable state pair");
                continue;
            };
            if store.get(&key).is_none() {
                store.params.push((key, value));
            }
        }
        store
    }

    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl StateStore for QueryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: String) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    fn remove(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }
}

impl std::fmt::Display for QueryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

fn decode(s: &str) -> std::result::Result<String, std::string::FromUtf8Error> {
    // Form encoding writes spaces as '+'
    urlencoding::decode(&s.replace('+', " ")).map(|cow| cow.into_owned())
}

/// Read filter state from `store`, falling back to `defaults` per key.
///
/// Unparseable scalars keep the default; unparseable sequence items are
/// skipped. Both are logged.
pub fn load_state(store: &dyn StateStore, defaults: &FilterState) -> FilterState {
    FilterState {
        layout: load_scalar(store, KEY_LAYOUT, defaults.layout),
        format: load_scalar(store, KEY_FORMAT, defaults.format),
        tags: match store.get(KEY_TAGS) {
            Some(raw) => normalize_tags(parse_list(KEY_TAGS, raw)),
            None => defaults.tags.clone(),
        },
        display: match store.get(KEY_DISPLAY) {
            Some(raw) => {
                let mut display = Vec::new();
                for option in parse_list(KEY_DISPLAY, raw) {
                    if !display.contains(&option) {
                        display.push(option);
                    }
                }
                display
            }
            None => defaults.display.clone(),
        },
        favorites: match store.get(KEY_FAVORITES) {
            Some(raw) => parse_list(KEY_FAVORITES, raw).into_iter().collect(),
            None => defaults.favorites.clone(),
        },
    }
}

/// Write filter state into `store`, removing keys that hold their default
pub fn save_state(store: &mut dyn StateStore, state: &FilterState, defaults: &FilterState) {
    sync_key(store, KEY_LAYOUT, state.layout == defaults.layout, || {
        state.layout.to_string()
    });
    sync_key(store, KEY_FORMAT, state.format == defaults.format, || {
        state.format.to_string()
    });
    sync_key(
        store,
        KEY_TAGS,
        state.tags.is_empty() || state.tags == defaults.tags,
        || join(state.tags.iter()),
    );
    sync_key(
        store,
        KEY_DISPLAY,
        state.display.is_empty() || state.display == defaults.display,
        || {
            state
                .display
                .iter()
                .map(|o| o.as_str())
                .collect::<Vec<_>>()
                .join(",")
        },
    );
    sync_key(
        store,
        KEY_FAVORITES,
        state.favorites.is_empty() || state.favorites == defaults.favorites,
        || join(state.favorites.iter()),
    );
}

fn sync_key(store: &mut dyn StateStore, key: &str, is_default: bool, value: impl FnOnce() -> String) {
    if is_default {
        store.remove(key);
    } else {
        store.set(key, value());
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(",")
}

fn load_scalar<T>(store: &dyn StateStore, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = raw, error = %e, "ignoring invalid state value");
            default
        }),
        None => default,
    }
}

fn parse_list<T>(key: &str, raw: &str) -> Vec<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .filter_map(|item| match item.trim().parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, value = item, error = %e, "ignoring invalid state item");
                None
            }
        })
        .collect()
}

/// Drop duplicate tags and keep only the last color group
fn normalize_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let last_group = tags.iter().rev().find(|t| t.is_group()).cloned();
    let mut seen = BTreeSet::new();
    tags.into_iter()
        .filter(|tag| !tag.is_group() || Some(tag) == last_group.as_ref())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
