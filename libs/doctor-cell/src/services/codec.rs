// libs/doctor-cell/src/services/codec.rs

use std::borrow::Cow;

use crate::models::{ConsultationType, FilterState, SortBy};

pub const PARAM_CONSULTATION_TYPE: &str = "consultationType";
pub const PARAM_SPECIALTIES: &str = "specialties";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SEARCH: &str = "search";

/// Read a [`FilterState`] from a URL query string (with or without the
/// leading `?`). Unknown or malformed values fall back to the defaults;
/// decoding never fails.
pub fn decode(query: &str) -> FilterState {
    let params = parse_query(query);

    let specialties = match first_value(&params, PARAM_SPECIALTIES) {
        Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    FilterState {
        consultation_type: first_value(&params, PARAM_CONSULTATION_TYPE)
            .map(ConsultationType::from_param)
            .unwrap_or_default(),
        specialties,
        sort_by: first_value(&params, PARAM_SORT_BY).map(SortBy::from_param).unwrap_or_default(),
        search_query: first_value(&params, PARAM_SEARCH).unwrap_or_default().to_string(),
    }
}

/// Write the non-default parts of `filters` as a query string (no leading
/// `?`). Parameter order is fixed: consultationType, specialties, sortBy,
/// search. The default state encodes to an empty string.
pub fn encode(filters: &FilterState) -> String {
    let mut pairs: Vec<(&str, Cow<'_, str>)> = Vec::new();

    if let Some(value) = filters.consultation_type.as_param() {
        pairs.push((PARAM_CONSULTATION_TYPE, Cow::Borrowed(value)));
    }
    if !filters.specialties.is_empty() {
        pairs.push((PARAM_SPECIALTIES, Cow::Owned(filters.specialties.join(","))));
    }
    if let Some(value) = filters.sort_by.as_param() {
        pairs.push((PARAM_SORT_BY, Cow::Borrowed(value)));
    }
    if !filters.search_query.is_empty() {
        pairs.push((PARAM_SEARCH, Cow::Borrowed(filters.search_query.as_str())));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Split a form-style query into decoded key/value pairs, in order.
/// `+` is read as a space; invalid UTF-8 after percent-decoding is replaced
/// rather than rejected.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned(),
    }
}
