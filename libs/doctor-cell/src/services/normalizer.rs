// libs/doctor-cell/src/services/normalizer.rs

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Availability, Doctor};

// ASCII digits only: `\d` would also match non-ASCII numerals that `u32` can't parse.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Convert one upstream record into a canonical [`Doctor`].
///
/// Never fails. Missing or mistyped fields fall back to empty strings, empty
/// lists, `false` and `0`; a missing id is replaced with a fresh UUID.
pub fn normalize(raw: &Value) -> Doctor {
    Doctor {
        id: read_id(raw),
        name: raw.get("name").and_then(Value::as_str).unwrap_or_default().to_string(),
        specialties: read_specialties(raw),
        experience_years: raw.get("experience").map(extract_first_integer).unwrap_or(0),
        fee_amount: raw.get("fees").map(extract_first_integer).unwrap_or(0),
        city: raw
            .pointer("/clinic/address/city")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        availability: Availability {
            clinic: coerce_flag(raw.get("in_clinic")),
            video: coerce_flag(raw.get("video_consult")),
        },
        profile_pic_url: raw.get("photo").and_then(Value::as_str).unwrap_or_default().to_string(),
    }
}

/// Normalize a whole response, keeping order. No record is dropped.
pub fn normalize_all(records: &[Value]) -> Vec<Doctor> {
    records.iter().map(normalize).collect()
}

/// First run of decimal digits in the textual form of `raw`, or 0.
///
/// `"15 years"` gives 15, `"₹500 approx"` gives 500, `-3` gives 3. Runs too
/// long for a `u32` saturate.
pub fn extract_first_integer(raw: &Value) -> u32 {
    coerce_text(raw)
        .as_deref()
        .and_then(|text| DIGIT_RUN.find(text))
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn read_id(raw: &Value) -> String {
    match raw.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => {
            let id = Uuid::new_v4().to_string();
            debug!("Record without id, assigned {}", id);
            id
        }
    }
}

fn read_specialties(raw: &Value) -> Vec<String> {
    let list = raw
        .get("specialities")
        .or_else(|| raw.get("specialties"))
        .and_then(Value::as_array);

    let Some(list) = list else {
        return Vec::new();
    };

    list.iter()
        .filter_map(|entry| match entry {
            Value::Object(_) => entry.get("name").and_then(Value::as_str),
            Value::String(name) => Some(name.as_str()),
            _ => None,
        })
        .map(str::to_string)
        .collect()
}

fn coerce_text(raw: &Value) -> Option<String> {
    match raw {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| coerce_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

fn coerce_flag(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
        }
        _ => false,
    }
}
