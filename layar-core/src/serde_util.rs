//! Tolerant deserializers for the loosely-typed source document.
//!
//! The data document is hand-maintained and numeric-looking fields show up as
//! either JSON numbers or strings depending on who last edited it. Display
//! fields are normalized to `Option<String>` here so the rest of the crate
//! never has to care.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Stringish {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
}

/// Accepts a string, number, bool, or null and yields the display string.
pub fn opt_stringish<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Stringish>::deserialize(de)?;
    Ok(value.map(|v| match v {
        Stringish::Text(s) => s,
        Stringish::Int(i) => i.to_string(),
        Stringish::Float(f) => f.to_string(),
        Stringish::Flag(b) => b.to_string(),
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scoreish {
    Num(f64),
    Text(String),
}

/// Accepts a number or a numeric string; anything unparsable becomes `None`.
pub fn opt_scoreish<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scoreish>::deserialize(de)?;
    Ok(value.and_then(|v| match v {
        Scoreish::Num(n) => Some(n),
        Scoreish::Text(s) => s.trim().parse().ok(),
    }))
}
