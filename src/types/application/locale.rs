use serde::{Deserialize, Serialize};

/// Locale of a user or guild, as sent in interaction contexts.
///
/// The set is closed: a locale code Discord adds later fails to decode
/// rather than being mapped to a neighbouring language.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Locale {
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en-GB")]
    EnglishUk,
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "es-ES")]
    Spanish,
    #[serde(rename = "es-419")]
    SpanishLatam,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hr")]
    Croatian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "lt")]
    Lithuanian,
    #[serde(rename = "hu")]
    Hungarian,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt-BR")]
    PortugueseBrazilian,
    #[serde(rename = "ro")]
    Romanian,
    #[serde(rename = "fi")]
    Finnish,
    #[serde(rename = "sv-SE")]
    Swedish,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "cs")]
    Czech,
    #[serde(rename = "el")]
    Greek,
    #[serde(rename = "bg")]
    Bulgarian,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "zh-CN")]
    ChineseChina,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh-TW")]
    ChineseTaiwan,
    #[serde(rename = "ko")]
    Korean,
}
