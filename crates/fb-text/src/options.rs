//! Caller-facing options for a text update.

use fb_core::FontRef;
use serde::{Deserialize, Deserializer};

/// How to redistribute fonts when the node currently uses several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartStrategy {
    /// The most frequent font wins outright.
    Prevail,
    /// Replay the old font runs by character position.
    Strict,
    /// Re-anchor old font runs to line and word delimiters.
    Experimental,
}

impl SmartStrategy {
    /// Parse a strategy name. Unknown names mean "no strategy".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "prevail" => Some(SmartStrategy::Prevail),
            "strict" => Some(SmartStrategy::Strict),
            "experimental" => Some(SmartStrategy::Experimental),
            _ => None,
        }
    }
}

fn lenient_strategy<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SmartStrategy>, D::Error> {
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.as_deref().and_then(SmartStrategy::from_name))
}

/// Options for `set_characters`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextOptions {
    /// Substituted when a required font cannot be loaded.
    pub fallback_font: FontRef,
    #[serde(deserialize_with = "lenient_strategy")]
    pub smart_strategy: Option<SmartStrategy>,
}

impl TextOptions {
    pub fn with_strategy(strategy: SmartStrategy) -> Self {
        Self {
            smart_strategy: Some(strategy),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_inter_regular_without_strategy() {
        let options: TextOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.fallback_font, FontRef::new("Inter", "Regular"));
        assert_eq!(options.smart_strategy, None);
    }

    #[test]
    fn parses_camel_case_fields() {
        let options: TextOptions = serde_json::from_str(
            r#"{"smartStrategy":"strict","fallbackFont":{"family":"Roboto","style":"Bold"}}"#,
        )
        .unwrap();
        assert_eq!(options.smart_strategy, Some(SmartStrategy::Strict));
        assert_eq!(options.fallback_font, FontRef::new("Roboto", "Bold"));
    }

    #[test]
    fn unknown_strategy_means_none() {
        let options: TextOptions = serde_json::from_str(r#"{"smartStrategy":"fancy"}"#).unwrap();
        assert_eq!(options.smart_strategy, None);
        let options: TextOptions = serde_json::from_str(r#"{"smartStrategy":null}"#).unwrap();
        assert_eq!(options.smart_strategy, None);
    }
}
