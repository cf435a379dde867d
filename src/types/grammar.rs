//! Per-word grammatical annotation.
use serde::{Deserialize, Serialize};

/// Sparse grammatical annotation of a word.
///
/// The vocabulary is closed: unknown keys are rejected at parse time so that a
/// misspelled key in a hand-authored document surfaces instead of vanishing.
/// Every field is optional and absent fields are not serialized.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct GrammarAnnotation {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practical: Option<String>,
}

impl GrammarAnnotation {
    /// Annotation carrying only a word type and a practical note,
    /// which is how most particles are authored.
    pub fn typed(kind: &str, practical: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            practical: Some(practical.to_string()),
            ..Default::default()
        }
    }

    /// Get the practical note, treating an empty one as missing.
    pub fn practical(&self) -> Option<&str> {
        self.practical.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::GrammarAnnotation;

    #[test]
    fn sparse_keys() {
        let g: GrammarAnnotation = serde_json::from_str(
            r#"{"type": "Harf - Conjunction", "practical": "Continues the description."}"#,
        )
        .unwrap();
        assert_eq!(g.kind.as_deref(), Some("Harf - Conjunction"));
        assert!(g.root.is_none());

        let ser = serde_json::to_string(&g).unwrap();
        assert_eq!(
            ser,
            r#"{"type":"Harf - Conjunction","practical":"Continues the description."}"#
        );
    }

    #[test]
    fn misspelled_key_rejected() {
        let g = serde_json::from_str::<GrammarAnnotation>(r#"{"type": "Ism", "raeson": "x"}"#);
        assert!(g.is_err());
    }

    #[test]
    fn empty_practical_is_missing() {
        let g = GrammarAnnotation {
            practical: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(g.practical(), None);
        assert_eq!(GrammarAnnotation::typed("Ism", "noun").practical(), Some("noun"));
    }
}
