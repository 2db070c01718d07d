use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A numeric column kept exactly as upstream sent it.
///
/// The API serializes decimals as strings, but numbers and nulls show up
/// too, so all three are accepted. The text is only parsed when a view asks
/// for [`Figure::value`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Figure(String);

impl Figure {
    pub fn new(text: impl Into<String>) -> Self {
        Figure(text.into())
    }

    /// Placeholder used for cells that have no value, rendered as `-`.
    pub fn missing() -> Self {
        Figure("-".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Finite number behind the text, if there is one.
    pub fn value(&self) -> Option<f64> {
        let text = self.0.trim();
        if text.is_empty() || text == "-" {
            return None;
        }
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn is_missing(&self) -> bool {
        self.value().is_none()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<f64> for Figure {
    fn from(value: f64) -> Self {
        Figure(value.to_string())
    }
}

impl From<&str> for Figure {
    fn from(value: &str) -> Self {
        Figure(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFigure {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for Figure {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawFigure>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawFigure::Text(text)) => Figure(text),
            Some(RawFigure::Number(number)) => Figure(number.to_string()),
            None => Figure::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_pass_parses_text() {
        let figure: Figure = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(figure.as_str(), "12.50");
        assert_eq!(figure.value(), Some(12.5));
    }

    #[test]
    fn figure_pass_accepts_json_number() {
        let figure: Figure = serde_json::from_str("3").unwrap();
        assert_eq!(figure.value(), Some(3.0));

        let figure: Figure = serde_json::from_str("-0.25").unwrap();
        assert_eq!(figure.value(), Some(-0.25));
    }

    #[test]
    fn figure_pass_null_is_missing() {
        let figure: Figure = serde_json::from_str("null").unwrap();
        assert!(figure.is_missing());
        assert_eq!(figure.as_str(), "");
    }

    #[test]
    fn figure_pass_dash_and_blank_are_missing() {
        assert_eq!(Figure::missing().value(), None);
        assert_eq!(Figure::new("  ").value(), None);
        assert_eq!(Figure::new("n/a").value(), None);
    }

    #[test]
    fn figure_fail_non_finite_text() {
        assert_eq!(Figure::new("NaN").value(), None);
        assert_eq!(Figure::new("inf").value(), None);
    }

    #[test]
    fn figure_pass_serializes_as_text() {
        let json = serde_json::to_string(&Figure::new("1.5")).unwrap();
        assert_eq!(json, "\"1.5\"");
    }
}
