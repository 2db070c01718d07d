use serde::{Deserialize, Serialize};
use valuation_rules::Bucket;

/// Background colour per bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub favorable: String,
    pub caution: String,
    pub unfavorable: String,
    pub neutral: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            favorable: "#a6e194".to_string(),
            caution: "#f3c08b".to_string(),
            unfavorable: "#f08e8d".to_string(),
            neutral: "#cccccc".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::Favorable => &self.favorable,
            Bucket::Caution => &self.caution,
            Bucket::Unfavorable => &self.unfavorable,
            Bucket::Neutral => &self.neutral,
        }
    }
}
