use crate::Figure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockInfo {
    pub id: i64,
    pub symbol: String,
    pub company_name: String,
    pub market_cap: Figure,
    pub price: Figure,
    pub created_at: String,
    pub updated_at: String,
}
