use serde::{Deserialize, Serialize};

/// Primary sort key for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Highest stock first.
    #[default]
    Stock,
    /// Cheapest first; parts without a price last.
    Price,
}

/// Full ordering of a result page.
///
/// `prefer_no_fee` puts basic parts before preferred before extended and is
/// applied ahead of the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub prefer_no_fee: bool,
}

const FEE_TIER_ORDER: &str = "CASE library_type WHEN 'b' THEN 1 WHEN 'p' THEN 2 ELSE 3 END";

impl SortOrder {
    pub fn new(key: SortKey, prefer_no_fee: bool) -> Self {
        Self { key, prefer_no_fee }
    }

    pub fn to_sql(&self) -> String {
        let primary = match self.key {
            SortKey::Stock => "stock DESC",
            SortKey::Price => "price ASC NULLS LAST",
        };
        if self.prefer_no_fee {
            format!("ORDER BY {FEE_TIER_ORDER}, {primary}")
        } else {
            format!("ORDER BY {primary}")
        }
    }
}
