use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Ceo {
    pub name: String,
}

/// A single corporation search hit
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CorporationSummary {
    pub id: i32,
    pub name: String,
    pub ticker: String,
    pub ceo: Ceo,
}
