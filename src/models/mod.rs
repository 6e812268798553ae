use serde::{Deserialize, Serialize};

/// One block as returned by the provider, with its transactions split out
/// for separate persistence. `payload` keeps the provider-native shape,
/// embedded transactions included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDocument {
    pub number: u64,
    pub payload: serde_json::Value,
    pub transactions: Vec<serde_json::Value>,
}

/// One transaction ready for persistence, stamped with the height of the
/// block that carried it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDocument {
    pub block_number: u64,
    pub payload: serde_json::Value,
}
