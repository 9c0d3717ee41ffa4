use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankModel {
    pub bank_name: String,
    pub account_number: String,
    pub branch: String,
    pub debit_card: CardModel,
    /// The record holds exactly one credit card
    pub credit_card: CardModel,
}

impl BankModel {
    /// Widens the single stored credit card into the sequence views expose
    pub fn credit_cards(&self) -> &[CardModel] {
        std::slice::from_ref(&self.credit_card)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardModel {
    pub number: String,
    pub payment_network: String,
}
