use serde::{Deserialize, Serialize};

use super::qualification_view::QualificationsView;

/// Full customer record with the bank subtree taken from a patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedView {
    pub first_name: String,
    pub last_name: String,
    pub person_id: String,
    pub dob: String,
    pub street_name: String,
    pub house_number: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub phone: Vec<String>,
    pub bank: MergedBankView,
    pub education: QualificationsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedBankView {
    pub bank_name: String,
    pub account_number: String,
    pub branch: String,
    pub debit_card: PaymentCardView,
    #[serde(rename = "creditCard")]
    pub credit_cards: Vec<PaymentCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCardView {
    pub number: String,
    pub payment_network: String,
}
