use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalView {
    /// First and last name joined by a single space
    pub name: String,
    pub person_id: String,
    pub dob: String,
    pub address: AddressView,
    #[serde(rename = "contact")]
    pub contacts: Vec<ContactView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub street: String,
    pub house_number: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
}

/// A phone number in international format split into prefix and local part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    pub code: String,
    pub number: String,
}

impl ContactView {
    pub fn new(code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            number: number.into(),
        }
    }
}
