use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

use super::bank::BankModel;
use super::education::EducationModel;

/// Upper bound for a stored identity, in bytes
pub const PERSON_ID_CAPACITY: usize = 256;

/// Model of the customer record document.
///
/// Name and address components sit at the top level of the document and are
/// folded into their own structs here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerModel {
    #[serde(flatten)]
    pub name: PersonNameModel,

    /// Key for every identity check
    pub person_id: HeaplessString<PERSON_ID_CAPACITY>,

    /// Kept as written in the source, format is not validated
    pub dob: String,

    #[serde(flatten)]
    pub address: AddressModel,

    /// Raw phone strings, with or without a leading international prefix
    #[serde(rename = "phone")]
    pub phone_numbers: Vec<String>,

    pub bank: BankModel,

    pub education: EducationModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNameModel {
    pub first_name: String,
    pub last_name: String,
}

impl PersonNameModel {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressModel {
    pub street_name: String,
    pub house_number: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
}

impl Identifiable for CustomerModel {
    fn get_identity(&self) -> &str {
        self.person_id.as_str()
    }
}
