use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::{ApiError, ApiResult};

// ============================================================================
// WIRE REQUEST
// ============================================================================

/// Bank detail patch as received from a caller.
///
/// Every field is optional on the wire so that an absent field is reported
/// through the validation map instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchBankDetailsRequest {
    #[validate(
        required(message = "must be present"),
        length(min = 1, message = "must not be empty")
    )]
    pub person_id: Option<String>,

    #[validate(required(message = "must be present"), nested)]
    pub new_bank_details: Option<NewBankDetailsRequest>,

    #[validate(required(message = "must be present"), nested)]
    pub credit_cards: Option<Vec<CardRequest>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBankDetailsRequest {
    #[validate(
        required(message = "must be present"),
        length(min = 1, message = "must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "must be present"),
        length(min = 1, message = "must not be empty")
    )]
    pub account: Option<String>,

    #[validate(
        required(message = "must be present"),
        length(min = 1, message = "must not be empty")
    )]
    pub branch: Option<String>,

    #[validate(required(message = "must be present"), nested)]
    pub debit_card: Option<CardRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardRequest {
    #[validate(
        required(message = "must be present"),
        length(min = 1, message = "must not be empty")
    )]
    pub number: Option<String>,

    #[validate(
        required(message = "must be present"),
        length(min = 1, message = "must not be empty")
    )]
    pub payment_network: Option<String>,
}

// ============================================================================
// VALIDATED PATCH
// ============================================================================

/// Replacement data for the bank subtree of the customer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankPatch {
    pub person_id: String,
    pub new_bank_details: NewBankDetails,
    /// Order is preserved into the merged view
    pub credit_cards: Vec<PatchCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBankDetails {
    pub name: String,
    pub account: String,
    pub branch: String,
    pub debit_card: PatchCard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchCard {
    pub number: String,
    pub payment_network: String,
}

impl PatchCard {
    pub fn new(number: impl Into<String>, payment_network: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            payment_network: payment_network.into(),
        }
    }
}

impl PatchBankDetailsRequest {
    /// Validates the request and converts it into a [`BankPatch`].
    ///
    /// # Returns
    /// * `Ok(BankPatch)` - every required field is present and non-empty
    /// * `Err(ApiError::ValidationError)` - map of dotted camelCase field paths to messages
    pub fn into_patch(self) -> ApiResult<BankPatch> {
        self.validate().map_err(validation_error)?;

        let details = require(self.new_bank_details, "newBankDetails")?;
        let credit_cards = require(self.credit_cards, "creditCards")?
            .into_iter()
            .enumerate()
            .map(|(index, card)| card.into_patch_card(&format!("creditCards[{index}]")))
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(BankPatch {
            person_id: require(self.person_id, "personId")?,
            new_bank_details: NewBankDetails {
                name: require(details.name, "newBankDetails.name")?,
                account: require(details.account, "newBankDetails.account")?,
                branch: require(details.branch, "newBankDetails.branch")?,
                debit_card: require(details.debit_card, "newBankDetails.debitCard")?
                    .into_patch_card("newBankDetails.debitCard")?,
            },
            credit_cards,
        })
    }
}

impl CardRequest {
    fn into_patch_card(self, path: &str) -> ApiResult<PatchCard> {
        Ok(PatchCard {
            number: require(self.number, &format!("{path}.number"))?,
            payment_network: require(self.payment_network, &format!("{path}.paymentNetwork"))?,
        })
    }
}

fn require<T>(value: Option<T>, field: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::validation(field, "must be present"))
}

/// Flattens nested `validator` errors into a single field map.
pub fn validation_error(errors: ValidationErrors) -> ApiError {
    let mut fields = BTreeMap::new();
    collect_field_errors("", &errors, &mut fields);
    ApiError::ValidationError(fields)
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut BTreeMap<String, String>) {
    for (field, kind) in errors.errors() {
        let segment = to_camel_case(&field.to_string());
        let path = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                let message = failures
                    .iter()
                    .map(|failure| {
                        failure
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| failure.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                out.insert(path, message);
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn to_camel_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
