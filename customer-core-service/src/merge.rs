use customer_core_api::{ApiResult, BankPatch, MergedBankView, MergedView, PatchCard, PaymentCardView};
use customer_core_db::models::customer::CustomerModel;

use crate::identity_guard::check_identity;
use crate::projection::project_education;

/// Produces the full customer view with the bank subtree replaced by `patch`.
///
/// The identity guard runs before anything is copied. The replacement is
/// whole: no field of the stored bank section survives into the result.
pub fn merge(customer: &CustomerModel, patch: &BankPatch) -> ApiResult<MergedView> {
    check_identity(&patch.person_id, customer)?;

    let address = &customer.address;
    Ok(MergedView {
        first_name: customer.name.first_name.clone(),
        last_name: customer.name.last_name.clone(),
        person_id: customer.person_id.to_string(),
        dob: customer.dob.clone(),
        street_name: address.street_name.clone(),
        house_number: address.house_number.clone(),
        city: address.city.clone(),
        country: address.country.clone(),
        country_code: address.country_code.clone(),
        phone: customer.phone_numbers.clone(),
        bank: merged_bank(patch),
        education: project_education(&customer.education),
    })
}

fn merged_bank(patch: &BankPatch) -> MergedBankView {
    let details = &patch.new_bank_details;
    MergedBankView {
        bank_name: details.name.clone(),
        account_number: details.account.clone(),
        branch: details.branch.clone(),
        debit_card: payment_card(&details.debit_card),
        credit_cards: patch.credit_cards.iter().map(payment_card).collect(),
    }
}

fn payment_card(card: &PatchCard) -> PaymentCardView {
    PaymentCardView {
        number: card.number.clone(),
        payment_network: card.payment_network.clone(),
    }
}
