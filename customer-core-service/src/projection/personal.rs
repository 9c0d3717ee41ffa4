use customer_core_api::{AddressView, ContactView, PersonalView};
use customer_core_db::models::customer::CustomerModel;

const INTERNATIONAL_PREFIX: char = '+';
/// Codepoints taken as the country code, `+` included
const COUNTRY_CODE_LEN: usize = 3;

pub fn project_personal(customer: &CustomerModel) -> PersonalView {
    let address = &customer.address;
    PersonalView {
        name: customer.name.full_name(),
        person_id: customer.person_id.to_string(),
        dob: customer.dob.clone(),
        address: AddressView {
            street: address.street_name.clone(),
            house_number: address.house_number.clone(),
            city: address.city.clone(),
            country: address.country.clone(),
            country_code: address.country_code.clone(),
        },
        contacts: extract_contacts(&customer.phone_numbers),
    }
}

/// Keeps numbers in international format and splits off their country code.
///
/// Numbers without a leading `+` are dropped. The split is positional and does
/// not inspect digits, so a prefix longer than two digits lands partly in
/// `number`.
pub fn extract_contacts(phone_numbers: &[String]) -> Vec<ContactView> {
    phone_numbers
        .iter()
        .filter(|phone| phone.starts_with(INTERNATIONAL_PREFIX))
        .map(|phone| {
            let split = phone
                .char_indices()
                .nth(COUNTRY_CODE_LEN)
                .map_or(phone.len(), |(index, _)| index);
            let (code, number) = phone.split_at(split);
            ContactView::new(code, number)
        })
        .collect()
}
