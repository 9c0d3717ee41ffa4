use heapless::String as HeaplessString;

use super::bank::{BankModel, CardModel};
use super::customer::{AddressModel, CustomerModel, PersonNameModel};
use super::education::{CollegeModel, EducationModel, SchoolModel};

pub fn create_test_card(number: &str, payment_network: &str) -> CardModel {
    CardModel {
        number: number.to_string(),
        payment_network: payment_network.to_string(),
    }
}

pub fn create_test_customer(person_id: &str) -> CustomerModel {
    CustomerModel {
        name: PersonNameModel {
            first_name: "Peter".to_string(),
            last_name: "Nilson".to_string(),
        },
        person_id: HeaplessString::try_from(person_id).unwrap(),
        dob: "01/01/1990".to_string(),
        address: AddressModel {
            street_name: "Sodertorp".to_string(),
            house_number: "123".to_string(),
            city: "Malmö".to_string(),
            country: "Sweden".to_string(),
            country_code: "SE".to_string(),
        },
        phone_numbers: vec![
            "+46783946273".to_string(),
            "+49763445673".to_string(),
            "01248745759".to_string(),
        ],
        bank: BankModel {
            bank_name: "xyz".to_string(),
            account_number: "1234567890".to_string(),
            branch: "6712".to_string(),
            debit_card: create_test_card("7653 8273 9384", "VISA"),
            credit_card: create_test_card("1234 8273 9384", "Mastero"),
        },
        education: EducationModel {
            school: SchoolModel {
                name: "xyz school".to_string(),
                address: "Dalaplan Malmo 21744 Sweden".to_string(),
            },
            college: CollegeModel {
                name: "Abc collage".to_string(),
                address: "Abc Malmö 72863 Sweden".to_string(),
                degree: "MS".to_string(),
            },
        },
    }
}

pub fn create_test_customer_with_phones(person_id: &str, phones: &[&str]) -> CustomerModel {
    let mut customer = create_test_customer(person_id);
    customer.phone_numbers = phones.iter().map(|phone| phone.to_string()).collect();
    customer
}
