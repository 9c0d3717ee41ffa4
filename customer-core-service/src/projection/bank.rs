use customer_core_api::{BankSummaryView, BankView, CardType, CardView};
use customer_core_db::models::customer::{CardModel, CustomerModel};

/// Bank view with the credit card always listed before the debit card
pub fn project_bank(customer: &CustomerModel) -> BankView {
    let bank = &customer.bank;

    let cards = bank
        .credit_cards()
        .iter()
        .map(|card| card_view(CardType::Credit, card))
        .chain(std::iter::once(card_view(CardType::Debit, &bank.debit_card)))
        .collect();

    BankView {
        person_id: customer.person_id.to_string(),
        name: customer.name.full_name(),
        bank: BankSummaryView {
            name: bank.bank_name.clone(),
            account_number: bank.account_number.clone(),
            branch_code: bank.branch.clone(),
        },
        cards,
    }
}

fn card_view(card_type: CardType, card: &CardModel) -> CardView {
    CardView {
        card_type,
        card_number: card.number.clone(),
        payment_network: card.payment_network.clone(),
    }
}
