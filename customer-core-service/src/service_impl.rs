use async_trait::async_trait;
use customer_core_api::{
    ApiResult, BankPatch, BankView, CustomerService, MergedView, PersonalView, QualificationView,
};
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::load::Load;
use std::sync::Arc;
use tracing::error;

use crate::identity_guard::check_identity;
use crate::merge::merge;
use crate::projection::{project_bank, project_personal, project_qualifications};

/// [`CustomerService`] over an injected record repository.
///
/// Holds no record state of its own; every call loads the record again.
pub struct CustomerServiceImpl<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: Load<CustomerModel> + ?Sized> CustomerServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn load_record(&self, operation: &str) -> ApiResult<CustomerModel> {
        let customer = self.repository.load().await.map_err(|e| {
            error!(operation, error = %e, "Failed to load customer record");
            e
        })?;
        Ok(customer)
    }

    /// Loads the record and runs the identity guard for `person_id`
    async fn load_checked(&self, person_id: &str, operation: &str) -> ApiResult<CustomerModel> {
        let customer = self.load_record(operation).await?;
        check_identity(person_id, &customer)?;
        Ok(customer)
    }
}

#[async_trait]
impl<R: Load<CustomerModel> + ?Sized> CustomerService for CustomerServiceImpl<R> {
    async fn get_personal_details(&self, person_id: &str) -> ApiResult<PersonalView> {
        let customer = self.load_checked(person_id, "get_personal_details").await?;
        Ok(project_personal(&customer))
    }

    async fn get_bank_details(&self, person_id: &str) -> ApiResult<BankView> {
        let customer = self.load_checked(person_id, "get_bank_details").await?;
        Ok(project_bank(&customer))
    }

    async fn get_qualifications(&self, person_id: &str) -> ApiResult<QualificationView> {
        let customer = self.load_checked(person_id, "get_qualifications").await?;
        Ok(project_qualifications(&customer))
    }

    async fn patch_bank_details(&self, patch: BankPatch) -> ApiResult<MergedView> {
        let customer = self.load_record("patch_bank_details").await?;
        merge(&customer, &patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use customer_core_api::{ApiError, CardType, CustomerView, NewBankDetails, PatchCard, ViewKind};
    use customer_core_db::models::customer::test_utils::create_test_customer;
    use customer_core_db::StoreError;
    use customer_core_file::{CustomerRepositoryImpl, SHIPPED_RECORD_PATH};
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_test::{assert_err, assert_ok};

    /// In-memory stand-in for the record source that counts reads
    struct FixtureRepository {
        customer: CustomerModel,
        loads: AtomicUsize,
    }

    impl FixtureRepository {
        fn new(person_id: &str) -> Arc<Self> {
            Arc::new(Self {
                customer: create_test_customer(person_id),
                loads: AtomicUsize::new(0),
            })
        }

        fn load_count(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Load<CustomerModel> for FixtureRepository {
        async fn load(&self) -> Result<CustomerModel, StoreError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(self.customer.clone())
        }
    }

    struct MissingRepository;

    #[async_trait]
    impl Load<CustomerModel> for MissingRepository {
        async fn load(&self) -> Result<CustomerModel, StoreError> {
            Err(StoreError::NotFound {
                path: "customer.json".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
        }
    }

    fn create_test_patch(person_id: &str) -> BankPatch {
        BankPatch {
            person_id: person_id.to_string(),
            new_bank_details: NewBankDetails {
                name: "XYZ Bank".to_string(),
                account: "123456789".to_string(),
                branch: "Branch123".to_string(),
                debit_card: PatchCard::new("1234 5678 9101 1122", "VISA"),
            },
            credit_cards: vec![
                PatchCard::new("9876 5432 1010 1122", "MasterCard"),
                PatchCard::new("4567 8901 2345 6789", "AMEX"),
            ],
        }
    }

    #[tokio::test]
    async fn test_get_personal_details() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let service = CustomerServiceImpl::new(FixtureRepository::new("12345"));

        let view = service.get_personal_details("12345").await?;
        assert_eq!(view.name, "Peter Nilson");
        assert_eq!(view.contacts.len(), 2);
        assert_eq!(view.contacts[0].code, "+46");
        assert_eq!(view.contacts[0].number, "783946273");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_bank_details() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let service = CustomerServiceImpl::new(FixtureRepository::new("12345"));

        let view = service.get_bank_details("12345").await?;
        assert_eq!(view.bank.name, "xyz");
        assert_eq!(view.cards[0].card_type, CardType::Credit);
        assert_eq!(view.cards[0].card_number, "1234 8273 9384");

        Ok(())
    }

    #[rstest]
    #[case(ViewKind::PersonalDetails)]
    #[case(ViewKind::BankDetails)]
    #[case(ViewKind::Qualifications)]
    #[tokio::test]
    async fn test_get_details_dispatches_by_kind(#[case] kind: ViewKind) {
        let service = CustomerServiceImpl::new(FixtureRepository::new("12345"));

        let view = assert_ok!(service.get_details("12345", kind).await);
        assert_eq!(view.kind(), kind);
    }

    #[rstest]
    #[case(ViewKind::PersonalDetails)]
    #[case(ViewKind::BankDetails)]
    #[case(ViewKind::Qualifications)]
    #[tokio::test]
    async fn test_get_details_rejects_foreign_identity(#[case] kind: ViewKind) {
        let service = CustomerServiceImpl::new(FixtureRepository::new("12345"));

        let err = assert_err!(service.get_details("123456", kind).await);
        assert_eq!(err, ApiError::InvalidIdentity("123456".to_string()));
    }

    #[tokio::test]
    async fn test_every_call_loads_the_record() {
        let repository = FixtureRepository::new("12345");
        let service = CustomerServiceImpl::new(repository.clone());

        assert_ok!(service.get_personal_details("12345").await);
        assert_ok!(service.get_qualifications("12345").await);
        assert_ok!(service.patch_bank_details(create_test_patch("12345")).await);

        assert_eq!(repository.load_count(), 3);
    }

    #[tokio::test]
    async fn test_patch_bank_details() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let service = CustomerServiceImpl::new(FixtureRepository::new("12345"));

        let merged = service.patch_bank_details(create_test_patch("12345")).await?;
        assert_eq!(merged.first_name, "Peter");
        assert_eq!(merged.country_code, "SE");
        assert_eq!(merged.bank.bank_name, "XYZ Bank");
        assert_eq!(merged.bank.branch, "Branch123");
        assert_eq!(merged.bank.credit_cards[0].number, "9876 5432 1010 1122");
        assert_eq!(merged.education.school.name, "xyz school");
        assert_eq!(merged.education.college.degree, "MS");

        Ok(())
    }

    #[tokio::test]
    async fn test_patch_bank_details_rejects_foreign_identity() {
        let service = CustomerServiceImpl::new(FixtureRepository::new("12345"));

        let err = assert_err!(service.patch_bank_details(create_test_patch("99999")).await);
        assert_eq!(err, ApiError::InvalidIdentity("99999".to_string()));
    }

    #[tokio::test]
    async fn test_patch_does_not_change_later_reads() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let service = CustomerServiceImpl::new(FixtureRepository::new("12345"));

        service.patch_bank_details(create_test_patch("12345")).await?;
        let view = service.get_bank_details("12345").await?;
        assert_eq!(view.bank.branch_code, "6712");

        Ok(())
    }

    #[tokio::test]
    async fn test_store_failure_is_classified() {
        let service = CustomerServiceImpl::new(Arc::new(MissingRepository));

        let err = assert_err!(service.get_personal_details("12345").await);
        assert_eq!(err, ApiError::NotFoundSource("customer.json".to_string()));
        assert!(!err.is_client_error());

        let err = assert_err!(service.patch_bank_details(create_test_patch("12345")).await);
        assert!(matches!(err, ApiError::NotFoundSource(_)));
    }

    #[tokio::test]
    async fn test_dyn_repository() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repository: Arc<dyn Load<CustomerModel>> = FixtureRepository::new("12345");
        let service = CustomerServiceImpl::new(repository);

        let view = service.get_details("12345", ViewKind::Qualifications).await?;
        assert!(matches!(view, CustomerView::Qualifications(_)));

        Ok(())
    }

    #[tokio::test]
    async fn test_over_shipped_record() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repository = Arc::new(CustomerRepositoryImpl::new(SHIPPED_RECORD_PATH));
        let service = CustomerServiceImpl::new(repository);

        let view = service.get_personal_details("12345").await?;
        assert_eq!(view.name, "Peter Nilson");
        assert_eq!(view.address.city, "Malmö");

        let merged = service.patch_bank_details(create_test_patch("12345")).await?;
        assert_eq!(merged.bank.branch, "Branch123");

        Ok(())
    }
}
