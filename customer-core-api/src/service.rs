use async_trait::async_trait;

use crate::domain::{
    BankPatch, BankView, CustomerView, MergedView, PersonalView, QualificationView, ViewKind,
};
use crate::error::ApiResult;

/// Operations the boundary adapter invokes on the customer record.
///
/// Every operation reads the record fresh and checks the requested identity
/// against it before any projection or merge runs.
#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn get_personal_details(&self, person_id: &str) -> ApiResult<PersonalView>;

    async fn get_bank_details(&self, person_id: &str) -> ApiResult<BankView>;

    async fn get_qualifications(&self, person_id: &str) -> ApiResult<QualificationView>;

    /// Dispatches to the read view selected by `kind`
    async fn get_details(&self, person_id: &str, kind: ViewKind) -> ApiResult<CustomerView> {
        match kind {
            ViewKind::PersonalDetails => self
                .get_personal_details(person_id)
                .await
                .map(CustomerView::Personal),
            ViewKind::BankDetails => self.get_bank_details(person_id).await.map(CustomerView::Bank),
            ViewKind::Qualifications => self
                .get_qualifications(person_id)
                .await
                .map(CustomerView::Qualifications),
        }
    }

    /// Returns the record merged with `patch`; nothing is written back
    async fn patch_bank_details(&self, patch: BankPatch) -> ApiResult<MergedView>;
}
