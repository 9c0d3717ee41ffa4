use serde::Serialize;
use std::str::FromStr;

use crate::error::ApiError;

use super::bank_view::BankView;
use super::personal_view::PersonalView;
use super::qualification_view::QualificationView;

/// The read views a caller can request for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    PersonalDetails,
    BankDetails,
    Qualifications,
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::PersonalDetails => write!(f, "personalDetails"),
            ViewKind::BankDetails => write!(f, "bankDetails"),
            ViewKind::Qualifications => write!(f, "qualifications"),
        }
    }
}

impl FromStr for ViewKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personalDetails" => Ok(ViewKind::PersonalDetails),
            "bankDetails" => Ok(ViewKind::BankDetails),
            "qualifications" => Ok(ViewKind::Qualifications),
            _ => Err(ApiError::InvalidViewKind(s.to_string())),
        }
    }
}

/// Result of a read operation, serialized as the bare view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CustomerView {
    Personal(PersonalView),
    Bank(BankView),
    Qualifications(QualificationView),
}

impl CustomerView {
    pub fn kind(&self) -> ViewKind {
        match self {
            CustomerView::Personal(_) => ViewKind::PersonalDetails,
            CustomerView::Bank(_) => ViewKind::BankDetails,
            CustomerView::Qualifications(_) => ViewKind::Qualifications,
        }
    }
}
