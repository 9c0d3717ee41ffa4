use customer_core_api::{CollegeView, QualificationView, QualificationsView, SchoolView};
use customer_core_db::models::customer::{CustomerModel, EducationModel};

pub fn project_qualifications(customer: &CustomerModel) -> QualificationView {
    QualificationView {
        name: customer.name.full_name(),
        qualifications: project_education(&customer.education),
    }
}

/// Field-for-field copy of the education subtree
pub fn project_education(education: &EducationModel) -> QualificationsView {
    QualificationsView {
        school: SchoolView {
            name: education.school.name.clone(),
            address: education.school.address.clone(),
        },
        college: CollegeView {
            name: education.college.name.clone(),
            address: education.college.address.clone(),
            degree: education.college.degree.clone(),
        },
    }
}
