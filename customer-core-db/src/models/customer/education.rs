use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationModel {
    pub school: SchoolModel,
    /// Stored under the `collage` key in the record document
    #[serde(rename = "collage")]
    pub college: CollegeModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolModel {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeModel {
    pub name: String,
    pub address: String,
    pub degree: String,
}
