use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub unique_id: String,
    pub name: String,
    pub roll_no: String,
    pub branch: String,
    pub semester: String,
    pub phone_no: String,
    pub fee_paid: String,
    pub photo_ref: Option<String>, // path or URL, never the image itself
}

/// Partial update for an existing student. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub phone_no: Option<String>,
    pub fee_paid: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.roll_no.is_none()
            && self.branch.is_none()
            && self.semester.is_none()
            && self.phone_no.is_none()
            && self.fee_paid.is_none()
    }

    pub fn apply_to(&self, profile: &mut StudentProfile) {
        if let Some(v) = &self.name {
            profile.name = v.clone();
        }
        if let Some(v) = &self.roll_no {
            profile.roll_no = v.clone();
        }
        if let Some(v) = &self.branch {
            profile.branch = v.clone();
        }
        if let Some(v) = &self.semester {
            profile.semester = v.clone();
        }
        if let Some(v) = &self.phone_no {
            profile.phone_no = v.clone();
        }
        if let Some(v) = &self.fee_paid {
            profile.fee_paid = v.clone();
        }
    }
}
