use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Student,
    Instructor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub image: String,
    pub points: String,
    pub coupon: u32,
}

impl UserProfile {
    /// Hardcoded demo account for a role. Login never fails; any credential
    /// input resolves to one of these two profiles.
    pub fn demo(role: UserRole) -> Self {
        match role {
            UserRole::Student => Self {
                id: "user_1".into(),
                name: "홍길동".into(),
                email: "hong@profit.com".into(),
                role,
                image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".into(),
                points: "2,500 P".into(),
                coupon: 2,
            },
            UserRole::Instructor => Self {
                id: "inst_1".into(),
                name: "김프로".into(),
                email: "pro@profit.com".into(),
                role,
                image: "https://api.dicebear.com/7.x/avataaars/svg?seed=KimPro".into(),
                points: "500,000 P".into(),
                coupon: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profiles_match_marketing_copy() {
        let student = UserProfile::demo(UserRole::Student);
        assert_eq!(student.points, "2,500 P");
        assert_eq!(student.coupon, 2);

        let instructor = UserProfile::demo(UserRole::Instructor);
        assert_eq!(instructor.points, "500,000 P");
        assert_eq!(instructor.coupon, 0);
    }
}
