//! Static showcase data behind the home and instructor-profile screens.
//!
//! The demo ships a single bookable instructor; the featured list on the
//! home screen links back to that same profile.

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonSlot {
    pub date: String,
    pub time: String,
    pub booked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDetail {
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub certifications: Vec<String>,
    pub bio: String,
    pub location: String,
    pub hourly_rate: String,
    pub available_slots: Vec<LessonSlot>,
}

impl InstructorDetail {
    /// Resolves a selected slot index against the open schedule. The UI
    /// disables booked slots and the submit button, but the operation
    /// guards both anyway.
    pub fn select_slot(&self, index: usize) -> Result<&LessonSlot, FlowError> {
        let slot = self
            .available_slots
            .get(index)
            .ok_or(FlowError::MissingSelection)?;
        if slot.booked {
            return Err(FlowError::SlotUnavailable);
        }
        Ok(slot)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedInstructor {
    pub name: String,
    pub tagline: String,
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub tags: Vec<String>,
}

pub fn instructor_detail() -> InstructorDetail {
    InstructorDetail {
        name: "김프로 강사".into(),
        specialty: "스키 (레벨 3), 스노우보드 (초급)".into(),
        experience: "5년".into(),
        rating: 4.9,
        reviews: 128,
        image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".into(),
        certifications: vec![
            "KSIA 스키 레벨3".into(),
            "생활체육지도자 (스키)".into(),
            "유아체육지도자".into(),
        ],
        bio: "안녕하세요! 5년 경력의 스키/스노우보드 강사 김프로입니다. 쉽고 재미있게 배우고 싶은 분, 실력을 한 단계 업그레이드하고 싶은 분 모두 환영합니다! 유아 강습 경험이 많아 아이들도 즐겁게 배울 수 있도록 지도합니다.".into(),
        location: "비발디파크 스키장".into(),
        hourly_rate: "70,000원/시간".into(),
        available_slots: vec![
            LessonSlot {
                date: "12월 20일 (금)".into(),
                time: "10:00 - 12:00".into(),
                booked: false,
            },
            LessonSlot {
                date: "12월 20일 (금)".into(),
                time: "14:00 - 16:00".into(),
                booked: true,
            },
            LessonSlot {
                date: "12월 21일 (토)".into(),
                time: "09:00 - 11:00".into(),
                booked: false,
            },
        ],
    }
}

pub fn featured_instructors() -> Vec<FeaturedInstructor> {
    vec![
        FeaturedInstructor {
            name: "김프로 강사".into(),
            tagline: "스키 레벨 3 · 5년 경력".into(),
            rating: 4.9,
            reviews: 128,
            image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".into(),
            tags: vec!["유아 강습".into(), "영어 가능".into()],
        },
        FeaturedInstructor {
            name: "이수정 코치".into(),
            tagline: "스노우보드 국가대표 출신".into(),
            rating: 5.0,
            reviews: 85,
            image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Annie".into(),
            tags: vec!["자세 교정".into(), "영상 분석".into()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_slots_resolve_and_guards_hold() {
        let detail = instructor_detail();

        assert!(detail.select_slot(0).is_ok());
        assert_eq!(detail.select_slot(1).err(), Some(FlowError::SlotUnavailable));
        assert_eq!(
            detail.select_slot(9).err(),
            Some(FlowError::MissingSelection)
        );
    }
}
