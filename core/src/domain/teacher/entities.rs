use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, language::Language};

/// A teacher record. Every text field is stored once per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub username_en: String,
    pub username_gu: String,
    pub school_en: String,
    pub school_gu: String,
    pub location_en: String,
    pub location_gu: String,
    pub created_at: DateTime<Utc>,
}

/// A teacher as seen by a reader of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocalizedTeacher {
    pub id: Uuid,
    pub username: String,
    pub school: String,
    pub location: String,
}

pub struct TeacherConfig {
    pub username_en: String,
    pub username_gu: String,
    pub school_en: String,
    pub school_gu: String,
    pub location_en: String,
    pub location_gu: String,
}

impl Teacher {
    pub fn new(config: TeacherConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username_en: config.username_en,
            username_gu: config.username_gu,
            school_en: config.school_en,
            school_gu: config.school_gu,
            location_en: config.location_en,
            location_gu: config.location_gu,
            created_at: now,
        }
    }

    pub fn localized(&self, language: Language) -> LocalizedTeacher {
        let (username, school, location) = match language {
            Language::En => (&self.username_en, &self.school_en, &self.location_en),
            Language::Gu => (&self.username_gu, &self.school_gu, &self.location_gu),
        };

        LocalizedTeacher {
            id: self.id,
            username: username.clone(),
            school: school.clone(),
            location: location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Teacher {
        Teacher::new(TeacherConfig {
            username_en: "Asha Patel".to_string(),
            username_gu: "આશા પટેલ".to_string(),
            school_en: "Primary School No. 4".to_string(),
            school_gu: "પ્રાથમિક શાળા નં. ૪".to_string(),
            location_en: "Anand".to_string(),
            location_gu: "આણંદ".to_string(),
        })
    }

    #[test]
    fn test_localized_english() {
        let teacher = sample();
        let localized = teacher.localized(Language::En);

        assert_eq!(localized.id, teacher.id);
        assert_eq!(localized.username, "Asha Patel");
        assert_eq!(localized.school, "Primary School No. 4");
        assert_eq!(localized.location, "Anand");
    }

    #[test]
    fn test_localized_gujarati() {
        let localized = sample().localized(Language::Gu);

        assert_eq!(localized.username, "આશા પટેલ");
        assert_eq!(localized.school, "પ્રાથમિક શાળા નં. ૪");
        assert_eq!(localized.location, "આણંદ");
    }

    #[test]
    fn test_new_teachers_get_distinct_v7_ids() {
        let first = sample();
        let second = sample();

        assert_ne!(first.id, second.id);
        assert_eq!(first.id.get_version_num(), 7);
    }
}
