use crate::{domain::teacher::entities::Teacher, entity::teachers};

impl From<&teachers::Model> for Teacher {
    fn from(model: &teachers::Model) -> Self {
        Self {
            id: model.id,
            username_en: model.username_en.clone(),
            username_gu: model.username_gu.clone(),
            school_en: model.school_en.clone(),
            school_gu: model.school_gu.clone(),
            location_en: model.location_en.clone(),
            location_gu: model.location_gu.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<teachers::Model> for Teacher {
    fn from(model: teachers::Model) -> Self {
        Self::from(&model)
    }
}
