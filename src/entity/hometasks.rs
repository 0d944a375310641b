//! 课后任务实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hometasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lecture_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub max_mark: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lectures::Entity",
        from = "Column::LectureId",
        to = "super::lectures::Column::Id"
    )]
    Lecture,
    #[sea_orm(has_many = "super::homeworks::Entity")]
    Homeworks,
}

impl Related<super::lectures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecture.def()
    }
}

impl Related<super::homeworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_hometask(self) -> crate::models::hometasks::entities::Hometask {
        use crate::models::hometasks::entities::Hometask;
        use chrono::{DateTime, Utc};

        Hometask {
            id: self.id,
            lecture_id: self.lecture_id,
            text: self.text,
            max_mark: self.max_mark,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
