//! 作业提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "homeworks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub hometask_id: i64,
    pub student_id: i64,
    pub file_token: String,
    pub mark: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hometasks::Entity",
        from = "Column::HometaskId",
        to = "super::hometasks::Column::Id"
    )]
    Hometask,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::hometasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hometask.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_homework(self) -> crate::models::homeworks::entities::Homework {
        use crate::models::homeworks::entities::Homework;
        use chrono::{DateTime, Utc};

        Homework {
            id: self.id,
            hometask_id: self.hometask_id,
            student_id: self.student_id,
            file_token: self.file_token,
            mark: self.mark,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
