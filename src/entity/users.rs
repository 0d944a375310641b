//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub status: String,
    pub profile_name: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_members::Entity")]
    CourseMembers,
    #[sea_orm(has_many = "super::homeworks::Entity")]
    Homeworks,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::course_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseMembers.def()
    }
}

impl Related<super::homeworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworks.def()
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
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserStatus};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            profile_name: self.profile_name,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
