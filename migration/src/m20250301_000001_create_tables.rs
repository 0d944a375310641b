use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程成员表（教师/学生名册）
        manager
            .create_table(
                Table::create()
                    .table(CourseMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseMembers::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseMembers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseMembers::Role).string().not_null())
                    .col(
                        ColumnDef::new(CourseMembers::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .name("idx_course_members_course_user")
                            .col(CourseMembers::CourseId)
                            .col(CourseMembers::UserId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseMembers::Table, CourseMembers::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseMembers::Table, CourseMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建讲义表
        manager
            .create_table(
                Table::create()
                    .table(Lectures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lectures::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Lectures::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Lectures::Name).string().not_null())
                    .col(ColumnDef::new(Lectures::FileToken).string().not_null())
                    .col(ColumnDef::new(Lectures::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Lectures::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lectures::Table, Lectures::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课后任务表
        manager
            .create_table(
                Table::create()
                    .table(Hometasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hometasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Hometasks::LectureId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Hometasks::Text).text().not_null())
                    .col(
                        ColumnDef::new(Hometasks::MaxMark)
                            .big_integer()
                            .not_null()
                            .default(10),
                    )
                    .col(
                        ColumnDef::new(Hometasks::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hometasks::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Hometasks::Table, Hometasks::LectureId)
                            .to(Lectures::Table, Lectures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业提交表（不做唯一约束，保留完整提交历史）
        manager
            .create_table(
                Table::create()
                    .table(Homeworks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Homeworks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Homeworks::HometaskId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Homeworks::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Homeworks::FileToken).string().not_null())
                    .col(ColumnDef::new(Homeworks::Mark).big_integer().null())
                    .col(
                        ColumnDef::new(Homeworks::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Homeworks::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Homeworks::Table, Homeworks::HometaskId)
                            .to(Hometasks::Table, Hometasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Homeworks::Table, Homeworks::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评论表
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Comments::HomeworkId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Comments::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Comments::Text).text().not_null())
                    .col(ColumnDef::new(Comments::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Comments::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Comments::Table, Comments::HomeworkId)
                            .to(Homeworks::Table, Homeworks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Comments::Table, Comments::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Homeworks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hometasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lectures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Status,
    ProfileName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Name,
    Slug,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseMembers {
    Table,
    Id,
    CourseId,
    UserId,
    Role,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Lectures {
    Table,
    Id,
    CourseId,
    Name,
    FileToken,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Hometasks {
    Table,
    Id,
    LectureId,
    Text,
    MaxMark,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Homeworks {
    Table,
    Id,
    HometaskId,
    StudentId,
    FileToken,
    Mark,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    HomeworkId,
    OwnerId,
    Text,
    CreatedAt,
    UpdatedAt,
}
