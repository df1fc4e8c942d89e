use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "loading_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plate: String,
    pub status: String,
    pub route: Option<String>,
    pub destination: Option<String>,
    pub finalized: bool,
    pub updated_at: DateTime,
    /// Functional code of the employee behind the last mutation, informational only
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
