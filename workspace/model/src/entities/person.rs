use super::user;
use sea_orm::entity::prelude::*;

/// A character in the catalog, pre-seeded like `planet`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Height in centimeters.
    pub height: Option<i32>,
    /// Mass in kilograms.
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_person::Entity")]
    FavoritePerson,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_person::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::favorite_person::Relation::Person.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
