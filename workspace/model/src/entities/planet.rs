use super::user;
use sea_orm::entity::prelude::*;

/// A planet in the catalog. Rows are pre-seeded; the HTTP layer only reads
/// them and links them to users via `favorite_planet`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    /// Diameter in kilometers.
    pub diameter: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_planet::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::favorite_planet::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
