//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the favorites catalog here: the catalog
//! tables (planets, people), the users table, and the two join tables that
//! record which catalog rows a user has bookmarked.

pub mod favorite_person;
pub mod favorite_planet;
pub mod person;
pub mod planet;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::favorite_person::Entity as FavoritePerson;
    pub use super::favorite_planet::Entity as FavoritePlanet;
    pub use super::person::Entity as Person;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
}
