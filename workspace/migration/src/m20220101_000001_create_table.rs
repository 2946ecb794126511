use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::Password))
                    .col(boolean(Users::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        // Create planets table
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string(Planets::Name))
                    .col(string_null(Planets::Climate))
                    .col(string_null(Planets::Terrain))
                    .col(big_integer_null(Planets::Population))
                    .col(integer_null(Planets::Diameter))
                    .to_owned(),
            )
            .await?;

        // Create people table
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string(People::Name))
                    .col(integer_null(People::Height))
                    .col(integer_null(People::Mass))
                    .col(string_null(People::HairColor))
                    .col(string_null(People::EyeColor))
                    .col(string_null(People::BirthYear))
                    .col(string_null(People::Gender))
                    .to_owned(),
            )
            .await?;

        // Create favorite_planets table (join table)
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planets_user")
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planets_planet")
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One bookmark per (user, planet) pair; duplicate inserts must fail
        // in the database rather than relying on a read-then-insert check.
        manager
            .create_index(
                Index::create()
                    .name("uq_favorite_planets_user_planet")
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::UserId)
                    .col(FavoritePlanets::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create favorite_people table (join table)
        manager
            .create_table(
                Table::create()
                    .table(FavoritePeople::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePeople::Id))
                    .col(integer(FavoritePeople::UserId))
                    .col(integer(FavoritePeople::PersonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people_user")
                            .from(FavoritePeople::Table, FavoritePeople::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people_person")
                            .from(FavoritePeople::Table, FavoritePeople::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_favorite_people_user_person")
                    .table(FavoritePeople::Table)
                    .col(FavoritePeople::UserId)
                    .col(FavoritePeople::PersonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePeople::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    IsActive,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
    Population,
    Diameter,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    EyeColor,
    BirthYear,
    Gender,
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}

#[derive(DeriveIden)]
enum FavoritePeople {
    Table,
    Id,
    UserId,
    PersonId,
}
