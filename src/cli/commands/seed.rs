use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, trace, warn};

use model::entities::{person, planet, user};

/// Seed file layout. Every section is optional.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    users: Vec<SeedUser>,
    #[serde(default)]
    planets: Vec<SeedPlanet>,
    #[serde(default)]
    people: Vec<SeedPerson>,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    email: String,
    password: String,
    #[serde(default = "default_is_active")]
    is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct SeedPlanet {
    name: String,
    climate: Option<String>,
    terrain: Option<String>,
    population: Option<i64>,
    diameter: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct SeedPerson {
    name: String,
    height: Option<i32>,
    mass: Option<i32>,
    hair_color: Option<String>,
    eye_color: Option<String>,
    birth_year: Option<String>,
    gender: Option<String>,
}

pub async fn seed(json_path: &str, database_url: &str) -> Result<()> {
    trace!("Entering seed function");
    info!("Seeding catalog data from {}", json_path);
    debug!("Database URL: {}", database_url);

    let db: DatabaseConnection = Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", database_url))?;

    let file = File::open(Path::new(json_path))
        .with_context(|| format!("Failed to open seed file '{}'", json_path))?;
    let seed_file: SeedFile = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse seed file '{}'", json_path))?;

    debug!(
        "Seed file contains {} users, {} planets, {} people",
        seed_file.users.len(),
        seed_file.planets.len(),
        seed_file.people.len()
    );

    let mut users_created = 0;
    for seed_user in seed_file.users {
        // Emails are unique; existing users are skipped, not overwritten.
        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(seed_user.email.clone()))
            .one(&db)
            .await?;
        if existing.is_some() {
            warn!("Skipping existing user: {}", seed_user.email);
            continue;
        }

        let new_user = user::ActiveModel {
            email: Set(seed_user.email.clone()),
            password: Set(seed_user.password),
            is_active: Set(seed_user.is_active),
            ..Default::default()
        };
        let user_model = new_user.insert(&db).await?;
        debug!("Created user {} ({})", user_model.id, user_model.email);
        users_created += 1;
    }

    let mut planets_created = 0;
    for seed_planet in seed_file.planets {
        let new_planet = planet::ActiveModel {
            name: Set(seed_planet.name.clone()),
            climate: Set(seed_planet.climate),
            terrain: Set(seed_planet.terrain),
            population: Set(seed_planet.population),
            diameter: Set(seed_planet.diameter),
            ..Default::default()
        };
        let planet_model = new_planet.insert(&db).await?;
        debug!("Created planet {} ({})", planet_model.id, planet_model.name);
        planets_created += 1;
    }

    let mut people_created = 0;
    for seed_person in seed_file.people {
        let new_person = person::ActiveModel {
            name: Set(seed_person.name.clone()),
            height: Set(seed_person.height),
            mass: Set(seed_person.mass),
            hair_color: Set(seed_person.hair_color),
            eye_color: Set(seed_person.eye_color),
            birth_year: Set(seed_person.birth_year),
            gender: Set(seed_person.gender),
            ..Default::default()
        };
        let person_model = new_person.insert(&db).await?;
        debug!("Created person {} ({})", person_model.id, person_model.name);
        people_created += 1;
    }

    info!(
        "Seeding completed: {} users, {} planets, {} people created",
        users_created, planets_created, people_created
    );
    trace!("seed function completed");

    Ok(())
}
