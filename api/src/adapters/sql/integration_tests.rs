//! SQL adapter tests
//!
//! These run against a fresh SQLite in-memory database per test, with the
//! schema created from the entity definitions.

use super::*;
use crate::domain::entities::*;
use crate::domain::ports::*;
use crate::error::DomainError;
use crate::test_utils::{memory_db, new_character, new_planet, new_user, new_vehicle};

// ============================================================================
// Planet Repository Tests
// ============================================================================

mod planet_repo_tests {
    use super::*;

    #[tokio::test]
    async fn create_and_find_planet() {
        let repo = SqlPlanetRepository::new(memory_db().await);

        let mut tatooine = new_planet("Tatooine");
        tatooine.diameter_in_km = Some(10465.0);
        tatooine.population = Some(200000);

        let created = repo.create_many(&[tatooine]).await.unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, PlanetId(1));

        let found = repo.find_by_id(&PlanetId(1)).await.unwrap().unwrap();
        assert_eq!(found.name, "Tatooine");
        assert_eq!(found.diameter_in_km, Some(10465.0));
        assert_eq!(found.population, Some(200000));
        assert_eq!(found.climate, None);
    }

    #[tokio::test]
    async fn find_missing_planet_is_none() {
        let repo = SqlPlanetRepository::new(memory_db().await);
        assert!(repo.find_by_id(&PlanetId(7)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_orders_by_id() {
        let repo = SqlPlanetRepository::new(memory_db().await);
        repo.create_many(&[new_planet("Tatooine"), new_planet("Alderaan")])
            .await
            .unwrap();
        repo.create_many(&[new_planet("Yavin IV")]).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Tatooine", "Alderaan", "Yavin IV"]);
    }

    #[tokio::test]
    async fn find_by_ids_skips_missing() {
        let repo = SqlPlanetRepository::new(memory_db().await);
        repo.create_many(&[new_planet("Tatooine"), new_planet("Alderaan")])
            .await
            .unwrap();

        let found = repo
            .find_by_ids(&[PlanetId(2), PlanetId(40)])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alderaan");

        assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_name_or_url_matches_either_key() {
        let repo = SqlPlanetRepository::new(memory_db().await);
        let created = repo.create_many(&[new_planet("Tatooine")]).await.unwrap();

        let by_name = repo
            .find_by_name_or_url("Tatooine", "https://elsewhere.test/x")
            .await
            .unwrap();
        assert!(by_name.is_some());

        let by_url = repo
            .find_by_name_or_url("Other", &created[0].url)
            .await
            .unwrap();
        assert!(by_url.is_some());

        let neither = repo
            .find_by_name_or_url("Other", "https://elsewhere.test/x")
            .await
            .unwrap();
        assert!(neither.is_none());
    }

    #[tokio::test]
    async fn duplicate_in_batch_rolls_back() {
        let repo = SqlPlanetRepository::new(memory_db().await);

        let err = repo
            .create_many(&[new_planet("Tatooine"), new_planet("Tatooine")])
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}

// ============================================================================
// Character Repository Tests
// ============================================================================

mod character_repo_tests {
    use super::*;

    #[tokio::test]
    async fn create_character_with_planet() {
        let db = memory_db().await;
        let planets = SqlPlanetRepository::new(db.clone());
        let characters = SqlCharacterRepository::new(db);

        planets.create_many(&[new_planet("Tatooine")]).await.unwrap();
        characters
            .create_many(&[
                new_character("Luke Skywalker", Some(1)),
                new_character("Leia Organa", None),
            ])
            .await
            .unwrap();

        let luke = characters
            .find_by_id(&CharacterId(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(luke.planet_id, Some(PlanetId(1)));

        let natives = characters.find_by_planets(&[PlanetId(1)]).await.unwrap();
        assert_eq!(natives.len(), 1);
        assert_eq!(natives[0].name, "Luke Skywalker");
        assert!(characters.find_by_planets(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_planet_is_a_constraint_violation() {
        let characters = SqlCharacterRepository::new(memory_db().await);

        let err = characters
            .create_many(&[new_character("Luke Skywalker", Some(99))])
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        assert!(characters.find_all().await.unwrap().is_empty());
    }
}

// ============================================================================
// Vehicle and Link Repository Tests
// ============================================================================

mod link_repo_tests {
    use super::*;

    #[tokio::test]
    async fn links_are_visible_from_both_ends() {
        let db = memory_db().await;
        let characters = SqlCharacterRepository::new(db.clone());
        let vehicles = SqlVehicleRepository::new(db.clone());
        let links = SqlCharacterVehicleRepository::new(db);

        characters
            .create_many(&[new_character("Luke Skywalker", None)])
            .await
            .unwrap();
        vehicles
            .create_many(&[new_vehicle("Speeder Bike"), new_vehicle("Snowspeeder")])
            .await
            .unwrap();

        let link = links
            .create(&NewCharacterVehicleLink {
                character_id: CharacterId(1),
                vehicle_id: VehicleId(1),
            })
            .await
            .unwrap();

        let from_character = links.find_by_character(&CharacterId(1)).await.unwrap();
        let from_vehicle = links.find_by_vehicle(&VehicleId(1)).await.unwrap();
        assert_eq!(from_character, vec![link]);
        assert_eq!(from_vehicle, vec![link]);
        assert!(links.find_by_vehicle(&VehicleId(2)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn batched_link_lookups_keep_link_order() {
        let db = memory_db().await;
        let characters = SqlCharacterRepository::new(db.clone());
        let vehicles = SqlVehicleRepository::new(db.clone());
        let links = SqlCharacterVehicleRepository::new(db);

        characters
            .create_many(&[
                new_character("Luke Skywalker", None),
                new_character("Leia Organa", None),
            ])
            .await
            .unwrap();
        vehicles
            .create_many(&[new_vehicle("Speeder Bike"), new_vehicle("Snowspeeder")])
            .await
            .unwrap();

        for (character_id, vehicle_id) in [(1, 2), (2, 1), (1, 1), (1, 2)] {
            links
                .create(&NewCharacterVehicleLink {
                    character_id: CharacterId(character_id),
                    vehicle_id: VehicleId(vehicle_id),
                })
                .await
                .unwrap();
        }

        let luke: Vec<_> = links
            .find_by_characters(&[CharacterId(1)])
            .await
            .unwrap()
            .iter()
            .map(|l| l.vehicle_id.0)
            .collect();
        assert_eq!(luke, vec![2, 1, 2]);

        let both = links
            .find_by_characters(&[CharacterId(1), CharacterId(2)])
            .await
            .unwrap();
        assert_eq!(both.len(), 4);

        let speeder: Vec<_> = links
            .find_by_vehicles(&[VehicleId(1)])
            .await
            .unwrap()
            .iter()
            .map(|l| l.character_id.0)
            .collect();
        assert_eq!(speeder, vec![2, 1]);
        assert!(links.find_by_vehicles(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn vehicle_round_trip_keeps_integer_fields() {
        let vehicles = SqlVehicleRepository::new(memory_db().await);

        let mut bike = new_vehicle("Speeder Bike");
        bike.crew = Some(1);
        bike.passengers = Some(1);
        bike.cost_in_credits = Some(8000.0);
        vehicles.create_many(&[bike]).await.unwrap();

        let found = vehicles.find_by_id(&VehicleId(1)).await.unwrap().unwrap();
        assert_eq!(found.crew, Some(1));
        assert_eq!(found.passengers, Some(1));
        assert_eq!(found.cost_in_credits, Some(8000.0));
    }
}

// ============================================================================
// User and Favorite Repository Tests
// ============================================================================

mod user_repo_tests {
    use super::*;

    #[tokio::test]
    async fn create_and_find_user() {
        let users = SqlUserRepository::new(memory_db().await);

        let user = users.create(&new_user("luke")).await.unwrap();
        assert_eq!(user.id, UserId(1));

        let found = users.find_by_username("luke").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.password, "luke-secret");
    }

    #[tokio::test]
    async fn duplicate_username_is_a_constraint_violation() {
        let users = SqlUserRepository::new(memory_db().await);
        users.create(&new_user("luke")).await.unwrap();

        let err = users.create(&new_user("luke")).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        assert_eq!(users.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn favorite_target_survives_storage() {
        let db = memory_db().await;
        let users = SqlUserRepository::new(db.clone());
        let planets = SqlPlanetRepository::new(db.clone());
        let favorites = SqlFavoriteRepository::new(db);

        let user = users.create(&new_user("leia")).await.unwrap();
        planets.create_many(&[new_planet("Alderaan")]).await.unwrap();

        let created = favorites
            .create(&NewFavorite {
                user_id: user.id,
                target: FavoriteTarget::Planet(PlanetId(1)),
            })
            .await
            .unwrap();
        assert_eq!(created.target, Some(FavoriteTarget::Planet(PlanetId(1))));

        let stored = favorites.find_by_user(&user.id).await.unwrap();
        assert_eq!(stored, vec![created]);
        assert!(favorites.find_by_user(&UserId(9)).await.unwrap().is_empty());
    }
}
