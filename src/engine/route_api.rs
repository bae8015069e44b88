use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::{route_markers, Directions, NewRoute, RouteKind, RouteOption, SavedRoute},
    error::{not_found_error, Error},
    generator,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn compare_routes(
        &self,
        start: String,
        end: String,
        city: Option<String>,
    ) -> Result<Vec<RouteOption>, Error> {
        let start = generator::location_name("start", &start)?;
        let end = generator::location_name("end", &end)?;
        let center = self.city_center(city).await?;

        let routes = generator::compare_routes(start, end, center)?;

        tracing::info!(
            safe_km = routes[0].distance_km,
            regular_km = routes[1].distance_km,
            "generated route comparison"
        );

        Ok(routes
            .into_iter()
            .map(|estimate| RouteOption::new(estimate, start, end))
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn route_directions(
        &self,
        start: String,
        end: String,
        city: Option<String>,
        kind: RouteKind,
    ) -> Result<Directions, Error> {
        let start = generator::location_name("start", &start)?;
        let end = generator::location_name("end", &end)?;
        let center = self.city_center(city).await?;

        let estimate = generator::generate_route(start, end, center, kind)?;
        let route = RouteOption::new(estimate, start, end);

        let steps = generator::turn_by_turn(&route, &mut generator::route_rng(start, end));
        let markers = route_markers(&route);

        Ok(Directions {
            route,
            steps,
            markers,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn create_route(&self, route: NewRoute) -> Result<SavedRoute, Error> {
        route.validate()?;

        let saved = self.store.insert_route(route).await?;

        tracing::info!(token = %saved.token, "saved route");

        Ok(saved)
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self, token: Uuid) -> Result<SavedRoute, Error> {
        self.store
            .find_route(token)
            .await?
            .ok_or_else(|| not_found_error(format!("route {}", token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Assessment, City, Coordinates};
    use crate::store::MemStore;
    use std::sync::Arc;

    fn engine() -> Engine {
        Engine::new(MemStore::with_fixtures(), "Delhi NCR".into())
    }

    #[tokio::test]
    async fn compares_two_routes() {
        let routes = engine()
            .compare_routes(
                "Connaught Place, Delhi".into(),
                "India Gate, Delhi".into(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].route_type, RouteKind::Safe);
        assert!(routes[0].is_recommended);
        assert!(matches!(routes[0].assessment, Assessment::Factors(_)));
        assert_eq!(routes[1].route_type, RouteKind::Regular);
        assert!(matches!(routes[1].assessment, Assessment::Issues(_)));

        for route in &routes {
            assert!(route.coordinates.len() >= 5);
            assert!(route.safety_score <= 100);
            assert_eq!(route.start_location, "Connaught Place, Delhi");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_comparisons_agree() {
        let engine = Arc::new(engine());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let engine = engine.clone();
                tokio::spawn(async move {
                    engine
                        .compare_routes("Saket, Delhi".into(), "Hauz Khas, Delhi".into(), None)
                        .await
                })
            })
            .collect();

        let mut results = vec![];
        for handle in handles {
            results.push(handle.await.unwrap().unwrap());
        }

        let expected = engine
            .compare_routes("Saket, Delhi".into(), "Hauz Khas, Delhi".into(), None)
            .await
            .unwrap();

        assert!(results.iter().all(|routes| *routes == expected));
    }

    #[tokio::test]
    async fn city_moves_the_routes() {
        let engine = engine();
        let delhi = engine
            .compare_routes("Bandra".into(), "Worli".into(), None)
            .await
            .unwrap();
        let mumbai = engine
            .compare_routes("Bandra".into(), "Worli".into(), Some("mumbai".into()))
            .await
            .unwrap();

        assert!(delhi[0].coordinates[0].lat > 28.0);
        assert!(mumbai[0].coordinates[0].lat < 20.0);
    }

    #[tokio::test]
    async fn unknown_city_uses_default() {
        let engine = engine();
        let unknown = engine
            .compare_routes("A".into(), "B".into(), Some("Atlantis".into()))
            .await
            .unwrap();
        let default = engine
            .compare_routes("A".into(), "B".into(), None)
            .await
            .unwrap();

        assert_eq!(unknown[0].coordinates, default[0].coordinates);
    }

    #[tokio::test]
    async fn missing_default_city_is_not_found() {
        let engine = Engine::new(MemStore::new(), "Delhi NCR".into());
        let err = engine
            .compare_routes("A".into(), "B".into(), None)
            .await
            .unwrap_err();

        assert_eq!(err.code, 104);
    }

    #[tokio::test]
    async fn blank_input_is_rejected_before_city_lookup() {
        let engine = Engine::new(MemStore::new(), "Nowhere".into());
        let err = engine
            .compare_routes(" ".into(), "B".into(), None)
            .await
            .unwrap_err();

        assert_eq!(err.code, 101);
    }

    #[tokio::test]
    async fn directions_follow_the_route() {
        let store = MemStore::new().with_cities(vec![City::new("Test City", 10.0, 20.0, &[])]);
        let engine = Engine::new(store, "Test City".into());

        let directions = engine
            .route_directions("Home".into(), "Office".into(), None, RouteKind::Regular)
            .await
            .unwrap();

        assert_eq!(directions.route.route_type, RouteKind::Regular);
        assert_eq!(directions.steps.first().unwrap().street_name, "Home");
        assert_eq!(directions.steps.last().unwrap().distance, directions.route.distance);
        assert_eq!(directions.markers.len(), 2);

        let start: Coordinates = directions.route.coordinates[0];
        assert_eq!(directions.markers[0].lat, start.lat);
    }

    #[tokio::test]
    async fn saved_routes_are_found_by_token() {
        let engine = engine();
        let saved = engine
            .create_route(NewRoute {
                start_location: "MG Road, Bangalore".into(),
                end_location: "Koramangala, Bangalore".into(),
                distance: 4.2,
                duration: 50,
                safety_score: 91,
                route_type: RouteKind::Safe,
                route_data: vec![],
                is_recommended: true,
            })
            .await
            .unwrap();

        assert_eq!(engine.find_route(saved.token).await.unwrap(), saved);
        assert_eq!(
            engine.find_route(Uuid::new_v4()).await.unwrap_err().code,
            104
        );
    }
}
