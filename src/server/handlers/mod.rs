pub mod alerts;
pub mod cities;
pub mod health;
pub mod routes;
pub mod safety;
