pub mod me;
pub mod routes;
