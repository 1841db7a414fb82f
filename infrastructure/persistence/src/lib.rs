pub mod db;
pub mod schema;
pub mod product {
    pub mod entity;
    pub mod repository;
}
