pub mod clearer;
pub mod db_utils;
pub mod generator;
pub mod locations;
pub mod names;
pub mod redis_handling;
pub mod store;
