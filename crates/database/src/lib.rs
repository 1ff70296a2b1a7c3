pub mod db;
pub mod services;

pub use db::{Connection, Database, create_connection};
