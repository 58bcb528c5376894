pub mod db;
pub mod rema;
