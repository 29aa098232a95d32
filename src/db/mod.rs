pub mod applicationdb;
pub mod db;
pub mod jobdb;
pub mod userdb;
pub mod workerdb;
