pub mod balance;
pub mod ingest;
pub mod sheet;
