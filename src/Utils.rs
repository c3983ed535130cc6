//! different utility modules used throughout the project
/// tiny module to set up terminal logging and save matrices into files
pub mod logger;
