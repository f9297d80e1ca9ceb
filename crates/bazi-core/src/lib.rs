pub mod calendar;
pub mod conditions;
pub mod config;
pub mod detail;
pub mod engine;
pub mod error;
pub mod io;
pub mod paths;
pub mod pillar;
pub mod profile;
pub mod projection;
pub mod symbols;
pub mod ten_gods;
pub mod tier;

pub use error::{BaziError, Result};
