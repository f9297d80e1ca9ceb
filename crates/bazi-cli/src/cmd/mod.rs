pub mod config;
pub mod day;
pub mod init;
pub mod key_dates;
pub mod month;
pub mod pillar;
pub mod profile;
