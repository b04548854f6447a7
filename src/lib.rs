pub mod api;
pub mod args;
pub mod criteria;
pub mod db;
pub mod export;
pub mod game;
pub mod sample;
pub mod ui;
