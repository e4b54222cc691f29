//! A static noise texture seen through a rotating polar twist in the middle
//! of the frame, surrounded by live TV static.

pub mod app;
pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod noise;
pub mod region;
pub mod renderer;
pub mod types;
