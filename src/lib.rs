// src/lib.rs
//
// Interactive geometry demos: smoothed input, per-demo geometry and a
// surface-agnostic renderer.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod demos;
pub mod draw;
pub mod models;
pub mod services;
