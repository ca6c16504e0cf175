// src/config/config_types.rs
//
// Config types for the app. Every section falls back to the constants the
// demos were tuned with, so config.toml only needs the values it changes.

use serde::Deserialize;
use std::f64::consts::PI;

use crate::demos::graphing::GraphFunction;
use crate::draw::Color;

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 255, 0);
const BLUE: Color = Color::rgb(0, 0, 255);
const GRAY: Color = Color::rgb(128, 128, 128);
const YELLOW: Color = Color::rgb(255, 255, 0);
const BLACK: Color = Color::rgb(0, 0, 0);

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "geodemos".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub demo: Option<String>,
    pub seed: Option<u64>,         // unseeded randomness when absent
    pub warn_non_finite: bool,     // log NaN/Infinity geometry, never fatal
    pub background: Color,
    pub ink: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo: None,
            seed: None,
            warn_non_finite: false,
            background: Color::rgb(255, 255, 255),
            ink: BLACK,
        }
    }
}

/************************* Demo Configs ********************/

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChaosGameConfig {
    pub center_ratio: [f64; 2],
    pub side: f64,
    pub limit: usize,
    pub points_per_frame: usize,
    pub start_paused: bool,
    pub dot_size: f64,
    pub line_width: f64,
    pub font_size: f64,
    pub dot_color: Color,
    pub line_color: Color,
}

impl Default for ChaosGameConfig {
    fn default() -> Self {
        Self {
            center_ratio: [0.5, 0.5],
            side: 500.0,
            limit: 2500,
            points_per_frame: 1,
            start_paused: true,
            dot_size: 1.0,
            line_width: 5.0,
            font_size: 25.0,
            dot_color: BLACK,
            line_color: BLACK,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphingConfig {
    pub functions: Vec<GraphFunction>,
    pub friction: f64,        // per-frame decay of the pan velocity
    pub line_smoothness: f64, // sample step as a fraction of a tick's pixels
    pub zoom_limit: f64,
    pub zoom_step: f64,
    pub zoom_ease: f64,
    pub mouse_ease: f64,
    pub decimal_length: usize,
    pub tick_space: f64,
    pub tick_value: f64,
    pub border_ticks: f64,
    pub line_width: f64,
    pub line_colors: Vec<Color>,
    pub default_line_color: Color,
    pub dot_radius: f64,
    pub dot_outline: f64,
    pub tick_width: f64,
    pub tick_length: f64,
    pub grid_width: f64,
    pub grid_color: Color,
    pub border_width: f64,
    pub border_visible: bool,
    pub font_size: f64,
    pub text_origin: [f64; 2],
    pub text_space: f64,
    pub text_separator: f64,
}

impl Default for GraphingConfig {
    fn default() -> Self {
        Self {
            functions: vec![
                GraphFunction::Identity,
                GraphFunction::Square,
                GraphFunction::Sine,
                GraphFunction::Exp2,
            ],
            friction: 0.9,
            line_smoothness: 0.5,
            zoom_limit: 2.0,
            zoom_step: 0.05,
            zoom_ease: 5.0,
            mouse_ease: 10.0,
            decimal_length: 3,
            tick_space: 50.0,
            tick_value: 1.0,
            border_ticks: 10.0,
            line_width: 2.5,
            line_colors: vec![RED, Color::rgb(0, 175, 0), BLUE],
            default_line_color: Color::rgb(255, 128, 0),
            dot_radius: 5.0,
            dot_outline: 3.0,
            tick_width: 2.5,
            tick_length: 5.0,
            grid_width: 1.0,
            grid_color: GRAY.with_alpha(0.5),
            border_width: 5.0,
            border_visible: true,
            font_size: 15.0,
            text_origin: [5.0, 0.0],
            text_space: 15.0,
            text_separator: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongeConfig {
    pub radii: [f64; 3], // must be pairwise distinct
    pub mouse_ease: f64,
    pub line_width: f64,
    pub outline_width: f64,
    pub contact_color: Color,
    pub tangent_color: Color,
    pub circle_colors: [Color; 3],
}

impl Default for MongeConfig {
    fn default() -> Self {
        Self {
            radii: [100.0, 50.0, 25.0],
            mouse_ease: 5.0,
            line_width: 2.5,
            outline_width: 7.5,
            contact_color: YELLOW,
            tangent_color: GRAY,
            circle_colors: [RED, GREEN, BLUE],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NapoleonConfig {
    pub mouse_ease: f64,
    pub vertex_ease: f64,
    pub select_radius: f64,
    pub outline: f64,
    pub dot_size: f64,
    pub irregular_color: Color,
    pub equilateral_color: Color,
    pub center_color: Color,
    pub irregular_dot_color: Color,
    pub center_dot_color: Color,
}

impl Default for NapoleonConfig {
    fn default() -> Self {
        Self {
            mouse_ease: 5.0,
            vertex_ease: 5.0,
            select_radius: 50.0,
            outline: 5.0,
            dot_size: 5.0,
            irregular_color: GRAY,
            equilateral_color: GRAY.with_alpha(0.5),
            center_color: Color::rgb(240, 240, 240),
            irregular_dot_color: YELLOW,
            center_dot_color: Color::rgb(0, 255, 255),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PtolemyConfig {
    pub radius: f64,
    pub mouse_ease: f64,
    pub point_ease: f64,
    pub orbit_start: f64,
    pub orbit_speed: f64,
    pub line_width: f64,
    pub line_colors: [Color; 3],
    pub bar_width: f64,
    pub bar_outline: f64,
    pub bar_space_shortest: f64,
    pub bar_space_longest: f64,
    pub text_outline: f64,
    pub text_space_shortest: f64,
    pub text_space_longest: f64,
    pub font_size: f64,
    pub point_radius: f64,
    pub point_outline: f64,
    pub point_color: Color,
}

impl Default for PtolemyConfig {
    fn default() -> Self {
        Self {
            radius: 250.0,
            mouse_ease: 5.0,
            point_ease: 5.0,
            orbit_start: -PI / 2.0,
            orbit_speed: 0.005,
            line_width: 5.0,
            line_colors: [RED, GREEN, BLUE],
            bar_width: 5.0,
            bar_outline: 10.0,
            bar_space_shortest: 15.0,
            bar_space_longest: 30.0,
            text_outline: 3.0,
            text_space_shortest: 10.0,
            text_space_longest: 10.0,
            font_size: 20.0,
            point_radius: 5.0,
            point_outline: 7.5,
            point_color: YELLOW,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrigonometryConfig {
    pub radius: f64,
    pub mouse_ease: f64,
    pub angle_ease: f64,
    pub orbit_speed: f64,
    pub line_width: f64,
    pub text_outline: f64,
    pub font_size: f64,
    pub angle_arc_radius: f64,
    pub space_sine: f64,
    pub space_cosine: f64,
    pub space_tangent: f64,
    pub space_angle: f64,
    pub sine_color: Color,
    pub cosine_color: Color,
    pub tangent_color: Color,
    pub cotangent_color: Color,
    pub secant_color: Color,
    pub cosecant_color: Color,
}

impl Default for TrigonometryConfig {
    fn default() -> Self {
        Self {
            radius: 250.0,
            mouse_ease: 5.0,
            angle_ease: 10.0,
            orbit_speed: 0.01,
            line_width: 3.0,
            text_outline: 3.0,
            font_size: 17.5,
            angle_arc_radius: 25.0,
            space_sine: 15.0,
            space_cosine: 10.0,
            space_tangent: 1.15,
            space_angle: 45.0,
            sine_color: RED,
            cosine_color: BLUE,
            tangent_color: Color::rgb(128, 0, 255),
            cotangent_color: Color::rgb(255, 0, 255),
            secant_color: Color::rgb(255, 128, 0),
            cosecant_color: Color::rgb(0, 200, 0),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VivianiConfig {
    pub center_ratio: [f64; 2],
    pub side: f64,
    pub dot_ease: f64,
    pub orbit_speed: f64,
    pub fade_in: f64,
    pub fade_out: f64,
    pub orbit_opacity: f64,
    pub orbit_color: Color,
    pub line_width: f64,
    pub bar_offset: f64, // x of the total bar relative to the triangle's left edge
    pub bar_outline: f64,
    pub line_colors: [Color; 3],
    pub dot_radius: f64,
    pub dot_outline: f64,
    pub dot_color: Color,
    pub text_outline: f64,
    pub text_space: f64,
    pub font_size: f64,
}

impl Default for VivianiConfig {
    fn default() -> Self {
        Self {
            center_ratio: [0.5, 0.5],
            side: 500.0,
            dot_ease: 5.0,
            orbit_speed: 0.005,
            fade_in: 0.001,
            fade_out: 0.1,
            orbit_opacity: 0.5,
            orbit_color: GRAY,
            line_width: 5.0,
            bar_offset: -25.0,
            bar_outline: 10.0,
            line_colors: [RED, GREEN, BLUE],
            dot_radius: 5.0,
            dot_outline: 5.0,
            dot_color: GRAY,
            text_outline: 3.0,
            text_space: 10.0,
            font_size: 20.0,
        }
    }
}
