// src/demos/mod.rs
//
// Every demo owns its state and implements Demo. The frame loop feeds it
// input events in arrival order, then calls update and render once per
// frame.

pub mod chaos_game;
pub mod graphing;
pub mod monge;
pub mod napoleon;
pub mod ptolemy;
pub mod trigonometry;
pub mod viviani;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::Config;
use crate::controllers::{InputEvent, InputState};
use crate::draw::Surface;
use crate::models::Bounds;

pub trait Demo {
    fn kind(&self) -> DemoKind;

    /// Recompute everything derived from the viewport size.
    fn resize(&mut self, bounds: Bounds);

    /// Called for every input event. `input` is the state before a key
    /// release is applied and after every other event is applied.
    fn handle_event(&mut self, _event: &InputEvent, _input: &InputState) {}

    fn update(&mut self, input: &InputState);

    fn render(&self, surface: &mut dyn Surface);

    /// Describe any NaN/Infinity in the current geometry.
    fn degenerate(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DemoError {
    #[error("unknown demo '{0}', expected one of: {1}")]
    UnknownDemo(String, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    ChaosGameTriangle,
    GraphingCalculator,
    MongesTheorem,
    NapoleonsTheorem,
    PtolemysTheorem,
    TrigonometricFunctions,
    VivianisTheorem,
}

impl DemoKind {
    pub const ALL: [DemoKind; 7] = [
        DemoKind::ChaosGameTriangle,
        DemoKind::GraphingCalculator,
        DemoKind::MongesTheorem,
        DemoKind::NapoleonsTheorem,
        DemoKind::PtolemysTheorem,
        DemoKind::TrigonometricFunctions,
        DemoKind::VivianisTheorem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::ChaosGameTriangle => "Chaos-Game-Triangle",
            DemoKind::GraphingCalculator => "Graphing-Calculator",
            DemoKind::MongesTheorem => "Monges-Theorem",
            DemoKind::NapoleonsTheorem => "Napoleons-Theorem",
            DemoKind::PtolemysTheorem => "Ptolemys-Theorem",
            DemoKind::TrigonometricFunctions => "Trigonometric-Functions",
            DemoKind::VivianisTheorem => "Vivianis-Theorem",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::ChaosGameTriangle => "Chaos Game: Triangle",
            DemoKind::GraphingCalculator => "Graphing Calculator",
            DemoKind::MongesTheorem => "Monge's Theorem",
            DemoKind::NapoleonsTheorem => "Napoleon's Theorem",
            DemoKind::PtolemysTheorem => "Ptolemy's Theorem",
            DemoKind::TrigonometricFunctions => "Trigonometric Functions",
            DemoKind::VivianisTheorem => "Viviani's Theorem",
        }
    }

    pub fn controls(self) -> &'static str {
        match self {
            DemoKind::ChaosGameTriangle => "Space: start/pause, R: reset",
            DemoKind::GraphingCalculator => "drag: pan, wheel: zoom",
            DemoKind::MongesTheorem => "drag a circle to move it",
            DemoKind::NapoleonsTheorem => "drag a yellow vertex to move it",
            DemoKind::PtolemysTheorem | DemoKind::TrigonometricFunctions => {
                "pointer inside the circle: move the point, outside: orbit"
            }
            DemoKind::VivianisTheorem => "pointer inside the triangle: move the dot, outside: orbit",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            DemoKind::ChaosGameTriangle => "chaos",
            DemoKind::GraphingCalculator => "graphing",
            DemoKind::MongesTheorem => "monge",
            DemoKind::NapoleonsTheorem => "napoleon",
            DemoKind::PtolemysTheorem => "ptolemy",
            DemoKind::TrigonometricFunctions => "trigonometry",
            DemoKind::VivianisTheorem => "viviani",
        }
    }

    /// The following demo in catalogue order, wrapping around.
    pub fn next(self) -> DemoKind {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted || kind.alias() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                DemoError::UnknownDemo(s.to_string(), names.join(", "))
            })
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Build a demo sized to `bounds`. Demos that need randomness get their own
/// generator forked from `rng`.
pub fn create(kind: DemoKind, config: &Config, bounds: Bounds, rng: &mut StdRng) -> Box<dyn Demo> {
    let fork = StdRng::seed_from_u64(rng.gen());
    match kind {
        DemoKind::ChaosGameTriangle => Box::new(chaos_game::ChaosGameDemo::new(
            config.chaos_game.clone(),
            config.app.ink,
            bounds,
            fork,
        )),
        DemoKind::GraphingCalculator => Box::new(graphing::GraphingDemo::new(
            config.graphing.clone(),
            config.app.ink,
            bounds,
        )),
        DemoKind::MongesTheorem => Box::new(monge::MongeDemo::new(
            config.monge.clone(),
            config.app.ink,
            bounds,
            fork,
        )),
        DemoKind::NapoleonsTheorem => Box::new(napoleon::NapoleonDemo::new(
            config.napoleon.clone(),
            config.app.ink,
            bounds,
            fork,
        )),
        DemoKind::PtolemysTheorem => Box::new(ptolemy::PtolemyDemo::new(
            config.ptolemy.clone(),
            config.app.ink,
            bounds,
        )),
        DemoKind::TrigonometricFunctions => Box::new(trigonometry::TrigonometryDemo::new(
            config.trigonometry.clone(),
            config.app.ink,
            bounds,
        )),
        DemoKind::VivianisTheorem => Box::new(viviani::VivianiDemo::new(
            config.viviani.clone(),
            config.app.ink,
            bounds,
        )),
    }
}

/// Generator for the session: seeded from config when given, otherwise
/// from system entropy.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_demo_names() {
        let tests = vec![
            ("Chaos-Game-Triangle", DemoKind::ChaosGameTriangle),
            ("graphing calculator", DemoKind::GraphingCalculator),
            ("Monge's Theorem", DemoKind::MongesTheorem),
            ("napoleon", DemoKind::NapoleonsTheorem),
            ("PTOLEMYS_THEOREM", DemoKind::PtolemysTheorem),
            ("trigonometry", DemoKind::TrigonometricFunctions),
            ("Vivianis-Theorem", DemoKind::VivianisTheorem),
        ];
        for (input, expected) in tests {
            assert_eq!(input.parse::<DemoKind>(), Ok(expected), "Failed for {}", input);
        }
    }

    #[test]
    fn test_unknown_demo() {
        let err = "boilerplate".parse::<DemoKind>().unwrap_err();
        assert!(err.to_string().contains("boilerplate"));
        assert!(err.to_string().contains("Vivianis-Theorem"));
    }

    #[test]
    fn test_next_cycles_through_catalogue() {
        let mut kind = DemoKind::ALL[0];
        for _ in 0..DemoKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, DemoKind::ALL[0]);
        assert_eq!(DemoKind::VivianisTheorem.next(), DemoKind::ChaosGameTriangle);
    }
}
