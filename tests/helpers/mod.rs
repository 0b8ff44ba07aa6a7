#![allow(dead_code)]

pub mod ecore_fixtures;
pub mod graph_assertions;
pub mod model_builders;
