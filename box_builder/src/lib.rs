//! Generator for the `BoxBuilder` overload family.
//!
//! Swift has no variadic generics over heterogeneous argument lists, so the
//! result builder behind Loftwing's view DSL needs one concrete `buildBlock`
//! overload per supported child count. This crate synthesises that family
//! from a single [`ArityBound`]: for a bound `N` it emits arities `1..N`,
//! exclusive of `N`, each collecting its arguments into an array in
//! declaration order.
//!
//! Rendering is a pure function of [`BoxBuilderConfig`]. The same
//! configuration always yields byte-identical text.

pub mod arity;
pub mod cli;
pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod identifier;
pub mod overload;

pub use arity::ArityBound;
pub use config::{BoxBuilderConfig, BoxBuilderSettings, load_config};
pub use document::{GeneratedDocument, render};
pub use emit::{emit, run};
pub use error::BoxBuilderError;
pub use identifier::Identifier;
pub use overload::OverloadSpec;
