//! # spl-rs: Feature Location in Software Product Lines
//!
//! **`spl-rs`** analyzes *feature location* in a combinatorially generated
//! **Software Product Line (SPL)**: given F independent binary features and
//! one of 19 feature-interaction models, it enumerates every system of the
//! product line, derives every composite feature the model admits, and
//! computes, for each feature, the exact set-difference expression over
//! systems that isolates it.
//!
//! ## What is an isolating set difference?
//!
//! Every system is one subset of the independent features (plus the
//! composite features it implies). A feature `f` is *isolated* by the
//! expression `(∩ systems containing f) \ (∪ systems not containing f)`:
//! evaluating it over the systems' feature sets yields exactly `{f}`.
//! Finding that expression — and proving no split isolates more than one
//! feature — is the core of the analysis.
//!
//! ## Key Features
//!
//! - **Model Catalog**: 19 fixed combinations of the five derived-feature
//!   categories (or, and, not, or-not, and-not), looked up from a literal
//!   table ([`model`]).
//! - **Exact Combinatorics**: lexicographic k-combination generation and
//!   the aggregate counts T, DF, O, A, N, ON, AN, S = 2^F and D = 2^S
//!   ([`combinatorics`], [`taxonomy`]).
//! - **Three Interchangeable Strategies**: membership partition
//!   ([`enumeration`]), exhaustive difference-id search ([`search`]), and
//!   closed-form bitmask arithmetic ([`closed_form`]); all implement
//!   [`Isolate`][crate::isolation::Isolate] and produce identical results.
//! - **Byte-Stable Reporting**: the textual contracts of the original
//!   analysis outputs ([`report`]).
//!
//! ## Basic Usage
//!
//! ```rust
//! use spl_rs::isolation::Isolate;
//! use spl_rs::model::Model;
//! use spl_rs::systems::Systems;
//! use spl_rs::taxonomy::Taxonomy;
//! use spl_rs::enumeration::Enumeration;
//!
//! # fn main() -> Result<(), spl_rs::error::Error> {
//! // 1. Pick a model and build the feature universe for F = 2.
//! let model = Model::new(8)?;
//! let taxonomy = Taxonomy::build(2, model)?;
//! assert_eq!(taxonomy.counts().t, 6);
//!
//! // 2. Enumerate all 2^F systems.
//! let systems = Systems::enumerate(&taxonomy);
//! assert_eq!(systems.len(), 4);
//!
//! // 3. Isolate every feature.
//! let isolations = Enumeration::new(&taxonomy, &systems).isolate()?;
//! let f1 = &isolations["f1"];
//! assert_eq!(f1.to_string(), "( S2 & S4 ) \\ ( S1 | S3 )");
//! # Ok(())
//! # }
//! ```
//!
//! ## Scalability
//!
//! The exhaustive search walks all 2^S possible splits and is intended only
//! as a brute-force reference for small F (its id space alone overflows at
//! F = 7). The closed-form strategy reproduces its results in O(T·S) and is
//! the only path that scales past that ceiling.

pub mod bitstring;
pub mod closed_form;
pub mod combinatorics;
pub mod difference;
pub mod enumeration;
pub mod error;
pub mod isolation;
pub mod model;
pub mod report;
pub mod search;
pub mod systems;
pub mod taxonomy;
pub mod types;
