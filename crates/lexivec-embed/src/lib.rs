//! Word-embedding store and cosine nearest-neighbor search for lexivec.
//!
//! This crate provides:
//! - **word2vec binary loader**: streaming parser for the hybrid
//!   text-header + raw-float record format, tolerant of both historical
//!   separator variants.
//! - **Vector store**: vocabulary-indexed matrix of unit vectors with a
//!   bidirectional term/ordinal index.
//! - **Query composition**: order-dependent, incrementally re-normalized
//!   multi-term query vectors.
//! - **Top-k search**: brute-force scan with `wide::f32x8` SIMD dot
//!   products, a `BinaryHeap` guard selector, Rayon parallel.

#![forbid(unsafe_code)]

pub mod compose;
pub mod loader;
pub mod search;
pub mod simd;
pub mod store;
pub mod topk;
pub mod writer;

pub use compose::compose_query;
pub use loader::{load_model, MAX_TOKEN_BYTES};
pub use search::{nearest, DEFAULT_NEIGHBORHOOD};
pub use store::VectorStore;
pub use topk::{Candidate, TopK};
pub use writer::write_store;
