//! soroban-core: reproducible abacus practice problems.
//!
//! A batch is generated from one seeded stream, so the seed text
//! printed with a batch regenerates it exactly.

pub mod addsub_generator;
pub mod batch;
pub mod bounds;
pub mod config;
pub mod div_generator;
pub mod error;
pub mod flash;
pub mod format;
pub mod generator;
pub mod mul_generator;
pub mod problem;
pub mod rng;
pub mod stopwatch;
pub mod types;

pub use batch::{generate_batch, Batch, BatchEngine, BatchMeta};
pub use config::BatchConfig;
pub use error::{GenError, GenResult};
pub use rng::{create_stream, SeededStream};
