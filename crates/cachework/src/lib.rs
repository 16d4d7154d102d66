//! # cachework
//!
//! Synthetic workload generator for exercising LRU caches.
//!
//! Emits a plain-text file: one `CAPACITY` directive followed by 100
//! randomized `PUT`/`GET` records drawn from a 20-key space. With a
//! capacity of 5 and 20 distinct keys, any cache replaying the file
//! evicts constantly, which is the point.
//!
//! The cache under test lives elsewhere; this crate only writes input
//! for it.

#![warn(missing_docs)]

mod error;
mod generate;
mod workload;

pub use error::{Error, Result};
pub use generate::{generate, write_workload, DEFAULT_FILENAME};
pub use workload::{
    Operation, CAPACITY, KEY_RANGE, OPERATION_COUNT, PUT_PROBABILITY, VALUE_LEN,
};
