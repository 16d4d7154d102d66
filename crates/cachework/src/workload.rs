//! Workload records and random draws
//!
//! Every draw is independent: operation kind, key, and value share no
//! state. Keys repeat freely across records.

use std::fmt;

use rand::Rng;

/// Cache capacity declared on the first line of every workload file
pub const CAPACITY: usize = 5;

/// Number of operation records per file
pub const OPERATION_COUNT: usize = 100;

/// Keys are drawn from `User_1..=User_KEY_RANGE`
///
/// 20 keys against a capacity-5 cache keeps the eviction path hot.
pub const KEY_RANGE: u32 = 20;

/// Length of generated values
pub const VALUE_LEN: usize = 4;

/// Probability that a record is a PUT rather than a GET
pub const PUT_PROBABILITY: f64 = 0.7;

/// A single cache operation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Write a value under a key
    Put {
        /// Target key, e.g. `User_7`
        key: String,
        /// Payload, always `VALUE_LEN` uppercase letters
        value: String,
    },
    /// Read a key
    Get {
        /// Target key, e.g. `User_7`
        key: String,
    },
}

impl Operation {
    /// Draw a random operation: PUT with probability `PUT_PROBABILITY`,
    /// GET otherwise. Key and value are drawn independently.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<f64>() < PUT_PROBABILITY {
            Operation::Put {
                key: random_key(rng),
                value: random_value(rng),
            }
        } else {
            Operation::Get {
                key: random_key(rng),
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Put { key, value } => write!(f, "PUT {} {}", key, value),
            Operation::Get { key } => write!(f, "GET {}", key),
        }
    }
}

/// Draw a key like `User_7` with the integer uniform in `[1, KEY_RANGE]`
pub fn random_key<R: Rng>(rng: &mut R) -> String {
    format!("User_{}", rng.gen_range(1..=KEY_RANGE))
}

/// Draw a value of `VALUE_LEN` uppercase ASCII letters, each uniform
/// over A-Z with replacement
pub fn random_value<R: Rng>(rng: &mut R) -> String {
    (0..VALUE_LEN)
        .map(|_| rng.gen_range(b'A'..=b'Z') as char)
        .collect()
}
