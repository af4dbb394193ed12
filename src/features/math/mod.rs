pub mod service;

pub use service::{
    LcmOverflow, MAX_FIBONACCI_TERMS, fibonacci, filter_primes, fold_hcf, fold_lcm,
};
