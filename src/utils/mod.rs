//! Utility functions and helpers

pub mod formats;

pub use formats::{dense_from_ndarray, dense_from_sprs, to_ndarray, to_sprs_csr};
