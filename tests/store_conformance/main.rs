//! Store Conformance Test Suite
//!
//! Exercises the public `kindstore` API end to end.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Reference scenario (hello/int/ints/nil)
//! - **Tier 2**: Classification under both numeric grammars
//! - **Tier 3**: Overwrite and idempotence
//! - **Tier 4**: Property-based invariants
//! - **Tier 5**: Options and construction
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test store_conformance
//! ```




// Tier 3: Overwrite and idempotence
mod tier3_overwrite;


// Tier 5: Options and construction
mod tier5_options;
