//! Shared test fixtures for PlateForge crates.
//!
//! This crate provides sites, regulations, programs and catalogs for tests.
//! It depends only on `plateforge-core` and `plateforge-config` so that any
//! crate above them can use it as a dev-dependency.
//!
//! - [`site`] - rectangular and irregular site boundaries
//! - [`scenario`] - regulation, program and catalog fixtures
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! plateforge-test = { workspace = true }
//! ```
//!
//! ```
//! use plateforge_test::{rectangular_site, uniform_regulations};
//!
//! let site = rectangular_site(40.0, 30.0);
//! let regs = uniform_regulations(3.0);
//! assert_eq!(site.area(), 1200.0);
//! assert_eq!(regs.setbacks.mean(), 3.0);
//! ```

pub mod scenario;
pub mod site;

pub use scenario::{
    program, three_bhk_catalog, two_one_program, uniform_regulations, SCENARIO_A_BUILDABLE_AREA,
};
pub use site::{dumbbell_site, l_shaped_site, rectangular_site, square_site};
