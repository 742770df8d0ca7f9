#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod assemble;
pub mod config;
pub mod error;
pub mod facets;
pub mod query;
pub mod seed;
pub mod store;
pub mod traits;
pub mod types;
