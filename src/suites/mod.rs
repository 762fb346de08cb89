//! The four benchmark suites, one per [`Domain`](crate::types::Domain).
//!
//! A suite enumerates its cells from the parameter tables, runs the trials
//! and returns a complete [`ResultTable`](crate::types::ResultTable). Cells
//! with no parameter at a level are absent from the table, not blank.

pub mod keygen;
pub mod rsa_enc;
pub mod signature;
pub mod symmetric;
