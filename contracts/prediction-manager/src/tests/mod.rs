//! Test modules for the prediction manager contract.

mod initialization;
mod store;
