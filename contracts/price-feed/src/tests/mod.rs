//! Test modules for the price feed contract.
