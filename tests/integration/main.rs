//! Integration tests for tint

mod alias_test;
mod helpers;
mod output_test;
