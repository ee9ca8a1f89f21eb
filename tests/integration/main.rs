//! Integration test entry point.

mod feed_test;
mod helpers;
