//! Integration tests for the storyterm binary

mod check_test;
mod config_test;
mod helpers;
mod plain_test;
