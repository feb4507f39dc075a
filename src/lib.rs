#![feature(int_roundings)]

pub mod application;
pub mod config;
pub mod datastore;
pub mod domain;
pub mod infrastructure;
pub mod observability;
