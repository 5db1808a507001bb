//! Request surfaces for the guidance service.

pub mod web;
