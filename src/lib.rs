//! Core library for the catalog service.
//!
//! This crate exposes the category domain model, the persistence ports and
//! the application services used by the catalog application. Storage and
//! transport backends live outside the core and reach it through the traits
//! in [`repository`].

pub mod domain;
pub mod dto;
pub mod repository;
pub mod services;
