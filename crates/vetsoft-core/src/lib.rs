//! VetSoft Core Library
//!
//! Record management core for a veterinary clinic: clients, providers,
//! medicines, products, pets, and vets, each behind a validate-before-write
//! gateway over SQLite.
//!
//! # Architecture
//!
//! ```text
//! form handler ──▶ Gateway.create / Gateway.update (raw field map)
//!                         │
//!                  validate_<entity>  ──▶ non-empty error map?
//!                         │                      │
//!                   empty map                Rejected(errors)
//!                         │              (nothing is written)
//!                  coerce + write row
//!                         │
//!                    Saved(entity)
//! ```
//!
//! # Core Principle
//!
//! **A record is never written unless its validator returned an empty error
//! map.** Updates merge over the stored record field by field, but only
//! after the raw incoming map validated as a whole; a failed update mutates
//! nothing.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer, one table per entity
//! - [`models`]: Domain types (Client, Pet, Vet, City, Speciality, ...)
//! - [`validation`]: Pure per-entity field validators
//! - [`gateway`]: Validate-before-write create/update/delete contracts

pub mod db;
pub mod gateway;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult};
pub use gateway::{
    ClientGateway, MedicineGateway, Outcome, PetGateway, ProductGateway, ProviderGateway,
    VetGateway,
};
pub use models::{City, Client, Medicine, Pet, Product, Provider, Speciality, Vet};
pub use validation::{
    validate_client, validate_medicine, validate_pet, validate_product, validate_provider,
    validate_vet, Errors, FieldMap,
};
