//! Domain models for the vetsoft system.

mod city;
mod client;
mod medicine;
mod pet;
mod product;
mod provider;
mod speciality;
mod vet;

pub use city::*;
pub use client::*;
pub use medicine::*;
pub use pet::*;
pub use product::*;
pub use provider::*;
pub use speciality::*;
pub use vet::*;
