#![deny(missing_docs)]

//! # Crudkit Core
//!
//! Core library for the layered CRUD module scaffolder.
//!
//! Given one entity name, this crate derives every artifact identifier,
//! emits the five module source files (repository interface, repository,
//! service, request, controller) as pure strings, and patches the
//! application's repository service provider to wire the new binding.

/// Shared error types.
pub mod error;

/// Artifact name derivation.
pub mod naming;

/// Template emitters for module artifacts.
pub mod emitters;

/// Provider binding patching.
pub mod binding_patcher;

pub use binding_patcher::{
    apply_binding, inject_binding, BindingOutcome, BindingPatch, PROVIDER_PATH,
};
pub use emitters::{emit_module, Artifact, ArtifactKind};
pub use error::{AppError, AppResult};
pub use naming::EntityNames;
