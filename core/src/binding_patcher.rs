#![deny(missing_docs)]

//! # Binding Patcher
//!
//! Idempotently inserts a repository binding into the provider file's
//! `register` function, wiring a freshly scaffolded repository contract to
//! its implementation.
//!
//! The patcher matches the registration header textually rather than parsing
//! the file: the provider file format is fixed by convention, and the exact
//! header expected is documented on [`REGISTER_HEADER_PATTERN`]. Reformatting
//! that header breaks the match.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{AppError, AppResult};
use crate::naming::EntityNames;

/// Relative path (from the application source root) of the provider file
/// that receives repository bindings. The patcher mutates this file in
/// place; it never creates it.
pub const PROVIDER_PATH: &str = "providers/repository_service_provider.rs";

/// The registration function header the patcher looks for.
///
/// The provider file must contain exactly this signature (whitespace between
/// the closing parenthesis and the opening brace is tolerated):
///
/// ```text
/// pub fn register(services: &mut ServiceRegistry) {
/// ```
pub const REGISTER_HEADER_PATTERN: &str =
    r"pub fn register\(services: &mut ServiceRegistry\)\s*\{";

/// Outcome of applying a binding to the provider file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingOutcome {
    /// The binding was inserted and the file rewritten.
    Applied,
    /// The binding was already present; the file was left untouched.
    AlreadyExists,
}

/// Result of patching provider source in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingPatch {
    /// Updated source with the binding spliced in.
    Applied(String),
    /// The source already contains a binding for this entity.
    AlreadyBound,
}

/// Builds the binding statement for one entity.
///
/// The statement contains no braces, so splicing it into the register body
/// leaves the file's brace balance unchanged.
fn binding_statement(names: &EntityNames) -> String {
    format!(
        "    services.bind::<\n        \
         dyn crate::repositories::interfaces::{stem}_repository_interface::{interface},\n        \
         crate::repositories::diesel::{stem}_repository::{repository},\n    >();",
        stem = names.stem,
        interface = names.interface,
        repository = names.repository,
    )
}

/// Splices a repository binding into provider source, once.
///
/// Returns `AlreadyBound` when the interface name already occurs anywhere in
/// `source`. This is a plain substring check, not a structural one: it is
/// sufficient because the interface name is itself a fixed derivation of the
/// entity name, and it is safe against formatting variations.
///
/// Otherwise the binding statement is inserted as the first lines of the
/// `register` body, immediately after the opening brace; every original byte
/// of `source` is preserved around the insertion.
///
/// # Arguments
///
/// * `source` - Existing provider source code.
/// * `names` - Derived names for the entity being bound.
///
/// # Returns
///
/// * `AppResult<BindingPatch>` - The patched source, or `AlreadyBound`.
pub fn inject_binding(source: &str, names: &EntityNames) -> AppResult<BindingPatch> {
    if source.contains(&names.interface) {
        return Ok(BindingPatch::AlreadyBound);
    }

    let header = Regex::new(REGISTER_HEADER_PATTERN).expect("Invalid regex constant");

    let m = header.find(source).ok_or_else(|| {
        AppError::PatternNotMatched(
            "Could not find the register() function in the provider source".into(),
        )
    })?;

    let mut patched = source.to_string();
    patched.insert_str(m.end(), &format!("\n{}\n", binding_statement(names)));

    Ok(BindingPatch::Applied(patched))
}

/// Applies a repository binding to the provider file on disk.
///
/// Reads the file, splices the binding via [`inject_binding`], and writes the
/// full modified contents back in a single call. `AlreadyExists` and error
/// returns leave the file untouched.
///
/// # Arguments
///
/// * `path` - Path to the provider file (must already exist).
/// * `names` - Derived names for the entity being bound.
///
/// # Returns
///
/// * `AppResult<BindingOutcome>` - `Applied` on insertion, `AlreadyExists`
///   when the binding was found, `Err` on IO failure or missing header.
pub fn apply_binding(path: &Path, names: &EntityNames) -> AppResult<BindingOutcome> {
    let source = fs::read_to_string(path)?;

    match inject_binding(&source, names)? {
        BindingPatch::AlreadyBound => Ok(BindingOutcome::AlreadyExists),
        BindingPatch::Applied(patched) => {
            fs::write(path, patched)?;
            Ok(BindingOutcome::Applied)
        }
    }
}
