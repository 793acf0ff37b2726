#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Derives every artifact identifier used by the scaffolder from a single
//! entity name. All derivations are fixed concatenations: the entity name is
//! trusted as given, so a malformed name flows straight through into
//! malformed generated code.

use heck::ToSnakeCase;

/// The full set of identifiers derived from one entity name.
///
/// For an entity `Order`:
/// - `interface`: `OrderRepositoryInterface`
/// - `repository`: `OrderRepository`
/// - `service`: `OrderService`
/// - `request`: `OrderRequest`
/// - `stem`: `order` (file naming)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNames {
    /// The entity name as supplied (e.g. `Order`).
    pub entity: String,
    /// Trait name of the repository contract.
    pub interface: String,
    /// Struct name of the repository implementation.
    pub repository: String,
    /// Struct name of the service layer.
    pub service: String,
    /// Struct name of the validation request.
    pub request: String,
    /// snake_case stem used for file names and module paths.
    pub stem: String,
}

impl EntityNames {
    /// Derives the full name set from an entity name.
    pub fn derive(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            interface: format!("{}RepositoryInterface", entity),
            repository: format!("{}Repository", entity),
            service: format!("{}Service", entity),
            request: format!("{}Request", entity),
            stem: entity.to_snake_case(),
        }
    }
}
