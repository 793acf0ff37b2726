#![deny(missing_docs)]

//! # Make Command
//!
//! Orchestrates one `make` invocation: emits the five module artifacts for
//! an entity, then patches the repository binding into the provider file.
//!
//! The steps are independent and not transactional. Artifact files are
//! overwritten unconditionally; the binding patch is idempotent, and a
//! patcher failure skips that step only, without rolling back the files
//! already written.

use std::fs;
use std::path::Path;

use crudkit_core::{apply_binding, emit_module, BindingOutcome, EntityNames, PROVIDER_PATH};

use crate::error::{CliError, CliResult};

/// Arguments for the make command.
#[derive(clap::Args, Debug, Clone)]
pub struct MakeArgs {
    /// Entity name the artifacts are derived from (e.g. `Product`).
    pub name: String,
}

/// Executes the scaffolding process for one entity.
///
/// # Arguments
///
/// * `source_root` - The application source root the fixed artifact paths
///   are resolved against.
/// * `args` - Command arguments.
pub fn execute(source_root: &Path, args: &MakeArgs) -> CliResult<()> {
    if args.name.is_empty() {
        return Err(CliError::General("Entity name must not be empty".into()));
    }

    let names = EntityNames::derive(&args.name);

    // 1. Emit artifacts (unconditional overwrite)
    for artifact in emit_module(&names) {
        let target = source_root.join(&artifact.path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&target, &artifact.contents)?;
        println!("  -> Wrote {}", target.display());
    }

    // 2. Patch the provider (idempotent; failure halts this step only)
    let provider = source_root.join(PROVIDER_PATH);
    match apply_binding(&provider, &names) {
        Ok(BindingOutcome::Applied) => {
            println!("  -> Repository binding added to {}", provider.display());
        }
        Ok(BindingOutcome::AlreadyExists) => {
            println!(
                "  -> Binding for {} already exists, skipping.",
                names.entity
            );
        }
        Err(err) => {
            eprintln!("  -> Could not patch {}: {}", provider.display(), err);
        }
    }

    println!("CRUD module for {} created successfully.", names.entity);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const PROVIDER_SRC: &str = r#"use crate::container::ServiceRegistry;

pub fn register(services: &mut ServiceRegistry) {
}
"#;

    const ARTIFACT_PATHS: [&str; 5] = [
        "repositories/interfaces/order_repository_interface.rs",
        "repositories/diesel/order_repository.rs",
        "services/order_service.rs",
        "http/requests/order_request.rs",
        "http/controllers/api/order_controller.rs",
    ];

    fn write_provider(root: &Path) -> PathBuf {
        let provider = root.join(PROVIDER_PATH);
        fs::create_dir_all(provider.parent().unwrap()).unwrap();
        fs::write(&provider, PROVIDER_SRC).unwrap();
        provider
    }

    fn make_order() -> MakeArgs {
        MakeArgs {
            name: "Order".into(),
        }
    }

    #[test]
    fn test_make_writes_artifacts_and_binding() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let provider = write_provider(root);

        execute(root, &make_order()).unwrap();

        for rel in ARTIFACT_PATHS {
            assert!(root.join(rel).exists(), "missing artifact {}", rel);
        }

        let provider_code = fs::read_to_string(&provider).unwrap();
        assert!(provider_code.contains("OrderRepositoryInterface"));
        assert!(provider_code.contains("order_repository::OrderRepository"));
    }

    #[test]
    fn test_make_rerun_adds_no_second_binding() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let provider = write_provider(root);

        execute(root, &make_order()).unwrap();
        let first = fs::read_to_string(&provider).unwrap();

        execute(root, &make_order()).unwrap();
        let second = fs::read_to_string(&provider).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches("OrderRepositoryInterface").count(), 1);
    }

    #[test]
    fn test_missing_provider_still_emits_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        // No provider written: the patch step fails, the command must not.
        execute(
            root,
            &MakeArgs {
                name: "Invoice".into(),
            },
        )
        .unwrap();

        assert!(root.join("services/invoice_service.rs").exists());
        // The patcher never creates the provider file.
        assert!(!root.join(PROVIDER_PATH).exists());
    }

    #[test]
    fn test_two_entities_share_provider() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let provider = write_provider(root);

        execute(root, &make_order()).unwrap();
        execute(
            root,
            &MakeArgs {
                name: "Invoice".into(),
            },
        )
        .unwrap();

        let code = fs::read_to_string(&provider).unwrap();
        assert_eq!(code.matches("OrderRepositoryInterface").count(), 1);
        assert_eq!(code.matches("InvoiceRepositoryInterface").count(), 1);
    }

    #[test]
    fn test_rerun_overwrites_artifacts() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_provider(root);

        execute(root, &make_order()).unwrap();

        // Simulate manual edits; a re-run restores the template.
        let service = root.join("services/order_service.rs");
        fs::write(&service, "// edited\n").unwrap();

        execute(root, &make_order()).unwrap();
        let code = fs::read_to_string(&service).unwrap();
        assert!(code.contains("pub struct OrderService"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let dir = tempdir().unwrap();
        let res = execute(dir.path(), &MakeArgs { name: String::new() });
        assert!(matches!(res.unwrap_err(), CliError::General(_)));
        // Nothing was written.
        assert!(!dir.path().join("services").exists());
    }
}
