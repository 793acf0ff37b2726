#![deny(missing_docs)]

//! # Template Emitters
//!
//! Pure string templates for the five artifacts of a CRUD module: repository
//! interface, diesel repository, service, request and controller. Each
//! emitter formats one complete source file; writing the result to disk (and
//! overwriting whatever is already there) is the caller's job.
//!
//! The emitted code targets a conventional layered application: it assumes a
//! `crate::models::{Entity}` persistence model, a `crate::db::DbPool`
//! connection pool, a `RepoResult` alias under `crate::repositories`, and a
//! `FormRequest` validation trait under `crate::http::requests`.

use std::path::PathBuf;

use crate::naming::EntityNames;

/// The artifact kinds emitted for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Repository contract trait.
    Interface,
    /// Diesel-backed repository implementation.
    Repository,
    /// Pass-through service layer.
    Service,
    /// Validation rule holder.
    Request,
    /// HTTP API controller.
    Controller,
}

/// A generated source file: target path relative to the application source
/// root, plus complete contents.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// The layer this file belongs to.
    pub kind: ArtifactKind,
    /// Path relative to the source root.
    pub path: PathBuf,
    /// Full file contents.
    pub contents: String,
}

/// Emits the five artifacts for one entity, in generation order.
pub fn emit_module(names: &EntityNames) -> Vec<Artifact> {
    vec![
        Artifact {
            kind: ArtifactKind::Interface,
            path: PathBuf::from(format!(
                "repositories/interfaces/{}_repository_interface.rs",
                names.stem
            )),
            contents: interface_source(names),
        },
        Artifact {
            kind: ArtifactKind::Repository,
            path: PathBuf::from(format!("repositories/diesel/{}_repository.rs", names.stem)),
            contents: repository_source(names),
        },
        Artifact {
            kind: ArtifactKind::Service,
            path: PathBuf::from(format!("services/{}_service.rs", names.stem)),
            contents: service_source(names),
        },
        Artifact {
            kind: ArtifactKind::Request,
            path: PathBuf::from(format!("http/requests/{}_request.rs", names.stem)),
            contents: request_source(names),
        },
        Artifact {
            kind: ArtifactKind::Controller,
            path: PathBuf::from(format!(
                "http/controllers/api/{}_controller.rs",
                names.stem
            )),
            contents: controller_source(names),
        },
    ]
}

/// Repository contract trait with the five CRUD signatures.
fn interface_source(n: &EntityNames) -> String {
    format!(
        r#"use serde_json::Value;

use crate::models::{entity};
use crate::repositories::RepoResult;

pub trait {interface}: Send + Sync {{
    fn all(&self) -> RepoResult<Vec<{entity}>>;
    fn find(&self, id: i64) -> RepoResult<{entity}>;
    fn create(&self, data: Value) -> RepoResult<{entity}>;
    fn update(&self, id: i64, data: Value) -> RepoResult<{entity}>;
    fn delete(&self, id: i64) -> RepoResult<usize>;
}}
"#,
        entity = n.entity,
        interface = n.interface,
    )
}

/// Repository implementation delegating to the persistence model by name.
fn repository_source(n: &EntityNames) -> String {
    format!(
        r#"use serde_json::Value;

use crate::db::DbPool;
use crate::models::{entity};
use crate::repositories::interfaces::{stem}_repository_interface::{interface};
use crate::repositories::RepoResult;

pub struct {repository} {{
    pool: DbPool,
}}

impl {repository} {{
    pub fn new(pool: DbPool) -> Self {{
        Self {{ pool }}
    }}
}}

impl {interface} for {repository} {{
    fn all(&self) -> RepoResult<Vec<{entity}>> {{
        let mut conn = self.pool.get()?;
        {entity}::all(&mut conn)
    }}

    fn find(&self, id: i64) -> RepoResult<{entity}> {{
        let mut conn = self.pool.get()?;
        {entity}::find(&mut conn, id)
    }}

    fn create(&self, data: Value) -> RepoResult<{entity}> {{
        let mut conn = self.pool.get()?;
        {entity}::create(&mut conn, data)
    }}

    fn update(&self, id: i64, data: Value) -> RepoResult<{entity}> {{
        let mut conn = self.pool.get()?;
        {entity}::update(&mut conn, id, data)
    }}

    fn delete(&self, id: i64) -> RepoResult<usize> {{
        let mut conn = self.pool.get()?;
        {entity}::delete(&mut conn, id)
    }}
}}
"#,
        entity = n.entity,
        stem = n.stem,
        interface = n.interface,
        repository = n.repository,
    )
}

/// Service layer with constructor injection of the repository contract.
fn service_source(n: &EntityNames) -> String {
    format!(
        r#"use serde_json::Value;

use crate::models::{entity};
use crate::repositories::interfaces::{stem}_repository_interface::{interface};
use crate::repositories::RepoResult;

pub struct {service} {{
    repository: Box<dyn {interface}>,
}}

impl {service} {{
    pub fn new(repository: Box<dyn {interface}>) -> Self {{
        Self {{ repository }}
    }}

    pub fn all(&self) -> RepoResult<Vec<{entity}>> {{
        self.repository.all()
    }}

    pub fn find(&self, id: i64) -> RepoResult<{entity}> {{
        self.repository.find(id)
    }}

    pub fn create(&self, data: Value) -> RepoResult<{entity}> {{
        self.repository.create(data)
    }}

    pub fn update(&self, id: i64, data: Value) -> RepoResult<{entity}> {{
        self.repository.update(id, data)
    }}

    pub fn delete(&self, id: i64) -> RepoResult<usize> {{
        self.repository.delete(id)
    }}
}}
"#,
        entity = n.entity,
        stem = n.stem,
        interface = n.interface,
        service = n.service,
    )
}

/// Empty validation rule holder implementing the `FormRequest` capability.
fn request_source(n: &EntityNames) -> String {
    format!(
        r#"use crate::http::requests::{{FormRequest, ValidationRule}};

pub struct {request};

impl FormRequest for {request} {{
    fn rules(&self) -> Vec<ValidationRule> {{
        Vec::new()
    }}
}}
"#,
        request = n.request,
    )
}

/// API controller handlers delegating to the service layer.
fn controller_source(n: &EntityNames) -> String {
    format!(
        r#"use actix_web::{{web, HttpResponse, Responder}};
use serde_json::Value;

use crate::services::{stem}_service::{service};

pub async fn index(service: web::Data<{service}>) -> impl Responder {{
    match service.all() {{
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }}
}}

pub async fn store(service: web::Data<{service}>, payload: web::Json<Value>) -> impl Responder {{
    match service.create(payload.into_inner()) {{
        Ok(item) => HttpResponse::Created().json(item),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }}
}}

pub async fn show(service: web::Data<{service}>, id: web::Path<i64>) -> impl Responder {{
    match service.find(id.into_inner()) {{
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => HttpResponse::NotFound().body(err.to_string()),
    }}
}}

pub async fn update(
    service: web::Data<{service}>,
    id: web::Path<i64>,
    payload: web::Json<Value>,
) -> impl Responder {{
    match service.update(id.into_inner(), payload.into_inner()) {{
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }}
}}

pub async fn destroy(service: web::Data<{service}>, id: web::Path<i64>) -> impl Responder {{
    match service.delete(id.into_inner()) {{
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }}
}}
"#,
        stem = n.stem,
        service = n.service,
    )
}
