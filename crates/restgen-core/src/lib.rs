//! restgen core library
//!
//! This library turns a service's self-describing REST API into per-category
//! client classes. Each generated method is a thin pass-through that builds
//! the transport arguments from its formal parameters and delegates to a
//! shared `RestClient` collaborator.

pub mod api;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod format;
pub mod generate;
pub mod synthesize;

pub use crate::{
    api::RestApi,
    classify::{classify, Classification},
    config::Config,
    descriptor::{EndpointDescriptor, HttpVerb, Parameter},
    emit::{ClientEmitter, JavaScriptEmitter},
    error::{Error, Result},
    generate::{generate, generate_into},
    synthesize::{synthesize, MethodSpec},
};
