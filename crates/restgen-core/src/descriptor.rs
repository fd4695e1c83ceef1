//! Resolved endpoint descriptor model.
//!
//! The raw API description ([`crate::api`]) carries each endpoint as a path
//! template plus a flat parameter list. This module resolves that into the
//! immutable [`EndpointDescriptor`] the rest of the generator works with: the
//! transport category, the optional subcategory, up to two path-variable
//! slots (`id1`, `id2`), the trailing action, and parameters annotated with
//! their path/body binding.
//!
//! Path templates follow the grammar
//! `/{apiVersion}/category[/{id1}][/subcategory[/{id2}]][/action...]`, e.g.
//! `/{apiVersion}/samples/{sample}/annotationSets/{annotationSet}/annotations/update`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::{RestCategory, RestEndpoint, RestParameter, TypeName};
use crate::error::{Error, Result};
use crate::format::to_snake_case;

/// By convention the request body travels under this parameter name.
pub const BODY_PARAM: &str = "data";

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([A-Za-z0-9_]+)\}$").expect("valid placeholder regex"));

/// HTTP verb of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
    Delete,
}

impl HttpVerb {
    pub fn parse(method: &str) -> Result<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpVerb::Get),
            "POST" => Ok(HttpVerb::Post),
            "DELETE" => Ok(HttpVerb::Delete),
            other => Err(Error::api(format!("unsupported HTTP verb '{}'", other))),
        }
    }

    /// Name of the transport helper the generated method delegates to.
    pub fn transport_call(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Delete => "delete",
        }
    }
}

/// One declared parameter, resolved against the endpoint's path template.
#[derive(Clone, Debug)]
pub struct Parameter {
    pub name: String,
    pub type_name: TypeName,
    pub required: bool,
    pub default_value: Option<String>,
    pub allowed_values: Vec<String>,
    pub description: String,
    /// True when the name matches a placeholder in the path template
    pub is_path: bool,
    /// True exactly when the (normalized) name is `data`
    pub is_body: bool,
}

/// One resolved REST operation. Immutable once constructed; the generator
/// never mutates it.
#[derive(Clone, Debug)]
pub struct EndpointDescriptor {
    /// Transport category: first segment of the category path (e.g. "files")
    pub category: String,
    /// Subcategory segments joined with `/`, when present (e.g. "annotationSets")
    pub subcategory: Option<String>,
    /// Full path template as declared
    pub path_template: String,
    pub verb: HttpVerb,
    /// Trailing action segments joined with `/` (e.g. "annotations/update")
    pub action: Option<String>,
    pub description: String,
    /// First path-variable placeholder name, when present
    pub id1: Option<String>,
    /// Second path-variable placeholder name, when present
    pub id2: Option<String>,
    /// Snake_case stem the method name is derived from
    pub method_stem: String,
    /// Declared parameters, declaration order preserved
    pub parameters: Vec<Parameter>,
}

impl EndpointDescriptor {
    /// Resolve a raw endpoint against its category.
    pub fn from_rest(category: &RestCategory, endpoint: &RestEndpoint) -> Result<Self> {
        let verb = HttpVerb::parse(&endpoint.method)?;

        let base_segments = path_segments(&category.path);
        let (transport_category, base_subcategory) = base_segments
            .split_first()
            .ok_or_else(|| Error::api(format!("empty category path '{}'", category.path)))?;

        // Segments of the endpoint path below the category path
        let endpoint_segments = path_segments(&endpoint.path);
        if !endpoint_segments.starts_with(&base_segments) {
            return Err(Error::api(format!(
                "endpoint path '{}' does not extend category path '{}'",
                endpoint.path, category.path
            )));
        }
        let remainder = &endpoint_segments[base_segments.len()..];

        let parts = resolve_remainder(&endpoint.path, remainder)?;

        let mut subcategory_segments: Vec<String> = base_subcategory.to_vec();
        subcategory_segments.extend(parts.subcategory);
        let subcategory = if subcategory_segments.is_empty() {
            None
        } else {
            Some(subcategory_segments.join("/"))
        };

        let action = if parts.action.is_empty() {
            None
        } else {
            Some(parts.action.join("/"))
        };

        let method_stem = method_stem(remainder, verb);

        let path_param_names: Vec<&str> =
            [&parts.id1, &parts.id2].iter().filter_map(|id| id.as_deref()).collect();
        let parameters = endpoint
            .parameters
            .iter()
            .map(|p| resolve_parameter(p, &path_param_names))
            .collect();

        Ok(Self {
            category: transport_category.clone(),
            subcategory,
            path_template: endpoint.path.clone(),
            verb,
            action,
            description: endpoint.description.clone(),
            id1: parts.id1,
            id2: parts.id2,
            method_stem,
            parameters,
        })
    }

    /// Names of the path parameters, `id1` first.
    pub fn path_param_names(&self) -> Vec<&str> {
        [&self.id1, &self.id2]
            .iter()
            .filter_map(|id| id.as_deref())
            .collect()
    }
}

struct PathParts {
    id1: Option<String>,
    id2: Option<String>,
    subcategory: Vec<String>,
    action: Vec<String>,
}

/// Split a path template into segments, dropping the `/{apiVersion}/` prefix.
fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != "{apiVersion}")
        .map(str::to_string)
        .collect()
}

fn placeholder_name(segment: &str) -> Option<&str> {
    PLACEHOLDER_RE
        .captures(segment)
        .map(|c| c.get(1).expect("placeholder capture group").as_str())
}

/// Bind the segments below the category path to the id/subcategory/action
/// slots. Placeholders bind `id1` (only in the leading position) then `id2`;
/// literal segments before the last placeholder extend the subcategory and
/// the trailing literal run is the action.
fn resolve_remainder(path: &str, remainder: &[String]) -> Result<PathParts> {
    let mut id1 = None;
    let mut id2 = None;
    let mut literals_seen: Vec<String> = Vec::new();
    let mut subcategory: Vec<String> = Vec::new();

    for segment in remainder {
        match placeholder_name(segment) {
            Some(name) => {
                if id1.is_none() && id2.is_none() && literals_seen.is_empty() {
                    id1 = Some(name.to_string());
                } else if id2.is_none() {
                    // A placeholder after a literal segment is the nested
                    // resource id even when the primary id slot is empty
                    // (e.g. "/samples/acl/{members}/update").
                    id2 = Some(name.to_string());
                    subcategory.append(&mut literals_seen);
                } else {
                    return Err(Error::api(format!(
                        "path '{}' declares more than two path parameters",
                        path
                    )));
                }
            }
            None => literals_seen.push(segment.clone()),
        }
    }

    // Whatever literal run is left after the last placeholder is the action,
    // except that with no placeholders at all a multi-segment run splits into
    // subcategory plus a final action segment ("/admin/catalog/indexStats").
    let action = if id1.is_none() && id2.is_none() && literals_seen.len() > 1 {
        let action = vec![literals_seen.pop().expect("non-empty literal run")];
        subcategory.append(&mut literals_seen);
        action
    } else {
        literals_seen
    };

    Ok(PathParts {
        id1,
        id2,
        subcategory,
        action,
    })
}

/// Derive the snake_case method-name stem from the literal path segments
/// below the category: the last two, reversed (`catalog/indexStats` becomes
/// `index_stats_catalog`). Falls back to the lowercased verb for bare
/// resource paths.
fn method_stem(remainder: &[String], verb: HttpVerb) -> String {
    let literals: Vec<&String> = remainder
        .iter()
        .filter(|s| placeholder_name(s).is_none())
        .collect();
    if literals.is_empty() {
        return verb.transport_call().to_string();
    }
    literals
        .iter()
        .rev()
        .take(2)
        .map(|s| to_snake_case(s))
        .collect::<Vec<_>>()
        .join("_")
}

fn resolve_parameter(param: &RestParameter, path_param_names: &[&str]) -> Parameter {
    // The request body arrives named "body"; normalize it to the
    // conventional "data".
    let name = if param.name == "body" {
        BODY_PARAM.to_string()
    } else {
        param.name.clone()
    };
    let is_body = name == BODY_PARAM;
    let is_path = path_param_names.contains(&name.as_str());

    let default_value = if param.default_value.is_empty() {
        None
    } else {
        Some(param.default_value.clone())
    };
    let allowed_values: Vec<String> = param
        .allowed_values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    Parameter {
        name,
        type_name: param.type_name,
        required: param.required,
        default_value,
        allowed_values,
        description: param.description.clone(),
        is_path,
        is_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, path: &str) -> RestCategory {
        RestCategory {
            name: name.to_string(),
            path: path.to_string(),
            endpoints: Vec::new(),
        }
    }

    fn endpoint(path: &str, method: &str) -> RestEndpoint {
        RestEndpoint {
            path: path.to_string(),
            method: method.to_string(),
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    fn param(name: &str, type_name: TypeName, required: bool) -> RestParameter {
        RestParameter {
            name: name.to_string(),
            type_name,
            required,
            default_value: String::new(),
            allowed_values: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_resolve_simple_action() {
        let cat = category("Files", "/{apiVersion}/files");
        let ep = endpoint("/{apiVersion}/files/{folder}/tree", "GET");
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();
        assert_eq!(desc.category, "files");
        assert_eq!(desc.id1.as_deref(), Some("folder"));
        assert_eq!(desc.id2, None);
        assert_eq!(desc.subcategory, None);
        assert_eq!(desc.action.as_deref(), Some("tree"));
        assert_eq!(desc.method_stem, "tree");
        assert_eq!(desc.verb, HttpVerb::Get);
    }

    #[test]
    fn test_resolve_nested_subresource() {
        let cat = category("Samples", "/{apiVersion}/samples");
        let ep = endpoint(
            "/{apiVersion}/samples/{sample}/annotationSets/{annotationSet}/annotations/update",
            "POST",
        );
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();
        assert_eq!(desc.id1.as_deref(), Some("sample"));
        assert_eq!(desc.subcategory.as_deref(), Some("annotationSets"));
        assert_eq!(desc.id2.as_deref(), Some("annotationSet"));
        assert_eq!(desc.action.as_deref(), Some("annotations/update"));
        assert_eq!(desc.method_stem, "update_annotations");
    }

    #[test]
    fn test_resolve_subcategory_id_without_primary_id() {
        let cat = category("Samples", "/{apiVersion}/samples");
        let ep = endpoint("/{apiVersion}/samples/acl/{members}/update", "POST");
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();
        assert_eq!(desc.id1, None);
        assert_eq!(desc.subcategory.as_deref(), Some("acl"));
        assert_eq!(desc.id2.as_deref(), Some("members"));
        assert_eq!(desc.action.as_deref(), Some("update"));
        assert_eq!(desc.method_stem, "update_acl");
    }

    #[test]
    fn test_resolve_literal_subcategory_and_action() {
        let cat = category("Admin", "/{apiVersion}/admin");
        let ep = endpoint("/{apiVersion}/admin/catalog/indexStats", "POST");
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();
        assert_eq!(desc.id1, None);
        assert_eq!(desc.subcategory.as_deref(), Some("catalog"));
        assert_eq!(desc.action.as_deref(), Some("indexStats"));
        assert_eq!(desc.method_stem, "index_stats_catalog");
    }

    #[test]
    fn test_resolve_multi_segment_category_path() {
        let cat = category("Analysis - Variant", "/{apiVersion}/analysis/variant");
        let ep = endpoint("/{apiVersion}/analysis/variant/query", "GET");
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();
        assert_eq!(desc.category, "analysis");
        assert_eq!(desc.subcategory.as_deref(), Some("variant"));
        assert_eq!(desc.action.as_deref(), Some("query"));
        assert_eq!(desc.method_stem, "query");
    }

    #[test]
    fn test_resolve_bare_resource_falls_back_to_verb() {
        let cat = category("Files", "/{apiVersion}/files");
        let ep = endpoint("/{apiVersion}/files/{file}", "GET");
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();
        assert_eq!(desc.action, None);
        assert_eq!(desc.method_stem, "get");
    }

    #[test]
    fn test_resolve_rejects_three_path_parameters() {
        let cat = category("Files", "/{apiVersion}/files");
        let ep = endpoint("/{apiVersion}/files/{a}/x/{b}/y/{c}/z", "GET");
        assert!(EndpointDescriptor::from_rest(&cat, &ep).is_err());
    }

    #[test]
    fn test_resolve_rejects_foreign_path() {
        let cat = category("Files", "/{apiVersion}/files");
        let ep = endpoint("/{apiVersion}/samples/search", "GET");
        assert!(EndpointDescriptor::from_rest(&cat, &ep).is_err());
    }

    #[test]
    fn test_rejects_unknown_verb() {
        let cat = category("Files", "/{apiVersion}/files");
        let ep = endpoint("/{apiVersion}/files/search", "PATCH");
        assert!(EndpointDescriptor::from_rest(&cat, &ep).is_err());
    }

    #[test]
    fn test_parameter_resolution() {
        let cat = category("Files", "/{apiVersion}/files");
        let mut ep = endpoint("/{apiVersion}/files/{files}/update", "POST");
        ep.parameters = vec![
            param("files", TypeName::String, true),
            {
                let mut p = param("samplesAction", TypeName::Enum, false);
                p.allowed_values = "ADD, SET, REMOVE".to_string();
                p.default_value = "ADD".to_string();
                p
            },
            param("body", TypeName::Object, false),
        ];
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();

        let files = &desc.parameters[0];
        assert!(files.is_path && !files.is_body);

        let action = &desc.parameters[1];
        assert_eq!(
            action.allowed_values,
            vec!["ADD".to_string(), "SET".to_string(), "REMOVE".to_string()]
        );
        assert_eq!(action.default_value.as_deref(), Some("ADD"));

        let body = &desc.parameters[2];
        assert_eq!(body.name, "data");
        assert!(body.is_body && !body.is_path);
    }

    #[test]
    fn test_path_param_names_order() {
        let cat = category("Samples", "/{apiVersion}/samples");
        let ep = endpoint(
            "/{apiVersion}/samples/{sample}/annotationSets/{annotationSet}/annotations/update",
            "POST",
        );
        let desc = EndpointDescriptor::from_rest(&cat, &ep).unwrap();
        assert_eq!(desc.path_param_names(), vec!["sample", "annotationSet"]);
    }
}
