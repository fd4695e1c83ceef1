//! Parameter classification.
//!
//! Partitions the declared parameters of an endpoint into path parameters,
//! mandatory query parameters, optional query parameters and the body
//! parameter, and decides whether the generated method needs a trailing
//! options bag. Classification is total: every parameter lands in exactly
//! one bucket, and an endpoint with no parameters yields all-empty buckets.

use crate::descriptor::{EndpointDescriptor, Parameter};

/// Result of classifying an endpoint's parameters. All lists preserve
/// declaration order.
#[derive(Debug)]
pub struct Classification<'a> {
    pub path_params: Vec<&'a Parameter>,
    pub mandatory_query: Vec<&'a Parameter>,
    pub optional_query: Vec<&'a Parameter>,
    pub body_param: Option<&'a Parameter>,
    /// Whether the generated method takes a trailing options bag absorbing
    /// the optional, non-path parameters.
    pub needs_options_bag: bool,
}

/// Classify every parameter of `endpoint`. First matching rule wins:
/// body, then path, then required, else optional query.
pub fn classify(endpoint: &EndpointDescriptor) -> Classification<'_> {
    let mut classification = Classification {
        path_params: Vec::new(),
        mandatory_query: Vec::new(),
        optional_query: Vec::new(),
        body_param: None,
        needs_options_bag: false,
    };

    for param in &endpoint.parameters {
        if param.is_body {
            // Only one body parameter exists per the descriptor invariants;
            // the first one claims the slot.
            classification.body_param.get_or_insert(param);
        } else if param.is_path {
            classification.path_params.push(param);
        } else if param.required {
            classification.mandatory_query.push(param);
        } else {
            classification.optional_query.push(param);
        }
    }

    // Re-derived independently of the buckets above: any optional parameter
    // not bound to a path slot (the body included) ends up in the bag.
    let path_names = endpoint.path_param_names();
    classification.needs_options_bag = endpoint
        .parameters
        .iter()
        .any(|p| !p.required && !path_names.contains(&p.name.as_str()));

    classification
}
