//! Method synthesis: signature, transport call expression and documentation.
//!
//! Consumes a classified endpoint and produces everything the emitter needs
//! to write one client method: the method name, the ordered formal-parameter
//! list, the argument expression handed to the transport helper and the
//! JSDoc block.

use crate::classify::Classification;
use crate::descriptor::{EndpointDescriptor, Parameter};
use crate::format::{to_lower_camel_case, wrap_join, DisplayType};

/// Documentation column limit: 140 columns minus the 6 the doc indentation
/// uses inside the generated class body.
pub const DOC_WIDTH: usize = 134;

/// Name of the trailing catch-all parameter absorbing optional query values.
pub const OPTIONS_PARAM: &str = "params";

/// Everything needed to emit one generated method.
#[derive(Debug)]
pub struct MethodSpec {
    /// lowerCamelCase method name
    pub name: String,
    /// Ordered formal parameters: id1, id2, mandatory query, `data`, `params`
    pub formal_params: Vec<String>,
    /// Argument expression passed to the transport helper
    pub call_expression: String,
    /// JSDoc block, indented for the class body
    pub doc: String,
}

/// Synthesize the method for one endpoint.
pub fn synthesize(endpoint: &EndpointDescriptor, classification: &Classification) -> MethodSpec {
    let mandatory: Vec<String> = classification
        .mandatory_query
        .iter()
        .map(|p| to_lower_camel_case(&p.name))
        .collect();
    let has_body = classification.body_param.is_some();

    let mut formal_params = Vec::new();
    formal_params.extend(endpoint.id1.as_deref().map(to_lower_camel_case));
    formal_params.extend(endpoint.id2.as_deref().map(to_lower_camel_case));
    formal_params.extend(mandatory.iter().cloned());
    if has_body {
        formal_params.push("data".to_string());
    }
    if classification.needs_options_bag {
        formal_params.push(OPTIONS_PARAM.to_string());
    }

    MethodSpec {
        name: to_lower_camel_case(&endpoint.method_stem),
        formal_params,
        call_expression: call_expression(endpoint, classification, &mandatory),
        doc: method_doc(endpoint),
    }
}

/// Assemble the argument expression of the transport call:
/// `"category", id1|null, "subcategory"|null, id2|null, "action"|null`
/// followed by the body and the query representation when present.
fn call_expression(
    endpoint: &EndpointDescriptor,
    classification: &Classification,
    mandatory: &[String],
) -> String {
    let mut args = vec![
        format!("\"{}\"", endpoint.category),
        endpoint
            .id1
            .as_deref()
            .map(to_lower_camel_case)
            .unwrap_or_else(|| "null".to_string()),
        endpoint
            .subcategory
            .as_deref()
            .map(|s| format!("\"{}\"", s))
            .unwrap_or_else(|| "null".to_string()),
        endpoint
            .id2
            .as_deref()
            .map(to_lower_camel_case)
            .unwrap_or_else(|| "null".to_string()),
        endpoint
            .action
            .as_deref()
            .map(|a| format!("\"{}\"", a))
            .unwrap_or_else(|| "null".to_string()),
    ];
    if classification.body_param.is_some() {
        args.push("data".to_string());
    }
    if let Some(query) = query_representation(classification, mandatory) {
        args.push(query);
    }
    args.join(", ")
}

/// Build the query representation sent to the transport helper.
///
/// The options bag is spread first so that on a key collision the explicitly
/// named mandatory value wins over whatever the caller stuffed into the bag.
fn query_representation(classification: &Classification, mandatory: &[String]) -> Option<String> {
    if classification.needs_options_bag {
        if mandatory.is_empty() {
            // Nothing to merge: pass the caller's bag through unchanged
            Some(OPTIONS_PARAM.to_string())
        } else {
            Some(format!(
                "{{...{}, {}}}",
                OPTIONS_PARAM,
                mandatory.join(", ")
            ))
        }
    } else if mandatory.len() > 1 {
        Some(format!("{{{}}}", mandatory.join(", ")))
    } else {
        // A single mandatory parameter collapses to its bare value
        mandatory.first().cloned()
    }
}

/// Build the JSDoc block: wrapped description, one `@param` line per declared
/// parameter grouped as path+body, then mandatory query, then the options bag
/// members, and a fixed `@returns` trailer.
fn method_doc(endpoint: &EndpointDescriptor) -> String {
    let mut path_and_body = Vec::new();
    let mut mandatory = Vec::new();
    let mut options = Vec::new();

    for param in &endpoint.parameters {
        let line = param_doc_line(param);
        if param.is_path || param.is_body {
            path_and_body.push(line);
        } else if param.required {
            mandatory.push(line);
        } else {
            options.push(line);
        }
    }
    if !options.is_empty() {
        options.insert(
            0,
            format!(
                "@param {{Object}} [{}] - The Object containing the following optional parameters",
                OPTIONS_PARAM
            ),
        );
    }

    let mut lines = vec![format!(
        "/** {}",
        wrap_join(&endpoint.description, DOC_WIDTH, "\n    * ")
    )];
    for line in path_and_body.into_iter().chain(mandatory).chain(options) {
        lines.push(wrap_join(&line, DOC_WIDTH, "\n    *     "));
    }
    lines.push("@returns {Promise} Promise object in the form of RestResponse instance".to_string());

    format!("    {}\n    */\n", lines.join("\n    * "))
}

fn param_doc_line(param: &Parameter) -> String {
    let name = to_lower_camel_case(&param.name);
    let display = DisplayType::new(param.type_name, &param.allowed_values).js();

    let named = match &param.default_value {
        Some(default) => format!("{} = \"{}\"", name, default),
        None => name,
    };
    let named = if param.is_path || param.is_body {
        if param.required {
            named
        } else {
            format!("[{}]", named)
        }
    } else if param.required {
        named
    } else {
        format!("[{}.{}]", OPTIONS_PARAM, named)
    };

    let mut description = param.description.clone();
    if let Some(default) = &param.default_value {
        if !description.is_empty() && !description.ends_with(' ') {
            description.push(' ');
        }
        description.push_str(&format!("The default value is {}.", default));
    }

    format!("@param {{{}}} {} - {}", display, named, description)
}
