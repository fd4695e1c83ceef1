//! JavaScript client-class emitter.
//!
//! Renders one ES6 class per resource category. Every method is a thin
//! pass-through: it assembles the transport arguments and delegates to the
//! shared `RestClient` parent received once at construction.

use super::ClientEmitter;
use crate::classify::classify;
use crate::descriptor::EndpointDescriptor;
use crate::error::{Error, Result};
use crate::synthesize::synthesize;

/// Category display name to generated class name. An absent entry is a fatal
/// configuration error, never a silent default.
const CATEGORIES: &[(&str, &str)] = &[
    ("Users", "Users"),
    ("Projects", "Projects"),
    ("Studies", "Studies"),
    ("Files", "Files"),
    ("Jobs", "Jobs"),
    ("Samples", "Samples"),
    ("Individuals", "Individuals"),
    ("Families", "Families"),
    ("Cohorts", "Cohorts"),
    ("Disease Panels", "Panels"),
    ("Analysis - Alignment", "Alignment"),
    ("Analysis - Variant", "Variant"),
    ("Analysis - Clinical Interpretation", "Clinical"),
    ("Operations - Variant Storage", "VariantOperations"),
    ("Meta", "Meta"),
    ("GA4GH", "GA4GH"),
    ("Admin", "Admin"),
];

const HEADER: &str = r#"/**
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 * http://www.apache.org/licenses/LICENSE-2.0
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * WARNING: AUTOGENERATED CODE. CHANGES MADE MANUALLY WILL BE LOST ON REGENERATION.
 **/

import RestClient from "./RestClient.js"

"#;

/// Emitter for the JavaScript target.
#[derive(Debug, Clone, Default)]
pub struct JavaScriptEmitter;

impl JavaScriptEmitter {
    pub fn new() -> Self {
        Self
    }

    fn class_definition(name: &str) -> String {
        format!(
            "/**\n * This class contains the methods for the \"{name}\" resource\n */\n\n\
             class {name} extends RestClient {{\n\n\
             {indent}constructor(config) {{\n\
             {indent}{indent}super(config);\n\
             {indent}}}\n",
            name = name,
            indent = "    "
        )
    }

    fn method_definition(endpoint: &EndpointDescriptor) -> String {
        let classification = classify(endpoint);
        let spec = synthesize(endpoint, &classification);
        format!(
            "{doc}    {name}({args}) {{\n        return this._{verb}({call});\n    }}\n",
            doc = spec.doc,
            name = spec.name,
            args = spec.formal_params.join(", "),
            verb = endpoint.verb.transport_call(),
            call = spec.call_expression,
        )
    }
}

impl ClientEmitter for JavaScriptEmitter {
    fn class_name(&self, category_name: &str) -> Result<&'static str> {
        CATEGORIES
            .iter()
            .find(|(name, _)| *name == category_name)
            .map(|(_, class)| *class)
            .ok_or_else(|| Error::UnknownCategory(category_name.to_string()))
    }

    fn file_name(&self, category_name: &str) -> Result<String> {
        Ok(format!("{}.js", self.class_name(category_name)?))
    }

    fn render(&self, category_name: &str, endpoints: &[EndpointDescriptor]) -> Result<String> {
        let class_name = self.class_name(category_name)?;

        let mut artifact = String::from(HEADER);
        artifact.push_str(&Self::class_definition(class_name));
        for endpoint in endpoints {
            artifact.push('\n');
            artifact.push_str(&Self::method_definition(endpoint));
        }
        artifact.push_str("\n}\n");
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RestCategory, RestEndpoint, RestParameter, TypeName};

    fn tree_endpoint() -> EndpointDescriptor {
        let category = RestCategory {
            name: "Files".to_string(),
            path: "/{apiVersion}/files".to_string(),
            endpoints: Vec::new(),
        };
        let endpoint = RestEndpoint {
            path: "/{apiVersion}/files/{folder}/tree".to_string(),
            method: "GET".to_string(),
            description: "Obtain a tree view of the files and folders within a folder."
                .to_string(),
            parameters: vec![
                RestParameter {
                    name: "folder".to_string(),
                    type_name: TypeName::String,
                    required: true,
                    default_value: ":".to_string(),
                    allowed_values: String::new(),
                    description: "Folder id or name.".to_string(),
                },
                RestParameter {
                    name: "maxDepth".to_string(),
                    type_name: TypeName::Integer,
                    required: false,
                    default_value: "5".to_string(),
                    allowed_values: String::new(),
                    description: "Maximum depth to get files from.".to_string(),
                },
            ],
        };
        EndpointDescriptor::from_rest(&category, &endpoint).unwrap()
    }

    #[test]
    fn test_unknown_category_is_fatal() {
        let emitter = JavaScriptEmitter::new();
        let err = emitter.class_name("Nonexistent").unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(name) if name == "Nonexistent"));
    }

    #[test]
    fn test_file_names() {
        let emitter = JavaScriptEmitter::new();
        assert_eq!(emitter.file_name("Files").unwrap(), "Files.js");
        assert_eq!(emitter.file_name("Disease Panels").unwrap(), "Panels.js");
        assert_eq!(
            emitter.file_name("Operations - Variant Storage").unwrap(),
            "VariantOperations.js"
        );
    }

    #[test]
    fn test_render_artifact_shape() {
        let emitter = JavaScriptEmitter::new();
        let artifact = emitter.render("Files", &[tree_endpoint()]).unwrap();

        assert!(artifact.starts_with("/**\n * Licensed under the Apache License"));
        assert!(artifact.contains("import RestClient from \"./RestClient.js\""));
        assert!(artifact.contains("class Files extends RestClient {"));
        assert!(artifact.contains("constructor(config) {"));
        assert!(artifact.contains("    tree(folder, params) {"));
        assert!(artifact.contains(
            "return this._get(\"files\", folder, null, null, \"tree\", params);"
        ));
        assert!(artifact.contains(
            "@param {Number} [params.maxDepth = \"5\"] - Maximum depth to get files from. The \
             default value is 5."
        ));
        assert!(artifact.ends_with("\n}\n"));
    }

    #[test]
    fn test_render_keeps_endpoint_order() {
        let emitter = JavaScriptEmitter::new();
        let category = RestCategory {
            name: "Files".to_string(),
            path: "/{apiVersion}/files".to_string(),
            endpoints: Vec::new(),
        };
        let mut endpoints = Vec::new();
        for action in ["search", "link", "create"] {
            let endpoint = RestEndpoint {
                path: format!("/{{apiVersion}}/files/{}", action),
                method: "GET".to_string(),
                description: String::new(),
                parameters: Vec::new(),
            };
            endpoints.push(EndpointDescriptor::from_rest(&category, &endpoint).unwrap());
        }
        let artifact = emitter.render("Files", &endpoints).unwrap();

        let search = artifact.find("search() {").unwrap();
        let link = artifact.find("link() {").unwrap();
        let create = artifact.find("create() {").unwrap();
        assert!(search < link && link < create);
    }
}
