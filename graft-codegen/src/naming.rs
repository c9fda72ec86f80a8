//! Naming conventions shared by every generator.
//!
//! The schema document and the handler source are rendered independently but
//! must end up calling each other by the same composed names. All case
//! conversion, pluralization, and verb-prefixed operation naming therefore
//! lives here; the generator crates never concatenate name parts themselves.

use std::fmt;

/// Convert a string to PascalCase (e.g. "name_of_project" -> "NameOfProject").
///
/// Splits on underscores, dashes, and spaces; the first letter of each part
/// is uppercased and the rest kept as written, so already-Pascal input passes
/// through unchanged.
pub fn pascal(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g. "name_of_project" -> "nameOfProject").
pub fn camel(s: &str) -> String {
    let pascal = pascal(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g. "ProjectsClient" -> "projects_client").
pub fn snake(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap_or(c));
    }
    result.replace(['-', ' '], "_")
}

/// Pluralize an identifier by appending "s".
pub fn plural(s: &str) -> String {
    format!("{}s", s)
}

/// One of the five generated operations per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    List,
    Create,
    Update,
    Delete,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::List, Verb::Create, Verb::Update, Verb::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "Get",
            Verb::List => "List",
            Verb::Create => "Create",
            Verb::Update => "Update",
            Verb::Delete => "Delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The surface record type for an entity, e.g. ("projects", "project") ->
/// "ProjectsProject". Module-prefixed to avoid cross-module collisions.
pub fn type_name(module: &str, entity: &str) -> String {
    format!("{}{}", pascal(module), pascal(entity))
}

/// The paginated wrapper type, e.g. "MultiProjectsProject".
pub fn multi_type_name(module: &str, entity: &str) -> String {
    format!("Multi{}", type_name(module, entity))
}

/// The composed operation name, e.g. ("projects", List, "project") ->
/// "ProjectsListProjects". List operations pluralize the entity.
pub fn operation_name(module: &str, verb: Verb, entity: &str) -> String {
    let entity = match verb {
        Verb::List => plural(&pascal(entity)),
        _ => pascal(entity),
    };
    format!("{}{}{}", pascal(module), verb, entity)
}

/// The schema-document field name for an operation: the camelCase spelling of
/// [`operation_name`], e.g. "projectsListProjects".
pub fn query_field_name(module: &str, verb: Verb, entity: &str) -> String {
    camel(&operation_name(module, verb, entity))
}

/// The surface request record name, e.g. "ProjectsGetProjectRequest".
pub fn request_type_name(module: &str, verb: Verb, entity: &str) -> String {
    format!("{}Request", operation_name(module, verb, entity))
}

/// The surface response record name, e.g. "ProjectsCreateProjectResponse".
///
/// The Get response is the entity record itself ([`type_name`]); callers use
/// this for the remaining verbs.
pub fn response_type_name(module: &str, verb: Verb, entity: &str) -> String {
    format!("{}Response", operation_name(module, verb, entity))
}

/// The per-(module, service) resolver holder type, e.g. "OrdersBillingResolver".
pub fn resolver_type_name(module: &str, service: &str) -> String {
    format!("{}{}Resolver", pascal(module), pascal(service))
}

/// The resolver constructor, e.g. "NewOrdersBillingResolver".
pub fn resolver_ctor_name(module: &str, service: &str) -> String {
    format!("New{}", resolver_type_name(module, service))
}

/// The filter input type for an entity, e.g. "FilterProject".
pub fn filter_type_name(entity: &str) -> String {
    format!("Filter{}", pascal(entity))
}

/// The backend method name for a verb, e.g. (List, "project") ->
/// "ListProjects". Also the stem of the wire message names.
pub fn wire_method_name(verb: Verb, entity: &str) -> String {
    let entity = match verb {
        Verb::List => plural(&pascal(entity)),
        _ => pascal(entity),
    };
    format!("{}{}", verb, entity)
}

/// The backend request message name, without the "pb." qualifier,
/// e.g. (List, "project") -> "ListProjectsRequest".
pub fn wire_request_name(verb: Verb, entity: &str) -> String {
    format!("{}Request", wire_method_name(verb, entity))
}

/// The backend response message name, without the "pb." qualifier.
pub fn wire_response_name(verb: Verb, entity: &str) -> String {
    format!("{}Response", wire_method_name(verb, entity))
}

/// The handler source file name, e.g. ("projects", "client") ->
/// "projects_client.go".
pub fn handler_file_name(module: &str, service: &str) -> String {
    format!("{}_{}.go", snake(module), snake(service))
}
