//! The schema document generator.

use graft_codegen::naming::{self, Verb};
use graft_ir::{Entity, Service};

use crate::ast::{Document, FieldDef, InputType, InputValue, ObjectType, TypeExtension};
use crate::type_map;

/// Builds the schema document for one service under one module name.
pub struct SchemaGenerator<'a> {
    service: &'a Service,
    module: &'a str,
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(service: &'a Service, module: &'a str) -> Self {
        Self { service, module }
    }

    /// Build the document tree: the two global pagination types first, then
    /// per entity the filter inputs, the object type, its Multi wrapper, and
    /// the Query/Mutation extensions.
    pub fn generate(&self) -> Document {
        let mut doc = Document::new();
        self.add_pagination_types(&mut doc);
        for entity in &self.service.entities {
            let has_filter = self.add_filter_types(&mut doc, entity);
            self.add_entity_type(&mut doc, entity);
            self.add_multi_type(&mut doc, entity);
            self.extend_query(&mut doc, entity, has_filter);
            self.extend_mutation(&mut doc, entity);
        }
        doc
    }

    /// Render the document to SDL text.
    pub fn render(&self) -> String {
        self.generate().render()
    }

    fn add_pagination_types(&self, doc: &mut Document) {
        doc.push(
            ObjectType::new("Pagination")
                .field(FieldDef::new("Limit", "Int"))
                .field(FieldDef::new("Offset", "Int"))
                .field(FieldDef::new("Total", "Int")),
        );
        doc.push(
            InputType::new("PaginationInput")
                .field("Limit", "Int")
                .field("Offset", "Int"),
        );
    }

    /// Add the filter input for an entity, plus one nullable-wrapper input
    /// per searchable enum field. Returns false (and emits nothing) when no
    /// field qualifies, in which case the list query takes no filter argument.
    fn add_filter_types(&self, doc: &mut Document, entity: &Entity) -> bool {
        let mut filter = InputType::new(naming::filter_type_name(&entity.name));
        for field in entity.filterable_fields() {
            filter = filter.field(naming::camel(&field.name), type_map::filter_type(field));
            if field.ty == graft_ir::FieldType::Enum {
                // SDL has no tri-state scalar; the wrapper distinguishes
                // "unset" from an explicit value.
                doc.push(
                    InputType::new(naming::pascal(&field.name))
                        .field("nullable", "String")
                        .field(naming::camel(&field.name), "String"),
                );
            }
        }
        if filter.is_empty() {
            return false;
        }
        doc.push(filter);
        true
    }

    fn add_entity_type(&self, doc: &mut Document, entity: &Entity) {
        let mut object = ObjectType::new(naming::type_name(self.module, &entity.name))
            .field(FieldDef::new("id", "ID!"));
        for field in &entity.fields {
            object = object.field(FieldDef::new(
                naming::camel(&field.name),
                type_map::field_type(field),
            ));
        }
        doc.push(object);
    }

    fn add_multi_type(&self, doc: &mut Document, entity: &Entity) {
        let type_name = naming::type_name(self.module, &entity.name);
        doc.push(
            ObjectType::new(naming::multi_type_name(self.module, &entity.name))
                .field(FieldDef::new(
                    naming::plural(&naming::camel(&type_name)),
                    format!("[{}]!", type_name),
                ))
                .field(FieldDef::new("pagination", "Pagination")),
        );
    }

    fn extend_query(&self, doc: &mut Document, entity: &Entity, has_filter: bool) {
        let get = FieldDef::new(
            naming::query_field_name(self.module, Verb::Get, &entity.name),
            naming::type_name(self.module, &entity.name),
        )
        .arg("id", "ID!");

        let mut list = FieldDef::new(
            naming::query_field_name(self.module, Verb::List, &entity.name),
            format!("{}!", naming::multi_type_name(self.module, &entity.name)),
        )
        .arg("pagination", "PaginationInput")
        .arg("searchBy", "String");
        if has_filter {
            list = list.arg("filterBy", naming::filter_type_name(&entity.name));
        }

        doc.push(TypeExtension::query().field(get).field(list));
    }

    fn extend_mutation(&self, doc: &mut Document, entity: &Entity) {
        let field_args = |entity: &Entity| {
            entity
                .fields
                .iter()
                .map(|f| InputValue::new(naming::camel(&f.name), type_map::field_type(f)))
                .collect::<Vec<_>>()
        };

        // Create takes every field except the identifier and returns the new id.
        let create = FieldDef::new(
            naming::query_field_name(self.module, Verb::Create, &entity.name),
            "ID!",
        )
        .args(field_args(entity));

        // Update takes the identifier plus every field and returns a status string.
        let update = FieldDef::new(
            naming::query_field_name(self.module, Verb::Update, &entity.name),
            "String!",
        )
        .arg("id", "ID!")
        .args(field_args(entity));

        let delete = FieldDef::new(
            naming::query_field_name(self.module, Verb::Delete, &entity.name),
            "String!",
        )
        .arg("id", "ID!");

        doc.push(TypeExtension::mutation().field(create).field(update).field(delete));
    }
}

#[cfg(test)]
mod tests {
    use graft_ir::{Field, FieldType};

    use super::*;

    fn service(entities: Vec<Entity>) -> Service {
        Service {
            name: "client".into(),
            enums: vec![],
            entities,
        }
    }

    #[test]
    fn filter_argument_present_iff_filterable_field_exists() {
        let with = service(vec![
            Entity::new("project").field(Field::new("verified", FieldType::Bool).searchable()),
        ]);
        let without = service(vec![
            Entity::new("project").field(Field::new("verified", FieldType::Bool)),
        ]);

        let rendered = SchemaGenerator::new(&with, "test").render();
        assert!(rendered.contains("input FilterProject {"));
        assert!(rendered.contains("filterBy: FilterProject"));

        let rendered = SchemaGenerator::new(&without, "test").render();
        assert!(!rendered.contains("FilterProject"));
        assert!(!rendered.contains("filterBy"));
    }

    #[test]
    fn searchable_string_does_not_produce_filter() {
        let svc = service(vec![
            Entity::new("project").field(Field::new("name", FieldType::Str).searchable()),
        ]);
        let rendered = SchemaGenerator::new(&svc, "test").render();
        assert!(!rendered.contains("filterBy"));
    }

    #[test]
    fn searchable_enum_emits_nullable_wrapper_input() {
        let svc = service(vec![
            Entity::new("project").field(Field::new("project_type", FieldType::Enum).searchable()),
        ]);
        let rendered = SchemaGenerator::new(&svc, "test").render();
        assert!(rendered.contains("input ProjectType {\n  nullable: String\n  projectType: String\n}"));
        assert!(rendered.contains("projectType: ProjectType"));
    }

    #[test]
    fn pagination_types_emitted_once_regardless_of_entity_count() {
        let svc = service(vec![Entity::new("a"), Entity::new("b")]);
        let rendered = SchemaGenerator::new(&svc, "test").render();
        assert_eq!(rendered.matches("type Pagination {").count(), 1);
        assert_eq!(rendered.matches("input PaginationInput {").count(), 1);
    }
}
