//! The handler source generator.
//!
//! Assembles one Go resolver file per (module, service): record
//! declarations for every entity, converter functions emitted from
//! transcode plans, the five verb bridging functions per entity, and the
//! resolver holder type appended last.

use graft_codegen::naming::{self, Verb};
use graft_ir::{Entity, Service};

use crate::ast::GoFile;
use crate::shapes::{self, EntityShapes};
use crate::templates;
use crate::transcode::{self, Direction, RecordShape, TranscodeError};

pub struct HandlerGenerator<'a> {
    service: &'a Service,
    module: &'a str,
    /// Import path of the backend service; rewritten to a relative path by
    /// the orchestrator after the file lands on disk.
    backend_path: &'a str,
}

impl<'a> HandlerGenerator<'a> {
    pub fn new(service: &'a Service, module: &'a str, backend_path: &'a str) -> Self {
        Self {
            service,
            module,
            backend_path,
        }
    }

    /// The handler file name, composed from module and service names.
    pub fn file_name(&self) -> String {
        naming::handler_file_name(self.module, &self.service.name)
    }

    /// Build the handler file. Any wire/surface correspondence failure
    /// aborts the whole run; there is no per-entity partial success.
    pub fn generate(&self) -> Result<GoFile, TranscodeError> {
        let mut file = GoFile::new("resolvers");
        self.add_imports(&mut file);

        let entity_shapes: Vec<(&Entity, EntityShapes)> = self
            .service
            .entities
            .iter()
            .map(|e| (e, EntityShapes::build(self.module, e)))
            .collect();

        // Record declarations for every entity come first.
        for (_, es) in &entity_shapes {
            for shape in es.declarations() {
                file.add(&shapes::record_struct(shape));
            }
        }

        // The pagination converters are shared by every List bridge.
        file.add_raw(self.pagination_to_wire()?);
        file.add_raw(self.pagination_from_wire()?);

        for (entity, es) in &entity_shapes {
            for converter in self.entity_converters(entity, es)? {
                file.add_raw(converter);
            }
            for field in entity.searchable_enum_fields() {
                file.add_raw(templates::enum_nullable_builder(&naming::pascal(&field.name)));
            }
            for verb in Verb::ALL {
                file.add_raw(self.verb_function(entity, es, verb));
            }
        }

        file.add_raw(templates::resolver_struct(&self.resolver_name()));
        Ok(file)
    }

    /// Render the handler file to Go source text.
    pub fn render(&self) -> Result<String, TranscodeError> {
        Ok(self.generate()?.render())
    }

    fn add_imports(&self, file: &mut GoFile) {
        file.import("github.com/graph-gophers/graphql-go");
        if self.service.has_timestamp() {
            file.import("time");
            file.import("google.golang.org/protobuf/types/known/timestamppb");
        }
        if self.service.has_boxed_bool() {
            file.import("google.golang.org/protobuf/types/known/wrapperspb");
        }
        if self.service.has_searchable_enum() {
            file.import("google.golang.org/protobuf/types/known/structpb");
        }
        file.import(format!("{}/config", self.backend_path));
        file.import(format!("{}/server", self.backend_path));
        file.import_as(format!("{}/proto", self.backend_path), "pb");
    }

    fn resolver_name(&self) -> String {
        naming::resolver_type_name(self.module, &self.service.name)
    }

    /// The converter functions for one entity, in verb order.
    fn entity_converters(&self, entity: &Entity, es: &EntityShapes) -> Result<Vec<String>, TranscodeError> {
        let mut out = Vec::new();

        out.push(to_wire(&es.get_request, &shapes::wire_request(Verb::Get, entity), false)?);
        out.push(from_wire(&shapes::wire_response(Verb::Get, entity), &es.record)?);

        // One List item converts through the entity pair.
        out.push(from_wire(&shapes::wire_record(entity), &es.record)?);
        if let Some(filter) = &es.filter {
            out.push(to_wire(filter, &shapes::wire_filter(entity), false)?);
        }

        // The creation payload must not echo a caller-supplied identifier.
        out.push(to_wire(&es.create_request, &shapes::wire_request(Verb::Create, entity), true)?);
        out.push(from_wire(&shapes::wire_response(Verb::Create, entity), &es.create_response)?);

        out.push(to_wire(&es.update_request, &shapes::wire_request(Verb::Update, entity), false)?);
        out.push(from_wire(&shapes::wire_response(Verb::Update, entity), &es.update_response)?);

        out.push(to_wire(&es.delete_request, &shapes::wire_request(Verb::Delete, entity), false)?);
        out.push(from_wire(&shapes::wire_response(Verb::Delete, entity), &es.delete_response)?);

        Ok(out)
    }

    fn pagination_to_wire(&self) -> Result<String, TranscodeError> {
        let plan = transcode::plan(
            &shapes::pagination_input(),
            &shapes::wire_pagination_request(),
            Direction::SurfaceToWire,
            false,
        )?;
        Ok(plan.emit(&self.pagination_to_wire_name()))
    }

    fn pagination_from_wire(&self) -> Result<String, TranscodeError> {
        let plan = transcode::plan(
            &shapes::wire_pagination_response(),
            &shapes::pagination(),
            Direction::WireToSurface,
            false,
        )?;
        Ok(plan.emit(&self.pagination_from_wire_name()))
    }

    // The pagination records are declared once in the aggregator scaffold,
    // so their converters take a module prefix to stay unique per file.
    fn pagination_to_wire_name(&self) -> String {
        format!("{}PaginationInputToPbPaginationRequest", naming::camel(self.module))
    }

    fn pagination_from_wire_name(&self) -> String {
        format!("pbPaginationResponseTo{}Pagination", naming::pascal(self.module))
    }

    fn verb_function(&self, entity: &Entity, es: &EntityShapes, verb: Verb) -> String {
        let name = entity.name.as_str();
        let resolver = self.resolver_name();
        let function = naming::operation_name(self.module, verb, name);
        let wire_fn = naming::wire_method_name(verb, name);

        match verb {
            Verb::Get => templates::fill(
                templates::GET,
                &[
                    ("Resolver", resolver.as_str()),
                    ("Function", &function),
                    ("GoRequest", &es.get_request.name),
                    ("GoResponse", &es.record.name),
                    (
                        "ToWire",
                        &transcode::to_wire_fn_name(&es.get_request.name, &naming::wire_request_name(verb, name)),
                    ),
                    ("WireFn", &wire_fn),
                    (
                        "FromWire",
                        &transcode::from_wire_fn_name(&naming::wire_response_name(verb, name), &es.record.name),
                    ),
                ],
            ),
            Verb::List => {
                let filter_to_wire = es
                    .filter
                    .as_ref()
                    .map(|f| transcode::to_wire_fn_name(&f.name, &f.name));
                let enum_names: Vec<String> = entity
                    .searchable_enum_fields()
                    .iter()
                    .map(|f| naming::pascal(&f.name))
                    .collect();
                let filter_checks = templates::filter_checks(filter_to_wire.as_deref(), &enum_names);

                templates::fill(
                    templates::LIST,
                    &[
                        ("Resolver", resolver.as_str()),
                        ("Function", &function),
                        ("GoRequest", &es.list_request.name),
                        ("GoResponse", &es.list_response.name),
                        ("WireRequest", &naming::wire_request_name(verb, name)),
                        ("PaginationToWire", &self.pagination_to_wire_name()),
                        ("FilterChecks", &filter_checks),
                        ("WireFn", &wire_fn),
                        ("EntityPlural", &naming::plural(&naming::pascal(name))),
                        ("GoItem", &es.record.name),
                        (
                            "ItemFromWire",
                            &transcode::from_wire_fn_name(&naming::pascal(name), &es.record.name),
                        ),
                        ("PaginationFromWire", &self.pagination_from_wire_name()),
                        ("PluralField", &naming::plural(&es.record.name)),
                    ],
                )
            }
            Verb::Create => self.simple_verb(templates::CREATE, verb, &es.create_request, &es.create_response, entity),
            Verb::Update => self.simple_verb(templates::UPDATE, verb, &es.update_request, &es.update_response, entity),
            Verb::Delete => self.simple_verb(templates::DELETE, verb, &es.delete_request, &es.delete_response, entity),
        }
    }

    fn simple_verb(
        &self,
        template: &str,
        verb: Verb,
        request: &RecordShape,
        response: &RecordShape,
        entity: &Entity,
    ) -> String {
        let name = entity.name.as_str();
        templates::fill(
            template,
            &[
                ("Resolver", self.resolver_name().as_str()),
                ("Function", &naming::operation_name(self.module, verb, name)),
                ("GoRequest", &request.name),
                ("GoResponse", &response.name),
                (
                    "ToWire",
                    &transcode::to_wire_fn_name(&request.name, &naming::wire_request_name(verb, name)),
                ),
                ("WireFn", &naming::wire_method_name(verb, name)),
                (
                    "FromWire",
                    &transcode::from_wire_fn_name(&naming::wire_response_name(verb, name), &response.name),
                ),
            ],
        )
    }
}

fn to_wire(source: &RecordShape, target: &RecordShape, skip_id: bool) -> Result<String, TranscodeError> {
    let plan = transcode::plan(source, target, Direction::SurfaceToWire, skip_id)?;
    Ok(plan.emit(&transcode::to_wire_fn_name(&source.name, &target.name)))
}

fn from_wire(source: &RecordShape, target: &RecordShape) -> Result<String, TranscodeError> {
    let plan = transcode::plan(source, target, Direction::WireToSurface, false)?;
    Ok(plan.emit(&transcode::from_wire_fn_name(&source.name, &target.name)))
}
