//! Parameterized text templates for the per-verb bridging functions.
//!
//! Tokens are written `{{Name}}` and substituted verbatim; the filled blocks
//! are appended to the handler file as opaque chunks.

/// Substitute `{{Name}}` tokens in a template.
pub fn fill(template: &str, tokens: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in tokens {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

pub const GET: &str = r#"func (r *{{Resolver}}) {{Function}}(args {{GoRequest}}) (*{{GoResponse}}, error) {
	req, err := {{ToWire}}(args)
	if err != nil {
		return nil, err
	}
	result, err := r.srv.{{WireFn}}(nil, &req)
	if err != nil {
		return nil, err
	}
	resp := {{FromWire}}(*result)
	return &resp, nil
}
"#;

/// The List bridge assembles its wire request field by field: the search
/// text, the pagination sub-message, and the filter sub-message are each
/// guarded by a nil check so only caller-supplied parts cross the wire.
pub const LIST: &str = r#"func (r *{{Resolver}}) {{Function}}(args {{GoRequest}}) (*{{GoResponse}}, error) {
	req := pb.{{WireRequest}}{}
	if args.SearchBy != nil {
		req.SearchBy = *args.SearchBy
	}
	if args.Pagination != nil {
		reqPagination, err := {{PaginationToWire}}(*args.Pagination)
		if err != nil {
			return nil, err
		}
		req.Pagination = &reqPagination
	}
{{FilterChecks}}	result, err := r.srv.{{WireFn}}(nil, &req)
	if err != nil {
		return nil, err
	}
	resp{{EntityPlural}} := []*{{GoItem}}{}
	for _, item := range result.{{EntityPlural}} {
		resp := {{ItemFromWire}}(*item)
		resp{{EntityPlural}} = append(resp{{EntityPlural}}, &resp)
	}
	respPagination := {{PaginationFromWire}}(*result.Pagination)
	return &{{GoResponse}}{
		{{PluralField}}: resp{{EntityPlural}},
		Pagination: &respPagination,
	}, nil
}
"#;

pub const CREATE: &str = r#"func (r *{{Resolver}}) {{Function}}(args {{GoRequest}}) (graphql.ID, error) {
	req, err := {{ToWire}}(args)
	if err != nil {
		return "", err
	}
	result, err := r.srv.{{WireFn}}(nil, &req)
	if err != nil {
		return "", err
	}
	resp := {{FromWire}}(*result)
	return resp.ID, nil
}
"#;

pub const UPDATE: &str = r#"func (r *{{Resolver}}) {{Function}}(args {{GoRequest}}) (string, error) {
	req, err := {{ToWire}}(args)
	if err != nil {
		return "", err
	}
	result, err := r.srv.{{WireFn}}(nil, &req)
	if err != nil {
		return "", err
	}
	resp := {{FromWire}}(*result)
	return resp.Message, nil
}
"#;

pub const DELETE: &str = UPDATE;

const FILTER_CHECKS: &str = r#"	if args.FilterBy != nil {
		reqFilter, err := {{FilterToWire}}(*args.FilterBy)
		if err != nil {
			return nil, err
		}
{{EnumChecks}}		req.FilterBy = &reqFilter
	}
"#;

const ENUM_CHECK: &str = r#"		if args.FilterBy.{{EnumName}} != nil {
			reqFilter.{{EnumName}} = build{{EnumName}}NullableStruct(*args.FilterBy.{{EnumName}})
		}
"#;

/// The filter block for the List template, or an empty string when the
/// entity has no filter input.
pub fn filter_checks(filter_to_wire: Option<&str>, enum_names: &[String]) -> String {
    let Some(filter_to_wire) = filter_to_wire else {
        return String::new();
    };
    let enum_checks: String = enum_names
        .iter()
        .map(|name| fill(ENUM_CHECK, &[("EnumName", name)]))
        .collect();
    fill(
        FILTER_CHECKS,
        &[("FilterToWire", filter_to_wire), ("EnumChecks", &enum_checks)],
    )
}

const ENUM_BUILDER: &str = r#"func build{{EnumName}}NullableStruct(goStruct {{EnumName}}) *pb.Nullable{{EnumName}} {
	if goStruct.{{EnumName}} != nil {
		return &pb.Nullable{{EnumName}}{
			Kind: &pb.Nullable{{EnumName}}_{{EnumName}}{
				{{EnumName}}: pb.{{EnumName}}(pb.{{EnumName}}_value[*goStruct.{{EnumName}}]),
			},
		}
	}
	return &pb.Nullable{{EnumName}}{
		Kind: &pb.Nullable{{EnumName}}_Null{Null: structpb.NullValue_NULL_VALUE},
	}
}
"#;

/// The tri-state builder for one searchable enum: an explicit value carries
/// the discriminant, absence carries an explicit null.
pub fn enum_nullable_builder(enum_name: &str) -> String {
    fill(ENUM_BUILDER, &[("EnumName", enum_name)])
}

const RESOLVER: &str = r#"type {{Resolver}} struct {
	srv *server.Server
}

func New{{Resolver}}() {{Resolver}} {
	conf := config.MustLoadConfig()
	srv := server.MustLoadServer(conf)

	return {{Resolver}}{
		srv: srv,
	}
}
"#;

/// The resolver holder type and its constructor, appended once per file.
pub fn resolver_struct(resolver: &str) -> String {
    fill(RESOLVER, &[("Resolver", resolver)])
}
