//! The record transcoder.
//!
//! Converts between two structurally-similar record shapes: the surface
//! shape exposed to GraphQL callers and the wire shape the gRPC backend
//! speaks. Fields correspond by case-insensitive name; conversions are
//! type-directed (the wire field's declared type decides, never its name).
//!
//! Matching runs at generation time: [`plan`] builds the correspondence and
//! fails the whole run on any mismatch, and [`Plan::emit`] renders the plan
//! as a pure Go conversion function with direct field assignments. A shape
//! drift is therefore caught before the generated code ever ships.

use std::fmt;

use graft_codegen::{CodeBuilder, Indent, naming};
use indexmap::IndexMap;
use thiserror::Error;

/// Wire-side bookkeeping fields that never take part in transcoding,
/// matched case-insensitively (stored in canonical caps form).
pub const RESERVED_FIELDS: &[&str] = &["STATE", "SIZECACHE", "UNKNOWNFIELDS"];

/// The type of one shape field, as far as transcoding is concerned.
///
/// Surface shapes use `Id`, `Str`, `Int32`, `Bool`, and `Named`; wire shapes
/// use `Str`, `Int32`, `Uint32`, `Bool`, `BoxedBool`, `Timestamp`, `Enum`,
/// and `Internal`. Enums and timestamps travel as plain strings on the
/// surface, so those conversions are recognized from the wire side alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeType {
    /// Surface identifier (`graphql.ID`); `string` on the wire.
    Id,
    Str,
    Int32,
    Uint32,
    Bool,
    /// The boxed boolean (`*wrapperspb.BoolValue`): skipped entirely when absent.
    BoxedBool,
    /// `*timestamppb.Timestamp`; RFC 3339 text on the surface.
    Timestamp,
    /// A named wire enum; its symbolic name on the surface.
    Enum(String),
    /// A reference to another generated record; never transcoded here, the
    /// bridging templates build these sub-messages explicitly.
    Named(String),
    /// Wire bookkeeping (framework state, cached size, unknown-field bag).
    Internal,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Id => f.write_str("graphql.ID"),
            ShapeType::Str => f.write_str("string"),
            ShapeType::Int32 => f.write_str("int32"),
            ShapeType::Uint32 => f.write_str("uint32"),
            ShapeType::Bool => f.write_str("bool"),
            ShapeType::BoxedBool => f.write_str("*wrapperspb.BoolValue"),
            ShapeType::Timestamp => f.write_str("*timestamppb.Timestamp"),
            ShapeType::Enum(name) => write!(f, "enum {}", name),
            ShapeType::Named(name) => f.write_str(name),
            ShapeType::Internal => f.write_str("internal"),
        }
    }
}

/// One field of a record shape.
#[derive(Debug, Clone)]
pub struct ShapeField {
    pub name: String,
    pub ty: ShapeType,
    pub optional: bool,
    pub repeated: bool,
}

impl ShapeField {
    pub fn new(name: impl Into<String>, ty: ShapeType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            repeated: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }
}

/// A record shape: an ordered field list under a type name.
#[derive(Debug, Clone)]
pub struct RecordShape {
    pub name: String,
    pub fields: Vec<ShapeField>,
}

impl RecordShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: ShapeField) -> Self {
        self.fields.push(field);
        self
    }

    /// Map from the caps-normalized field name to the field, preserving
    /// declaration order.
    fn caps_name_map(&self) -> IndexMap<String, &ShapeField> {
        self.fields
            .iter()
            .map(|f| (f.name.to_uppercase(), f))
            .collect()
    }
}

/// Which way a plan converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    SurfaceToWire,
    WireToSurface,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscodeError {
    /// The shapes have drifted apart: these target fields have no
    /// case-insensitive counterpart on the source shape. All mismatches for
    /// a pair are collected before failing.
    #[error("no field in {shape} matches {missing:?} (case-insensitive)")]
    MissingCounterparts { shape: String, missing: Vec<String> },

    #[error("field '{field}': no conversion from {from} to {to}")]
    Unsupported {
        field: String,
        from: String,
        to: String,
    },
}

/// One conversion step, selected from the (source type, target type) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Copy,
    Cast(&'static str),
    CastElems(&'static str),
    EnumEncode(String),
    EnumDecode,
    TimestampEncode,
    TimestampDecode,
    BoolWrap,
    BoolUnwrap,
}

#[derive(Debug, Clone)]
struct Assign {
    src: ShapeField,
    dst: ShapeField,
    step: Step,
}

/// A validated field correspondence between two shapes, ready to emit.
#[derive(Debug, Clone)]
pub struct Plan {
    source: String,
    target: String,
    direction: Direction,
    assigns: Vec<Assign>,
}

/// Build the conversion plan from `source` into `target`.
///
/// Every target field that is not reserved, not internal, and (with
/// `skip_id`) not the identifier must have a same-named source field;
/// otherwise the pair is inconsistent with the generator's conventions and
/// the whole generation run must abort.
pub fn plan(
    source: &RecordShape,
    target: &RecordShape,
    direction: Direction,
    skip_id: bool,
) -> Result<Plan, TranscodeError> {
    let source_map = source.caps_name_map();
    let mut assigns = Vec::new();
    let mut missing = Vec::new();

    for dst in &target.fields {
        let key = dst.name.to_uppercase();
        if RESERVED_FIELDS.contains(&key.as_str()) || dst.ty == ShapeType::Internal {
            continue;
        }
        if skip_id && key == "ID" {
            continue;
        }
        let Some(src) = source_map.get(&key) else {
            missing.push(dst.name.clone());
            continue;
        };
        let step = conversion_step(src, dst)?;
        assigns.push(Assign {
            src: (*src).clone(),
            dst: dst.clone(),
            step,
        });
    }

    if !missing.is_empty() {
        return Err(TranscodeError::MissingCounterparts {
            shape: source.name.clone(),
            missing,
        });
    }

    Ok(Plan {
        source: source.name.clone(),
        target: target.name.clone(),
        direction,
        assigns,
    })
}

fn conversion_step(src: &ShapeField, dst: &ShapeField) -> Result<Step, TranscodeError> {
    use ShapeType::*;

    if src.repeated != dst.repeated {
        return Err(TranscodeError::Unsupported {
            field: dst.name.clone(),
            from: src.ty.to_string(),
            to: dst.ty.to_string(),
        });
    }

    let step = match (&src.ty, &dst.ty) {
        (Id, Str) => cast_step(src, "string"),
        (Str, Id) => cast_step(src, "graphql.ID"),
        (Id, Id) | (Str, Str) | (Int32, Int32) | (Uint32, Uint32) | (Bool, Bool) => Step::Copy,
        (Int32, Uint32) => cast_step(src, "uint32"),
        (Uint32, Int32) => cast_step(src, "int32"),
        (Bool, BoxedBool) => Step::BoolWrap,
        (BoxedBool, Bool) => Step::BoolUnwrap,
        (Str, Timestamp) => Step::TimestampEncode,
        (Timestamp, Str) => Step::TimestampDecode,
        (Str, Enum(name)) => Step::EnumEncode(name.clone()),
        (Enum(_), Str) => Step::EnumDecode,
        (from, to) => {
            return Err(TranscodeError::Unsupported {
                field: dst.name.clone(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    };
    Ok(step)
}

fn cast_step(src: &ShapeField, to: &'static str) -> Step {
    if src.repeated {
        Step::CastElems(to)
    } else {
        Step::Cast(to)
    }
}

/// Converter name for a surface-to-wire function.
pub fn to_wire_fn_name(surface: &str, wire: &str) -> String {
    format!("{}ToPb{}", naming::camel(surface), wire)
}

/// Converter name for a wire-to-surface function.
pub fn from_wire_fn_name(wire: &str, surface: &str) -> String {
    format!("pb{}To{}", wire, surface)
}

impl Plan {
    /// Render the plan as one Go conversion function.
    pub fn emit(&self, fn_name: &str) -> String {
        match self.direction {
            Direction::SurfaceToWire => self.emit_to_wire(fn_name),
            Direction::WireToSurface => self.emit_from_wire(fn_name),
        }
    }

    /// Surface-to-wire converters return `(T, error)`: parsing a textual
    /// timestamp can fail at run time.
    fn emit_to_wire(&self, fn_name: &str) -> String {
        let mut b = CodeBuilder::new(Indent::GO)
            .line(&format!(
                "func {}(src {}) (pb.{}, error) {{",
                fn_name, self.source, self.target
            ))
            .indent()
            .line(&format!("var dst pb.{}", self.target));
        for assign in &self.assigns {
            b = emit_to_wire_assign(b, assign);
        }
        b.line("return dst, nil").dedent().line("}").build()
    }

    fn emit_from_wire(&self, fn_name: &str) -> String {
        let mut b = CodeBuilder::new(Indent::GO)
            .line(&format!(
                "func {}(src pb.{}) {} {{",
                fn_name, self.source, self.target
            ))
            .indent()
            .line(&format!("var dst {}", self.target));
        for assign in &self.assigns {
            b = emit_from_wire_assign(b, assign);
        }
        b.line("return dst").dedent().line("}").build()
    }
}

fn emit_to_wire_assign(b: CodeBuilder, a: &Assign) -> CodeBuilder {
    let src = format!("src.{}", a.src.name);
    let dst = format!("dst.{}", a.dst.name);

    match &a.step {
        Step::Copy | Step::Cast(_) | Step::EnumEncode(_) => {
            let value = |expr: String| match &a.step {
                Step::Copy => expr,
                Step::Cast(to) => format!("{}({})", to, expr),
                Step::EnumEncode(name) => format!("pb.{}(pb.{}_value[{}])", name, name, expr),
                _ => unreachable!(),
            };
            if a.src.optional {
                b.line(&format!("if {} != nil {{", src))
                    .indent()
                    .line(&format!("{} = {}", dst, value(format!("*{}", src))))
                    .dedent()
                    .line("}")
            } else {
                b.line(&format!("{} = {}", dst, value(src)))
            }
        }
        Step::CastElems(to) => emit_cast_elems(b, &src, &dst, to),
        Step::BoolWrap => b
            .line(&format!("if {} != nil {{", src))
            .indent()
            .line(&format!("{} = wrapperspb.Bool(*{})", dst, src))
            .dedent()
            .line("}"),
        Step::TimestampEncode => {
            let tmp = format!("{}Time", naming::camel(&a.src.name));
            if a.src.optional {
                b.line(&format!("if {} != nil {{", src))
                    .indent()
                    .line(&format!("{}, err := time.Parse(time.RFC3339, *{})", tmp, src))
                    .block_with_close("if err != nil {", "}", |b| b.line("return dst, err"))
                    .line(&format!("{} = timestamppb.New({})", dst, tmp))
                    .dedent()
                    .line("}")
            } else {
                b.line(&format!("{}, err := time.Parse(time.RFC3339, {})", tmp, src))
                    .block_with_close("if err != nil {", "}", |b| b.line("return dst, err"))
                    .line(&format!("{} = timestamppb.New({})", dst, tmp))
            }
        }
        Step::EnumDecode | Step::TimestampDecode | Step::BoolUnwrap => {
            unreachable!("decode step in a surface-to-wire plan")
        }
    }
}

fn emit_from_wire_assign(b: CodeBuilder, a: &Assign) -> CodeBuilder {
    let src = format!("src.{}", a.src.name);
    let dst = format!("dst.{}", a.dst.name);
    // Temporaries take the field's camel name so one function can hold
    // several without colliding.
    let tmp = format!("{}Val", naming::camel(&a.dst.name));

    let assign_value = |b: CodeBuilder, value: String| {
        if a.dst.optional {
            b.line(&format!("{} := {}", tmp, value))
                .line(&format!("{} = &{}", dst, tmp))
        } else {
            b.line(&format!("{} = {}", dst, value))
        }
    };

    match &a.step {
        Step::Copy => assign_value(b, src),
        Step::Cast(to) => {
            let value = format!("{}({})", to, src);
            assign_value(b, value)
        }
        Step::EnumDecode => assign_value(b, format!("{}.String()", src)),
        Step::CastElems(to) => emit_cast_elems(b, &src, &dst, to),
        Step::BoolUnwrap => {
            // Absence of the boxed boolean is not an error; the field is
            // skipped entirely.
            let b = b.line(&format!("if {} != nil {{", src)).indent();
            assign_value(b, format!("{}.GetValue()", src)).dedent().line("}")
        }
        Step::TimestampDecode => {
            let b = b.line(&format!("if {} != nil {{", src)).indent();
            assign_value(b, format!("{}.AsTime().UTC().Format(time.RFC3339)", src))
                .dedent()
                .line("}")
        }
        Step::EnumEncode(_) | Step::TimestampEncode | Step::BoolWrap => {
            unreachable!("encode step in a wire-to-surface plan")
        }
    }
}

fn emit_cast_elems(b: CodeBuilder, src: &str, dst: &str, to: &str) -> CodeBuilder {
    b.line(&format!("{} = make([]{}, len({}))", dst, to, src))
        .line(&format!("for i, v := range {} {{", src))
        .indent()
        .line(&format!("{}[i] = {}(v)", dst, to))
        .dedent()
        .line("}")
}
