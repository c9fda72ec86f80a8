//! Go resolver source generation.
//!
//! Produces, per service, one handler file that bridges the generated
//! GraphQL schema to the gRPC backend: surface record declarations,
//! converter functions emitted from transcode plans, per-verb bridging
//! functions rendered from text templates, and the resolver holder type.
//! Also edits the resolver aggregator file (`root.go`) in place.

pub mod aggregator;
pub mod ast;
pub mod resolvers;
pub mod shapes;
pub mod templates;
pub mod transcode;
pub mod type_map;

pub use aggregator::{AggregatorEdit, AggregatorError, update_aggregator};
pub use resolvers::HandlerGenerator;
pub use transcode::{Direction, Plan, RecordShape, ShapeField, ShapeType, TranscodeError};
