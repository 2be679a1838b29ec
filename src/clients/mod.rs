pub mod deadline_source;
pub mod slack;
