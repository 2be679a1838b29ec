pub mod conference;
pub mod deadline;
pub mod run_context;
