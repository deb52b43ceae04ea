//! Sans-IO collection controller.

pub mod machine;
pub mod state;
