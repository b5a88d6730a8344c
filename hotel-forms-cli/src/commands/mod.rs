//! CLI command implementations

pub mod arrival;
pub mod forms;
pub mod validate;

pub use arrival::ArrivalWindowCommand;
pub use forms::FormsCommand;
pub use validate::ValidateCommand;
