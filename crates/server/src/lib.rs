pub mod errors;
pub mod routes;
pub mod startup;

pub use errors::StartupError;
pub use startup::run;
