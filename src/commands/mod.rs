//! CLI command implementations.

pub mod interactive;
pub mod links;
pub mod search;

pub use interactive::InteractiveCommand;
pub use links::LinksCommand;
pub use search::SearchCommand;
