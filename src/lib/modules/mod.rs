pub mod behavior;
pub mod ecology;
pub mod functions;
pub mod fuel;
pub mod history;
pub mod tactics;
