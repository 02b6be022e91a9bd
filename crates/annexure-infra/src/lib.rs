//! Infrastructure layer - loaders for form files and container spreadsheets

pub mod container_csv;
pub mod form_file;

pub use container_csv::{load_containers_csv, parse_containers_csv};
pub use form_file::{load_form_file, ContainerInput, FormInput};
