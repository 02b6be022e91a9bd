//! Application service layer - config, form intake, document rendering

pub mod config;
pub mod intake;
pub mod render;

pub use intake::{ContainerDraft, FormSession};
pub use render::{
    default_file_name, format_date, format_weight, generate, AnnexureDocument, Escaping, Renderer,
};
