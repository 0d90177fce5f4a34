// Handler modules
pub mod validate;

// Re-export all handler functions
pub use validate::{
    ValidateOptions, ValidationReport, discover_yaml_files, handle_list_rules, handle_validate,
    process_file, run_validation,
};
