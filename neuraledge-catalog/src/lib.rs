//! NeuralEdge Catalog
//!
//! The in-memory workflow catalog pipeline. Everything here is pure: no I/O,
//! no clocks, no shared state. It includes:
//! - Record normalization (complexity tier, categories, integrations)
//! - Search over text, category and complexity filters
//! - Pagination with page clamping
//! - Category counts for filter menus
//! - Related-record lookup and download identifier validation
//! - The deterministic sample catalog and offline maintenance transforms

pub mod aggregate;
pub mod identifier;
pub mod maintenance;
pub mod normalize;
pub mod paginate;
pub mod query;
pub mod related;
pub mod sample;

pub use aggregate::count_categories;
pub use identifier::{IdentifierError, validate_file_id};
pub use normalize::{categories, complexity, integrations, view};
pub use paginate::paginate;
pub use query::{SearchCriteria, search};
pub use related::{find_workflow, related_workflows};
pub use sample::sample_workflows;
