//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Catalog repositories are
//! read-mostly (`create` exists for the back office and test fixtures);
//! quote repositories carry the administrative mutation methods the
//! configurator itself never calls.

pub mod accessory_repo;
pub mod color_repo;
pub mod coverage_type_repo;
pub mod metal_quote_repo;
pub mod product_model_repo;
pub mod structure_type_repo;
pub mod surface_repo;
pub mod wood_quote_repo;

pub use accessory_repo::AccessoryRepo;
pub use color_repo::ColorRepo;
pub use coverage_type_repo::CoverageTypeRepo;
pub use metal_quote_repo::MetalQuoteRepo;
pub use product_model_repo::ProductModelRepo;
pub use structure_type_repo::StructureTypeRepo;
pub use surface_repo::SurfaceRepo;
pub use wood_quote_repo::WoodQuoteRepo;
