mod aggregate;
mod refresh;
mod seed;
mod view;

pub use aggregate::overlay;
pub use refresh::refresh_catalog;
pub use seed::baseline;
pub use view::CatalogView;
