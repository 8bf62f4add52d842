mod bands;
mod manager;
mod persistence;

pub use bands::{calorie_band, calorie_bands};
pub use manager::Catalog;
pub use persistence::{
    load_catalog, load_category_csv, read_category_csv, save_weekly_plan, CatalogPaths,
};
