//! 产品列表

pub mod handler;
pub mod model;
pub mod repository;
pub mod seeder;
pub mod service;
pub mod view;

pub use handler::AppState;
pub use model::{NewProduct, Product};
pub use repository::{InMemoryProductRepository, ProductRepository};
#[cfg(feature = "database")]
pub use repository::PgProductRepository;
pub use service::ProductService;
