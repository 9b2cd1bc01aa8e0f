pub mod product;
pub mod user;

// Re-export per comodità
pub use product::Product;
pub use user::User;
