pub mod access;
pub mod asset;
pub mod gallery;
pub mod health;
