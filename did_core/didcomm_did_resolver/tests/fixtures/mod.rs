pub mod sov;
pub mod web;
