pub mod config;
pub mod run;
pub mod simulate;
pub mod submit;
pub mod subscribe;
pub mod validate;
