pub mod config;
pub mod counter;
pub mod effects;
pub mod error;
pub mod form;
pub mod geometry;
pub mod nav;
pub mod page;
pub mod rate;
pub mod session;
pub mod timing;
pub mod validation;
pub mod visibility;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use page::{ElementId, Page};
pub use session::PageSession;
