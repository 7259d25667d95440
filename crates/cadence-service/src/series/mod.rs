pub mod expand;
pub mod input;
pub mod model;
pub mod pattern;
pub mod submit;

pub use expand::{SeriesPreview, expand, expand_with_series_id, preview};
pub use model::{BaseSession, SeriesId, SessionOverrides, SessionRequest};
pub use pattern::{Pattern, RepeatConfig};
