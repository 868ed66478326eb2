pub mod resume;
pub mod style;

pub use resume::ResumeData;
pub use style::{StyleOptions, TemplateKey};
