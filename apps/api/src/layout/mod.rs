// Text-to-layout engine: tailored resume text in, paginated PDF bytes out.
// Layout is CPU-bound and runs inside tokio::task::spawn_blocking (see document::render_resume_pdf).

pub mod classifier;
pub mod dates;
pub mod document;
pub mod emphasis;
pub mod flow;
pub mod font_metrics;
pub mod parser;
pub mod style;
pub mod wrap;

// Re-export the public API consumed by the tailoring handlers.
pub use document::{render_resume_pdf, RenderError};
pub use parser::parse_resume;
pub use style::{default_page_config, PageConfig};
