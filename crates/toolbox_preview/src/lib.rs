//! Preview surfaces for the CSS Toolbox
//!
//! - [`StyleSurface`] / [`AnimationSurface`] - what a rendering layer offers
//! - [`present`] - pushes the active editor of a session onto a surface
//! - [`HtmlPreview`] - renders everything into a standalone HTML page
//! - [`RecordingSurface`] - keeps a log of calls, for tests and tooling

mod surface;
mod present;
mod html_preview;

pub use surface::{AnimationSurface, RecordingSurface, StyleSurface, SurfaceCall};
pub use present::present;
pub use html_preview::HtmlPreview;
