//! Presentation port.
//!
//! The engine produces structured [`Analysis`] values; how they are shown is
//! a separate, swappable concern. Implement [`ReportRenderer`] to add a new
//! output format.

use crate::domain::entities::report::Analysis;

pub trait ReportRenderer {
    /// Render a complete analysis to a displayable string.
    fn render(&self, analysis: &Analysis) -> String;
}
