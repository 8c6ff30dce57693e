//! XML text helpers used by the PPTX writer.

mod escape;

pub use escape::{ensure_xml_text, escape_xml};
