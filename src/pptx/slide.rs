/// Slide types and implementation for PPTX presentations.
use crate::common::xml::{ensure_xml_text, escape_xml};
use crate::common::{RGBColor, Result};
use std::fmt::Write as FmtWrite;

use super::constants::namespace as ns;
use super::shape::MutableShape;

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            notes: None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set speaker notes for the slide.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    /// Get the speaker notes for the slide.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Check if the slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    fn next_shape_id(&self) -> u32 {
        // IDs: 1=group, 2+=shapes
        (self.shapes.len() + 2) as u32
    }

    /// Add a text box to the slide and return it for formatting.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape =
            MutableShape::new_text_box(self.next_shape_id(), text.to_string(), x, y, width, height);
        self.push(shape)
    }

    /// Add a rectangle to the slide.
    pub fn add_rectangle(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_rectangle(self.next_shape_id(), x, y, width, height, fill_color);
        self.push(shape)
    }

    /// Add an ellipse (circle/oval) to the slide.
    pub fn add_ellipse(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_ellipse(self.next_shape_id(), x, y, width, height, fill_color);
        self.push(shape)
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Shapes on the slide, in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Generate slide XML content.
    ///
    /// The slide's only relationship is its layout (`rId1`); the notes slide,
    /// when present, is `rId2`.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            ns::DML,
            ns::OFC_RELATIONSHIPS,
            ns::PML
        )?;

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content.
    ///
    /// Returns `None` when the slide has no notes.
    pub(crate) fn generate_notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;
        Some(self.write_notes_xml(notes_text))
    }

    fn write_notes_xml(&self, notes_text: &str) -> Result<String> {
        ensure_xml_text(&format!("notes of slide {}", self.slide_id), notes_text)?;

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:notes xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            ns::DML,
            ns::OFC_RELATIONSHIPS,
            ns::PML
        )?;

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        // Notes text shape
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder 1"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str("<p:nvPr><p:ph type=\"body\" idx=\"1\"/></p:nvPr>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for line in notes_text.lines() {
            xml.push_str("<a:p>");
            if line.is_empty() {
                xml.push_str("<a:endParaRPr lang=\"en-US\" dirty=\"0\"/>");
            } else {
                xml.push_str("<a:r>");
                xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:notes>");

        Ok(xml)
    }
}

/// Write the (required) group shape properties of an `spTree`.
pub(crate) fn write_group_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_follow_group() {
        let mut slide = MutableSlide::new(256);
        slide.add_rectangle(0, 0, 10, 10, None);
        let id = slide.add_text_box("Hello", 0, 0, 10, 10).shape_id();
        assert_eq!(id, 3);
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.shapes()[0].text(), None);
        assert_eq!(slide.shapes()[1].text(), Some("Hello"));
    }

    #[test]
    fn test_slide_xml() {
        let mut slide = MutableSlide::new(256);
        slide.add_text_box("Problem", 457200, 365760, 8229600, 731520);

        let xml = slide.to_xml().unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<p:sld "));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
        assert!(xml.contains("<a:t>Problem</a:t>"));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_notes_xml() {
        let mut slide = MutableSlide::new(256);
        assert!(slide.generate_notes_xml().is_none());

        slide.set_notes("Open with the story.\nThen the numbers & the ask.");
        let xml = slide.generate_notes_xml().unwrap().unwrap();
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("<a:t>Open with the story.</a:t>"));
        assert!(xml.contains("<a:t>Then the numbers &amp; the ask.</a:t>"));
    }

    #[test]
    fn test_invalid_notes_fail() {
        let mut slide = MutableSlide::new(256);
        slide.set_notes("\u{8}");
        assert!(slide.generate_notes_xml().unwrap().is_err());
    }
}
