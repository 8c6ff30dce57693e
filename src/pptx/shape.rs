/// Shape types and implementation for PPTX presentations.
use crate::common::unit::{pt_to_centipoints, pt_to_emu_f64};
use crate::common::xml::{ensure_xml_text, escape_xml};
use crate::common::{RGBColor, Result};
use std::fmt::Write as FmtWrite;

use super::format::TextFormat;

/// Outline of a geometric shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFormat {
    pub color: RGBColor,
    /// Line width in points
    pub width: f64,
}

/// A shape on a slide (text box, rectangle, ellipse).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        text: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        format: TextFormat,
    },
    Rectangle {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
        line: Option<LineFormat>,
    },
    Ellipse {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(
        shape_id: u32,
        text: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                text,
                x,
                y,
                width,
                height,
                format: TextFormat::default(),
            },
        }
    }

    /// Create a new rectangle shape.
    pub(crate) fn new_rectangle(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle {
                x,
                y,
                width,
                height,
                fill_color,
                line: None,
            },
        }
    }

    /// Create a new ellipse (circle/oval) shape.
    pub(crate) fn new_ellipse(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Ellipse {
                x,
                y,
                width,
                height,
                fill_color,
            },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Get the text of a text box.
    pub fn text(&self) -> Option<&str> {
        match &self.shape_type {
            ShapeType::TextBox { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Set text formatting for this shape (only for text boxes).
    pub fn set_text_format(&mut self, format: TextFormat) -> &mut Self {
        if let ShapeType::TextBox {
            format: ref mut f, ..
        } = self.shape_type
        {
            *f = format;
        }
        self
    }

    /// Set the outline (only for rectangles).
    pub fn set_line(&mut self, line: LineFormat) -> &mut Self {
        if let ShapeType::Rectangle {
            line: ref mut l, ..
        } = self.shape_type
        {
            *l = Some(line);
        }
        self
    }

    /// Generate XML for this shape.
    ///
    /// Fails with [`crate::common::Error::InvalidContent`] when the text holds
    /// characters that XML cannot carry.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                text,
                x,
                y,
                width,
                height,
                format,
            } => {
                ensure_xml_text(&format!("shape {}", self.shape_id), text)?;

                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="t"><a:noAutofit/></a:bodyPr>"#);
                xml.push_str("<a:lstStyle/>");

                // One paragraph per line
                for line in text.split('\n') {
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    xml.push_str("<a:p>");
                    if let Some(align) = format.align {
                        write!(xml, r#"<a:pPr algn="{}"/>"#, align.as_ooxml())?;
                    }
                    if line.is_empty() {
                        xml.push_str("<a:endParaRPr lang=\"en-US\" dirty=\"0\"/>");
                    } else {
                        xml.push_str("<a:r>");
                        write_run_properties(xml, format)?;
                        write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                        xml.push_str("</a:r>");
                    }
                    xml.push_str("</a:p>");
                }

                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle {
                x,
                y,
                width,
                height,
                fill_color,
                line,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                write_fill(xml, *fill_color)?;

                match line {
                    Some(line) => {
                        write!(
                            xml,
                            r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                            pt_to_emu_f64(line.width),
                            line.color
                        )?;
                    },
                    None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                }

                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Ellipse {
                x,
                y,
                width,
                height,
                fill_color,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Ellipse {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="ellipse"><a:avLst/></a:prstGeom>"#);
                write_fill(xml, *fill_color)?;
                xml.push_str("<a:ln><a:noFill/></a:ln>");
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, x: i64, y: i64, width: i64, height: i64) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width.max(0), height.max(0))?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_fill(xml: &mut String, fill_color: Option<RGBColor>) -> Result<()> {
    match fill_color {
        Some(color) => {
            xml.push_str("<a:solidFill>");
            write!(xml, r#"<a:srgbClr val="{}"/>"#, color)?;
            xml.push_str("</a:solidFill>");
        },
        None => xml.push_str("<a:noFill/>"),
    }
    Ok(())
}

fn write_run_properties(xml: &mut String, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");

    if let Some(size) = format.size {
        write!(xml, " sz=\"{}\"", pt_to_centipoints(size))?;
    }

    if format.is_bold() {
        xml.push_str(" b=\"1\"");
    }

    if format.is_italic() {
        xml.push_str(" i=\"1\"");
    }

    xml.push('>');

    // Fill must precede the font elements inside rPr
    if let Some(color) = format.color {
        write!(
            xml,
            "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
            color
        )?;
    }

    if let Some(ref font) = format.font {
        write!(xml, "<a:latin typeface=\"{}\"/>", escape_xml(font))?;
    }

    xml.push_str("</a:rPr>");
    Ok(())
}
