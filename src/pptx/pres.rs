/// Presentation writer for PPTX.
use crate::common::Result;
use crate::common::unit::{CANVAS_HEIGHT_IN, CANVAS_WIDTH_IN, inch_to_emu};
use std::fmt::Write as FmtWrite;

use super::constants::{namespace as ns, relationship_type as rt};
use super::package::PackageWriter;
use super::parts::{self, DocumentProperties, Relationship, ThemeColors};
use super::slide::MutableSlide;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set document properties and the theme
/// colours, and serialize the whole package.
///
/// # Examples
///
/// ```rust
/// use launchkit::pptx::MutablePresentation;
///
/// let mut pres = MutablePresentation::new();
/// pres.properties_mut().title = "TaskFlow".to_string();
/// let slide = pres.add_slide();
/// slide.add_text_box("Hello", 914400, 914400, 4572000, 914400);
///
/// let bytes = pres.to_bytes().unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    properties: DocumentProperties,
    theme: ThemeColors,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inch_to_emu(CANVAS_WIDTH_IN),
            slide_height: inch_to_emu(CANVAS_HEIGHT_IN),
            properties: DocumentProperties::default(),
            theme: ThemeColors::default(),
        }
    }

    /// Add a new slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        self.slides.push(MutableSlide::new((index + 256) as u32));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Set the colour scheme written into the theme.
    pub fn set_theme_colors(&mut self, theme: ThemeColors) {
        self.theme = theme;
    }

    fn has_notes(&self) -> bool {
        self.slides.iter().any(MutableSlide::has_notes)
    }

    /// Relationship id of the first slide in `presentation.xml.rels`.
    ///
    /// rId1 is the master, rId2 the theme and rId3 the notes master when present.
    fn first_slide_rel_id(&self) -> usize {
        if self.has_notes() { 4 } else { 3 }
    }

    /// Generate presentation.xml content.
    pub(crate) fn generate_presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            ns::DML,
            ns::OFC_RELATIONSHIPS,
            ns::PML
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if self.has_notes() {
            xml.push_str(r#"<p:notesMasterIdLst><p:notesMasterId r:id="rId3"/></p:notesMasterIdLst>"#);
        }

        // Write slide ID list
        if !self.slides.is_empty() {
            let first = self.first_slide_rel_id();
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    slide.slide_id(),
                    first + index
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    fn generate_presentation_rels_xml(&self) -> Result<String> {
        let mut rels = vec![
            Relationship::new(1, rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
            Relationship::new(2, rt::THEME, "theme/theme1.xml"),
        ];
        if self.has_notes() {
            rels.push(Relationship::new(
                3,
                rt::NOTES_MASTER,
                "notesMasters/notesMaster1.xml",
            ));
        }
        let first = self.first_slide_rel_id();
        for index in 0..self.slides.len() {
            rels.push(Relationship::new(
                first + index,
                rt::SLIDE,
                format!("slides/slide{}.xml", index + 1),
            ));
        }
        parts::relationships_xml(&rels)
    }

    /// Serialize the presentation into PPTX bytes.
    ///
    /// Serialization is deterministic: the same presentation always yields
    /// the same bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        // Serialize every slide first so content errors surface before any
        // archive work.
        let mut slide_parts = Vec::with_capacity(self.slides.len());
        for slide in &self.slides {
            let notes = slide.generate_notes_xml().transpose()?;
            slide_parts.push((slide.to_xml()?, notes));
        }

        let notes_numbers: Vec<usize> = slide_parts
            .iter()
            .enumerate()
            .filter(|(_, (_, notes))| notes.is_some())
            .map(|(index, _)| index + 1)
            .collect();

        let mut writer = PackageWriter::new();
        writer.write(
            "[Content_Types].xml",
            parts::content_types_xml(self.slides.len(), &notes_numbers)?.as_bytes(),
        )?;
        writer.write("_rels/.rels", parts::package_rels_xml()?.as_bytes())?;
        writer.write(
            "docProps/core.xml",
            parts::core_properties_xml(&self.properties)?.as_bytes(),
        )?;
        writer.write(
            "docProps/app.xml",
            parts::app_properties_xml(self.slides.len(), notes_numbers.len())?.as_bytes(),
        )?;

        writer.write(
            "ppt/presentation.xml",
            self.generate_presentation_xml()?.as_bytes(),
        )?;
        writer.write(
            "ppt/_rels/presentation.xml.rels",
            self.generate_presentation_rels_xml()?.as_bytes(),
        )?;

        writer.write(
            "ppt/slideMasters/slideMaster1.xml",
            parts::slide_master_xml()?.as_bytes(),
        )?;
        writer.write(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::slide_master_rels_xml()?.as_bytes(),
        )?;
        writer.write(
            "ppt/slideLayouts/slideLayout1.xml",
            parts::slide_layout_xml()?.as_bytes(),
        )?;
        writer.write(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::slide_layout_rels_xml()?.as_bytes(),
        )?;
        writer.write(
            "ppt/theme/theme1.xml",
            parts::theme_xml("Deck Theme", &self.theme)?.as_bytes(),
        )?;

        if !notes_numbers.is_empty() {
            writer.write(
                "ppt/notesMasters/notesMaster1.xml",
                parts::notes_master_xml()?.as_bytes(),
            )?;
            writer.write(
                "ppt/notesMasters/_rels/notesMaster1.xml.rels",
                parts::notes_master_rels_xml()?.as_bytes(),
            )?;
            writer.write(
                "ppt/theme/theme2.xml",
                parts::theme_xml("Notes Theme", &ThemeColors::default())?.as_bytes(),
            )?;
        }

        for (index, (slide_xml, notes_xml)) in slide_parts.iter().enumerate() {
            let number = index + 1;
            writer.write(&format!("ppt/slides/slide{}.xml", number), slide_xml.as_bytes())?;
            writer.write(
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                parts::slide_rels_xml(notes_xml.as_ref().map(|_| number))?.as_bytes(),
            )?;

            if let Some(notes_xml) = notes_xml {
                writer.write(
                    &format!("ppt/notesSlides/notesSlide{}.xml", number),
                    notes_xml.as_bytes(),
                )?;
                writer.write(
                    &format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", number),
                    parts::notes_slide_rels_xml(number)?.as_bytes(),
                )?;
            }
        }

        writer.finish()
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
