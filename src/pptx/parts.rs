//! Fixed package parts of a generated presentation.
//!
//! Every presentation uses one slide master, one blank layout and one theme.
//! Notes pages additionally need a notes master with its own theme. Slide
//! content lives in the slide parts; these parts only carry structure, the
//! colour scheme and the document properties.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

use super::constants::{content_type as ct, namespace as ns, relationship_type as rt};
use super::slide::write_group_properties;
use crate::common::xml::{ensure_xml_text, escape_xml};
use crate::common::{RGBColor, Result};

/// Colour scheme written into the theme part.
///
/// `accent1..accent3` carry the brand colours so that the deck stays
/// recolourable from the application's theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub dark1: RGBColor,
    pub light1: RGBColor,
    pub dark2: RGBColor,
    pub light2: RGBColor,
    pub accent1: RGBColor,
    pub accent2: RGBColor,
    pub accent3: RGBColor,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            dark1: RGBColor::new(0x00, 0x00, 0x00),
            light1: RGBColor::new(0xFF, 0xFF, 0xFF),
            dark2: RGBColor::new(0x1F, 0x29, 0x37),
            light2: RGBColor::new(0xF3, 0xF4, 0xF6),
            accent1: RGBColor::new(0x3B, 0x82, 0xF6),
            accent2: RGBColor::new(0x8B, 0x5C, 0xF6),
            accent3: RGBColor::new(0xF5, 0x9E, 0x0B),
        }
    }
}

/// Core document properties (`docProps/core.xml`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: String,
    pub subject: String,
    pub creator: String,
    /// Creation time; omitted from the package when unknown
    pub created: Option<DateTime<Utc>>,
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// One relationship of a `.rels` part.
pub(crate) struct Relationship<'a> {
    pub id: String,
    pub rel_type: &'a str,
    pub target: String,
}

impl<'a> Relationship<'a> {
    pub fn new(id: usize, rel_type: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: format!("rId{}", id),
            rel_type,
            target: target.into(),
        }
    }
}

pub(crate) fn relationships_xml(rels: &[Relationship<'_>]) -> Result<String> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<Relationships xmlns="{}">"#, ns::OPC_RELATIONSHIPS)?;
    for rel in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id, rel.rel_type, rel.target
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// `[Content_Types].xml` for a deck of `slide_count` slides.
///
/// `notes` lists the 1-based numbers of the slides that have a notes page.
pub(crate) fn content_types_xml(slide_count: usize, notes: &[usize]) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<Types xmlns="{}">"#, ns::OPC_CONTENT_TYPES)?;
    write!(
        xml,
        r#"<Default Extension="rels" ContentType="{}"/>"#,
        ct::OPC_RELATIONSHIPS
    )?;
    write!(xml, r#"<Default Extension="xml" ContentType="{}"/>"#, ct::XML)?;

    let mut override_part = |name: &str, content_type: &str| -> Result<()> {
        write!(
            xml,
            r#"<Override PartName="{}" ContentType="{}"/>"#,
            name, content_type
        )?;
        Ok(())
    };

    override_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN)?;
    override_part("/ppt/slideMasters/slideMaster1.xml", ct::PML_SLIDE_MASTER)?;
    override_part("/ppt/slideLayouts/slideLayout1.xml", ct::PML_SLIDE_LAYOUT)?;
    override_part("/ppt/theme/theme1.xml", ct::OFC_THEME)?;
    if !notes.is_empty() {
        override_part("/ppt/notesMasters/notesMaster1.xml", ct::PML_NOTES_MASTER)?;
        override_part("/ppt/theme/theme2.xml", ct::OFC_THEME)?;
    }
    for number in 1..=slide_count {
        override_part(&format!("/ppt/slides/slide{}.xml", number), ct::PML_SLIDE)?;
    }
    for number in notes {
        override_part(
            &format!("/ppt/notesSlides/notesSlide{}.xml", number),
            ct::PML_NOTES_SLIDE,
        )?;
    }
    override_part("/docProps/core.xml", ct::OPC_CORE_PROPERTIES)?;
    override_part("/docProps/app.xml", ct::OFC_EXTENDED_PROPERTIES)?;

    xml.push_str("</Types>");
    Ok(xml)
}

/// Package-level relationships (`_rels/.rels`).
pub(crate) fn package_rels_xml() -> Result<String> {
    relationships_xml(&[
        Relationship::new(1, rt::OFFICE_DOCUMENT, "ppt/presentation.xml"),
        Relationship::new(2, rt::CORE_PROPERTIES, "docProps/core.xml"),
        Relationship::new(3, rt::EXTENDED_PROPERTIES, "docProps/app.xml"),
    ])
}

pub(crate) fn core_properties_xml(props: &DocumentProperties) -> Result<String> {
    for (field, value) in [
        ("document title", &props.title),
        ("document subject", &props.subject),
        ("document author", &props.creator),
    ] {
        ensure_xml_text(field, value)?;
    }

    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}" xmlns:dcterms="{}" xmlns:xsi="{}">"#,
        ns::CORE_PROPERTIES,
        ns::DC,
        ns::DCTERMS,
        ns::XSI
    )?;
    write!(xml, "<dc:title>{}</dc:title>", escape_xml(&props.title))?;
    write!(xml, "<dc:subject>{}</dc:subject>", escape_xml(&props.subject))?;
    write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(&props.creator))?;
    write!(
        xml,
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(&props.creator)
    )?;
    xml.push_str("<cp:revision>1</cp:revision>");
    if let Some(created) = props.created {
        let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
        write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            stamp
        )?;
        write!(
            xml,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            stamp
        )?;
    }
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

pub(crate) fn app_properties_xml(slide_count: usize, notes_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<Properties xmlns="{}">"#, ns::EXTENDED_PROPERTIES)?;
    write!(
        xml,
        "<Application>{} {}</Application>",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    write!(xml, "<Notes>{}</Notes>", notes_count)?;
    xml.push_str("</Properties>");
    Ok(xml)
}

const COLOR_MAP: &str = r#"bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink""#;

pub(crate) fn slide_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        ns::DML,
        ns::OFC_RELATIONSHIPS,
        ns::PML
    )?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    write!(xml, "<p:clrMap {}/>", COLOR_MAP)?;
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

pub(crate) fn slide_master_rels_xml() -> Result<String> {
    relationships_xml(&[
        Relationship::new(1, rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        Relationship::new(2, rt::THEME, "../theme/theme1.xml"),
    ])
}

pub(crate) fn slide_layout_xml() -> Result<String> {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">"#,
        ns::DML,
        ns::OFC_RELATIONSHIPS,
        ns::PML
    )?;
    xml.push_str(r#"<p:cSld name="Blank">"#);
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

pub(crate) fn slide_layout_rels_xml() -> Result<String> {
    relationships_xml(&[Relationship::new(
        1,
        rt::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )])
}

pub(crate) fn notes_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:notesMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        ns::DML,
        ns::OFC_RELATIONSHIPS,
        ns::PML
    )?;
    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder 1"/>"#);
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    xml.push_str("<p:nvPr><p:ph type=\"body\" sz=\"quarter\" idx=\"1\"/></p:nvPr>");
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr>");
    xml.push_str(r#"<a:xfrm><a:off x="685800" y="4343400"/><a:ext cx="5486400" cy="4114800"/></a:xfrm>"#);
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang=\"en-US\"/></a:p></p:txBody>");
    xml.push_str("</p:sp>");
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    write!(xml, "<p:clrMap {}/>", COLOR_MAP)?;
    xml.push_str("</p:notesMaster>");
    Ok(xml)
}

pub(crate) fn notes_master_rels_xml() -> Result<String> {
    relationships_xml(&[Relationship::new(1, rt::THEME, "../theme/theme2.xml")])
}

/// A complete DrawingML theme carrying `colors` as its colour scheme.
pub(crate) fn theme_xml(name: &str, colors: &ThemeColors) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<a:theme xmlns:a="{}" name="{}">"#,
        ns::DML,
        escape_xml(name)
    )?;
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Brand">"#);
    write!(xml, r#"<a:dk1><a:srgbClr val="{}"/></a:dk1>"#, colors.dark1)?;
    write!(xml, r#"<a:lt1><a:srgbClr val="{}"/></a:lt1>"#, colors.light1)?;
    write!(xml, r#"<a:dk2><a:srgbClr val="{}"/></a:dk2>"#, colors.dark2)?;
    write!(xml, r#"<a:lt2><a:srgbClr val="{}"/></a:lt2>"#, colors.light2)?;
    write!(xml, r#"<a:accent1><a:srgbClr val="{}"/></a:accent1>"#, colors.accent1)?;
    write!(xml, r#"<a:accent2><a:srgbClr val="{}"/></a:accent2>"#, colors.accent2)?;
    write!(xml, r#"<a:accent3><a:srgbClr val="{}"/></a:accent3>"#, colors.accent3)?;
    xml.push_str(r#"<a:accent4><a:srgbClr val="10B981"/></a:accent4>"#);
    xml.push_str(r#"<a:accent5><a:srgbClr val="EF4444"/></a:accent5>"#);
    xml.push_str(r#"<a:accent6><a:srgbClr val="6B7280"/></a:accent6>"#);
    xml.push_str(r#"<a:hlink><a:srgbClr val="2563EB"/></a:hlink>"#);
    xml.push_str(r#"<a:folHlink><a:srgbClr val="7C3AED"/></a:folHlink>"#);
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Brand">"#);
    xml.push_str(r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#);
    xml.push_str(r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#);
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Brand">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(
            xml,
            r#"<a:ln w="{}"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            width
        )?;
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("</a:theme>");
    Ok(xml)
}

/// Relationships of `ppt/slides/slideN.xml`.
pub(crate) fn slide_rels_xml(notes_number: Option<usize>) -> Result<String> {
    let mut rels = vec![Relationship::new(
        1,
        rt::SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml",
    )];
    if let Some(number) = notes_number {
        rels.push(Relationship::new(
            2,
            rt::NOTES_SLIDE,
            format!("../notesSlides/notesSlide{}.xml", number),
        ));
    }
    relationships_xml(&rels)
}

/// Relationships of `ppt/notesSlides/notesSlideN.xml`.
pub(crate) fn notes_slide_rels_xml(slide_number: usize) -> Result<String> {
    relationships_xml(&[
        Relationship::new(1, rt::NOTES_MASTER, "../notesMasters/notesMaster1.xml"),
        Relationship::new(2, rt::SLIDE, format!("../slides/slide{}.xml", slide_number)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_content_types_list_every_part() {
        let xml = content_types_xml(2, &[2]).unwrap();
        assert!(xml.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/notesSlides/notesSlide2.xml""#));
        assert!(!xml.contains("notesSlide1.xml"));
        assert!(xml.contains("/ppt/notesMasters/notesMaster1.xml"));
        assert!(xml.contains("/ppt/theme/theme2.xml"));
    }

    #[test]
    fn test_content_types_without_notes() {
        let xml = content_types_xml(1, &[]).unwrap();
        assert!(!xml.contains("notesMaster"));
        assert!(!xml.contains("theme2"));
    }

    #[test]
    fn test_core_properties() {
        let props = DocumentProperties {
            title: "TaskFlow".into(),
            subject: "Ship <faster>".into(),
            creator: "TaskFlow Team".into(),
            created: Some(Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap()),
        };
        let xml = core_properties_xml(&props).unwrap();
        assert!(xml.contains("<dc:title>TaskFlow</dc:title>"));
        assert!(xml.contains("<dc:subject>Ship &lt;faster&gt;</dc:subject>"));
        assert!(xml.contains(">2026-10-18T00:00:00Z</dcterms:created>"));
    }

    #[test]
    fn test_core_properties_without_date() {
        let xml = core_properties_xml(&DocumentProperties::default()).unwrap();
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_theme_carries_accents() {
        let colors = ThemeColors {
            accent1: RGBColor::new(0x10, 0xB9, 0x81),
            ..ThemeColors::default()
        };
        let xml = theme_xml("Deck", &colors).unwrap();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="10B981"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:accent2><a:srgbClr val="8B5CF6"/></a:accent2>"#));
    }

    #[test]
    fn test_slide_rels() {
        let plain = slide_rels_xml(None).unwrap();
        assert!(plain.contains("slideLayout1.xml"));
        assert!(!plain.contains("notesSlide"));

        let with_notes = slide_rels_xml(Some(3)).unwrap();
        assert!(with_notes.contains(r#"Id="rId2""#));
        assert!(with_notes.contains("../notesSlides/notesSlide3.xml"));
    }
}
