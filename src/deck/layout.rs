//! Slide layout engine.
//!
//! Maps one [`SlideContent`] record onto positioned [`Primitive`]s on the
//! 10 × 7.5 inch canvas. Layout is pure: the same slide, palette, metadata
//! and index always produce the same primitives, and rendering never fails.
//! Content that does not fit simply runs past the canvas edge.

use super::primitive::{Border, Frame, Primitive};
use super::theme::ThemePalette;
use super::types::{PresentationMetadata, SlideContent, SlideLayout};
use crate::common::RGBColor;
use crate::common::unit::{CANVAS_HEIGHT_IN, CANVAS_WIDTH_IN};
use crate::pptx::{TextAlign, TextFormat};

/// Caption of the image placeholder on `image-text` slides.
pub const PRODUCT_DEMO_CAPTION: &str = "[Product Demo]";
/// Caption of the chart placeholder on `chart` slides.
pub const CHART_CAPTION: &str = "[Data Visualization / Chart]";

const MARGIN: f64 = 0.5;
const CONTENT_WIDTH: f64 = CANVAS_WIDTH_IN - 2.0 * MARGIN;

/// Geometry knobs of the layout templates, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Top of the first content row on non-title slides
    pub content_top: f64,
    /// Row pitch of `bullets` slides
    pub bullet_row_pitch: f64,
    /// Row pitch inside each `two-column` column
    pub column_row_pitch: f64,
    /// Row pitch of the entries on `image-text` slides
    pub image_text_row_pitch: f64,
    /// Maximum number of metric labels on a `chart` slide
    pub max_chart_metrics: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            content_top: 1.6,
            bullet_row_pitch: 0.65,
            column_row_pitch: 0.85,
            image_text_row_pitch: 1.05,
            max_chart_metrics: 4,
        }
    }
}

/// Lays out slides against one palette and one deck's metadata.
///
/// # Examples
///
/// ```rust
/// use launchkit::deck::{LayoutEngine, PresentationMetadata, SlideContent, SlideLayout, ThemePalette};
///
/// let palette = ThemePalette::default();
/// let metadata = PresentationMetadata::default();
/// let engine = LayoutEngine::new(&palette, &metadata);
///
/// let slide = SlideContent::new(2, "Problem")
///     .with_layout(SlideLayout::Bullets)
///     .with_content(["Too many tools", "No visibility"]);
/// let primitives = engine.layout(&slide, 1);
/// assert!(primitives.iter().any(|p| p.text() == Some("No visibility")));
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine<'a> {
    palette: &'a ThemePalette,
    metadata: &'a PresentationMetadata,
    metrics: LayoutMetrics,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(palette: &'a ThemePalette, metadata: &'a PresentationMetadata) -> Self {
        Self {
            palette,
            metadata,
            metrics: LayoutMetrics::default(),
        }
    }

    /// Builder method: replace the default geometry.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Lay out one slide.
    ///
    /// `slide_index` is the zero-based render position; non-title slides show
    /// `slide_index + 1` in their footer.
    pub fn layout(&self, slide: &SlideContent, slide_index: usize) -> Vec<Primitive> {
        let mut canvas = Canvas::default();

        match slide.layout() {
            SlideLayout::Title => self.title_slide(&mut canvas, slide),
            layout => {
                self.chrome(&mut canvas, slide, slide_index);
                match layout {
                    SlideLayout::TwoColumn => self.two_column(&mut canvas, &slide.content),
                    SlideLayout::ImageText => self.image_text(&mut canvas, &slide.content),
                    SlideLayout::Chart => self.chart(&mut canvas, &slide.content),
                    _ => self.bullets(&mut canvas, &slide.content),
                }
            },
        }

        canvas.into_primitives()
    }

    fn title_slide(&self, canvas: &mut Canvas, slide: &SlideContent) {
        let p = self.palette;

        canvas.rect(Frame::new(0.0, 0.0, CANVAS_WIDTH_IN, CANVAS_HEIGHT_IN), p.primary);
        canvas.text(
            Frame::new(MARGIN, 2.2, CONTENT_WIDTH, 1.3),
            &slide.title,
            TextFormat::new()
                .size(44.0)
                .bold()
                .color(p.background)
                .align(TextAlign::Center),
        );
        canvas.rect(Frame::new(4.0, 3.65, 2.0, 0.08), p.accent);

        let subtitle = slide
            .content
            .first()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(self.metadata.subtitle.as_str());
        if !subtitle.trim().is_empty() {
            canvas.text(
                Frame::new(MARGIN, 3.95, CONTENT_WIDTH, 0.9),
                subtitle,
                TextFormat::new()
                    .size(22.0)
                    .color(p.light_bg)
                    .align(TextAlign::Center),
            );
        }

        let byline: Vec<&str> = [self.metadata.author.as_str(), self.metadata.date.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if !byline.is_empty() {
            canvas.text(
                Frame::new(MARGIN, 6.6, CONTENT_WIDTH, 0.4),
                &byline.join(" | "),
                TextFormat::new()
                    .size(14.0)
                    .color(p.light_bg)
                    .align(TextAlign::Center),
            );
        }
    }

    /// Background, top strip, title with underline and slide number.
    fn chrome(&self, canvas: &mut Canvas, slide: &SlideContent, slide_index: usize) {
        let p = self.palette;

        canvas.rect(Frame::new(0.0, 0.0, CANVAS_WIDTH_IN, CANVAS_HEIGHT_IN), p.background);
        canvas.rect(Frame::new(0.0, 0.0, CANVAS_WIDTH_IN, 0.12), p.primary);
        canvas.text(
            Frame::new(MARGIN, 0.4, CONTENT_WIDTH, 0.8),
            &slide.title,
            TextFormat::new().size(30.0).bold().color(p.text),
        );
        canvas.rect(Frame::new(MARGIN, 1.22, 1.2, 0.06), p.accent);
        canvas.text(
            Frame::new(CANVAS_WIDTH_IN - MARGIN - 0.8, 6.95, 0.8, 0.35),
            &(slide_index + 1).to_string(),
            TextFormat::new()
                .size(11.0)
                .color(p.light_text)
                .align(TextAlign::Right),
        );
    }

    fn bullets(&self, canvas: &mut Canvas, content: &[String]) {
        let p = self.palette;

        for (i, entry) in content.iter().enumerate() {
            let y = self.metrics.content_top + i as f64 * self.metrics.bullet_row_pitch;
            canvas.ellipse(Frame::new(0.7, y + 0.17, 0.16, 0.16), p.primary);
            canvas.text(
                Frame::new(1.05, y, CANVAS_WIDTH_IN - MARGIN - 1.05, 0.55),
                entry,
                TextFormat::new().size(18.0).color(p.text),
            );
        }
    }

    fn two_column(&self, canvas: &mut Canvas, content: &[String]) {
        let p = self.palette;
        let top = self.metrics.content_top;
        let midline = CANVAS_WIDTH_IN / 2.0;

        canvas.rect(
            Frame::new(midline - 0.02, top, 0.04, CANVAS_HEIGHT_IN - top - 1.0),
            p.divider,
        );

        let (left, right) = content.split_at(content.len().div_ceil(2));
        for (column_x, entries) in [(0.6, left), (midline + 0.3, right)] {
            for (i, entry) in entries.iter().enumerate() {
                let y = top + i as f64 * self.metrics.column_row_pitch;
                canvas.ellipse(Frame::new(column_x, y + 0.14, 0.14, 0.14), p.secondary);
                canvas.text(
                    Frame::new(column_x + 0.3, y, 3.8, 0.75),
                    entry,
                    TextFormat::new().size(16.0).color(p.text),
                );
            }
        }
    }

    fn image_text(&self, canvas: &mut Canvas, content: &[String]) {
        let p = self.palette;
        let top = self.metrics.content_top;

        canvas.bordered_rect(Frame::new(0.6, top, 4.2, 4.4), p.light_bg, p.divider);
        canvas.text(
            Frame::new(0.6, top + 1.9, 4.2, 0.6),
            PRODUCT_DEMO_CAPTION,
            TextFormat::new()
                .size(16.0)
                .italic()
                .color(p.light_text)
                .align(TextAlign::Center),
        );

        for (i, entry) in content.iter().enumerate() {
            let y = top + i as f64 * self.metrics.image_text_row_pitch;
            canvas.rect(Frame::new(5.2, y, 0.08, 0.8), p.accent);
            canvas.text(
                Frame::new(5.45, y, CANVAS_WIDTH_IN - MARGIN - 5.45, 0.8),
                entry,
                TextFormat::new().size(16.0).color(p.text),
            );
        }
    }

    fn chart(&self, canvas: &mut Canvas, content: &[String]) {
        let p = self.palette;
        let top = self.metrics.content_top;
        let (left, width) = (0.6, CANVAS_WIDTH_IN - 1.2);

        canvas.bordered_rect(Frame::new(left, top, width, 3.4), p.light_bg, p.divider);
        canvas.text(
            Frame::new(left, top + 1.4, width, 0.6),
            CHART_CAPTION,
            TextFormat::new()
                .size(18.0)
                .italic()
                .color(p.light_text)
                .align(TextAlign::Center),
        );

        let count = content.len().min(self.metrics.max_chart_metrics);
        if count == 0 {
            return;
        }
        let slot = width / count as f64;
        let strip_y = top + 3.7;
        for (j, metric) in content.iter().take(count).enumerate() {
            let frame = Frame::new(left + j as f64 * slot + 0.05, strip_y, slot - 0.1, 1.3);
            canvas.rect(frame, p.primary);
            canvas.text(
                frame,
                metric,
                TextFormat::new()
                    .size(14.0)
                    .bold()
                    .color(p.background)
                    .align(TextAlign::Center),
            );
        }
    }
}

/// Primitive accumulator for one slide.
#[derive(Default)]
struct Canvas {
    primitives: Vec<Primitive>,
}

impl Canvas {
    fn rect(&mut self, frame: Frame, fill: RGBColor) {
        self.primitives.push(Primitive::Rect {
            frame,
            fill,
            border: None,
        });
    }

    fn bordered_rect(&mut self, frame: Frame, fill: RGBColor, border: RGBColor) {
        self.primitives.push(Primitive::Rect {
            frame,
            fill,
            border: Some(Border {
                color: border,
                width: 1.0,
            }),
        });
    }

    fn ellipse(&mut self, frame: Frame, fill: RGBColor) {
        self.primitives.push(Primitive::Ellipse { frame, fill });
    }

    fn text(&mut self, frame: Frame, text: &str, format: TextFormat) {
        self.primitives.push(Primitive::Text {
            frame,
            text: text.to_string(),
            format,
        });
    }

    fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn metadata() -> PresentationMetadata {
        PresentationMetadata {
            title: "TaskFlow".into(),
            subtitle: "Project management that actually works".into(),
            author: "TaskFlow Team".into(),
            date: "2026-10-18".into(),
        }
    }

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    fn text_frame<'p>(primitives: &'p [Primitive], text: &str) -> Option<&'p Frame> {
        primitives.iter().find_map(|p| match p {
            Primitive::Text { frame, text: t, .. } if t == text => Some(frame),
            _ => None,
        })
    }

    #[test]
    fn test_title_slide() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(1, "TaskFlow").with_layout(SlideLayout::Title);
        let primitives = engine.layout(&slide, 0);

        // full-bleed brand background first
        assert_eq!(
            primitives[0],
            Primitive::Rect {
                frame: Frame::new(0.0, 0.0, 10.0, 7.5),
                fill: palette.primary,
                border: None,
            }
        );
        assert!(text_frame(&primitives, "TaskFlow").is_some());
        // falls back to the metadata subtitle when the slide has no entries
        assert!(text_frame(&primitives, "Project management that actually works").is_some());
        assert!(text_frame(&primitives, "TaskFlow Team | 2026-10-18").is_some());
        assert!(primitives.iter().any(|p| p.fill() == Some(palette.accent)));
    }

    #[test]
    fn test_title_subtitle_prefers_first_entry() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(1, "TaskFlow")
            .with_layout(SlideLayout::Title)
            .with_content(["Ship faster"]);
        let primitives = engine.layout(&slide, 0);
        assert!(text_frame(&primitives, "Ship faster").is_some());
        assert!(text_frame(&primitives, &meta.subtitle).is_none());
    }

    #[test]
    fn test_title_layout_at_any_index() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(9, "Thank You").with_layout(SlideLayout::Title);
        let primitives = engine.layout(&slide, 8);
        assert_eq!(primitives[0].fill(), Some(palette.primary));
        // no slide-number footer on title slides
        assert!(text_frame(&primitives, "9").is_none());
    }

    #[test]
    fn test_non_title_chrome_and_footer() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        // declared number differs from render position
        let slide = SlideContent::new(42, "Solution").with_content(["One place for everything"]);
        let primitives = engine.layout(&slide, 2);

        assert_eq!(primitives[0].fill(), Some(palette.background));
        assert_eq!(primitives[0].frame(), Frame::new(0.0, 0.0, 10.0, 7.5));
        assert_eq!(primitives[1].fill(), Some(palette.primary));
        let footer = text_frame(&primitives, "3").unwrap();
        assert!(footer.x > 8.0 && footer.y > 6.5);
        assert!(text_frame(&primitives, "42").is_none());
    }

    #[test]
    fn test_bullets_rows() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(2, "Problem").with_content(items(3));
        let primitives = engine.layout(&slide, 1);

        for i in 0..3 {
            let frame = text_frame(&primitives, &format!("item-{i}")).unwrap();
            assert!((frame.y - (1.6 + i as f64 * 0.65)).abs() < EPS);
        }
        let markers = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Ellipse { .. }))
            .count();
        assert_eq!(markers, 3);
        // title, three rows, footer
        assert_eq!(primitives.iter().filter(|p| p.is_text()).count(), 5);
    }

    #[test]
    fn test_empty_content_renders_zero_rows() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(2, "Problem");
        let primitives = engine.layout(&slide, 1);
        // background, strip, title, underline, footer
        assert_eq!(primitives.len(), 5);
    }

    #[test]
    fn test_unknown_layout_renders_as_bullets() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let mut unknown = SlideContent::new(5, "Roadmap").with_content(items(2));
        unknown.layout = Some("timeline".into());
        let bullets = SlideContent::new(5, "Roadmap")
            .with_layout(SlideLayout::Bullets)
            .with_content(items(2));

        assert_eq!(engine.layout(&unknown, 4), engine.layout(&bullets, 4));
    }

    #[test]
    fn test_image_text() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(4, "Product")
            .with_layout(SlideLayout::ImageText)
            .with_content(items(2));
        let primitives = engine.layout(&slide, 3);

        assert!(text_frame(&primitives, PRODUCT_DEMO_CAPTION).is_some());
        let first = text_frame(&primitives, "item-0").unwrap();
        let second = text_frame(&primitives, "item-1").unwrap();
        assert!((second.y - first.y - 1.05).abs() < EPS);
        assert!(first.x > 5.0);
    }

    #[test]
    fn test_chart_metrics_are_capped() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(6, "Traction")
            .with_layout(SlideLayout::Chart)
            .with_content(items(6));
        let primitives = engine.layout(&slide, 5);

        assert!(text_frame(&primitives, CHART_CAPTION).is_some());
        assert!(text_frame(&primitives, "item-3").is_some());
        assert!(text_frame(&primitives, "item-4").is_none());

        let w0 = text_frame(&primitives, "item-0").unwrap().width;
        assert!((w0 - (8.8 / 4.0 - 0.1)).abs() < EPS);
    }

    #[test]
    fn test_chart_without_metrics() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let engine = LayoutEngine::new(&palette, &meta);

        let slide = SlideContent::new(6, "Traction").with_layout(SlideLayout::Chart);
        let primitives = engine.layout(&slide, 5);
        let texts: Vec<_> = primitives.iter().filter_map(Primitive::text).collect();
        assert_eq!(texts, vec!["Traction", "6", CHART_CAPTION]);
    }

    #[test]
    fn test_custom_metrics() {
        let palette = ThemePalette::default();
        let meta = metadata();
        let metrics = LayoutMetrics {
            content_top: 2.0,
            bullet_row_pitch: 0.5,
            ..LayoutMetrics::default()
        };
        let engine = LayoutEngine::new(&palette, &meta).with_metrics(metrics);
        assert_eq!(engine.metrics(), &metrics);
        assert_eq!(engine.metrics().image_text_row_pitch, 1.05);

        let slide = SlideContent::new(2, "Problem").with_content(items(2));
        let primitives = engine.layout(&slide, 1);
        assert!((text_frame(&primitives, "item-1").unwrap().y - 2.5).abs() < EPS);
    }

    fn any_layout() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("title".to_string())),
            Just(Some("bullets".to_string())),
            Just(Some("two-column".to_string())),
            Just(Some("image-text".to_string())),
            Just(Some("chart".to_string())),
            "[a-z]{1,10}".prop_map(Some),
        ]
    }

    proptest! {
        #[test]
        fn prop_every_slide_has_title_and_accent(
            layout in any_layout(),
            n in 0usize..12,
            index in 0usize..20,
        ) {
            let palette = ThemePalette::default();
            let meta = metadata();
            let engine = LayoutEngine::new(&palette, &meta);

            let mut slide = SlideContent::new(index as u32 + 1, "Headline").with_content(items(n));
            slide.layout = layout;
            let primitives = engine.layout(&slide, index);

            prop_assert!(text_frame(&primitives, "Headline").is_some());
            prop_assert!(primitives.iter().any(|p| p.fill() == Some(palette.accent)));
        }

        #[test]
        fn prop_bullet_row_pitch_is_constant(n in 2usize..30) {
            let palette = ThemePalette::default();
            let meta = metadata();
            let engine = LayoutEngine::new(&palette, &meta);

            let slide = SlideContent::new(2, "Problem").with_content(items(n));
            let primitives = engine.layout(&slide, 1);

            let ys: Vec<f64> = (0..n)
                .map(|i| text_frame(&primitives, &format!("item-{i}")).unwrap().y)
                .collect();
            for pair in ys.windows(2) {
                prop_assert!((pair[1] - pair[0] - 0.65).abs() < EPS);
            }
        }

        #[test]
        fn prop_two_column_split(n in 0usize..25) {
            let palette = ThemePalette::default();
            let meta = metadata();
            let engine = LayoutEngine::new(&palette, &meta);

            let slide = SlideContent::new(3, "Features")
                .with_layout(SlideLayout::TwoColumn)
                .with_content(items(n));
            let primitives = engine.layout(&slide, 2);

            let (mut left, mut right) = (0usize, 0usize);
            for i in 0..n {
                let frame = text_frame(&primitives, &format!("item-{i}")).unwrap();
                if frame.x < 5.0 { left += 1 } else { right += 1 }
            }
            prop_assert_eq!(left, n.div_ceil(2));
            prop_assert_eq!(right, n / 2);

            let dividers = primitives
                .iter()
                .filter(|p| p.fill() == Some(palette.divider))
                .count();
            prop_assert_eq!(dividers, 1);
        }
    }
}
