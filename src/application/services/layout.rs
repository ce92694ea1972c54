//! Layout engine - paints the roadmap hierarchy top to bottom
//!
//! A single vertical cursor advances line by line; practice leaves are
//! counted on the way so the progress bar needs no second walk.

use crate::application::ports::{FontTier, TextCanvas};
use crate::domain::entities::{ModuleKind, ProgressCounters, RoadmapDocument};
use crate::domain::value_objects::Point;

use super::outlined_text::{clamp_outline_width, draw_outlined_text, OutlineStyle};

/// Glyph in front of a completed practice
pub const COMPLETED_PREFIX: &str = "✅";
/// Glyph in front of a pending practice
pub const PENDING_PREFIX: &str = "☐";

/// Vertical spacing and indentation, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub title_block: f32,
    pub phase_line: f32,
    pub module_line: f32,
    pub subtopic_line: f32,
    pub practice_line: f32,
    /// Gap after the last practice of a subtopic
    pub subtopic_gap: f32,
    /// Gap after the last subtopic of a module
    pub module_gap: f32,
    pub subtopic_indent: f32,
    pub practice_indent: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            title_block: 100.0,
            phase_line: 50.0,
            module_line: 35.0,
            subtopic_line: 30.0,
            practice_line: 25.0,
            subtopic_gap: 10.0,
            module_gap: 20.0,
            subtopic_indent: 20.0,
            practice_indent: 40.0,
        }
    }
}

/// Paint title, phases, modules, subtopics and practices; return the counters
pub fn render_roadmap<C: TextCanvas + ?Sized>(
    canvas: &mut C,
    document: &RoadmapDocument,
    metrics: &LayoutMetrics,
) -> ProgressCounters {
    let margin_x = document.resolution.margin_x() as f32;
    let margin_y = document.resolution.margin_y() as f32;
    let outline = OutlineStyle::new(
        document.outline_color,
        clamp_outline_width(document.outline_width),
    );
    let primary = document.primary_text_color;
    let completed_color = document.completed_text_color;

    let mut counters = ProgressCounters::default();

    draw_outlined_text(
        canvas,
        Point::new(margin_x, margin_y),
        &document.title,
        FontTier::Title,
        primary,
        outline,
    );
    let mut y = margin_y + metrics.title_block;

    for module in &document.modules {
        if module.kind() == ModuleKind::PhaseSeparator {
            draw_outlined_text(
                canvas,
                Point::new(margin_x, y),
                &module.name,
                FontTier::Phase,
                completed_color,
                outline,
            );
            y += metrics.phase_line;
            continue;
        }

        draw_outlined_text(
            canvas,
            Point::new(margin_x, y),
            &format!("▶ {}", module.name),
            FontTier::Module,
            primary,
            outline,
        );
        y += metrics.module_line;

        for subtopic in module.subtopics() {
            draw_outlined_text(
                canvas,
                Point::new(margin_x + metrics.subtopic_indent, y),
                &format!("  • {}", subtopic.name),
                FontTier::Practice,
                primary,
                outline,
            );
            y += metrics.subtopic_line;

            for practice in &subtopic.practices {
                counters.record(practice.completed);
                let (prefix, color) = if practice.completed {
                    (COMPLETED_PREFIX, completed_color)
                } else {
                    (PENDING_PREFIX, primary)
                };

                draw_outlined_text(
                    canvas,
                    Point::new(margin_x + metrics.practice_indent, y),
                    &format!("    {} {}", prefix, practice.name),
                    FontTier::Practice,
                    color,
                    outline,
                );
                y += metrics.practice_line;
            }

            y += metrics.subtopic_gap;
        }
        y += metrics.module_gap;
    }

    counters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::canvas_port::testing::RecordingCanvas;
    use crate::domain::entities::roadmap::tests::sample_document;
    use crate::domain::entities::{Module, Practice, Subtopic};
    use crate::domain::value_objects::Rgb;

    fn render_plain(document: &RoadmapDocument) -> (RecordingCanvas, ProgressCounters) {
        let mut canvas = RecordingCanvas::default();
        let counters = render_roadmap(&mut canvas, document, &LayoutMetrics::default());
        (canvas, counters)
    }

    #[test]
    fn test_empty_roadmap_draws_only_title() {
        let mut doc = sample_document();
        doc.modules.clear();
        doc.outline_width = 0;

        let (canvas, counters) = render_plain(&doc);
        assert_eq!(counters, ProgressCounters::default());
        assert_eq!(counters.percentage(), 0.0);

        let texts = canvas.texts();
        assert_eq!(texts.len(), 1);
        // 400x300 canvas: margins are 20 and 15
        assert_eq!(texts[0].0, Point::new(20.0, 15.0));
        assert_eq!(texts[0].1, "Roadmap Rust");
        assert_eq!(texts[0].2, FontTier::Title);
    }

    #[test]
    fn test_line_positions_and_styles() {
        let mut doc = sample_document();
        doc.outline_width = 0;

        let (canvas, counters) = render_plain(&doc);
        assert_eq!(counters, ProgressCounters::new(2, 1));

        let texts = canvas.texts();
        let lines: Vec<(f32, f32, &str, FontTier, Rgb)> = texts
            .iter()
            .map(|(p, t, tier, c)| (p.x, p.y, t.as_str(), *tier, *c))
            .collect();

        let done = doc.completed_text_color;
        let primary = doc.primary_text_color;
        assert_eq!(
            lines,
            vec![
                (20.0, 15.0, "Roadmap Rust", FontTier::Title, primary),
                (20.0, 115.0, "FASE 1", FontTier::Phase, done),
                (20.0, 165.0, "▶ Semana 1: Fundamentos", FontTier::Module, primary),
                (40.0, 200.0, "  • Ownership", FontTier::Practice, primary),
                (60.0, 230.0, "    ✅ P1", FontTier::Practice, done),
                (60.0, 255.0, "    ☐ P2", FontTier::Practice, primary),
            ]
        );
    }

    #[test]
    fn test_trailing_gaps_between_modules() {
        let mut doc = sample_document();
        doc.outline_width = 0;
        doc.modules = vec![
            Module::regular(
                "A",
                vec![Subtopic::new("S", vec![Practice::pending("p")])],
            ),
            Module::regular("B", vec![]),
            Module::regular("C", vec![]),
        ];

        let (canvas, _) = render_plain(&doc);
        let ys: Vec<f32> = canvas.texts().iter().map(|t| t.0.y).collect();
        // title 15, A 115, S 150, p 180, gap 10 + 20 -> B 235, B has no subtopics -> C 290
        assert_eq!(ys, vec![15.0, 115.0, 150.0, 180.0, 235.0, 290.0]);
    }

    #[test]
    fn test_counters_match_document_walk() {
        let mut doc = sample_document();
        doc.modules.push(Module::regular(
            "Semana 2",
            vec![
                Subtopic::new("A", vec![Practice::new("a1", true), Practice::new("a2", true)]),
                Subtopic::new("B", vec![]),
                Subtopic::new("C", vec![Practice::pending("c1")]),
            ],
        ));
        let mut phase = Module::phase("FASE 2");
        phase.subtopics = Some(vec![Subtopic::new("hidden", vec![Practice::new("h", true)])]);
        doc.modules.push(phase);

        let (canvas, counters) = render_plain(&doc);
        assert_eq!(counters, doc.counters());
        assert_eq!(counters, ProgressCounters::new(5, 3));
        assert!(counters.completed <= counters.total);
        assert!(canvas.texts().iter().all(|t| !t.1.contains("hidden")));
    }

    #[test]
    fn test_every_line_is_outlined() {
        let doc = sample_document();
        let (canvas, _) = render_plain(&doc);

        // Six lines, outline width 1 -> nine stamps each
        assert_eq!(canvas.texts().len(), 6 * 9);
        let outline_stamps = canvas
            .texts()
            .iter()
            .filter(|t| t.3 == doc.outline_color)
            .count();
        assert_eq!(outline_stamps, 6 * 8);
    }

    #[test]
    fn test_outline_width_is_clamped() {
        let mut doc = sample_document();
        doc.modules.clear();
        doc.outline_width = 50;

        let (canvas, _) = render_plain(&doc);
        assert_eq!(canvas.texts().len(), 11 * 11);
    }
}
