//! Font resolution - one lookup per render, four tiers out
//!
//! The preferred family is looked up in the system font database in bold
//! (title, phase) and regular (module, practice) weights. If either weight is
//! missing, a single fallback face at one uniform size serves every tier.
//! With no usable face at all, text runs are measured approximately and not
//! painted.

use std::sync::Arc;

use fontdb::{Database, Family, Query, Weight, ID};

use crate::application::ports::{FontTier, TextMetrics};

/// Families tried, in order, when the preferred one is missing
const FALLBACK_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Segoe UI",
    "Helvetica",
    "Noto Sans",
];

/// Width of one character, in ems, when no face is available
const APPROX_CHAR_WIDTH: f32 = 0.5;

/// Size and weight of each tier with the preferred family
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierSpec {
    pub size: f32,
    pub bold: bool,
}

/// Preferred size and weight for `tier`
pub fn tier_spec(tier: FontTier) -> TierSpec {
    match tier {
        FontTier::Title => TierSpec {
            size: 60.0,
            bold: true,
        },
        FontTier::Phase => TierSpec {
            size: 36.0,
            bold: true,
        },
        FontTier::Module => TierSpec {
            size: 30.0,
            bold: false,
        },
        FontTier::Practice => TierSpec {
            size: 24.0,
            bold: false,
        },
    }
}

/// Raw font file data plus the face index inside it
#[derive(Clone, Debug)]
pub struct FaceData {
    data: Arc<Vec<u8>>,
    index: u32,
}

impl FaceData {
    /// Wrap font bytes, rejecting data ttf-parser cannot read
    pub fn new(data: Vec<u8>, index: u32) -> Option<Self> {
        ttf_parser::Face::parse(&data, index).ok()?;
        Some(Self {
            data: Arc::new(data),
            index,
        })
    }

    fn load(db: &Database, id: ID) -> Option<Self> {
        let (data, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
        Self::new(data, index)
    }

    /// Parse the face; cheap, only the table directory is read
    pub fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index).ok()
    }
}

/// A face at a pixel size
#[derive(Clone, Debug)]
pub struct SizedFont {
    pub face: Option<FaceData>,
    pub size: f32,
}

impl SizedFont {
    /// Pixels per font design unit
    pub fn scale(&self, face: &ttf_parser::Face<'_>) -> f32 {
        self.size / face.units_per_em() as f32
    }

    /// Advance width and ascent of `text`
    pub fn measure(&self, text: &str) -> TextMetrics {
        let Some(face) = self.face.as_ref().and_then(FaceData::face) else {
            return TextMetrics {
                width: text.chars().count() as f32 * self.size * APPROX_CHAR_WIDTH,
                ascent: None,
            };
        };

        let scale = self.scale(&face);
        let width = text
            .chars()
            .map(|c| {
                let glyph = face.glyph_index(c).unwrap_or(ttf_parser::GlyphId(0));
                face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale
            })
            .sum();

        TextMetrics {
            width,
            ascent: Some(face.ascender() as f32 * scale),
        }
    }
}

/// Where the resolved fonts came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    Preferred(String),
    Fallback(String),
    Unavailable,
}

/// The four resolved tiers used by one render
#[derive(Clone, Debug)]
pub struct FontSet {
    title: SizedFont,
    phase: SizedFont,
    module: SizedFont,
    practice: SizedFont,
    source: FontSource,
}

impl FontSet {
    /// Resolve against the fonts installed on this machine
    pub fn resolve(family: &str, fallback_size: f32) -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        crate::log!("Font database: {} faces", db.len());
        Self::resolve_in(&db, family, fallback_size)
    }

    /// Resolve against an explicit font database
    pub fn resolve_in(db: &Database, family: &str, fallback_size: f32) -> Self {
        let regular = query_face(db, family, Weight::NORMAL);
        let bold = query_face(db, family, Weight::BOLD);

        if let (Some(regular), Some(bold)) = (regular, bold) {
            crate::log!("Using font family '{}'", family);
            let make = |tier: FontTier| {
                let spec = tier_spec(tier);
                SizedFont {
                    face: Some(if spec.bold { bold.clone() } else { regular.clone() }),
                    size: spec.size,
                }
            };
            return Self {
                title: make(FontTier::Title),
                phase: make(FontTier::Phase),
                module: make(FontTier::Module),
                practice: make(FontTier::Practice),
                source: FontSource::Preferred(family.to_string()),
            };
        }

        crate::log!(
            "Warning: font family '{}' not found, using fallback font for all tiers",
            family
        );

        let fallback = FALLBACK_FAMILIES
            .iter()
            .find_map(|name| query_face(db, name, Weight::NORMAL).map(|f| (f, name.to_string())))
            .or_else(|| {
                db.faces().find_map(|info| {
                    let name = info
                        .families
                        .first()
                        .map(|(n, _)| n.clone())
                        .unwrap_or_default();
                    FaceData::load(db, info.id).map(|f| (f, name))
                })
            });

        match fallback {
            Some((face, name)) => {
                crate::log!("Fallback font: '{}' at {}px", name, fallback_size);
                Self::uniform(Some(face), fallback_size, FontSource::Fallback(name))
            }
            None => {
                crate::log!("Warning: no usable font found, text will not be painted");
                Self::unavailable(fallback_size)
            }
        }
    }

    /// A font set with no faces; text is measured approximately and skipped
    pub fn unavailable(size: f32) -> Self {
        Self::uniform(None, size, FontSource::Unavailable)
    }

    /// One face at one size for every tier
    pub fn uniform(face: Option<FaceData>, size: f32, source: FontSource) -> Self {
        let font = SizedFont { face, size };
        Self {
            title: font.clone(),
            phase: font.clone(),
            module: font.clone(),
            practice: font,
            source,
        }
    }

    pub fn get(&self, tier: FontTier) -> &SizedFont {
        match tier {
            FontTier::Title => &self.title,
            FontTier::Phase => &self.phase,
            FontTier::Module => &self.module,
            FontTier::Practice => &self.practice,
        }
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }
}

fn query_face(db: &Database, family: &str, weight: Weight) -> Option<FaceData> {
    let families = [Family::Name(family)];
    let query = Query {
        families: &families,
        weight,
        ..Query::default()
    };
    let id = db.query(&query)?;
    FaceData::load(db, id)
}
