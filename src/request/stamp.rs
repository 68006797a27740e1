use std::{fs, path::Path};

use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, ObjectId, StringFormat,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{Result, VacationError};

const FONT_KEY: &str = "FVacStamp";
/// A4 portrait, used when a page carries no MediaBox anywhere up its tree.
const FALLBACK_MEDIA_BOX: [f32; 4] = [0.0, 0.0, 595.0, 842.0];

/// Where each request value goes on the template page.
///
/// `x`/`y` are measured from the top-left corner, `y` growing downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPosition {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

/// Layout and naming for stamped request forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampConfig {
    #[serde(default)]
    pub text_positions: Vec<TextPosition>,
    #[serde(rename = "Prefix", default = "StampConfig::default_prefix")]
    pub prefix: String,
    #[serde(rename = "FamilyName", default = "StampConfig::default_family_name")]
    pub family_name: String,
    #[serde(default = "StampConfig::default_font_size")]
    pub font_size: f32,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            text_positions: Vec::new(),
            prefix: Self::default_prefix(),
            family_name: Self::default_family_name(),
            font_size: Self::default_font_size(),
        }
    }
}

impl StampConfig {
    pub fn default_prefix() -> String {
        "Prefix".into()
    }

    pub fn default_family_name() -> String {
        "FamilyName".into()
    }

    pub fn default_font_size() -> f32 {
        12.0
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VacationError::MissingFile(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|err| VacationError::Config(format!("{}: {err}", path.display())))
    }

    /// Checks that one value was supplied for every configured position.
    pub fn check_text_count(&self, count: usize) -> Result<()> {
        if self.text_positions.is_empty() {
            return Err(VacationError::Config(
                "no text positions found in the config file".into(),
            ));
        }
        if self.text_positions.len() != count {
            return Err(VacationError::InvalidInput(format!(
                "{count} text(s) given but the config defines {} position(s)",
                self.text_positions.len()
            )));
        }
        Ok(())
    }
}

/// Draws each text at its position on every page of `template` and saves the
/// result to `output`. Returns the number of pages stamped.
pub fn stamp_pdf(
    template: &Path,
    output: &Path,
    config: &StampConfig,
    texts: &[String],
) -> Result<usize> {
    if !template.exists() {
        return Err(VacationError::MissingFile(template.to_path_buf()));
    }
    let mut doc = Document::load(template)?;
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
    for &page_id in &pages {
        let [llx, _, _, ury] = media_box(&doc, page_id);
        let content = Content {
            operations: text_operations(config, texts, llx, ury),
        };
        let encoded = content.encode()?;

        let mut resources =
            inherited_dict(&doc, page_id, b"Resources").unwrap_or_else(Dictionary::new);
        let mut fonts = match resources.get(b"Font") {
            Ok(obj) => resolve_dict(&doc, obj)
                .cloned()
                .unwrap_or_else(Dictionary::new),
            Err(_) => Dictionary::new(),
        };
        fonts.set(FONT_KEY, Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));
        doc.get_object_mut(page_id)?
            .as_dict_mut()?
            .set("Resources", Object::Dictionary(resources));

        doc.add_page_contents(page_id, encoded)?;
        debug!(?page_id, "page stamped");
    }

    doc.save(output)?;
    info!(output = %output.display(), pages = pages.len(), "request form stamped");
    Ok(pages.len())
}

fn text_operations(config: &StampConfig, texts: &[String], llx: f32, ury: f32) -> Vec<Operation> {
    let mut ops = vec![
        Operation::new("q", vec![]),
        Operation::new(
            "rg",
            vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        ),
    ];
    for (position, text) in config.text_positions.iter().zip(texts) {
        ops.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(FONT_KEY.as_bytes().to_vec()),
                    Object::Real(config.font_size),
                ],
            ),
            Operation::new(
                "Td",
                vec![Object::Real(llx + position.x), Object::Real(ury - position.y)],
            ),
            Operation::new("Tj", vec![Object::String(win_ansi(text), StringFormat::Literal)]),
            Operation::new("ET", vec![]),
        ]);
    }
    ops.push(Operation::new("Q", vec![]));
    ops
}

/// Characters WinAnsi places in 0x80..=0x9F, where Latin-1 has controls.
const WIN_ANSI_EXTRAS: &[(char, u8)] = &[
    ('\u{20ac}', 0x80),
    ('\u{201a}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201e}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02c6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8a),
    ('\u{2039}', 0x8b),
    ('\u{0152}', 0x8c),
    ('\u{017d}', 0x8e),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201c}', 0x93),
    ('\u{201d}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02dc}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9a),
    ('\u{203a}', 0x9b),
    ('\u{0153}', 0x9c),
    ('\u{017e}', 0x9e),
    ('\u{0178}', 0x9f),
];

/// Encodes `text` for the WinAnsi Helvetica font; unmappable characters
/// become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match u32::from(c) {
        code @ (0x20..=0x7e | 0xa0..=0xff) => code as u8,
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(extra, _)| *extra == c)
            .map(|(_, byte)| *byte)
            .unwrap_or(b'?'),
    }
}

fn media_box(doc: &Document, page_id: ObjectId) -> [f32; 4] {
    let Some(values) = inherited(doc, page_id, b"MediaBox")
        .and_then(|obj| resolve(doc, obj).as_array().ok())
    else {
        return FALLBACK_MEDIA_BOX;
    };
    let mut bounds = FALLBACK_MEDIA_BOX;
    if values.len() == 4 {
        for (slot, value) in bounds.iter_mut().zip(values) {
            if let Ok(number) = resolve(doc, value).as_float() {
                *slot = number;
            }
        }
    }
    bounds
}

/// Looks `key` up on the page, then on its ancestors in the page tree.
fn inherited<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut current = Some(page_id);
    while let Some(id) = current {
        let node = doc.get_dictionary(id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value);
        }
        current = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
    None
}

fn inherited_dict(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Dictionary> {
    inherited(doc, page_id, key)
        .and_then(|obj| resolve_dict(doc, obj))
        .cloned()
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        other => other,
    }
}

fn resolve_dict<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    resolve(doc, obj).as_dict().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_fill_missing_keys() {
        let config: StampConfig =
            serde_json::from_str(r#"{"text_positions": [{"x": 10}, {"y": 20.5}]}"#).unwrap();
        assert_eq!(config.prefix, "Prefix");
        assert_eq!(config.family_name, "FamilyName");
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.text_positions[0], TextPosition { x: 10.0, y: 0.0 });
        assert_eq!(config.text_positions[1], TextPosition { x: 0.0, y: 20.5 });
    }

    #[test]
    fn text_count_must_match_positions() {
        let empty = StampConfig::default();
        assert!(matches!(empty.check_text_count(4), Err(VacationError::Config(_))));

        let config = StampConfig {
            text_positions: vec![TextPosition::default(); 4],
            ..StampConfig::default()
        };
        assert!(config.check_text_count(4).is_ok());
        assert!(matches!(
            config.check_text_count(5),
            Err(VacationError::InvalidInput(_))
        ));
    }

    #[test]
    fn win_ansi_keeps_umlauts() {
        assert_eq!(win_ansi("Köln"), vec![b'K', 0xf6, b'l', b'n']);
        assert_eq!(win_ansi("\u{20ac}50"), vec![0x80, b'5', b'0']);
        assert_eq!(
            win_ansi("\u{201e}Urlaub\u{201c} 1\u{2013}3"),
            b"\x84Urlaub\x93 1\x963".to_vec()
        );
        assert_eq!(win_ansi("\u{0080}\u{4e2d}"), vec![b'?', b'?']);
    }

    #[test]
    fn positions_flip_to_pdf_space() {
        let config = StampConfig {
            text_positions: vec![TextPosition { x: 50.0, y: 100.0 }],
            ..StampConfig::default()
        };
        let ops = text_operations(&config, &["x".to_string()], 0.0, 842.0);
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        let coords: Vec<f32> = td.operands.iter().map(|o| o.as_float().unwrap()).collect();
        assert_eq!(coords, vec![50.0, 742.0]);
    }
}
