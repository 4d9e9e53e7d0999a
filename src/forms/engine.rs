//! AcroForm filling on top of lopdf.
//!
//! Values are written into the field dictionaries (`/V`, and `/AS` on checkbox
//! widgets). No appearance streams are generated; `NeedAppearances` tells the
//! viewer to draw them.

use std::collections::HashMap;
use std::fmt::Display;

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};

use super::{FieldValues, FormError, FormFiller, FormId};

/// Guards against `/Kids` cycles in malformed templates.
const MAX_FIELD_DEPTH: usize = 32;

const DEFAULT_ON_STATE: &[u8] = b"Yes";
const OFF_STATE: &[u8] = b"Off";

/// Default [`FormFiller`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AcroFormEngine;

/// A named field and the widget annotations that display it.
#[derive(Debug)]
struct FieldNode {
    name: String,
    id: ObjectId,
    widgets: Vec<ObjectId>,
}

enum AcroFormLocation {
    Indirect(ObjectId),
    InCatalog(ObjectId),
}

impl AcroFormEngine {
    pub fn new() -> Self {
        Self
    }

    /// Fully qualified names of every field in a template.
    pub fn field_names(template: &[u8]) -> Result<Vec<String>, FormError> {
        let doc = load(template)?;
        let location = locate_acroform(&doc)?;
        let acroform = acroform_dict(&doc, &location)?;
        Ok(collect_fields(&doc, acroform)
            .into_iter()
            .map(|node| node.name)
            .collect())
    }
}

impl FormFiller for AcroFormEngine {
    fn fill(&self, form: FormId, template: &[u8], values: &FieldValues) -> Result<Vec<u8>, FormError> {
        let mut doc = load(template)?;
        let location = locate_acroform(&doc)?;
        let nodes = collect_fields(&doc, acroform_dict(&doc, &location)?);
        let by_name: HashMap<&str, &FieldNode> =
            nodes.iter().map(|node| (node.name.as_str(), node)).collect();

        let mut updates: Vec<(ObjectId, &'static str, Object)> = Vec::new();
        let mut applied = 0usize;

        for (name, value) in values.texts() {
            let Some(node) = by_name.get(name) else {
                log::debug!("{}: template has no text field {}", form, name);
                continue;
            };
            updates.push((node.id, "V", encode_text(value)));
            applied += 1;
        }

        for (name, checked) in values.checks() {
            let Some(node) = by_name.get(name) else {
                log::debug!("{}: template has no checkbox {}", form, name);
                continue;
            };
            let mut field_state: Option<Vec<u8>> = None;
            for widget in &node.widgets {
                let state = if checked {
                    on_state(&doc, *widget).unwrap_or_else(|| DEFAULT_ON_STATE.to_vec())
                } else {
                    OFF_STATE.to_vec()
                };
                field_state.get_or_insert_with(|| state.clone());
                updates.push((*widget, "AS", Object::Name(state)));
            }
            let state = field_state
                .unwrap_or_else(|| (if checked { DEFAULT_ON_STATE } else { OFF_STATE }).to_vec());
            updates.push((node.id, "V", Object::Name(state)));
            applied += 1;
        }

        for (id, key, value) in updates {
            dict_mut(&mut doc, id)?.set(key, value);
        }

        let acroform = acroform_dict_mut(&mut doc, &location)?;
        acroform.set("NeedAppearances", Object::Boolean(true));
        // XFA data takes precedence over AcroForm values in viewers that support it.
        acroform.remove(b"XFA");

        log::debug!(
            "{}: filled {} of {} values ({} fields in template)",
            form,
            applied,
            values.len(),
            nodes.len()
        );

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|err| pdf_error("failed to write filled form", err))?;
        Ok(buffer)
    }
}

fn pdf_error(context: &str, err: impl Display) -> FormError {
    FormError::Pdf(format!("{}: {}", context, err))
}

fn load(template: &[u8]) -> Result<Document, FormError> {
    Document::load_mem(template).map_err(|err| pdf_error("failed to parse template", err))
}

fn locate_acroform(doc: &Document) -> Result<AcroFormLocation, FormError> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(|root| root.as_reference())
        .map_err(|err| pdf_error("missing document catalog", err))?;
    let catalog = doc
        .get_object(catalog_id)
        .and_then(|obj| obj.as_dict())
        .map_err(|err| pdf_error("invalid document catalog", err))?;

    match catalog.get(b"AcroForm") {
        Ok(Object::Reference(id)) => Ok(AcroFormLocation::Indirect(*id)),
        Ok(Object::Dictionary(_)) => Ok(AcroFormLocation::InCatalog(catalog_id)),
        _ => Err(FormError::Pdf("template has no AcroForm".to_string())),
    }
}

fn acroform_dict<'a>(doc: &'a Document, location: &AcroFormLocation) -> Result<&'a Dictionary, FormError> {
    let found = match location {
        AcroFormLocation::Indirect(id) => doc.get_object(*id).and_then(|obj| obj.as_dict()),
        AcroFormLocation::InCatalog(catalog) => doc
            .get_object(*catalog)
            .and_then(|obj| obj.as_dict())
            .and_then(|dict| dict.get(b"AcroForm"))
            .and_then(|obj| obj.as_dict()),
    };
    found.map_err(|err| pdf_error("invalid AcroForm", err))
}

fn acroform_dict_mut<'a>(
    doc: &'a mut Document,
    location: &AcroFormLocation,
) -> Result<&'a mut Dictionary, FormError> {
    match location {
        AcroFormLocation::Indirect(id) => dict_mut(doc, *id),
        AcroFormLocation::InCatalog(catalog) => dict_mut(doc, *catalog)?
            .get_mut(b"AcroForm")
            .and_then(|obj| obj.as_dict_mut())
            .map_err(|err| pdf_error("invalid AcroForm", err)),
    }
}

fn dict_mut(doc: &mut Document, id: ObjectId) -> Result<&mut Dictionary, FormError> {
    doc.get_object_mut(id)
        .and_then(|obj| obj.as_dict_mut())
        .map_err(|err| pdf_error("invalid field object", err))
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn references(doc: &Document, obj: &Object) -> Vec<ObjectId> {
    resolve(doc, obj)
        .and_then(|obj| obj.as_array().ok())
        .map(|items| items.iter().filter_map(|item| item.as_reference().ok()).collect())
        .unwrap_or_default()
}

fn collect_fields(doc: &Document, acroform: &Dictionary) -> Vec<FieldNode> {
    let mut nodes = Vec::new();
    if let Ok(fields) = acroform.get(b"Fields") {
        for id in references(doc, fields) {
            walk_field(doc, id, None, 0, &mut nodes);
        }
    }
    nodes
}

/// Depth-first walk. Kids without `/T` are widgets of their parent; kids
/// with `/T` are child fields whose names extend the parent's.
fn walk_field(
    doc: &Document,
    id: ObjectId,
    parent: Option<&str>,
    depth: usize,
    out: &mut Vec<FieldNode>,
) {
    if depth > MAX_FIELD_DEPTH {
        log::warn!("field tree deeper than {} levels, ignoring the rest", MAX_FIELD_DEPTH);
        return;
    }
    let Ok(dict) = doc.get_object(id).and_then(|obj| obj.as_dict()) else {
        return;
    };
    let Some(partial) = partial_name(doc, dict) else {
        return;
    };
    let name = match parent {
        Some(parent) => format!("{}.{}", parent, partial),
        None => partial,
    };

    let kids = dict
        .get(b"Kids")
        .map(|kids| references(doc, kids))
        .unwrap_or_default();
    let (fields, widgets): (Vec<ObjectId>, Vec<ObjectId>) = kids.into_iter().partition(|kid| {
        doc.get_object(*kid)
            .and_then(|obj| obj.as_dict())
            .map(|kid| kid.has(b"T"))
            .unwrap_or(false)
    });

    for kid in fields.iter().copied() {
        walk_field(doc, kid, Some(&name), depth + 1, out);
    }

    let widgets = if fields.is_empty() && widgets.is_empty() {
        // field and widget share one dictionary
        vec![id]
    } else {
        widgets
    };
    out.push(FieldNode { name, id, widgets });
}

fn partial_name(doc: &Document, dict: &Dictionary) -> Option<String> {
    let obj = resolve(doc, dict.get(b"T").ok()?)?;
    match obj {
        Object::String(bytes, _) => Some(decode_text(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Checkbox "on" appearance name: the first `/AP /N` key that is not `Off`.
fn on_state(doc: &Document, widget: ObjectId) -> Option<Vec<u8>> {
    let dict = doc.get_object(widget).and_then(|obj| obj.as_dict()).ok()?;
    let appearance = resolve(doc, dict.get(b"AP").ok()?)?.as_dict().ok()?;
    let normal = resolve(doc, appearance.get(b"N").ok()?)?.as_dict().ok()?;
    normal
        .iter()
        .map(|(key, _)| key)
        .find(|key| key.as_slice() != OFF_STATE)
        .cloned()
}

fn decode_text(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(b"\xFE\xFF") {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// ASCII goes out as a literal string; anything else as UTF-16BE with a BOM.
fn encode_text(value: &str) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(value.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Stream};

    const NAME_FIELD: &str = "topmostSubform[0].Page1[0].TextField1[0]";
    const CHECKBOX: &str = "topmostSubform[0].Page1[0].CheckBox1[0]";

    /// One page, a text field and a checkbox whose "on" state is `/1`.
    fn fixture() -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1i64,
            }),
        );

        let on = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let off = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let name_field = doc.add_object(dictionary! {
            "FT" => "Tx",
            "T" => Object::string_literal("TextField1[0]"),
            "Subtype" => "Widget",
            "P" => page_id,
        });
        let checkbox = doc.add_object(dictionary! {
            "FT" => "Btn",
            "T" => Object::string_literal("CheckBox1[0]"),
            "Subtype" => "Widget",
            "P" => page_id,
            "V" => "Off",
            "AS" => "Off",
            "AP" => dictionary! { "N" => dictionary! { "1" => on, "Off" => off } },
        });
        let page1 = doc.add_object(dictionary! {
            "T" => Object::string_literal("Page1[0]"),
            "Kids" => vec![name_field.into(), checkbox.into()],
        });
        let subform = doc.add_object(dictionary! {
            "T" => Object::string_literal("topmostSubform[0]"),
            "Kids" => vec![page1.into()],
        });
        let acroform = doc.add_object(dictionary! {
            "Fields" => vec![subform.into()],
            "XFA" => Object::string_literal("<xdp/>"),
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
            "AcroForm" => acroform,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn field<'a>(doc: &'a Document, name: &str) -> &'a Dictionary {
        let location = locate_acroform(doc).unwrap();
        let node = collect_fields(doc, acroform_dict(doc, &location).unwrap())
            .into_iter()
            .find(|node| node.name == name)
            .unwrap();
        doc.get_object(node.id).unwrap().as_dict().unwrap()
    }

    #[test]
    fn test_field_names_are_fully_qualified() {
        let names = AcroFormEngine::field_names(&fixture()).unwrap();
        assert!(names.contains(&NAME_FIELD.to_string()));
        assert!(names.contains(&CHECKBOX.to_string()));
        assert!(names.contains(&"topmostSubform[0]".to_string()));
    }

    #[test]
    fn test_fill_writes_values_and_checkbox_state() {
        let mut values = FieldValues::new();
        values.set_text(NAME_FIELD, "Mary Major");
        values.set_check(CHECKBOX, true);
        values.set_text("topmostSubform[0].Page9[0].Missing[0]", "ignored");

        let filled = AcroFormEngine.fill(FormId::De111, &fixture(), &values).unwrap();
        let doc = Document::load_mem(&filled).unwrap();

        match field(&doc, NAME_FIELD).get(b"V").unwrap() {
            Object::String(bytes, _) => assert_eq!(bytes.as_slice(), b"Mary Major"),
            other => panic!("unexpected /V {:?}", other),
        }
        let checkbox = field(&doc, CHECKBOX);
        assert_eq!(checkbox.get(b"V").unwrap().as_name().unwrap(), b"1");
        assert_eq!(checkbox.get(b"AS").unwrap().as_name().unwrap(), b"1");

        let location = locate_acroform(&doc).unwrap();
        let acroform = acroform_dict(&doc, &location).unwrap();
        assert!(acroform.get(b"NeedAppearances").unwrap().as_bool().unwrap());
        assert!(!acroform.has(b"XFA"));
    }

    #[test]
    fn test_unchecked_box_is_turned_off() {
        let mut values = FieldValues::new();
        values.set_check(CHECKBOX, false);

        let filled = AcroFormEngine.fill(FormId::De150, &fixture(), &values).unwrap();
        let doc = Document::load_mem(&filled).unwrap();
        let checkbox = field(&doc, CHECKBOX);
        assert_eq!(checkbox.get(b"V").unwrap().as_name().unwrap(), b"Off");
        assert_eq!(checkbox.get(b"AS").unwrap().as_name().unwrap(), b"Off");
    }

    #[test]
    fn test_non_ascii_text_is_utf16() {
        let encoded = encode_text("José Núñez");
        match &encoded {
            Object::String(bytes, _) => {
                assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
                assert_eq!(decode_text(bytes), "José Núñez");
            }
            other => panic!("unexpected encoding {:?}", other),
        }
    }

    #[test]
    fn test_invalid_templates_are_errors() {
        let values = FieldValues::new();
        assert!(matches!(
            AcroFormEngine.fill(FormId::De111, b"not a pdf", &values),
            Err(FormError::Pdf(_))
        ));

        let mut doc = Document::with_version("1.7");
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog" });
        doc.trailer.set("Root", catalog_id);
        let mut plain = Vec::new();
        doc.save_to(&mut plain).unwrap();
        assert!(matches!(
            AcroFormEngine.fill(FormId::De111, &plain, &values),
            Err(FormError::Pdf(message)) if message.contains("AcroForm")
        ));
    }
}
