#![allow(dead_code)]

use lopdf::{dictionary, Document, Object, Stream};
use probate_forms_server::intake::RawIntake;
use serde_json::{json, Value};

/// Smallest payload that passes validation.
pub fn minimal_payload() -> Value {
    json!({
        "decedent_name": "Mary Major",
        "death_date": "2024-01-15",
        "death_place": "Glendale, CA",
        "death_address": "12 Oak Ave, Glendale, CA 91203",
        "death_resident": "yes",
        "petitioner_name": "Sam Major",
        "petitioner_relationship": "son",
        "petitioner_address": "9 Elm St, Pasadena, CA 91101",
        "petitioner_phone": "626-555-0100",
        "personal_property_value": "50000",
        "real_property_gross": "0",
        "has_will": "yes",
        "heirs_list": "",
        "admin_type": "full",
        "bond_required": "no"
    })
}

pub fn minimal_intake() -> RawIntake {
    serde_json::from_value(minimal_payload()).unwrap()
}

/// Minimal payload with `keys` removed.
pub fn payload_without(keys: &[&str]) -> Value {
    let mut payload = minimal_payload();
    let map = payload.as_object_mut().unwrap();
    for key in keys {
        map.remove(*key);
    }
    payload
}

/// A one-page AcroForm whose fields carry the given fully qualified names.
/// Names are stored flat in `/T`, which yields the same qualified name as a
/// nested tree.
pub fn acroform_template(text_fields: &[&str], checkboxes: &[&str]) -> Vec<u8> {
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

    let mut fields: Vec<Object> = Vec::new();
    for name in text_fields {
        let id = doc.add_object(dictionary! {
            "FT" => "Tx",
            "T" => Object::string_literal(*name),
            "Subtype" => "Widget",
            "P" => page_id,
        });
        fields.push(id.into());
    }
    for name in checkboxes {
        let on = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let off = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let id = doc.add_object(dictionary! {
            "FT" => "Btn",
            "T" => Object::string_literal(*name),
            "Subtype" => "Widget",
            "P" => page_id,
            "V" => "Off",
            "AS" => "Off",
            "AP" => dictionary! { "N" => dictionary! { "Yes" => on, "Off" => off } },
        });
        fields.push(id.into());
    }

    let acroform = doc.add_object(dictionary! { "Fields" => fields });
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

/// Value of a top-level field's `/V`, decoded as text or a name.
pub fn field_value(pdf: &[u8], name: &str) -> Option<String> {
    let doc = Document::load_mem(pdf).unwrap();
    let catalog = doc
        .get_object(doc.trailer.get(b"Root").unwrap().as_reference().unwrap())
        .unwrap()
        .as_dict()
        .unwrap();
    let acroform = doc
        .get_object(catalog.get(b"AcroForm").unwrap().as_reference().unwrap())
        .unwrap()
        .as_dict()
        .unwrap();

    for field in acroform.get(b"Fields").unwrap().as_array().unwrap() {
        let dict = doc.get_object(field.as_reference().unwrap()).unwrap().as_dict().unwrap();
        let title = match dict.get(b"T") {
            Ok(Object::String(bytes, _)) => String::from_utf8_lossy(bytes).into_owned(),
            _ => continue,
        };
        if title != name {
            continue;
        }
        return match dict.get(b"V") {
            Ok(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            Ok(Object::Name(state)) => Some(String::from_utf8_lossy(state).into_owned()),
            _ => None,
        };
    }
    None
}
