use serde_json::{json, Map, Value};

use super::data::GeoJsonData;
use super::glass::GlassMaterial;
use crate::error::{AgrError, Result};

/// Normalises a property value for the document: `"` becomes `'`, line breaks are dropped.
///
/// Backslashes are doubled by the JSON writer itself.
pub(crate) fn sanitize_value(value: &str) -> String {
    value.replace('"', "'").replace('\n', " ").replace('\r', "")
}

/// Reads a decimal coordinate, accepting `,` as the separator. Anything unparsable is 0.
pub fn parse_coordinate(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn coordinate_value(text: &str) -> Value {
    serde_json::Number::from_f64(parse_coordinate(text))
        .map(Value::Number)
        .unwrap_or_else(|| Value::from(0))
}

fn glass_value(glass: &GlassMaterial) -> Value {
    json!({
        "color_RGB": {
            "Red": glass.red.to_string(),
            "Green": glass.green.to_string(),
            "Blue": glass.blue.to_string(),
        },
        "transparency": sanitize_value(&glass.transparency),
        "refraction": sanitize_value(&glass.refraction),
        "roughness": sanitize_value(&glass.roughness),
        "metallicity": sanitize_value(&glass.metallicity),
    })
}

/// Builds the single-feature document for one model.
pub fn to_value(data: &GeoJsonData) -> Value {
    let mut properties = Map::new();
    for (key, value) in data.properties() {
        if key == "other" {
            properties.insert(
                "imageBase64".to_string(),
                Value::String(data.image_base64.clone().unwrap_or_default()),
            );
        }
        properties.insert(key.to_string(), Value::String(sanitize_value(value)));
    }

    // All glasses live in one object keyed by material name.
    let mut glasses = Vec::new();
    if !data.glasses.is_empty() {
        let mut by_name = Map::new();
        for glass in &data.glasses {
            by_name.insert(sanitize_value(&glass.name), glass_value(glass));
        }
        glasses.push(Value::Object(by_name));
    }

    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "ObjectFeature",
            "properties": properties,
            "geometry": {
                "type": "Point",
                "coordinates": [coordinate_value(&data.coord_x), coordinate_value(&data.coord_y)],
            },
            "Glasses": glasses,
        }],
    })
}

/// Pretty-printed document text.
pub fn generate(data: &GeoJsonData) -> String {
    // Serialising a `Value` cannot fail.
    serde_json::to_string_pretty(&to_value(data)).unwrap_or_default()
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn int_of(value: Option<&Value>) -> i32 {
    text_of(value).trim().parse().unwrap_or(0)
}

fn parse_glass(name: &str, value: &Value) -> GlassMaterial {
    let mut material = GlassMaterial::new(name);
    let Some(fields) = value.as_object() else {
        return material;
    };

    if let Some(rgb) = fields.get("color_RGB").and_then(Value::as_object) {
        material.red = int_of(rgb.get("Red"));
        material.green = int_of(rgb.get("Green"));
        material.blue = int_of(rgb.get("Blue"));
    }
    material.transparency = text_of(fields.get("transparency"));
    material.refraction = text_of(fields.get("refraction"));
    material.roughness = text_of(fields.get("roughness"));
    material.metallicity = text_of(fields.get("metallicity"));
    material
}

/// Reads a document back. Missing properties become empty strings.
pub fn parse(json: &str) -> Result<GeoJsonData> {
    let doc: Value = serde_json::from_str(json).map_err(|e| AgrError::GeoJson(e.to_string()))?;

    let feature = doc
        .get("features")
        .and_then(Value::as_array)
        .and_then(|features| features.first())
        .ok_or_else(|| AgrError::GeoJson("invalid GeoJSON structure: no features".to_string()))?;

    let mut data = GeoJsonData::default();

    if let Some(properties) = feature.get("properties").and_then(Value::as_object) {
        let keys: Vec<&'static str> = data.properties().iter().map(|(key, _)| *key).collect();
        for key in keys {
            if let Some(field) = data.property_mut(key) {
                *field = text_of(properties.get(key));
            }
        }
        data.image_base64 = Some(text_of(properties.get("imageBase64"))).filter(|s| !s.is_empty());
    }

    if let Some(coordinates) = feature
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
        .filter(|c| c.len() >= 2)
    {
        data.coord_x = text_of(coordinates.first());
        data.coord_y = text_of(coordinates.get(1));
    }

    if let Some(groups) = feature.get("Glasses").and_then(Value::as_array) {
        for group in groups.iter().filter_map(Value::as_object) {
            for (name, value) in group {
                data.add_glass(parse_glass(name, value))
                    .map_err(|e| AgrError::GeoJson(e.to_string()))?;
            }
        }
    }

    Ok(data)
}
