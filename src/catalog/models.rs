use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_NAME: &str = "Unnamed";
pub const DEFAULT_CATEGORY: &str = "General";

/// One record of `games.json`.
///
/// Optional keys stay `None` when absent so that writing the catalog back does
/// not invent values; the display accessors apply the defaults instead. The
/// record's key order is remembered and reproduced on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct GameEntry {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub cat: Option<String>,
    pub image: Option<String>,
    pub path: String,
    pub extra: Map<String, Value>,
    key_order: Vec<String>,
}

impl GameEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            desc: None,
            cat: None,
            image: None,
            path: path.into(),
            extra: Map::new(),
            key_order: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn display_desc(&self) -> &str {
        self.desc.as_deref().unwrap_or_default()
    }

    pub fn display_cat(&self) -> &str {
        self.cat.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Non-string values are left in `extra` untouched.
fn take_text(record: &mut Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(_)) => match record.remove(key) {
            Some(Value::String(text)) => Some(text),
            _ => None,
        },
        _ => None,
    }
}

impl TryFrom<Map<String, Value>> for GameEntry {
    type Error = String;

    fn try_from(mut record: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = record.keys().cloned().collect();
        let path = match record.remove("path") {
            Some(Value::String(path)) => path,
            Some(other) => return Err(format!("`path` must be a string, got {other}")),
            None => return Err("missing field `path`".to_string()),
        };

        Ok(Self {
            name: take_text(&mut record, "name"),
            desc: take_text(&mut record, "desc"),
            cat: take_text(&mut record, "cat"),
            image: take_text(&mut record, "image"),
            path,
            extra: record,
            key_order,
        })
    }
}

impl From<GameEntry> for Map<String, Value> {
    fn from(entry: GameEntry) -> Self {
        let GameEntry {
            name,
            desc,
            cat,
            image,
            path,
            mut extra,
            key_order,
        } = entry;
        let mut known = [
            ("name", name),
            ("desc", desc),
            ("cat", cat),
            ("image", image),
            ("path", Some(path)),
        ];

        let mut record = Map::new();
        for key in key_order {
            let typed = known
                .iter_mut()
                .find(|(known_key, _)| *known_key == key)
                .and_then(|(_, value)| value.take());
            if let Some(text) = typed {
                extra.remove(&key);
                record.insert(key, Value::String(text));
            } else if let Some(value) = extra.remove(&key) {
                record.insert(key, value);
            }
        }

        for (key, value) in known {
            if let Some(text) = value {
                extra.remove(key);
                record.insert(key.to_string(), Value::String(text));
            }
        }
        for (key, value) in extra {
            record.entry(key).or_insert(value);
        }
        record
    }
}
