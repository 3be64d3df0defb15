use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

pub const FABRIC_LABEL: &str = "Fabric type";
pub const CARE_LABEL: &str = "Care instructions";
pub const ORIGIN_LABEL: &str = "Country of origin";

/// Ordered label → value table. Labels are unique; insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactTable {
    entries: Vec<(String, String)>,
}

impl FactTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `label`, replacing the value in place when the label already exists.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    /// Add `label` only when it is not present yet. Returns whether it was added.
    pub fn insert_missing(&mut self, label: &str, value: impl Into<String>) -> bool {
        if self.contains(label) {
            return false;
        }
        self.entries.push((label.to_string(), value.into()));
        true
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FactTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GarmentType {
    Blouse,
    Jacket,
    Jeans,
    Skirt,
    Sweater,
    Dress,
    TShirt,
    #[default]
    Shirt,
    Trousers,
    Short,
}

impl GarmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            GarmentType::Blouse => "blouse",
            GarmentType::Jacket => "jacket",
            GarmentType::Jeans => "jeans",
            GarmentType::Skirt => "skirt",
            GarmentType::Sweater => "sweater",
            GarmentType::Dress => "dress",
            GarmentType::TShirt => "t-shirt",
            GarmentType::Shirt => "shirt",
            GarmentType::Trousers => "trousers",
            GarmentType::Short => "short",
        }
    }
}

// Labels below are the scoring model's category strings.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WashInstruction {
    MachineWashCold,
    MachineWashHot,
    MachineWashWarm,
    DryClean,
    HandWash,
}

impl WashInstruction {
    pub fn as_str(self) -> &'static str {
        match self {
            WashInstruction::MachineWashCold => "Machine wash_ cold",
            WashInstruction::MachineWashHot => "Machine wash_ hot",
            WashInstruction::MachineWashWarm => "Machine wash_ warm",
            WashInstruction::DryClean => "Dry clean",
            WashInstruction::HandWash => "Hand wash",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryInstruction {
    LineDry,
    TumbleDryLow,
    TumbleDryMedium,
    DryClean,
}

impl DryInstruction {
    pub fn as_str(self) -> &'static str {
        match self {
            DryInstruction::LineDry => "Line dry",
            DryInstruction::TumbleDryLow => "Tumble dry_ low",
            DryInstruction::TumbleDryMedium => "Tumble dry_ medium",
            DryInstruction::DryClean => "Dry clean",
        }
    }
}

// Each label enum serializes as its `as_str` label.
macro_rules! serialize_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }
        )*
    };
}

serialize_as_str!(GarmentType, WashInstruction, DryInstruction);

/// Feature bullets sorted into buckets. A bullet lands in exactly one bucket;
/// the first three hold the matched phrase, `other` holds the raw bullet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedBullets {
    pub fabric: Vec<String>,
    pub care: Vec<String>,
    pub origin: Vec<String>,
    pub other: Vec<String>,
}

impl ClassifiedBullets {
    /// Non-empty buckets paired with the fact label they back-fill.
    pub fn fact_entries(&self) -> Vec<(&'static str, String)> {
        [
            (FABRIC_LABEL, &self.fabric),
            (CARE_LABEL, &self.care),
            (ORIGIN_LABEL, &self.origin),
        ]
        .into_iter()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(label, bucket)| (label, bucket.join(", ")))
        .collect()
    }
}

/// The assembled product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub garment: GarmentType,
    pub brand: Option<String>,
    pub facts: FactTable,
    pub about: Vec<String>,
    #[serde(rename = "featureBullets")]
    pub feature_bullets: Option<ClassifiedBullets>,
    pub description: Option<String>,
    #[serde(rename = "washInstr")]
    pub wash: Option<WashInstruction>,
    #[serde(rename = "dryInstr")]
    pub dry: Option<DryInstruction>,
    pub recycled: bool,
    pub reused: bool,
    pub sustainable: bool,
}

impl ProductRecord {
    /// Every textual value of the record, one per line. Field names and the
    /// keyword flags are not included.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.name.as_deref());
        parts.push(self.garment.as_str());
        parts.extend(self.brand.as_deref());
        for (label, value) in self.facts.iter() {
            parts.push(label);
            parts.push(value);
        }
        parts.extend(self.about.iter().map(String::as_str));
        if let Some(bullets) = &self.feature_bullets {
            for bucket in [&bullets.fabric, &bullets.care, &bullets.origin, &bullets.other] {
                parts.extend(bucket.iter().map(String::as_str));
            }
        }
        parts.extend(self.description.as_deref());
        parts.extend(self.wash.map(WashInstruction::as_str));
        parts.extend(self.dry.map(DryInstruction::as_str));
        parts.join("\n")
    }
}
