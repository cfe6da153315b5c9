use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::WheelError;

/// One slice of the wheel. Only `id` and `label` matter to the spin logic;
/// the rest is for the renderer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: u32,
    pub label: String,
    pub color: String,
    pub value: String,
    pub icon: String,
}

impl Prize {
    pub fn new(id: u32, label: &str, color: &str, value: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            color: color.to_string(),
            value: value.to_string(),
            icon: "🎫".to_string(),
        }
    }

    pub fn is_top_prize(&self) -> bool {
        self.label == "1000K"
    }
}

/// Ordered, non-empty prize list. Segment `i` of the wheel belongs to
/// `get(i)`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Catalog {
    prizes: Vec<Prize>,
}

impl Catalog {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, WheelError> {
        if prizes.is_empty() {
            return Err(WheelError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for prize in &prizes {
            if !seen.insert(prize.id) {
                return Err(WheelError::DuplicatePrizeId(prize.id));
            }
        }

        Ok(Self { prizes })
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    // Never true; kept for clippy's len_without_is_empty.
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let prizes = Vec::<Prize>::deserialize(deserializer)?;
        Catalog::new(prizes).map_err(serde::de::Error::custom)
    }
}

fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new(0, "1000K", "#111111", "1000"),
        Prize::new(1, "500K", "#ffffff", "500"),
        Prize::new(2, "600K", "#d99a89", "600"),
        Prize::new(3, "700K", "#ffffff", "700"),
        Prize::new(4, "500K", "#d99a89", "500"),
        Prize::new(5, "600K", "#ffffff", "600"),
        Prize::new(6, "750K", "#d99a89", "750"),
        Prize::new(7, "800K", "#ffffff", "800"),
        Prize::new(8, "900K", "#d99a89", "900"),
    ]
}

/// The catalog the widget ships with.
pub static PRIZES: Lazy<Catalog> = Lazy::new(|| Catalog {
    prizes: default_prizes(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        assert_eq!(PRIZES.len(), 9);
        assert_eq!(PRIZES.get(0).map(|p| p.label.as_str()), Some("1000K"));
        assert_eq!(PRIZES.get(3).map(|p| p.label.as_str()), Some("700K"));
        assert_eq!(PRIZES.get(8).map(|p| p.label.as_str()), Some("900K"));
        assert!(PRIZES.iter().enumerate().all(|(i, p)| p.id as usize == i));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(WheelError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let prizes = vec![
            Prize::new(1, "500K", "#fff", "500"),
            Prize::new(1, "600K", "#fff", "600"),
        ];
        assert_eq!(Catalog::new(prizes), Err(WheelError::DuplicatePrizeId(1)));
    }

    #[test]
    fn test_catalog_deserialize_validates() {
        let err = serde_json::from_str::<Catalog>("[]");
        assert!(err.is_err());

        let catalog: Catalog = serde_json::from_str(
            r##"[{"id":7,"label":"800K","color":"#fff","value":"800","icon":"🎫"}]"##,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.get(0).unwrap().is_top_prize());
    }
}
