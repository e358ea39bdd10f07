//! Capture request properties

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Desired capture configuration.
/// Every field is optional; a missing field leaves the recorder default in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureProperties {
    pub audio: Option<bool>,
    pub video: Option<bool>,
    /// Capture from a specific element rather than the default device
    pub source: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub channels: Option<u32>,
    pub rate: Option<u32>,
    pub quality: Option<f64>,
}

impl CaptureProperties {
    /// Audio and video with recorder defaults for everything else
    pub fn audio_video() -> Self {
        Self {
            audio: Some(true),
            video: Some(true),
            ..Default::default()
        }
    }

    /// Build the typed property bag handed to the capture device.
    /// Only fields that are set appear in the bag.
    pub fn to_bag(&self) -> PropertyBag {
        let mut bag = PropertyBag::new();

        for (key, value) in [("audio", self.audio), ("video", self.video), ("source", self.source)] {
            if let Some(v) = value {
                bag.set(key, PropertyValue::Bool(v));
            }
        }
        for (key, value) in [
            ("width", self.width),
            ("height", self.height),
            ("channels", self.channels),
            ("rate", self.rate),
        ] {
            if let Some(v) = value {
                bag.set(key, PropertyValue::Uint32(v));
            }
        }
        if let Some(q) = self.quality {
            bag.set("quality", PropertyValue::Double(q));
        }

        bag
    }
}

/// A typed property value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Uint32(u32),
    Double(f64),
}

/// Property bag passed to the native capture device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyBag(BTreeMap<String, PropertyValue>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.0.get(key).copied()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            PropertyValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_u32(&self, key: &str) -> Option<u32> {
        match self.get(key)? {
            PropertyValue::Uint32(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            PropertyValue::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_properties_make_empty_bag() {
        let bag = CaptureProperties::default().to_bag();
        assert!(bag.is_empty());
    }

    #[test]
    fn bag_holds_only_set_fields() {
        let props = CaptureProperties {
            video: Some(true),
            width: Some(640),
            quality: Some(0.8),
            ..Default::default()
        };
        let bag = props.to_bag();

        assert_eq!(bag.len(), 3);
        assert_eq!(bag.get_bool("video"), Some(true));
        assert_eq!(bag.get_u32("width"), Some(640));
        assert_eq!(bag.get_f64("quality"), Some(0.8));
        assert!(!bag.contains("audio"));
        assert!(!bag.contains("height"));
    }

    #[test]
    fn false_flags_are_kept() {
        let props = CaptureProperties {
            audio: Some(false),
            ..Default::default()
        };
        assert_eq!(props.to_bag().get_bool("audio"), Some(false));
    }

    #[test]
    fn typed_getters_reject_other_types() {
        let bag = CaptureProperties {
            rate: Some(44100),
            ..Default::default()
        }
        .to_bag();
        assert_eq!(bag.get_bool("rate"), None);
        assert_eq!(bag.get_f64("rate"), None);
        assert_eq!(bag.get_u32("rate"), Some(44100));
    }

    #[test]
    fn properties_deserialize_from_partial_json() {
        let props: CaptureProperties =
            serde_json::from_str(r#"{"audio": true, "channels": 2}"#).unwrap();
        assert_eq!(props.audio, Some(true));
        assert_eq!(props.channels, Some(2));
        assert!(props.video.is_none());
    }
}
