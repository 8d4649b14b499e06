use std::collections::BTreeMap;

use rsbinder::{Parcel, Parcelable, StatusCode};

const VAL_INT: i32 = 1;
const VAL_LONG: i32 = 2;
const VAL_BOOL: i32 = 3;
const VAL_STRING: i32 = 4;

/// Typed value stored in a [`Bundle`].
#[derive(Debug, Clone, PartialEq)]
pub enum BundleValue {
    Int(i32),
    Long(i64),
    Bool(bool),
    Str(String),
}

/// Key/value extras bag attached to an [`Intent`].
///
/// Only the value kinds an install result carries are modeled; an unknown
/// tag on the wire is a malformed parcel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    entries: BTreeMap<String, BundleValue>,
}

impl Bundle {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.entries.insert(key.to_string(), BundleValue::Int(value));
    }

    pub fn put_long(&mut self, key: &str, value: i64) {
        self.entries.insert(key.to_string(), BundleValue::Long(value));
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_string(), BundleValue::Bool(value));
    }

    pub fn put_string(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), BundleValue::Str(value.to_string()));
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.entries.get(key) {
            Some(BundleValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(BundleValue::Str(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Parcelable for Bundle {
    fn write_to_parcel(&self, parcel: &mut Parcel) -> rsbinder::Result<()> {
        parcel.write(&(self.entries.len() as i32))?;
        for (key, value) in &self.entries {
            parcel.write(key)?;
            match value {
                BundleValue::Int(v) => {
                    parcel.write(&VAL_INT)?;
                    parcel.write(v)?;
                }
                BundleValue::Long(v) => {
                    parcel.write(&VAL_LONG)?;
                    parcel.write(v)?;
                }
                BundleValue::Bool(v) => {
                    parcel.write(&VAL_BOOL)?;
                    parcel.write(v)?;
                }
                BundleValue::Str(v) => {
                    parcel.write(&VAL_STRING)?;
                    parcel.write(v)?;
                }
            }
        }
        Ok(())
    }

    fn read_from_parcel(&mut self, parcel: &mut Parcel) -> rsbinder::Result<()> {
        let count: i32 = parcel.read()?;
        let mut entries = BTreeMap::new();
        for _ in 0..count {
            let key: String = parcel.read()?;
            let tag: i32 = parcel.read()?;
            let value = match tag {
                VAL_INT => BundleValue::Int(parcel.read()?),
                VAL_LONG => BundleValue::Long(parcel.read()?),
                VAL_BOOL => BundleValue::Bool(parcel.read()?),
                VAL_STRING => BundleValue::Str(parcel.read()?),
                _ => return Err(StatusCode::BadValue),
            };
            entries.insert(key, value);
        }
        self.entries = entries;
        Ok(())
    }
}

rsbinder::impl_serialize_for_parcelable!(Bundle);
rsbinder::impl_deserialize_for_parcelable!(Bundle);

/// Event payload delivered by the platform, reduced to the pieces the
/// install result actually uses: an optional action and the extras bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    pub action: Option<String>,
    pub extras: Bundle,
}

impl Intent {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn put_int_extra(&mut self, key: &str, value: i32) {
        self.extras.put_int(key, value);
    }

    pub fn put_string_extra(&mut self, key: &str, value: &str) {
        self.extras.put_string(key, value);
    }

    /// Returns the int extra stored under `key`, or `default` when the extra
    /// is missing or not an int.
    pub fn get_int_extra(&self, key: &str, default: i32) -> i32 {
        self.extras.get_int(key).unwrap_or(default)
    }

    pub fn get_string_extra(&self, key: &str) -> Option<&str> {
        self.extras.get_string(key)
    }
}

impl Parcelable for Intent {
    fn write_to_parcel(&self, parcel: &mut Parcel) -> rsbinder::Result<()> {
        parcel.write(&self.action)?;
        parcel.write(&self.extras)?;
        Ok(())
    }

    fn read_from_parcel(&mut self, parcel: &mut Parcel) -> rsbinder::Result<()> {
        self.action = parcel.read()?;
        self.extras = parcel.read()?;
        Ok(())
    }
}

rsbinder::impl_serialize_for_parcelable!(Intent);
rsbinder::impl_deserialize_for_parcelable!(Intent);
