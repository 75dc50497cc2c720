use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::id::{SnowflakeId, Uuid};

/// Snowflake ids serialize as their native integer representation.
impl Serialize for SnowflakeId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(self.to_raw())
    }
}

impl<'de> Deserialize<'de> for SnowflakeId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(d).map(Self::from_raw)
    }
}

/// UUIDs serialize as their canonical hyphenated string.
impl Serialize for Uuid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(UuidVisitor)
    }
}

struct UuidVisitor;

impl de::Visitor<'_> for UuidVisitor {
    type Value = Uuid;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hyphenated uuid string")
    }

    fn visit_str<E>(self, s: &str) -> Result<Uuid, E>
    where
        E: de::Error,
    {
        parse_uuid(s).ok_or_else(|| E::custom(format_args!("invalid uuid string {s:?}")))
    }
}

fn parse_uuid(s: &str) -> Option<Uuid> {
    let s = s.as_bytes();
    if s.len() != 36 {
        return None;
    }

    let mut out = [0u8; 16];
    let mut index = 0;
    let mut high: Option<u8> = None;

    for (i, &c) in s.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if c != b'-' {
                    return None;
                }
            }
            _ => {
                let nibble = hex_value(c)?;
                match high.take() {
                    None => high = Some(nibble),
                    Some(h) => {
                        out[index] = (h << 4) | nibble;
                        index += 1;
                    }
                }
            }
        }
    }

    Some(Uuid::from_bytes(out))
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_id_round_trips_as_an_integer() {
        let id = SnowflakeId::from_parts(123_456, 5, 12, 77);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, id.to_raw().to_string());

        let back: SnowflakeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn uuid_round_trips_as_a_hyphenated_string() {
        let uuid = Uuid::new_v4();

        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));

        let back: Uuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uuid);
    }

    #[test]
    fn uuid_parsing_accepts_uppercase_hex() {
        let back: Uuid = serde_json::from_str("\"01234567-89AB-CDEF-0123-456789ABCDEF\"").unwrap();
        assert_eq!(back.to_string(), "01234567-89ab-cdef-0123-456789abcdef");
    }

    #[test]
    fn uuid_parsing_rejects_malformed_strings() {
        for bad in [
            "\"\"",
            "\"0123456789ab-cdef-0123-456789abcdef\"",
            "\"01234567-89ab-cdef-0123-456789abcdeg\"",
            "\"01234567+89ab+cdef+0123+456789abcdef\"",
        ] {
            assert!(serde_json::from_str::<Uuid>(bad).is_err(), "accepted {bad}");
        }
    }
}
