use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SeverityLevel {
    Low => "low",
    Moderate => "moderate",
    High => "high",
    Critical => "critical",
});

str_enum!(ExerciseIntensity {
    Light => "light",
    Moderate => "moderate",
    Vigorous => "vigorous",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_level_round_trip() {
        for (variant, s) in [
            (SeverityLevel::Low, "low"),
            (SeverityLevel::Moderate, "moderate"),
            (SeverityLevel::High, "high"),
            (SeverityLevel::Critical, "critical"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SeverityLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn intensity_serializes_lowercase() {
        let json = serde_json::to_string(&ExerciseIntensity::Vigorous).unwrap();
        assert_eq!(json, "\"vigorous\"");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(SeverityLevel::from_str("severe").is_err());
        assert!(ExerciseIntensity::from_str("").is_err());
    }
}
