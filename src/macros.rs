//! Macros to reduce boilerplate in the codebase

/// Macro to generate `as_str`, `ALL`, Display and FromStr for enums that map
/// one-to-one onto wire names.
///
/// Parsing is ASCII case-insensitive, so `fullname` and `fullName` both
/// resolve to the same variant.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::FeedbackError;
///
/// wire_name_enum!(
///     MyEnum,
///     FeedbackError::InvalidField,
///     {
///         Variant1 => "variant1",
///         Variant2 => "variantTwo",
///     }
/// );
/// ```
#[macro_export]
macro_rules! wire_name_enum {
    (
        $enum_name:ident,
        $error_variant:path,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl $enum_name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant,)+];

            /// The wire name of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::FeedbackError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok($enum_name::$variant);
                    }
                )+
                Err($error_variant(s.to_string()))
            }
        }
    };
}

#[cfg(test)]
mod test {
    use crate::error::FeedbackError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestEnum {
        A,
        Bee,
    }

    wire_name_enum!(TestEnum, FeedbackError::InvalidField, { A => "a", Bee => "busyBee" });

    #[test]
    fn test_display() {
        assert_eq!(TestEnum::A.to_string(), "a");
        assert_eq!(TestEnum::Bee.to_string(), "busyBee");
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("BUSYBEE".parse::<TestEnum>().unwrap(), TestEnum::Bee);
        assert_eq!(" a ".parse::<TestEnum>().unwrap(), TestEnum::A);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "c".parse::<TestEnum>().unwrap_err();
        assert!(matches!(err, FeedbackError::InvalidField(ref s) if s == "c"));
    }

    #[test]
    fn test_all_in_declaration_order() {
        assert_eq!(TestEnum::ALL, &[TestEnum::A, TestEnum::Bee]);
    }
}
