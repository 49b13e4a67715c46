//! Upper bounds for length and per-class minimums.

/// Default upper bound on password length.
pub const MAX_LENGTH: usize = 100;
/// Default upper bound on each configurable per-class minimum.
pub const MAX_MIN_PER_CLASS: usize = 10;

/// Largest `max_length` a [`Limits`] accepts.
pub const MAX_LENGTH_CEILING: usize = 4096;
/// Largest `max_min_per_class` a [`Limits`] accepts.
pub const MAX_MIN_PER_CLASS_CEILING: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitsError {
    #[error("{name} {value} is above the ceiling of {ceiling}")]
    AboveCeiling {
        name: &'static str,
        value: usize,
        ceiling: usize,
    },
    #[error(
        "max length {max_length} cannot hold the largest possible minimum total of {required} \
         (one uppercase, one lowercase and {max_min_per_class} each of digits and specials)"
    )]
    TooShort {
        max_length: usize,
        max_min_per_class: usize,
        required: usize,
    },
}

/// Bounds used to clamp length and minimum counts.
///
/// The largest minimum-required total must fit in `max_length`, so a
/// reconciled length can always satisfy every enabled minimum. Both bounds
/// are capped so length arithmetic and buffer sizes stay small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_length: usize,
    max_min_per_class: usize,
}

impl Limits {
    pub fn new(max_length: usize, max_min_per_class: usize) -> Result<Self, LimitsError> {
        for (name, value, ceiling) in [
            ("max length", max_length, MAX_LENGTH_CEILING),
            ("max minimum per class", max_min_per_class, MAX_MIN_PER_CLASS_CEILING),
        ] {
            if value > ceiling {
                return Err(LimitsError::AboveCeiling {
                    name,
                    value,
                    ceiling,
                });
            }
        }
        let required = Self::worst_case_required(max_min_per_class);
        if max_length < required {
            return Err(LimitsError::TooShort {
                max_length,
                max_min_per_class,
                required,
            });
        }
        Ok(Self {
            max_length,
            max_min_per_class,
        })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn max_min_per_class(&self) -> usize {
        self.max_min_per_class
    }

    fn worst_case_required(max_min_per_class: usize) -> usize {
        2 + 2 * max_min_per_class
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH,
            max_min_per_class: MAX_MIN_PER_CLASS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_length(), 100);
        assert_eq!(limits.max_min_per_class(), 10);
        assert_eq!(Limits::new(100, 10), Ok(limits));
    }

    #[test]
    fn rejects_length_below_worst_case() {
        assert_eq!(
            Limits::new(10, 10),
            Err(LimitsError::TooShort {
                max_length: 10,
                max_min_per_class: 10,
                required: 22,
            })
        );
        assert!(Limits::new(21, 10).is_err());
        assert!(Limits::new(22, 10).is_ok());
        assert!(Limits::new(2, 0).is_ok());
    }

    #[test]
    fn rejects_bounds_above_ceiling() {
        assert_eq!(
            Limits::new(usize::MAX, 10),
            Err(LimitsError::AboveCeiling {
                name: "max length",
                value: usize::MAX,
                ceiling: MAX_LENGTH_CEILING,
            })
        );
        assert!(matches!(
            Limits::new(usize::MAX, usize::MAX),
            Err(LimitsError::AboveCeiling { .. })
        ));
        assert!(matches!(
            Limits::new(MAX_LENGTH_CEILING, MAX_MIN_PER_CLASS_CEILING + 1),
            Err(LimitsError::AboveCeiling { name: "max minimum per class", .. })
        ));
        assert!(Limits::new(MAX_LENGTH_CEILING + 1, 10).is_err());
    }

    #[test]
    fn largest_limits_are_accepted() {
        let limits = Limits::new(MAX_LENGTH_CEILING, MAX_MIN_PER_CLASS_CEILING).unwrap();
        assert_eq!(limits.max_length(), 4096);
        assert_eq!(limits.max_min_per_class(), 1024);
    }
}
