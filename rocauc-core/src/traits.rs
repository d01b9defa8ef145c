//! Core trait definitions for the rocauc workspace.
//!
//! These traits define the contracts that label and report types implement across crates.

/// A ground-truth label of a binary classification problem.
///
/// Implemented for `bool` and for the integer types, where only `0` and `1`
/// are accepted. Any other integer value yields `None` and is rejected by the
/// calculator as invalid input.
pub trait BinaryLabel: Copy {
    /// `Some(true)` for the positive class, `Some(false)` for the negative
    /// class, `None` if the value is not a binary label.
    fn as_positive(self) -> Option<bool>;
}

impl BinaryLabel for bool {
    #[inline]
    fn as_positive(self) -> Option<bool> {
        Some(self)
    }
}

macro_rules! impl_binary_label_int {
    ($($t:ty),*) => {
        $(
            impl BinaryLabel for $t {
                #[inline]
                fn as_positive(self) -> Option<bool> {
                    match self {
                        0 => Some(false),
                        1 => Some(true),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_binary_label_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A type that carries a numeric score (an AUC, a test statistic, etc.).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_labels_pass_through() {
        assert_eq!(true.as_positive(), Some(true));
        assert_eq!(false.as_positive(), Some(false));
    }

    #[test]
    fn integer_labels_accept_only_zero_and_one() {
        assert_eq!(0u8.as_positive(), Some(false));
        assert_eq!(1i32.as_positive(), Some(true));
        assert_eq!(2usize.as_positive(), None);
        assert_eq!((-1i64).as_positive(), None);
    }
}
