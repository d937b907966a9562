//! Opaque scenario parameter values and typed extraction.
//!
//! A [`ParameterizedScenario`](crate::ParameterizedScenario) carries an
//! ordered vector of [`Param`] values. Fixtures registered with a positional
//! constructor receive those values converted through [`FromParams`], which
//! is implemented for tuples of [`FromParam`] types.

use std::{
    any::{Any, type_name},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::binding::BindError;

/// A single scenario parameter.
///
/// Equality is structural for plain values. Floats compare by bit pattern so
/// that `NaN` equals itself and hashing stays consistent; opaque values
/// compare by identity.
#[derive(Clone)]
pub enum Param {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// Any integer that fits in an `i64`.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A value of any other type, shared by reference.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Param {
    /// Wrap an arbitrary value as an opaque parameter.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self { Self::Opaque(Arc::new(value)) }

    /// Returns `true` for [`Param::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool { matches!(self, Self::Null) }

    /// Short name of the value's kind, used in binding error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => write!(f, "Bool({v})"),
            Self::Int(v) => write!(f, "Int({v})"),
            Self::Float(v) => write!(f, "Float({v})"),
            Self::Str(v) => write!(f, "Str({v:?})"),
            Self::Opaque(v) => write!(f, "Opaque({:p})", Arc::as_ptr(v)),
        }
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Param {}

impl Hash for Param {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Str(v) => v.hash(state),
            Self::Opaque(v) => Arc::as_ptr(v).cast::<()>().hash(state),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self { Self::Int(i64::from(value)) }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Param {
    fn from(value: bool) -> Self { Self::Bool(value) }
}

impl From<f32> for Param {
    fn from(value: f32) -> Self { Self::Float(f64::from(value)) }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self { Self::Float(value) }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self { Self::Str(value.to_owned()) }
}

impl From<String> for Param {
    fn from(value: String) -> Self { Self::Str(value) }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self { value.map_or(Self::Null, Into::into) }
}

/// Build a `Vec<Param>` from a list of convertible values.
///
/// ```
/// use scenario_runner::{Param, params};
///
/// let values = params![1, "two", None::<i32>];
/// assert_eq!(values, vec![Param::Int(1), Param::from("two"), Param::Null]);
/// ```
#[macro_export]
macro_rules! params {
    () => { ::std::vec::Vec::<$crate::Param>::new() };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::from($value)),+]
    };
}

/// Conversion from a single [`Param`] into a constructor argument.
pub trait FromParam: Sized {
    /// Convert the parameter at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ParamType`] when the value has an incompatible
    /// kind or is out of range for `Self`.
    fn from_param(param: &Param, position: usize) -> Result<Self, BindError>;
}

fn mismatch<T>(param: &Param, position: usize) -> BindError {
    BindError::ParamType {
        position,
        expected: type_name::<T>(),
        found: param.kind(),
    }
}

macro_rules! impl_from_param_int {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                fn from_param(param: &Param, position: usize) -> Result<Self, BindError> {
                    match param {
                        Param::Int(v) => {
                            <$ty>::try_from(*v).map_err(|_| mismatch::<$ty>(param, position))
                        }
                        _ => Err(mismatch::<$ty>(param, position)),
                    }
                }
            }
        )*
    };
}

impl_from_param_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl FromParam for f64 {
    #[allow(
        clippy::cast_precision_loss,
        reason = "integers widen to floats the way numeric literals do"
    )]
    fn from_param(param: &Param, position: usize) -> Result<Self, BindError> {
        match param {
            Param::Float(v) => Ok(*v),
            Param::Int(v) => Ok(*v as f64),
            _ => Err(mismatch::<f64>(param, position)),
        }
    }
}

impl FromParam for bool {
    fn from_param(param: &Param, position: usize) -> Result<Self, BindError> {
        match param {
            Param::Bool(v) => Ok(*v),
            _ => Err(mismatch::<bool>(param, position)),
        }
    }
}

impl FromParam for String {
    fn from_param(param: &Param, position: usize) -> Result<Self, BindError> {
        match param {
            Param::Str(v) => Ok(v.clone()),
            _ => Err(mismatch::<String>(param, position)),
        }
    }
}

impl FromParam for Param {
    fn from_param(param: &Param, _position: usize) -> Result<Self, BindError> { Ok(param.clone()) }
}

impl<T: FromParam> FromParam for Option<T> {
    fn from_param(param: &Param, position: usize) -> Result<Self, BindError> {
        match param {
            Param::Null => Ok(None),
            other => T::from_param(other, position).map(Some),
        }
    }
}

impl<T: Any + Send + Sync> FromParam for Arc<T> {
    fn from_param(param: &Param, position: usize) -> Result<Self, BindError> {
        match param {
            Param::Opaque(value) => Arc::clone(value)
                .downcast::<T>()
                .map_err(|_| mismatch::<T>(param, position)),
            _ => Err(mismatch::<T>(param, position)),
        }
    }
}

/// Conversion from a whole parameter vector into constructor arguments.
///
/// Implemented for tuples of up to eight [`FromParam`] elements; `ARITY` is
/// the number of constructor parameters the tuple stands for.
pub trait FromParams: Sized {
    /// Number of parameters consumed.
    const ARITY: usize;

    /// Convert `params`, which the resolver guarantees holds exactly
    /// `ARITY` values.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if any element fails to convert.
    fn from_params(params: &[Param]) -> Result<Self, BindError>;
}

impl FromParams for () {
    const ARITY: usize = 0;

    fn from_params(_params: &[Param]) -> Result<Self, BindError> { Ok(()) }
}

macro_rules! impl_from_params_tuple {
    ($arity:expr; $($name:ident : $idx:tt),+) => {
        impl<$($name: FromParam),+> FromParams for ($($name,)+) {
            const ARITY: usize = $arity;

            fn from_params(params: &[Param]) -> Result<Self, BindError> {
                let at = |idx: usize| {
                    params.get(idx).ok_or(BindError::Arity {
                        expected: $arity,
                        found: params.len(),
                    })
                };
                Ok(($($name::from_param(at($idx)?, $idx)?,)+))
            }
        }
    };
}

impl_from_params_tuple!(1; A: 0);
impl_from_params_tuple!(2; A: 0, B: 1);
impl_from_params_tuple!(3; A: 0, B: 1, C: 2);
impl_from_params_tuple!(4; A: 0, B: 1, C: 2, D: 3);
impl_from_params_tuple!(5; A: 0, B: 1, C: 2, D: 3, E: 4);
impl_from_params_tuple!(6; A: 0, B: 1, C: 2, D: 3, E: 4, G: 5);
impl_from_params_tuple!(7; A: 0, B: 1, C: 2, D: 3, E: 4, G: 5, H: 6);
impl_from_params_tuple!(8; A: 0, B: 1, C: 2, D: 3, E: 4, G: 5, H: 6, I: 7);
