//! [`FromField`] conversions for primitive and chrono types.

use super::FromField;
use super::format::{BoolFormat, DEFAULT_BOOL, DEFAULT_DATE, DEFAULT_DATETIME, DEFAULT_TIME, DEFAULT_ZONED, DateFormat};
use crate::{ByteStream, FieldResult, MatchOptions, SliceStream, Status};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use std::num::IntErrorKind;

impl FromField for String {
    type Format = ();

    fn default_format() -> &'static () {
        &()
    }

    fn from_field(text: &str, _format: &()) -> Result<Self, Status> {
        Ok(text.to_string())
    }
}

macro_rules! int_from_field {
    ($($ty:ty),*) => {$(
        impl FromField for $ty {
            type Format = ();

            fn default_format() -> &'static () {
                &()
            }

            fn from_field(text: &str, _format: &()) -> Result<Self, Status> {
                text.parse::<$ty>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Status::OVERFLOW,
                    _ => Status::empty(),
                })
            }
        }
    )*};
}

int_from_field!(i32, i64, u32, u64);

impl FromField for f64 {
    type Format = ();

    fn default_format() -> &'static () {
        &()
    }

    fn from_field(text: &str, _format: &()) -> Result<Self, Status> {
        text.parse().map_err(|_| Status::empty())
    }
}

impl FromField for bool {
    type Format = BoolFormat;

    fn default_format() -> &'static BoolFormat {
        &DEFAULT_BOOL
    }

    /// The whole text must spell one of the format's candidates.
    fn from_field(text: &str, format: &BoolFormat) -> Result<Self, Status> {
        let mut stream = SliceStream::from(text);
        let mut res: FieldResult<bool> = FieldResult::new(0);
        let opts = MatchOptions::default().ignore_case(format.ignore_case);

        if format.spellings.match_stream(&mut stream, &mut res, opts) && stream.at_end() {
            res.value.ok_or(Status::empty())
        } else {
            Err(Status::empty())
        }
    }
}

macro_rules! chrono_from_field {
    ($($ty:ty => $default:ident),* $(,)?) => {$(
        impl FromField for $ty {
            type Format = DateFormat;

            fn default_format() -> &'static DateFormat {
                &$default
            }

            fn from_field(text: &str, format: &DateFormat) -> Result<Self, Status> {
                <$ty>::parse_from_str(text, format.pattern()).map_err(|_| Status::empty())
            }
        }
    )*};
}

chrono_from_field!(
    NaiveDate => DEFAULT_DATE,
    NaiveTime => DEFAULT_TIME,
    NaiveDateTime => DEFAULT_DATETIME,
    DateTime<FixedOffset> => DEFAULT_ZONED,
);
