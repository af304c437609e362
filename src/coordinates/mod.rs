mod codec;

pub use codec::{DmsParseError, format_dms, parse_angle, parse_dms, parse_dms_pair, validate_dms};
