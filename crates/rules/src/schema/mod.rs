//! Rule configuration schema with serde deserialization.
//!
//! Rules are configuration-as-data: typed fields where the shape is fixed
//! (`ScoreConfig`, `MatchType`), a loosely typed `parameters` map where it
//! is algorithm-specific (`Params` / `ParamValue`).

mod match_type;
mod params;
mod rule;

pub use match_type::*;
pub use params::*;
pub use rule::*;
