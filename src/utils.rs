//! Small helpers shared across the crate, mostly around Polars schema
//! construction.

use itertools::Itertools;
use log::warn;
use polars::prelude::*;

/// Creates a schema from separate arrays of names and data types.
pub(crate) fn schema_from_arrays(
    names: &[&str],
    dtypes: &[DataType],
) -> Schema {
    if names.len() != dtypes.len() {
        warn!(
            "Mismatch between names and dtypes array lengths: {} vs {}",
            names.len(),
            dtypes.len()
        );
    }
    Schema::from_iter(names.iter().cloned().map_into().zip(dtypes.iter().cloned()))
}

#[macro_export]
macro_rules! plsmallstr {
    ($string: expr) => {
        PlSmallStr::from($string)
    };
    () => {
        PlSmallStr::from("")
    };
}
