// SPDX-License-Identifier: MIT

//! Conversion of a bounded list of addresses in one call.
//!
//! Every input is converted independently, a malformed address only fails its own item. Only a
//! list longer than [`MAX_BATCH_LEN`] fails as a whole, before any item is looked at.
//!
//! # Examples
//!
//! ```
//! let inputs = ["zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7", "not an address"];
//! let batch = zil_bech32::batch::convert(&inputs).expect("within the limit");
//!
//! assert_eq!(batch.total(), 2);
//! assert_eq!(batch.successful(), 1);
//! assert_eq!(batch.failed(), 1);
//! ```

use core::fmt;

use crate::address::{self, AddressForms};

/// The maximum number of addresses converted in one call.
pub const MAX_BATCH_LEN: usize = 100;

/// The outcome of converting one input of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchItem {
    /// Position of the input in the batch.
    pub index: usize,
    /// The input as given.
    pub input: String,
    /// Every rendering of the address, or why the input is not one.
    pub result: Result<AddressForms, address::Error>,
}

impl BatchItem {
    /// Returns true if the input was converted.
    pub fn is_success(&self) -> bool { self.result.is_ok() }
}

/// Results of a batch conversion, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    items: Vec<BatchItem>,
}

impl Batch {
    /// Returns the results in input order.
    pub fn items(&self) -> &[BatchItem] { &self.items }

    /// Consumes the batch returning the results in input order.
    pub fn into_items(self) -> Vec<BatchItem> { self.items }

    /// Iterates the results in input order.
    pub fn iter(&self) -> core::slice::Iter<'_, BatchItem> { self.items.iter() }

    /// Number of inputs.
    pub fn total(&self) -> usize { self.items.len() }

    /// Number of inputs that converted.
    pub fn successful(&self) -> usize { self.items.iter().filter(|item| item.is_success()).count() }

    /// Number of inputs that did not convert.
    pub fn failed(&self) -> usize { self.total() - self.successful() }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a BatchItem;
    type IntoIter = core::slice::Iter<'a, BatchItem>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Converts every input to all address forms.
///
/// Items are processed on the rayon thread pool when the `parallel` feature is enabled, results
/// are in input order either way.
///
/// # Errors
///
/// [`Error::TooManyItems`] if there are more than [`MAX_BATCH_LEN`] inputs.
pub fn convert<S: AsRef<str> + Sync>(inputs: &[S]) -> Result<Batch, Error> {
    if inputs.len() > MAX_BATCH_LEN {
        log::warn!("rejecting batch of {} addresses, limit is {}", inputs.len(), MAX_BATCH_LEN);
        return Err(Error::TooManyItems(inputs.len()));
    }
    log::debug!("converting batch of {} addresses", inputs.len());

    #[cfg(feature = "parallel")]
    let items: Vec<BatchItem> = {
        use rayon::prelude::*;
        inputs
            .par_iter()
            .enumerate()
            .map(|(index, input)| convert_one(index, input.as_ref()))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let items: Vec<BatchItem> = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| convert_one(index, input.as_ref()))
        .collect();

    Ok(Batch { items })
}

fn convert_one(index: usize, input: &str) -> BatchItem {
    let result = AddressForms::parse(input);
    if let Err(ref e) = result {
        log::trace!("batch item {} ({:?}) failed: {}", index, input, e);
    }
    BatchItem { index, input: input.to_owned(), result }
}

/// Errors converting a batch as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The batch has more than [`MAX_BATCH_LEN`] inputs.
    TooManyItems(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            TooManyItems(len) => write!(
                f,
                "batch of {} addresses exceeds the maximum of {}",
                len, MAX_BATCH_LEN
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match *self {
            TooManyItems(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{Batch, BatchItem};

    impl Serialize for BatchItem {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let len = if self.is_success() { 6 } else { 4 };
            let mut state = serializer.serialize_struct("BatchItem", len)?;
            state.serialize_field("index", &self.index)?;
            state.serialize_field("input", &self.input)?;
            state.serialize_field("success", &self.is_success())?;
            match self.result {
                Ok(ref forms) => {
                    state.serialize_field("bech32", &forms.bech32)?;
                    state.serialize_field("hexZilliqaFormat", &forms.hex)?;
                    state.serialize_field("hexWithPrefix", &forms.hex_with_prefix)?;
                }
                Err(ref e) => state.serialize_field("error", &e.to_string())?,
            }
            state.end()
        }
    }

    impl Serialize for Batch {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Batch", 4)?;
            state.serialize_field("results", &self.items)?;
            state.serialize_field("total", &self.total())?;
            state.serialize_field("successful", &self.successful())?;
            state.serialize_field("failed", &self.failed())?;
            state.end()
        }
    }
}
