//! Query shaping pipeline shared by list endpoints.
//!
//! Client parameters flow through the [`property_mapping`] registry (validate and
//! translate exposed names), the [`sort`] applier (ordered storage instructions),
//! the [`paging`] slicer and finally the [`shaping`] projection of the response.

pub mod paging;
pub mod property_mapping;
pub mod shaping;
pub mod sort;
