//! easyfatt-xml - Typed decoding of Danea Easyfatt `.DefXml` documents.
//!
//! This crate decodes the semi-structured XML exported by Danea Easyfatt
//! into strongly-typed Rust structs, driven by a static, declarative mapping
//! table attached to each target type. Easyfatt omits a tag to mean
//! "unset/false/zero", so every scalar coercion carries a fixed
//! absent-value default, and unknown tags are reported as advisory coverage
//! warnings instead of errors.
//!
//! # Example
//!
//! ```
//! use easyfatt_xml::schema::EasyfattDocuments;
//! use easyfatt_xml::FromXml;
//!
//! let xml = r#"
//! <EasyfattDocuments AppVersion="2" Creator="Danea Easyfatt">
//!     <Documents>
//!         <Document>
//!             <Number>1</Number>
//!             <Rows>
//!                 <Row><Code>0011</Code><Qty>2</Qty></Row>
//!             </Rows>
//!         </Document>
//!     </Documents>
//! </EasyfattDocuments>"#;
//!
//! let file = EasyfattDocuments::from_xml(xml).unwrap();
//! assert_eq!(file.documents[0].rows[0].quantity, 2);
//! ```
//!
//! # Architecture
//!
//! - [`field`]: declarative mapping tables ([`Mapping`]) and the field path
//!   syntax (`@attr`, `#TEXT`, child tag)
//! - [`decode`]: the [`FromXml`] trait and recursive-descent decoder
//! - [`coerce`]: scalar coercion with the Danea default rules
//! - [`audit`]: advisory coverage reports for untracked child tags
//! - [`value`]: value-type support ([`Float`] with eq-consistent hashing)
//! - [`error`]: error taxonomy and `Result` alias
//! - [`xml`]: roxmltree navigation helpers
//! - [`schema`]: the concrete `.DefXml` document schemas

pub mod audit;
pub mod coerce;
pub mod decode;
pub mod error;
pub mod field;
pub mod schema;
pub mod value;
pub mod xml;

pub use decode::FromXml;
pub use error::{DecodeError, Result};
pub use field::Mapping;
pub use value::Float;
