//! Concrete Easyfatt document schemas.
//!
//! These types are plain configurations of the mapping engine: each declares
//! its default tag and mapping table and gets decoding for free through
//! [`FromXml`](crate::FromXml). They cover the `.DefXml` document exchange
//! format documented at <https://www.danea.it/software/easyfatt/xml/>.

mod company;
mod document;
mod product;
mod root;
mod vat_code;

pub use company::Company;
pub use document::{CustomerInfo, DeliveryInfo, Document, DocumentNotes, Payment, TransportInfo};
pub use product::Product;
pub use root::EasyfattDocuments;
pub use vat_code::VatCode;
