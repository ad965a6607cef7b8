//! VAT information attached to a document row.

use serde::Serialize;

use crate::{FromXml, Mapping};

/// VAT applied to a product row (`<VatCode>` elements).
///
/// The code must already exist in the application's VAT table; it is an
/// identifier, not the percentage itself.
///
/// ```xml
/// <Row>
///     <VatCode Perc="20" Class="Imponibile" Description="Aliquota 20%">20</VatCode>
/// </Row>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct VatCode {
    /// VAT code, from the element's own text.
    pub code: String,
    /// Free-form description of the VAT code.
    pub description: String,
    /// Applied tax percentage, as written in the document.
    pub percentage: String,
    /// VAT class (imponibile, non imponibile, intra-ue, extra-ue, ...).
    pub vat_class: String,
}

impl FromXml for VatCode {
    const TAG: &'static str = "VatCode";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("code", "#TEXT", |v: &mut Self, s| v.code = s)
            .text("description", "@Description", |v: &mut Self, s| {
                v.description = s;
            })
            .text("percentage", "@Perc", |v: &mut Self, s| v.percentage = s)
            .text("vat_class", "@Class", |v: &mut Self, s| v.vat_class = s)
    }
}
