//! Sender company information.

use serde::Serialize;

use crate::{FromXml, Mapping};

/// The company that originated the file (`<Company>` element).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Company {
    /// Company name.
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub province: String,
    pub country: String,
    /// Italian fiscal code.
    pub fiscal_code: String,
    /// VAT registration number.
    pub vat_code: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub homepage: String,
}

impl FromXml for Company {
    const TAG: &'static str = "Company";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("name", "Name", |c: &mut Self, v| c.name = v)
            .text("address", "Address", |c: &mut Self, v| c.address = v)
            .text("postcode", "Postcode", |c: &mut Self, v| c.postcode = v)
            .text("city", "City", |c: &mut Self, v| c.city = v)
            .text("province", "Province", |c: &mut Self, v| c.province = v)
            .text("country", "Country", |c: &mut Self, v| c.country = v)
            .text("fiscal_code", "FiscalCode", |c: &mut Self, v| {
                c.fiscal_code = v;
            })
            .text("vat_code", "VatCode", |c: &mut Self, v| c.vat_code = v)
            .text("phone", "Tel", |c: &mut Self, v| c.phone = v)
            .text("fax", "Fax", |c: &mut Self, v| c.fax = v)
            .text("email", "Email", |c: &mut Self, v| c.email = v)
            .text("homepage", "HomePage", |c: &mut Self, v| c.homepage = v)
    }
}
