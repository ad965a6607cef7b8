//! Document row items.

use serde::Serialize;

use crate::{Float, FromXml, Mapping};

use super::VatCode;

/// One product row of a document (`<Row>` elements inside `<Rows>`).
///
/// Reference: <https://www.danea.it/software/easyfatt/xml/documenti/>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Product {
    /// Product code, as listed in the application's product table.
    pub code: String,
    /// Supplier's own code for the product.
    pub supplier_code: String,
    /// Row description.
    pub description: String,
    /// Quantity. Omitted in the XML when zero.
    pub quantity: i64,
    /// Unit of measure (e.g. "pz").
    pub unit_measure: String,
    pub size: String,
    pub color: String,
    pub lot: String,
    /// Lot expiry date; Easyfatt writes `2999-12-31` for "never".
    pub expiry_date: String,
    pub serial: String,
    /// Unit price.
    pub price: Float,
    /// Discount expression as written in the document (e.g. "10+5%").
    pub discounts: String,
    /// RAEE eco fee per unit.
    pub eco_fee: Float,
    /// VAT applied to the row.
    pub vat_info: Option<VatCode>,
    /// Row total, kept verbatim: Easyfatt formats it per document currency.
    pub total: String,
    /// Whether the row is subject to withholding tax. Absent means unset.
    pub withholding_tax: Option<bool>,
    /// Whether the row moves stock. Absent means unset.
    pub stock: Option<bool>,
    pub notes: String,
    /// Agent commission percentage.
    pub commission_percentage: Float,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            code: String::new(),
            supplier_code: String::new(),
            description: String::new(),
            quantity: 0,
            unit_measure: String::new(),
            size: String::new(),
            color: String::new(),
            lot: String::new(),
            expiry_date: "2999-12-31".to_string(),
            serial: String::new(),
            price: Float::default(),
            discounts: String::new(),
            eco_fee: Float::default(),
            vat_info: None,
            total: String::new(),
            withholding_tax: None,
            stock: None,
            notes: String::new(),
            commission_percentage: Float::default(),
        }
    }
}

impl FromXml for Product {
    const TAG: &'static str = "Row";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("code", "Code", |p: &mut Self, v| p.code = v)
            .text("supplier_code", "SupplierCode", |p: &mut Self, v| {
                p.supplier_code = v;
            })
            .text("description", "Description", |p: &mut Self, v| {
                p.description = v;
            })
            .int("quantity", "Qty", |p: &mut Self, v| p.quantity = v)
            .text("unit_measure", "Um", |p: &mut Self, v| p.unit_measure = v)
            .text("size", "Size", |p: &mut Self, v| p.size = v)
            .text("color", "Color", |p: &mut Self, v| p.color = v)
            .text("lot", "Lot", |p: &mut Self, v| p.lot = v)
            .text("expiry_date", "ExpiryDate", |p: &mut Self, v| {
                p.expiry_date = v;
            })
            .text("serial", "Serial", |p: &mut Self, v| p.serial = v)
            .float("price", "Price", |p: &mut Self, v| p.price = Float(v))
            .text("discounts", "Discounts", |p: &mut Self, v| p.discounts = v)
            .float("eco_fee", "EcoFee", |p: &mut Self, v| p.eco_fee = Float(v))
            .single_at("vat_info", "VatCode", |p: &mut Self, v| {
                p.vat_info = Some(v);
            })
            .text("total", "Total", |p: &mut Self, v| p.total = v)
            .bool("withholding_tax", "WithholdingTax", |p: &mut Self, v| {
                p.withholding_tax = Some(v);
            })
            .bool("stock", "Stock", |p: &mut Self, v| p.stock = Some(v))
            .text("notes", "Notes", |p: &mut Self, v| p.notes = v)
            .float("commission_percentage", "CommissionPerc", |p: &mut Self, v| {
                p.commission_percentage = Float(v);
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_row_with_vat() {
        let row = Product::from_xml(
            r#"<Row>
                 <Code>0011</Code>
                 <Description>Scrivania</Description>
                 <Qty>2</Qty>
                 <Price>199.9</Price>
                 <VatCode Perc="22">22</VatCode>
               </Row>"#,
        )
        .unwrap();
        assert_eq!(row.code, "0011");
        assert_eq!(row.quantity, 2);
        assert_eq!(row.price, Float(199.9));

        let vat = row.vat_info.unwrap();
        assert_eq!(vat.code, "22");
        assert_eq!(vat.percentage, "22");
    }

    #[test]
    fn test_omitted_qty_is_zero_and_expiry_keeps_default() {
        let row = Product::from_xml("<Row><Code>X</Code></Row>").unwrap();
        assert_eq!(row.quantity, 0);
        assert_eq!(row.expiry_date, "2999-12-31");
        assert_eq!(row.vat_info, None);
        assert_eq!(row.withholding_tax, None);
    }

    #[test]
    fn test_optional_bool_is_set_when_present() {
        let row = Product::from_xml("<Row><Stock>true</Stock></Row>").unwrap();
        assert_eq!(row.stock, Some(true));
    }
}
