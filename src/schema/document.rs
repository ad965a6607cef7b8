//! Documents and their payment, delivery, transport, customer and notes
//! fields.
//!
//! Delivery, transport, customer and notes data live as flat `<Delivery*>`,
//! `<Transport*>`, `<Customer*>`, ... children of `<Document>`; they are
//! grouped into their own structs through group mappings, without an extra
//! XML nesting level.

use serde::Serialize;

use crate::{Float, FromXml, Mapping};

use super::Product;

/// Shipping address fields (`<Delivery*>` elements).
///
/// Specified only when the shipping address differs from the customer
/// address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DeliveryInfo {
    /// Recipient name or business name.
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub province: String,
    pub country: String,
}

impl FromXml for DeliveryInfo {
    // Group-only type: its fields are read from the containing element.
    const TAG: &'static str = "";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("name", "DeliveryName", |d: &mut Self, v| d.name = v)
            .text("address", "DeliveryAddress", |d: &mut Self, v| {
                d.address = v;
            })
            .text("postcode", "DeliveryPostcode", |d: &mut Self, v| {
                d.postcode = v;
            })
            .text("city", "DeliveryCity", |d: &mut Self, v| d.city = v)
            .text("province", "DeliveryProvince", |d: &mut Self, v| {
                d.province = v;
            })
            .text("country", "DeliveryCountry", |d: &mut Self, v| {
                d.country = v;
            })
    }
}

/// Transport fields (`<Transport*>`, `<Carrier>`, `<TrackingNumber>`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TransportInfo {
    /// Carrier name.
    pub carrier: String,
    /// Transport reason (causale trasporto).
    pub reason: String,
    /// Appearance of the goods (aspetto delle merci).
    pub goods_appearance: String,
    /// Number of packages.
    pub pieces: i64,
    pub date_time: String,
    pub shipment_terms: String,
    /// Transported weight, verbatim (unit is part of the text).
    pub weight: String,
    pub tracking_number: String,
}

impl FromXml for TransportInfo {
    const TAG: &'static str = "TransportInfo";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("carrier", "Carrier", |t: &mut Self, v| t.carrier = v)
            .text("reason", "TransportReason", |t: &mut Self, v| t.reason = v)
            .text("goods_appearance", "GoodsAppearance", |t: &mut Self, v| {
                t.goods_appearance = v;
            })
            .int("pieces", "NumOfPieces", |t: &mut Self, v| t.pieces = v)
            .text("date_time", "TransportDateTime", |t: &mut Self, v| {
                t.date_time = v;
            })
            .text("shipment_terms", "ShipmentTerms", |t: &mut Self, v| {
                t.shipment_terms = v;
            })
            .text("weight", "TransportedWeight", |t: &mut Self, v| {
                t.weight = v;
            })
            .text("tracking_number", "TrackingNumber", |t: &mut Self, v| {
                t.tracking_number = v;
            })
    }
}

/// Document header fields (`<Customer*>` elements).
///
/// For supply documents (supplier order, goods arrival, ...) these carry the
/// supplier's data despite the `Customer` tag prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CustomerInfo {
    /// Customer code in the application's registry.
    pub code: String,
    /// E-commerce login of the customer.
    pub web_login: String,
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub fiscal_code: String,
    pub vat_code: String,
    /// Electronic invoicing destination code (SDI).
    pub e_invoice_dest_code: String,
    pub telephone: String,
    pub mobile_phone: String,
    pub fax: String,
    pub email: String,
    /// Certified e-mail (PEC).
    pub pec: String,
    pub reference: String,
}

impl FromXml for CustomerInfo {
    const TAG: &'static str = "CustomerInfo";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("code", "CustomerCode", |c: &mut Self, v| c.code = v)
            .text("web_login", "CustomerWebLogin", |c: &mut Self, v| {
                c.web_login = v;
            })
            .text("name", "CustomerName", |c: &mut Self, v| c.name = v)
            .text("address", "CustomerAddress", |c: &mut Self, v| {
                c.address = v;
            })
            .text("postcode", "CustomerPostcode", |c: &mut Self, v| {
                c.postcode = v;
            })
            .text("city", "CustomerCity", |c: &mut Self, v| c.city = v)
            .text("province", "CustomerProvince", |c: &mut Self, v| {
                c.province = v;
            })
            .text("country", "CustomerCountry", |c: &mut Self, v| {
                c.country = v;
            })
            .text("fiscal_code", "CustomerFiscalCode", |c: &mut Self, v| {
                c.fiscal_code = v;
            })
            .text("vat_code", "CustomerVatCode", |c: &mut Self, v| {
                c.vat_code = v;
            })
            .text(
                "e_invoice_dest_code",
                "CustomerEInvoiceDestCode",
                |c: &mut Self, v| c.e_invoice_dest_code = v,
            )
            .text("telephone", "CustomerTel", |c: &mut Self, v| {
                c.telephone = v;
            })
            .text("mobile_phone", "CustomerCellPhone", |c: &mut Self, v| {
                c.mobile_phone = v;
            })
            .text("fax", "CustomerFax", |c: &mut Self, v| c.fax = v)
            .text("email", "CustomerEmail", |c: &mut Self, v| c.email = v)
            .text("pec", "CustomerPec", |c: &mut Self, v| c.pec = v)
            .text("reference", "CustomerReference", |c: &mut Self, v| {
                c.reference = v;
            })
    }
}

/// Notes and custom fields of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentNotes {
    /// Internal comment, not printed on the document.
    pub internal_comment: String,
    pub custom1: String,
    pub custom2: String,
    pub custom3: String,
    pub custom4: String,
    /// Note printed at the bottom of the document.
    pub foot_note: String,
}

impl FromXml for DocumentNotes {
    const TAG: &'static str = "DocumentNotes";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("internal_comment", "InternalComment", |n: &mut Self, v| {
                n.internal_comment = v;
            })
            .text("custom1", "CustomField1", |n: &mut Self, v| n.custom1 = v)
            .text("custom2", "CustomField2", |n: &mut Self, v| n.custom2 = v)
            .text("custom3", "CustomField3", |n: &mut Self, v| n.custom3 = v)
            .text("custom4", "CustomField4", |n: &mut Self, v| n.custom4 = v)
            .text("foot_note", "FootNotes", |n: &mut Self, v| n.foot_note = v)
    }
}

/// One payment row (`<Payment>` elements inside `<Payments>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Payment {
    /// Whether the payment refers to an advance.
    pub advance: bool,
    /// Amount, in the document currency.
    pub amount: Float,
    /// Due date.
    pub date: String,
    /// Whether the payment has been settled.
    pub paid: bool,
}

impl FromXml for Payment {
    const TAG: &'static str = "Payment";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .bool("advance", "Advance", |p: &mut Self, v| p.advance = v)
            .float("amount", "Amount", |p: &mut Self, v| p.amount = Float(v))
            .text("date", "Date", |p: &mut Self, v| p.date = v)
            .bool("paid", "Paid", |p: &mut Self, v| p.paid = v)
    }
}

/// One document (`<Document>` elements inside `<Documents>`).
///
/// Reference: <https://www.danea.it/software/easyfatt/xml/documenti/#section-124>
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Document {
    /// Document date.
    pub date: String,
    /// Document number.
    pub number: String,
    /// Product rows, in document order.
    pub rows: Vec<Product>,
    /// Payment rows, in document order.
    pub payments: Vec<Payment>,
    /// Numbering series (e.g. `/A`). Absent when the default series is used.
    pub numbering: Option<String>,
    /// Document type code (e.g. `I` invoice, `C` order confirmation).
    pub doc_type: Option<String>,
    /// Shipping address fields.
    pub delivery: DeliveryInfo,
    /// Transport fields.
    pub transport: TransportInfo,
    /// Header (customer/supplier) fields.
    pub customer: CustomerInfo,
    /// Notes and custom fields.
    pub notes: DocumentNotes,
}

impl FromXml for Document {
    const TAG: &'static str = "Document";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("date", "Date", |d: &mut Self, v| d.date = v)
            .text("number", "Number", |d: &mut Self, v| d.number = v)
            .list("rows", "Rows", |d: &mut Self, v| d.rows = v)
            .list("payments", "Payments", |d: &mut Self, v| d.payments = v)
            .text("numbering", "Numbering", |d: &mut Self, v| {
                d.numbering = Some(v);
            })
            .text("doc_type", "DocumentType", |d: &mut Self, v| {
                d.doc_type = Some(v);
            })
            .group("delivery", |d: &mut Self, v| d.delivery = v)
            .group("transport", |d: &mut Self, v| d.transport = v)
            .group("customer", |d: &mut Self, v| d.customer = v)
            .group("notes", |d: &mut Self, v| d.notes = v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_payments_in_order() {
        let document = Document::from_xml(
            r#"<Document>
                 <Number>12</Number>
                 <Payments>
                   <Payment><Date>2023-01-31</Date><Amount>100.0</Amount></Payment>
                   <Payment><Date>2023-02-28</Date><Amount>50.0</Amount><Paid>true</Paid></Payment>
                 </Payments>
               </Document>"#,
        )
        .unwrap();
        assert_eq!(document.payments.len(), 2);
        assert_eq!(document.payments[0].date, "2023-01-31");
        assert_eq!(document.payments[1].amount, Float(50.0));
        assert!(document.payments[1].paid);
        assert!(!document.payments[0].paid);
    }

    #[test]
    fn test_groups_read_from_document_element() {
        let document = Document::from_xml(
            r#"<Document>
                 <Number>12</Number>
                 <DeliveryName>Mario Rossi</DeliveryName>
                 <DeliveryCity>Roma</DeliveryCity>
                 <Carrier>SDA</Carrier>
                 <CustomerName>Mario Rossi</CustomerName>
                 <InternalComment>fragile</InternalComment>
               </Document>"#,
        )
        .unwrap();
        assert_eq!(document.delivery.name, "Mario Rossi");
        assert_eq!(document.delivery.city, "Roma");
        assert_eq!(document.transport.carrier, "SDA");
        assert_eq!(document.customer.name, "Mario Rossi");
        assert_eq!(document.notes.internal_comment, "fragile");
    }

    #[test]
    fn test_optional_scalars_stay_none_when_absent() {
        let document = Document::from_xml("<Document><Number>1</Number></Document>").unwrap();
        assert_eq!(document.numbering, None);
        assert_eq!(document.doc_type, None);
    }

    #[test]
    fn test_group_tags_are_not_untracked() {
        let expected = Document::mapping().expected_tags();
        for tag in ["DeliveryName", "Carrier", "CustomerEmail", "FootNotes"] {
            assert!(expected.contains(&tag.to_string()), "missing {tag}");
        }
    }
}
