//! End-to-end decoding tests against a realistic `.DefXml` export.

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use easyfatt_xml::audit::untracked_children;
use easyfatt_xml::schema::{Document, EasyfattDocuments, Product};
use easyfatt_xml::{DecodeError, Float, FromXml};

const SAMPLE_DEFXML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EasyfattDocuments AppVersion="2" Creator="Danea Easyfatt Enterprise 2023" CreatorUrl="https://www.danea.it/software/easyfatt">
  <Company>
    <Name>Arredufficio Srl</Name>
    <Address>Via Roma 1</Address>
    <Postcode>20121</Postcode>
    <City>Milano</City>
    <Province>MI</Province>
    <Country>Italia</Country>
    <FiscalCode>01234567890</FiscalCode>
    <VatCode>01234567890</VatCode>
    <Tel>02 1234567</Tel>
    <Email>info@arredufficio.example</Email>
  </Company>
  <Documents>
    <Document>
      <DocumentType>I</DocumentType>
      <Date>2023-03-15</Date>
      <Number>42</Number>
      <Numbering>/A</Numbering>
      <CustomerCode>C001</CustomerCode>
      <CustomerName>Mario Rossi</CustomerName>
      <CustomerCity>Roma</CustomerCity>
      <DeliveryName>Mario Rossi</DeliveryName>
      <DeliveryAddress>Via Appia 10</DeliveryAddress>
      <DeliveryCity>Roma</DeliveryCity>
      <Carrier>SDA</Carrier>
      <NumOfPieces>3</NumOfPieces>
      <Rows>
        <Row>
          <Code>0011</Code>
          <Description>Scrivania operativa</Description>
          <Qty>2</Qty>
          <Um>pz</Um>
          <Price>199.9</Price>
          <VatCode Perc="22" Class="Imponibile">22</VatCode>
          <Total>399.8</Total>
        </Row>
        <Row>
          <Code>0012</Code>
          <Description>Sedia ergonomica</Description>
          <VatCode Perc="22">22</VatCode>
        </Row>
      </Rows>
      <Payments>
        <Payment>
          <Advance>true</Advance>
          <Date>2023-03-15</Date>
          <Amount>100.0</Amount>
          <Paid>true</Paid>
        </Payment>
        <Payment>
          <Date>2023-04-30</Date>
          <Amount>299.8</Amount>
        </Payment>
      </Payments>
      <InternalComment>consegna al piano</InternalComment>
    </Document>
  </Documents>
</EasyfattDocuments>"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_decode_full_export() {
    init_tracing();
    let file = EasyfattDocuments::from_xml(SAMPLE_DEFXML).unwrap();

    assert_eq!(file.protocol_version, "2");
    assert_eq!(file.creator_name, "Danea Easyfatt Enterprise 2023");

    let company = file.company.as_ref().unwrap();
    assert_eq!(company.name, "Arredufficio Srl");
    assert_eq!(company.city, "Milano");

    assert_eq!(file.documents.len(), 1);
    let document = &file.documents[0];
    assert_eq!(document.doc_type.as_deref(), Some("I"));
    assert_eq!(document.number, "42");
    assert_eq!(document.numbering.as_deref(), Some("/A"));

    // Groups read from the same <Document> element.
    assert_eq!(document.customer.code, "C001");
    assert_eq!(document.delivery.address, "Via Appia 10");
    assert_eq!(document.transport.carrier, "SDA");
    assert_eq!(document.transport.pieces, 3);
    assert_eq!(document.notes.internal_comment, "consegna al piano");

    // Rows in document order, with nested VAT info.
    assert_eq!(document.rows.len(), 2);
    let desk = &document.rows[0];
    assert_eq!(desk.quantity, 2);
    assert_eq!(desk.price, Float(199.9));
    assert_eq!(desk.vat_info.as_ref().unwrap().vat_class, "Imponibile");

    // Second row omits Qty: zero, with defaults intact.
    let chair = &document.rows[1];
    assert_eq!(chair.quantity, 0);
    assert_eq!(chair.expiry_date, "2999-12-31");
    assert_eq!(chair.vat_info.as_ref().unwrap().percentage, "22");

    // Payments in document order; omitted booleans are false.
    assert_eq!(document.payments.len(), 2);
    assert!(document.payments[0].advance);
    assert!(document.payments[0].paid);
    assert!(!document.payments[1].advance);
    assert!(!document.payments[1].paid);
    assert_eq!(document.payments[1].amount, Float(299.8));
}

#[test]
fn test_independent_decodes_are_equal_and_hash_identically() {
    let first = EasyfattDocuments::from_xml(SAMPLE_DEFXML).unwrap();
    let second = EasyfattDocuments::from_xml(SAMPLE_DEFXML).unwrap();
    assert_eq!(first, second);

    let mut keys = HashSet::new();
    keys.insert(first.clone());
    assert!(keys.contains(&second));

    // Mutating one mapped attribute breaks equality.
    let mut mutated = second;
    mutated.documents[0].number = "43".to_string();
    assert_ne!(first, mutated);
    assert!(!keys.contains(&mutated));
}

#[test]
fn test_unexpected_child_is_reported_but_decode_succeeds() {
    let xml = r#"<Document>
        <Number>7</Number>
        <Foo/>
        <Date>2023-01-01</Date>
    </Document>"#;

    let document = Document::from_xml(xml).unwrap();
    assert_eq!(document.number, "7");
    assert_eq!(document.date, "2023-01-01");

    let doc = roxmltree::Document::parse(xml).unwrap();
    let expected = Document::mapping().expected_tags();
    let report = untracked_children(doc.root_element(), &expected);
    assert_eq!(report, vec!["Foo"]);
}

#[test]
fn test_delivery_group_tags_are_not_flagged() {
    let xml = r#"<Document><DeliveryName>X</DeliveryName></Document>"#;

    let document = Document::from_xml(xml).unwrap();
    assert_eq!(document.delivery.name, "X");

    let doc = roxmltree::Document::parse(xml).unwrap();
    let expected = Document::mapping().expected_tags();
    let report = untracked_children(doc.root_element(), &expected);
    assert!(report.is_empty(), "unexpected report: {report:?}");
}

#[test]
fn test_row_conversion_error_aborts_document_decode() {
    let xml = r#"<Document>
        <Number>7</Number>
        <Rows>
            <Row><Qty>two</Qty></Row>
        </Rows>
    </Document>"#;

    let err = Document::from_xml(xml).unwrap_err();
    match err {
        DecodeError::TypeConversion {
            type_name,
            field,
            raw,
            ..
        } => {
            assert_eq!(type_name, "Product");
            assert_eq!(field, "quantity");
            assert_eq!(raw, "two");
        }
        other => panic!("expected TypeConversion, got {other:?}"),
    }
}

#[test]
fn test_row_with_omitted_qty_and_vat_attributes() {
    let row = Product::from_xml(r#"<Row><VatCode Perc="20">20</VatCode></Row>"#).unwrap();
    assert_eq!(row.quantity, 0);

    let vat = row.vat_info.unwrap();
    assert_eq!(vat.percentage, "20");
    assert_eq!(vat.code, "20");
}

#[test]
fn test_decoded_document_serializes() {
    let file = EasyfattDocuments::from_xml(SAMPLE_DEFXML).unwrap();
    let json = serde_json::to_value(&file).unwrap();
    assert_eq!(json["documents"][0]["number"], "42");
    assert_eq!(json["company"]["name"], "Arredufficio Srl");
}
