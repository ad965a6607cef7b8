//! Root element of a `.DefXml` file.

use serde::Serialize;

use crate::{FromXml, Mapping};

use super::{Company, Document};

/// The `<EasyfattDocuments>` root element.
///
/// # Example
///
/// ```
/// use easyfatt_xml::schema::EasyfattDocuments;
/// use easyfatt_xml::FromXml;
///
/// let xml = r#"
/// <EasyfattDocuments AppVersion="2" Creator="Danea Easyfatt">
///     <Company><Name>Arredufficio Srl</Name></Company>
///     <Documents>
///         <Document><Number>1</Number></Document>
///     </Documents>
/// </EasyfattDocuments>"#;
///
/// let file = EasyfattDocuments::from_xml(xml).unwrap();
/// assert_eq!(file.creator_name, "Danea Easyfatt");
/// assert_eq!(file.documents.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct EasyfattDocuments {
    /// Protocol version of the export, used by e-commerce integrations.
    pub protocol_version: String,
    /// Software or service that originated the file.
    pub creator_name: String,
    /// Web address of the originating software or service.
    pub creator_url: String,
    /// The company that originated the file.
    pub company: Option<Company>,
    /// Documents contained in the file, in document order.
    pub documents: Vec<Document>,
}

impl EasyfattDocuments {
    /// Append a document.
    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Set the originating company.
    pub fn set_company(&mut self, company: Company) {
        self.company = Some(company);
    }
}

impl FromXml for EasyfattDocuments {
    const TAG: &'static str = "EasyfattDocuments";

    fn mapping() -> Mapping<Self> {
        Mapping::new()
            .text("protocol_version", "@AppVersion", |r: &mut Self, v| {
                r.protocol_version = v;
            })
            .text("creator_name", "@Creator", |r: &mut Self, v| {
                r.creator_name = v;
            })
            .text("creator_url", "@CreatorUrl", |r: &mut Self, v| {
                r.creator_url = v;
            })
            .single("company", |r: &mut Self, v| r.company = Some(v))
            .list("documents", "Documents", |r: &mut Self, v| r.documents = v)
    }
}
