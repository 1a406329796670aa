use crate::core::ADMIN_NAMESPACE;
use crate::domain::common::Attr;

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AccountInfo in "account" {
        pub name: String = attr("name"),
        pub id: String = attr("id"),
        /// Set for accounts whose mail is hosted outside this deployment.
        pub is_external: Option<bool> = attr("isExternal"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

wire_object! {
    /// Class of service.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CosInfo in "cos" {
        pub id: String = attr("id"),
        pub name: String = attr("name"),
        pub is_default_cos: Option<bool> = attr("isDefaultCos"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DomainInfo in "domain" {
        pub name: String = attr("name"),
        pub id: String = attr("id"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllCosRequest in "GetAllCosRequest" in ADMIN_NAMESPACE {}
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllCosResponse in "GetAllCosResponse" in ADMIN_NAMESPACE {
        pub cos: Vec<CosInfo> = list("cos"),
    }
}

impl GetAllCosResponse {
    pub fn default_cos(&self) -> Option<&CosInfo> {
        self.cos.iter().find(|cos| cos.is_default_cos == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WireObject;

    #[test]
    fn test_is_default_cos_tri_state() {
        let xml = concat!(
            r#"<GetAllCosResponse xmlns="urn:zimbraAdmin">"#,
            r#"<cos id="c1" name="default" isDefaultCos="1"/>"#,
            r#"<cos id="c2" name="basic" isDefaultCos="0"/>"#,
            r#"<cos id="c3" name="legacy"/>"#,
            r#"</GetAllCosResponse>"#
        );
        let response = GetAllCosResponse::from_xml(xml).unwrap();
        let flags: Vec<_> = response.cos.iter().map(|c| c.is_default_cos).collect();
        assert_eq!(flags, [Some(true), Some(false), None]);
        assert_eq!(response.default_cos().map(|c| c.name.as_str()), Some("default"));
        assert_eq!(response.to_xml().unwrap(), xml);
    }

    #[test]
    fn test_account_json_keeps_boolean_type() {
        let account = AccountInfo {
            name: "ext@example.com".to_string(),
            id: "a-1".to_string(),
            is_external: Some(true),
            attrs: vec![Attr::new("zimbraAccountStatus", "active")],
        };
        let body = account.to_json();
        assert_eq!(body["isExternal"], true);
        assert_eq!(AccountInfo::from_json(&body).unwrap(), account);
    }

    #[test]
    fn test_domain_round_trip() {
        let domain = DomainInfo {
            name: "example.com".to_string(),
            id: "d-1".to_string(),
            attrs: vec![Attr::new("zimbraDomainStatus", "active")],
        };
        assert_eq!(DomainInfo::from_xml(&domain.to_xml().unwrap()).unwrap(), domain);
    }
}
