//! Core types shared between the lookup client and the renderer

use serde::Deserialize;

/// Payload returned by both lookup service endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub data: Vec<DomainRecord>,
}

impl LookupResponse {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Records that can be registered right now
    pub fn available(&self) -> impl Iterator<Item = &DomainRecord> {
        self.data.iter().filter(|r| r.available)
    }
}

/// One domain as reported by the lookup service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DomainRecord {
    #[serde(default)]
    pub available: bool,
    pub domain: String,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub prices: Prices,
    /// Why the domain cannot be registered; the service sends "" when there is none
    #[serde(default)]
    pub reason: Option<String>,
}

impl DomainRecord {
    /// One-year registration price in the smallest currency unit
    pub fn yearly_price(&self) -> i64 {
        self.prices.register.one_year
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref().filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub register: RegisterPrices,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterPrices {
    #[serde(rename = "1y", default)]
    pub one_year: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "available": true,
            "domain": "example.com",
            "on_sale": true,
            "premium": false,
            "prices": { "register": { "1y": 100000 } },
            "reason": ""
        }"#;

        let record: DomainRecord = serde_json::from_str(json).unwrap();
        assert!(record.available);
        assert_eq!(record.domain, "example.com");
        assert!(record.on_sale);
        assert!(!record.premium);
        assert_eq!(record.yearly_price(), 100000);
        assert_eq!(record.reason(), None);
    }

    #[test]
    fn test_decode_unavailable_with_reason() {
        let json = r#"{
            "available": false,
            "domain": "example.org",
            "reason": "Already registered"
        }"#;

        let record: DomainRecord = serde_json::from_str(json).unwrap();
        assert!(!record.available);
        assert_eq!(record.yearly_price(), 0);
        assert_eq!(record.reason(), Some("Already registered"));
    }

    #[test]
    fn test_decode_response() {
        let json = r#"{"data": [
            {"available": true, "domain": "example.com"},
            {"available": false, "domain": "example.org"}
        ]}"#;

        let response: LookupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[1].domain, "example.org");

        let available: Vec<_> = response.available().map(|r| r.domain.as_str()).collect();
        assert_eq!(available, vec!["example.com"]);
    }

    #[test]
    fn test_decode_empty_response() {
        let response: LookupResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.is_empty());

        let response: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(response.is_empty());
    }
}
