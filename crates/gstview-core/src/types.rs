//! Wire model for the GST lookup payload
//!
//! Field names mirror the lookup service's JSON exactly, including the
//! `fillingData` key (spelled that way on the wire) and the coexisting
//! `landMark`/`landmark` address fields. All values are opaque strings;
//! no semantic validation is applied.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level lookup response.
///
/// Both sections are required: a success response missing either one is a
/// malformed payload and the whole lookup is treated as failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstDetails {
    pub company_details: CompanyDetails,
    pub financial_details: FinancialDetails,
}

/// Company registration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub legal_name: String,
    pub trade_name: String,
    pub gst_number: String,
    pub registration_date: String,

    /// Registered addresses; the service may omit the field entirely.
    #[serde(default)]
    pub address: Vec<AddressEntry>,
}

/// One registered address together with its role ("nature").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressEntry {
    pub nature: String,
    pub address: Address,
}

/// Address record. `landMark` and `landmark` are distinct wire fields;
/// the latter carries coordinates in practice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub building_name: String,
    pub street: String,
    pub location: String,
    pub building_number: String,
    pub district: String,
    pub locality: String,
    pub locationality: String,
    pub pincode: String,
    pub land_mark: String,
    pub state_code: String,
    pub geo_code_level: String,
    pub floor_number: String,
    pub landmark: String,
}

/// Year-keyed filing map.
///
/// The map preserves the service's key order (an `IndexMap`, not sorted).
/// `fillingData` is required; a missing map means the payload is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialDetails {
    #[serde(rename = "fillingData")]
    pub filling_data: IndexMap<String, Vec<FilingRecord>>,
}

/// One return submission within a year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilingRecord {
    pub return_type: String,
    pub return_period: String,
    pub date_of_filing: String,
    pub status: String,
    pub arn: String,
}

impl GstDetails {
    /// Year keys in wire order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.financial_details.filling_data.keys().map(String::as_str)
    }

    /// Filings for a year, if the year exists in the record.
    pub fn filings(&self, year: &str) -> Option<&[FilingRecord]> {
        self.financial_details
            .filling_data
            .get(year)
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "company_details": {
            "legal_name": "BOSCH LIMITED",
            "trade_name": "BOSCH",
            "gst_number": "29AAACB2108H1ZI",
            "registration_date": "01/07/2017",
            "address": [
                {
                    "nature": "Principal Place of Business",
                    "address": {
                        "buildingName": "Tower A",
                        "street": "Hosur Road",
                        "location": "Adugodi",
                        "buildingNumber": "123",
                        "district": "Bengaluru Urban",
                        "locality": "Koramangala",
                        "locationality": "Urban",
                        "pincode": "560030",
                        "landMark": "Near Forum Mall",
                        "stateCode": "29",
                        "geoCodeLevel": "4",
                        "floorNumber": "3",
                        "landmark": "12.93,77.61"
                    }
                }
            ]
        },
        "financial_details": {
            "fillingData": {
                "2022-23": [
                    {
                        "returnType": "GSTR3B",
                        "returnPeriod": "042022",
                        "dateOfFiling": "20/05/2022",
                        "status": "Filed",
                        "arn": "AA290422123456A"
                    }
                ],
                "2021-22": []
            }
        }
    }"#;

    #[test]
    fn test_parse_full_payload() {
        let details: GstDetails = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(details.company_details.legal_name, "BOSCH LIMITED");
        assert_eq!(details.company_details.trade_name, "BOSCH");
        assert_eq!(details.company_details.gst_number, "29AAACB2108H1ZI");
        assert_eq!(details.company_details.registration_date, "01/07/2017");

        let entry = &details.company_details.address[0];
        assert_eq!(entry.nature, "Principal Place of Business");
        assert_eq!(entry.address.building_name, "Tower A");
        assert_eq!(entry.address.land_mark, "Near Forum Mall");
        assert_eq!(entry.address.landmark, "12.93,77.61");
        assert_eq!(entry.address.state_code, "29");
    }

    #[test]
    fn test_year_map_preserves_wire_order() {
        let details: GstDetails = serde_json::from_str(SAMPLE).unwrap();
        let years: Vec<&str> = details.years().collect();
        // "2022-23" appears first on the wire even though it sorts after "2021-22"
        assert_eq!(years, vec!["2022-23", "2021-22"]);
    }

    #[test]
    fn test_year_may_map_to_empty_list() {
        let details: GstDetails = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(details.filings("2021-22"), Some(&[][..]));
        assert_eq!(details.filings("2022-23").unwrap().len(), 1);
        assert_eq!(details.filings("1999-00"), None);
    }

    #[test]
    fn test_missing_address_defaults_to_empty() {
        let json = r#"{
            "company_details": {
                "legal_name": "X",
                "trade_name": "X",
                "gst_number": "X",
                "registration_date": "X"
            },
            "financial_details": { "fillingData": {} }
        }"#;
        let details: GstDetails = serde_json::from_str(json).unwrap();
        assert!(details.company_details.address.is_empty());
    }

    #[test]
    fn test_missing_financial_details_is_an_error() {
        let json = r#"{
            "company_details": {
                "legal_name": "X",
                "trade_name": "X",
                "gst_number": "X",
                "registration_date": "X"
            }
        }"#;
        assert!(serde_json::from_str::<GstDetails>(json).is_err());
    }

    #[test]
    fn test_missing_filling_data_is_an_error() {
        let json = r#"{
            "company_details": {
                "legal_name": "X",
                "trade_name": "X",
                "gst_number": "X",
                "registration_date": "X"
            },
            "financial_details": {}
        }"#;
        assert!(serde_json::from_str::<GstDetails>(json).is_err());
    }

    #[test]
    fn test_partial_address_fields_tolerated() {
        let json = r#"{"nature": "Additional", "address": {"street": "MG Road"}}"#;
        let entry: AddressEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.address.street, "MG Road");
        assert_eq!(entry.address.building_name, "");
    }

    #[test]
    fn test_filing_record_camel_case_fields() {
        let json = r#"{
            "returnType": "GSTR1",
            "returnPeriod": "052022",
            "dateOfFiling": "11/06/2022",
            "status": "Filed",
            "arn": "AB123"
        }"#;
        let filing: FilingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(filing.return_type, "GSTR1");
        assert_eq!(filing.return_period, "052022");
        assert_eq!(filing.date_of_filing, "11/06/2022");
        assert_eq!(filing.status, "Filed");
        assert_eq!(filing.arn, "AB123");
    }
}
