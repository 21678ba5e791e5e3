use serde::{Deserialize, Serialize};

/// Bank account printed for payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    pub bank: String,
    pub branch: String,
    pub account_no: String,
    pub ifsc: String,
}

impl Default for BankDetails {
    fn default() -> Self {
        Self {
            bank: "Punjab National Bank".to_string(),
            branch: "Sector-12, Noida".to_string(),
            account_no: "468002100001440".to_string(),
            ifsc: "PUNB0466000".to_string(),
        }
    }
}

/// Letterhead, bank and terms of the issuing business.
///
/// Every field falls back to the default profile when missing from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerProfile {
    pub name: String,
    pub address_lines: Vec<String>,
    pub phone: String,
    pub email: String,
    pub bank: BankDetails,
    pub terms: Vec<String>,
    pub signatory: String,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            name: "SAI BELTING".to_string(),
            address_lines: vec![
                "G-58, Site - B, UPSIDC Industrial Area,".to_string(),
                "Surajpur, Greater Noida (U.P.) - 201306".to_string(),
            ],
            phone: "+91-9818522978".to_string(),
            email: "saibelting35@gmail.com".to_string(),
            bank: BankDetails::default(),
            terms: vec![
                "Goods once sold will not be taken back.".to_string(),
                "Interest @ 18% per annum will be charged if the payment is not made within the stipulated time."
                    .to_string(),
                "Subject to G.B. Nagar jurisdiction only.".to_string(),
            ],
            signatory: "(Authorized Signatory)".to_string(),
        }
    }
}

impl SellerProfile {
    /// `"Phone: …, Email: …"` contact line.
    pub fn contact_line(&self) -> String {
        format!("Phone: {}, Email: {}", self.phone, self.email)
    }
}
