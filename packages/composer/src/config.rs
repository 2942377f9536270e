use crate::error::ComposerError;
use serde::{Deserialize, Serialize};

/// Copy and labels of the storefront. Every field has a default, so a
/// partial JSON object is enough to override a few of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub title: String,
    pub logo: String,
    pub search_placeholder: String,
    pub popular_heading: String,
    pub fab_text: String,
    pub fab_icon: String,
    pub modal_title: String,
    pub modal_content: String,
    pub modal_go_to_cart: String,
    pub cart_heading: String,
    pub checkout_label: String,
    pub checkout_message: String,

    /// Pill order. When absent the catalog's own categories are used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    pub profile: ProfileConfig,
}

impl StorefrontConfig {
    pub fn from_json(source: &str, path: &str) -> Result<Self, ComposerError> {
        serde_json::from_str(source).map_err(|source| ComposerError::Json {
            path: path.to_string(),
            source,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            title: "อร่อยเดลิเวอรี่".to_string(),
            logo: "🍜".to_string(),
            search_placeholder: "ค้นหาอาหาร...".to_string(),
            popular_heading: "เมนูยอดนิยม".to_string(),
            fab_text: "ดูตะกร้า".to_string(),
            fab_icon: "🛒".to_string(),
            modal_title: "สั่งอาหารด่วน".to_string(),
            modal_content: "เลือกเพิ่มอาหารโปรดของคุณอีกไหม?".to_string(),
            modal_go_to_cart: "ไปที่ตะกร้า".to_string(),
            cart_heading: "ตะกร้าของฉัน".to_string(),
            checkout_label: "ชำระเงิน".to_string(),
            checkout_message: "กำลังดำเนินการชำระเงิน...".to_string(),
            categories: None,
            profile: ProfileConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "สมชาย สบายดี".to_string(),
            email: "somchai@example.com".to_string(),
            phone: "099-999-9999".to_string(),
        }
    }
}
