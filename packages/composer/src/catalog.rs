use crate::error::ComposerError;
use aroi_components::{CatalogItem, Node, Price, RenderError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One dish as it appears in catalog data. Every field is optional here;
/// a record without a name becomes an inline error card. The price stays
/// raw JSON until the card is built, so one unreadable price cannot fail
/// the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogRecord {
    pub fn new(name: &str, price: u64, description: &str, image: &str, category: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(Value::String(Price::from_baht(price).to_string())),
            description: Some(description.to_string()),
            image: Some(image.to_string()),
            category: Some(category.to_string()),
        }
    }

    /// Category after defaults are applied.
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .unwrap_or(CatalogItem::DEFAULT_CATEGORY)
    }

    /// Card props for this record; fails when the name is missing. An
    /// unreadable price is logged and left at the card default.
    pub fn to_card(&self) -> Result<CatalogItem, RenderError> {
        let name = self
            .name
            .as_ref()
            .ok_or(RenderError::missing(CatalogItem::VARIANT, "name"))?;

        let mut item = CatalogItem::new(name.as_str());
        if let Some(price) = self.price.as_ref().and_then(|v| Price::read_or_warn(v, name)) {
            item = item.with_price(price);
        }
        if let Some(description) = &self.description {
            item = item.with_description(description.as_str());
        }
        if let Some(image) = &self.image {
            item = item.with_image(image.as_str());
        }
        if let Some(category) = &self.category {
            item = item.with_category(category.as_str());
        }
        Ok(item)
    }
}

/// Ordered, read-only list of dishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogRecord>) -> Self {
        Self { items }
    }

    pub fn from_json(source: &str, path: &str) -> Result<Self, ComposerError> {
        serde_json::from_str(source).map_err(|source| ComposerError::Json {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ComposerError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), items = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn items(&self) -> &[CatalogRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in &self.items {
            let category = item.category_or_default();
            if !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }

    /// One card per record, in catalog order.
    pub fn cards(&self) -> Vec<Node> {
        self.items
            .iter()
            .map(|record| Node::from(record.to_card()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CatalogRecord::new(
                "ข้าวผัดกระเพราหมูกรอบ",
                89,
                "กระเพราหมูกรอบใส่ไข่ดาว รสชาติจัดจ้าน",
                "https://img.wongnai.com/p/1920x0/2021/01/17/c95146b336274b0283b92b6943d289d8.jpg",
                "อาหารไทย",
            ),
            CatalogRecord::new(
                "ผัดไทยกุ้งสด",
                95,
                "ผัดไทยรสชาติดั้งเดิม กุ้งตัวใหญ่",
                "https://www.unileverfoodsolutions.co.th/dam/global-ufs/mcos/SEA/calcmenu/recipes/TH-recipes/pasta-dishes/%E0%B8%9C%E0%B8%B1%E0%B8%94%E0%B9%84%E0%B8%97%E0%B8%A2%E0%B8%81%E0%B8%B8%E0%B9%89%E0%B8%87%E0%B8%AA%E0%B8%94/%E0%B8%9C%E0%B8%B1%E0%B8%94%E0%B9%84%E0%B8%97%E0%B8%A2%E0%B8%81%E0%B8%B8%E0%B9%89%E0%B8%87%E0%B8%AA%E0%B8%94_header.jpg",
                "อาหารไทย",
            ),
            CatalogRecord::new(
                "เบอร์เกอร์เนื้อชีส",
                159,
                "เบอร์เกอร์เนื้อสองชั้นกับชีสละลาย",
                "https://www.unileverfoodsolutions.co.th/dam/global-ufs/mcos/SEA/calcmenu/recipes/TH-recipes/red-meats-&-red-meat-dishes/%E0%B8%8A%E0%B8%B5%E0%B8%AA%E0%B9%80%E0%B8%9A%E0%B8%AD%E0%B8%A3%E0%B9%8C%E0%B9%80%E0%B8%81%E0%B8%AD%E0%B8%A3%E0%B9%8C/%E0%B8%8A%E0%B8%B5%E0%B8%AA%E0%B9%80%E0%B8%9A%E0%B8%AD%E0%B8%A3%E0%B9%8C%E0%B9%80%E0%B8%81%E0%B8%AD%E0%B8%A3%E0%B9%8C_header.jpg",
                "ฟาสต์ฟู้ด",
            ),
            CatalogRecord::new(
                "พิซซ่าฮาวายเอียน",
                249,
                "พิซซ่าแฮมสับกับสับปะรด",
                "https://1376delivery.com/productimages/614_Hawaiian-.jpg",
                "ฟาสต์ฟู้ด",
            ),
            CatalogRecord::new(
                "ต้มยำกุ้งน้ำข้น",
                150,
                "ต้มยำกุ้งรสจัดเข้มข้น",
                "https://www.jmthaifood.com/wp-content/uploads/2020/01/%E0%B8%95%E0%B9%89%E0%B8%A1%E0%B8%A2%E0%B8%B3%E0%B8%81%E0%B8%B8%E0%B9%89%E0%B8%87-1.jpg",
                "อาหารไทย",
            ),
            CatalogRecord::new(
                "ชาไทยเย็น",
                45,
                "ชาไทยรสเข้มข้น หวานมัน",
                "https://www.aromathailand.com/wp-content/uploads/2023/09/Cover-Thai-tea.jpg",
                "เครื่องดื่ม",
            ),
            CatalogRecord::new(
                "มัทฉะลาเต้",
                55,
                "มัทฉะลาเต้รสชาเข้ม",
                "https://matchazuki.com/wp-content/uploads/2017/09/Matcha-Coffee.jpg",
                "เครื่องดื่ม",
            ),
            CatalogRecord::new(
                "ข้าวเหนียวมะม่วง",
                79,
                "ข้าวเหนียวกับมะม่วงสุก",
                "https://www.ofm.co.th/blog/wp-content/uploads/2022/04/%E0%B8%82%E0%B9%89%E0%B8%B2%E0%B8%A7%E0%B9%80%E0%B8%AB%E0%B8%99%E0%B8%B5%E0%B8%A2%E0%B8%A7%E0%B8%A1%E0%B8%B0%E0%B8%A1%E0%B9%88%E0%B8%A7%E0%B8%87-1.jpg",
                "ของหวาน",
            ),
        ])
    }
}
