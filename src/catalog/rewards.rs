//! Rewards that can be bought with points

use crate::validation::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Food,
    Beverage,
    Shopping,
    Entertainment,
}

impl RewardCategory {
    pub fn text(&self) -> &'static str {
        match self {
            RewardCategory::Food => "음식",
            RewardCategory::Beverage => "음료",
            RewardCategory::Shopping => "쇼핑",
            RewardCategory::Entertainment => "엔터테인먼트",
        }
    }
}

/// Error returned when parsing an unknown reward category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reward category '{0}' (expected food, beverage, shopping or entertainment)")]
pub struct UnknownCategory(pub String);

impl FromStr for RewardCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(RewardCategory::Food),
            "beverage" => Ok(RewardCategory::Beverage),
            "shopping" => Ok(RewardCategory::Shopping),
            "entertainment" => Ok(RewardCategory::Entertainment),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A coupon or voucher in the reward store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub points_cost: u32,
    pub category: RewardCategory,
    pub brand: String,
    pub is_available: bool,
    /// Remaining units; `None` means unlimited
    pub stock: Option<u32>,
}

impl RewardItem {
    fn new(id: &str, name: &str, description: &str, points_cost: u32, category: RewardCategory, brand: &str, stock: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            points_cost,
            category,
            brand: brand.to_string(),
            is_available: true,
            stock: Some(stock),
        }
    }

    /// Available and not sold out
    pub fn can_redeem(&self) -> bool {
        self.is_available && self.stock.map_or(true, |s| s > 0)
    }
}

/// The reward store inventory
#[derive(Debug, Clone, Default)]
pub struct RewardCatalog {
    items: Vec<RewardItem>,
}

impl RewardCatalog {
    pub fn new(items: Vec<RewardItem>) -> Self {
        Self { items }
    }

    /// The default reward store
    pub fn standard() -> Self {
        Self::new(vec![
            RewardItem::new("starbucks-americano", "스타벅스 아메리카노", "스타벅스 아메리카노 Tall 사이즈 쿠폰", 500, RewardCategory::Beverage, "스타벅스", 100),
            RewardItem::new("starbucks-latte", "스타벅스 카페라떼", "스타벅스 카페라떼 Tall 사이즈 쿠폰", 600, RewardCategory::Beverage, "스타벅스", 50),
            RewardItem::new("gifticon-chicken", "치킨 기프티콘", "BBQ 황금올리브 치킨 쿠폰", 2000, RewardCategory::Food, "BBQ", 30),
            RewardItem::new("cu-voucher", "CU 편의점 상품권", "5,000원 상당 CU 편의점 상품권", 1000, RewardCategory::Shopping, "CU", 200),
            RewardItem::new("cgv-ticket", "CGV 영화 관람권", "CGV 영화 관람권 (2D 일반)", 1500, RewardCategory::Entertainment, "CGV", 20),
            RewardItem::new("baskin-robbins", "배스킨라빈스 아이스크림", "배스킨라빈스 파인트 아이스크림 쿠폰", 800, RewardCategory::Food, "배스킨라빈스", 60),
        ])
    }

    pub fn items(&self) -> &[RewardItem] {
        &self.items
    }

    /// Items in `category`, or every item when `None`
    pub fn filter(&self, category: Option<RewardCategory>) -> Vec<&RewardItem> {
        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect()
    }

    pub fn get(&self, id: &str) -> ReportResult<&RewardItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| ReportError::RewardNotFound { item_id: id.to_string() })
    }

    /// Look up an item that can currently be redeemed
    pub fn redeemable(&self, id: &str) -> ReportResult<&RewardItem> {
        let item = self.get(id)?;
        if !item.can_redeem() {
            return Err(ReportError::RewardUnavailable { item_id: id.to_string() });
        }
        Ok(item)
    }

    /// Take one unit out of stock
    pub fn take_one(&mut self, id: &str) -> ReportResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ReportError::RewardNotFound { item_id: id.to_string() })?;

        if !item.can_redeem() {
            return Err(ReportError::RewardUnavailable { item_id: id.to_string() });
        }
        if let Some(stock) = item.stock.as_mut() {
            *stock -= 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = RewardCatalog::standard();
        assert_eq!(catalog.items().len(), 6);
        let chicken = catalog.get("gifticon-chicken").unwrap();
        assert_eq!(chicken.points_cost, 2000);
        assert_eq!(chicken.category.text(), "음식");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("food".parse::<RewardCategory>(), Ok(RewardCategory::Food));
        assert_eq!(" Entertainment ".parse::<RewardCategory>(), Ok(RewardCategory::Entertainment));
        assert_eq!("toys".parse::<RewardCategory>(), Err(UnknownCategory("toys".to_string())));
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = RewardCatalog::standard();
        assert_eq!(catalog.filter(None).len(), 6);
        assert_eq!(catalog.filter(Some(RewardCategory::Beverage)).len(), 2);
        assert_eq!(catalog.filter(Some(RewardCategory::Food)).len(), 2);
        assert_eq!(catalog.filter(Some(RewardCategory::Entertainment)).len(), 1);
    }

    #[test]
    fn test_take_one_until_sold_out() {
        let item = RewardItem::new("x", "X", "x", 10, RewardCategory::Shopping, "X", 2);
        let mut catalog = RewardCatalog::new(vec![item]);

        catalog.take_one("x").unwrap();
        catalog.take_one("x").unwrap();
        assert_eq!(catalog.get("x").unwrap().stock, Some(0));
        assert_eq!(
            catalog.take_one("x"),
            Err(ReportError::RewardUnavailable { item_id: "x".to_string() })
        );
        assert!(catalog.redeemable("x").is_err());
    }

    #[test]
    fn test_unlimited_stock() {
        let mut item = RewardItem::new("u", "U", "u", 10, RewardCategory::Food, "U", 0);
        item.stock = None;
        let mut catalog = RewardCatalog::new(vec![item]);
        for _ in 0..5 {
            catalog.take_one("u").unwrap();
        }
        assert_eq!(catalog.get("u").unwrap().stock, None);
    }

    #[test]
    fn test_disabled_item_unavailable() {
        let mut item = RewardItem::new("d", "D", "d", 10, RewardCategory::Food, "D", 5);
        item.is_available = false;
        let catalog = RewardCatalog::new(vec![item]);
        assert!(matches!(catalog.redeemable("d"), Err(ReportError::RewardUnavailable { .. })));
        assert!(matches!(catalog.get("missing"), Err(ReportError::RewardNotFound { .. })));
    }
}
