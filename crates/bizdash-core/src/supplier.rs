//! 供應商模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 供應商
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// 供應商ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 聯絡人
    #[serde(default)]
    pub contact_person: Option<String>,

    /// 信箱
    #[serde(default)]
    pub email: Option<String>,

    /// 電話
    #[serde(default)]
    pub phone: Option<String>,

    /// 地址
    #[serde(default)]
    pub address: Option<String>,

    /// 備註
    #[serde(default)]
    pub notes: Option<String>,

    /// 最後交易時間
    #[serde(default)]
    pub last_transaction_date: Option<DateTime<Utc>>,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl Supplier {
    /// 創建新的供應商
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            contact_person: None,
            email: None,
            phone: None,
            address: None,
            notes: None,
            last_transaction_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 建構器模式：設置聯絡人
    pub fn with_contact(mut self, person: String, email: String) -> Self {
        self.contact_person = Some(person);
        self.email = Some(email);
        self
    }

    /// 建構器模式：設置最後交易時間
    pub fn with_last_transaction_date(mut self, date: DateTime<Utc>) -> Self {
        self.last_transaction_date = Some(date);
        self
    }

    /// 是否曾有交易
    pub fn has_transacted(&self) -> bool {
        self.last_transaction_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_supplier() {
        let supplier = Supplier::new("S1".to_string(), "Highland Roasters".to_string())
            .with_contact("Mina".to_string(), "mina@highland.example".to_string());

        assert_eq!(supplier.id, "S1");
        assert_eq!(supplier.contact_person.as_deref(), Some("Mina"));
        assert!(!supplier.has_transacted());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "S2",
            "name": "Valley Dairy",
            "lastTransactionDate": null,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }"#;

        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.name, "Valley Dairy");
        assert!(supplier.email.is_none());
        assert!(!supplier.has_transacted());
    }
}
